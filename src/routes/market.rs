use axum::{Json, Router, routing::get};

use crate::{dto::market::MarketChartResponse, services::market_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/api/market",
    tag = "market",
    responses((status = 200, description = "Generated market chart", body = MarketChartResponse))
)]
/// Return a freshly generated market chart with its hidden outcome.
pub async fn get_market_chart() -> Json<MarketChartResponse> {
    Json(market_service::generate_chart())
}

/// Configure the market routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/market", get(get_market_chart))
}
