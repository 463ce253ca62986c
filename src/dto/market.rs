//! DTO definitions for the simulated market chart.

use serde::Serialize;
use utoipa::ToSchema;

/// A generated market chart with its hidden outcome.
#[derive(Debug, Serialize, ToSchema)]
pub struct MarketChartResponse {
    /// Historical price points shown to the player.
    pub history: Vec<f64>,
    /// Points revealed after the player commits.
    pub reveal: Vec<f64>,
    /// Whether the price ends up going up.
    pub goes_up: bool,
    /// Satirical asset ticker.
    pub asset_name: String,
}
