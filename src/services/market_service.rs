//! Simulated market chart generation.
//!
//! Produces a fake asset chart with a hidden outcome: a 20-point random-walk
//! history shown to the player, and a reveal segment decided by a coin
//! weighted *against* the recent trend, so momentum-chasing is a trap more
//! often than not.

use rand::Rng;

use crate::dto::market::MarketChartResponse;

/// Points in the visible history.
const HISTORY_LEN: usize = 20;
/// Points revealed after the player commits (plus the pivot point).
const REVEAL_STEPS: usize = 5;
/// Chance that a strong trend actually continues.
const TREND_CONTINUATION_CHANCE: f64 = 0.45;
/// Price floor for history points.
const HISTORY_FLOOR: f64 = 10.0;
/// Price floor for reveal points.
const REVEAL_FLOOR: f64 = 5.0;

const ASSET_NAMES: &[&str] = &[
    "GREED/USD",
    "COPE/BTC",
    "FOMO.X",
    "REKT-ETF",
    "PUMP&DUMP",
    "BAGS.IO",
    "MOON/SOL",
    "RUG.PULL",
];

/// Generate a chart using the process-wide random source.
pub fn generate_chart() -> MarketChartResponse {
    generate_chart_with_rng(&mut rand::rng())
}

/// Generate a chart from an injected random source.
pub fn generate_chart_with_rng<R: Rng + ?Sized>(rng: &mut R) -> MarketChartResponse {
    let mut history = vec![100.0_f64];
    while history.len() < HISTORY_LEN {
        let mut change = rng.random_range(-8.0..8.0);
        if rng.random_bool(0.6) {
            change += rng.random_range(-2.0..2.0);
        }
        let next = (history.last().copied().unwrap_or(100.0) + change).max(HISTORY_FLOOR);
        history.push(next);
    }

    let last = history[HISTORY_LEN - 1];
    let recent_trend = last - history[HISTORY_LEN - 5];
    let goes_up = if recent_trend > 5.0 {
        // Was going up: continuation is the minority outcome.
        rng.random_bool(TREND_CONTINUATION_CHANCE)
    } else if recent_trend < -5.0 {
        // Was going down: same trap in the other direction.
        !rng.random_bool(TREND_CONTINUATION_CHANCE)
    } else {
        rng.random_bool(0.5)
    };

    let mut reveal = vec![last];
    for _ in 0..REVEAL_STEPS {
        let step = rng.random_range(1.0..8.0);
        let previous = reveal.last().copied().unwrap_or(last);
        let next = if goes_up {
            previous + step
        } else {
            (previous - step).max(REVEAL_FLOOR)
        };
        reveal.push(next);
    }

    MarketChartResponse {
        history: history.into_iter().map(round_cents).collect(),
        reveal: reveal.into_iter().map(round_cents).collect(),
        goes_up,
        asset_name: ASSET_NAMES[rng.random_range(0..ASSET_NAMES.len())].to_string(),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn chart_has_the_expected_shape() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let chart = generate_chart_with_rng(&mut rng);

            assert_eq!(chart.history.len(), HISTORY_LEN);
            assert_eq!(chart.reveal.len(), REVEAL_STEPS + 1);
            assert_eq!(chart.history[0], 100.0);
            // Reveal pivots off the last visible point.
            assert_eq!(chart.reveal[0], chart.history[HISTORY_LEN - 1]);
            assert!(chart.history.iter().all(|&p| p >= HISTORY_FLOOR));
            assert!(chart.reveal.iter().all(|&p| p >= REVEAL_FLOOR));
            assert!(ASSET_NAMES.contains(&chart.asset_name.as_str()));
        }
    }

    #[test]
    fn reveal_moves_in_the_decided_direction() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..100 {
            let chart = generate_chart_with_rng(&mut rng);
            let first = chart.reveal[0];
            let last = chart.reveal[chart.reveal.len() - 1];
            if chart.goes_up {
                assert!(last > first);
            } else {
                assert!(last <= first);
            }
        }
    }
}
