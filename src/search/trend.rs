use crate::models::MarketPoint;
use serde::Serialize;

/// Summary of a rent trend series, in the order given
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    /// Percentage change from first to last point
    pub change_pct: f64,
}

impl MarketTrend {
    pub fn from_points(points: &[MarketPoint]) -> Option<Self> {
        let first = points.first()?.avg_price;
        let last = points.last()?.avg_price;
        let (min, max) = points
            .iter()
            .map(|p| p.avg_price)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        let change_pct = if first == 0.0 {
            0.0
        } else {
            (last - first) / first * 100.0
        };

        Some(Self {
            first,
            last,
            min,
            max,
            change_pct,
        })
    }
}
