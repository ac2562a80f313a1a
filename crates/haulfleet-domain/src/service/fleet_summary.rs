//! Fleet-level aggregation

use crate::model::{Fleet, FleetSummary, TruckMetrics};
use crate::service::availability::AvailabilityEngine;

/// Evaluate every truck in fleet order
pub fn evaluate_fleet(engine: &AvailabilityEngine, fleet: &Fleet) -> Vec<TruckMetrics> {
    fleet.trucks().iter().map(|t| engine.evaluate(t)).collect()
}

/// Simple means across trucks; `None` for an empty fleet
pub fn summarize(metrics: &[TruckMetrics]) -> Option<FleetSummary> {
    if metrics.is_empty() {
        return None;
    }
    let n = metrics.len() as f64;
    Some(FleetSummary {
        truck_count: metrics.len(),
        mean_df: metrics.iter().map(|m| m.df).sum::<f64>() / n,
        mean_utilization_pct: metrics.iter().map(|m| m.utilization_pct).sum::<f64>() / n,
        total_available_hours: metrics.iter().map(|m| m.available_hours).sum(),
        total_lost_hours: metrics.iter().map(|m| m.lost_hours).sum(),
    })
}
