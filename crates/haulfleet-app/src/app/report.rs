//! Fleet evaluation report

use chrono::{DateTime, Utc};
use haulfleet_domain::model::{FleetSummary, TruckMetrics};
use serde::{Deserialize, Serialize};

/// Per-truck metrics plus fleet means, as handed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetReport {
    pub generated_at: DateTime<Utc>,
    pub trucks: Vec<TruckMetrics>,
    /// `None` when the fleet is empty
    pub summary: Option<FleetSummary>,
}

impl FleetReport {
    /// `(truck, df)` pairs in fleet order, for availability charts
    pub fn df_series(&self) -> Vec<(&str, f64)> {
        self.trucks
            .iter()
            .map(|m| (m.truck.as_str(), m.df))
            .collect()
    }
}
