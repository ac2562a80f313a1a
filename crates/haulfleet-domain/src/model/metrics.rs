//! Calculation results

use serde::{Deserialize, Serialize};

use crate::model::{HaulSegment, LostTimeBreakdown};

/// Utilization and the hour figures it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtilizationBreakdown {
    /// Worked hours as a percentage of available hours
    pub utilization_pct: f64,
    pub lost_hours: f64,
    pub worked_hours: f64,
    pub available_hours: f64,
}

/// Every engine output for one truck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckMetrics {
    pub truck: String,
    /// Preventive plus corrective maintenance downtime
    pub stopped_hours: f64,
    /// Physical availability (DF), percent
    pub df: f64,
    pub available_hours: f64,
    pub lost_hours: f64,
    pub worked_hours: f64,
    pub utilization_pct: f64,
    pub lost_time_breakdown: LostTimeBreakdown,
}

/// Fleet-level means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub truck_count: usize,
    pub mean_df: f64,
    pub mean_utilization_pct: f64,
    pub total_available_hours: f64,
    pub total_lost_hours: f64,
}

/// Minutes spent on one segment, loaded and empty legs combined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentTime {
    pub segment: HaulSegment,
    pub loaded_minutes: f64,
    pub empty_minutes: f64,
}

impl SegmentTime {
    pub fn total_minutes(&self) -> f64 {
        self.loaded_minutes + self.empty_minutes
    }
}

/// Result of a haul-cycle productivity estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityEstimate {
    pub segments: Vec<SegmentTime>,
    pub total_cycle_minutes: f64,
    pub net_capacity_tons: f64,
    pub cycles_per_hour: f64,
    pub tons_per_hour: f64,
}
