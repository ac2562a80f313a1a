//! Per-event duration tables used by the availability engine

use serde::{Deserialize, Serialize};

/// Downtime in hours per preventive service, by service interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreventiveDurations {
    pub service_250h: f64,
    pub service_500h: f64,
    pub service_1000h: f64,
    pub service_16000h: f64,
}

impl Default for PreventiveDurations {
    fn default() -> Self {
        Self {
            service_250h: 8.0,
            service_500h: 12.0,
            service_1000h: 16.0,
            service_16000h: 168.0,
        }
    }
}

/// Hours lost per stoppage event
///
/// Lunch and shift change are daily recurrences; the engine annualizes them.
/// Management guidance is a fixed allowance of `guidance_events_per_day`
/// events of `guidance_hours` every day of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoppageDurations {
    pub no_operator: f64,
    pub blast_stop: f64,
    pub weather_stop: f64,
    pub lunch: f64,
    pub shift_change: f64,
    pub guidance_events_per_day: f64,
    pub guidance_hours: f64,
}

impl Default for StoppageDurations {
    fn default() -> Self {
        Self {
            no_operator: 1.0,
            blast_stop: 2.0,
            weather_stop: 1.0,
            lunch: 1.0,
            shift_change: 0.08,
            guidance_events_per_day: 3.0,
            guidance_hours: 0.08,
        }
    }
}

/// Complete set of per-event durations
///
/// Loadable from TOML; omitted entries keep their defaults:
///
/// ```toml
/// [stoppage]
/// no_operator = 8.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationTable {
    pub preventive: PreventiveDurations,
    pub stoppage: StoppageDurations,
}
