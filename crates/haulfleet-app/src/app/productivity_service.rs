//! Productivity use case

use haulfleet_domain::model::{CycleInput, ProductivityEstimate};
use haulfleet_domain::service::estimate;
use haulfleet_types::Result;
use tracing::{info, warn};

/// Estimate hourly throughput for one cycle submission
pub fn estimate_productivity(input: &CycleInput) -> Result<ProductivityEstimate> {
    if let Err(e) = input.validate() {
        warn!(error = %e, "cycle input rejected");
        return Err(e.into());
    }
    match estimate(input) {
        Ok(result) => {
            info!(
                cycle_minutes = result.total_cycle_minutes,
                tons_per_hour = result.tons_per_hour,
                "estimated productivity"
            );
            Ok(result)
        }
        Err(e) => {
            warn!(error = %e, "productivity estimate rejected");
            Err(e.into())
        }
    }
}
