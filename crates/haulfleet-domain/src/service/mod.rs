//! Domain services

pub mod availability;
pub mod fleet_summary;
pub mod productivity;
pub mod time;

pub use availability::{
    available_hours_from_df, physical_availability, utilization_from_hours, AvailabilityEngine,
};
pub use fleet_summary::{evaluate_fleet, summarize};
pub use productivity::{
    estimate, hourly_productivity, net_capacity, segment_cycle_time, total_cycle_time,
};
pub use time::CALENDAR_HOURS_PER_YEAR;
