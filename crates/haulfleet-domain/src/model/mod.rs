//! Domain model types

pub mod cycle;
pub mod duration_table;
pub mod fleet;
pub mod lost_time;
pub mod metrics;
pub mod truck_record;

pub use cycle::{CycleInput, HaulSegment, Leg, SegmentLegs};
pub use duration_table::{DurationTable, PreventiveDurations, StoppageDurations};
pub use fleet::{Fleet, RecordTemplate};
pub use lost_time::{LostTimeBreakdown, LostTimeCategory};
pub use metrics::{
    FleetSummary, ProductivityEstimate, SegmentTime, TruckMetrics, UtilizationBreakdown,
};
pub use truck_record::{truck_label, TruckField, TruckRecord};
