//! Use cases

pub mod fleet_service;
pub mod productivity_service;
pub mod report;

pub use fleet_service::FleetService;
pub use productivity_service::estimate_productivity;
pub use report::FleetReport;
