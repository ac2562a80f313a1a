//! Haul fleet domain
//!
//! Truck records, the availability/utilization engine, the haul-cycle
//! productivity estimator, and the fleet repository seam.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::FleetRepository;
