//! Haul-cycle geometry and payload

use std::fmt;

use haulfleet_types::ValidationError;
use serde::{Deserialize, Serialize};

use crate::model::truck_record::{check_non_negative, check_range};

/// Road segment of a haul route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HaulSegment {
    Horizontal,
    Uphill,
    Downhill,
}

impl HaulSegment {
    pub const ALL: [HaulSegment; 3] = [
        HaulSegment::Horizontal,
        HaulSegment::Uphill,
        HaulSegment::Downhill,
    ];
}

impl fmt::Display for HaulSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaulSegment::Horizontal => write!(f, "horizontal"),
            HaulSegment::Uphill => write!(f, "uphill"),
            HaulSegment::Downhill => write!(f, "downhill"),
        }
    }
}

/// One direction of travel over a segment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Leg {
    /// Distance in meters
    #[serde(default)]
    pub distance_m: f64,
    /// Average speed in km/h
    #[serde(default)]
    pub speed_kmh: f64,
}

impl Leg {
    pub fn new(distance_m: f64, speed_kmh: f64) -> Self {
        Self {
            distance_m,
            speed_kmh,
        }
    }
}

/// Loaded (haul) and empty (return) legs of one segment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentLegs {
    #[serde(default)]
    pub loaded: Leg,
    #[serde(default)]
    pub empty: Leg,
}

/// Input for one productivity estimate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CycleInput {
    #[serde(default)]
    pub horizontal: SegmentLegs,
    #[serde(default)]
    pub uphill: SegmentLegs,
    #[serde(default)]
    pub downhill: SegmentLegs,
    /// Nominal payload in tonnes
    pub truck_capacity_tons: f64,
    /// Bucket fill factor percentage (0-100)
    pub fill_factor_pct: f64,
}

/// Field names reported for each leg distance
const DISTANCE_FIELDS: [(HaulSegment, &str, &str); 3] = [
    (
        HaulSegment::Horizontal,
        "horizontal.loaded.distance_m",
        "horizontal.empty.distance_m",
    ),
    (
        HaulSegment::Uphill,
        "uphill.loaded.distance_m",
        "uphill.empty.distance_m",
    ),
    (
        HaulSegment::Downhill,
        "downhill.loaded.distance_m",
        "downhill.empty.distance_m",
    ),
];

impl CycleInput {
    /// Check distances, capacity and fill factor.
    ///
    /// Speeds are checked by the estimator, only for legs that are driven.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (segment, loaded_field, empty_field) in DISTANCE_FIELDS {
            let legs = self.segment(segment);
            check_non_negative(loaded_field, legs.loaded.distance_m)?;
            check_non_negative(empty_field, legs.empty.distance_m)?;
        }
        check_non_negative("truck_capacity_tons", self.truck_capacity_tons)?;
        check_range("fill_factor_pct", self.fill_factor_pct, 0.0, 100.0)?;
        Ok(())
    }

    pub fn segment(&self, segment: HaulSegment) -> &SegmentLegs {
        match segment {
            HaulSegment::Horizontal => &self.horizontal,
            HaulSegment::Uphill => &self.uphill,
            HaulSegment::Downhill => &self.downhill,
        }
    }

    pub fn segment_mut(&mut self, segment: HaulSegment) -> &mut SegmentLegs {
        match segment {
            HaulSegment::Horizontal => &mut self.horizontal,
            HaulSegment::Uphill => &mut self.uphill,
            HaulSegment::Downhill => &mut self.downhill,
        }
    }
}
