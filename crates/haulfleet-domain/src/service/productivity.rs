//! Haul-cycle productivity estimator

use haulfleet_types::ProductivityError;

use crate::model::{CycleInput, HaulSegment, Leg, ProductivityEstimate, SegmentTime};

/// Travel time in minutes for one leg
///
/// # Formula
/// minutes = distance_m / (speed_kmh × 1000) × 60
pub fn segment_cycle_time(distance_m: f64, speed_kmh: f64) -> Result<f64, ProductivityError> {
    if speed_kmh.is_nan() || speed_kmh <= 0.0 {
        return Err(ProductivityError::InvalidSpeed { speed_kmh });
    }
    Ok((distance_m / (speed_kmh * 1000.0)) * 60.0)
}

/// Cycle time from per-segment times, each already summed over both legs
pub fn total_cycle_time(horizontal_min: f64, uphill_min: f64, downhill_min: f64) -> f64 {
    horizontal_min + uphill_min + downhill_min
}

/// Effective payload in tonnes
pub fn net_capacity(truck_capacity_tons: f64, fill_factor_pct: f64) -> f64 {
    truck_capacity_tons * fill_factor_pct / 100.0
}

/// Tonnes moved per hour
pub fn hourly_productivity(
    net_capacity_tons: f64,
    total_cycle_minutes: f64,
) -> Result<f64, ProductivityError> {
    if total_cycle_minutes == 0.0 {
        return Err(ProductivityError::ZeroCycleTime);
    }
    Ok((net_capacity_tons * 60.0) / total_cycle_minutes)
}

/// Legs with no distance are unused and skip the speed check.
fn leg_minutes(leg: &Leg) -> Result<f64, ProductivityError> {
    if leg.distance_m == 0.0 {
        return Ok(0.0);
    }
    segment_cycle_time(leg.distance_m, leg.speed_kmh)
}

/// Run the full estimate for one submission
pub fn estimate(input: &CycleInput) -> Result<ProductivityEstimate, ProductivityError> {
    let payload_ok = input.truck_capacity_tons > 0.0 && input.fill_factor_pct > 0.0;
    if !payload_ok {
        return Err(ProductivityError::InvalidPayload {
            capacity_tons: input.truck_capacity_tons,
            fill_factor_pct: input.fill_factor_pct,
        });
    }

    let segments = HaulSegment::ALL
        .iter()
        .map(|&segment| {
            let legs = input.segment(segment);
            Ok(SegmentTime {
                segment,
                loaded_minutes: leg_minutes(&legs.loaded)?,
                empty_minutes: leg_minutes(&legs.empty)?,
            })
        })
        .collect::<Result<Vec<_>, ProductivityError>>()?;

    let total_cycle_minutes = total_cycle_time(
        segments[0].total_minutes(),
        segments[1].total_minutes(),
        segments[2].total_minutes(),
    );
    let net_capacity_tons = net_capacity(input.truck_capacity_tons, input.fill_factor_pct);
    let tons_per_hour = hourly_productivity(net_capacity_tons, total_cycle_minutes)?;

    Ok(ProductivityEstimate {
        segments,
        total_cycle_minutes,
        net_capacity_tons,
        cycles_per_hour: 60.0 / total_cycle_minutes,
        tons_per_hour,
    })
}
