//! Physical availability (DF) and utilization engine
//!
//! Every figure is measured against the calendar year
//! ([`CALENDAR_HOURS_PER_YEAR`]):
//!
//! ```text
//! stopped   = Σ services × hours_per_service × (1 + corrective_rate)
//! DF        = (calendar − stopped) / calendar × 100
//! available = calendar × DF / 100
//! lost      = Σ lost_time_breakdown
//! worked    = available − lost
//! util      = worked / available × 100   (0 when available == 0)
//! ```
//!
//! Negative DF, worked hours or utilization are returned as-is; they mark a
//! schedule that cannot fit in a year.

use crate::model::{
    DurationTable, LostTimeBreakdown, LostTimeCategory, TruckMetrics, TruckRecord,
    UtilizationBreakdown,
};
use crate::service::time::{
    annualized_hours, calendar_share, total_hours, CALENDAR_HOURS_PER_YEAR, DAYS_PER_YEAR,
};

/// Physical availability in percent for a given maintenance downtime
pub fn physical_availability(stopped_hours: f64) -> f64 {
    ((CALENDAR_HOURS_PER_YEAR - stopped_hours) / CALENDAR_HOURS_PER_YEAR) * 100.0
}

/// Available hours implied by a DF percentage
pub fn available_hours_from_df(df: f64) -> f64 {
    CALENDAR_HOURS_PER_YEAR * (df / 100.0)
}

/// Split available hours into worked and lost, guarding the zero base
pub fn utilization_from_hours(available_hours: f64, lost_hours: f64) -> UtilizationBreakdown {
    let worked_hours = available_hours - lost_hours;
    let utilization_pct = if available_hours == 0.0 {
        0.0
    } else {
        (worked_hours / available_hours) * 100.0
    };
    UtilizationBreakdown {
        utilization_pct,
        lost_hours,
        worked_hours,
        available_hours,
    }
}

/// Availability/utilization calculator bound to a duration table
#[derive(Debug, Clone, Default)]
pub struct AvailabilityEngine {
    durations: DurationTable,
}

impl AvailabilityEngine {
    pub fn new(durations: DurationTable) -> Self {
        Self { durations }
    }

    /// Preventive downtime marked up by the corrective rate
    pub fn stopped_hours(&self, record: &TruckRecord) -> f64 {
        let p = &self.durations.preventive;
        let preventive = total_hours(record.qty_250h, p.service_250h)
            + total_hours(record.qty_500h, p.service_500h)
            + total_hours(record.qty_1000h, p.service_1000h)
            + total_hours(record.qty_16000h, p.service_16000h);
        preventive * (1.0 + record.corrective_rate)
    }

    pub fn physical_availability(&self, record: &TruckRecord) -> f64 {
        physical_availability(self.stopped_hours(record))
    }

    pub fn available_hours(&self, record: &TruckRecord) -> f64 {
        available_hours_from_df(self.physical_availability(record))
    }

    /// Hours lost per non-maintenance cause.
    ///
    /// Absenteeism and training are shares of the calendar year, not of
    /// worked hours.
    pub fn lost_time_breakdown(&self, record: &TruckRecord) -> LostTimeBreakdown {
        let s = &self.durations.stoppage;
        let mut breakdown = LostTimeBreakdown::new();
        breakdown.set(
            LostTimeCategory::NoOperator,
            total_hours(record.qty_no_operator, s.no_operator),
        );
        breakdown.set(
            LostTimeCategory::BlastStoppage,
            total_hours(record.qty_blast_stop, s.blast_stop),
        );
        breakdown.set(
            LostTimeCategory::WeatherStoppage,
            total_hours(record.qty_weather_stop, s.weather_stop),
        );
        breakdown.set(
            LostTimeCategory::Lunch,
            annualized_hours(record.qty_lunch, s.lunch),
        );
        breakdown.set(
            LostTimeCategory::ShiftChange,
            annualized_hours(record.qty_shift_change, s.shift_change),
        );
        breakdown.set(
            LostTimeCategory::ManagementGuidance,
            (DAYS_PER_YEAR * s.guidance_events_per_day) * s.guidance_hours,
        );
        breakdown.set(
            LostTimeCategory::Absenteeism,
            calendar_share(record.pct_absenteeism),
        );
        breakdown.set(LostTimeCategory::Training, calendar_share(record.pct_training));
        breakdown
    }

    pub fn utilization(&self, record: &TruckRecord) -> UtilizationBreakdown {
        let available = self.available_hours(record);
        let lost = self.lost_time_breakdown(record).total();
        utilization_from_hours(available, lost)
    }

    /// All metrics for one truck in a single pass
    pub fn evaluate(&self, record: &TruckRecord) -> TruckMetrics {
        let stopped_hours = self.stopped_hours(record);
        let df = physical_availability(stopped_hours);
        let lost_time_breakdown = self.lost_time_breakdown(record);
        let utilization =
            utilization_from_hours(available_hours_from_df(df), lost_time_breakdown.total());

        TruckMetrics {
            truck: record.truck.clone(),
            stopped_hours,
            df,
            available_hours: utilization.available_hours,
            lost_hours: utilization.lost_hours,
            worked_hours: utilization.worked_hours,
            utilization_pct: utilization.utilization_pct,
            lost_time_breakdown,
        }
    }
}
