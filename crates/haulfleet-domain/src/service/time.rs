//! Calendar constants and event-duration arithmetic

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Calendar hour base for every availability figure (365 × 24)
pub const CALENDAR_HOURS_PER_YEAR: f64 = DAYS_PER_YEAR * HOURS_PER_DAY;

/// Hours spent on `count` events of `hours_per_event` each
pub fn total_hours(count: u32, hours_per_event: f64) -> f64 {
    count as f64 * hours_per_event
}

/// Hours per year for an event repeated `count` times every day
pub fn annualized_hours(count: u32, hours_per_event: f64) -> f64 {
    total_hours(count, hours_per_event) * DAYS_PER_YEAR
}

/// Hours corresponding to a percentage of the calendar year
pub fn calendar_share(pct: f64) -> f64 {
    pct / 100.0 * HOURS_PER_DAY * DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_hours() {
        assert_eq!(CALENDAR_HOURS_PER_YEAR, 8760.0);
    }

    #[test]
    fn test_total_hours() {
        assert_eq!(total_hours(35, 8.0), 280.0);
        assert_eq!(total_hours(0, 168.0), 0.0);
    }

    #[test]
    fn test_annualized_hours() {
        assert_eq!(annualized_hours(1, 1.0), 365.0);
        assert!((annualized_hours(2, 0.08) - 58.4).abs() < 1e-9);
    }

    #[test]
    fn test_calendar_share() {
        assert!((calendar_share(10.0) - 876.0).abs() < 1e-9);
        assert_eq!(calendar_share(0.0), 0.0);
    }
}
