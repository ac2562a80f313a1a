//! Per-truck operational record

use std::fmt;
use std::str::FromStr;

use haulfleet_types::ValidationError;
use serde::{Deserialize, Serialize};

/// Build the fleet label for a zero-based position (`CM-001`, `CM-002`, ...)
pub fn truck_label(index: usize) -> String {
    format!("CM-{:03}", index + 1)
}

/// Operational counters for one haul truck over one calendar year
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TruckRecord {
    /// Fleet label (e.g., "CM-001")
    pub truck: String,
    /// 250h preventive services
    #[serde(default)]
    pub qty_250h: u32,
    /// 500h preventive services
    #[serde(default)]
    pub qty_500h: u32,
    /// 1000h preventive services
    #[serde(default)]
    pub qty_1000h: u32,
    /// 16000h preventive services (major overhaul)
    #[serde(default)]
    pub qty_16000h: u32,
    /// Corrective downtime as a fraction of preventive downtime (0.0-1.0)
    #[serde(default)]
    pub corrective_rate: f64,
    #[serde(default)]
    pub qty_no_operator: u32,
    #[serde(default)]
    pub qty_blast_stop: u32,
    #[serde(default)]
    pub qty_weather_stop: u32,
    /// Daily lunch breaks, annualized by the engine
    #[serde(default)]
    pub qty_lunch: u32,
    /// Daily shift changes, annualized by the engine
    #[serde(default)]
    pub qty_shift_change: u32,
    /// Absenteeism percentage (0-100)
    #[serde(default)]
    pub pct_absenteeism: f64,
    /// Training percentage (0-100)
    #[serde(default)]
    pub pct_training: f64,
}

impl TruckRecord {
    /// All-zero record
    pub fn new(truck: impl Into<String>) -> Self {
        Self {
            truck: truck.into(),
            ..Default::default()
        }
    }

    /// Record seeded with the reference annual maintenance plan:
    /// 35 × 250h, 18 × 500h, 9 × 1000h services and a 25% corrective rate.
    pub fn with_reference_plan(truck: impl Into<String>) -> Self {
        Self {
            truck: truck.into(),
            qty_250h: 35,
            qty_500h: 18,
            qty_1000h: 9,
            qty_16000h: 0,
            corrective_rate: 0.25,
            ..Default::default()
        }
    }

    /// Check the bounded fields. Counts are unsigned and need no check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("corrective_rate", self.corrective_rate, 0.0, 1.0)?;
        check_range("pct_absenteeism", self.pct_absenteeism, 0.0, 100.0)?;
        check_range("pct_training", self.pct_training, 0.0, 100.0)?;
        Ok(())
    }

    /// Whether every counter and rate is zero
    pub fn is_blank(&self) -> bool {
        *self == Self::new(self.truck.clone())
    }

    /// Read one editable field as a float
    pub fn get(&self, field: TruckField) -> f64 {
        match field {
            TruckField::Qty250h => self.qty_250h as f64,
            TruckField::Qty500h => self.qty_500h as f64,
            TruckField::Qty1000h => self.qty_1000h as f64,
            TruckField::Qty16000h => self.qty_16000h as f64,
            TruckField::CorrectiveRate => self.corrective_rate,
            TruckField::QtyNoOperator => self.qty_no_operator as f64,
            TruckField::QtyBlastStop => self.qty_blast_stop as f64,
            TruckField::QtyWeatherStop => self.qty_weather_stop as f64,
            TruckField::QtyLunch => self.qty_lunch as f64,
            TruckField::QtyShiftChange => self.qty_shift_change as f64,
            TruckField::PctAbsenteeism => self.pct_absenteeism,
            TruckField::PctTraining => self.pct_training,
        }
    }

    /// Overwrite one field from its text form.
    ///
    /// The record is left untouched when the value does not parse or is out
    /// of range.
    pub fn set_field(&mut self, field: TruckField, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        match field {
            TruckField::Qty250h => self.qty_250h = parse_count(field, value)?,
            TruckField::Qty500h => self.qty_500h = parse_count(field, value)?,
            TruckField::Qty1000h => self.qty_1000h = parse_count(field, value)?,
            TruckField::Qty16000h => self.qty_16000h = parse_count(field, value)?,
            TruckField::CorrectiveRate => {
                self.corrective_rate = parse_bounded(field, value, 0.0, 1.0)?
            }
            TruckField::QtyNoOperator => self.qty_no_operator = parse_count(field, value)?,
            TruckField::QtyBlastStop => self.qty_blast_stop = parse_count(field, value)?,
            TruckField::QtyWeatherStop => self.qty_weather_stop = parse_count(field, value)?,
            TruckField::QtyLunch => self.qty_lunch = parse_count(field, value)?,
            TruckField::QtyShiftChange => self.qty_shift_change = parse_count(field, value)?,
            TruckField::PctAbsenteeism => {
                self.pct_absenteeism = parse_bounded(field, value, 0.0, 100.0)?
            }
            TruckField::PctTraining => {
                self.pct_training = parse_bounded(field, value, 0.0, 100.0)?
            }
        }
        Ok(())
    }

    /// Apply a `field=value` assignment
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ValidationError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| ValidationError::MalformedAssignment(assignment.to_string()))?;
        let field: TruckField = name.parse()?;
        self.set_field(field, value)
    }
}

pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

/// Reject negative, NaN and infinite values
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn parse_count(field: TruckField, value: &str) -> Result<u32, ValidationError> {
    value.parse().map_err(|_| ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_bounded(field: TruckField, value: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let number: f64 = value.parse().map_err(|_| ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    check_range(field.name(), number, min, max)?;
    Ok(number)
}

/// Editable fields of a [`TruckRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruckField {
    Qty250h,
    Qty500h,
    Qty1000h,
    Qty16000h,
    CorrectiveRate,
    QtyNoOperator,
    QtyBlastStop,
    QtyWeatherStop,
    QtyLunch,
    QtyShiftChange,
    PctAbsenteeism,
    PctTraining,
}

impl TruckField {
    /// Column order used by the CSV exchange format
    pub const ALL: [TruckField; 12] = [
        TruckField::Qty250h,
        TruckField::Qty500h,
        TruckField::Qty1000h,
        TruckField::Qty16000h,
        TruckField::CorrectiveRate,
        TruckField::QtyNoOperator,
        TruckField::QtyBlastStop,
        TruckField::QtyWeatherStop,
        TruckField::QtyLunch,
        TruckField::QtyShiftChange,
        TruckField::PctAbsenteeism,
        TruckField::PctTraining,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TruckField::Qty250h => "qty_250h",
            TruckField::Qty500h => "qty_500h",
            TruckField::Qty1000h => "qty_1000h",
            TruckField::Qty16000h => "qty_16000h",
            TruckField::CorrectiveRate => "corrective_rate",
            TruckField::QtyNoOperator => "qty_no_operator",
            TruckField::QtyBlastStop => "qty_blast_stop",
            TruckField::QtyWeatherStop => "qty_weather_stop",
            TruckField::QtyLunch => "qty_lunch",
            TruckField::QtyShiftChange => "qty_shift_change",
            TruckField::PctAbsenteeism => "pct_absenteeism",
            TruckField::PctTraining => "pct_training",
        }
    }

    /// Integer event counters (as opposed to rates and percentages)
    pub fn is_count(&self) -> bool {
        !matches!(
            self,
            TruckField::CorrectiveRate | TruckField::PctAbsenteeism | TruckField::PctTraining
        )
    }
}

impl fmt::Display for TruckField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TruckField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        TruckField::ALL
            .iter()
            .copied()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| ValidationError::UnknownField(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_label_is_zero_padded() {
        assert_eq!(truck_label(0), "CM-001");
        assert_eq!(truck_label(11), "CM-012");
        assert_eq!(truck_label(999), "CM-1000");
    }

    #[test]
    fn test_reference_plan_values() {
        let record = TruckRecord::with_reference_plan("CM-001");
        assert_eq!(record.qty_250h, 35);
        assert_eq!(record.qty_500h, 18);
        assert_eq!(record.qty_1000h, 9);
        assert_eq!(record.qty_16000h, 0);
        assert!((record.corrective_rate - 0.25).abs() < f64::EPSILON);
        assert!(!record.is_blank());
        assert!(TruckRecord::new("CM-002").is_blank());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut record = TruckRecord::new("CM-001");
        record.corrective_rate = 1.5;
        assert!(matches!(
            record.validate(),
            Err(ValidationError::OutOfRange { field: "corrective_rate", .. })
        ));

        let mut record = TruckRecord::new("CM-001");
        record.pct_training = -1.0;
        assert!(record.validate().is_err());

        let mut record = TruckRecord::new("CM-001");
        record.pct_absenteeism = f64::NAN;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut record = TruckRecord::new("CM-001");
        record.corrective_rate = 1.0;
        record.pct_absenteeism = 100.0;
        record.pct_training = 0.0;
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_apply_assignment_updates_single_field() {
        let mut record = TruckRecord::with_reference_plan("CM-003");
        record.apply_assignment("qty_250h=40").unwrap();
        record.apply_assignment(" pct_training = 2.5").unwrap();
        assert_eq!(record.qty_250h, 40);
        assert!((record.pct_training - 2.5).abs() < f64::EPSILON);
        assert_eq!(record.qty_500h, 18);
    }

    #[test]
    fn test_apply_assignment_errors_leave_record_unchanged() {
        let original = TruckRecord::with_reference_plan("CM-001");
        let mut record = original.clone();

        assert!(matches!(
            record.apply_assignment("qty_250h"),
            Err(ValidationError::MalformedAssignment(_))
        ));
        assert!(matches!(
            record.apply_assignment("fuel=3"),
            Err(ValidationError::UnknownField(_))
        ));
        assert!(matches!(
            record.apply_assignment("qty_500h=-2"),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            record.apply_assignment("corrective_rate=2"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(record, original);
    }

    #[test]
    fn test_field_round_trips_through_name() {
        for field in TruckField::ALL {
            assert_eq!(field.name().parse::<TruckField>().unwrap(), field);
        }
        assert_eq!("QTY_LUNCH".parse::<TruckField>().unwrap(), TruckField::QtyLunch);
    }

    #[test]
    fn test_get_reads_every_field() {
        let mut record = TruckRecord::new("CM-001");
        record.qty_shift_change = 2;
        record.pct_absenteeism = 4.0;
        assert_eq!(record.get(TruckField::QtyShiftChange), 2.0);
        assert_eq!(record.get(TruckField::PctAbsenteeism), 4.0);
        assert_eq!(record.get(TruckField::Qty16000h), 0.0);
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_zero() {
        let record: TruckRecord =
            serde_json::from_str(r#"{"truck":"CM-009","qty_250h":3}"#).unwrap();
        assert_eq!(record.truck, "CM-009");
        assert_eq!(record.qty_250h, 3);
        assert_eq!(record.qty_lunch, 0);
        assert_eq!(record.corrective_rate, 0.0);
    }
}
