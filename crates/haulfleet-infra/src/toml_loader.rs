//! TOML loaders for duration tables and haul-cycle inputs

use std::fs;
use std::path::Path;

use haulfleet_domain::model::{CycleInput, DurationTable};
use haulfleet_types::{Error, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

fn read_toml<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading {}", what);
    parse_toml(&content, what)
}

fn parse_toml<T: DeserializeOwned>(content: &str, what: &str) -> Result<T> {
    toml::from_str(content)
        .map_err(|e| Error::TomlLoader(format!("Failed to parse {}: {}", what, e)))
}

/// Load a duration table; omitted entries keep their defaults
pub fn load_duration_table(path: &Path) -> Result<DurationTable> {
    read_toml(path, "duration table")
}

pub fn parse_duration_table(content: &str) -> Result<DurationTable> {
    parse_toml(content, "duration table")
}

/// Load a haul-cycle description
///
/// ```toml
/// truck_capacity_tons = 200.0
/// fill_factor_pct = 90.0
///
/// [horizontal.loaded]
/// distance_m = 5000.0
/// speed_kmh = 30.0
/// ```
pub fn load_cycle_input(path: &Path) -> Result<CycleInput> {
    let input: CycleInput = read_toml(path, "cycle input")?;
    input.validate()?;
    Ok(input)
}

pub fn parse_cycle_input(content: &str) -> Result<CycleInput> {
    let input: CycleInput = parse_toml(content, "cycle input")?;
    input.validate()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulfleet_types::ValidationError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_partial_duration_table() {
        let table = parse_duration_table(
            r#"
            [stoppage]
            no_operator = 8.0
            blast_stop = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(table.stoppage.no_operator, 8.0);
        assert_eq!(table.stoppage.blast_stop, 8.0);
        assert_eq!(table.stoppage.weather_stop, 1.0);
        assert_eq!(table.preventive.service_16000h, 168.0);
    }

    #[test]
    fn test_parse_empty_duration_table_is_default() {
        assert_eq!(parse_duration_table("").unwrap(), DurationTable::default());
    }

    #[test]
    fn test_parse_cycle_input() {
        let input = parse_cycle_input(
            r#"
            truck_capacity_tons = 200.0
            fill_factor_pct = 90.0

            [horizontal.loaded]
            distance_m = 5000.0
            speed_kmh = 30.0

            [horizontal.empty]
            distance_m = 5000.0
            speed_kmh = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(input.truck_capacity_tons, 200.0);
        assert_eq!(input.horizontal.empty.speed_kmh, 40.0);
        assert_eq!(input.uphill.loaded.distance_m, 0.0);
    }

    #[test]
    fn test_cycle_input_requires_payload() {
        let err = parse_cycle_input("[horizontal.loaded]\ndistance_m = 10.0\n").unwrap_err();
        assert!(matches!(err, Error::TomlLoader(_)));
    }

    #[test]
    fn test_cycle_input_rejects_nan_distance() {
        let err = parse_cycle_input(
            r#"
            truck_capacity_tons = 200.0
            fill_factor_pct = 90.0

            [uphill.loaded]
            distance_m = nan
            speed_kmh = 12.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::Negative { field: "uphill.loaded.distance_m", .. })
        ));
    }

    #[test]
    fn test_cycle_input_rejects_overfilled_bucket() {
        let err = parse_cycle_input("truck_capacity_tons = 200.0\nfill_factor_pct = 150.0\n")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::OutOfRange { field: "fill_factor_pct", .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[preventive]\nservice_250h = 10.0").unwrap();
        let table = load_duration_table(file.path()).unwrap();
        assert_eq!(table.preventive.service_250h, 10.0);
    }

    #[test]
    fn test_missing_file() {
        let err = load_cycle_input(Path::new("/nonexistent/cycle.toml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
