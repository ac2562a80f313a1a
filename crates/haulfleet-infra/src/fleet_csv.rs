//! CSV exchange for fleet records
//!
//! Spreadsheet exports arrive either as UTF-8 or as Windows-1252, and with
//! either `,` or `;` as delimiter (`;` exports also use decimal commas).
//!
//! Expected header (only `truck` is required, missing columns read as zero):
//! truck,qty_250h,qty_500h,qty_1000h,qty_16000h,corrective_rate,qty_no_operator,
//! qty_blast_stop,qty_weather_stop,qty_lunch,qty_shift_change,pct_absenteeism,pct_training

use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use haulfleet_domain::model::{Fleet, TruckField, TruckRecord};
use haulfleet_types::{Error, ValidationError};
use thiserror::Error;
use tracing::{debug, warn};

const TRUCK_COLUMN: &str = "truck";

#[derive(Error, Debug)]
pub enum FleetCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in row {row}: {source}")]
    InvalidValue {
        row: usize,
        source: ValidationError,
    },

    #[error("Empty truck label in row {0}")]
    EmptyTruckLabel(usize),

    #[error("Duplicate truck {truck} in row {row}")]
    DuplicateTruck { row: usize, truck: String },
}

impl From<FleetCsvError> for Error {
    fn from(err: FleetCsvError) -> Self {
        match err {
            FleetCsvError::IoError(e) => Error::Io(e),
            other => Error::CsvLoader(other.to_string()),
        }
    }
}

/// Load a fleet from a CSV file
pub fn load_fleet_csv<P: AsRef<Path>>(path: P) -> Result<Fleet, FleetCsvError> {
    let bytes = fs::read(path)?;
    let content = decode_spreadsheet_bytes(&bytes);
    parse_fleet_csv(&content)
}

/// Decode UTF-8 (BOM tolerated), falling back to Windows-1252
fn decode_spreadsheet_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.trim_start_matches('\u{feff}')),
        Err(_) => {
            warn!("CSV is not valid UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded
        }
    }
}

fn detect_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or("");
    if header.matches(';').count() > header.matches(',').count() {
        b';'
    } else {
        b','
    }
}

/// Parse fleet CSV text
pub fn parse_fleet_csv(content: &str) -> Result<Fleet, FleetCsvError> {
    let delimiter = detect_delimiter(content);
    let decimal_comma = delimiter == b';';
    debug!(delimiter = %(delimiter as char), "parsing fleet CSV");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = map_columns(&headers)?;

    let mut trucks = Vec::new();
    let mut seen = HashSet::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1
        if record.iter().all(|value| value.is_empty()) {
            continue;
        }
        let truck = parse_record(&record, &columns, row_num, decimal_comma)?;
        if !seen.insert(truck.truck.to_uppercase()) {
            return Err(FleetCsvError::DuplicateTruck {
                row: row_num,
                truck: truck.truck,
            });
        }
        trucks.push(truck);
    }

    Ok(Fleet::from_records(trucks))
}

/// Column index of the truck label and of every recognised field
struct ColumnMap {
    truck: usize,
    fields: Vec<(usize, TruckField)>,
}

fn map_columns(headers: &csv::StringRecord) -> Result<ColumnMap, FleetCsvError> {
    let mut truck = None;
    let mut fields = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if header.eq_ignore_ascii_case(TRUCK_COLUMN) {
            truck = Some(idx);
            continue;
        }
        match header.parse::<TruckField>() {
            Ok(field) => fields.push((idx, field)),
            Err(_) => warn!(column = header, "ignoring unknown CSV column"),
        }
    }
    let truck = truck.ok_or_else(|| FleetCsvError::MissingColumn(TRUCK_COLUMN.to_string()))?;
    Ok(ColumnMap { truck, fields })
}

fn parse_record(
    record: &csv::StringRecord,
    columns: &ColumnMap,
    row_num: usize,
    decimal_comma: bool,
) -> Result<TruckRecord, FleetCsvError> {
    let label = record.get(columns.truck).unwrap_or("");
    if label.is_empty() {
        return Err(FleetCsvError::EmptyTruckLabel(row_num));
    }

    let mut truck = TruckRecord::new(label);
    for (idx, field) in &columns.fields {
        let raw = record.get(*idx).unwrap_or("");
        if raw.is_empty() {
            continue;
        }
        let value = if decimal_comma {
            Cow::Owned(raw.replace(',', "."))
        } else {
            Cow::Borrowed(raw)
        };
        truck
            .set_field(*field, &value)
            .map_err(|source| FleetCsvError::InvalidValue {
                row: row_num,
                source,
            })?;
    }
    Ok(truck)
}

/// Write a fleet as comma-separated UTF-8
pub fn write_fleet_csv<W: Write>(fleet: &Fleet, writer: W) -> Result<(), FleetCsvError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![TRUCK_COLUMN];
    header.extend(TruckField::ALL.iter().map(|f| f.name()));
    csv_writer.write_record(&header)?;

    for truck in fleet.trucks() {
        let mut row = vec![truck.truck.clone()];
        row.extend(TruckField::ALL.iter().map(|&field| {
            let value = truck.get(field);
            if field.is_count() {
                (value as u32).to_string()
            } else {
                value.to_string()
            }
        }));
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a fleet CSV file
pub fn save_fleet_csv<P: AsRef<Path>>(fleet: &Fleet, path: P) -> Result<(), FleetCsvError> {
    let file = File::create(path)?;
    write_fleet_csv(fleet, file)
}
