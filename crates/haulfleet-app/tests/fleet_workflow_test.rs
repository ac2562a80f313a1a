//! End-to-end fleet workflow against the file-backed repository

use std::fs;

use haulfleet_app::app::{estimate_productivity, FleetService};
use haulfleet_app::config::Config;
use haulfleet_app::repository::open_fleet_repo;
use haulfleet_domain::model::{CycleInput, Leg, LostTimeCategory, RecordTemplate, SegmentLegs};
use haulfleet_domain::service::AvailabilityEngine;
use haulfleet_infra::fleet_csv::{load_fleet_csv, save_fleet_csv};
use haulfleet_types::{Error, ProductivityError};
use tempfile::tempdir;

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        fleet_file: Some(dir.join("fleet.json")),
        ..Default::default()
    }
}

#[test]
fn test_reference_fleet_metrics() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let repo = open_fleet_repo(&config).unwrap();
    let service = FleetService::new(repo, AvailabilityEngine::default(), config.fleet_size);

    service.init(3, RecordTemplate::ReferencePlan).unwrap();
    let report = service.evaluate(None).unwrap();

    assert_eq!(report.trucks.len(), 3);
    for m in &report.trucks {
        assert!((m.stopped_hours - 800.0).abs() < 1e-9);
        assert!((m.df - 90.87).abs() < 0.01);
        assert!((m.available_hours - 7960.0).abs() < 1e-6);
    }
    let summary = report.summary.unwrap();
    assert!((summary.mean_df - report.trucks[0].df).abs() < 1e-9);
}

#[test]
fn test_csv_import_then_evaluate() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("fleet.csv");
    fs::write(
        &csv_path,
        "truck;qty_250h;qty_500h;qty_1000h;corrective_rate;qty_lunch;pct_absenteeism\n\
         CM-001;35;18;9;0,25;1;5\n\
         CM-002;0;0;0;0;0;0\n",
    )
    .unwrap();

    let config = config_in(dir.path());
    let service = FleetService::new(
        open_fleet_repo(&config).unwrap(),
        AvailabilityEngine::default(),
        config.fleet_size,
    );
    service.replace(&load_fleet_csv(&csv_path).unwrap()).unwrap();

    let report = service.evaluate(None).unwrap();
    let first = &report.trucks[0];
    assert_eq!(first.lost_time_breakdown.get(LostTimeCategory::Lunch), 365.0);
    assert!((first.lost_time_breakdown.get(LostTimeCategory::Absenteeism) - 438.0).abs() < 1e-9);
    assert!((first.lost_hours - first.lost_time_breakdown.total()).abs() < f64::EPSILON);

    let second = &report.trucks[1];
    assert_eq!(second.df, 100.0);
    assert!((second.utilization_pct - 99.0).abs() < 1e-9);

    let exported = dir.path().join("out.csv");
    save_fleet_csv(&service.load_or_default().unwrap(), &exported).unwrap();
    let reloaded = load_fleet_csv(&exported).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get(0).unwrap().qty_lunch, 1);
}

#[test]
fn test_durations_override_changes_lost_time() {
    let dir = tempdir().unwrap();
    let durations = dir.path().join("durations.toml");
    fs::write(&durations, "[stoppage]\nno_operator = 8.0\n").unwrap();
    let config = Config {
        durations_file: Some(durations),
        ..config_in(dir.path())
    };

    let service = FleetService::new(
        open_fleet_repo(&config).unwrap(),
        AvailabilityEngine::new(config.duration_table().unwrap()),
        config.fleet_size,
    );
    service.init(1, RecordTemplate::Blank).unwrap();
    service
        .update_truck("CM-001", &["qty_no_operator=2".to_string()])
        .unwrap();

    let report = service.evaluate(Some("CM-001")).unwrap();
    assert_eq!(
        report.trucks[0]
            .lost_time_breakdown
            .get(LostTimeCategory::NoOperator),
        16.0
    );
}

#[test]
fn test_productivity_scenarios() {
    let input = CycleInput {
        horizontal: SegmentLegs {
            loaded: Leg::new(5000.0, 30.0),
            empty: Leg::new(5000.0, 30.0),
        },
        truck_capacity_tons: 200.0,
        fill_factor_pct: 90.0,
        ..Default::default()
    };
    let result = estimate_productivity(&input).unwrap();
    assert!((result.tons_per_hour - 540.0).abs() < 1e-9);

    let mut stalled = input.clone();
    stalled.horizontal.loaded.speed_kmh = 0.0;
    let err = estimate_productivity(&stalled).unwrap_err();
    assert!(matches!(
        err,
        Error::Productivity(ProductivityError::InvalidSpeed { .. })
    ));
}

#[test]
fn test_report_serializes_for_renderer() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let service = FleetService::new(
        open_fleet_repo(&config).unwrap(),
        AvailabilityEngine::default(),
        2,
    );
    let report = service.evaluate(None).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let truck = &json["trucks"][0];
    for key in ["utilization_pct", "df", "lost_hours", "available_hours"] {
        assert!(truck[key].is_number(), "missing {}", key);
    }
    assert!(truck["lost_time_breakdown"]["shift_change"].is_number());
    assert_eq!(json["summary"]["truck_count"], 2);
    assert_eq!(report.df_series().len(), 2);
}
