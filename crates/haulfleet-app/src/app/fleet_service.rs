//! Fleet Service - use cases over the stored fleet
//!
//! Each operation loads the fleet from the repository, applies one change or
//! evaluation, and writes it back when it changed. No state is kept between
//! calls.

use chrono::Utc;
use haulfleet_domain::model::{Fleet, RecordTemplate, TruckRecord};
use haulfleet_domain::repository::FleetRepository;
use haulfleet_domain::service::{evaluate_fleet, summarize, AvailabilityEngine};
use haulfleet_types::{Error, Result};
use tracing::{debug, info};

use crate::app::report::FleetReport;

pub struct FleetService<R: FleetRepository> {
    repo: R,
    engine: AvailabilityEngine,
    default_size: usize,
}

impl<R: FleetRepository> FleetService<R> {
    pub fn new(repo: R, engine: AvailabilityEngine, default_size: usize) -> Self {
        Self {
            repo,
            engine,
            default_size,
        }
    }

    /// Stored fleet, or a fresh reference-plan fleet of the default size
    pub fn load_or_default(&self) -> Result<Fleet> {
        match self.repo.load()? {
            Some(fleet) => Ok(fleet),
            None => {
                debug!(size = self.default_size, "no saved fleet, using defaults");
                Ok(Fleet::with_size(self.default_size, RecordTemplate::ReferencePlan))
            }
        }
    }

    /// Replace the stored fleet with `size` template records
    pub fn init(&self, size: usize, template: RecordTemplate) -> Result<Fleet> {
        let fleet = Fleet::with_size(size, template);
        self.repo.save(&fleet)?;
        info!(size, ?template, "initialized fleet");
        Ok(fleet)
    }

    /// Grow or shrink the stored fleet
    pub fn resize(&self, size: usize) -> Result<Fleet> {
        let mut fleet = self.load_or_default()?;
        let before = fleet.len();
        fleet.resize(size);
        self.repo.save(&fleet)?;
        info!(from = before, to = size, "resized fleet");
        Ok(fleet)
    }

    /// Apply `field=value` assignments to one truck.
    ///
    /// Either every assignment is applied or none is.
    pub fn update_truck(&self, label: &str, assignments: &[String]) -> Result<TruckRecord> {
        let mut fleet = self.load_or_default()?;
        let record = fleet
            .find_mut(label)
            .ok_or_else(|| Error::TruckNotFound(label.to_string()))?;

        let mut edited = record.clone();
        for assignment in assignments {
            edited.apply_assignment(assignment)?;
        }
        *record = edited.clone();

        self.repo.save(&fleet)?;
        info!(truck = %edited.truck, changes = assignments.len(), "updated truck");
        Ok(edited)
    }

    /// Replace the stored fleet with imported records
    pub fn replace(&self, fleet: &Fleet) -> Result<()> {
        fleet.validate()?;
        self.repo.save(fleet)?;
        info!(trucks = fleet.len(), "replaced fleet");
        Ok(())
    }

    /// Evaluate every truck, or only `truck` when given.
    ///
    /// The summary always covers the whole fleet.
    pub fn evaluate(&self, truck: Option<&str>) -> Result<FleetReport> {
        let fleet = self.load_or_default()?;
        let mut metrics = evaluate_fleet(&self.engine, &fleet);
        let summary = summarize(&metrics);

        if let Some(label) = truck {
            let wanted = label.trim();
            metrics.retain(|m| m.truck.eq_ignore_ascii_case(wanted));
            if metrics.is_empty() {
                return Err(Error::TruckNotFound(label.to_string()));
            }
        }

        if let Some(ref s) = summary {
            info!(
                trucks = s.truck_count,
                mean_df = s.mean_df,
                mean_utilization = s.mean_utilization_pct,
                "evaluated fleet"
            );
        }
        for m in &metrics {
            debug!(truck = %m.truck, df = m.df, utilization = m.utilization_pct, "truck metrics");
        }

        Ok(FleetReport {
            generated_at: Utc::now(),
            trucks: metrics,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulfleet_types::ValidationError;
    use std::cell::RefCell;

    /// In-memory repository for service tests
    #[derive(Default)]
    struct MemoryRepo {
        fleet: RefCell<Option<Fleet>>,
        saves: RefCell<usize>,
    }

    impl FleetRepository for MemoryRepo {
        fn load(&self) -> std::result::Result<Option<Fleet>, Error> {
            Ok(self.fleet.borrow().clone())
        }

        fn save(&self, fleet: &Fleet) -> std::result::Result<(), Error> {
            *self.fleet.borrow_mut() = Some(fleet.clone());
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn service() -> FleetService<MemoryRepo> {
        FleetService::new(MemoryRepo::default(), AvailabilityEngine::default(), 8)
    }

    #[test]
    fn test_load_or_default_uses_reference_plan() {
        let svc = service();
        let fleet = svc.load_or_default().unwrap();
        assert_eq!(fleet.len(), 8);
        assert_eq!(fleet.get(7).unwrap().truck, "CM-008");
        assert_eq!(fleet.get(0).unwrap().qty_250h, 35);
        assert_eq!(*svc.repo.saves.borrow(), 0);
    }

    #[test]
    fn test_update_truck_is_atomic() {
        let svc = service();
        svc.init(2, RecordTemplate::Blank).unwrap();

        let err = svc
            .update_truck("CM-002", &["qty_lunch=1".to_string(), "pct_training=140".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(svc.load_or_default().unwrap().get(1).unwrap().is_blank());

        let updated = svc
            .update_truck("cm-002", &["qty_lunch=1".to_string()])
            .unwrap();
        assert_eq!(updated.qty_lunch, 1);
        assert_eq!(svc.load_or_default().unwrap().get(1).unwrap().qty_lunch, 1);
    }

    #[test]
    fn test_update_unknown_truck() {
        let svc = service();
        let err = svc.update_truck("CM-099", &[]).unwrap_err();
        assert!(matches!(err, Error::TruckNotFound(ref t) if t == "CM-099"));
    }

    #[test]
    fn test_resize_persists() {
        let svc = service();
        svc.init(3, RecordTemplate::ReferencePlan).unwrap();
        let fleet = svc.resize(5).unwrap();
        assert_eq!(fleet.len(), 5);
        assert_eq!(svc.load_or_default().unwrap().len(), 5);
    }

    #[test]
    fn test_replace_rejects_invalid_record() {
        let svc = service();
        let mut bad = TruckRecord::new("CM-001");
        bad.pct_absenteeism = 120.0;
        let err = svc.replace(&Fleet::from_records(vec![bad])).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(*svc.repo.saves.borrow(), 0);
    }

    #[test]
    fn test_replace_rejects_duplicate_labels() {
        let svc = service();
        let fleet = Fleet::from_records(vec![TruckRecord::new("CM-001"), TruckRecord::new("CM-001")]);
        assert!(matches!(
            svc.replace(&fleet),
            Err(Error::Validation(ValidationError::DuplicateTruck(_)))
        ));
        assert_eq!(*svc.repo.saves.borrow(), 0);
    }

    #[test]
    fn test_evaluate_single_truck_keeps_fleet_summary() {
        let svc = service();
        svc.init(2, RecordTemplate::Blank).unwrap();
        svc.update_truck("CM-001", &["qty_16000h=10".to_string()])
            .unwrap();

        let report = svc.evaluate(Some("CM-002")).unwrap();
        assert_eq!(report.trucks.len(), 1);
        assert_eq!(report.trucks[0].df, 100.0);
        let summary = report.summary.unwrap();
        assert_eq!(summary.truck_count, 2);
        assert!(summary.mean_df < 100.0);
    }

    #[test]
    fn test_evaluate_unknown_truck() {
        let svc = service();
        assert!(matches!(
            svc.evaluate(Some("CM-404")),
            Err(Error::TruckNotFound(_))
        ));
    }

    #[test]
    fn test_evaluate_empty_fleet() {
        let svc = service();
        svc.init(0, RecordTemplate::Blank).unwrap();
        let report = svc.evaluate(None).unwrap();
        assert!(report.trucks.is_empty());
        assert!(report.summary.is_none());
    }
}
