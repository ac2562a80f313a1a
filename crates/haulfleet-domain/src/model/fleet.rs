//! Ordered fleet of truck records

use std::collections::HashSet;

use haulfleet_types::ValidationError;
use serde::{Deserialize, Serialize};

use crate::model::{truck_label, TruckRecord};

/// How new records are seeded when the fleet grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordTemplate {
    /// Reference maintenance plan (see [`TruckRecord::with_reference_plan`])
    #[default]
    ReferencePlan,
    /// All counters zero
    Blank,
}

impl RecordTemplate {
    pub fn build(&self, index: usize) -> TruckRecord {
        match self {
            RecordTemplate::ReferencePlan => TruckRecord::with_reference_plan(truck_label(index)),
            RecordTemplate::Blank => TruckRecord::new(truck_label(index)),
        }
    }
}

/// The fleet list, owned by a single session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default)]
    template: RecordTemplate,
    trucks: Vec<TruckRecord>,
}

impl Fleet {
    /// Fleet of `size` trucks labelled `CM-001` onwards
    pub fn with_size(size: usize, template: RecordTemplate) -> Self {
        Self {
            template,
            trucks: (0..size).map(|i| template.build(i)).collect(),
        }
    }

    /// Wrap already-built records (e.g. from an import)
    pub fn from_records(trucks: Vec<TruckRecord>) -> Self {
        Self {
            template: RecordTemplate::default(),
            trucks,
        }
    }

    pub fn template(&self) -> RecordTemplate {
        self.template
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    pub fn trucks(&self) -> &[TruckRecord] {
        &self.trucks
    }

    pub fn get(&self, index: usize) -> Option<&TruckRecord> {
        self.trucks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TruckRecord> {
        self.trucks.get_mut(index)
    }

    /// Find a record by its label (case-insensitive)
    pub fn find(&self, label: &str) -> Option<&TruckRecord> {
        self.position(label).map(|i| &self.trucks[i])
    }

    pub fn find_mut(&mut self, label: &str) -> Option<&mut TruckRecord> {
        self.position(label).map(move |i| &mut self.trucks[i])
    }

    fn position(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.trucks
            .iter()
            .position(|t| t.truck.eq_ignore_ascii_case(label))
    }

    /// Check every record's ranges and that labels are unique (case-insensitive)
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for truck in &self.trucks {
            truck.validate()?;
            if !seen.insert(truck.truck.trim().to_uppercase()) {
                return Err(ValidationError::DuplicateTruck(truck.truck.clone()));
            }
        }
        Ok(())
    }

    /// Grow with template records or truncate from the end.
    ///
    /// Existing records keep their edits.
    pub fn resize(&mut self, size: usize) {
        if size <= self.trucks.len() {
            self.trucks.truncate(size);
            return;
        }
        let start = self.trucks.len();
        let template = self.template;
        self.trucks.extend((start..size).map(|i| template.build(i)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_labels_in_order() {
        let fleet = Fleet::with_size(3, RecordTemplate::ReferencePlan);
        let labels: Vec<_> = fleet.trucks().iter().map(|t| t.truck.as_str()).collect();
        assert_eq!(labels, vec!["CM-001", "CM-002", "CM-003"]);
        assert_eq!(fleet.get(0).unwrap().qty_250h, 35);
    }

    #[test]
    fn test_blank_template() {
        let fleet = Fleet::with_size(2, RecordTemplate::Blank);
        assert!(fleet.trucks().iter().all(|t| t.is_blank()));
    }

    #[test]
    fn test_resize_keeps_edits_and_appends_defaults() {
        let mut fleet = Fleet::with_size(2, RecordTemplate::ReferencePlan);
        fleet.get_mut(1).unwrap().qty_lunch = 2;

        fleet.resize(4);
        assert_eq!(fleet.len(), 4);
        assert_eq!(fleet.get(1).unwrap().qty_lunch, 2);
        assert_eq!(fleet.get(3).unwrap().truck, "CM-004");
        assert_eq!(fleet.get(3).unwrap().qty_500h, 18);
    }

    #[test]
    fn test_resize_shrinks_from_end() {
        let mut fleet = Fleet::with_size(8, RecordTemplate::Blank);
        fleet.resize(3);
        assert_eq!(fleet.len(), 3);
        assert!(fleet.find("CM-004").is_none());
        fleet.resize(0);
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_labels() {
        let fleet = Fleet::from_records(vec![
            TruckRecord::new("CM-001"),
            TruckRecord::new("CM-002"),
            TruckRecord::new("cm-001"),
        ]);
        assert_eq!(
            fleet.validate(),
            Err(ValidationError::DuplicateTruck("cm-001".to_string()))
        );
        assert_eq!(Fleet::with_size(3, RecordTemplate::Blank).validate(), Ok(()));
    }

    #[test]
    fn test_validate_checks_record_ranges() {
        let mut record = TruckRecord::new("CM-001");
        record.pct_training = 101.0;
        assert!(matches!(
            Fleet::from_records(vec![record]).validate(),
            Err(ValidationError::OutOfRange { field: "pct_training", .. })
        ));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut fleet = Fleet::with_size(2, RecordTemplate::Blank);
        fleet.find_mut("cm-002").unwrap().qty_blast_stop = 4;
        assert_eq!(fleet.find("CM-002").unwrap().qty_blast_stop, 4);
        assert!(fleet.find("CM-010").is_none());
    }
}
