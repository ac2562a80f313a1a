//! Lost-time categories and per-truck breakdown

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-maintenance causes of lost operating time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LostTimeCategory {
    NoOperator,
    BlastStoppage,
    WeatherStoppage,
    Lunch,
    ShiftChange,
    ManagementGuidance,
    Absenteeism,
    Training,
}

impl LostTimeCategory {
    pub const ALL: [LostTimeCategory; 8] = [
        LostTimeCategory::NoOperator,
        LostTimeCategory::BlastStoppage,
        LostTimeCategory::WeatherStoppage,
        LostTimeCategory::Lunch,
        LostTimeCategory::ShiftChange,
        LostTimeCategory::ManagementGuidance,
        LostTimeCategory::Absenteeism,
        LostTimeCategory::Training,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            LostTimeCategory::NoOperator => "No Operator",
            LostTimeCategory::BlastStoppage => "Blast Stoppage",
            LostTimeCategory::WeatherStoppage => "Weather Stoppage",
            LostTimeCategory::Lunch => "Lunch",
            LostTimeCategory::ShiftChange => "Shift Change",
            LostTimeCategory::ManagementGuidance => "Management Guidance",
            LostTimeCategory::Absenteeism => "Absenteeism",
            LostTimeCategory::Training => "Training",
        }
    }
}

impl fmt::Display for LostTimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hours lost per category for one truck
///
/// Every category is always present, zero when the cause did not occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LostTimeBreakdown(BTreeMap<LostTimeCategory, f64>);

impl LostTimeBreakdown {
    pub fn new() -> Self {
        Self(
            LostTimeCategory::ALL
                .iter()
                .map(|category| (*category, 0.0))
                .collect(),
        )
    }

    pub fn set(&mut self, category: LostTimeCategory, hours: f64) {
        self.0.insert(category, hours);
    }

    pub fn get(&self, category: LostTimeCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    /// Sum over all categories
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LostTimeCategory, f64)> + '_ {
        self.0.iter().map(|(category, hours)| (*category, *hours))
    }
}

impl Default for LostTimeBreakdown {
    fn default() -> Self {
        Self::new()
    }
}
