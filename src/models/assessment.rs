use serde::{Deserialize, Serialize};

use super::enums::{RiskCategory, StoneType};

/// Outcome of one assessment. Derived on request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub stone_type: StoneType,
    pub largest_stone_mm: f64,
    pub stone_count: usize,
    pub recurrence_risk_percent: u8,
    pub surgery_needed: bool,
}

impl Assessment {
    pub fn risk_category(&self) -> RiskCategory {
        RiskCategory::from_percent(self.recurrence_risk_percent)
    }
}

impl RiskCategory {
    /// Display bucket: above 50 is high, above 30 is medium.
    pub fn from_percent(percent: u8) -> Self {
        if percent > 50 {
            Self::High
        } else if percent > 30 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
