use serde::{Deserialize, Serialize};

use super::enums::{DietType, FamilyHistory};
use crate::analysis::EngineError;

pub const WATER_INTAKE_MIN_GLASSES: u32 = 1;
pub const WATER_INTAKE_MAX_GLASSES: u32 = 15;

/// Patient-reported inputs to a single assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub previous_operations: u32,
    pub family_history: FamilyHistory,
    pub water_intake_glasses: u32,
    pub diet_type: DietType,
}

impl PatientProfile {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(WATER_INTAKE_MIN_GLASSES..=WATER_INTAKE_MAX_GLASSES)
            .contains(&self.water_intake_glasses)
        {
            return Err(EngineError::InvalidInput {
                field: "water_intake_glasses".into(),
                value: self.water_intake_glasses.to_string(),
            });
        }
        Ok(())
    }
}
