use serde::{Deserialize, Serialize};

use crate::models::{Assessment, PatientProfile};

/// Daily hydration target never drops below this.
pub const MIN_HYDRATION_TARGET_GLASSES: u32 = 8;
const HYDRATION_TARGET_INCREMENT: u32 = 3;
/// Intake at which the hydration progress bar is full.
const HYDRATION_PROGRESS_FULL_GLASSES: f64 = 12.0;

const HIGH_RISK_FOLLOW_UP_MONTHS: u32 = 6;
const STANDARD_FOLLOW_UP_MONTHS: u32 = 12;
const FOLLOW_UP_RISK_THRESHOLD: u8 = 50;

/// Recurrence prevention targets shown next to the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreventionStrategy {
    pub hydration_target_glasses: u32,
    /// Current intake as a fraction of a full bar, capped at 1.0.
    pub hydration_progress: f64,
    pub diet_modification_needed: bool,
    pub diet_advice: String,
    pub follow_up_imaging_months: u32,
}

pub fn prevention_strategy(profile: &PatientProfile, assessment: &Assessment) -> PreventionStrategy {
    let water = profile.water_intake_glasses;
    let diet_modification_needed = profile.diet_type.is_high_risk();
    let follow_up_imaging_months =
        if assessment.recurrence_risk_percent > FOLLOW_UP_RISK_THRESHOLD {
            HIGH_RISK_FOLLOW_UP_MONTHS
        } else {
            STANDARD_FOLLOW_UP_MONTHS
        };

    PreventionStrategy {
        hydration_target_glasses: MIN_HYDRATION_TARGET_GLASSES
            .max(water.saturating_add(HYDRATION_TARGET_INCREMENT)),
        hydration_progress: (f64::from(water) / HYDRATION_PROGRESS_FULL_GLASSES).min(1.0),
        diet_modification_needed,
        diet_advice: if diet_modification_needed {
            "Reduce protein/salt intake".into()
        } else {
            "Maintain current patterns".into()
        },
        follow_up_imaging_months,
    }
}
