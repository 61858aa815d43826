use crate::models::{PatientProfile, ScanObservation};

pub const BASE_RISK_PERCENT: u32 = 30;
pub const RISK_PERCENT_PER_UNIT: u32 = 15;
pub const MAX_RISK_PERCENT: u32 = 90;

/// More than this many prior operations counts as a repeat stone former.
const REPEAT_OPERATIONS_THRESHOLD: u32 = 1;
const REPEAT_OPERATIONS_UNITS: u32 = 2;
/// Fewer glasses per day than this counts as low intake.
const LOW_WATER_INTAKE_GLASSES: u32 = 6;

/// Stones strictly larger than this are unlikely to pass naturally.
pub const SURGERY_SIZE_THRESHOLD_MM: f64 = 6.0;

// ---------------------------------------------------------------------------
// Recurrence risk
// ---------------------------------------------------------------------------

/// Count of risk units (0 to 5) contributed by the patient's history.
pub fn risk_units(profile: &PatientProfile) -> u32 {
    let mut units = 0;
    if profile.previous_operations > REPEAT_OPERATIONS_THRESHOLD {
        units += REPEAT_OPERATIONS_UNITS;
    }
    if profile.family_history.is_present() {
        units += 1;
    }
    if profile.water_intake_glasses < LOW_WATER_INTAKE_GLASSES {
        units += 1;
    }
    if profile.diet_type.is_high_risk() {
        units += 1;
    }
    units
}

/// Recurrence risk on the fixed scale {30, 45, 60, 75, 90}.
pub fn compute_recurrence_risk(profile: &PatientProfile) -> u8 {
    let percent = BASE_RISK_PERCENT + RISK_PERCENT_PER_UNIT * risk_units(profile);
    percent.min(MAX_RISK_PERCENT) as u8
}

// ---------------------------------------------------------------------------
// Surgery triage
// ---------------------------------------------------------------------------

/// Surgery is recommended for any stone over the size threshold or any
/// stone lodged in a ureter.
pub fn determine_surgery_needed(observation: &ScanObservation) -> bool {
    observation.largest_stone_mm() > SURGERY_SIZE_THRESHOLD_MM || observation.has_ureter_stone()
}
