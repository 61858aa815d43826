use chrono::NaiveDateTime;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::care::{HealthTrends, PreventionStrategy, StoneChart, TreatmentPlan};
use crate::models::enums::{RiskCategory, StoneType};
use crate::models::{Assessment, PatientProfile, ScanObservation};

use super::reference::DietGuidance;

// ---------------------------------------------------------------------------
// AssessmentRequest
// ---------------------------------------------------------------------------

/// Input accepted by the binary entry point.
/// Without an observation the engine generates one; without a seed the
/// random source is seeded from OS entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub profile: PatientProfile,
    #[serde(default)]
    pub observation: Option<ScanObservation>,
    #[serde(default)]
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// AssessmentReport
// ---------------------------------------------------------------------------

/// Everything the dashboard shows after an analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub id: Uuid,
    pub generated_at: NaiveDateTime,
    pub profile: PatientProfile,
    pub observation: ScanObservation,
    pub assessment: Assessment,
    pub risk_category: RiskCategory,
    pub diet: DietGuidance,
    pub treatment: TreatmentPlan,
    pub prevention: PreventionStrategy,
    pub stone_chart: StoneChart,
    pub trends: HealthTrends,
}

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input for {field}: {value}")]
    InvalidInput { field: String, value: String },

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// AssessmentEngine trait
// ---------------------------------------------------------------------------

/// The assessment engine. Every random draw comes from the caller's `rng`;
/// implementations hold no mutable state.
pub trait AssessmentEngine {
    /// Classify, score and triage one patient against one observation.
    fn assess(
        &self,
        profile: &PatientProfile,
        observation: &ScanObservation,
        rng: &mut dyn RngCore,
    ) -> Result<Assessment, EngineError>;

    /// Generate a mock observation, then assess it.
    fn analyze(
        &self,
        profile: &PatientProfile,
        rng: &mut dyn RngCore,
    ) -> Result<(ScanObservation, Assessment), EngineError>;

    /// Diet guidance for a stone type. Never fails.
    fn diet_guidance(&self, stone_type: StoneType) -> DietGuidance;

    /// Assess and attach every presentation derivation.
    fn report(
        &self,
        profile: &PatientProfile,
        observation: &ScanObservation,
        rng: &mut dyn RngCore,
    ) -> Result<AssessmentReport, EngineError>;
}
