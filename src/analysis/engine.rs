use rand::RngCore;
use uuid::Uuid;

use crate::care::{health_trends, prevention_strategy, stone_chart, treatment_plan};
use crate::models::enums::StoneType;
use crate::models::{Assessment, PatientProfile, ScanObservation};

use super::classify::StoneClassifier;
use super::reference::{DietGuidance, ReferenceData};
use super::rules::{compute_recurrence_risk, determine_surgery_needed};
use super::scan::generate_scan_observation;
use super::types::{AssessmentEngine, AssessmentReport, EngineError};

/// Default implementation of the assessment engine.
/// Holds the validated classifier and reference tables; no mutable state,
/// so one engine can serve concurrent callers that each own a random source.
#[derive(Debug, Clone)]
pub struct DefaultAssessmentEngine {
    classifier: StoneClassifier,
    reference: ReferenceData,
}

impl DefaultAssessmentEngine {
    /// Fails with `EngineError::Config` when the stone weights are invalid.
    pub fn new(reference: ReferenceData) -> Result<Self, EngineError> {
        let classifier = StoneClassifier::new(reference.stone_weights)?;
        Ok(Self {
            classifier,
            reference,
        })
    }

    /// Engine over the bundled reference data.
    pub fn bundled() -> Result<Self, EngineError> {
        Self::new(ReferenceData::bundled()?)
    }

    pub fn classifier(&self) -> &StoneClassifier {
        &self.classifier
    }
}

impl AssessmentEngine for DefaultAssessmentEngine {
    fn assess(
        &self,
        profile: &PatientProfile,
        observation: &ScanObservation,
        rng: &mut dyn RngCore,
    ) -> Result<Assessment, EngineError> {
        profile.validate()?;
        observation.validate()?;

        let assessment = Assessment {
            stone_type: self.classifier.classify(rng),
            largest_stone_mm: observation.largest_stone_mm(),
            stone_count: observation.stone_count(),
            recurrence_risk_percent: compute_recurrence_risk(profile),
            surgery_needed: determine_surgery_needed(observation),
        };

        tracing::info!(
            stone_type = assessment.stone_type.as_str(),
            stone_count = assessment.stone_count,
            largest_mm = assessment.largest_stone_mm,
            risk = assessment.recurrence_risk_percent,
            surgery = assessment.surgery_needed,
            "Assessment complete"
        );

        Ok(assessment)
    }

    fn analyze(
        &self,
        profile: &PatientProfile,
        rng: &mut dyn RngCore,
    ) -> Result<(ScanObservation, Assessment), EngineError> {
        profile.validate()?;
        let observation = generate_scan_observation(rng);
        let assessment = self.assess(profile, &observation, rng)?;
        Ok((observation, assessment))
    }

    fn diet_guidance(&self, stone_type: StoneType) -> DietGuidance {
        let guidance = self.reference.diet_plan(stone_type);
        if !guidance.is_targeted() {
            tracing::warn!(
                stone_type = stone_type.as_str(),
                "No targeted diet plan, using general guidelines"
            );
        }
        guidance
    }

    fn report(
        &self,
        profile: &PatientProfile,
        observation: &ScanObservation,
        rng: &mut dyn RngCore,
    ) -> Result<AssessmentReport, EngineError> {
        let assessment = self.assess(profile, observation, rng)?;
        let generated_at = chrono::Local::now().naive_local();

        Ok(AssessmentReport {
            id: Uuid::new_v4(),
            generated_at,
            profile: profile.clone(),
            observation: observation.clone(),
            risk_category: assessment.risk_category(),
            diet: self.diet_guidance(assessment.stone_type),
            treatment: treatment_plan(&assessment),
            prevention: prevention_strategy(profile, &assessment),
            stone_chart: stone_chart(observation),
            trends: health_trends(rng, assessment.recurrence_risk_percent, generated_at.date()),
            assessment,
        })
    }
}
