use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::enums::StoneType;

use super::classify::StoneTypeWeights;
use super::types::EngineError;

pub const DIET_PLANS_FILE: &str = "diet_plans.json";
pub const STONE_WEIGHTS_FILE: &str = "stone_weights.json";

const BUNDLED_DIET_PLANS: &str = include_str!("../../resources/diet_plans.json");
const BUNDLED_STONE_WEIGHTS: &str = include_str!("../../resources/stone_weights.json");

/// Foods to avoid and to favour for one stone type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub avoid: Vec<String>,
    pub consume: Vec<String>,
}

/// Result of a diet lookup. A miss falls back to the general prevention list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DietGuidance {
    Targeted { stone_type_key: String, plan: DietPlan },
    General { guidelines: Vec<String> },
}

impl DietGuidance {
    pub fn is_targeted(&self) -> bool {
        matches!(self, Self::Targeted { .. })
    }
}

/// Diet plans keyed by normalized stone type key (loaded from diet_plans.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietTable {
    pub plans: HashMap<String, DietPlan>,
    pub general_guidelines: Vec<String>,
}

/// Lower-case, trim, spaces to underscores: "Calcium Oxalate" -> "calcium_oxalate".
pub fn normalize_diet_key(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "_")
}

/// Loaded reference data for assessments.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub diet: DietTable,
    pub stone_weights: StoneTypeWeights,
}

impl ReferenceData {
    /// Load reference data from a directory holding both JSON files.
    pub fn load(resources_dir: &Path) -> Result<Self, EngineError> {
        let diet_path = resources_dir.join(DIET_PLANS_FILE);
        let weights_path = resources_dir.join(STONE_WEIGHTS_FILE);

        let diet_json = std::fs::read_to_string(&diet_path).map_err(|e| {
            EngineError::ReferenceDataLoad(diet_path.display().to_string(), e.to_string())
        })?;
        let weights_json = std::fs::read_to_string(&weights_path).map_err(|e| {
            EngineError::ReferenceDataLoad(weights_path.display().to_string(), e.to_string())
        })?;

        let reference = Self::from_json(&diet_json, &weights_json)?;
        tracing::info!(
            dir = %resources_dir.display(),
            plans = reference.diet.plans.len(),
            "Loaded reference data"
        );
        Ok(reference)
    }

    /// Reference data compiled into the binary.
    pub fn bundled() -> Result<Self, EngineError> {
        Self::from_json(BUNDLED_DIET_PLANS, BUNDLED_STONE_WEIGHTS)
    }

    /// Load from `dir` when it exists, otherwise use the bundled copy.
    pub fn load_or_bundled(dir: Option<&Path>) -> Result<Self, EngineError> {
        match dir {
            Some(dir) if dir.is_dir() => Self::load(dir),
            _ => {
                tracing::debug!("No reference directory, using bundled reference data");
                Self::bundled()
            }
        }
    }

    fn from_json(diet_json: &str, weights_json: &str) -> Result<Self, EngineError> {
        let mut diet: DietTable = serde_json::from_str(diet_json).map_err(|e| {
            EngineError::ReferenceDataParse(DIET_PLANS_FILE.into(), e.to_string())
        })?;
        let stone_weights: StoneTypeWeights = serde_json::from_str(weights_json).map_err(|e| {
            EngineError::ReferenceDataParse(STONE_WEIGHTS_FILE.into(), e.to_string())
        })?;

        let mut plans = HashMap::with_capacity(diet.plans.len());
        for (key, plan) in diet.plans {
            let normalized = normalize_diet_key(&key);
            if plans.insert(normalized.clone(), plan).is_some() {
                return Err(EngineError::Config(format!(
                    "diet plan '{key}' collides with another plan under key '{normalized}'"
                )));
            }
        }
        diet.plans = plans;

        let reference = Self {
            diet,
            stone_weights,
        };
        reference.validate()?;
        Ok(reference)
    }

    fn validate(&self) -> Result<(), EngineError> {
        self.stone_weights.validate()?;

        if self.diet.general_guidelines.is_empty() {
            return Err(EngineError::Config(
                "general diet guidelines must not be empty".into(),
            ));
        }

        for (key, plan) in &self.diet.plans {
            if plan.avoid.is_empty() || plan.consume.is_empty() {
                return Err(EngineError::Config(format!(
                    "diet plan '{key}' needs both avoid and consume entries"
                )));
            }
        }

        for stone_type in StoneType::ALL {
            if !self.diet.plans.contains_key(stone_type.as_str()) {
                tracing::warn!(
                    stone_type = stone_type.as_str(),
                    "No diet plan configured, general guidelines will be used"
                );
            }
        }

        Ok(())
    }

    pub fn diet_plan(&self, stone_type: StoneType) -> DietGuidance {
        self.diet_plan_for_key(stone_type.as_str())
    }

    /// Look up a plan by free-form key. Never fails.
    pub fn diet_plan_for_key(&self, key: &str) -> DietGuidance {
        let normalized = normalize_diet_key(key);
        match self.diet.plans.get(&normalized) {
            Some(plan) => DietGuidance::Targeted {
                stone_type_key: normalized,
                plan: plan.clone(),
            },
            None => DietGuidance::General {
                guidelines: self.diet.general_guidelines.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn bundled_data_is_valid() {
        let reference = ReferenceData::bundled().unwrap();
        assert_eq!(reference.stone_weights, StoneTypeWeights::default());
        assert_eq!(reference.diet.plans.len(), 4);
        assert_eq!(reference.diet.general_guidelines.len(), 5);
    }

    #[test]
    fn every_stone_type_has_a_targeted_plan() {
        let reference = ReferenceData::bundled().unwrap();
        for stone_type in StoneType::ALL {
            match reference.diet_plan(*stone_type) {
                DietGuidance::Targeted {
                    stone_type_key,
                    plan,
                } => {
                    assert_eq!(stone_type_key, stone_type.as_str());
                    assert!(!plan.avoid.is_empty());
                    assert!(!plan.consume.is_empty());
                }
                DietGuidance::General { .. } => {
                    panic!("{} fell back to general guidance", stone_type.as_str())
                }
            }
        }
    }

    #[test]
    fn calcium_oxalate_plan_contents() {
        let reference = ReferenceData::bundled().unwrap();
        let DietGuidance::Targeted { plan, .. } = reference.diet_plan(StoneType::CalciumOxalate)
        else {
            panic!("expected targeted plan");
        };
        assert!(plan.avoid.contains(&"Spinach".to_string()));
        assert!(plan.consume.contains(&"Citrus fruits".to_string()));
    }

    #[test]
    fn display_label_key_is_normalized() {
        let reference = ReferenceData::bundled().unwrap();
        assert!(reference.diet_plan_for_key("Uric Acid").is_targeted());
        assert!(reference.diet_plan_for_key("  CYSTINE ").is_targeted());
    }

    #[test]
    fn unknown_key_falls_back_to_general() {
        let reference = ReferenceData::bundled().unwrap();
        match reference.diet_plan_for_key("brushite") {
            DietGuidance::General { guidelines } => {
                assert!(!guidelines.is_empty());
                assert_eq!(guidelines[0], "Drink 2.5-3L of water daily");
            }
            other => panic!("expected general guidance, got {other:?}"),
        }
        assert!(!reference.diet_plan_for_key("").is_targeted());
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DIET_PLANS_FILE), BUNDLED_DIET_PLANS).unwrap();
        fs::write(
            dir.path().join(STONE_WEIGHTS_FILE),
            r#"{"calcium_oxalate": 0.25, "uric_acid": 0.25, "struvite": 0.25, "cystine": 0.25}"#,
        )
        .unwrap();

        let reference = ReferenceData::load(dir.path()).unwrap();
        assert!((reference.stone_weights.cystine - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn file_keys_are_normalized_on_load() {
        let diet = r#"{
            "plans": {
                "Calcium Oxalate": { "avoid": ["Spinach"], "consume": ["Water"] }
            },
            "general_guidelines": ["Hydrate"]
        }"#;
        let reference = ReferenceData::from_json(diet, BUNDLED_STONE_WEIGHTS).unwrap();
        assert!(reference.diet_plan(StoneType::CalciumOxalate).is_targeted());
        assert!(!reference.diet_plan(StoneType::Struvite).is_targeted());
    }

    #[test]
    fn keys_colliding_after_normalization_rejected() {
        let diet = r#"{
            "plans": {
                "Uric Acid": { "avoid": ["Anchovies"], "consume": ["Water"] },
                "uric_acid": { "avoid": ["Organ meats"], "consume": ["Fruit"] }
            },
            "general_guidelines": ["Hydrate"]
        }"#;
        let err = ReferenceData::from_json(diet, BUNDLED_STONE_WEIGHTS).unwrap_err();
        assert!(matches!(err, EngineError::Config(ref msg) if msg.contains("uric_acid")));
    }

    #[test]
    fn missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceData::load(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::ReferenceDataLoad(..)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = ReferenceData::from_json("{ not json", BUNDLED_STONE_WEIGHTS).unwrap_err();
        match err {
            EngineError::ReferenceDataParse(file, _) => assert_eq!(file, DIET_PLANS_FILE),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_weights_are_config_error() {
        let weights = r#"{"calcium_oxalate": 0.5, "uric_acid": 0.15, "struvite": 0.1, "cystine": 0.05}"#;
        let err = ReferenceData::from_json(BUNDLED_DIET_PLANS, weights).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn empty_general_guidelines_rejected() {
        let diet = r#"{ "plans": {}, "general_guidelines": [] }"#;
        let err = ReferenceData::from_json(diet, BUNDLED_STONE_WEIGHTS).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn empty_plan_list_rejected() {
        let diet = r#"{
            "plans": { "struvite": { "avoid": [], "consume": ["Probiotics"] } },
            "general_guidelines": ["Hydrate"]
        }"#;
        assert!(ReferenceData::from_json(diet, BUNDLED_STONE_WEIGHTS).is_err());
    }

    #[test]
    fn missing_directory_uses_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let reference = ReferenceData::load_or_bundled(Some(&missing)).unwrap();
        assert_eq!(reference.diet.plans.len(), 4);
        assert!(ReferenceData::load_or_bundled(None).is_ok());
    }

    #[test]
    fn guidance_serializes_with_kind_tag() {
        let reference = ReferenceData::bundled().unwrap();
        let json = serde_json::to_string(&reference.diet_plan(StoneType::Struvite)).unwrap();
        assert!(json.contains("\"kind\":\"targeted\""));
        assert!(json.contains("\"stone_type_key\":\"struvite\""));
        let json = serde_json::to_string(&reference.diet_plan_for_key("unknown")).unwrap();
        assert!(json.contains("\"kind\":\"general\""));
    }
}
