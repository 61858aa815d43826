use rand::distributions::{Distribution, WeightedIndex};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::models::enums::StoneType;

use super::types::EngineError;

/// Allowed drift of the weight sum from 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Prior probability of each stone type. Independent of the patient profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneTypeWeights {
    pub calcium_oxalate: f64,
    pub uric_acid: f64,
    pub struvite: f64,
    pub cystine: f64,
}

impl Default for StoneTypeWeights {
    fn default() -> Self {
        Self {
            calcium_oxalate: 0.70,
            uric_acid: 0.15,
            struvite: 0.10,
            cystine: 0.05,
        }
    }
}

impl StoneTypeWeights {
    /// Weights in `StoneType::ALL` order.
    pub fn as_pairs(&self) -> [(StoneType, f64); 4] {
        [
            (StoneType::CalciumOxalate, self.calcium_oxalate),
            (StoneType::UricAcid, self.uric_acid),
            (StoneType::Struvite, self.struvite),
            (StoneType::Cystine, self.cystine),
        ]
    }

    pub fn weight_of(&self, stone_type: StoneType) -> f64 {
        match stone_type {
            StoneType::CalciumOxalate => self.calcium_oxalate,
            StoneType::UricAcid => self.uric_acid,
            StoneType::Struvite => self.struvite,
            StoneType::Cystine => self.cystine,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        for (stone_type, weight) in self.as_pairs() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EngineError::Config(format!(
                    "weight for {} must be a non-negative number, got {weight}",
                    stone_type.as_str()
                )));
            }
        }

        let sum: f64 = self.as_pairs().iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::Config(format!(
                "stone type weights must sum to 1.0, got {sum}"
            )));
        }

        Ok(())
    }
}

/// Weighted categorical draw over the four stone types.
#[derive(Debug, Clone)]
pub struct StoneClassifier {
    weights: StoneTypeWeights,
    index: WeightedIndex<f64>,
}

impl StoneClassifier {
    pub fn new(weights: StoneTypeWeights) -> Result<Self, EngineError> {
        weights.validate()?;
        let index = WeightedIndex::new(weights.as_pairs().iter().map(|(_, w)| *w))
            .map_err(|e| EngineError::Config(format!("stone type weights rejected: {e}")))?;
        Ok(Self { weights, index })
    }

    pub fn weights(&self) -> &StoneTypeWeights {
        &self.weights
    }

    pub fn classify(&self, rng: &mut dyn RngCore) -> StoneType {
        let stone_type = StoneType::ALL[self.index.sample(rng)];
        tracing::debug!(stone_type = stone_type.as_str(), "Stone type drawn");
        stone_type
    }
}
