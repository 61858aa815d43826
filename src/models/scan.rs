use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::enums::StoneLocation;
use crate::analysis::EngineError;

pub const MAX_STONES: usize = 3;

/// Stone measurements and anatomical locations standing in for imaging output.
/// `stone_sizes_mm[i]` is the stone found at `stone_locations[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanObservation {
    pub stone_sizes_mm: Vec<f64>,
    pub stone_locations: Vec<StoneLocation>,
}

impl ScanObservation {
    /// Build an observation, rejecting anything `validate` would reject.
    pub fn new(
        stone_sizes_mm: Vec<f64>,
        stone_locations: Vec<StoneLocation>,
    ) -> Result<Self, EngineError> {
        let observation = Self {
            stone_sizes_mm,
            stone_locations,
        };
        observation.validate()?;
        Ok(observation)
    }

    pub fn stone_count(&self) -> usize {
        self.stone_sizes_mm.len()
    }

    pub fn largest_stone_mm(&self) -> f64 {
        self.stone_sizes_mm.iter().copied().fold(0.0, f64::max)
    }

    pub fn has_ureter_stone(&self) -> bool {
        self.stone_locations.iter().any(StoneLocation::is_ureter)
    }

    /// (size, location) pairs in scan order.
    pub fn stones(&self) -> impl Iterator<Item = (f64, StoneLocation)> + '_ {
        self.stone_sizes_mm
            .iter()
            .copied()
            .zip(self.stone_locations.iter().copied())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let count = self.stone_sizes_mm.len();
        if count == 0 || count > MAX_STONES {
            return Err(EngineError::InvalidInput {
                field: "stone_sizes_mm".into(),
                value: format!("{count} stones"),
            });
        }

        if self.stone_locations.len() != count {
            return Err(EngineError::InvalidInput {
                field: "stone_locations".into(),
                value: format!(
                    "{} locations for {count} stones",
                    self.stone_locations.len()
                ),
            });
        }

        if let Some(bad) = self
            .stone_sizes_mm
            .iter()
            .find(|size| !size.is_finite() || **size <= 0.0)
        {
            return Err(EngineError::InvalidInput {
                field: "stone_sizes_mm".into(),
                value: bad.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(count);
        for location in &self.stone_locations {
            if !seen.insert(location) {
                return Err(EngineError::InvalidInput {
                    field: "stone_locations".into(),
                    value: format!("duplicate {}", location.as_str()),
                });
            }
        }

        Ok(())
    }
}
