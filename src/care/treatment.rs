use serde::{Deserialize, Serialize};

use crate::models::Assessment;

const SURGICAL_OPTIONS: [&str; 3] = [
    "Extracorporeal Shock Wave Lithotripsy (ESWL)",
    "Ureteroscopy",
    "Percutaneous Nephrolithotomy (PCNL)",
];

const CONSERVATIVE_MEASURES: [&str; 4] = [
    "Increased water intake (3-4L daily)",
    "Medical expulsive therapy",
    "Pain management",
    "Activity and positional techniques",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "approach", rename_all = "snake_case")]
pub enum TreatmentPlan {
    Surgical { options: Vec<String> },
    Conservative { measures: Vec<String> },
}

impl TreatmentPlan {
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Surgical { .. } => "Surgery Recommended",
            Self::Conservative { .. } => "Can Pass Naturally",
        }
    }

    pub fn items(&self) -> &[String] {
        match self {
            Self::Surgical { options } => options,
            Self::Conservative { measures } => measures,
        }
    }
}

pub fn treatment_plan(assessment: &Assessment) -> TreatmentPlan {
    if assessment.surgery_needed {
        TreatmentPlan::Surgical {
            options: SURGICAL_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    } else {
        TreatmentPlan::Conservative {
            measures: CONSERVATIVE_MEASURES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
