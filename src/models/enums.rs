use serde::{Deserialize, Serialize};

use crate::analysis::EngineError;

/// Macro to generate enum with as_str + label + std::str::FromStr pattern.
/// Parsing and deserialization accept either the snake_case key or the form label.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal, $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $(
                #[serde(alias = $label)]
                $variant
            ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed == $s || trimmed.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(EngineError::InvalidEnum {
                    field: stringify!($name).into(),
                    value: s.into(),
                })
            }
        }
    };
}

str_enum!(FamilyHistory {
    None => "none", "None",
    OneRelative => "one_relative", "One relative",
    MultipleRelatives => "multiple_relatives", "Multiple relatives",
});

str_enum!(DietType {
    Mixed => "mixed", "Mixed",
    Vegetarian => "vegetarian", "Vegetarian",
    HighProtein => "high_protein", "High-protein",
    HighSalt => "high_salt", "High-salt",
    Other => "other", "Other",
});

str_enum!(StoneLocation {
    RightKidneyUpperPole => "right_kidney_upper_pole", "Right kidney upper pole",
    LeftKidneyLowerPole => "left_kidney_lower_pole", "Left kidney lower pole",
    RightUreter => "right_ureter", "Right ureter",
    LeftUreter => "left_ureter", "Left ureter",
    Bladder => "bladder", "Bladder",
});

str_enum!(StoneType {
    CalciumOxalate => "calcium_oxalate", "Calcium Oxalate",
    UricAcid => "uric_acid", "Uric Acid",
    Struvite => "struvite", "Struvite",
    Cystine => "cystine", "Cystine",
});

str_enum!(RiskCategory {
    Low => "low", "Low",
    Medium => "medium", "Medium",
    High => "high", "High",
});

impl FamilyHistory {
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl DietType {
    /// High-protein and high-salt diets count toward recurrence risk.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, Self::HighProtein | Self::HighSalt)
    }
}

impl StoneLocation {
    pub fn is_ureter(&self) -> bool {
        matches!(self, Self::RightUreter | Self::LeftUreter)
    }
}
