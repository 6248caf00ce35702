//! Line category shared by the catalog, loaders, and output crates.

use std::str::FromStr;

use crate::CoreError;

/// Service category of a bus line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LineType {
    /// City-centre line.
    #[default]
    Urban,
    /// Line serving outlying districts and neighbouring towns.
    Suburban,
    /// Airport, university, and private shuttle lines.
    Special,
}

impl LineType {
    /// Label used in CSV catalog files and output columns.
    pub fn as_str(self) -> &'static str {
        match self {
            LineType::Urban    => "URBAN",
            LineType::Suburban => "SUBURBAN",
            LineType::Special  => "SPECIAL",
        }
    }
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LineType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "URBAN"    => Ok(LineType::Urban),
            "SUBURBAN" => Ok(LineType::Suburban),
            "SPECIAL"  => Ok(LineType::Special),
            other => Err(CoreError::Parse(format!(
                "invalid line type {other:?}: expected URBAN, SUBURBAN, or SPECIAL"
            ))),
        }
    }
}
