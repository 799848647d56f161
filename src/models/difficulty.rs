use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier offered by the difficulty facet and used for grade badges.
///
/// Serialized in its display form (`"Advanced"`); any case is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
        DifficultyTier::Expert,
    ];

    /// Grade ranges shown under each tier in the filter panel
    pub fn description(&self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "5.6-5.9 for Sport/Trad | V0-V2 for Boulder",
            DifficultyTier::Intermediate => "5.10a-5.10d for Sport/Trad | V3-V5 for Boulder",
            DifficultyTier::Advanced => "5.11a-5.11d for Sport/Trad | V6-V8 for Boulder",
            DifficultyTier::Expert => "5.12+ for Sport/Trad | V9+ for Boulder",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DifficultyTier::Beginner => "Beginner",
            DifficultyTier::Intermediate => "Intermediate",
            DifficultyTier::Advanced => "Advanced",
            DifficultyTier::Expert => "Expert",
        };
        f.pad(s)
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(DifficultyTier::Beginner),
            "intermediate" => Ok(DifficultyTier::Intermediate),
            "advanced" => Ok(DifficultyTier::Advanced),
            "expert" => Ok(DifficultyTier::Expert),
            _ => Err(format!("Invalid difficulty tier: {}", s)),
        }
    }
}

impl Serialize for DifficultyTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DifficultyTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
