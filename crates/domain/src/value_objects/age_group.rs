//! Age groups (planets) and difficulty levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Age group a child picks on the planet screen.
///
/// Serialized as its slug (`"3-5"`, `"6-8"`, `"9-12"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "3-5")]
    Preschool,
    #[serde(rename = "6-8")]
    Early,
    #[serde(rename = "9-12")]
    Middle,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Preschool, AgeGroup::Early, AgeGroup::Middle];

    pub fn slug(&self) -> &'static str {
        match self {
            AgeGroup::Preschool => "3-5",
            AgeGroup::Early => "6-8",
            AgeGroup::Middle => "9-12",
        }
    }

    /// Name of the planet that hosts this age group
    pub fn planet_name(&self) -> &'static str {
        match self {
            AgeGroup::Preschool => "Minik Gezegen",
            AgeGroup::Early => "Keşif Gezegeni",
            AgeGroup::Middle => "Mucit Gezegeni",
        }
    }

    /// Inclusive age range
    pub fn ages(&self) -> (u8, u8) {
        match self {
            AgeGroup::Preschool => (3, 5),
            AgeGroup::Early => (6, 8),
            AgeGroup::Middle => (9, 12),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for AgeGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3-5" => Ok(AgeGroup::Preschool),
            "6-8" => Ok(AgeGroup::Early),
            "9-12" => Ok(AgeGroup::Middle),
            other => Err(DomainError::parse(format!("Unknown age group: {}", other))),
        }
    }
}

/// Difficulty chosen before starting an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Score multiplier applied to each correct answer
    pub fn multiplier(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Kolay",
            Difficulty::Medium => "Orta",
            Difficulty::Hard => "Zor",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::parse(format!("Unknown difficulty: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_group_slug_parses_back() {
        for group in AgeGroup::ALL {
            assert_eq!(group.slug().parse::<AgeGroup>().unwrap(), group);
        }
        assert!("13-15".parse::<AgeGroup>().is_err());
    }

    #[test]
    fn age_group_serializes_as_slug() {
        let json = serde_json::to_string(&AgeGroup::Middle).unwrap();
        assert_eq!(json, "\"9-12\"");
    }

    #[test]
    fn difficulty_multipliers_increase() {
        assert!(Difficulty::Easy.multiplier() < Difficulty::Medium.multiplier());
        assert!(Difficulty::Medium.multiplier() < Difficulty::Hard.multiplier());
    }

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }
}
