//! AI difficulty presets
//!
//! Difficulty is nothing but search depth in plies:
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 1     |
//! | Medium     | 2     |
//! | Hard       | 3     |
//! | Expert     | 5     |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.name(), self.depth())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts a preset name or its depth
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == s || d.depth().to_string() == s)
            .ok_or_else(|| format!("unknown difficulty {s:?} (expected easy, medium, hard, expert or 1, 2, 3, 5)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_map_to_depths() {
        let depths: Vec<u8> = Difficulty::ALL.iter().map(|d| d.depth()).collect();
        assert_eq!(depths, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_parse_by_name_or_depth() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("5".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert!("4".parse::<Difficulty>().is_err());
    }
}
