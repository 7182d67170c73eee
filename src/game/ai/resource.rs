//! AI configuration
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 1     |
//! | Medium     | 2     |
//! | Hard       | 3     |
//! | Expert     | 5     |

use std::time::Duration;

use chess_engine::{Color, Difficulty};

use crate::core::Settings;

/// Who the AI plays and how hard it tries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    pub ai_color: Color,
    pub difficulty: Difficulty,
    /// Pause before searching so replies do not land instantly
    pub think_delay: Duration,
}

impl Default for AiConfig {
    /// AI plays Black at medium difficulty
    fn default() -> Self {
        Self {
            ai_color: Color::Black,
            difficulty: Difficulty::Medium,
            think_delay: Duration::from_millis(400),
        }
    }
}

impl From<&Settings> for AiConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            ai_color: settings.ai_color,
            difficulty: settings.difficulty,
            think_delay: settings.think_delay(),
        }
    }
}
