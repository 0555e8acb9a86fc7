use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::piece::Color;

/// Base time per side plus a per-move increment, both in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeControl {
    pub base_seconds: u64,
    #[serde(default)]
    pub increment_seconds: u64,
}

impl Default for TimeControl {
    fn default() -> Self {
        TimeControl {
            base_seconds: 10 * 60,
            increment_seconds: 0,
        }
    }
}

impl TimeControl {
    const PRESETS: [(&'static str, u64); 6] = [
        ("bullet", 1),
        ("blitz", 3),
        ("blitz5", 5),
        ("rapid", 10),
        ("rapid30", 30),
        ("classical", 90),
    ];

    pub fn new(base_seconds: u64, increment_seconds: u64) -> Result<Self, ConfigError> {
        if base_seconds == 0 {
            return Err(ConfigError::ZeroBaseTime);
        }
        Ok(TimeControl {
            base_seconds,
            increment_seconds,
        })
    }

    /// Parse e.g. `{"base_seconds": 300, "increment_seconds": 3}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tc: TimeControl = serde_json::from_str(json)?;
        Self::new(tc.base_seconds, tc.increment_seconds)
    }

    /// Named presets without increment: bullet, blitz, blitz5, rapid,
    /// rapid30, classical.
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        Self::PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|&(_, minutes)| TimeControl {
                base_seconds: minutes * 60,
                increment_seconds: 0,
            })
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    pub fn with_increment(self, increment_seconds: u64) -> Self {
        TimeControl {
            increment_seconds,
            ..self
        }
    }

    pub fn base(&self) -> Duration {
        Duration::from_secs(self.base_seconds)
    }

    pub fn increment(&self) -> Duration {
        Duration::from_secs(self.increment_seconds)
    }
}

/// Remaining time for both sides. Counting down is the caller's job; the
/// engine only adds increments and reacts to a flag fall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    control: TimeControl,
    remaining: [Duration; 2],
}

impl Clock {
    pub fn new(control: TimeControl) -> Self {
        Clock {
            control,
            remaining: [control.base(); 2],
        }
    }

    pub fn control(&self) -> TimeControl {
        self.control
    }

    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }

    pub fn add_increment(&mut self, color: Color) {
        self.remaining[color.index()] += self.control.increment();
    }

    /// Subtract `elapsed` from `color`; returns true once the flag has fallen.
    pub fn consume(&mut self, color: Color, elapsed: Duration) -> bool {
        let left = &mut self.remaining[color.index()];
        *left = left.saturating_sub(elapsed);
        left.is_zero()
    }
}
