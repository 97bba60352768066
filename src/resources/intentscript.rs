//! Scripted input for headless runs.
//!
//! An intent script is a JSON array of frames. Each frame lists the host
//! input identifiers held down and for how many consecutive ticks:
//!
//! ```json
//! [
//!   { "pressed": ["D"], "ticks": 10 },
//!   { "pressed": ["D", "Up"] },
//!   { "pressed": [], "ticks": 30 }
//! ]
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::resources::input::PressedInputs;

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub pressed: Vec<String>,
    #[serde(default = "one")]
    pub ticks: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentScript(pub Vec<ScriptFrame>);

impl IntentScript {
    pub fn from_json_str(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Total number of ticks the script covers.
    pub fn len(&self) -> u64 {
        self.0.iter().map(|frame| u64::from(frame.ticks)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One [`PressedInputs`] per tick.
    pub fn ticks(&self) -> impl Iterator<Item = PressedInputs> + '_ {
        self.0.iter().flat_map(|frame| {
            let pressed: PressedInputs = frame.pressed.iter().cloned().collect();
            std::iter::repeat_n(pressed, frame.ticks as usize)
        })
    }
}
