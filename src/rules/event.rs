//! Events a presentation layer feeds into the engine.

use serde::{Deserialize, Serialize};

/// Something that happened outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player pressed, tapped or clicked.
    Input,
    /// Start the countdown explicitly.
    Arm,
    /// The countdown timer fired.
    Activate,
    /// Abandon the session and start over with the same round count.
    Reset,
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameEvent::Input => "input",
            GameEvent::Arm => "arm",
            GameEvent::Activate => "activate",
            GameEvent::Reset => "reset",
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
