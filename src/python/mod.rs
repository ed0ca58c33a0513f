//! Python bindings for the minigame engine.
//!
//! Lets a Python host (notebook, scripted UI, test bot) drive a session.
//!
//! # Quick Start
//!
//! ```python
//! import minigame_engine as mg
//!
//! game = mg.ReactionGame(rounds=3, seed=42)
//!
//! timer = game.handle_input()      # waiting -> ready
//! # ... wait timer.delay_ms, then:
//! game.activate()                  # ready -> go
//! game.handle_input()              # go -> next round, measured
//!
//! print(game.history, game.average, game.tier)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// minigame_engine: phase-driven state machines for casual mini-games.
#[pymodule]
fn minigame_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoundOutcome>()?;
    m.add_class::<PyTimerDirective>()?;
    m.add_class::<PySessionSummary>()?;
    m.add_class::<PyReactionGame>()?;

    Ok(())
}
