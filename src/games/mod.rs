//! Game presets built on the engine.

pub mod reaction;
