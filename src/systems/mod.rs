//! Simulation systems.
//!
//! Submodules overview
//! - [`collision`] – per-axis overlap resolution and bounds clamping
//! - [`control`] – translate intents into velocity on controlled entities
//! - [`movement`] – move every mover X then Y, resolving after each axis

pub mod collision;
pub mod control;
pub mod movement;
