//! ECS resources and host-facing data.
//!
//! Overview
//! - `gameconfig` – INI-backed settings (world size, speed, clamping)
//! - `input` – per-tick intents and pressed host inputs
//! - `intentscript` – scripted input frames for headless runs
//! - `scene` – JSON scene layouts and the built-in demo scene
//! - `worldtime` – completed tick counter
pub mod gameconfig;
pub mod input;
pub mod intentscript;
pub mod scene;
pub mod worldtime;
