//! ECS components for simulated entities.
//!
//! Submodules overview:
//! - [`body`] – display box / hit box pair kept aligned through an anchor
//! - [`controlbinding`] – per-entity input table turning intents into velocity
//! - [`group`] – named group membership and the obstacle group of a mover
//! - [`identity`] – stable ids and labels exposed to the host
//! - [`rect`] – axis-aligned rectangle and its named anchors
//! - [`velocity`] – per-tick displacement of movers

pub mod body;
pub mod controlbinding;
pub mod group;
pub mod identity;
pub mod rect;
pub mod velocity;
