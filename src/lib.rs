//! Hitbox simulation library.
//!
//! Axis-separated rectangle collision for entities whose collision box (the
//! *hit box*) is decoupled from their visual footprint (the *display box*).
//! Entities live in a `bevy_ecs` world; a [`Simulation`](simulation::Simulation)
//! runs one deterministic step per host tick and exposes the resulting boxes
//! for rendering.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use error::SimError;
pub use simulation::{BodySnapshot, Simulation};
