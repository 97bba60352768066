use bevy_ecs::prelude::Resource;

/// Tick counter. The core does no timing of its own; the host calls
/// `step()` at its own cadence and this only counts completed steps.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldTime {
    pub tick: u64,
}
