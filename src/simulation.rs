//! Simulation facade for the host loop.
//!
//! [`Simulation`] owns the ECS [`World`] and the per-tick [`Schedule`]. The
//! host builds it once from a [`GameConfig`] and a [`SceneLayout`], then
//! calls [`Simulation::step`] (or [`Simulation::step_pressed`]) once per
//! tick and reads [`Simulation::snapshot`] to draw.
//!
//! # Tick order
//!
//! 1. [`control`] turns the tick's intents into velocities;
//! 2. [`movement`] moves and resolves every mover, X then Y, then clamps.
//!
//! The two systems are chained and the schedule uses the single-threaded
//! executor, so a step is fully deterministic.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use glam::Vec2;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::components::body::Body;
use crate::components::controlbinding::ControlBinding;
use crate::components::group::{CollidesWith, Groups};
use crate::components::identity::{EntityId, Label};
use crate::components::rect::{Anchor, Rect};
use crate::components::velocity::Velocity;
use crate::error::SimError;
use crate::events::contact::{ContactEvent, Contacts, record_contact};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{Intents, PressedInputs};
use crate::resources::scene::{EntityDef, SceneLayout};
use crate::resources::worldtime::WorldTime;
use crate::systems::control::control;
use crate::systems::movement::movement;

/// Render-facing state of one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub id: EntityId,
    pub label: String,
    pub display_box: Rect,
    pub hit_box: Rect,
}

pub struct Simulation {
    world: World,
    schedule: Schedule,
    next_id: u32,
    entities: FxHashMap<EntityId, Entity>,
    labels: FxHashMap<String, EntityId>,
}

impl Simulation {
    /// Empty simulation with the given configuration.
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(config);
        world.insert_resource(Intents::default());
        world.insert_resource(Contacts::default());
        world.add_observer(record_contact);
        world.flush();

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems((control, movement).chain());

        Self {
            world,
            schedule,
            next_id: 0,
            entities: FxHashMap::default(),
            labels: FxHashMap::default(),
        }
    }

    /// Simulation populated with every entity of `scene`, in order.
    pub fn from_scene(config: GameConfig, scene: &SceneLayout) -> Result<Self, SimError> {
        let mut sim = Self::new(config);
        for def in &scene.entities {
            sim.spawn(def)?;
        }
        info!("Scene ready: {} entities", sim.entities.len());
        Ok(sim)
    }

    /// Spawn one entity. Ids are handed out in call order.
    pub fn spawn(&mut self, def: &EntityDef) -> Result<EntityId, SimError> {
        if self.labels.contains_key(&def.label) {
            return Err(SimError::DuplicateLabel(def.label.clone()));
        }

        let anchor = match &def.hitbox_anchor {
            Some(name) => name.parse::<Anchor>()?,
            None => Anchor::default(),
        };
        let velocity = def.velocity.map(Vec2::from).unwrap_or_default();
        check_velocity(velocity)?;
        let body = Body::new(
            Vec2::from(def.size),
            Vec2::from(def.location),
            def.hitbox_size.map(Vec2::from),
            anchor,
        )?;

        let id = EntityId(self.next_id);
        let speed = self.world.resource::<GameConfig>().player_speed;

        let mut entity = self.world.spawn((
            id,
            Label(def.label.clone()),
            body,
            Groups::new(def.groups.iter().cloned()),
        ));
        if def.is_mover() {
            entity.insert(Velocity { value: velocity });
        }
        if let Some(keys) = &def.controls {
            entity.insert(ControlBinding::new(keys.clone(), speed));
        }
        if let Some(group) = &def.collides_with {
            entity.insert(CollidesWith(group.clone()));
        }
        let entity = entity.id();

        self.next_id += 1;
        self.entities.insert(id, entity);
        self.labels.insert(def.label.clone(), id);
        debug!(
            "spawned {} {:?}: hit box {}, display box {}",
            id,
            def.label,
            body.hit_box(),
            body.display_box()
        );
        Ok(id)
    }

    /// Advance one tick with explicit per-entity intents.
    pub fn step(&mut self, intents: &Intents) {
        for id in intents.0.keys() {
            let controllable = self
                .entities
                .get(id)
                .is_some_and(|e| self.world.get::<ControlBinding>(*e).is_some());
            if !controllable {
                warn!("intent for {id} ignored: not a controllable entity");
            }
        }

        *self.world.resource_mut::<Intents>() = intents.clone();
        self.world.resource_mut::<Contacts>().clear();

        self.schedule.run(&mut self.world);
        self.world.flush();

        self.world.resource_mut::<WorldTime>().tick += 1;
    }

    /// Advance one tick from raw pressed inputs, translated through each
    /// entity's binding table.
    pub fn step_pressed(&mut self, pressed: &PressedInputs) {
        let intents = self.intents_from_pressed(pressed);
        self.step(&intents);
    }

    pub fn intents_from_pressed(&mut self, pressed: &PressedInputs) -> Intents {
        let mut query = self.world.query::<(&EntityId, &ControlBinding)>();
        query
            .iter(&self.world)
            .map(|(id, binding)| (*id, binding.intent_from_pressed(pressed)))
            .collect()
    }

    /// Overwrite a mover's velocity, or turn a static entity into one.
    ///
    /// Controlled entities get their velocity rewritten by the next step.
    pub fn set_velocity(&mut self, id: EntityId, velocity: Vec2) -> Result<(), SimError> {
        check_velocity(velocity)?;
        let entity = self.entity(id)?;
        self.world
            .entity_mut(entity)
            .insert(Velocity { value: velocity });
        Ok(())
    }

    /// Render-facing state of every entity, in id order.
    pub fn snapshot(&mut self) -> Vec<BodySnapshot> {
        let mut query = self.world.query::<(&EntityId, &Label, &Body)>();
        let mut snapshot: Vec<BodySnapshot> = query
            .iter(&self.world)
            .map(|(id, label, body)| BodySnapshot {
                id: *id,
                label: label.0.clone(),
                display_box: body.display_box(),
                hit_box: body.hit_box(),
            })
            .collect();
        snapshot.sort_by_key(|s| s.id);
        snapshot
    }

    pub fn body(&self, id: EntityId) -> Result<Body, SimError> {
        let entity = self.entity(id)?;
        self.world
            .get::<Body>(entity)
            .copied()
            .ok_or(SimError::UnknownEntity(id))
    }

    pub fn velocity(&self, id: EntityId) -> Result<Vec2, SimError> {
        let entity = self.entity(id)?;
        Ok(self
            .world
            .get::<Velocity>(entity)
            .map(|v| v.value)
            .unwrap_or_default())
    }

    pub fn id_of(&self, label: &str) -> Result<EntityId, SimError> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| SimError::UnknownLabel(label.to_string()))
    }

    /// Contacts raised during the last step.
    pub fn contacts(&self) -> &[ContactEvent] {
        &self.world.resource::<Contacts>().0
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.world.resource::<WorldTime>().tick
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn entity(&self, id: EntityId) -> Result<Entity, SimError> {
        self.entities
            .get(&id)
            .copied()
            .ok_or(SimError::UnknownEntity(id))
    }
}

fn check_velocity(velocity: Vec2) -> Result<(), SimError> {
    if velocity.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidVelocity {
            x: velocity.x,
            y: velocity.y,
        })
    }
}
