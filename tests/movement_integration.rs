//! ECS-level tests for the control and movement systems.
//!
//! Each test builds a bare `World`, spawns bundles by hand and runs the
//! systems through one-off schedules, the same way the simulation wires them.

use bevy_ecs::prelude::*;
use glam::Vec2;

use hitboxsim::components::body::Body;
use hitboxsim::components::controlbinding::{ControlBinding, ControlKeys};
use hitboxsim::components::group::{CollidesWith, Groups};
use hitboxsim::components::identity::EntityId;
use hitboxsim::components::rect::Anchor;
use hitboxsim::components::velocity::Velocity;
use hitboxsim::events::contact::{Contacts, record_contact};
use hitboxsim::resources::gameconfig::GameConfig;
use hitboxsim::resources::input::{Intent, Intents};
use hitboxsim::systems::control::control;
use hitboxsim::systems::movement::movement;

fn make_world(clamp_to_bounds: bool) -> World {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.clamp_to_bounds = clamp_to_bounds;
    world.insert_resource(config);
    world.insert_resource(Intents::default());
    world.insert_resource(Contacts::default());
    world.add_observer(record_contact);
    world.flush();
    world
}

fn tick_control(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(control);
    schedule.run(world);
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
    world.flush();
}

fn all_aligned(world: &mut World) -> bool {
    let mut query = world.query::<&Body>();
    query.iter(world).all(Body::is_aligned)
}

fn square(center: Vec2, side: f32) -> Body {
    Body::shared(Vec2::splat(side), center).unwrap()
}

#[test]
fn control_sets_velocity_from_intents() {
    let mut world = make_world(true);
    let moving = world
        .spawn((
            EntityId(0),
            ControlBinding::new(ControlKeys::wasd(), 5.0),
            Velocity::zero(),
        ))
        .id();
    let idle = world
        .spawn((
            EntityId(1),
            ControlBinding::new(ControlKeys::arrows(), 5.0),
            Velocity::new(3.0, 3.0),
        ))
        .id();

    world.resource_mut::<Intents>().set(
        EntityId(0),
        Intent {
            down: true,
            left: true,
            ..Intent::default()
        },
    );
    tick_control(&mut world);

    assert_eq!(
        world.get::<Velocity>(moving).unwrap().value,
        Vec2::new(-5.0, 5.0)
    );
    // no intent entry: entities do not coast
    assert_eq!(world.get::<Velocity>(idle).unwrap().value, Vec2::ZERO);
}

#[test]
fn movement_without_obstacle_group_moves_freely() {
    let mut world = make_world(false);
    let e = world
        .spawn((
            EntityId(0),
            square(Vec2::new(100.0, 100.0), 20.0),
            Velocity::new(5.0, -2.0),
        ))
        .id();
    world.spawn((
        EntityId(1),
        square(Vec2::new(105.0, 100.0), 20.0),
        Groups::new(["all"]),
    ));

    tick_movement(&mut world);

    let body = world.get::<Body>(e).unwrap();
    assert_eq!(body.hit_box().center(), Vec2::new(105.0, 98.0));
    assert!(world.resource::<Contacts>().0.is_empty());
}

#[test]
fn movement_resolves_each_axis_and_raises_contacts() {
    let mut world = make_world(false);
    // wall directly below the mover, touching its bottom edge
    let mover = world
        .spawn((
            EntityId(0),
            square(Vec2::new(100.0, 100.0), 20.0),
            Velocity::new(5.0, 5.0),
            CollidesWith("walls".to_string()),
        ))
        .id();
    world.spawn((
        EntityId(1),
        square(Vec2::new(100.0, 210.0), 200.0),
        Groups::new(["walls"]),
    ));

    tick_movement(&mut world);

    let body = world.get::<Body>(mover).unwrap();
    // X move is free (the wall is below), Y move is snapped back onto the wall
    assert_eq!(body.hit_box().x, 95.0);
    assert_eq!(body.hit_box().bottom(), 110.0);

    let contacts = &world.resource::<Contacts>().0;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].mover, EntityId(0));
    assert_eq!(contacts[0].obstacle, EntityId(1));
}

#[test]
fn movers_see_positions_of_earlier_movers() {
    let mut world = make_world(false);
    let all = Groups::new(["all"]);
    let a = world
        .spawn((
            EntityId(0),
            Body::new(
                Vec2::new(20.0, 20.0),
                Vec2::new(90.0, 100.0),
                None,
                Anchor::Center,
            )
            .unwrap(),
            Velocity::new(5.0, 0.0),
            CollidesWith("all".to_string()),
            all.clone(),
        ))
        .id();
    let b = world
        .spawn((
            EntityId(1),
            square(Vec2::new(112.0, 100.0), 20.0),
            Velocity::new(5.0, 0.0),
            CollidesWith("all".to_string()),
            all,
        ))
        .id();

    tick_movement(&mut world);

    // a runs first and hits b where b stood at the start of the tick
    assert_eq!(world.get::<Body>(a).unwrap().hit_box().right(), 102.0);
    assert_eq!(world.get::<Body>(b).unwrap().hit_box().left(), 107.0);
}

#[test]
fn movement_clamps_to_world_bounds() {
    let mut world = make_world(true);
    let e = world
        .spawn((
            EntityId(0),
            Body::new(
                Vec2::new(100.0, 100.0),
                Vec2::new(595.0, 40.0),
                Some(Vec2::new(80.0, 80.0)),
                Anchor::MidBottom,
            )
            .unwrap(),
            Velocity::new(5.0, -5.0),
        ))
        .id();

    tick_movement(&mut world);

    let body = world.get::<Body>(e).unwrap();
    assert_eq!(body.hit_box().right(), 600.0);
    assert_eq!(body.hit_box().top(), 0.0);
    assert!(body.is_aligned());
}

#[test]
fn static_entities_are_never_moved() {
    let mut world = make_world(true);
    let block = world
        .spawn((
            EntityId(0),
            square(Vec2::new(-50.0, -50.0), 40.0),
            Groups::new(["all"]),
        ))
        .id();
    let before = *world.get::<Body>(block).unwrap();

    tick_movement(&mut world);

    // outside the world, but not a mover: no clamp either
    assert_eq!(*world.get::<Body>(block).unwrap(), before);
    assert!(all_aligned(&mut world));
}
