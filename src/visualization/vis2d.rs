use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::collisions::resolve_collisions;
use crate::simulation::energy::compute_energy;
use crate::simulation::engine::step;
use crate::simulation::prediction::predict;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{BodyId, NVec2};

/// Component tagging each circle with the id of its body. The mesh is
/// built at `base_radius`; growth from merges is applied as a scale.
#[derive(Component)]
struct BodyMarker {
    id: BodyId,
    base_radius: f32,
}

#[derive(Component)]
struct StatsText;

pub fn run_2d(scenario: Scenario) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_bodies_system,
                trail_gizmos_system,
                prediction_gizmos_system,
                stats_text_system,
            )
                .chain(),
        )
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for body in scenario.system.bodies.iter() {
        let radius_screen = (body.radius as f32).max(1.0);
        let [r, g, b] = body.color;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(Color::srgb(r, g, b))),
                transform: Transform::from_xyz(body.x.x as f32, body.x.y as f32, 0.0),
                ..Default::default()
            },
            BodyMarker {
                id: body.id,
                base_radius: radius_screen,
            },
        ));
    }

    // Sim time / integrator / energy readout, top-left
    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..Default::default()
        }),
        StatsText,
    ));
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        engine,
        parameters,
        system,
        forces,
        focus,
    } = &mut *scenario;

    let dt = parameters.step_size();
    step(system, forces, parameters, &engine.integrator, dt);

    if engine.collisions {
        system.bodies = resolve_collisions(&system.bodies);
        // Drop the selection if the focus body was absorbed
        if let Some(id) = *focus {
            if system.body_index(id).is_none() {
                *focus = None;
            }
        }
    }
}

fn sync_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut query: Query<(Entity, &BodyMarker, &mut Transform)>,
) {
    for (entity, marker, mut transform) in &mut query {
        match scenario.system.body_index(marker.id) {
            Some(i) => {
                let b = &scenario.system.bodies[i];
                transform.translation.x = b.x.x as f32;
                transform.translation.y = b.x.y as f32;
                transform.scale = Vec3::splat(b.radius as f32 / marker.base_radius);
            }
            // Body was merged away; its circle goes with it
            None => commands.entity(entity).despawn(),
        }
    }
}

fn trail_gizmos_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for body in scenario.system.bodies.iter() {
        if body.trail.len() < 2 {
            continue;
        }
        let [r, g, b] = body.color;
        gizmos.linestrip_2d(body.trail.iter().map(to_vec2), Color::srgb(r, g, b));
    }
}

fn prediction_gizmos_system(mut scenario: ResMut<Scenario>, mut gizmos: Gizmos) {
    if !scenario.engine.prediction {
        return;
    }
    let Some(focus) = scenario.focus else {
        return;
    };

    let path = {
        let s = &*scenario;
        predict(&s.system, &s.forces, &s.parameters, focus, s.parameters.prediction_steps)
    };

    match path {
        Some(points) => gizmos.linestrip_2d(points.iter().map(to_vec2), Color::srgb(0.22, 1.0, 0.08)),
        // Shouldn't happen (the step system clears the focus), but a
        // stale selection must never break the frame loop
        None => scenario.focus = None,
    }
}

fn stats_text_system(scenario: Res<Scenario>, mut query: Query<&mut Text, With<StatsText>>) {
    let (kinetic, potential) = compute_energy(&scenario.system, scenario.parameters.G);
    for mut text in &mut query {
        text.sections[0].value = format!(
            "t = {:.2}  integrator: {:?}\nkinetic: {:.3e}  potential: {:.3e}",
            scenario.system.t, scenario.engine.integrator, kinetic, potential,
        );
    }
}

fn to_vec2(p: &NVec2) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}
