//! Startup system that lays out the intersection
//!
//! Scene coordinates are screen-style (origin top-left, y down, 600x600);
//! `to_world` maps them onto Bevy's centered, y-up 2D space.

use bevy::prelude::*;

use super::components::{
    CrossingLabelText, PedestrianLink, PhaseText, SnapshotResource, VehicleLamp, WalkLamp,
    WalkLampKind,
};
use crate::simulation::{light_position, Direction, LightState, Position, CENTER};

pub const ROAD_COLOR: Color = Color::srgb(60.0 / 255.0, 60.0 / 255.0, 120.0 / 255.0);
pub const MARKING_COLOR: Color = Color::WHITE;
pub const LAMP_OFF: Color = Color::srgb(192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0);
pub const LAMP_RED: Color = Color::srgb(1.0, 0.0, 0.0);
pub const LAMP_YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
pub const LAMP_GREEN: Color = Color::srgb(0.0, 1.0, 0.0);
pub const PEDESTRIAN_COLOR: Color = Color::srgb(0.9, 0.45, 0.1);

const VEHICLE_LAMP_RADIUS: f32 = 10.0;
const VEHICLE_LAMP_SPACING: f32 = 30.0;
const WALK_LAMP_RADIUS: f32 = 5.0;
const WALK_LAMP_SPACING: f32 = 5.0;
const PEDESTRIAN_RADIUS: f32 = 5.0;

const Z_ROAD: f32 = 0.0;
const Z_MARKING: f32 = 1.0;
const Z_LAMP: f32 = 2.0;
const Z_PEDESTRIAN: f32 = 3.0;
const Z_TEXT: f32 = 4.0;

/// Map a scene position onto the Bevy world
pub fn to_world(pos: Position, z: f32) -> Vec3 {
    Vec3::new(pos.x - CENTER, CENTER - pos.y, z)
}

/// Both pedestrian signal heads of an approach
fn walk_lamp_positions(direction: Direction) -> [Position; 2] {
    match direction {
        Direction::North => [Position::new(190.0, 150.0), Position::new(410.0, 150.0)],
        Direction::South => [Position::new(190.0, 450.0), Position::new(410.0, 450.0)],
        Direction::East => [Position::new(450.0, 190.0), Position::new(450.0, 410.0)],
        Direction::West => [Position::new(150.0, 190.0), Position::new(150.0, 410.0)],
    }
}

/// Top-left corner of the GO / WAIT / STOP text
fn label_position(direction: Direction) -> Position {
    match direction {
        Direction::North => Position::new(320.0, 80.0),
        Direction::South => Position::new(320.0, 520.0),
        Direction::East => Position::new(120.0, 280.0),
        Direction::West => Position::new(440.0, 280.0),
    }
}

/// System to build the static scene and spawn the dynamic entities
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    snapshot: Res<SnapshotResource>,
) {
    commands.spawn(Camera2d);

    spawn_roads(&mut commands);
    spawn_crosswalks(&mut commands);
    spawn_vehicle_lamps(&mut commands, &mut meshes, &mut materials);
    spawn_walk_lamps(&mut commands, &mut meshes, &mut materials);
    spawn_labels(&mut commands, &snapshot);
    spawn_pedestrians(&mut commands, &mut meshes, &mut materials, &snapshot);
}

/// Spawn an axis-aligned rectangle given its top-left corner and size
fn spawn_rect(commands: &mut Commands, color: Color, x: f32, y: f32, w: f32, h: f32, z: f32) {
    let center = Position::new(x + w / 2.0, y + h / 2.0);
    commands.spawn((
        Sprite::from_color(color, Vec2::new(w, h)),
        Transform::from_translation(to_world(center, z)),
    ));
}

fn spawn_roads(commands: &mut Commands) {
    spawn_rect(commands, ROAD_COLOR, 50.0, 200.0, 500.0, 200.0, Z_ROAD);
    spawn_rect(commands, ROAD_COLOR, 200.0, 50.0, 200.0, 500.0, Z_ROAD);

    // Center lines
    spawn_rect(commands, MARKING_COLOR, 50.0, 298.0, 500.0, 4.0, Z_MARKING);
    spawn_rect(commands, MARKING_COLOR, 298.0, 50.0, 4.0, 500.0, Z_MARKING);
}

fn spawn_crosswalks(commands: &mut Commands) {
    // Ten stripes per crosswalk, 20 apart, the last one trimmed to fit
    for i in 0..10 {
        let offset = 210.0 + i as f32 * 20.0;
        let width = if i == 9 { 8.0 } else { 10.0 };

        // Left and right: horizontal stripes
        spawn_rect(commands, MARKING_COLOR, 150.0, offset, 50.0, width, Z_MARKING);
        spawn_rect(commands, MARKING_COLOR, 400.0, offset, 50.0, width, Z_MARKING);
        // Up and down: vertical stripes
        spawn_rect(commands, MARKING_COLOR, offset, 150.0, width, 50.0, Z_MARKING);
        spawn_rect(commands, MARKING_COLOR, offset, 400.0, width, 50.0, Z_MARKING);
    }
}

fn spawn_vehicle_lamps(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(Circle::new(VEHICLE_LAMP_RADIUS));

    for direction in Direction::ALL {
        let head = light_position(direction);
        for (state, dy) in [
            (LightState::Red, -VEHICLE_LAMP_SPACING),
            (LightState::Yellow, 0.0),
            (LightState::Green, VEHICLE_LAMP_SPACING),
        ] {
            let pos = Position::new(head.x, head.y + dy);
            commands.spawn((
                VehicleLamp { direction, state },
                Mesh2d(mesh.clone()),
                MeshMaterial2d(materials.add(ColorMaterial::from(LAMP_OFF))),
                Transform::from_translation(to_world(pos, Z_LAMP)),
            ));
        }
    }
}

fn spawn_walk_lamps(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(Circle::new(WALK_LAMP_RADIUS));

    for direction in Direction::ALL {
        for head in walk_lamp_positions(direction) {
            // North/south heads stack vertically, east/west side by side
            let (walk_pos, stop_pos) = match direction {
                Direction::North | Direction::South => (
                    Position::new(head.x, head.y - WALK_LAMP_SPACING),
                    Position::new(head.x, head.y + WALK_LAMP_SPACING),
                ),
                Direction::East | Direction::West => (
                    Position::new(head.x - WALK_LAMP_SPACING, head.y),
                    Position::new(head.x + WALK_LAMP_SPACING, head.y),
                ),
            };

            for (kind, pos) in [(WalkLampKind::Walk, walk_pos), (WalkLampKind::Stop, stop_pos)] {
                commands.spawn((
                    WalkLamp { direction, kind },
                    Mesh2d(mesh.clone()),
                    MeshMaterial2d(materials.add(ColorMaterial::from(LAMP_OFF))),
                    Transform::from_translation(to_world(pos, Z_LAMP)),
                ));
            }
        }
    }
}

fn spawn_labels(commands: &mut Commands, snapshot: &SnapshotResource) {
    for direction in Direction::ALL {
        let corner = label_position(direction);
        let pos = Position::new(corner.x + 20.0, corner.y + 8.0);
        commands.spawn((
            CrossingLabelText(direction),
            Text2d::new(snapshot.0.crossing_label(direction).text()),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(Color::BLACK),
            Transform::from_translation(to_world(pos, Z_TEXT)),
        ));
    }

    commands.spawn((
        PhaseText,
        Text2d::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Transform::from_translation(to_world(Position::new(CENTER, 20.0), Z_TEXT)),
    ));
}

fn spawn_pedestrians(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    snapshot: &SnapshotResource,
) {
    let mesh = meshes.add(Circle::new(PEDESTRIAN_RADIUS));
    let material = materials.add(ColorMaterial::from(PEDESTRIAN_COLOR));

    for (index, pedestrian) in snapshot.0.pedestrians.iter().enumerate() {
        commands.spawn((
            PedestrianLink(index),
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(to_world(pedestrian.position, Z_PEDESTRIAN)),
        ));
    }
}
