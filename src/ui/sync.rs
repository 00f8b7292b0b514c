//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{
    CrossingLabelText, PedestrianLink, PhaseText, SimWorldResource, SnapshotResource,
    VehicleLamp, WalkLamp, WalkLampKind,
};
use super::scene::{to_world, LAMP_GREEN, LAMP_OFF, LAMP_RED, LAMP_YELLOW};
use crate::simulation::LightState;

/// System to run one simulation tick against the fixed clock. A rejected
/// tick stops the app.
pub fn tick_simulation(
    time: Res<Time>,
    mut sim_world: ResMut<SimWorldResource>,
    mut snapshot: ResMut<SnapshotResource>,
    mut exit: MessageWriter<AppExit>,
) {
    match sim_world.0.advance_to(time.elapsed_secs()) {
        Ok(next) => snapshot.0 = next,
        Err(e) => {
            error!("Simulation tick failed: {}", e);
            exit.write(AppExit::error());
        }
    }
}

/// System to light the vehicle lamp matching each light's state
pub fn sync_vehicle_lamps(
    snapshot: Res<SnapshotResource>,
    lamp_query: Query<(&VehicleLamp, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (lamp, material_handle) in lamp_query.iter() {
        let light = snapshot.0.light(lamp.direction);
        let color = if light.state != lamp.state {
            LAMP_OFF
        } else {
            match lamp.state {
                LightState::Red => LAMP_RED,
                LightState::Yellow => LAMP_YELLOW,
                LightState::Green => LAMP_GREEN,
            }
        };
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = color;
        }
    }
}

/// System to update pedestrian signal heads. The walk lamp shows while
/// vehicles on the approach have red, the stop lamp while they have
/// green; both are dark during yellow.
pub fn sync_walk_lamps(
    snapshot: Res<SnapshotResource>,
    lamp_query: Query<(&WalkLamp, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (lamp, material_handle) in lamp_query.iter() {
        let light = snapshot.0.light(lamp.direction);
        let color = match lamp.kind {
            WalkLampKind::Walk if light.is_red() => LAMP_GREEN,
            WalkLampKind::Stop if light.is_green() => LAMP_RED,
            _ => LAMP_OFF,
        };
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.color = color;
        }
    }
}

/// System to update the GO / WAIT / STOP text
pub fn sync_crossing_labels(
    snapshot: Res<SnapshotResource>,
    mut text_query: Query<(&CrossingLabelText, &mut Text2d)>,
) {
    for (label, mut text) in text_query.iter_mut() {
        let wanted = snapshot.0.crossing_label(label.0).text();
        if text.as_str() != wanted {
            **text = wanted.to_string();
        }
    }
}

/// System to move pedestrian figures to their snapshot positions
pub fn sync_pedestrians(
    snapshot: Res<SnapshotResource>,
    mut pedestrian_query: Query<(&PedestrianLink, &mut Transform)>,
) {
    for (link, mut transform) in pedestrian_query.iter_mut() {
        if let Some(pedestrian) = snapshot.0.pedestrians.get(link.0) {
            transform.translation = to_world(pedestrian.position, transform.translation.z);
        }
    }
}

/// System to show the current phase and cycle position
pub fn sync_phase_text(
    snapshot: Res<SnapshotResource>,
    mut text_query: Query<&mut Text2d, With<PhaseText>>,
) {
    let snapshot = &snapshot.0;
    for mut text in text_query.iter_mut() {
        **text = format!(
            "{} | {:.1}s / {:.1}s",
            snapshot.phase.label(),
            snapshot.cycle_time,
            snapshot.durations.total_cycle()
        );
    }
}
