//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The simulation ticks in `FixedUpdate` at 60 Hz; render systems only read the
//! resulting `TrafficSnapshot`.

mod components;
mod input;
mod scene;
mod sync;

use bevy::prelude::*;

use crate::simulation::{PhaseDurations, SimWorld};

pub use components::{SimWorldResource, SnapshotResource};
pub use sync::tick_simulation;

use input::handle_input;
use scene::setup_scene;
use sync::{
    sync_crossing_labels, sync_pedestrians, sync_phase_text, sync_vehicle_lamps, sync_walk_lamps,
};

/// Ticks per second, one per rendered frame
pub const TICK_RATE_HZ: f64 = 60.0;

/// Plugin to register all UI systems
pub struct IntersectionUIPlugin {
    pub durations: PhaseDurations,
}

impl Plugin for IntersectionUIPlugin {
    fn build(&self, app: &mut App) {
        let world = SimWorld::new(self.durations);
        let snapshot = world.snapshot();

        app.insert_resource(SimWorldResource(world))
            .insert_resource(SnapshotResource(snapshot))
            .insert_resource(ClearColor(Color::WHITE))
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_systems(Startup, setup_scene)
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    sync_vehicle_lamps,
                    sync_walk_lamps,
                    sync_crossing_labels,
                    sync_pedestrians,
                    sync_phase_text,
                    handle_input,
                ),
            );
    }
}
