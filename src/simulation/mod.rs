//! Standalone intersection simulation module
//!
//! This module contains all the core timing and pedestrian logic that can
//! run independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod config;
mod error;
mod pedestrian;
mod scheduler;
mod snapshot;
mod types;
mod world;

pub use config::{PhaseDurations, DEFAULT_GREEN_TIME, DEFAULT_RED_TIME, DEFAULT_YELLOW_TIME};
pub use error::SimError;
pub use pedestrian::{
    default_roster, PedestrianUpdate, SimPedestrian, PEDESTRIANS_PER_APPROACH, PEDESTRIAN_SPACING,
};
pub use scheduler::{phase_at, signals_at, signals_at_elapsed, Phase, SignalState};
pub use snapshot::{PedestrianView, TrafficSnapshot};
pub use types::{
    Axis, CrossingLabel, Direction, LightState, PedestrianSignal, Position, TrafficLight,
    WalkSignal, CENTER, CENTER_BAND_HIGH, CENTER_BAND_LOW, PEDESTRIAN_STEP, RETURN_SNAP_DISTANCE,
    SCENE_SIZE,
};
pub use world::{light_position, SimWorld};
