//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{Direction, LightState, SimWorld, TrafficSnapshot};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

/// The snapshot produced by the last simulation tick. Render systems read
/// only this, never the world itself.
#[derive(Resource)]
pub struct SnapshotResource(pub TrafficSnapshot);

/// One lamp of a vehicle light head, lit while the light is in `state`
#[derive(Component)]
pub struct VehicleLamp {
    pub direction: Direction,
    pub state: LightState,
}

/// Which lamp of a pedestrian signal head this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkLampKind {
    /// Lit green while the approach's vehicle light is red
    Walk,
    /// Lit red while the approach's vehicle light is green
    Stop,
}

/// One lamp of a pedestrian signal head
#[derive(Component)]
pub struct WalkLamp {
    pub direction: Direction,
    pub kind: WalkLampKind,
}

/// GO / WAIT / STOP text beside an approach
#[derive(Component)]
pub struct CrossingLabelText(pub Direction);

/// Links a Bevy entity to a pedestrian by roster index
#[derive(Component)]
pub struct PedestrianLink(pub usize);

/// Phase and cycle time readout
#[derive(Component)]
pub struct PhaseText;
