//! Per-tick read-only view handed to renderers

use super::config::PhaseDurations;
use super::pedestrian::SimPedestrian;
use super::scheduler::Phase;
use super::types::{CrossingLabel, Direction, PedestrianSignal, Position, TrafficLight};

/// Where one agent is and whether it is mid-crossing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PedestrianView {
    pub position: Position,
    pub home: Position,
    pub crossing: bool,
}

impl From<&SimPedestrian> for PedestrianView {
    fn from(pedestrian: &SimPedestrian) -> Self {
        Self {
            position: pedestrian.position,
            home: pedestrian.home,
            crossing: pedestrian.crossing,
        }
    }
}

/// Everything a renderer needs for one frame
///
/// Built after the scheduler and every agent have been updated, so it
/// never mixes states from two ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSnapshot {
    pub tick: u64,
    pub elapsed: f32,
    pub cycle_time: f32,
    pub phase: Phase,
    pub durations: PhaseDurations,
    pub lights: [TrafficLight; 4],
    pub signals: [PedestrianSignal; 4],
    pub pedestrians: Vec<PedestrianView>,
}

impl TrafficSnapshot {
    pub fn light(&self, direction: Direction) -> &TrafficLight {
        &self.lights[direction.index()]
    }

    pub fn signal(&self, direction: Direction) -> &PedestrianSignal {
        &self.signals[direction.index()]
    }

    pub fn crossing_label(&self, direction: Direction) -> CrossingLabel {
        CrossingLabel::for_approach(self.light(direction), self.signal(direction))
    }

    pub fn crossing_count(&self) -> usize {
        self.pedestrians.iter().filter(|p| p.crossing).count()
    }
}
