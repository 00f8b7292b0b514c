//! Pedestrian agents walking the crosswalks
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::{
    Axis, Position, CENTER, CENTER_BAND_HIGH, CENTER_BAND_LOW, PEDESTRIAN_STEP,
    RETURN_SNAP_DISTANCE,
};

/// Agents per approach in the default layout
pub const PEDESTRIANS_PER_APPROACH: usize = 4;

/// Spacing between neighbouring agents along their home edge
pub const PEDESTRIAN_SPACING: f32 = 40.0;

/// What happened to an agent during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedestrianUpdate {
    /// No movement
    Idle,
    /// Moved toward the center
    Advanced,
    /// Moved toward the center and is now committed to the crossing
    StartedCrossing,
    /// Took a return-leg step without landing near home
    Returned,
    /// Arrived home and snapped onto the home position
    FinishedCrossing,
}

/// A pedestrian agent
///
/// The outbound leg ends on leaving the center band (250/350) while the
/// return leg ends within 5 units of home. Return steps head toward the
/// center line, not toward home, so an agent whose home lies inside the
/// band never gets back and settles oscillating between 299 and 300.
#[derive(Debug, Clone, PartialEq)]
pub struct SimPedestrian {
    pub home: Position,
    pub axis: Axis,
    pub position: Position,
    pub speed: f32,
    /// Set once the agent is committed to the round trip; cleared on
    /// arriving home
    pub crossing: bool,
}

impl SimPedestrian {
    pub fn new(home: Position, axis: Axis) -> Self {
        Self {
            home,
            axis,
            position: home,
            speed: PEDESTRIAN_STEP,
            crossing: false,
        }
    }

    /// Advance one tick. `can_walk` is the WALK state of this agent's axis.
    pub fn update(&mut self, can_walk: bool) -> PedestrianUpdate {
        if self.crossing {
            self.step_return()
        } else if can_walk {
            self.step_out()
        } else {
            PedestrianUpdate::Idle
        }
    }

    /// Outbound step. Direction is picked from the home side of center;
    /// a home exactly on 300 moves +1 vertically and -1 horizontally.
    fn step_out(&mut self) -> PedestrianUpdate {
        let home = self.home.along(self.axis);
        let delta = match self.axis {
            Axis::Vertical => {
                if home > CENTER {
                    -self.speed
                } else {
                    self.speed
                }
            }
            Axis::Horizontal => {
                if home < CENTER {
                    self.speed
                } else {
                    -self.speed
                }
            }
        };

        let coord = self.position.along_mut(self.axis);
        *coord += delta;

        if *coord < CENTER_BAND_LOW || *coord > CENTER_BAND_HIGH {
            self.crossing = true;
            PedestrianUpdate::StartedCrossing
        } else {
            PedestrianUpdate::Advanced
        }
    }

    /// Return step. Moves toward the center line from the current side,
    /// which differs per axis at exactly 300.
    fn step_return(&mut self) -> PedestrianUpdate {
        let coord = self.position.along(self.axis);
        let delta = match self.axis {
            Axis::Vertical => {
                if coord < CENTER {
                    self.speed
                } else {
                    -self.speed
                }
            }
            Axis::Horizontal => {
                if coord > CENTER {
                    -self.speed
                } else {
                    self.speed
                }
            }
        };
        *self.position.along_mut(self.axis) += delta;

        let distance = (self.position.along(self.axis) - self.home.along(self.axis)).abs();
        if distance < RETURN_SNAP_DISTANCE {
            self.position = self.home;
            self.crossing = false;
            PedestrianUpdate::FinishedCrossing
        } else {
            PedestrianUpdate::Returned
        }
    }

    pub fn is_home(&self) -> bool {
        self.position == self.home
    }
}

/// The fixed 16-agent layout: four per approach, 40 units apart along
/// their home edge
pub fn default_roster() -> Vec<SimPedestrian> {
    let mut roster = Vec::with_capacity(PEDESTRIANS_PER_APPROACH * 4);
    let offsets = (0..PEDESTRIANS_PER_APPROACH).map(|i| i as f32 * PEDESTRIAN_SPACING);

    // North side, walking down the left half of the vertical road
    roster.extend(
        offsets
            .clone()
            .map(|o| SimPedestrian::new(Position::new(280.0, 10.0 + o), Axis::Vertical)),
    );
    // South side, walking up the right half
    roster.extend(
        offsets
            .clone()
            .map(|o| SimPedestrian::new(Position::new(320.0, 590.0 - o), Axis::Vertical)),
    );
    // West side, walking right along the upper half of the horizontal road
    roster.extend(
        offsets
            .clone()
            .map(|o| SimPedestrian::new(Position::new(10.0 + o, 280.0), Axis::Horizontal)),
    );
    // East side, walking left along the lower half
    roster.extend(
        offsets.map(|o| SimPedestrian::new(Position::new(590.0 - o, 320.0), Axis::Horizontal)),
    );

    roster
}
