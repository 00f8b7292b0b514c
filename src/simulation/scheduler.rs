//! Phase scheduling for the two light pairs
//!
//! The schedule is a pure function of the cycle time and the durations.
//! Naming follows the vehicle flow: during `EastWestGo` the north/south
//! road is red while east/west traffic has green.
//!
//! | Interval                       | N/S    | E/W    | N/S ped | E/W ped |
//! |--------------------------------|--------|--------|---------|---------|
//! | `[0, r)`                       | RED    | GREEN  | STOP    | WALK    |
//! | `[r, r+y)`                     | RED    | YELLOW | STOP    | WALK    |
//! | `[r+y, r+y+g)`                 | GREEN  | RED    | WALK    | STOP    |
//! | `[r+y+g, r+y+g+y)`             | YELLOW | RED    | WALK    | STOP    |
//!
//! Pedestrian signals only flip where one road turns red and the other
//! turns green; they hold through the yellow phases.

use super::config::PhaseDurations;
use super::error::SimError;
use super::types::{Axis, Direction, LightState, WalkSignal};

/// One of the four intervals of the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    EastWestGo,
    EastWestClearing,
    NorthSouthGo,
    NorthSouthClearing,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::EastWestGo => "east/west green",
            Phase::EastWestClearing => "east/west yellow",
            Phase::NorthSouthGo => "north/south green",
            Phase::NorthSouthClearing => "north/south yellow",
        }
    }

    /// The light states of (north/south, east/west) in this phase
    fn lights(self) -> (LightState, LightState) {
        match self {
            Phase::EastWestGo => (LightState::Red, LightState::Green),
            Phase::EastWestClearing => (LightState::Red, LightState::Yellow),
            Phase::NorthSouthGo => (LightState::Green, LightState::Red),
            Phase::NorthSouthClearing => (LightState::Yellow, LightState::Red),
        }
    }

    /// The pedestrian signals of (north/south, east/west) in this phase
    fn signals(self) -> (WalkSignal, WalkSignal) {
        match self {
            Phase::EastWestGo | Phase::EastWestClearing => (WalkSignal::Stop, WalkSignal::Walk),
            Phase::NorthSouthGo | Phase::NorthSouthClearing => {
                (WalkSignal::Walk, WalkSignal::Stop)
            }
        }
    }
}

/// Light and pedestrian-signal states for all four approaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalState {
    pub phase: Phase,
    lights: [LightState; 4],
    signals: [WalkSignal; 4],
}

impl SignalState {
    fn from_phase(phase: Phase) -> Self {
        let (ns_light, ew_light) = phase.lights();
        let (ns_signal, ew_signal) = phase.signals();

        let mut lights = [LightState::Red; 4];
        let mut signals = [WalkSignal::Stop; 4];
        for direction in Direction::ALL {
            let (light, signal) = match direction.axis() {
                Axis::Vertical => (ns_light, ns_signal),
                Axis::Horizontal => (ew_light, ew_signal),
            };
            lights[direction.index()] = light;
            signals[direction.index()] = signal;
        }

        Self {
            phase,
            lights,
            signals,
        }
    }

    pub fn light(&self, direction: Direction) -> LightState {
        self.lights[direction.index()]
    }

    pub fn signal(&self, direction: Direction) -> WalkSignal {
        self.signals[direction.index()]
    }

    /// Whether agents travelling along `axis` may walk: either approach
    /// of the axis showing WALK is enough
    pub fn axis_can_walk(&self, axis: Axis) -> bool {
        axis.directions()
            .iter()
            .any(|direction| self.signal(*direction).can_walk())
    }
}

/// Which phase covers `cycle_time`. Caller guarantees
/// `0 <= cycle_time < durations.total_cycle()`; anything past the last
/// boundary is treated as the final phase.
pub fn phase_at(cycle_time: f32, durations: &PhaseDurations) -> Phase {
    let ew_clearing_start = durations.red();
    let ns_go_start = ew_clearing_start + durations.yellow();
    let ns_clearing_start = ns_go_start + durations.green();

    if cycle_time < ew_clearing_start {
        Phase::EastWestGo
    } else if cycle_time < ns_go_start {
        Phase::EastWestClearing
    } else if cycle_time < ns_clearing_start {
        Phase::NorthSouthGo
    } else {
        Phase::NorthSouthClearing
    }
}

/// States for the given cycle time
pub fn signals_at(cycle_time: f32, durations: &PhaseDurations) -> SignalState {
    SignalState::from_phase(phase_at(cycle_time, durations))
}

/// States for an absolute elapsed time; the cycle is taken modulo here
pub fn signals_at_elapsed(
    elapsed: f32,
    durations: &PhaseDurations,
) -> Result<SignalState, SimError> {
    let cycle_time = durations.cycle_time(elapsed)?;
    Ok(signals_at(cycle_time, durations))
}
