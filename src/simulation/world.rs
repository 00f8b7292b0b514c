//! Main simulation world that ties everything together
//!
//! This is the entry point for running the intersection simulation
//! without any Bevy dependencies. The world is the only writer of lights,
//! signals and agents; each tick runs scheduler, then agents, then builds
//! the snapshot.

use log::{debug, info};

use super::config::PhaseDurations;
use super::error::SimError;
use super::pedestrian::{default_roster, PedestrianUpdate, SimPedestrian};
use super::scheduler::{signals_at, Phase, SignalState};
use super::snapshot::{PedestrianView, TrafficSnapshot};
use super::types::{
    CrossingLabel, Direction, LightState, PedestrianSignal, Position, TrafficLight, CENTER, SCENE_SIZE,
};

/// Where each approach's vehicle light head sits in the scene
pub fn light_position(direction: Direction) -> Position {
    match direction {
        Direction::North => Position::new(300.0, 100.0),
        Direction::South => Position::new(300.0, 500.0),
        Direction::East => Position::new(100.0, 300.0),
        Direction::West => Position::new(500.0, 300.0),
    }
}

/// The main simulation world
pub struct SimWorld {
    durations: PhaseDurations,

    /// Vehicle lights, indexed by `Direction::index`
    lights: [TrafficLight; 4],

    /// Pedestrian signals, indexed by `Direction::index`
    signals: [PedestrianSignal; 4],

    /// All agents, in roster order
    pedestrians: Vec<SimPedestrian>,

    phase: Phase,

    /// Last elapsed time seen from the host clock
    time: f32,

    /// Position within the current cycle
    cycle_time: f32,

    /// Number of ticks run so far
    ticks: u64,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new(PhaseDurations::default())
    }
}

impl SimWorld {
    /// Create a world with the default 16-agent layout
    pub fn new(durations: PhaseDurations) -> Self {
        Self::with_pedestrians(durations, default_roster())
    }

    /// Create a world with a custom roster
    pub fn with_pedestrians(durations: PhaseDurations, pedestrians: Vec<SimPedestrian>) -> Self {
        let initial = signals_at(0.0, &durations);
        let lights = Direction::ALL.map(|d| TrafficLight::new(d, initial.light(d)));
        let signals = Direction::ALL.map(|d| PedestrianSignal::new(d, initial.signal(d)));

        info!(
            "Created intersection: red={}s green={}s yellow={}s (cycle {}s), {} pedestrians",
            durations.red(),
            durations.green(),
            durations.yellow(),
            durations.total_cycle(),
            pedestrians.len()
        );

        Self {
            durations,
            lights,
            signals,
            pedestrians,
            phase: initial.phase,
            time: 0.0,
            cycle_time: 0.0,
            ticks: 0,
        }
    }

    pub fn durations(&self) -> &PhaseDurations {
        &self.durations
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pedestrians(&self) -> &[SimPedestrian] {
        &self.pedestrians
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn cycle_time(&self) -> f32 {
        self.cycle_time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn light(&self, direction: Direction) -> &TrafficLight {
        &self.lights[direction.index()]
    }

    pub fn signal(&self, direction: Direction) -> &PedestrianSignal {
        &self.signals[direction.index()]
    }

    /// Advance the world by `delta_secs` of host time
    pub fn tick(&mut self, delta_secs: f32) -> Result<TrafficSnapshot, SimError> {
        if !(delta_secs.is_finite() && delta_secs > 0.0) {
            return Err(SimError::InvalidDelta(delta_secs));
        }
        self.advance_to(self.time + delta_secs)
    }

    /// Run one tick at the given absolute elapsed time
    ///
    /// Elapsed time must be non-negative and must not go backwards.
    pub fn advance_to(&mut self, elapsed: f32) -> Result<TrafficSnapshot, SimError> {
        let cycle_time = self.durations.cycle_time(elapsed)?;
        if elapsed < self.time {
            return Err(SimError::ClockWentBackwards {
                previous: self.time,
                current: elapsed,
            });
        }

        self.time = elapsed;
        self.cycle_time = cycle_time;
        self.ticks += 1;

        // Scheduler first, so no agent sees a half-updated set of signals
        let state = signals_at(cycle_time, &self.durations);
        self.apply_signals(&state);
        self.update_pedestrians(&state);

        Ok(self.snapshot())
    }

    fn apply_signals(&mut self, state: &SignalState) {
        if state.phase != self.phase {
            debug!(
                "t={:.3}s cycle={:.3}s: {} -> {}",
                self.time,
                self.cycle_time,
                self.phase.label(),
                state.phase.label()
            );
            self.phase = state.phase;
        }

        for direction in Direction::ALL {
            self.lights[direction.index()].state = state.light(direction);
            self.signals[direction.index()].signal = state.signal(direction);
        }
    }

    fn update_pedestrians(&mut self, state: &SignalState) {
        for (index, pedestrian) in self.pedestrians.iter_mut().enumerate() {
            let can_walk = state.axis_can_walk(pedestrian.axis);
            match pedestrian.update(can_walk) {
                PedestrianUpdate::StartedCrossing => {
                    debug!(
                        "Pedestrian {} started crossing at ({:.0}, {:.0})",
                        index, pedestrian.position.x, pedestrian.position.y
                    );
                }
                PedestrianUpdate::FinishedCrossing => {
                    debug!("Pedestrian {} is back home", index);
                }
                _ => {}
            }
        }
    }

    /// Assemble the read-only view of the current state
    pub fn snapshot(&self) -> TrafficSnapshot {
        TrafficSnapshot {
            tick: self.ticks,
            elapsed: self.time,
            cycle_time: self.cycle_time,
            phase: self.phase,
            durations: self.durations,
            lights: self.lights,
            signals: self.signals,
            pedestrians: self.pedestrians.iter().map(PedestrianView::from).collect(),
        }
    }

    /// Print a summary of the simulation state
    pub fn print_summary(&self) {
        println!("=== Intersection Summary ===");
        println!(
            "Time: {:.2}s (cycle {:.2}s of {:.2}s), tick {}",
            self.time,
            self.cycle_time,
            self.durations.total_cycle(),
            self.ticks
        );
        println!("Phase: {}", self.phase.label());
        println!();

        println!("--- Lights ---");
        for direction in Direction::ALL {
            let light = self.light(direction);
            let signal = self.signal(direction);
            let label = CrossingLabel::for_approach(light, signal);
            println!(
                "  {:<5}: {:<6} pedestrians: {}",
                direction.name(),
                light.state.label(),
                label.text()
            );
        }

        let crossing: Vec<_> = self
            .pedestrians
            .iter()
            .enumerate()
            .filter(|(_, p)| p.crossing)
            .collect();
        if !crossing.is_empty() {
            println!("--- Crossing ---");
            for (index, pedestrian) in crossing {
                println!(
                    "  Pedestrian {}: position=({:.0}, {:.0}), home=({:.0}, {:.0})",
                    index,
                    pedestrian.position.x,
                    pedestrian.position.y,
                    pedestrian.home.x,
                    pedestrian.home.y
                );
            }
        }
    }

    /// Draw an ASCII map of the intersection
    pub fn draw_map(&self) {
        for row in self.render_map() {
            println!("{}", row);
        }
    }

    /// The ASCII map as rows of text; one cell covers 20x20 units
    pub fn render_map(&self) -> Vec<String> {
        const CELL: f32 = 20.0;
        let size = (SCENE_SIZE / CELL) as usize;
        let mut grid = vec![vec![' '; size]; size];

        let to_grid = |pos: Position| -> (usize, usize) {
            let col = ((pos.x / CELL) as usize).min(size - 1);
            let row = ((pos.y / CELL) as usize).min(size - 1);
            (row, col)
        };

        // Roads: 200 wide, from 50 to 550, crossing at the center
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let x = col as f32 * CELL + CELL / 2.0;
                let y = row as f32 * CELL + CELL / 2.0;
                let in_scene = (50.0..550.0).contains(&x) && (50.0..550.0).contains(&y);
                let on_vertical = (CENTER - 100.0..CENTER + 100.0).contains(&x);
                let on_horizontal = (CENTER - 100.0..CENTER + 100.0).contains(&y);
                if in_scene && (on_vertical || on_horizontal) {
                    *cell = '.';
                }
            }
        }

        for direction in Direction::ALL {
            let (row, col) = to_grid(light_position(direction));
            grid[row][col] = match self.light(direction).state {
                LightState::Green => 'G',
                LightState::Yellow => 'Y',
                LightState::Red => 'R',
            };
        }

        for pedestrian in &self.pedestrians {
            let (row, col) = to_grid(pedestrian.position);
            grid[row][col] = if pedestrian.crossing { '*' } else { 'o' };
        }

        let border = format!("+{}+", "-".repeat(size));
        let mut rows = Vec::with_capacity(size + 2);
        rows.push(border.clone());
        rows.extend(
            grid.into_iter()
                .map(|cells| format!("|{}|", cells.into_iter().collect::<String>())),
        );
        rows.push(border);
        rows
    }
}
