//! Phase timing configuration

use super::error::SimError;

pub const DEFAULT_RED_TIME: f32 = 3.0;
pub const DEFAULT_GREEN_TIME: f32 = 3.0;
pub const DEFAULT_YELLOW_TIME: f32 = 1.0;

/// Validated phase durations in seconds
///
/// Fields are private: every duration is positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDurations {
    red: f32,
    green: f32,
    yellow: f32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED_TIME,
            green: DEFAULT_GREEN_TIME,
            yellow: DEFAULT_YELLOW_TIME,
        }
    }
}

impl PhaseDurations {
    pub fn new(red: f32, green: f32, yellow: f32) -> Result<Self, SimError> {
        check_duration("red", red)?;
        check_duration("green", green)?;
        check_duration("yellow", yellow)?;

        let durations = Self { red, green, yellow };
        let total = durations.total_cycle();
        if !(total.is_finite() && total > 0.0) {
            return Err(SimError::EmptyCycle(total));
        }
        Ok(durations)
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn yellow(&self) -> f32 {
        self.yellow
    }

    /// Red, yellow, green, yellow
    pub fn total_cycle(&self) -> f32 {
        self.red + self.yellow + self.green + self.yellow
    }

    /// Reduce a non-negative elapsed time to a position within one cycle
    pub fn cycle_time(&self, elapsed: f32) -> Result<f32, SimError> {
        if !elapsed.is_finite() {
            return Err(SimError::NonFiniteElapsed(elapsed));
        }
        if elapsed < 0.0 {
            return Err(SimError::NegativeElapsed(elapsed));
        }
        Ok(elapsed % self.total_cycle())
    }
}

fn check_duration(phase: &'static str, value: f32) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidDuration { phase, value })
    }
}
