//! Core types for the intersection simulation
//!
//! These are standalone types that don't depend on Bevy.

/// Side length of the square scene in world units
pub const SCENE_SIZE: f32 = 600.0;

/// Coordinate of the intersection center on both axes
pub const CENTER: f32 = 300.0;

/// Lower edge of the center band; an outbound agent below it is crossing
pub const CENTER_BAND_LOW: f32 = 250.0;

/// Upper edge of the center band; an outbound agent above it is crossing
pub const CENTER_BAND_HIGH: f32 = 350.0;

/// A returning agent closer than this to home snaps back onto it
pub const RETURN_SNAP_DISTANCE: f32 = 5.0;

/// Distance an agent moves per tick
pub const PEDESTRIAN_STEP: f32 = 1.0;

/// One of the four approaches to the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Position in the fixed four-slot arrays of the world and snapshot
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// The light pair this approach belongs to
    pub fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Axis of travel, also used to name the two light pairs
/// (vertical = north/south, horizontal = east/west)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The two approaches whose signals govern this axis
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::North, Direction::South],
            Axis::Horizontal => [Direction::East, Direction::West],
        }
    }
}

/// State of a vehicle light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

impl LightState {
    pub fn label(self) -> &'static str {
        match self {
            LightState::Green => "GREEN",
            LightState::Yellow => "YELLOW",
            LightState::Red => "RED",
        }
    }
}

/// A vehicle light at one approach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficLight {
    pub direction: Direction,
    pub state: LightState,
}

impl TrafficLight {
    pub fn new(direction: Direction, state: LightState) -> Self {
        Self { direction, state }
    }

    pub fn is_green(&self) -> bool {
        self.state == LightState::Green
    }

    pub fn is_yellow(&self) -> bool {
        self.state == LightState::Yellow
    }

    pub fn is_red(&self) -> bool {
        self.state == LightState::Red
    }
}

/// Pedestrian signal state. Walk and stop are exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkSignal {
    Walk,
    Stop,
}

impl WalkSignal {
    pub fn can_walk(self) -> bool {
        self == WalkSignal::Walk
    }

    pub fn should_stop(self) -> bool {
        self == WalkSignal::Stop
    }
}

/// A pedestrian signal at one approach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedestrianSignal {
    pub direction: Direction,
    pub signal: WalkSignal,
}

impl PedestrianSignal {
    pub fn new(direction: Direction, signal: WalkSignal) -> Self {
        Self { direction, signal }
    }

    pub fn can_walk(&self) -> bool {
        self.signal.can_walk()
    }

    pub fn should_stop(&self) -> bool {
        self.signal.should_stop()
    }
}

/// Text shown beside each approach telling pedestrians what to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingLabel {
    Go,
    Wait,
    Stop,
}

impl CrossingLabel {
    /// `Go` on a walk signal, `Wait` while the approach's light is yellow,
    /// `Stop` otherwise
    pub fn for_approach(light: &TrafficLight, signal: &PedestrianSignal) -> Self {
        if signal.can_walk() {
            CrossingLabel::Go
        } else if light.is_yellow() {
            CrossingLabel::Wait
        } else {
            CrossingLabel::Stop
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            CrossingLabel::Go => "GO",
            CrossingLabel::Wait => "WAIT",
            CrossingLabel::Stop => "STOP",
        }
    }
}

/// A 2D position in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis of travel
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    pub fn along_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::Vertical => &mut self.y,
            Axis::Horizontal => &mut self.x,
        }
    }
}
