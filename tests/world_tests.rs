//! Simulation world tests: tick ordering, clock handling and snapshots

use intersection_sim::simulation::{
    Axis, CrossingLabel, Direction, LightState, PedestrianSignal, Phase, PhaseDurations, SimError,
    SimWorld, TrafficLight, WalkSignal,
};

fn default_world() -> SimWorld {
    SimWorld::new(PhaseDurations::new(3.0, 3.0, 1.0).unwrap())
}

#[test]
fn test_initial_state() {
    let world = default_world();
    assert_eq!(world.phase(), Phase::EastWestGo);
    assert!(world.light(Direction::North).is_red());
    assert!(world.light(Direction::South).is_red());
    assert!(world.light(Direction::East).is_green());
    assert!(world.light(Direction::West).is_green());
    assert!(world.signal(Direction::North).should_stop());
    assert!(world.signal(Direction::East).can_walk());

    let snapshot = world.snapshot();
    assert_eq!(snapshot.tick, 0);
    assert_eq!(snapshot.pedestrians.len(), 16);
    assert_eq!(snapshot.crossing_count(), 0);
}

#[test]
fn test_agents_see_signals_from_the_same_tick() {
    let mut world = default_world();
    let snapshot = world.advance_to(4.0).unwrap();

    assert_eq!(snapshot.phase, Phase::NorthSouthGo);
    // Vertical agents moved on the very tick their signal turned WALK
    let first_vertical = &snapshot.pedestrians[0];
    assert!(first_vertical.crossing);
    assert_eq!(first_vertical.position.y, 11.0);
    // Horizontal agents are held by STOP
    for view in &snapshot.pedestrians[8..] {
        assert_eq!(view.position, view.home);
        assert!(!view.crossing);
    }
}

#[test]
fn test_stopped_axis_never_moves() {
    let mut world = default_world();
    world.advance_to(4.0).unwrap();

    let mut t = 4.0;
    while t < 7.9 {
        t += 1.0 / 60.0;
        let snapshot = world.advance_to(t).unwrap();
        for (index, view) in snapshot.pedestrians.iter().enumerate() {
            if world.pedestrians()[index].axis == Axis::Horizontal {
                assert_eq!(view.position, view.home);
            }
        }
    }
}

#[test]
fn test_orthogonal_coordinate_is_invariant() {
    let mut world = default_world();
    let homes: Vec<_> = world.pedestrians().iter().map(|p| (p.axis, p.home)).collect();

    for _ in 0..(60 * 20) {
        let snapshot = world.tick(1.0 / 60.0).unwrap();
        for (view, (axis, home)) in snapshot.pedestrians.iter().zip(&homes) {
            match axis {
                Axis::Vertical => assert_eq!(view.position.x, home.x),
                Axis::Horizontal => assert_eq!(view.position.y, home.y),
            }
        }
    }
}

#[test]
fn test_snapshot_matches_world_after_tick() {
    let mut world = default_world();
    let snapshot = world.advance_to(7.25).unwrap();

    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.elapsed, 7.25);
    assert_eq!(snapshot.cycle_time, 7.25);
    assert_eq!(snapshot.phase, Phase::NorthSouthClearing);
    for direction in Direction::ALL {
        assert_eq!(snapshot.light(direction), world.light(direction));
        assert_eq!(snapshot.signal(direction), world.signal(direction));
    }
    assert_eq!(snapshot.light(Direction::North).state, LightState::Yellow);
    assert_eq!(snapshot.signal(Direction::North).signal, WalkSignal::Walk);
    assert_eq!(snapshot, world.snapshot());
}

#[test]
fn test_old_snapshot_is_not_affected_by_later_ticks() {
    let mut world = default_world();
    let first = world.advance_to(1.0).unwrap();
    let copy = first.clone();
    world.advance_to(5.0).unwrap();
    assert_eq!(first, copy);
    assert_eq!(first.phase, Phase::EastWestGo);
}

#[test]
fn test_cycle_wraps_on_the_world_clock() {
    let mut world = default_world();
    world.advance_to(4.0).unwrap();
    let snapshot = world.advance_to(8.0).unwrap();
    assert_eq!(snapshot.cycle_time, 0.0);
    assert_eq!(snapshot.phase, Phase::EastWestGo);
    assert!(snapshot.light(Direction::East).is_green());
}

#[test]
fn test_clock_errors() {
    let mut world = default_world();
    assert_eq!(world.advance_to(-1.0), Err(SimError::NegativeElapsed(-1.0)));

    world.advance_to(2.0).unwrap();
    assert_eq!(
        world.advance_to(1.0),
        Err(SimError::ClockWentBackwards {
            previous: 2.0,
            current: 1.0
        })
    );
    // Rejected ticks leave the world untouched
    assert_eq!(world.ticks(), 1);
    assert_eq!(world.time(), 2.0);

    assert_eq!(world.tick(0.0), Err(SimError::InvalidDelta(0.0)));
    assert!(world.tick(0.5).is_ok());
    assert_eq!(world.time(), 2.5);
}

#[test]
fn test_crossing_labels() {
    let mut world = default_world();
    let snapshot = world.advance_to(3.5).unwrap();
    assert_eq!(snapshot.crossing_label(Direction::East), CrossingLabel::Go);
    assert_eq!(snapshot.crossing_label(Direction::North), CrossingLabel::Stop);

    let snapshot = world.advance_to(7.5).unwrap();
    assert_eq!(snapshot.crossing_label(Direction::North), CrossingLabel::Go);
    assert_eq!(snapshot.crossing_label(Direction::West), CrossingLabel::Stop);

    let yellow = TrafficLight::new(Direction::East, LightState::Yellow);
    let stop = PedestrianSignal::new(Direction::East, WalkSignal::Stop);
    assert_eq!(CrossingLabel::for_approach(&yellow, &stop), CrossingLabel::Wait);
    assert_eq!(CrossingLabel::Wait.text(), "WAIT");
}

#[test]
fn test_render_map() {
    let world = default_world();
    let rows = world.render_map();
    assert_eq!(rows.len(), 32);
    assert!(rows.iter().all(|row| row.chars().count() == 32));

    let map = rows.join("\n");
    assert_eq!(map.matches('R').count(), 2);
    assert_eq!(map.matches('G').count(), 2);
    assert!(map.contains('o'));
    assert!(!map.contains('*'));
}

#[test]
fn test_accessors_track_ticks() {
    let mut world = default_world();
    assert_eq!(world.ticks(), 0);
    assert_eq!(world.time(), 0.0);

    world.advance_to(4.0).unwrap();
    let snapshot = world.advance_to(9.5).unwrap();
    assert_eq!(world.ticks(), 2);
    assert_eq!(world.time(), 9.5);
    assert_eq!(world.cycle_time(), 1.5);
    assert_eq!(snapshot.tick, world.ticks());
    assert_eq!(snapshot.cycle_time, world.cycle_time());

    let positions: Vec<_> = world.pedestrians().iter().map(|p| p.position).collect();
    let views: Vec<_> = snapshot.pedestrians.iter().map(|v| v.position).collect();
    assert_eq!(positions, views);
}
