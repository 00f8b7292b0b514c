use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use intersection_sim::simulation::{
    PhaseDurations, SimError, SimWorld, DEFAULT_GREEN_TIME, DEFAULT_RED_TIME,
    DEFAULT_YELLOW_TIME,
};

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Simulate a traffic light system with pedestrian movement")]
struct Cli {
    /// Time the red light is on, in seconds
    #[arg(long, default_value_t = DEFAULT_RED_TIME)]
    red_time: f32,

    /// Time the green light is on, in seconds
    #[arg(long, default_value_t = DEFAULT_GREEN_TIME)]
    green_time: f32,

    /// Time the yellow light is on, in seconds
    #[arg(long, default_value_t = DEFAULT_YELLOW_TIME)]
    yellow_time: f32,

    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "600")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta: f32,

    /// Pause between printed frames in headless mode
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let durations = PhaseDurations::new(cli.red_time, cli.green_time, cli.yellow_time)
        .context("Invalid phase durations")?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(durations);
        }
        #[cfg(not(feature = "ui"))]
        {
            anyhow::bail!("UI feature is not enabled. Rebuild with --features ui");
        }
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_headless(durations, cli.ticks, cli.delta, cli.realtime)
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(durations: PhaseDurations, ticks: u32, delta: f32, realtime: bool) -> Result<()> {
    if !(delta.is_finite() && delta > 0.0) {
        return Err(SimError::InvalidDelta(delta)).context("Invalid --delta");
    }

    println!("Running intersection simulation in headless mode...");
    println!("Ticks: {}, Delta: {:.4}s", ticks, delta);

    // Print one frame per simulated second
    let ticks_per_second = (1.0 / delta).ceil() as u32;
    println!();

    let mut world = SimWorld::new(durations);

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let mut phase_changes = 0u32;
    let mut crossings_started = 0u32;
    let mut last_phase = world.phase();

    let mut tick = 0;
    while tick < ticks {
        let ticks_to_run = ticks_per_second.min(ticks - tick);

        for _ in 0..ticks_to_run {
            tick += 1;
            let before: Vec<bool> = world.pedestrians().iter().map(|p| p.crossing).collect();
            // Elapsed is derived from the tick count so float drift never
            // accumulates across a long run
            let snapshot = world
                .advance_to(tick as f32 * delta)
                .with_context(|| format!("Tick {} failed", tick))?;

            if snapshot.phase != last_phase {
                phase_changes += 1;
                last_phase = snapshot.phase;
            }
            crossings_started += snapshot
                .pedestrians
                .iter()
                .zip(before)
                .filter(|(view, was_crossing)| view.crossing && !was_crossing)
                .count() as u32;
        }

        println!(
            "--- After tick {} ({:.1}s simulated time) ---",
            tick,
            tick as f32 * delta
        );
        world.print_summary();
        world.draw_map();
        println!();

        if realtime && tick < ticks {
            std::thread::sleep(std::time::Duration::from_millis(500));
        }
    }

    let snapshot = world.snapshot();
    info!("=== SIMULATION COMPLETE ===");
    info!("Elapsed time: {:.2}s", snapshot.elapsed);
    info!("Total ticks: {}", snapshot.tick);
    info!("Cycle length: {:.2}s", durations.total_cycle());
    info!("Phase changes: {}", phase_changes);
    info!("Crossings started: {}", crossings_started);
    info!("Pedestrians crossing: {}", snapshot.crossing_count());
    info!("Final phase: {}", snapshot.phase.label());

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(durations: PhaseDurations) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    use intersection_sim::simulation::SCENE_SIZE;
    use intersection_sim::ui;

    println!("Starting Intersection Sim UI...");
    println!(
        "Cycle: red {}s, yellow {}s, green {}s, yellow {}s",
        durations.red(),
        durations.yellow(),
        durations.green(),
        durations.yellow()
    );
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Traffic System Simulation".into(),
                        resolution: (SCENE_SIZE as u32, SCENE_SIZE as u32).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::IntersectionUIPlugin { durations })
        .run();
}
