//! Headless host for the hitbox simulation.
//!
//! Stands in for a windowed game loop: it loads the configuration and scene,
//! feeds scripted key presses into the simulation once per tick and prints
//! the resulting boxes as JSON, ready for any renderer to draw.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when absent)
//! 2. Build the simulation from a scene file or the built-in demo scene
//! 3. For every tick: look up the pressed inputs in the intent script, call
//!    `step_pressed`, optionally print the snapshot and pace to `target_fps`
//! 4. Print the final snapshot
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --intents script.json --trace
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use hitboxsim::SimError;
use hitboxsim::Simulation;
use hitboxsim::resources::gameconfig::GameConfig;
use hitboxsim::resources::intentscript::IntentScript;
use hitboxsim::resources::scene::SceneLayout;
use log::{error, info};

const DEFAULT_TICKS: u64 = 60;

/// Custom hit boxes: axis-separated collision demo
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON scene layout. The built-in two-player demo is used when omitted.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// JSON intent script with the inputs pressed on each tick.
    #[arg(long, value_name = "PATH")]
    intents: Option<PathBuf>,

    /// Number of ticks to run (defaults to the script length, or 60).
    #[arg(long)]
    ticks: Option<u64>,

    /// Pace ticks at the configured target_fps instead of running flat out.
    #[arg(long)]
    realtime: bool,

    /// Print a JSON snapshot after every tick.
    #[arg(long)]
    trace: bool,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    dump_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SimError> {
    let mut config = GameConfig::with_path(&cli.config);
    if cli.config.exists() {
        config.load_from_file()?;
    } else {
        info!("No config at {:?}, using defaults", cli.config);
    }

    if let Some(path) = cli.dump_config {
        config.config_path = path;
        return config.save_to_file();
    }

    let scene = match &cli.scene {
        Some(path) => SceneLayout::load_from_file(path)?,
        None => SceneLayout::demo(),
    };
    let script = match &cli.intents {
        Some(path) => IntentScript::load_from_file(path)?,
        None => IntentScript::default(),
    };
    let ticks = cli.ticks.unwrap_or(if script.is_empty() {
        DEFAULT_TICKS
    } else {
        script.len()
    });

    info!(
        "{}: {}x{} world, {} ticks at {} fps",
        config.title, config.world_width, config.world_height, ticks, config.target_fps
    );
    let frame = if config.target_fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(1.0 / f64::from(config.target_fps))
    };

    let mut sim = Simulation::from_scene(config, &scene)?;
    let mut inputs = script.ticks();
    for _ in 0..ticks {
        let started = Instant::now();
        let pressed = inputs.next().unwrap_or_default();
        sim.step_pressed(&pressed);

        for contact in sim.contacts() {
            info!(
                "tick {}: {} hit {} on {:?}",
                sim.tick(),
                contact.mover,
                contact.obstacle,
                contact.axis
            );
        }
        if cli.trace {
            println!("{}", serde_json::to_string(&sim.snapshot())?);
        }
        if cli.realtime {
            std::thread::sleep(frame.saturating_sub(started.elapsed()));
        }
    }

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}
