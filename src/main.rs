//! Strider - headless locomotion runner
//!
//! Drives one player through a scripted input sequence in the test arena and
//! reports what the locomotion controller did each tick.
//!
//! Usage:
//!   strider --scenario sprint
//!   strider --scenario wall --json --config tuning.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use strider_game::input::{ActionInput, MovementInput};
use strider_game::{Level, PlayerInput, Simulation, SimulationConfig, TickEvent};

#[derive(Parser)]
#[command(name = "strider")]
#[command(about = "Run scripted locomotion scenarios headless", long_about = None)]
struct Cli {
    /// Simulation config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input script to run
    #[arg(long, value_enum, default_value_t = Scenario::Sprint)]
    scenario: Scenario,

    /// Number of ticks to run (defaults to the scenario's length)
    #[arg(long)]
    ticks: Option<u32>,

    /// Print one JSON snapshot per tick instead of a summary
    #[arg(long, default_value = "false")]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Hold sprint and forward along the open track
    Sprint,
    /// Walk forward and jump once
    Jump,
    /// Jump toward the wall and get stopped mid-air
    Wall,
    /// Stand still
    Idle,
}

impl Scenario {
    /// Spawn point in the test arena.
    fn spawn(self) -> usize {
        match self {
            Self::Sprint | Self::Jump => 1,
            Self::Wall | Self::Idle => 0,
        }
    }

    /// Default run length in seconds.
    fn seconds(self) -> f32 {
        match self {
            Self::Sprint => 8.0,
            Self::Jump | Self::Wall => 3.0,
            Self::Idle => 1.0,
        }
    }

    /// Input for a given tick.
    fn input(self, tick: u32, tick_rate: u32) -> PlayerInput {
        let forward = MovementInput {
            forward: true,
            ..Default::default()
        };
        // Jump a sixth of a second in, once running has started
        let jump = tick == tick_rate / 6;

        match self {
            Self::Sprint => PlayerInput {
                movement: forward,
                actions: ActionInput {
                    sprint: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Jump | Self::Wall => PlayerInput {
                movement: forward,
                actions: ActionInput {
                    jump,
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Idle => PlayerInput::default(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SimulationConfig::default(),
    };

    let tick_rate = config.tick_rate;
    let ticks = cli
        .ticks
        .unwrap_or_else(|| (cli.scenario.seconds() * tick_rate as f32).round() as u32);

    let mut sim = Simulation::new(config, Level::test_arena());
    let player_id = sim.add_player_at("runner", cli.scenario.spawn());

    log::info!(
        "Running {:?} for {} ticks at {} Hz",
        cli.scenario,
        ticks,
        tick_rate
    );

    let mut transitions = 0;
    for tick in 0..ticks {
        let events = sim.tick(&[cli.scenario.input(tick, tick_rate)]);

        if cli.json {
            let line = serde_json::to_string(&sim.snapshot()).context("serialize snapshot")?;
            println!("{line}");
        }

        for event in events {
            match event {
                TickEvent::Transition { transition, .. } => {
                    transitions += 1;
                    log::info!(
                        "t={:.3}s {} -> {}",
                        sim.frame as f32 * sim.delta_time(),
                        transition.from,
                        transition.to
                    );
                }
                TickEvent::EnteredZone { zone, .. } => {
                    log::info!("t={:.3}s entered {}", sim.frame as f32 * sim.delta_time(), zone);
                }
            }
        }
    }

    let player = sim
        .get_player(player_id)
        .context("runner missing from simulation")?;
    let stamina = player.stamina();
    log::info!(
        "Done: state={} position={:.2?} velocity={:.2?} stamina={:.2}/{:.2}{} transitions={}",
        player.state(),
        player.position(),
        player.velocity(),
        stamina.current(),
        stamina.max(),
        if stamina.is_exhausted() { " (exhausted)" } else { "" },
        transitions
    );

    Ok(())
}
