//! Population Sim - headless driver
//!
//! Plays the role of the one-second timer: every tick advances the engine
//! by the selected speed mode's multiplier and optionally prints the state.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use population_sim::core::calendar::ElapsedTime;
use population_sim::core::error::Result;
use population_sim::core::{SimulationConfig, SpeedMode};
use population_sim::demography::technology::tier_at;
use population_sim::demography::{PopulationEngine, RunSummary, StepOutcome};
use population_sim::report::{format_population, GrowthDirection, GrowthTrend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Population Sim - tick-driven demographic simulation
#[derive(Parser, Debug)]
#[command(name = "population-sim")]
#[command(about = "Evolve a population under technology, war and overpopulation pressure")]
struct Args {
    /// Speed mode 1-8 (1 = real time, 8 = 10 millennia per second)
    #[arg(long, short = 's', default_value_t = 4)]
    speed: u8,

    /// Number of ticks (real seconds) to simulate
    #[arg(long, short = 't', default_value_t = 1000)]
    ticks: u64,

    /// Random seed for repeatable runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wait one real second between ticks
    #[arg(long)]
    realtime: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// In text mode, print every n-th tick
    #[arg(long, default_value_t = 100)]
    every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("population_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mode = SpeedMode::from_id(args.speed)?;

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut engine = PopulationEngine::seeded(config, seed)?;
    let mut summary = RunSummary::new(engine.state());

    tracing::info!(
        speed = mode.label(),
        ticks = args.ticks,
        seed,
        "starting population simulation"
    );

    if args.format == OutputFormat::Text {
        println!("=== POPULATION SIM ===");
        println!("Speed: {} | Ticks: {} | Seed: {}", mode.label(), args.ticks, seed);
        println!();
    }

    let every = args.every.max(1);
    for _ in 0..args.ticks {
        match engine.advance(mode)? {
            StepOutcome::Advanced(report) => {
                summary.record(&report, engine.state());
                if args.format == OutputFormat::Text && report.tick % every == 0 {
                    display_status(&engine);
                }
            }
            StepOutcome::Extinct => break,
        }

        if args.realtime {
            thread::sleep(Duration::from_secs(1));
        }
    }

    match args.format {
        OutputFormat::Json => println!("{}", summary.to_json()?),
        OutputFormat::Text => {
            println!();
            println!("{}", summary.summary());
            if !summary.milestones.is_empty() {
                println!("\n--- Technology ---");
                for milestone in &summary.milestones {
                    println!("  year {:>8.0}: {}", milestone.year, milestone.name);
                }
            }
        }
    }

    Ok(())
}

/// One status line per printed tick
fn display_status(engine: &PopulationEngine) {
    let state = engine.state();
    let net = state.net_growth();
    let tech = tier_at(state.tech_level);

    println!(
        "[{:>6}] {:>8} | birth {:.2}% death {:.2}% | {} {:+.2}% ({}) | wars {} | {} | {}",
        engine.ticks(),
        format_population(state.population),
        state.birth_rate,
        state.death_rate,
        GrowthDirection::from_net(net),
        net,
        GrowthTrend::from_net(net),
        state.wars_count,
        tech.name,
        ElapsedTime::from_seconds(state.elapsed_sim_time),
    );
}
