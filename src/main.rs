use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use junction_signals::api::{Method, SignalApi};
use junction_signals::simulation::{Junction, Road, SignalColor, SimConfig, Turn};

/// A single light named on the command line as `ROAD:TURN`, e.g. `N:S`
#[derive(Debug, Clone, Copy)]
struct LightArg {
    road: Road,
    turn: Turn,
}

fn parse_light(s: &str) -> Result<LightArg, String> {
    let (road, turn) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ROAD:TURN, got '{}'", s))?;
    Ok(LightArg {
        road: road.parse().map_err(|e| format!("{}", e))?,
        turn: turn.parse().map_err(|e| format!("{}", e))?,
    })
}

#[derive(Parser)]
#[command(name = "junction_signals")]
#[command(about = "Four-way junction signal simulation")]
struct Cli {
    /// Number of simulation ticks to run
    #[arg(long, default_value = "200")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.5")]
    delta: f32,

    /// Seed for reproducible traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between vehicle spawns (0 disables spawning)
    #[arg(long, default_value = "2.0")]
    spawn_interval: f32,

    /// Maximum number of live vehicles
    #[arg(long, default_value = "24")]
    max_vehicles: usize,

    /// Turn a light green before the run starts (repeatable), e.g. --green N:S
    #[arg(long = "green", value_parser = parse_light)]
    greens: Vec<LightArg>,

    /// Turn every light green before the run starts
    #[arg(long)]
    all_green: bool,

    /// Print the published signal status as JSON when the run ends
    #[arg(long)]
    status: bool,
}

impl Cli {
    fn validate(&self) -> Result<()> {
        if !(self.delta.is_finite() && self.delta > 0.0) {
            anyhow::bail!("--delta must be a positive finite number, got {}", self.delta);
        }
        if !(self.spawn_interval.is_finite() && self.spawn_interval >= 0.0) {
            anyhow::bail!(
                "--spawn-interval must be a finite number of seconds, got {}",
                self.spawn_interval
            );
        }
        Ok(())
    }

    fn sim_config(&self) -> SimConfig {
        SimConfig {
            delta_secs: self.delta,
            ticks: self.ticks,
            spawn_interval_secs: self.spawn_interval,
            max_vehicles: self.max_vehicles,
            seed: self.seed,
            ..SimConfig::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    cli.validate()?;

    run_headless(&cli)
}

/// Run the junction without graphics and report statistics through the log
fn run_headless(cli: &Cli) -> Result<()> {
    let config = cli.sim_config();
    info!(
        "Running junction simulation: {} ticks of {}s",
        config.ticks, config.delta_secs
    );

    let mut junction = Junction::new(config);
    let mut api = SignalApi::new();

    if cli.all_green {
        for road in Road::ALL {
            junction.controller.toggle_all_for_road(road);
        }
    }
    for light in &cli.greens {
        junction
            .controller
            .set(light.road, light.turn, SignalColor::Green);
    }
    publish_signals(&junction, &mut api)?;

    junction.log_summary();

    let ticks = junction.config().ticks;
    let delta = junction.config().delta_secs;
    // Progress line every ten simulated seconds
    let progress_every = ((10.0 / delta).ceil() as u32).max(1);
    for tick in 1..=ticks {
        junction.tick(delta);
        if tick % progress_every == 0 {
            info!(
                "--- After tick {} ({:.1}s simulated) active={} waiting={} ---",
                tick,
                junction.time,
                junction.registry.count(),
                junction.registry.waiting_count()
            );
        }
    }

    info!("=== SIMULATION COMPLETE ===");
    junction.log_summary();

    if cli.status {
        let reply = api.handle(Method::Get, "/signals/status", None);
        let json = serde_json::to_string_pretty(&reply.body)
            .context("Failed to encode signal status")?;
        println!("{}", json);
    }

    Ok(())
}

/// Push the controller's grid to the status board the way an operator UI would
fn publish_signals(junction: &Junction, api: &mut SignalApi) -> Result<()> {
    let snapshot = junction.controller.status_snapshot();
    let body = serde_json::to_value(&snapshot).context("Failed to encode signal snapshot")?;
    let reply = api.handle(Method::Post, "/signals/update", Some(&body));
    if reply.status != 200 {
        anyhow::bail!("Signal update rejected with status {}", reply.status);
    }
    Ok(())
}
