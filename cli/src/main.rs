mod synth;
mod trace;

use std::fs::File;
use std::io::{self, BufReader};

use clap::{Args, Parser, Subcommand};
use freehand::{ConfigError, Game, GameConfig, Shape};
use tracing_subscriber::EnvFilter;

use crate::synth::{SynthError, SynthParams};
use crate::trace::{TraceError, TraceEvent};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("cannot synthesize trace: {0}")]
    Synth(#[from] SynthError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "freehand", about = "Replay and synthesize freehand shape traces")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed a recorded JSON-lines trace to an engine and print the outcome.
    Replay(ReplayArgs),
    /// Generate a trace around the target shape.
    Synth(SynthArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, env = "FREEHAND_SHAPE", default_value_t = Shape::Circle)]
    shape: Shape,

    /// Surface size applied before the first event; a `resize` event overrides it.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    #[arg(long, default_value = "-", help = "Input file path, or - for stdin")]
    input: String,
}

#[derive(Args, Debug)]
struct SynthArgs {
    #[arg(long, env = "FREEHAND_SHAPE", default_value_t = Shape::Circle)]
    shape: Shape,

    #[arg(long, default_value_t = 800.0)]
    width: f64,

    #[arg(long, default_value_t = 600.0)]
    height: f64,

    #[arg(long, default_value_t = 150.0)]
    radius: f64,

    #[arg(long, default_value_t = 90)]
    samples: usize,

    #[arg(long, default_value_t = 0.0)]
    noise: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Score the generated trace instead of printing it.
    #[arg(long, default_value_t = false)]
    run: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::from_env()?;

    match cli.command {
        Command::Replay(args) => run_replay(args, config),
        Command::Synth(args) => run_synth(args, config),
    }
}

fn run_replay(args: ReplayArgs, config: GameConfig) -> Result<(), CliError> {
    let events = if args.input == "-" {
        trace::read_events(io::stdin().lock())?
    } else {
        let file = File::open(&args.input).map_err(|source| CliError::Open { path: args.input.clone(), source })?;
        trace::read_events(BufReader::new(file))?
    };

    let mut game = Game::new(args.shape, config);
    game.on_resize(args.width, args.height);
    let summary = trace::replay(&mut game, &events);
    tracing::info!(shape = %args.shape, events = events.len(), score = ?summary.score, "replay finished");
    print_json(&summary)
}

fn run_synth(args: SynthArgs, config: GameConfig) -> Result<(), CliError> {
    let params = SynthParams {
        shape: args.shape,
        width: args.width,
        height: args.height,
        radius: args.radius,
        samples: args.samples,
        noise: args.noise,
        seed: args.seed,
    };
    let events = synth::synthesize(&params, &config)?;
    tracing::info!(shape = %args.shape, events = events.len(), seed = args.seed, "trace synthesized");

    if args.run {
        let mut game = Game::new(args.shape, config);
        let summary = trace::replay(&mut game, &events);
        return print_json(&summary);
    }
    for event in &events {
        println!("{}", serde_json::to_string::<TraceEvent>(event)?);
    }
    Ok(())
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
