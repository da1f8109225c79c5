use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rust_vmc::catalog::{available_methods, available_systems};
use rust_vmc::io::defaults::{
    DEFAULT_ALPHA, DEFAULT_BENCHMARK_BURN_IN, DEFAULT_BENCHMARK_N_STEPS, DEFAULT_BURN_IN,
    DEFAULT_INITIAL_POSITION, DEFAULT_N_STEPS, DEFAULT_SEED, DEFAULT_STEP_SIZE,
};
use rust_vmc::{read_config, run, BenchmarkRunner, SimulationConfig, VmcError};

/// Educational Quantum Monte Carlo toolkit
#[derive(Parser, Debug)]
#[command(name = "rust_vmc", version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run VMC for the 1D harmonic oscillator
    VmcHo(VmcHoArgs),
    /// Run the reference benchmark suite
    Benchmark(BenchmarkArgs),
    /// List available methods and systems
    Catalog {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct VmcHoArgs {
    /// YAML config file; overrides the individual flags
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_N_STEPS)]
    n_steps: usize,

    #[arg(long, default_value_t = DEFAULT_BURN_IN)]
    burn_in: usize,

    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: f64,

    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f64,

    #[arg(long, default_value_t = DEFAULT_INITIAL_POSITION, allow_hyphen_values = true)]
    initial_position: f64,

    #[arg(long, default_value_t = DEFAULT_SEED, allow_hyphen_values = true)]
    seed: i64,

    /// Seed the generator from OS entropy instead of --seed
    #[arg(long, conflicts_with = "seed")]
    unseeded: bool,

    /// Emit machine-readable JSON instead of text summary
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BenchmarkArgs {
    #[arg(long, default_value_t = DEFAULT_BENCHMARK_N_STEPS)]
    n_steps: usize,

    #[arg(long, default_value_t = DEFAULT_BENCHMARK_BURN_IN)]
    burn_in: usize,

    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: f64,

    #[arg(long, default_value_t = DEFAULT_INITIAL_POSITION, allow_hyphen_values = true)]
    initial_position: f64,

    /// Base seed; case i uses seed + i
    #[arg(long, default_value_t = DEFAULT_SEED, allow_hyphen_values = true)]
    seed: i64,

    #[arg(long, conflicts_with = "seed")]
    unseeded: bool,

    #[arg(long)]
    json: bool,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => error!(%err, "failed to encode output"),
    }
}

fn run_vmc_ho(args: VmcHoArgs) -> Result<ExitCode, VmcError> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => SimulationConfig {
            n_steps: args.n_steps,
            burn_in: args.burn_in,
            step_size: args.step_size,
            alpha: args.alpha,
            initial_position: args.initial_position,
            seed: (!args.unseeded).then_some(args.seed),
        },
    };

    let result = run(&config)?;
    if args.json {
        print_json(&result.to_json());
    } else {
        println!("{result}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_benchmark(args: BenchmarkArgs) -> Result<ExitCode, VmcError> {
    let suite = BenchmarkRunner::new()
        .with_n_steps(args.n_steps)
        .with_burn_in(args.burn_in)
        .with_step_size(args.step_size)
        .with_initial_position(args.initial_position)
        .with_seed((!args.unseeded).then_some(args.seed))
        .run()?;

    if args.json {
        print_json(&suite.to_json());
    } else {
        println!("{suite}");
    }

    Ok(if suite.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_catalog(json: bool) {
    let methods = available_methods();
    let systems = available_systems();
    if json {
        print_json(&serde_json::json!({ "methods": methods, "systems": systems }));
        return;
    }

    println!("Methods:");
    for method in &methods {
        println!("  {} - {} [{}]", method.id, method.name, method.systems.join(", "));
    }
    println!("Systems:");
    for system in &systems {
        println!("  {} - {} ({}): {}", system.id, system.name, system.dimension, system.notes);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let outcome = match cli.command {
        Command::VmcHo(args) => run_vmc_ho(args),
        Command::Benchmark(args) => run_benchmark(args),
        Command::Catalog { json } => {
            print_catalog(json);
            Ok(ExitCode::SUCCESS)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
