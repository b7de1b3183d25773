use clap::{Args, Parser, Subcommand};
use ljclust::core::cluster::{DEFAULT_RADIUS, DEFAULT_SEED};
use ljclust::engine::evaluator::Backend;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ljclust - Lennard-Jones cluster energies, forces, and evaluation-backend benchmarks.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a random particle cluster and write it as XYZ text.
    Generate(GenerateArgs),
    /// Evaluate the Lennard-Jones energy (and optionally forces) of a cluster.
    Energy(EnergyArgs),
    /// Time the evaluation backends against each other over a size sweep.
    Bench(BenchArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of particles in the generated cluster.
    #[arg(short, long, default_value_t = 100, value_name = "INT")]
    pub natoms: usize,

    /// Standard deviation of the coordinate distribution.
    #[arg(short, long, default_value_t = DEFAULT_RADIUS, value_name = "FLOAT")]
    pub radius: f64,

    /// Seed for reproducible generation.
    #[arg(short, long, default_value_t = DEFAULT_SEED, value_name = "INT")]
    pub seed: u64,

    /// Path for the output XYZ file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Append a frame instead of truncating the file.
    #[arg(long)]
    pub append: bool,
}

/// Arguments for the `energy` subcommand.
#[derive(Args, Debug)]
pub struct EnergyArgs {
    /// Path to an input XYZ file. When omitted, a cluster is generated.
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["natoms", "radius", "seed"]
    )]
    pub input: Option<PathBuf>,

    /// Number of particles in the generated cluster.
    #[arg(short, long, default_value_t = 100, value_name = "INT")]
    pub natoms: usize,

    /// Standard deviation of the generated coordinate distribution.
    #[arg(short, long, default_value_t = DEFAULT_RADIUS, value_name = "FLOAT")]
    pub radius: f64,

    /// Seed for reproducible generation.
    #[arg(short, long, default_value_t = DEFAULT_SEED, value_name = "INT")]
    pub seed: u64,

    /// Evaluation backend.
    #[arg(short, long, default_value = "dense", value_name = "NAME")]
    pub backend: Backend,

    /// Compute and print per-particle forces.
    #[arg(short, long)]
    pub forces: bool,

    /// Well depth of the pair potential.
    #[arg(long, value_name = "FLOAT", conflicts_with = "preset")]
    pub epsilon: Option<f64>,

    /// Zero-crossing distance of the pair potential.
    #[arg(long, value_name = "FLOAT", conflicts_with = "preset")]
    pub sigma: Option<f64>,

    /// Use a named parameter preset instead of explicit epsilon/sigma.
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// TOML file with parameter presets; built-in presets are used when omitted.
    #[arg(long, value_name = "PATH")]
    pub params: Option<PathBuf>,
}

/// Arguments for the `bench` subcommand. Every flag overrides the
/// corresponding key of the optional TOML configuration file.
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Path to a benchmark configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Cluster sizes to benchmark.
    #[arg(long, value_delimiter = ',', value_name = "INT,...")]
    pub sizes: Option<Vec<usize>>,

    /// Timed iterations per (backend, size) combination.
    #[arg(long, value_name = "INT")]
    pub iterations: Option<usize>,

    /// Untimed warmup evaluations before sampling.
    #[arg(long, value_name = "INT")]
    pub warmup: Option<usize>,

    /// Standard deviation of the generated coordinate distribution.
    #[arg(long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Seed for cluster generation.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Backends to include; all available backends when omitted.
    #[arg(long, value_delimiter = ',', value_name = "NAME,...")]
    pub backends: Option<Vec<Backend>>,

    /// Write benchmark records to a CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
