use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Atrous stationary wavelet transform tool.
#[derive(Parser)]
#[command(
    name = "atrous",
    version,
    about = "Stationary wavelet decomposition and reconstruction"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Decompose a signal into stationary wavelet coefficients.
    Decompose(DecomposeArgs),
    /// Rebuild a signal from a coefficient file.
    Reconstruct(ReconstructArgs),
    /// Decompose and reconstruct a signal, reporting the round-trip error.
    Roundtrip(RoundtripArgs),
}

/// Transform settings shared by the commands that decompose.
///
/// Every flag overrides the matching `[transform]` entry of the config file.
#[derive(clap::Args, Default)]
pub struct TransformArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wavelet name; repeat once per axis for per-axis wavelets.
    #[arg(short, long)]
    pub wavelet: Vec<String>,

    /// Number of decomposition levels (default: deepest feasible).
    #[arg(short, long)]
    pub level: Option<usize>,

    /// Level at which decomposition starts.
    #[arg(long = "start-level")]
    pub start_level: Option<usize>,

    /// Axes to transform, negative values count from the end.
    #[arg(short, long, allow_negative_numbers = true, value_delimiter = ',')]
    pub axes: Option<Vec<isize>>,
}

/// Arguments for the `decompose` subcommand.
#[derive(clap::Args)]
pub struct DecomposeArgs {
    /// Path to the input signal (delimited text).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the coefficient JSON output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub transform: TransformArgs,
}

/// Arguments for the `reconstruct` subcommand.
#[derive(clap::Args)]
pub struct ReconstructArgs {
    /// Path to the coefficient JSON file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the reconstructed signal.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file (only `[io]` is used).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `roundtrip` subcommand.
#[derive(clap::Args)]
pub struct RoundtripArgs {
    /// Path to the input signal (delimited text).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Optional path for the reconstructed signal.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum tolerated absolute error (overrides `[roundtrip].tolerance`).
    #[arg(long)]
    pub tolerance: Option<f64>,

    #[command(flatten)]
    pub transform: TransformArgs,
}
