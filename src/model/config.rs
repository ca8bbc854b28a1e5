use clap::Parser;
use std::path::PathBuf;

/// Velocity given to converted notes when none (or garbage) is supplied.
pub const DEFAULT_VELOCITY: u32 = 171;

/// How many notes a preview shows unless told otherwise.
pub const DEFAULT_PREVIEW_NOTES: usize = 5;

#[derive(Parser, Debug)]
#[command(
    name = "fnf-scratch",
    about = "Convert an FNF chart (or a Scratch text chart) into Scratch notation!"
)]
pub struct Args {
    /// Path to the chart to convert (.json or .txt).
    pub chart: PathBuf,

    /// Chart kind: json|txt. Detected from the file extension when omitted.
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Velocity for notes that don't carry one.
    /// Falls back to 171 unless given a plain non-negative integer.
    #[arg(long = "velocity", default_value = "171")]
    pub velocity: String,

    /// Where to write the converted chart. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dry run (print a preview of the converted notes and exit).
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Maximum notes to print in a preview.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_NOTES)]
    pub preview_max: usize,

    /// Prints extra information to the terminal.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Caller-supplied knobs for a single conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    pub default_velocity: u32,
}

impl ConversionConfig {
    pub fn new(default_velocity: u32) -> Self {
        Self { default_velocity }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_velocity: DEFAULT_VELOCITY,
        }
    }
}
