use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use eo_activity::input::{
    ClampPolicy, InputError, InputVector, SampleOil, load_values_json, parameter_labels, validate,
};
use eo_activity::logging;
use eo_activity::model::{Prediction, ScoringProfile};
use eo_activity::pipeline::predict_with;
use eo_activity::report::{self, InputEntry, Report, ReportMode};

#[derive(Debug, Parser)]
#[command(
    name = "eo-activity",
    version,
    about = "Score essential-oil composition parameters into simulated biological activity confidences"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Predict activities for ten composition parameters
    Predict(PredictArgs),
}

#[derive(Debug, Args)]
struct PredictArgs {
    #[command(flatten)]
    source: ValueSource,

    /// Seed for the jitter generator; drawn at random and reported when omitted
    #[arg(long, conflicts_with = "no_jitter")]
    seed: Option<u64>,

    /// Disable jitter entirely
    #[arg(long)]
    no_jitter: bool,

    /// Pass values outside [0, 10] through unchanged
    #[arg(long)]
    no_clamp: bool,

    #[arg(long, value_enum, default_value_t = ReportMode::Text)]
    format: ReportMode,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct ValueSource {
    /// Ten values, comma- or space-separated
    #[arg(long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,

    /// JSON file holding `[..]` or `{"values": [..]}`
    #[arg(long)]
    input: Option<PathBuf>,

    /// One of the built-in sample compositions
    #[arg(long, value_enum)]
    preset: Option<SampleOil>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Command::Predict(args) => {
            let rendered = execute_predict(&args)?;
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

fn execute_predict(args: &PredictArgs) -> Result<String, String> {
    let raw = load_raw_values(&args.source).map_err(|e| e.to_string())?;
    let policy = if args.no_clamp {
        ClampPolicy::Keep
    } else {
        ClampPolicy::Clamp
    };
    let input = validate(raw, policy).map_err(|e| e.to_string())?;

    let (profile, seed) = if args.no_jitter {
        (ScoringProfile::deterministic_v1(), None)
    } else {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        (ScoringProfile::default_v1(), Some(seed))
    };
    tracing::info!(seed = ?seed, "scoring ten parameters");

    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_default());
    let predictions =
        predict_with(&input.values, &profile, &mut rng).map_err(|e| e.to_string())?;

    let report = build_report(&input, &profile, seed, predictions);
    report::render(&report, args.format).map_err(|e| e.to_string())
}

fn load_raw_values(source: &ValueSource) -> Result<Vec<f64>, InputError> {
    if let Some(preset) = source.preset {
        tracing::info!(preset = preset.def().name, "using built-in composition");
        return Ok(preset.values());
    }
    match &source.input {
        Some(path) => load_values_json(path),
        None => Ok(source.values.clone()),
    }
}

fn build_report(
    input: &InputVector,
    profile: &ScoringProfile,
    seed: Option<u64>,
    predictions: Vec<Prediction>,
) -> Report {
    let inputs = parameter_labels()
        .into_iter()
        .zip(input.values.iter())
        .enumerate()
        .map(|(i, (label, &value))| InputEntry {
            label,
            value,
            clamped: input.clamped.contains(&i),
        })
        .collect();

    Report {
        tool_name: "eo-activity".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        seed,
        jitter_half_width: profile.jitter_half_width,
        report_above: profile.report_above,
        inputs,
        predictions,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
