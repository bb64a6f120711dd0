// [apps/hpss-cli/src/main.rs]
//! Command-line front end for HPSS.
//!
//! Plays the role of the "surrounding service" wrapping the core library:
//! it owns the request envelope, the response envelope, and exit-code
//! mapping, while every correctness-bearing decision is delegated to
//! `hpss-core`.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use hpss_core::{CoreError, InMemoryUniverse};
use hpss_cli_lib::ResponseEnvelope;
use hpss_observability::{init_tracing, LogFormat as ObservabilityFormat};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputLogFormat {
    Pretty,
    Json,
}

impl From<OutputLogFormat> for ObservabilityFormat {
    fn from(value: OutputLogFormat) -> Self {
        match value {
            OutputLogFormat::Pretty => ObservabilityFormat::Pretty,
            OutputLogFormat::Json => ObservabilityFormat::Json,
        }
    }
}

/// Enforces `overlapThreshold`'s `[0, 1]` bound at parse time, the same
/// way `clap::value_parser!(...).range(...)` enforces `num_sets` and
/// `items_per_set` — `f64` has no `Ord` impl, so the built-in range
/// validator isn't available and this does the same check by hand.
fn parse_overlap_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("`{raw}` is not a valid number: {e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("overlap-threshold must lie in [0, 1], got {value}"))
    }
}

/// Generates a batch of low-overlap subsets over a canonical
/// sequential-identifier universe, per the HPSS specification.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of sets to generate. Mirrors the request envelope's
    /// `numSets`.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=10_000))]
    num_sets: u64,

    /// Items per set. Mirrors the request envelope's `itemsPerSet`.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
    items_per_set: u64,

    /// Maximum pairwise Jaccard similarity. Mirrors the request
    /// envelope's `overlapThreshold`.
    #[arg(long, value_parser = parse_overlap_threshold)]
    overlap_threshold: f64,

    /// Size of the canonical sequential-identifier universe (1..=N)
    /// to sample from.
    #[arg(long, default_value_t = 100_000)]
    universe_size: u64,

    /// Include the generated item identifiers in the JSON output. Off
    /// by default for large batches to keep the response small.
    #[arg(long, default_value_t = false)]
    include_sets: bool,

    #[arg(long, value_enum, default_value_t = OutputLogFormat::Pretty)]
    log_format: OutputLogFormat,
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();
    init_tracing("hpss-cli", args.log_format.into());

    let request_id = Uuid::new_v4().to_string();
    let started = Instant::now();

    info!(
        request_id = %request_id,
        num_sets = args.num_sets,
        items_per_set = args.items_per_set,
        overlap_threshold = args.overlap_threshold,
        universe_size = args.universe_size,
        "starting HPSS generation request"
    );

    let universe = InMemoryUniverse::sequential(args.universe_size);

    let verdict = match hpss_core::feasibility(args.num_sets, args.items_per_set, args.overlap_threshold, args.universe_size) {
        Ok(v) => v,
        Err(e) => return report_core_error(&request_id, e),
    };

    if !verdict.feasible {
        warn!(request_id = %request_id, ?verdict, "request is infeasible, not sampling");
        let envelope = ResponseEnvelope::infeasible(
            request_id,
            started.elapsed().as_millis(),
            args.items_per_set,
            args.num_sets,
            verdict,
        );
        print_envelope(&envelope);
        return std::process::ExitCode::from(3);
    }

    let sets = match hpss_core::generate(args.num_sets, args.items_per_set, args.overlap_threshold, &universe) {
        Ok(sets) => sets,
        Err(e) => return report_core_error(&request_id, e),
    };

    info!(request_id = %request_id, elapsed_ms = started.elapsed().as_millis(), "generation complete");

    let envelope = ResponseEnvelope::generated(
        request_id,
        started.elapsed().as_millis(),
        args.items_per_set,
        args.num_sets,
        verdict,
        sets,
        args.include_sets,
    );
    print_envelope(&envelope);
    std::process::ExitCode::SUCCESS
}

fn print_envelope(envelope: &ResponseEnvelope) {
    match serde_json::to_string_pretty(envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize response envelope: {e}"),
    }
}

fn report_core_error(request_id: &str, error: CoreError) -> std::process::ExitCode {
    match error {
        CoreError::Infeasible(verdict) => {
            warn!(request_id = %request_id, ?verdict, "request is infeasible");
            std::process::ExitCode::from(3)
        }
        CoreError::InvalidArguments(e) => {
            error!(request_id = %request_id, "invalid arguments: {e}");
            std::process::ExitCode::from(2)
        }
        CoreError::Cancelled => {
            warn!(request_id = %request_id, "generation cancelled");
            std::process::ExitCode::from(4)
        }
        CoreError::Shortfall { set_index, have, need } => {
            error!(
                request_id = %request_id,
                set_index,
                have,
                need,
                "shortfall: the universe did not have enough distinct items for a feasible request"
            );
            std::process::ExitCode::from(70)
        }
        CoreError::UniverseUnavailable(source) => {
            error!(request_id = %request_id, "universe handle unavailable: {source}");
            std::process::ExitCode::from(70)
        }
    }
}
