// [libs/shared/heimdall/src/lib.rs]
//! Structured tracing setup shared by every HPSS binary.
//!
//! `hpss-core` itself never touches a subscriber — it only emits
//! `tracing` events — so whichever binary embeds it stays in control
//! of how those events are formatted and filtered. This crate is
//! that setup, factored out so the CLI and any future service front
//! end configure logging identically.

use std::panic;

use tracing::{error, info, instrument};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Output shape for the tracing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact, colorized, human-readable lines. The default outside
    /// release builds.
    #[default]
    Pretty,
    /// Flattened JSON events, one per line, for machine ingestion.
    Json,
}

/// Installs a global `tracing` subscriber and a panic hook that logs
/// the panic location and payload before the default hook runs.
///
/// # Panics
///
/// Panics if a global subscriber has already been installed in this
/// process — call this once, at the top of `main`.
#[instrument(skip_all, fields(service = service_name))]
pub fn init_tracing(service_name: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cfg!(debug_assertions) { "debug" } else { "info" };
        format!("{service_name}={level},{level}").into()
    });

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().flatten_event(true))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_target(false))
                .init();
        }
    }

    let service = service_name.to_string();
    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_info.payload().downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>");

        error!(target: "panic", service = %service, location = %location, "panicked: {payload}");
    }));

    info!("tracing initialized for {service_name}");
}
