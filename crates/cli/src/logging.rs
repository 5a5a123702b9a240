//! Logging setup for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! forwards those records to stderr. Filter comes from `VERDICT_LOG`, then
//! `RUST_LOG`, then the verbosity flag.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "VERDICT_LOG";

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "verdict_recon=debug,verdict_io=debug,verdict=debug,warn",
        _ => "trace",
    }
}

pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time()
                .compact(),
        )
        .try_init();
}
