//! Log output for the CLI.
//!
//! `RUST_LOG` takes precedence; otherwise `--verbose` switches the routegen
//! crates from `info` to `debug`. Logs go to stderr so `--dry-run` output on
//! stdout stays clean.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "routegen=info,routegen_codegen=info";
const VERBOSE_FILTER: &str = "routegen=debug,routegen_codegen=debug";

pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
