// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the labelsync CLI.
//!
//! Uses `tracing` with `tracing-subscriber`, writing to stderr so stdout stays
//! clean for JSON/YAML output. `RUST_LOG` always wins over the defaults.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! labelsync labels sync owner/repo
//!
//! # Every request the client makes
//! RUST_LOG=labelsync_core=debug labelsync labels diff owner/repo
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "labelsync=warn,labelsync_core=warn,octocrab=error,reqwest=error";
const VERBOSE_FILTER: &str = "labelsync=info,labelsync_core=info,octocrab=error,reqwest=error";

/// Returns the filter directives used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize the logging subsystem.
///
/// `verbose` (the `-v` flag) raises the default level to info, which logs
/// each applied label action.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose)))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
