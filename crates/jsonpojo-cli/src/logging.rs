//! Subscriber setup. Logs go to stderr so generated source on stdout stays clean.

use std::error::Error;
use tracing_subscriber::EnvFilter;

const CRATES: &[&str] = &["jsonpojo", "jsonpojo_core", "jsonpojo_java", "jsonpojo_cli"];

/// Install the global subscriber. `RUST_LOG` wins over the `-v` count.
///
/// A failed install leaves generation untouched; it is reported on stderr.
pub fn init(verbosity: u8) {
    if let Err(err) = try_install(verbosity) {
        eprintln!("warning: logging not initialized: {err}");
    }
}

fn try_install(verbosity: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

fn default_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::new(filter_directives(verbosity))
}

fn filter_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let allowlist: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    format!("warn,{}", allowlist.join(","))
}
