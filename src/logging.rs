// SPDX-License-Identifier: GPL-3.0-only

use tracing_subscriber::{EnvFilter, filter::Directive, fmt::time::ChronoLocal};

const QUIET_CRATES: [&str; 4] = ["reqwest", "hyper", "hyper_util", "rustls"];

/// Builds the log filter from a level or directive string such as `debug` or
/// `info,dexlist::dump=debug`, falling back to `info`
pub fn filter(level: &str) -> EnvFilter {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|err| {
        eprintln!("Invalid log level `{level}`: {err}");
        EnvFilter::new("info")
    });

    QUIET_CRATES.iter().fold(filter, |filter, krate| {
        match format!("{krate}=warn").parse::<Directive>() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    })
}

/// Installs the global subscriber, logging to stderr
pub fn init(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init();

    if let Err(err) = result {
        eprintln!("Failed to initialize logging: {err}");
    }
}
