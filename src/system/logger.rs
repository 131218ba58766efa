use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global subscriber. Logs go to stderr; stdout carries the report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = resolve_filter(
        std::env::var("SSTRESS_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
        verbose,
    );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// `SSTRESS_LOG` wins over `RUST_LOG`; with neither set, `--verbose` picks
/// `debug` over `info`. An unparsable directive falls back to `info`.
fn resolve_filter(
    sstress_log: Option<String>,
    rust_log: Option<String>,
    verbose: bool,
) -> EnvFilter {
    sstress_log.or(rust_log).map_or_else(
        || {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("info")
            }
        },
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
    )
}
