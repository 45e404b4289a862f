use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Logs go to stderr; stdout is left for the
/// summary and preview. `RUST_LOG` wins over the default filter.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "sales_cleaner=debug"
    } else {
        "sales_cleaner=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
