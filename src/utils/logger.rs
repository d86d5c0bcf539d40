use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// `RUST_LOG` wins; otherwise gateway events at info, or debug when verbose.
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("landmark_rpc=debug,info")
        } else {
            EnvFilter::new("landmark_rpc=info")
        }
    })
}

/// Installs the global subscriber. Returns `false` if one was already set,
/// which leaves the existing subscriber in place.
pub fn init_logger(format: LogFormat, verbose: bool) -> bool {
    let registry = tracing_subscriber::registry().with(default_filter(verbose));
    let layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => registry
            .with(layer.with_target(false).compact())
            .try_init()
            .is_ok(),
        LogFormat::Json => registry
            .with(layer.with_target(true).json())
            .try_init()
            .is_ok(),
    }
}
