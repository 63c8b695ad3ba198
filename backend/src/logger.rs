use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber.
///
/// Filter defaults to "info", overridable with the RUST_LOG environment
/// variable. Safe to call more than once, later calls are no-ops.
pub fn init_logging() {
    INIT.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub fn debug(msg: &str) {
    tracing::debug!("{}", msg);
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn warn(msg: &str) {
    tracing::warn!("{}", msg);
}

pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}
