// Logging facade with DEBUG/INFO/ERROR levels backed by tracing.
// Call sites use these small helpers so the subscriber setup lives in one place.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static DEBUG: AtomicBool = AtomicBool::new(false);
static INIT: Once = Once::new();

// Install the stderr subscriber. `--debug` raises the default level; RUST_LOG wins if set.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
    INIT.call_once(|| {
        let default_level = if enabled { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        // A subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

// Returns true if debug logging was requested.
pub fn is_debug() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn debug(msg: &str) {
    tracing::debug!("{}", msg);
}

pub fn error(msg: &str) {
    tracing::error!("{}", msg);
}
