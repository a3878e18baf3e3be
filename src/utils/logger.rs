use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs a global tracing subscriber at debug level
///
/// Safe to call repeatedly; only the first call in a process installs
/// anything, and an already-installed subscriber is left in place.
pub fn setup_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .try_init();
    });
}
