// src/logging.rs
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// `debug` forces `trace` level; otherwise `RUST_LOG` applies, defaulting to `warn`.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded or under test.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
