//! Tracing setup shared by catalog binaries

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a global fmt subscriber filtered by `RUST_LOG` (default: `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("A global tracing subscriber was already installed");
    }
}
