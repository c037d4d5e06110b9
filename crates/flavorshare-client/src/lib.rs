//! # flavorshare-client
//!
//! Application core of FlavorShare: session, recipe collection, favorites,
//! theme and guided cooking, persisted to the local store after every
//! command.  A presentation layer opens a [`Client`], renders from
//! [`Client::state`] and calls the command methods on user input.

pub mod commands;
pub mod config;
pub mod error;
pub mod reducers;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

pub use crate::commands::Client;
pub use crate::config::ClientConfig;
pub use crate::error::{ClientError, Result};
pub use crate::state::{AppState, Effect, Outcome};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the default filter. Calling this more than once is
/// harmless; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flavorshare_client=debug,flavorshare_store=info,warn"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting {} client", flavorshare_shared::constants::APP_NAME);
    }
}

/// Set up logging and open a client from environment configuration.
pub fn run() -> Result<Client> {
    init_tracing();
    let config = ClientConfig::from_env();
    tracing::info!(?config, "Loaded configuration");
    Client::open(&config)
}
