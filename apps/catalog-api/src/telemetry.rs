//! Tracing and error-report initialization.

use tracing_subscriber::{EnvFilter, prelude::*};

use crate::config::Environment;

/// Install color-eyre early in main, before any fallible operation.
/// Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware formatting.
///
/// Production gets JSON output for log aggregation; development gets a
/// pretty human-readable format. `RUST_LOG` overrides the default
/// filter. Repeated initialization (common in tests) is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info")
        } else {
            EnvFilter::new("debug")
        }
    });

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().pretty().with_target(false))
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing already initialized, skipping re-initialization");
    }
}
