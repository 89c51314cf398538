use axum::Router;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;
mod state;
mod telemetry;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::install_color_eyre();

    let config = Config::from_env()?;
    telemetry::init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());
    let mongo_client = database::mongodb::connect_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());
    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    let app = Router::new()
        .nest("/api", api::routes(&state))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(state.config.server.address()).await?;
    info!("Catalog API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl-c, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
