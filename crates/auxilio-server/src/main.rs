//! `Auxilio` Server - REST API for first-aid recommendations.

use std::sync::Arc;

use auxilio_core::Recommender;
use auxilio_server::{build_router, AppState};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Auxilio Server - first-aid recommendations over HTTP
#[derive(Parser, Debug)]
#[command(name = "auxilio-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "AUXILIO_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "AUXILIO_PORT")]
    port: u16,
}

/// Build CORS layer from environment configuration.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("AUXILIO_CORS_ORIGIN") {
        Ok(origins) => {
            use tower_http::cors::AllowOrigin;
            let origin_list: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origin_list))
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        Err(_) => {
            tracing::warn!("CORS: permissive. Set AUXILIO_CORS_ORIGIN to restrict origins.");
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    tracing::info!("Starting Auxilio server...");

    let state = Arc::new(AppState::new(Recommender::builtin()));

    let app = build_router(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        app.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", auxilio_server::ApiDoc::openapi()),
        )
    };

    let app = app
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Auxilio server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
