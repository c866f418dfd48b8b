mod routes;

use axum::{
    Router,
    routing::{get, put},
};
use clap::Parser;
use frontend_cors_rs::{CorsPolicy, register_cors_policy};
use std::net::SocketAddr;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// Axum server with the frontend CORS policy registered
#[derive(Parser, Debug)]
#[command(name = "cors-demo")]
struct Cli {
    /// Host to bind to
    #[arg(long, env = "CORS_DEMO_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(long, env = "CORS_DEMO_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    let router = Router::new()
        .route("/", get(routes::index))
        .route("/api/items", get(routes::list_items).post(routes::create_item))
        .route(
            "/api/items/{id}",
            put(routes::update_item).delete(routes::delete_item),
        )
        .route("/api/users", get(routes::list_users));

    let app = register_cors_policy(router, CorsPolicy::default());

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    info!(%addr, "CORS demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
