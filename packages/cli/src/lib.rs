use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod probe;

#[cfg(test)]
mod tests;

use config::Config;
use todo_api::AppState;
use todo_store::TodoStore;

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    println!("🚀 Starting todo API server...");
    println!("📡 Server will run on http://localhost:{}", config.port);
    println!("Supabase URL: {}", config.supabase_url);

    let store = TodoStore::new(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
        config.store_timeout,
    )?;

    // Probe once before accepting connections; outcome never gates serving.
    if !probe::test_connection(&store).await {
        println!("⚠️  Server starting without database connection");
        println!("💡 Check your Supabase instance and Kong gateway configuration");
    }

    // Create CORS layer: any origin, per the service contract
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let state = AppState {
        store,
        verbose_errors: config.verbose_errors,
    };

    // Create the router with CORS
    let app = todo_api::create_router(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("✅ Server listening on {}", addr);
    println!("Health check: http://localhost:{}/api/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
