use sea_orm::Database;
use tracing::info;

use keygate_access::config::AccessConfig;
use keygate_access::router::build_router;
use keygate_access::state::AppState;
use keygate_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AccessConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        key_ttl_secs: config.key_ttl_secs,
        key_code_bytes: config.key_code_bytes,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.access_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("access service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
