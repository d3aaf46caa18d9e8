use menu_api::{app, auth::AdminGuard, config::AppConfig, database::CatalogStore, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up MENU_DB, MENU_ADMIN_*, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let store = CatalogStore::connect(&config.database.path, config.database.max_connections)
        .await
        .unwrap_or_else(|e| panic!("failed to open database {}: {}", config.database.path, e));

    let state = AppState {
        store,
        guard: AdminGuard::new(config.admin.clone()),
    };
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Menu API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
