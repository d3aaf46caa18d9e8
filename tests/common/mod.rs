// Shared by several test binaries; not every binary uses every helper.
#![allow(dead_code)]

use anyhow::Result;
use reqwest::header::AUTHORIZATION;

use menu_api::auth::AdminGuard;
use menu_api::config::AdminConfig;
use menu_api::database::CatalogStore;
use menu_api::state::AppState;

pub const ADMIN_TOKEN: &str = "secret-admin-token-12345";

/// A freshly served application instance with its own temporary database.
/// The temp dir is held so the SQLite file lives as long as the server.
pub struct TestServer {
    pub base_url: String,
    _db_dir: tempfile::TempDir,
}

/// Serve the real router in-process on an ephemeral port. Every test gets an
/// isolated store, so suites can run concurrently without state bleed.
pub async fn spawn_server() -> Result<TestServer> {
    let db_dir = tempfile::tempdir()?;
    let store = CatalogStore::connect(db_dir.path().join("menu.db"), 5).await?;
    let guard = AdminGuard::new(AdminConfig {
        username: "admin".to_string(),
        password: "123".to_string(),
        token: ADMIN_TOKEN.to_string(),
    });

    let app = menu_api::app(AppState { store, guard });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    Ok(TestServer {
        base_url: format!("http://{}", addr),
        _db_dir: db_dir,
    })
}

pub fn bearer(token: &str) -> (reqwest::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", token))
}

/// Create a category as admin and return its id.
pub async fn create_category(
    server: &TestServer,
    client: &reqwest::Client,
    name_en: &str,
) -> Result<i64> {
    let (header, value) = bearer(ADMIN_TOKEN);
    let res = client
        .post(format!("{}/api/categories", server.base_url))
        .header(header, value)
        .json(&serde_json::json!({
            "nameRu": format!("{} (ru)", name_en),
            "nameEn": name_en,
            "image": "category.png"
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status().is_success(), "create category failed: {}", res.status());
    let body = res.json::<serde_json::Value>().await?;
    body["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in response: {}", body))
}

/// Create an item as admin and return its id.
pub async fn create_item(
    server: &TestServer,
    client: &reqwest::Client,
    category_id: i64,
    name_en: &str,
    price: f64,
) -> Result<i64> {
    let (header, value) = bearer(ADMIN_TOKEN);
    let res = client
        .post(format!("{}/api/items", server.base_url))
        .header(header, value)
        .json(&serde_json::json!({
            "categoryId": category_id,
            "nameRu": format!("{} (ru)", name_en),
            "nameEn": name_en,
            "descRu": "описание",
            "descEn": "description",
            "price": price,
            "image": "item.png"
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status().is_success(), "create item failed: {}", res.status());
    let body = res.json::<serde_json::Value>().await?;
    body["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in response: {}", body))
}
