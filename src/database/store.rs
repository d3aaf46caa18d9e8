use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use super::models::{Category, Item, NewCategory, NewItem};

/// Errors from the catalog store. Storage failures carry the underlying
/// message and are surfaced to the caller unchanged; the store never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Durable persistence for categories and items, backed by a single SQLite
/// file. Referential integrity (cascade on category deletion) is enforced
/// here, not in the request handlers.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    /// Open (or create) the database file and ensure the schema exists.
    pub async fn connect(path: impl AsRef<Path>, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;

        info!("Connected to SQLite database at {}", path.as_ref().display());
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name_ru TEXT,
                name_en TEXT,
                image TEXT,
                sort_order INTEGER DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category_id INTEGER,
                name_ru TEXT,
                name_en TEXT,
                desc_ru TEXT,
                desc_en TEXT,
                price REAL,
                image TEXT,
                FOREIGN KEY(category_id) REFERENCES categories(id) ON DELETE CASCADE
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Pings the database to ensure connectivity
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// All categories, ascending by sort order. Empty result is not an error.
    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name_ru, name_en, image FROM categories ORDER BY sort_order",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    /// Insert a category, allocating `sort_order = max(existing) + 1` inside
    /// the INSERT itself. The subquery keeps the allocation atomic: two
    /// concurrent creations can never compute the same value the way a
    /// separate read-then-write would.
    pub async fn create_category(&self, category: &NewCategory) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO categories (name_ru, name_en, image, sort_order)
             VALUES (?, ?, ?, (SELECT IFNULL(MAX(sort_order), 0) + 1 FROM categories))",
        )
        .bind(&category.name_ru)
        .bind(&category.name_en)
        .bind(&category.image)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete a category and all items referencing it, in one transaction.
    /// Returns the number of category rows removed; 0 for an absent id.
    /// The cascade is spelled out as two statements rather than relying on
    /// the engine's ON DELETE CASCADE, which in SQLite hinges on a per
    /// connection pragma.
    pub async fn delete_category(&self, id: i64) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM items WHERE category_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Items of one category in insertion order. Empty result for an unknown
    /// category id.
    pub async fn list_items_by_category(&self, category_id: i64) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, category_id, name_ru, name_en, desc_ru, desc_en, price, image
             FROM items WHERE category_id = ?",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn create_item(&self, item: &NewItem) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO items (category_id, name_ru, name_en, desc_ru, desc_en, price, image)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.category_id)
        .bind(&item.name_ru)
        .bind(&item.name_en)
        .bind(&item.desc_ru)
        .bind(&item.desc_en)
        .bind(item.price)
        .bind(&item.image)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Returns the number of item rows removed; 0 for an absent id.
    pub async fn delete_item(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
