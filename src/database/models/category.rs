use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A menu category as it appears on the wire.
///
/// `sort_order` lives only in the database; listings come back already
/// ordered by it and clients never see the raw value.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name_ru: String,
    pub name_en: String,
    pub image: String,
}

/// Request body for creating a category. `sortOrder` is never accepted from
/// the client; the store allocates it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name_ru: String,
    pub name_en: String,
    pub image: String,
}
