use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A priced menu item belonging to a category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub category_id: i64,
    pub name_ru: String,
    pub name_en: String,
    pub desc_ru: String,
    pub desc_en: String,
    pub price: f64,
    pub image: String,
}

/// Request body for creating an item. The caller supplies `categoryId`
/// explicitly; referential integrity is the store's concern, not validated
/// here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub category_id: i64,
    pub name_ru: String,
    pub name_en: String,
    pub desc_ru: String,
    pub desc_en: String,
    pub price: f64,
    pub image: String,
}
