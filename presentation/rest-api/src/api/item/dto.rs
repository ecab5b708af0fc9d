use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;
use business::domain::item::summary::CategorySummary;

/// Missing fields default to empty/zero so that validation reports every
/// problem in one response.
#[derive(Debug, Clone, Object)]
pub struct CreateItemRequest {
    /// Item name (1-100 characters)
    #[oai(default)]
    pub name: String,
    /// One of: 時計, バッグ, ジュエリー, 靴, その他
    #[oai(default)]
    pub category: String,
    /// Brand name (1-100 characters)
    #[oai(default)]
    pub brand: String,
    /// Purchase price (0 or greater)
    #[oai(default)]
    pub purchase_price: i64,
    /// Purchase date as YYYY-MM-DD
    #[oai(default)]
    pub purchase_date: String,
}

/// Full replacement of an item's fields.
#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    #[oai(default)]
    pub name: String,
    #[oai(default)]
    pub category: String,
    #[oai(default)]
    pub brand: String,
    #[oai(default)]
    pub purchase_price: i64,
    #[oai(default)]
    pub purchase_date: String,
}

/// Omitted fields keep their current value.
#[derive(Debug, Clone, Object)]
pub struct PatchItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub purchase_price: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    /// Purchase date as YYYY-MM-DD
    pub purchase_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            brand: item.brand,
            purchase_price: item.purchase_price,
            purchase_date: item.purchase_date,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategorySummaryResponse {
    /// Item count for each of the five categories
    pub categories: BTreeMap<String, i64>,
    /// Count of every stored item
    pub total: i64,
}

impl From<CategorySummary> for CategorySummaryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            categories: summary
                .categories
                .into_iter()
                .map(|(category, count)| (category.label().to_string(), count))
                .collect(),
            total: summary.total,
        }
    }
}
