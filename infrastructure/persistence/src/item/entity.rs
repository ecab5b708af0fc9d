use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::item::model::{Item, PURCHASE_DATE_FORMAT};

/// Column list shared by every statement that returns item rows.
pub const ITEM_COLUMNS: &str =
    "id, name, category, brand, purchase_price, purchase_date, created_at, updated_at";

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.name,
            self.category,
            self.brand,
            self.purchase_price,
            self.purchase_date.format(PURCHASE_DATE_FORMAT).to_string(),
            self.created_at,
            self.updated_at,
        )
    }
}
