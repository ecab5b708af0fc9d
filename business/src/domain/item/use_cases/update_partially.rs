use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

/// Fields left as `None` keep their stored value.
/// Category and purchase date cannot be changed through this path.
#[derive(Default)]
pub struct UpdateItemPartiallyParams {
    pub id: i64,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub purchase_price: Option<i64>,
}

#[async_trait]
pub trait UpdateItemPartiallyUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemPartiallyParams) -> Result<Item, ItemError>;
}
