use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::changes::ItemChanges;
use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, newest first.
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Item, RepositoryError>;
    /// Inserts the item and returns it as stored, with id and timestamps.
    async fn create(&self, item: &Item) -> Result<Item, RepositoryError>;
    /// Overwrites all business fields of `item.id`.
    async fn update(&self, item: &Item) -> Result<Item, RepositoryError>;
    /// Applies only the supplied columns and refreshes `updated_at`.
    async fn update_partially(
        &self,
        id: i64,
        changes: &ItemChanges,
    ) -> Result<Item, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    /// Raw item count per stored category label, unfiltered.
    async fn get_summary_by_category(&self) -> Result<HashMap<String, i64>, RepositoryError>;
}
