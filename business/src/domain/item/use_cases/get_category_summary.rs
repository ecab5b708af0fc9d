use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::summary::CategorySummary;

#[async_trait]
pub trait GetCategorySummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<CategorySummary, ItemError>;
}
