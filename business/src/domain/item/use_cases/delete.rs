use async_trait::async_trait;

use crate::domain::item::errors::ItemError;

pub struct DeleteItemParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
