use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemFields};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        if params.id <= 0 {
            return Err(ItemError::invalid_id(params.id));
        }

        let mut item = self
            .repository
            .find_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        item.update(ItemFields {
            name: params.name,
            category: params.category,
            brand: params.brand,
            purchase_price: params.purchase_price,
            purchase_date: params.purchase_date,
        })?;

        let updated = self.repository.update(&item).await?;

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}
