use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, ItemFields};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Creating item: {}", params.name));

        let item = Item::new(ItemFields {
            name: params.name,
            category: params.category,
            brand: params.brand,
            purchase_price: params.purchase_price,
            purchase_date: params.purchase_date,
        })
        .map_err(|e| {
            self.logger.warn(&format!("Rejected item: {}", e));
            ItemError::from(e)
        })?;

        let created = self.repository.create(&item).await?;

        self.logger.info(&format!("Item created: {}", created.id));
        Ok(created)
    }
}
