use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::changes::ItemChanges;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update_partially::{
    UpdateItemPartiallyParams, UpdateItemPartiallyUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateItemPartiallyUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemPartiallyUseCase for UpdateItemPartiallyUseCaseImpl {
    async fn execute(&self, params: UpdateItemPartiallyParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Partially updating item: {}", params.id));

        if params.id <= 0 {
            return Err(ItemError::invalid_id(params.id));
        }

        let mut merged = self
            .repository
            .find_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        if let Some(name) = &params.name {
            merged.name = name.clone();
        }
        if let Some(brand) = &params.brand {
            merged.brand = brand.clone();
        }
        if let Some(purchase_price) = params.purchase_price {
            merged.purchase_price = purchase_price;
        }

        merged.validate()?;

        let changes = ItemChanges {
            name: params.name,
            brand: params.brand,
            purchase_price: params.purchase_price,
        };
        if changes.is_empty() {
            self.logger.debug(&format!(
                "No fields supplied for item {}, refreshing updated_at only",
                params.id
            ));
        }

        // A row deleted since the read above surfaces as a repository error.
        let updated = self
            .repository
            .update_partially(params.id, &changes)
            .await?;

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn find_by_id(&self, id: i64) -> Result<Item, RepositoryError>;
            async fn create(&self, item: &Item) -> Result<Item, RepositoryError>;
            async fn update(&self, item: &Item) -> Result<Item, RepositoryError>;
            async fn update_partially(&self, id: i64, changes: &ItemChanges) -> Result<Item, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
            async fn get_summary_by_category(&self) -> Result<HashMap<String, i64>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_item(id: i64) -> Item {
        let created = Utc::now() - Duration::days(1);
        Item::from_repository(
            id,
            "時計1".to_string(),
            "時計".to_string(),
            "ROLEX".to_string(),
            1_000_000,
            "2023-01-01".to_string(),
            created,
            created,
        )
    }

    /// Applies the changes to the stored item like the database would.
    fn apply(id: i64, changes: &ItemChanges) -> Item {
        let mut item = stored_item(id);
        if let Some(name) = &changes.name {
            item.name = name.clone();
        }
        if let Some(brand) = &changes.brand {
            item.brand = brand.clone();
        }
        if let Some(price) = changes.purchase_price {
            item.purchase_price = price;
        }
        item.updated_at = Utc::now();
        item
    }

    #[tokio::test]
    async fn should_update_only_supplied_name() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(stored_item(id)));
        mock_repo
            .expect_update_partially()
            .withf(|id, changes| {
                *id == 1
                    && *changes
                        == ItemChanges {
                            name: Some("新しい時計".to_string()),
                            brand: None,
                            purchase_price: None,
                        }
            })
            .times(1)
            .returning(|id, changes| Ok(apply(id, changes)));

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let before = stored_item(1);
        let item = use_case
            .execute(UpdateItemPartiallyParams {
                id: 1,
                name: Some("新しい時計".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(item.name, "新しい時計");
        assert_eq!(item.brand, before.brand);
        assert_eq!(item.purchase_price, before.purchase_price);
        assert_eq!(item.category, before.category);
        assert_eq!(item.purchase_date, before.purchase_date);
        assert!(item.updated_at > item.created_at);
    }

    #[tokio::test]
    async fn should_update_name_and_price() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(stored_item(id)));
        mock_repo
            .expect_update_partially()
            .withf(|_, changes| {
                changes.name.as_deref() == Some("更新後")
                    && changes.brand.is_none()
                    && changes.purchase_price == Some(1_200_000)
            })
            .returning(|id, changes| Ok(apply(id, changes)));

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(UpdateItemPartiallyParams {
                id: 1,
                name: Some("更新後".to_string()),
                purchase_price: Some(1_200_000),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(item.name, "更新後");
        assert_eq!(item.purchase_price, 1_200_000);
        assert_eq!(item.brand, "ROLEX");
    }

    #[tokio::test]
    async fn should_pass_zero_price_through_as_supplied() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(stored_item(id)));
        mock_repo
            .expect_update_partially()
            .withf(|_, changes| changes.purchase_price == Some(0))
            .times(1)
            .returning(|id, changes| Ok(apply(id, changes)));

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(UpdateItemPartiallyParams {
                id: 1,
                purchase_price: Some(0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(item.purchase_price, 0);
    }

    #[tokio::test]
    async fn should_reject_merged_item_that_fails_validation() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(stored_item(id)));
        mock_repo.expect_update_partially().never();

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemPartiallyParams {
                id: 1,
                name: Some(String::new()),
                purchase_price: Some(-10),
                ..Default::default()
            })
            .await;

        match result.unwrap_err() {
            ItemError::InvalidInput(message) => assert_eq!(
                message,
                "name is required, purchase_price must be 0 or greater"
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update_partially().never();

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemPartiallyParams {
                id: 999,
                name: Some("x".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_non_positive_id() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_find_by_id().never();

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemPartiallyParams {
                id: 0,
                name: Some("x".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn should_wrap_database_error_on_update() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(stored_item(id)));
        mock_repo
            .expect_update_partially()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemPartiallyParams {
                id: 1,
                brand: Some("OMEGA".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_not_translate_not_found_raised_by_the_update_itself() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(stored_item(id)));
        mock_repo
            .expect_update_partially()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateItemPartiallyUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateItemPartiallyParams {
                id: 1,
                brand: Some("OMEGA".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::NotFound)
        ));
    }
}
