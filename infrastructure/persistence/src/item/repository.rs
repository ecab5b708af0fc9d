use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::item::changes::ItemChanges;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use super::entity::{ITEM_COLUMNS, ItemEntity};
use super::partial_update::build_update_query;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    move |err| {
        tracing::error!(operation, error = %err, "Item query failed");
        RepositoryError::DatabaseError
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("find_all"))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("find_by_id"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, item: &Item) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            r#"INSERT INTO items (name, category, brand, purchase_price, purchase_date)
            VALUES ($1, $2, $3, $4, $5::date)
            RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.brand)
        .bind(item.purchase_price)
        .bind(&item.purchase_date)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error("create"))?;

        Ok(entity.into_domain())
    }

    async fn update(&self, item: &Item) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            r#"UPDATE items SET
                name = $1,
                category = $2,
                brand = $3,
                purchase_price = $4,
                purchase_date = $5::date,
                updated_at = NOW()
            WHERE id = $6
            RETURNING {ITEM_COLUMNS}"#
        ))
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.brand)
        .bind(item.purchase_price)
        .bind(&item.purchase_date)
        .bind(item.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error("update"))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn update_partially(
        &self,
        id: i64,
        changes: &ItemChanges,
    ) -> Result<Item, RepositoryError> {
        let mut query = build_update_query(id, changes);

        let entity = query
            .build_query_as::<ItemEntity>()
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("update_partially"))?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn get_summary_by_category(&self) -> Result<HashMap<String, i64>, RepositoryError> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT category, COUNT(*) AS count FROM items GROUP BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error("get_summary_by_category"))?;

        Ok(rows.into_iter().collect())
    }
}
