use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::model::Item;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::GetAllItemsUseCase;
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::get_category_summary::GetCategorySummaryUseCase;
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::item::use_cases::update_partially::{
    UpdateItemPartiallyParams, UpdateItemPartiallyUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{
    CategorySummaryResponse, CreateItemRequest, ItemResponse, PatchItemRequest,
    UpdateItemRequest,
};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    update_partially_use_case: Arc<dyn UpdateItemPartiallyUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    summary_use_case: Arc<dyn GetCategorySummaryUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        update_partially_use_case: Arc<dyn UpdateItemPartiallyUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        summary_use_case: Arc<dyn GetCategorySummaryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            update_partially_use_case,
            delete_use_case,
            summary_use_case,
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Item inventory API
///
/// Endpoints for creating, reading, updating, deleting and summarizing items.
#[OpenApi]
impl ItemApi {
    /// Create a new item
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name,
            category: body.0.category,
            brand: body.0.brand,
            purchase_price: body.0.purchase_price,
            purchase_date: body.0.purchase_date,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => CreateItemResponse::BadRequest(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List all items
    ///
    /// Newest first.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all_items(&self) -> GetAllItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllItemsResponse::InternalError(json)
            }
        }
    }

    /// Item counts per category
    ///
    /// Every category is listed, with 0 when no item uses it.
    #[oai(path = "/items/summary", method = "get", tag = "ApiTags::Items")]
    async fn get_category_summary(&self) -> GetCategorySummaryResponse {
        match self.summary_use_case.execute().await {
            Ok(summary) => GetCategorySummaryResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategorySummaryResponse::InternalError(json)
            }
        }
    }

    /// Get an item by ID
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item_by_id(&self, id: Path<String>) -> ItemResult {
        let Some(id) = parse_id(&id.0) else {
            return ItemResult::BadRequest(ErrorResponse::invalid_id());
        };

        self.get_by_id_use_case
            .execute(GetItemByIdParams { id })
            .await
            .into()
    }

    /// Replace an item
    ///
    /// All five fields are overwritten and validated together.
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(&self, id: Path<String>, body: Json<UpdateItemRequest>) -> ItemResult {
        let Some(id) = parse_id(&id.0) else {
            return ItemResult::BadRequest(ErrorResponse::invalid_id());
        };

        let params = UpdateItemParams {
            id,
            name: body.0.name,
            category: body.0.category,
            brand: body.0.brand,
            purchase_price: body.0.purchase_price,
            purchase_date: body.0.purchase_date,
        };

        self.update_use_case.execute(params).await.into()
    }

    /// Update some fields of an item
    ///
    /// Only `name`, `brand` and `purchase_price` can be changed; omitted
    /// fields keep their value.
    #[oai(path = "/items/:id", method = "patch", tag = "ApiTags::Items")]
    async fn update_item_partially(
        &self,
        id: Path<String>,
        body: Json<PatchItemRequest>,
    ) -> ItemResult {
        let Some(id) = parse_id(&id.0) else {
            return ItemResult::BadRequest(ErrorResponse::invalid_id());
        };

        let params = UpdateItemPartiallyParams {
            id,
            name: body.0.name,
            brand: body.0.brand,
            purchase_price: body.0.purchase_price,
        };

        self.update_partially_use_case.execute(params).await.into()
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> DeleteItemResponse {
        let Some(id) = parse_id(&id.0) else {
            return DeleteItemResponse::BadRequest(ErrorResponse::invalid_id());
        };

        match self.delete_use_case.execute(DeleteItemParams { id }).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => DeleteItemResponse::BadRequest(json),
                    StatusCode::NOT_FOUND => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategorySummaryResponse {
    #[oai(status = 200)]
    Ok(Json<CategorySummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Shared by the endpoints that address one item and return it.
#[derive(poem_openapi::ApiResponse)]
pub enum ItemResult {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl<E: IntoErrorResponse> From<Result<Item, E>> for ItemResult {
    fn from(result: Result<Item, E>) -> Self {
        match result {
            Ok(item) => ItemResult::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => ItemResult::BadRequest(json),
                    StatusCode::NOT_FOUND => ItemResult::NotFound(json),
                    _ => ItemResult::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::item::errors::ItemError;
    use business::domain::item::summary::CategorySummary;
    use chrono::Utc;
    use poem::Route;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Clone, Copy)]
    enum Outcome {
        Success,
        Invalid,
        Missing,
        DatabaseDown,
    }

    /// Answers every use case with the same canned outcome.
    struct StubUseCases {
        outcome: Outcome,
    }

    impl StubUseCases {
        fn item(&self, id: i64) -> Result<Item, ItemError> {
            match self.outcome {
                Outcome::Success => {
                    let now = Utc::now();
                    Ok(Item::from_repository(
                        id,
                        "Submariner".to_string(),
                        "時計".to_string(),
                        "ROLEX".to_string(),
                        1_500_000,
                        "2023-01-15".to_string(),
                        now,
                        now,
                    ))
                }
                Outcome::Invalid => Err(ItemError::InvalidInput("name is required".to_string())),
                Outcome::Missing => Err(ItemError::NotFound),
                Outcome::DatabaseDown => Err(ItemError::Repository(RepositoryError::DatabaseError)),
            }
        }
    }

    #[async_trait]
    impl CreateItemUseCase for StubUseCases {
        async fn execute(&self, _params: CreateItemParams) -> Result<Item, ItemError> {
            self.item(1)
        }
    }

    #[async_trait]
    impl GetAllItemsUseCase for StubUseCases {
        async fn execute(&self) -> Result<Vec<Item>, ItemError> {
            Ok(vec![self.item(2)?, self.item(1)?])
        }
    }

    #[async_trait]
    impl GetItemByIdUseCase for StubUseCases {
        async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
            self.item(params.id)
        }
    }

    #[async_trait]
    impl UpdateItemUseCase for StubUseCases {
        async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
            self.item(params.id)
        }
    }

    #[async_trait]
    impl UpdateItemPartiallyUseCase for StubUseCases {
        async fn execute(&self, params: UpdateItemPartiallyParams) -> Result<Item, ItemError> {
            self.item(params.id)
        }
    }

    #[async_trait]
    impl DeleteItemUseCase for StubUseCases {
        async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
            self.item(params.id).map(|_| ())
        }
    }

    #[async_trait]
    impl GetCategorySummaryUseCase for StubUseCases {
        async fn execute(&self) -> Result<CategorySummary, ItemError> {
            self.item(0)?;
            let raw = HashMap::from([("時計".to_string(), 2), ("靴".to_string(), 1)]);
            Ok(CategorySummary::from_raw_counts(&raw))
        }
    }

    fn client(outcome: Outcome) -> TestClient<Route> {
        let stub = Arc::new(StubUseCases { outcome });
        let api = ItemApi::new(
            stub.clone(),
            stub.clone(),
            stub.clone(),
            stub.clone(),
            stub.clone(),
            stub.clone(),
            stub,
        );
        let service = OpenApiService::new(api, "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }

    fn create_body() -> serde_json::Value {
        json!({
            "name": "Submariner",
            "category": "時計",
            "brand": "ROLEX",
            "purchase_price": 1500000,
            "purchase_date": "2023-01-15"
        })
    }

    #[tokio::test]
    async fn should_create_item_with_201() {
        let response = client(Outcome::Success)
            .post("/items")
            .body_json(&create_body())
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let body = json.value().object();
        body.get("id").assert_i64(1);
        body.get("category").assert_string("時計");
        body.get("purchase_date").assert_string("2023-01-15");
    }

    #[tokio::test]
    async fn should_return_validation_reasons_on_create() {
        let response = client(Outcome::Invalid)
            .post("/items")
            .body_json(&json!({}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        let body = json.value().object();
        body.get("name").assert_string("ValidationError");
        body.get("message").assert_string("name is required");
    }

    #[tokio::test]
    async fn should_list_items() {
        let response = client(Outcome::Success).get("/items").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let items = json.value().array();
        items.assert_len(2);
        items.get(0).object().get("id").assert_i64(2);
    }

    #[tokio::test]
    async fn should_hide_database_details_behind_internal_error() {
        let response = client(Outcome::DatabaseDown).get("/items").send().await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = response.json().await;
        let body = json.value().object();
        body.get("name").assert_string("InternalError");
        body.get("message").assert_string("repository.persistence");
    }

    #[tokio::test]
    async fn should_route_summary_before_id_lookup() {
        let response = client(Outcome::Success).get("/items/summary").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let body = json.value().object();
        body.get("total").assert_i64(3);
        let categories = body.get("categories").object();
        categories.get("時計").assert_i64(2);
        categories.get("靴").assert_i64(1);
        categories.get("バッグ").assert_i64(0);
    }

    #[tokio::test]
    async fn should_get_item_by_id() {
        let response = client(Outcome::Success).get("/items/42").send().await;

        response.assert_status_is_ok();
        response.json().await.value().object().get("id").assert_i64(42);
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id_on_every_item_route() {
        let client = client(Outcome::Success);

        let responses = vec![
            client.get("/items/abc").send().await,
            client.put("/items/abc").body_json(&create_body()).send().await,
            client
                .patch("/items/abc")
                .body_json(&json!({ "name": "x" }))
                .send()
                .await,
            client.delete("/items/abc").send().await,
        ];

        for response in responses {
            response.assert_status(StatusCode::BAD_REQUEST);
            response
                .json()
                .await
                .value()
                .object()
                .get("message")
                .assert_string("item.invalid_id");
        }
    }

    #[tokio::test]
    async fn should_return_404_when_item_missing() {
        let response = client(Outcome::Missing).get("/items/999").send().await;

        response.assert_status(StatusCode::NOT_FOUND);
        response
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("item.not_found");
    }

    #[tokio::test]
    async fn should_replace_item_with_put() {
        let response = client(Outcome::Success)
            .put("/items/5")
            .body_json(&create_body())
            .send()
            .await;

        response.assert_status_is_ok();
        response.json().await.value().object().get("id").assert_i64(5);
    }

    #[tokio::test]
    async fn should_patch_item() {
        let response = client(Outcome::Success)
            .patch("/items/3")
            .body_json(&json!({ "purchase_price": 0 }))
            .send()
            .await;

        response.assert_status_is_ok();
        response.json().await.value().object().get("id").assert_i64(3);
    }

    #[tokio::test]
    async fn should_return_400_when_patch_is_invalid() {
        let response = client(Outcome::Invalid)
            .patch("/items/3")
            .body_json(&json!({ "name": "" }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_delete_item_with_empty_204() {
        let response = client(Outcome::Success).delete("/items/7").send().await;

        response.assert_status(StatusCode::NO_CONTENT);
        response.assert_text("").await;
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_missing_item() {
        let response = client(Outcome::Missing).delete("/items/7").send().await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
