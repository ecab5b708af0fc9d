use std::sync::Arc;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::get_category_summary::GetCategorySummaryUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::item::update_partially::UpdateItemPartiallyUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::item::routes::ItemApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let repository = Arc::new(ItemRepositoryPostgres::new(pool));

        let create_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_partially_use_case = Arc::new(UpdateItemPartiallyUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let summary_use_case = Arc::new(GetCategorySummaryUseCaseImpl { repository, logger });

        let item_api = ItemApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            update_partially_use_case,
            delete_use_case,
            summary_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            item_api,
        }
    }
}
