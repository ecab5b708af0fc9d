use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::summary::CategorySummary;
use crate::domain::item::use_cases::get_category_summary::GetCategorySummaryUseCase;
use crate::domain::item::value_objects::Category;
use crate::domain::logger::Logger;

pub struct GetCategorySummaryUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategorySummaryUseCase for GetCategorySummaryUseCaseImpl {
    async fn execute(&self) -> Result<CategorySummary, ItemError> {
        self.logger.info("Computing category summary");

        let raw = self.repository.get_summary_by_category().await?;
        let summary = CategorySummary::from_raw_counts(&raw);

        let unknown: Vec<&String> = raw
            .keys()
            .filter(|label| !Category::is_valid(label))
            .collect();
        if !unknown.is_empty() {
            self.logger.warn(&format!(
                "Stored categories outside the whitelist: {:?}",
                unknown
            ));
        }

        Ok(summary)
    }
}
