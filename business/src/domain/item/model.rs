use chrono::{DateTime, NaiveDate, Utc};

use super::errors::ItemValidationError;
use super::value_objects::Category;

pub const MAX_TEXT_LENGTH: usize = 100;
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    /// Calendar date as `YYYY-MM-DD`.
    pub purchase_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The five business fields of an item, as supplied by a client.
#[derive(Debug, Clone, Default)]
pub struct ItemFields {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: String,
}

impl Item {
    pub fn new(fields: ItemFields) -> Result<Self, ItemValidationError> {
        let now = Utc::now();
        let item = Self {
            id: 0,
            name: fields.name.trim().to_string(),
            category: fields.category.trim().to_string(),
            brand: fields.brand.trim().to_string(),
            purchase_price: fields.purchase_price,
            purchase_date: fields.purchase_date.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        item.validate()?;
        Ok(item)
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        name: String,
        category: String,
        brand: String,
        purchase_price: i64,
        purchase_date: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            brand,
            purchase_price,
            purchase_date,
            created_at,
            updated_at,
        }
    }

    /// Checks every field and reports all violations together.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push("name is required".to_string());
        } else if self.name.chars().count() > MAX_TEXT_LENGTH {
            violations.push(format!(
                "name must be {MAX_TEXT_LENGTH} characters or less"
            ));
        }

        if self.category.is_empty() {
            violations.push("category is required".to_string());
        } else if !Category::is_valid(&self.category) {
            violations.push(format!(
                "category must be one of: {}",
                Category::labels().join(", ")
            ));
        }

        if self.brand.is_empty() {
            violations.push("brand is required".to_string());
        } else if self.brand.chars().count() > MAX_TEXT_LENGTH {
            violations.push(format!(
                "brand must be {MAX_TEXT_LENGTH} characters or less"
            ));
        }

        if self.purchase_price < 0 {
            violations.push("purchase_price must be 0 or greater".to_string());
        }

        if self.purchase_date.is_empty() {
            violations.push("purchase_date is required".to_string());
        } else if !is_valid_purchase_date(&self.purchase_date) {
            violations.push("purchase_date must be in YYYY-MM-DD format".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ItemValidationError { violations })
        }
    }

    /// Replaces all five business fields and re-validates.
    ///
    /// The fields and `updated_at` are overwritten before validation runs, so
    /// on error the instance holds the rejected values and must be discarded.
    pub fn update(&mut self, fields: ItemFields) -> Result<(), ItemValidationError> {
        self.name = fields.name.trim().to_string();
        self.category = fields.category.trim().to_string();
        self.brand = fields.brand.trim().to_string();
        self.purchase_price = fields.purchase_price;
        self.purchase_date = fields.purchase_date.trim().to_string();
        self.updated_at = Utc::now();

        self.validate()
    }

    pub fn list_valid_categories() -> Vec<&'static str> {
        Category::labels()
    }
}

/// Strict `YYYY-MM-DD`: zero-padded month and day, real calendar date.
fn is_valid_purchase_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    well_formed && NaiveDate::parse_from_str(value, PURCHASE_DATE_FORMAT).is_ok()
}
