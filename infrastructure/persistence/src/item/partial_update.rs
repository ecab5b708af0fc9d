use sqlx::{Postgres, QueryBuilder};

use business::domain::item::changes::ItemChanges;

use super::entity::ITEM_COLUMNS;

/// Columns a partial update may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatableColumn {
    Name,
    Brand,
    PurchasePrice,
}

impl UpdatableColumn {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdatableColumn::Name => "name",
            UpdatableColumn::Brand => "brand",
            UpdatableColumn::PurchasePrice => "purchase_price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnValue<'a> {
    Text(&'a str),
    Integer(i64),
}

/// The `(column, value)` pairs for the fields present in `changes`.
pub fn assignments(changes: &ItemChanges) -> Vec<(UpdatableColumn, ColumnValue<'_>)> {
    let mut pairs = Vec::with_capacity(3);
    if let Some(name) = changes.name.as_deref() {
        pairs.push((UpdatableColumn::Name, ColumnValue::Text(name)));
    }
    if let Some(brand) = changes.brand.as_deref() {
        pairs.push((UpdatableColumn::Brand, ColumnValue::Text(brand)));
    }
    if let Some(price) = changes.purchase_price {
        pairs.push((UpdatableColumn::PurchasePrice, ColumnValue::Integer(price)));
    }
    pairs
}

/// `UPDATE items SET ..., updated_at = NOW() WHERE id = $n RETURNING ...`
///
/// Every value is a bound parameter; only column names from
/// [`UpdatableColumn`] are written into the statement text.
pub fn build_update_query(id: i64, changes: &ItemChanges) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE items SET ");

    {
        let mut set = builder.separated(", ");
        for (column, value) in assignments(changes) {
            set.push(column.as_str());
            set.push_unseparated(" = ");
            match value {
                ColumnValue::Text(text) => set.push_bind_unseparated(text),
                ColumnValue::Integer(number) => set.push_bind_unseparated(number),
            };
        }
        set.push("updated_at = NOW()");
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING ");
    builder.push(ITEM_COLUMNS);
    builder
}
