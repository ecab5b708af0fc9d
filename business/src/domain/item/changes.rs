/// Columns a partial update touches.
///
/// `None` leaves the stored value as it is; `Some(0)` is a real zero price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub purchase_price: Option<i64>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.brand.is_none() && self.purchase_price.is_none()
    }
}
