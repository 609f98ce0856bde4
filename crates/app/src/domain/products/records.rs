//! Product Records

use comanda::menu::Category;
use jiff::Timestamp;
use rust_decimal::Decimal;

/// Catalog product as stored.
#[derive(Debug, Clone)]
pub struct ProductRecord {
    /// Ledger-assigned sequential id.
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
