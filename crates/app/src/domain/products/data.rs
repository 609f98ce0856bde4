//! Products Data

use comanda::menu::Category;
use rust_decimal::Decimal;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub description: String,
    pub image_url: Option<String>,
}

/// Product Update Data
///
/// Updates replace the whole editable surface of a product, matching the
/// admin form which always submits every field.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub price: Decimal,
    pub category: Category,
    pub description: String,
    pub image_url: Option<String>,
}
