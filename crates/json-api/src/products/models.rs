//! Product wire models.

use comanda::menu::Category;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use comanda_app::domain::products::records::ProductRecord;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Catalog-assigned product id
    pub id: i64,

    /// Product name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Category tag
    #[salvo(schema(value_type = String))]
    pub category: Category,

    /// Product description
    pub description: String,

    /// Hosted image URL, when one was uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            category: record.category,
            description: record.description,
            image_url: record.image_url,
        }
    }
}
