//! Order wire models.

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use comanda_app::domain::orders::records::{OrderLineRecord, OrderRecord};

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// Product name as submitted
    pub name: String,

    /// Unit price at submission time
    #[serde(with = "rust_decimal::serde::float")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// How many units were ordered
    pub quantity: u32,
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(record: OrderLineRecord) -> Self {
        Self {
            name: record.name,
            price: record.unit_price,
            quantity: record.quantity,
        }
    }
}

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// Ledger-assigned order id
    pub id: i64,

    /// Table the order belongs to
    pub table_id: String,

    /// The submitted order lines, in submission order
    pub lines: Vec<OrderLineResponse>,

    /// Grand total, two decimal places
    #[salvo(schema(value_type = String))]
    pub total: Decimal,

    /// Lifecycle status tag
    pub status: String,

    /// When the order was submitted
    #[salvo(schema(value_type = String))]
    pub created_at: Timestamp,
}

impl From<OrderRecord> for OrderResponse {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.id,
            table_id: record.table_id,
            lines: record.lines.into_iter().map(Into::into).collect(),
            total: record.total,
            status: record.status.tag().to_string(),
            created_at: record.created_at,
        }
    }
}
