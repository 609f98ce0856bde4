//! Order Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a stored status value is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

/// Order lifecycle status.
///
/// `Pending` is the only status ever written by submission; there is no
/// transition logic. `Delivered` exists so the dashboard can render orders
/// a human marked as done directly in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Delivered,
}

impl OrderStatus {
    /// The lowercase tag used on the wire and in storage.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// One line of a stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// A finalized order, owned by the ledger.
///
/// Immutable once stored; the id is assigned sequentially at submission and
/// never reused.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: i64,
    pub table_id: String,
    pub lines: Vec<OrderLineRecord>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}
