//! Orders Data

use rust_decimal::Decimal;

/// One line of an incoming order.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub table_id: String,
    pub lines: Vec<NewOrderLine>,
    pub total: Decimal,
}
