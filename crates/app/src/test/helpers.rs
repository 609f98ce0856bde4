//! Test Helpers

use comanda::menu::Category;
use rust_decimal::Decimal;

use crate::domain::{
    orders::data::{NewOrder, NewOrderLine},
    products::data::NewProduct,
};

pub(crate) fn new_product(name: &str, price: Decimal, category: Category) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
        category,
        description: String::new(),
        image_url: None,
    }
}

pub(crate) fn new_order(table: &str, lines: &[(&str, Decimal, u32)], total: Decimal) -> NewOrder {
    NewOrder {
        table_id: table.to_string(),
        lines: lines
            .iter()
            .map(|(name, unit_price, quantity)| NewOrderLine {
                name: (*name).to_string(),
                unit_price: *unit_price,
                quantity: *quantity,
            })
            .collect(),
        total,
    }
}
