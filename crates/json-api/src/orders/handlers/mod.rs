//! Order Handlers

pub(crate) mod create;
pub(crate) mod index;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::dec;

    use comanda_app::domain::orders::records::{OrderLineRecord, OrderRecord, OrderStatus};

    pub(super) fn make_order(id: i64) -> OrderRecord {
        OrderRecord {
            id,
            table_id: "3".to_string(),
            lines: vec![
                OrderLineRecord {
                    name: "Espeto de picanha".to_string(),
                    unit_price: dec!(29.90),
                    quantity: 2,
                },
                OrderLineRecord {
                    name: "Refrigerante lata".to_string(),
                    unit_price: dec!(6.00),
                    quantity: 1,
                },
            ],
            total: dec!(65.80),
            status: OrderStatus::Pending,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}
