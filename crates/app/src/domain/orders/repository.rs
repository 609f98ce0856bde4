//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::orders::{
    data::NewOrder,
    records::{OrderLineRecord, OrderRecord, OrderStatus},
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_LINE_SQL: &str = include_str!("sql/create_order_line.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const LIST_ORDER_LINES_SQL: &str = include_str!("sql/list_order_lines.sql");

/// An order row before its lines are attached.
#[derive(Debug)]
struct OrderRow {
    record: OrderRecord,
}

/// A line row carrying the id of the order it belongs to.
#[derive(Debug)]
struct OrderLineRow {
    order_id: i64,
    line: OrderLineRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        let row: OrderRow = query_as(CREATE_ORDER_SQL)
            .bind(&order.table_id)
            .bind(order.total)
            .fetch_one(&mut **tx)
            .await?;

        let mut record = row.record;

        for line in order.lines {
            let quantity = i32::try_from(line.quantity)
                .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

            query(CREATE_ORDER_LINE_SQL)
                .bind(record.id)
                .bind(&line.name)
                .bind(line.unit_price)
                .bind(quantity)
                .execute(&mut **tx)
                .await?;

            record.lines.push(OrderLineRecord {
                name: line.name,
                unit_price: line.unit_price,
                quantity: line.quantity,
            });
        }

        Ok(record)
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let orders: Vec<OrderRow> = query_as(LIST_ORDERS_SQL).fetch_all(&mut **tx).await?;

        let lines: Vec<OrderLineRow> = query_as(LIST_ORDER_LINES_SQL)
            .fetch_all(&mut **tx)
            .await?;

        let mut lines_by_order: FxHashMap<i64, Vec<OrderLineRecord>> = FxHashMap::default();

        for row in lines {
            lines_by_order
                .entry(row.order_id)
                .or_default()
                .push(row.line);
        }

        Ok(orders
            .into_iter()
            .map(|row| {
                let mut record = row.record;

                record.lines = lines_by_order.remove(&record.id).unwrap_or_default();

                record
            })
            .collect())
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            record: OrderRecord {
                id: row.try_get("id")?,
                table_id: row.try_get("table_id")?,
                lines: Vec::new(),
                total: row.try_get::<Decimal, _>("total")?,
                status,
                created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            },
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderLineRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            order_id: row.try_get("order_id")?,
            line: OrderLineRecord {
                name: row.try_get("name")?,
                unit_price: row.try_get::<Decimal, _>("unit_price")?,
                quantity,
            },
        })
    }
}
