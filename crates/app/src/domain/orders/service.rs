//! Orders service.
//!
//! The ledger of finalized orders. Submission assigns the next sequential id
//! and always stores the order as `pending`; listing returns the full ledger
//! in insertion order, unfiltered.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::orders::{
        data::NewOrder, errors::OrdersServiceError, records::OrderRecord,
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn submit_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        if order.table_id.trim().is_empty() {
            return Err(OrdersServiceError::MissingRequiredData);
        }

        if order.lines.is_empty() {
            return Err(OrdersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let stored = self.repository.create_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(stored)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx).await?;

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validates and stores a finalized order, returning it with its
    /// ledger-assigned id and `pending` status.
    async fn submit_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Returns every order with its lines, in insertion order.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;
}
