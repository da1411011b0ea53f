//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::Order;
use shared::order::OrderStatus;
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a new order; the database assigns the id
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let order = Order { id: None, ..order };
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id (`orders:key` or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(order)
    }

    /// All orders, newest first, optionally restricted to one status
    ///
    /// Paging is applied by the caller: the embedded engine can drop the
    /// first row when ORDER BY is combined with LIMIT.
    pub async fn find_all(&self, status: Option<OrderStatus>) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = match status {
            Some(status) => self
                .base
                .db()
                .query("SELECT * FROM orders WHERE status = $status ORDER BY created_at DESC")
                .bind(("status", status))
                .await?
                .take(0)?,
            None => self
                .base
                .db()
                .query("SELECT * FROM orders ORDER BY created_at DESC")
                .await?
                .take(0)?,
        };
        Ok(orders)
    }

    /// Set the status and stamp updated_at
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let updated: Option<Order> = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now RETURN AFTER")
            .bind(("thing", record_id(TABLE, id)))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?
            .take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }
}
