//! Gateway trait for the `/orders` endpoints.

use crate::domain::entities::{NewOrder, Order};
use crate::domain::gateways::Reply;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// `GET /orders/`: the session user's orders, in record order.
    async fn list_orders(&self) -> Result<Reply<Vec<Order>>, AppError>;

    /// `POST /orders/`. `201` on creation.
    async fn create_order(&self, new_order: NewOrder) -> Result<Reply<()>, AppError>;
}
