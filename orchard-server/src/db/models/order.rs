//! Order Model
//!
//! Persisted form of a priced order. Pricing itself lives in
//! [`crate::pricing`]; this document only records the result together with
//! the customer and pickup details.

use super::serde_helpers;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::order::{OrderStatus, PackagingChoice};
use surrealdb::RecordId;

/// Order line as persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub apple_id: String,
    pub apple_name: String,
    pub quantity_kg: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_kg: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub items: Vec<OrderItem>,
    pub packaging: PackagingChoice,
    #[serde(with = "rust_decimal::serde::float")]
    pub packaging_surcharge: Decimal,
    pub total_weight_kg: u64,

    // === Delivery ===
    pub delivery: bool,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub delivery_lat: Option<f64>,
    #[serde(default)]
    pub delivery_lon: Option<f64>,
    #[serde(default)]
    pub delivery_distance_km: Option<f64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,

    // === Customer ===
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,

    // === Pickup (opaque display strings) ===
    pub pickup_date: String,
    pub pickup_time: String,

    #[serde(default)]
    pub status: OrderStatus,
    /// Unix millis
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Order as returned by the API, with `id` as a plain string
///
/// Development mode has no record id to report, so the id is carried
/// separately from the document.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    #[serde(flatten)]
    pub order: Order,
}

impl OrderResponse {
    pub fn new(id: impl Into<String>, order: Order) -> Self {
        Self {
            id: id.into(),
            order: Order { id: None, ..order },
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self::new(order.id_string(), order)
    }
}

/// Orders listing response
#[derive(Debug, Clone, Serialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
    pub total: usize,
    pub skip: u32,
    pub limit: u32,
}
