//! Shared types for order pricing

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// One variety plus its requested weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Catalog reference (apple id)
    pub product_reference: String,
    /// Requested weight in whole kilograms
    pub weight_kg: u32,
}

impl LineItem {
    pub fn new(product_reference: impl Into<String>, weight_kg: u32) -> Self {
        Self {
            product_reference: product_reference.into(),
            weight_kg,
        }
    }
}

/// Packaging selected by the customer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PackagingChoice {
    /// Customer brings their own crates
    #[default]
    #[serde(rename = "own")]
    OwnContainer,
    /// Packed in orchard boxes, charged per kilogram
    #[serde(rename = "box")]
    Boxed,
}

impl PackagingChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwnContainer => "own",
            Self::Boxed => "box",
        }
    }
}

/// Delivery destination supplied with an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryRequest {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DeliveryRequest {
    pub fn destination(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// ============================================================================
// Priced Types
// ============================================================================

/// Result of a delivery eligibility check
///
/// Ineligibility is a normal value: `eligible = false`, `fee = 0` and a
/// human-readable `rejection_reason`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryOutcome {
    pub eligible: bool,
    /// Great-circle distance from the orchard, rounded to 2 dp.
    /// Absent when the weight gate rejected before measuring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl DeliveryOutcome {
    pub fn rejected(distance_km: Option<f64>, reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            distance_km,
            fee: Decimal::ZERO,
            rejection_reason: Some(reason.into()),
        }
    }
}

/// Line item with its resolved unit price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedLineItem {
    pub product_reference: String,
    pub weight_kg: u32,
    /// Price per kilogram at the time of pricing
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// unit_price × weight_kg
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Fully priced order, ready to be persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedOrder {
    /// Same order as the input line items
    pub line_items: Vec<PricedLineItem>,
    pub packaging: PackagingChoice,
    #[serde(with = "rust_decimal::serde::float")]
    pub packaging_surcharge: Decimal,
    pub total_weight_kg: u64,
    /// Present only when delivery was requested (and therefore eligible)
    pub delivery: Option<DeliveryOutcome>,
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

impl PricedOrder {
    /// Delivery fee included in the grand total
    pub fn delivery_fee(&self) -> Decimal {
        self.delivery
            .as_ref()
            .filter(|d| d.eligible)
            .map(|d| d.fee)
            .unwrap_or(Decimal::ZERO)
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Order lifecycle status, managed by persistence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Ready,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::Pending,
        Self::Confirmed,
        Self::Ready,
        Self::PickedUp,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Ready => "ready",
            Self::PickedUp => "picked_up",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown order status string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOrderStatus(pub String);

impl fmt::Display for InvalidOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid status '{}'. Must be one of: pending, confirmed, ready, picked_up, cancelled",
            self.0
        )
    }
}

impl std::error::Error for InvalidOrderStatus {}

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidOrderStatus(s.to_string()))
    }
}
