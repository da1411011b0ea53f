//! Order Builder
//!
//! Validates a selection and prices it. Steps, in order:
//!
//! 1. at least one line item
//! 2. every weight is ≥ 10 kg and on a 5 kg step
//! 3. every reference resolves to a unit price
//! 4. subtotals, total weight, packaging surcharge
//! 5. delivery eligibility when requested
//!
//! The first failing step decides the error.

use rust_decimal::prelude::*;
use shared::order::{DeliveryRequest, LineItem, PackagingChoice, PricedLineItem, PricedOrder};
use thiserror::Error;

use super::catalog::PriceLookup;
use super::delivery::check_delivery;
use crate::utils::{AppError, ErrorCode};

/// Smallest weight accepted per variety
pub const MIN_LINE_WEIGHT_KG: u32 = 10;

/// Weights above the minimum go up in these steps
pub const WEIGHT_STEP_KG: u32 = 5;

/// Box packaging surcharge per kilogram of the whole order
pub const BOX_SURCHARGE_PER_KG: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

const DECIMAL_PLACES: u32 = 2;

/// Reasons an order cannot be priced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderValidationError {
    #[error("select at least one variety")]
    EmptyOrder,

    #[error("quantity must be ≥10 kg, in 5 kg increments")]
    InvalidQuantity {
        product_reference: String,
        weight_kg: u32,
    },

    #[error("variety not found: {0}")]
    UnknownVariety(String),

    #[error("delivery unavailable: {0}")]
    DeliveryUnavailable(String),
}

impl From<OrderValidationError> for AppError {
    fn from(err: OrderValidationError) -> Self {
        let message = err.to_string();
        match err {
            OrderValidationError::EmptyOrder => AppError::with_message(ErrorCode::OrderEmpty, message),
            OrderValidationError::InvalidQuantity {
                product_reference,
                weight_kg,
            } => AppError::with_message(ErrorCode::OrderInvalidQuantity, message)
                .with_detail("apple_id", product_reference)
                .with_detail("quantity_kg", weight_kg),
            OrderValidationError::UnknownVariety(reference) => {
                AppError::with_message(ErrorCode::AppleNotFound, message)
                    .with_detail("apple_id", reference)
            }
            OrderValidationError::DeliveryUnavailable(reason) => {
                AppError::with_message(ErrorCode::DeliveryUnavailable, message)
                    .with_detail("reason", reason)
            }
        }
    }
}

/// 10, 15, 20, ... kg
pub fn is_valid_weight(weight_kg: u32) -> bool {
    weight_kg >= MIN_LINE_WEIGHT_KG && (weight_kg - MIN_LINE_WEIGHT_KG) % WEIGHT_STEP_KG == 0
}

/// Price `line_items` against `prices`
///
/// Line items keep their input order and duplicates are priced
/// independently. Delivery, when requested, must be eligible; its flat fee is
/// added to the grand total.
pub fn build_order<P>(
    line_items: &[LineItem],
    packaging: PackagingChoice,
    delivery: Option<&DeliveryRequest>,
    prices: &P,
) -> Result<PricedOrder, OrderValidationError>
where
    P: PriceLookup + ?Sized,
{
    if line_items.is_empty() {
        return Err(OrderValidationError::EmptyOrder);
    }

    if let Some(item) = line_items.iter().find(|item| !is_valid_weight(item.weight_kg)) {
        return Err(OrderValidationError::InvalidQuantity {
            product_reference: item.product_reference.clone(),
            weight_kg: item.weight_kg,
        });
    }

    let priced = line_items
        .iter()
        .map(|item| {
            let unit_price = prices
                .unit_price(&item.product_reference)
                .ok_or_else(|| OrderValidationError::UnknownVariety(item.product_reference.clone()))?;
            Ok(PricedLineItem {
                product_reference: item.product_reference.clone(),
                weight_kg: item.weight_kg,
                unit_price,
                subtotal: unit_price * Decimal::from(item.weight_kg),
            })
        })
        .collect::<Result<Vec<_>, OrderValidationError>>()?;

    let total_weight_kg: u64 = priced.iter().map(|item| u64::from(item.weight_kg)).sum();
    let items_total: Decimal = priced.iter().map(|item| item.subtotal).sum();

    let packaging_surcharge = match packaging {
        PackagingChoice::Boxed => BOX_SURCHARGE_PER_KG * Decimal::from(total_weight_kg),
        PackagingChoice::OwnContainer => Decimal::ZERO,
    };

    let delivery = match delivery {
        Some(request) => {
            let outcome = check_delivery(total_weight_kg, request.destination());
            if !outcome.eligible {
                let reason = outcome.rejection_reason.unwrap_or_default();
                return Err(OrderValidationError::DeliveryUnavailable(reason));
            }
            Some(outcome)
        }
        None => None,
    };
    let delivery_fee = delivery.as_ref().map(|d| d.fee).unwrap_or(Decimal::ZERO);

    let grand_total = (items_total + packaging_surcharge + delivery_fee)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    tracing::debug!(
        items = priced.len(),
        total_weight_kg,
        packaging = packaging.as_str(),
        delivery = delivery.is_some(),
        %grand_total,
        "Order priced"
    );

    Ok(PricedOrder {
        line_items: priced,
        packaging,
        packaging_surcharge,
        total_weight_kg,
        delivery,
        grand_total,
    })
}
