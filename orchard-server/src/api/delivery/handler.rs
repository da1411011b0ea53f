//! Delivery API Handlers

use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::order::{DeliveryOutcome, GeoPoint};
use validator::Validate;

use crate::pricing::{
    DELIVERY_FEE, MAX_DELIVERY_DISTANCE_KM, MIN_DELIVERY_WEIGHT_KG, ORCHARD_ORIGIN,
    check_delivery,
};
use crate::utils::AppResult;
use crate::utils::validation::validate_payload;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeliveryCheckRequest {
    pub total_weight_kg: u64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// POST /delivery/check
///
/// Ineligibility is a normal response, not an error.
pub async fn check(Json(payload): Json<DeliveryCheckRequest>) -> AppResult<Json<DeliveryOutcome>> {
    validate_payload(&payload)?;

    let outcome = check_delivery(
        payload.total_weight_kg,
        GeoPoint::new(payload.latitude, payload.longitude),
    );

    tracing::debug!(
        total_weight_kg = payload.total_weight_kg,
        eligible = outcome.eligible,
        distance_km = ?outcome.distance_km,
        "Delivery checked"
    );
    Ok(Json(outcome))
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryPolicy {
    pub origin: GeoPoint,
    pub min_weight_kg: u64,
    pub max_distance_km: f64,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
}

/// GET /delivery/origin
pub async fn origin() -> Json<DeliveryPolicy> {
    Json(DeliveryPolicy {
        origin: ORCHARD_ORIGIN,
        min_weight_kg: MIN_DELIVERY_WEIGHT_KG,
        max_distance_km: MAX_DELIVERY_DISTANCE_KM,
        fee: DELIVERY_FEE,
    })
}
