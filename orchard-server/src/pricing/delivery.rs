//! Delivery Eligibility
//!
//! Delivery is offered for heavy orders close to the orchard. The check
//! never fails: an ineligible destination is reported through
//! [`DeliveryOutcome::rejected`] with a reason the storefront can show.

use rust_decimal::prelude::*;
use shared::order::{DeliveryOutcome, GeoPoint};

/// Orchard location (Srebrna, Masovia)
pub const ORCHARD_ORIGIN: GeoPoint = GeoPoint::new(52.3138, 20.8445);

/// Lightest order that qualifies for delivery
pub const MIN_DELIVERY_WEIGHT_KG: u64 = 200;

/// Delivery radius, inclusive
pub const MAX_DELIVERY_DISTANCE_KM: f64 = 25.0;

/// Flat fee for an eligible delivery
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Mean Earth radius
pub(crate) const EARTH_RADIUS_KM: f64 = 6371.0;

const DISTANCE_DECIMAL_PLACES: u32 = 2;

/// Great-circle distance between two points in kilometres
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Decide whether an order of `total_weight_kg` can be delivered to `destination`
///
/// The weight gate runs first, so a light order is rejected without a
/// distance.
pub fn check_delivery(total_weight_kg: u64, destination: GeoPoint) -> DeliveryOutcome {
    if total_weight_kg < MIN_DELIVERY_WEIGHT_KG {
        return DeliveryOutcome::rejected(
            None,
            format!("delivery requires at least {MIN_DELIVERY_WEIGHT_KG} kg"),
        );
    }

    assess_distance(haversine_km(ORCHARD_ORIGIN, destination))
}

/// Radius check on an already measured distance
///
/// Compares the unrounded distance; only the reported value is rounded.
pub(crate) fn assess_distance(distance_km: f64) -> DeliveryOutcome {
    if !distance_km.is_finite() {
        return DeliveryOutcome::rejected(None, "invalid destination coordinates");
    }

    let reported = round_km(distance_km);
    if distance_km > MAX_DELIVERY_DISTANCE_KM {
        return DeliveryOutcome::rejected(
            Some(reported),
            format!(
                "destination exceeds {MAX_DELIVERY_DISTANCE_KM} km delivery radius (actual: {reported:.2} km)"
            ),
        );
    }

    DeliveryOutcome {
        eligible: true,
        distance_km: Some(reported),
        fee: DELIVERY_FEE,
        rejection_reason: None,
    }
}

/// Round to 2 dp, half away from zero
fn round_km(distance_km: f64) -> f64 {
    Decimal::from_f64(distance_km)
        .map(|d| {
            d.round_dp_with_strategy(
                DISTANCE_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            )
        })
        .and_then(|d| d.to_f64())
        .unwrap_or(distance_km)
}
