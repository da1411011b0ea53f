//! Order Pricing Module
//!
//! Turns a customer's selection into a fully priced order:
//!
//! - [`catalog`]: per-kilogram price lookup, decoupled from storage
//! - [`order_builder`]: quantity rules, subtotals, packaging surcharge, totals
//! - [`delivery`]: distance and weight eligibility for home delivery
//!
//! Everything here is pure and synchronous. Handlers load the catalog,
//! call [`build_order`] and persist the result.

pub mod catalog;
pub mod delivery;
pub mod order_builder;


pub use catalog::{CatalogEntry, CatalogSnapshot, PriceLookup, canonical_reference};
pub use delivery::{
    DELIVERY_FEE, MAX_DELIVERY_DISTANCE_KM, MIN_DELIVERY_WEIGHT_KG, ORCHARD_ORIGIN,
    check_delivery, haversine_km,
};
pub use order_builder::{
    BOX_SURCHARGE_PER_KG, MIN_LINE_WEIGHT_KG, OrderValidationError, WEIGHT_STEP_KG, build_order,
    is_valid_weight,
};
