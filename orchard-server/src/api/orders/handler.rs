//! Order API Handlers

use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::order::{
    DeliveryRequest, LineItem, OrderStatus, PackagingChoice, PricedOrder,
};
use shared::util::{now_millis, split_datetime};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Order, OrderItem, OrderList, OrderResponse};
use crate::db::repository::{AppleRepository, OrderRepository, RepoError};
use crate::pricing::{CatalogSnapshot, build_order, canonical_reference};
use crate::utils::types::SkipLimitParams;
use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, validate_payload};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Id reported for orders priced without a database
const DEV_MODE_ID: &str = "dev-mode";

/// One variety in the order form
#[derive(Debug, Clone, Deserialize)]
pub struct OrderAppleInput {
    pub apple_id: String,
    pub quantity_kg: u32,
}

/// Order form payload
///
/// Pickup is either `pickup_datetime` (`YYYY-MM-DDTHH:MM`) or the separate
/// `pickup_date` + `pickup_time`. Delivery fields are only read when
/// `delivery` is true.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderCreate {
    pub apples: Vec<OrderAppleInput>,
    #[serde(default)]
    pub packaging: PackagingChoice,

    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(length(min = 1, max = MAX_PHONE_LEN))]
    pub customer_phone: String,

    #[serde(default)]
    pub pickup_datetime: Option<String>,
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub pickup_time: Option<String>,

    #[serde(default)]
    pub delivery: bool,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub delivery_lat: Option<f64>,
    #[serde(default)]
    pub delivery_lon: Option<f64>,
}

impl OrderCreate {
    /// Pickup date and time as display strings
    fn pickup(&self) -> AppResult<(String, String)> {
        let (date, time) = match (&self.pickup_datetime, &self.pickup_date, &self.pickup_time) {
            (Some(datetime), _, _) => split_datetime(datetime.trim()),
            (None, Some(date), Some(time)) => (date.trim().to_string(), time.trim().to_string()),
            _ => return Err(AppError::new(ErrorCode::PickupRequired)),
        };

        if date.is_empty() || time.is_empty() {
            return Err(AppError::new(ErrorCode::PickupRequired));
        }
        Ok((date, time))
    }

    /// Delivery destination, `None` for pickup orders
    fn delivery_request(&self) -> AppResult<Option<DeliveryRequest>> {
        if !self.delivery {
            return Ok(None);
        }

        let (Some(address), Some(latitude), Some(longitude)) =
            (&self.delivery_address, self.delivery_lat, self.delivery_lon)
        else {
            return Err(AppError::new(ErrorCode::DeliveryDetailsMissing));
        };
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::new(ErrorCode::DeliveryDetailsMissing));
        }

        let mut invalid = Vec::new();
        if address.chars().count() as u64 > MAX_ADDRESS_LEN {
            invalid.push(("delivery_address", "address is too long"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            invalid.push(("delivery_lat", "latitude must be between -90 and 90"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            invalid.push(("delivery_lon", "longitude must be between -180 and 180"));
        }
        if !invalid.is_empty() {
            let fields: Vec<&str> = invalid.iter().map(|(field, _)| *field).collect();
            let mut err = AppError::validation(format!("Invalid fields: {}", fields.join(", ")));
            for (field, reason) in invalid {
                err = err.with_detail(field, vec![reason]);
            }
            return Err(err);
        }

        Ok(Some(DeliveryRequest {
            address: address.to_string(),
            latitude,
            longitude,
        }))
    }

    fn line_items(&self) -> Vec<LineItem> {
        self.apples
            .iter()
            .map(|item| LineItem::new(canonical_reference(&item.apple_id), item.quantity_kg))
            .collect()
    }
}

/// Persisted document for a priced order
fn order_document(
    payload: OrderCreate,
    priced: PricedOrder,
    catalog: &CatalogSnapshot,
    delivery: Option<DeliveryRequest>,
    pickup: (String, String),
) -> Order {
    let delivery_fee = priced.delivery_fee();
    let delivery_distance_km = priced.delivery.as_ref().and_then(|d| d.distance_km);
    let items = priced
        .line_items
        .iter()
        .map(|item| OrderItem {
            apple_id: item.product_reference.clone(),
            apple_name: catalog.name_of(&item.product_reference).to_string(),
            quantity_kg: item.weight_kg,
            price_per_kg: item.unit_price,
            subtotal: item.subtotal,
        })
        .collect();
    let now = now_millis();

    Order {
        id: None,
        items,
        packaging: priced.packaging,
        packaging_surcharge: priced.packaging_surcharge,
        total_weight_kg: priced.total_weight_kg,
        delivery: delivery.is_some(),
        delivery_address: delivery.as_ref().map(|d| d.address.clone()),
        delivery_lat: delivery.as_ref().map(|d| d.latitude),
        delivery_lon: delivery.as_ref().map(|d| d.longitude),
        delivery_distance_km,
        delivery_fee,
        total_price: priced.grand_total,
        customer_name: payload.customer_name.trim().to_string(),
        customer_email: payload.customer_email.trim().to_string(),
        customer_phone: payload.customer_phone.trim().to_string(),
        pickup_date: pickup.0,
        pickup_time: pickup.1,
        status: OrderStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

/// POST /orders - price and place an order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    validate_payload(&payload)?;
    let pickup = payload.pickup()?;
    let delivery = payload.delivery_request()?;
    let line_items = payload.line_items();

    let catalog = match state.database() {
        Some(db) => {
            let ids: Vec<String> = line_items
                .iter()
                .map(|item| item.product_reference.clone())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();
            let apples = AppleRepository::new(db.clone()).find_available(&ids).await?;
            CatalogSnapshot::from_apples(apples)
        }
        None => CatalogSnapshot::development(),
    };

    let priced = build_order(&line_items, payload.packaging, delivery.as_ref(), &catalog)?;
    let order = order_document(payload, priced, &catalog, delivery, pickup);

    let Some(db) = state.database() else {
        tracing::warn!(
            total_price = %order.total_price,
            "Order priced in development mode, not persisted"
        );
        return Ok((
            StatusCode::CREATED,
            Json(OrderResponse::new(DEV_MODE_ID, order)),
        ));
    };

    let created = OrderRepository::new(db.clone()).create(order).await?;

    tracing::info!(
        order_id = %created.id_string(),
        customer_email = %created.customer_email,
        total_weight_kg = created.total_weight_kg,
        total_price = %created.total_price,
        delivery = created.delivery,
        "Order placed"
    );

    Ok((StatusCode::CREATED, Json(OrderResponse::from(created))))
}

/// Admin listing query
#[derive(Debug, Clone, Deserialize)]
pub struct OrderListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub status_filter: Option<String>,
}

fn default_limit() -> u32 {
    SkipLimitParams::default().limit
}

fn parse_status(value: &str) -> AppResult<OrderStatus> {
    value
        .parse()
        .map_err(|e: shared::order::InvalidOrderStatus| {
            AppError::with_message(ErrorCode::OrderInvalidStatus, e.to_string())
        })
}

/// GET /orders - newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<OrderList>> {
    let params = SkipLimitParams {
        skip: query.skip,
        limit: query.limit,
    };

    let status = match query.status_filter.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(value) => Some(parse_status(value)?),
    };

    let orders = match state.database() {
        Some(db) => OrderRepository::new(db.clone()).find_all(status).await?,
        None => Vec::new(),
    };

    let total = orders.len();
    Ok(Json(OrderList {
        orders: params.page(orders),
        total,
        skip: params.skip,
        limit: params.limit(),
    }))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderResponse>> {
    let db = state
        .database()
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;

    let order = OrderRepository::new(db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    Ok(Json(OrderResponse::from(order)))
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub new_status: String,
}

/// PUT /orders/{id}/status?new_status=
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> AppResult<Json<OrderResponse>> {
    let status = parse_status(query.new_status.trim())?;
    let db = state.require_db()?;

    let order = OrderRepository::new(db.clone())
        .update_status(&id, status)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::OrderNotFound),
            other => other.into(),
        })?;

    tracing::info!(order_id = %id, status = %status, "Order status updated");
    Ok(Json(OrderResponse::from(order)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> OrderCreate {
        serde_json::from_value(serde_json::json!({
            "apples": [{"apple_id": "apple:gala", "quantity_kg": 10}],
            "packaging": "box",
            "customer_name": "Anna Kowalska",
            "customer_email": "anna@example.com",
            "customer_phone": "600700800",
            "pickup_datetime": "2026-10-20T10:30"
        }))
        .unwrap()
    }

    #[test]
    fn test_pickup_from_datetime() {
        assert_eq!(
            payload().pickup().unwrap(),
            ("2026-10-20".to_string(), "10:30".to_string())
        );
    }

    #[test]
    fn test_pickup_from_separate_fields() {
        let mut p = payload();
        p.pickup_datetime = None;
        p.pickup_date = Some("2026-10-21".to_string());
        p.pickup_time = Some("09:00".to_string());
        assert_eq!(
            p.pickup().unwrap(),
            ("2026-10-21".to_string(), "09:00".to_string())
        );
    }

    #[test]
    fn test_pickup_required() {
        let mut p = payload();
        p.pickup_datetime = None;
        assert_eq!(p.pickup().unwrap_err().code, ErrorCode::PickupRequired);

        p.pickup_datetime = Some("2026-10-20".to_string());
        assert_eq!(p.pickup().unwrap_err().code, ErrorCode::PickupRequired);
    }

    #[test]
    fn test_delivery_fields_ignored_without_delivery() {
        let mut p = payload();
        p.delivery_address = Some("ul. Sadowa 1".to_string());
        p.delivery_lat = Some(52.3);
        assert_eq!(p.delivery_request().unwrap(), None);
    }

    #[test]
    fn test_stale_delivery_fields_pass_validation_for_pickup() {
        let p: OrderCreate = serde_json::from_value(serde_json::json!({
            "apples": [{"apple_id": "apple:gala", "quantity_kg": 10}],
            "customer_name": "Anna Kowalska",
            "customer_email": "anna@example.com",
            "customer_phone": "600700800",
            "pickup_datetime": "2026-10-20T10:30",
            "delivery": false,
            "delivery_address": "",
            "delivery_lat": 95.0,
            "delivery_lon": -200.0
        }))
        .unwrap();

        assert!(validate_payload(&p).is_ok());
        assert_eq!(p.delivery_request().unwrap(), None);
    }

    #[test]
    fn test_delivery_coordinates_out_of_range() {
        let mut p = payload();
        p.delivery = true;
        p.delivery_address = Some("ul. Sadowa 1".to_string());
        p.delivery_lat = Some(95.0);
        p.delivery_lon = Some(20.9);

        let err = p.delivery_request().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Invalid fields: delivery_lat");

        p.delivery_lat = Some(52.3);
        p.delivery_address = Some("a".repeat(MAX_ADDRESS_LEN as usize + 1));
        let err = p.delivery_request().unwrap_err();
        assert_eq!(err.message, "Invalid fields: delivery_address");
    }

    #[test]
    fn test_blank_delivery_address_is_missing() {
        let mut p = payload();
        p.delivery = true;
        p.delivery_address = Some("   ".to_string());
        p.delivery_lat = Some(52.3);
        p.delivery_lon = Some(20.9);
        assert_eq!(
            p.delivery_request().unwrap_err().code,
            ErrorCode::DeliveryDetailsMissing
        );
    }

    #[test]
    fn test_delivery_requires_address_and_coordinates() {
        let mut p = payload();
        p.delivery = true;
        p.delivery_address = Some("ul. Sadowa 1".to_string());
        p.delivery_lat = Some(52.3);
        assert_eq!(
            p.delivery_request().unwrap_err().code,
            ErrorCode::DeliveryDetailsMissing
        );

        p.delivery_lon = Some(20.9);
        let request = p.delivery_request().unwrap().unwrap();
        assert_eq!(request.address, "ul. Sadowa 1");
        assert_eq!(request.latitude, 52.3);
    }

    #[test]
    fn test_line_items_use_canonical_ids() {
        let mut p = payload();
        p.apples.push(OrderAppleInput {
            apple_id: "gala".to_string(),
            quantity_kg: 15,
        });
        let items = p.line_items();
        assert_eq!(items[0].product_reference, items[1].product_reference);
        assert_eq!(items[1].weight_kg, 15);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut p = payload();
        p.customer_email = "not-an-email".to_string();
        let err = validate_payload(&p).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("picked_up").unwrap(), OrderStatus::PickedUp);
        let err = parse_status("shipped").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidStatus);
        assert!(err.message.contains("pending, confirmed, ready, picked_up, cancelled"));
    }
}
