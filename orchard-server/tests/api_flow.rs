//! End-to-end API tests through the fully layered router
//!
//! Each test gets its own in-memory SurrealDB and upload directory.

use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use orchard_server::db::DbService;
use orchard_server::{Config, ServerState};
use serde_json::{Value, json};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::with_overrides("mem://", dir.path().to_string_lossy());
    config.database_user = None;
    config.database_password = None;
    config
}

async fn setup() -> (ServerState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let db = DbService::connect(&config).await.unwrap();
    (ServerState::with_db(&config, Some(db)), dir)
}

fn setup_dev_mode() -> (ServerState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    (ServerState::with_db(&config, None), dir)
}

async fn send(state: &ServerState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = state.https.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn apple_id(state: &ServerState, name: &str) -> String {
    let (_, body) = send(state, Method::GET, "/apples", None).await;
    body["apples"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == name)
        .map(|a| a["id"].as_str().unwrap().to_string())
        .unwrap()
}

fn order_body(apples: Value) -> Value {
    json!({
        "apples": apples,
        "packaging": "own",
        "customer_name": "Anna Kowalska",
        "customer_email": "anna@example.com",
        "customer_phone": "600700800",
        "pickup_datetime": "2026-10-20T10:30"
    })
}

// ============================================================================
// Service
// ============================================================================

#[tokio::test]
async fn root_and_health() {
    let (state, _dir) = setup().await;

    let (status, body) = send(&state, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Srebrna Sad API");
    assert_eq!(body["docs"], "/docs");

    let (status, body) = send(&state, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (_, body) = send(&state, Method::GET, "/health/detailed", None).await;
    assert_eq!(body["mode"], "database");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (state, _dir) = setup().await;

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = state.https.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = state.https.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Apples
// ============================================================================

#[tokio::test]
async fn apple_catalog_crud() {
    let (state, _dir) = setup().await;

    let (status, body) = send(&state, Method::GET, "/apples", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["apples"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fuji", "Gala", "Jonagold"]);

    let gala = apple_id(&state, "Gala").await;
    let (status, body) = send(&state, Method::GET, &format!("/apples/{gala}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], 4.5);

    // bare key works too
    let key = gala.strip_prefix("apple:").unwrap();
    let (status, _) = send(&state, Method::GET, &format!("/apples/{key}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, created) = send(
        &state,
        Method::POST,
        "/apples",
        Some(json!({"name": "Ligol", "description": "Chrupiące", "price": 6.0})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["available"], true);
    let ligol = created["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &state,
        Method::PUT,
        &format!("/apples/{ligol}"),
        Some(json!({"price": 6.5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 6.5);
    assert_eq!(updated["name"], "Ligol");

    let (status, _) = send(&state, Method::DELETE, &format!("/apples/{ligol}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&state, Method::DELETE, &format!("/apples/{ligol}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
}

#[tokio::test]
async fn apple_validation() {
    let (state, _dir) = setup().await;

    let (status, body) = send(
        &state,
        Method::POST,
        "/apples",
        Some(json!({"name": "", "description": "x", "price": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["message"], "Invalid fields: name, price");

    let (status, body) = send(
        &state,
        Method::POST,
        "/apples",
        Some(json!({"name": "Ligol", "description": "x", "price": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);
    assert_eq!(body["message"], "Invalid fields: price");

    let (status, _) = send(
        &state,
        Method::PUT,
        "/apples/apple:missing",
        Some(json!({"price": 3.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn order_lifecycle() {
    let (state, _dir) = setup().await;
    let gala = apple_id(&state, "Gala").await;
    let jonagold = apple_id(&state, "Jonagold").await;

    let mut body = order_body(json!([
        {"apple_id": gala, "quantity_kg": 10},
        {"apple_id": jonagold, "quantity_kg": 15}
    ]));
    body["packaging"] = json!("box");

    let (status, order) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    let id = order["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("orders:"));
    assert_eq!(order["status"], "pending");
    assert_eq!(order["total_weight_kg"], 25);
    assert_eq!(order["packaging_surcharge"], 50.0);
    assert_eq!(order["total_price"], 170.0);
    assert_eq!(order["items"][0]["apple_name"], "Gala");
    assert_eq!(order["items"][0]["subtotal"], 45.0);
    assert_eq!(order["items"][1]["subtotal"], 75.0);
    assert_eq!(order["pickup_date"], "2026-10-20");
    assert_eq!(order["pickup_time"], "10:30");
    assert_eq!(order["delivery"], false);

    let (status, listed) = send(&state, Method::GET, "/orders", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["limit"], 100);

    let (status, fetched) = send(&state, Method::GET, &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id.as_str());

    let (status, updated) = send(
        &state,
        Method::PUT,
        &format!("/orders/{id}/status?new_status=confirmed"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "confirmed");

    let (status, body) = send(
        &state,
        Method::PUT,
        &format!("/orders/{id}/status?new_status=shipped"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);

    let (_, confirmed) = send(&state, Method::GET, "/orders?status_filter=confirmed", None).await;
    assert_eq!(confirmed["total"], 1);
    let (_, pending) = send(&state, Method::GET, "/orders?status_filter=pending", None).await;
    assert_eq!(pending["total"], 0);

    let (status, _) = send(
        &state,
        Method::PUT,
        "/orders/orders:missing/status?new_status=ready",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_listing_pages_newest_first() {
    let (state, _dir) = setup().await;
    let gala = apple_id(&state, "Gala").await;

    for weight in [10, 15, 20] {
        let body = order_body(json!([{"apple_id": gala, "quantity_kg": weight}]));
        let (status, _) = send(&state, Method::POST, "/orders", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let (_, page) = send(&state, Method::GET, "/orders?skip=1&limit=1", None).await;
    assert_eq!(page["total"], 3);
    assert_eq!(page["orders"].as_array().unwrap().len(), 1);
    assert_eq!(page["orders"][0]["total_weight_kg"], 15);

    let (_, capped) = send(&state, Method::GET, "/orders?limit=10000", None).await;
    assert_eq!(capped["limit"], 500);
}

#[tokio::test]
async fn order_with_delivery() {
    let (state, _dir) = setup().await;
    let jonagold = apple_id(&state, "Jonagold").await;

    let mut body = order_body(json!([{"apple_id": jonagold, "quantity_kg": 200}]));
    body["delivery"] = json!(true);
    body["delivery_address"] = json!("ul. Sadowa 1, Srebrna");
    body["delivery_lat"] = json!(52.35);
    body["delivery_lon"] = json!(20.85);

    let (status, order) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    assert_eq!(order["delivery"], true);
    assert_eq!(order["delivery_fee"], 25.0);
    assert_eq!(order["total_price"], 1025.0);
    assert!(order["delivery_distance_km"].as_f64().unwrap() < 25.0);
}

#[tokio::test]
async fn pickup_order_ignores_stale_delivery_fields() {
    let (state, _dir) = setup().await;
    let gala = apple_id(&state, "Gala").await;

    let mut body = order_body(json!([{"apple_id": gala, "quantity_kg": 10}]));
    body["delivery"] = json!(false);
    body["delivery_address"] = json!("");
    body["delivery_lat"] = json!(95.0);
    body["delivery_lon"] = json!(-200.0);

    let (status, order) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    assert_eq!(order["delivery"], false);
    assert!(order["delivery_address"].is_null());
    assert_eq!(order["total_price"], 45.0);
}

#[tokio::test]
async fn order_rejections() {
    let (state, _dir) = setup().await;
    let gala = apple_id(&state, "Gala").await;

    // off-step weight
    let body = order_body(json!([{"apple_id": gala, "quantity_kg": 12}]));
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 4003);
    assert_eq!(err["message"], "quantity must be ≥10 kg, in 5 kg increments");

    // nothing selected
    let (status, err) = send(&state, Method::POST, "/orders", Some(order_body(json!([])))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 4002);

    // unknown variety
    let body = order_body(json!([{"apple_id": "apple:antonowka", "quantity_kg": 10}]));
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 6001);

    // too light for delivery
    let mut body = order_body(json!([{"apple_id": gala, "quantity_kg": 50}]));
    body["delivery"] = json!(true);
    body["delivery_address"] = json!("ul. Sadowa 1");
    body["delivery_lat"] = json!(52.3138);
    body["delivery_lon"] = json!(20.8445);
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], 4005);
    assert!(err["message"].as_str().unwrap().contains("at least 200 kg"));

    // delivery without coordinates
    let mut body = order_body(json!([{"apple_id": gala, "quantity_kg": 200}]));
    body["delivery"] = json!(true);
    body["delivery_address"] = json!("ul. Sadowa 1");
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 4006);

    // delivery coordinates out of range
    let mut body = order_body(json!([{"apple_id": gala, "quantity_kg": 200}]));
    body["delivery"] = json!(true);
    body["delivery_address"] = json!("ul. Sadowa 1");
    body["delivery_lat"] = json!(95.0);
    body["delivery_lon"] = json!(20.8445);
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 2);
    assert_eq!(err["message"], "Invalid fields: delivery_lat");

    // no pickup
    let mut body = order_body(json!([{"apple_id": gala, "quantity_kg": 10}]));
    body.as_object_mut().unwrap().remove("pickup_datetime");
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], 4007);

    let (_, listed) = send(&state, Method::GET, "/orders", None).await;
    assert_eq!(listed["total"], 0);
}

#[tokio::test]
async fn unavailable_apple_cannot_be_ordered() {
    let (state, _dir) = setup().await;
    let fuji = apple_id(&state, "Fuji").await;

    let (status, _) = send(
        &state,
        Method::PUT,
        &format!("/apples/{fuji}"),
        Some(json!({"available": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let body = order_body(json!([{"apple_id": fuji, "quantity_kg": 10}]));
    let (status, err) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], 6001);
}

// ============================================================================
// Delivery preview
// ============================================================================

#[tokio::test]
async fn delivery_preview() {
    let (state, _dir) = setup().await;

    let (status, outcome) = send(
        &state,
        Method::POST,
        "/delivery/check",
        Some(json!({"total_weight_kg": 200, "latitude": 52.3138, "longitude": 20.8445})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["eligible"], true);
    assert_eq!(outcome["distance_km"], 0.0);
    assert_eq!(outcome["fee"], 25.0);

    let (status, outcome) = send(
        &state,
        Method::POST,
        "/delivery/check",
        Some(json!({"total_weight_kg": 199, "latitude": 52.3138, "longitude": 20.8445})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["eligible"], false);
    assert_eq!(outcome["fee"], 0.0);
    assert_eq!(outcome["rejection_reason"], "delivery requires at least 200 kg");

    let (_, policy) = send(&state, Method::GET, "/delivery/origin", None).await;
    assert_eq!(policy["origin"]["latitude"], 52.3138);
    assert_eq!(policy["min_weight_kg"], 200);
    assert_eq!(policy["max_distance_km"], 25.0);
}

// ============================================================================
// Contact
// ============================================================================

#[tokio::test]
async fn contact_messages() {
    let (state, _dir) = setup().await;

    let (status, receipt) = send(
        &state,
        Method::POST,
        "/contact",
        Some(json!({
            "name": "Jan",
            "email": "jan@example.com",
            "message": "Czy macie Szampion?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["status"], "received");
    let id = receipt["id"].as_str().unwrap().to_string();

    let (_, listed) = send(&state, Method::GET, "/contact/messages", None).await;
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["messages"][0]["status"], "unread");

    let (status, message) =
        send(&state, Method::GET, &format!("/contact/messages/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(message["message"], "Czy macie Szampion?");

    let (status, _) = send(
        &state,
        Method::POST,
        "/contact",
        Some(json!({"name": "Jan", "email": "nope", "message": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Site content
// ============================================================================

#[tokio::test]
async fn site_content_defaults_and_save() {
    let (state, _dir) = setup().await;

    let (status, hero) = send(&state, Method::GET, "/content/hero", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hero["title"], "Witaj w Srebrnej Sadzie");

    let (status, saved) = send(
        &state,
        Method::POST,
        "/content/hero",
        Some(json!({"title": "Jesień", "subtitle": "Zbiory", "description": "Zapraszamy"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["message"], "✓ Zawartość Hero zapisana");

    let (_, hero) = send(&state, Method::GET, "/content/hero", None).await;
    assert_eq!(hero["title"], "Jesień");

    let (_, gallery) = send(&state, Method::GET, "/content/gallery", None).await;
    assert_eq!(gallery["images"].as_array().unwrap().len(), 3);

    let (status, _) = send(&state, Method::GET, "/content/footer", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &state,
        Method::POST,
        "/content/about",
        Some(json!({"cards": "not a list"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Uploads
// ============================================================================

const BOUNDARY: &str = "orchard-test-boundary";

fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 30, 30]));
    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
    buffer.into_inner()
}

fn multipart_request(filename: &str, data: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn upload_serve_and_delete() {
    let (state, dir) = setup().await;
    let png = png_bytes();

    let response = state
        .https
        .oneshot(multipart_request("sad.PNG", &png))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let uploaded = json_body(response).await;
    let filename = uploaded["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".png"));
    assert_eq!(uploaded["url"], format!("/uploads/{filename}"));
    assert_eq!(uploaded["size"], png.len());
    assert!(dir.path().join(&filename).is_file());

    let request = Request::builder()
        .uri(format!("/uploads/{filename}"))
        .body(Body::empty())
        .unwrap();
    let response = state.https.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let (status, _) = send(&state, Method::DELETE, &format!("/upload/{filename}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!dir.path().join(&filename).exists());

    let (status, body) = send(&state, Method::DELETE, &format!("/upload/{filename}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6508);

    let (status, _) = send(&state, Method::DELETE, "/upload/..secret", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_rejections() {
    let (state, dir) = setup().await;

    let response = state
        .https
        .oneshot(multipart_request("notes.txt", b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 6502);

    let response = state
        .https
        .oneshot(multipart_request("fake.jpg", b"definitely not a jpeg"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 6503);

    let oversize = vec![0u8; 5 * 1024 * 1024 + 1];
    let response = state
        .https
        .oneshot(multipart_request("big.png", &oversize))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let (status, body) = send(&state, Method::GET, "/uploads/missing.png", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6508);

    // unreadable entry is a storage failure, not a missing file
    std::fs::create_dir(dir.path().join("folder.png")).unwrap();
    let (status, body) = send(&state, Method::GET, "/uploads/folder.png", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 6509);
}

// ============================================================================
// Development mode
// ============================================================================

#[tokio::test]
async fn development_mode_fallbacks() {
    let (state, _dir) = setup_dev_mode();

    let (_, health) = send(&state, Method::GET, "/health/detailed", None).await;
    assert_eq!(health["mode"], "development");
    assert_eq!(health["status"], "degraded");

    let (status, body) = send(&state, Method::GET, "/apples", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["apples"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Gala", "Jonagold", "Granny Smith"]);

    let body = order_body(json!([
        {"apple_id": "1", "quantity_kg": 10},
        {"apple_id": "3", "quantity_kg": 10}
    ]));
    let (status, order) = send(&state, Method::POST, "/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    assert_eq!(order["id"], "dev-mode");
    assert_eq!(order["total_price"], 85.0);
    assert_eq!(order["items"][1]["apple_name"], "Granny Smith");

    let (_, listed) = send(&state, Method::GET, "/orders", None).await;
    assert_eq!(listed["total"], 0);

    let (status, body) = send(
        &state,
        Method::POST,
        "/apples",
        Some(json!({"name": "Ligol", "description": "x", "price": 6.0})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 9003);

    let (status, receipt) = send(
        &state,
        Method::POST,
        "/contact",
        Some(json!({"name": "Jan", "email": "jan@example.com", "message": "Hej"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["id"], "dev-mode");

    let (_, hero) = send(&state, Method::GET, "/content/hero", None).await;
    assert_eq!(hero["title"], "Witaj w Srebrnej Sadzie");

    let (status, saved) = send(
        &state,
        Method::POST,
        "/content/hero",
        Some(json!({"title": "A", "subtitle": "B", "description": "C"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["message"], "✓ Content saved (dev mode)");
}
