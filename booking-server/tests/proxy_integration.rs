//! Proxy behavior tests: the app under test talks to an in-process fake
//! backend (or a dead port) and requests are driven through the router
//! with `oneshot`.

use axum::body::Body;
use axum::extract::Path;
use axum::http::{Request, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use booking_server::api::build_app;
use booking_server::core::{Config, ServerState};
use shared::calendar::{add_days, format_day, today};

async fn fake_create(Json(payload): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut body = payload;
    body["id"] = json!(7);
    body["bookingReference"] = json!("BK-2024-0007");
    (StatusCode::CREATED, Json(body))
}

async fn fake_get(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "7" {
        (
            StatusCode::OK,
            Json(json!({ "id": 7, "bookingReference": "BK-2024-0007" })),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("No booking with id {id}") })),
        )
    }
}

async fn fake_rooms() -> Json<Value> {
    Json(json!([{ "id": "standard", "name": "Standard Room", "pricePerNight": 25000 }]))
}

/// Spawn the fake backend, returning its base URL.
async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/api/bookings", post(fake_create))
        .route("/api/bookings/{id}", get(fake_get))
        .route("/api/rooms", get(fake_rooms));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });
    format!("http://{addr}")
}

fn app_for(backend_url: &str) -> Router {
    let config = Config {
        backend_url: backend_url.to_string(),
        backend_timeout_ms: 2_000,
        ..Config::default()
    };
    build_app(ServerState::new(config))
}

fn valid_create_body() -> Value {
    let check_in = add_days(today(), 7).unwrap();
    let check_out = add_days(check_in, 3).unwrap();
    json!({
        "checkin": format_day(check_in),
        "checkout": format_day(check_out),
        "adults": 2,
        "roomType": "deluxe",
        "totalAmount": "135000",
        "currency": "XAF",
        "guestName": "Awa Deby",
        "guestEmail": "awa@example.com",
        "guestPhone": "+235 66 12 34 56",
        "status": "PENDING",
        "source": "WEB",
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_health_never_touches_backend() {
    // Backend deliberately dead
    let app = app_for("http://127.0.0.1:9");
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_invalid_dates_rejected_with_field_errors() {
    let app = app_for("http://127.0.0.1:9");

    let mut payload = valid_create_body();
    payload["checkout"] = payload["checkin"].clone();
    let response = app
        .oneshot(post_json("/api/bookings", &payload))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 2);
    let fields = body["details"]["fields"].as_array().expect("fields");
    assert_eq!(fields[0]["field"], "checkout");
}

#[tokio::test]
async fn test_malformed_date_string_gets_envelope_not_422() {
    let app = app_for("http://127.0.0.1:9");

    let mut payload = valid_create_body();
    payload["checkin"] = json!("not-a-date");
    let response = app
        .oneshot(post_json("/api/bookings", &payload))
        .await
        .expect("oneshot");
    // Deserialization failures answer like any other validation failure
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 2);
    let fields = body["details"]["fields"].as_array().expect("fields");
    assert_eq!(fields[0]["field"], "checkin");
}

#[tokio::test]
async fn test_unparseable_body_gets_envelope() {
    let app = app_for("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bookings")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["fields"][0]["field"], "body");
}

#[tokio::test]
async fn test_unreachable_backend_answers_503() {
    let app = app_for("http://127.0.0.1:9");

    let response = app
        .oneshot(post_json("/api/bookings", &valid_create_body()))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["code"], 3001);
    assert_eq!(body["message"], "Booking service is currently unavailable");
}

#[tokio::test]
async fn test_valid_create_relayed_verbatim() {
    let backend_url = spawn_backend().await;
    let app = app_for(&backend_url);

    let response = app
        .oneshot(post_json("/api/bookings", &valid_create_body()))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    // Backend answer passes through untouched, no envelope
    assert_eq!(body["bookingReference"], "BK-2024-0007");
    assert_eq!(body["guestName"], "Awa Deby");
    assert!(body.get("code").is_none());
}

#[tokio::test]
async fn test_backend_404_mapped_to_envelope() {
    let backend_url = spawn_backend().await;
    let app = app_for(&backend_url);

    let response = app
        .oneshot(
            Request::get("/api/bookings/99")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], 1001);
    // The backend message is surfaced
    assert_eq!(body["message"], "No booking with id 99");
}

#[tokio::test]
async fn test_get_existing_booking_relayed() {
    let backend_url = spawn_backend().await;
    let app = app_for(&backend_url);

    let response = app
        .oneshot(
            Request::get("/api/bookings/7")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["bookingReference"], "BK-2024-0007");
}

#[tokio::test]
async fn test_availability_rejects_malformed_date() {
    let app = app_for("http://127.0.0.1:9");

    let response = app
        .oneshot(
            Request::get("/api/availability?checkIn=01/05/2024&checkOut=2024-05-04")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    let fields = body["details"]["fields"].as_array().expect("fields");
    assert_eq!(fields[0]["field"], "checkIn");
}

#[tokio::test]
async fn test_contact_form_validated_before_forwarding() {
    // Dead backend: validation must fail first, so no 503
    let app = app_for("http://127.0.0.1:9");

    let payload = json!({ "name": "", "email": "bad", "subject": "", "message": "" });
    let response = app
        .oneshot(post_json("/api/contact", &payload))
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["fields"].as_array().expect("fields").len(), 4);
}

#[tokio::test]
async fn test_rooms_catalogue_relayed() {
    let backend_url = spawn_backend().await;
    let app = app_for(&backend_url);

    let response = app
        .oneshot(
            Request::get("/api/rooms")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("oneshot");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["id"], "standard");
}
