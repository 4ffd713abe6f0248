//! End-to-end client tests against an in-process fake BFF.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use booking_client::{
    BookingApi, BookingCreate, ClientConfig, ClientError, DraftPatch, DraftStore, GuestContact,
    MemoryStorage,
};
use rust_decimal::Decimal;
use shared::calendar::parse_day;
use shared::models::BookingStatus;

#[derive(Clone)]
struct FakeBackend {
    create_calls: Arc<AtomicUsize>,
    /// Number of leading create attempts answered with 503.
    fail_first: usize,
}

async fn fake_create(
    State(backend): State<FakeBackend>,
    Json(payload): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let attempt = backend.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
    if attempt <= backend.fail_first {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "code": 3001, "message": "Booking service is unavailable" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 42,
            "bookingReference": "BK-2024-0042",
            "checkin": payload["checkin"],
            "checkout": payload["checkout"],
            "adults": payload["adults"],
            "roomType": payload["roomType"],
            "totalAmount": payload["totalAmount"],
            "currency": "XAF",
            "guestName": payload["guestName"],
            "guestEmail": payload["guestEmail"],
            "status": "PENDING",
        })),
    )
}

async fn fake_rooms() -> Json<Value> {
    Json(json!([
        { "id": "standard", "name": "Standard Room", "pricePerNight": 25000, "capacity": 2 },
        { "id": "deluxe", "name": "Deluxe Room", "pricePerNight": 45000, "capacity": 3 },
    ]))
}

async fn spawn_backend(fail_first: usize) -> (String, Arc<AtomicUsize>) {
    let backend = FakeBackend {
        create_calls: Arc::new(AtomicUsize::new(0)),
        fail_first,
    };
    let calls = backend.create_calls.clone();

    let app = Router::new()
        .route("/api/bookings", post(fake_create))
        .route("/api/rooms", get(fake_rooms))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fake backend");
    });

    (format!("http://{addr}"), calls)
}

fn sample_booking() -> BookingCreate {
    BookingCreate {
        check_in: parse_day("2024-05-01").unwrap(),
        check_out: parse_day("2024-05-04").unwrap(),
        adults: 2,
        room_type: "deluxe".into(),
        price_per_night: Some(Decimal::from(45000)),
        total_amount: Decimal::from(135000),
        currency: "XAF".into(),
        guest_name: "Awa Deby".into(),
        guest_email: "awa@example.com".into(),
        guest_phone: "+23566123456".into(),
        address: None,
        city: None,
        zip_code: None,
        country: Some("Chad".into()),
        special_requests: None,
        status: BookingStatus::Pending,
        source: "WEB".into(),
    }
}

fn api_for(base_url: &str) -> BookingApi {
    ClientConfig::new(base_url)
        .with_timeout(5)
        .with_retry_delay_ms(1)
        .build()
}

#[tokio::test]
async fn test_create_booking_success() {
    let (base_url, calls) = spawn_backend(0).await;
    let api = api_for(&base_url);

    let booking = api.create_booking(&sample_booking()).await.expect("create");
    assert_eq!(booking.reference().as_deref(), Some("BK-2024-0042"));
    assert_eq!(booking.number_of_nights(), Some(3));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_submission_retries_past_transient_failures() {
    let (base_url, calls) = spawn_backend(2).await;
    let api = api_for(&base_url);

    let booking = api
        .submit_with_retry(&sample_booking())
        .await
        .expect("third attempt succeeds");
    assert_eq!(booking.reference().as_deref(), Some("BK-2024-0042"));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_submission_gives_up_after_max_retries() {
    let (base_url, calls) = spawn_backend(10).await;
    let api = api_for(&base_url);

    let err = api
        .submit_with_retry(&sample_booking())
        .await
        .expect_err("all attempts fail");
    assert!(matches!(err, ClientError::Rejected { status: 503, .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Nothing listens on this port.
    let api = api_for("http://127.0.0.1:9");
    let err = api
        .create_booking(&sample_booking())
        .await
        .expect_err("connection refused");
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_confirm_booking_clears_store_on_success() {
    let (base_url, _calls) = spawn_backend(0).await;
    let api = api_for(&base_url);

    let store = DraftStore::new(MemoryStorage::new());
    store.save(&DraftPatch {
        check_in_date: parse_day("2024-05-01"),
        check_out_date: parse_day("2024-05-04"),
        guest_count: Some(2),
        room_type_id: Some("deluxe".into()),
        room_type_name: Some("Deluxe Room".into()),
        price_per_night: Some(Decimal::from(45000)),
    });
    store.save_contact(&GuestContact {
        first_name: "Awa".into(),
        last_name: "Deby".into(),
        email: "awa@example.com".into(),
        phone: "+235 66 12 34 56".into(),
        ..GuestContact::default()
    });

    let booking = api.confirm_booking(&store).await.expect("confirm");
    assert_eq!(booking.reference().as_deref(), Some("BK-2024-0042"));

    // Both blobs gone after a confirmed booking
    assert!(store.load_contact().is_none());
    assert_eq!(store.load().room_type_id, None);
}

#[tokio::test]
async fn test_confirm_booking_without_contact_fails_fast() {
    // No backend needed: the client refuses before sending anything.
    let api = api_for("http://127.0.0.1:9");
    let store = DraftStore::new(MemoryStorage::new());
    store.save(&DraftPatch {
        check_in_date: parse_day("2024-05-01"),
        check_out_date: parse_day("2024-05-04"),
        room_type_id: Some("deluxe".into()),
        price_per_night: Some(Decimal::from(45000)),
        ..DraftPatch::default()
    });

    let err = api.confirm_booking(&store).await.expect_err("no contact");
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_list_room_types() {
    let (base_url, _calls) = spawn_backend(0).await;
    let api = api_for(&base_url);

    let rooms = api.list_room_types().await.expect("rooms");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[1].id, "deluxe");
    assert_eq!(rooms[1].price_per_night, Decimal::from(45000));
}
