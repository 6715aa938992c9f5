//! Endpoint tests for the reporting API
//!
//! Drives the fully assembled router in-process through the oneshot
//! extension, without a network listener.

use axum::body::Body;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;

use foodee_server::db::models::{
    Booking, Category, Order, OrderItem, OrderStatus, PaymentStatus, Product, ProductType, User,
};
use foodee_server::{Config, OneshotRouter, ServerState, Store, build_app};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn order(id: i64, user_id: i64, order_date: &str, total: f64, items: Vec<OrderItem>) -> Order {
    Order {
        id,
        user_id,
        fullname: "Nguyen Van An".to_string(),
        email: "an@foodee.vn".to_string(),
        phone_number: "0900000001".to_string(),
        delivery_address: "12 Ly Thuong Kiet".to_string(),
        order_date: dt(order_date),
        delivery_date: None,
        payment_status: PaymentStatus::Paid,
        order_status: OrderStatus::Delivered,
        total_amount: total,
        items,
    }
}

fn item(id: i64, product_id: Option<i64>, quantity: i32, unit_price: f64) -> OrderItem {
    OrderItem {
        id,
        product_id,
        quantity,
        unit_price,
        subtotal: unit_price * quantity as f64,
    }
}

/// Two users, three products, three orders, one booking
fn seeded_state() -> ServerState {
    let store = Store::new();
    store.insert_user(User {
        id: 1,
        username: "an".to_string(),
    });
    store.insert_user(User {
        id: 2,
        username: "binh".to_string(),
    });
    store.insert_category(Category {
        id: 1,
        name: "Main".to_string(),
    });
    store.insert_category(Category {
        id: 2,
        name: "Drinks".to_string(),
    });
    store.insert_product_type(ProductType {
        id: 1,
        name: "Noodles".to_string(),
    });
    for (id, name, type_id) in [
        (1, "Pho", Some(1)),
        (2, "Banh Mi", None),
        (3, "Com Tam", None),
    ] {
        store.insert_product(Product {
            id,
            name: name.to_string(),
            image: format!("{}.jpg", id),
            category_id: 1,
            product_type_id: type_id,
        });
    }
    store.insert_order(order(
        1,
        1,
        "2024-05-01T10:00:00",
        100.0,
        vec![item(11, Some(1), 5, 10.0), item(12, Some(2), 3, 5.0)],
    ));
    store.insert_order(order(
        2,
        1,
        "2024-05-02T10:00:00",
        40.0,
        vec![item(21, Some(1), 2, 10.0), item(22, None, 1, 5.0)],
    ));
    store.insert_order(order(
        3,
        2,
        "2024-05-03T10:00:00",
        30.0,
        vec![item(31, Some(3), 1, 30.0)],
    ));
    store.insert_booking(Booking {
        id: 1,
        user_id: 2,
        created_at: dt("2024-05-01T09:00:00"),
        booking_date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
        booking_time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        number_of_guests: 4,
    });
    ServerState::new(Config::default(), store)
}

async fn get_json(state: &ServerState, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = build_app().oneshot(state, request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let state = seeded_state();
    let (status, body) = get_json(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_top_dishes_ranking_and_shape() {
    let state = seeded_state();
    let (status, body) = get_json(&state, "/api/statistics/top-dishes").await;
    assert_eq!(status, StatusCode::OK);

    let dishes = body.as_array().unwrap();
    // 3 distinct products fit within the default limit of 4
    assert_eq!(dishes.len(), 3);

    // Pho: 5 + 2 across two orders; first-seen detail row from item 11
    assert_eq!(dishes[0]["productId"], 1);
    assert_eq!(dishes[0]["productName"], "Pho");
    assert_eq!(dishes[0]["totalOrdered"], 7);
    assert_eq!(dishes[0]["id"], 11);
    assert_eq!(dishes[0]["quantity"], 5);
    assert_eq!(dishes[1]["productId"], 2);
    assert_eq!(dishes[1]["totalOrdered"], 3);
    assert_eq!(dishes[2]["productId"], 3);
    assert_eq!(dishes[2]["totalOrdered"], 1);
}

#[tokio::test]
async fn test_top_dishes_limit_param() {
    let state = seeded_state();
    let (_, body) = get_json(&state, "/api/statistics/top-dishes?limit=1").await;
    let dishes = body.as_array().unwrap();
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes[0]["productId"], 1);

    // Non-positive limits are coerced to one result
    let (_, body) = get_json(&state, "/api/statistics/top-dishes?limit=0").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_recent_activities_feed() {
    let state = seeded_state();
    let (status, body) = get_json(&state, "/api/statistics/recent-activities").await;
    assert_eq!(status, StatusCode::OK);

    let lines: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    // 3 orders + 1 booking within the default limit of 10
    assert_eq!(lines.len(), 4);
    assert!(lines
        .iter()
        .any(|l| l == "User binh đặt bàn cho 4 người vào 2024-05-04 19:30:00"));
    assert!(lines.iter().any(|l| {
        l == "User an đặt đơn hàng: Pho (x5) [Noodles], Banh Mi (x3) vào 2024-05-01T10:00:00"
    }));
    // Null-product item in order 2 is omitted from its line
    assert!(lines
        .iter()
        .any(|l| l == "User an đặt đơn hàng: Pho (x2) [Noodles] vào 2024-05-02T10:00:00"));
    for pair in lines.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_recent_activities_limit_param() {
    let state = seeded_state();
    let (_, body) = get_json(&state, "/api/statistics/recent-activities?limit=2").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_top_users_ranking() {
    let state = seeded_state();
    let (status, body) = get_json(&state, "/api/statistics/top-users").await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "an");
    assert_eq!(users[0]["totalSpending"], 140.0);
    assert_eq!(users[0]["bookings"], "Không có đặt bàn");
    assert_eq!(users[1]["username"], "binh");
    assert_eq!(users[1]["totalSpending"], 30.0);
    assert_eq!(users[1]["orders"], "Com Tam (x1)");
    assert_eq!(users[1]["bookings"], "Đặt bàn cho 4 người vào 2024-05-04");
}

#[tokio::test]
async fn test_quick_summary() {
    let state = seeded_state();
    let (status, body) = get_json(&state, "/api/statistics/summary").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["totalDishes"], 3);
    assert_eq!(body["totalUsers"], 2);
    assert_eq!(body["totalBookings"], 1);
    assert_eq!(body["totalOrders"], 3);
    assert_eq!(body["totalRevenue"], 170.0);
    assert_eq!(body["totalProductTypes"], 1);
}

#[tokio::test]
async fn test_catalog_passthrough() {
    let state = seeded_state();

    let (_, body) = get_json(&state, "/api/statistics/categories").await;
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0]["name"], "Main");

    let (_, body) = get_json(&state, "/api/statistics/product-types").await;
    let types = body.as_array().unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0]["name"], "Noodles");
}

#[tokio::test]
async fn test_missing_user_reference_surfaces_as_generic_failure() {
    let state = seeded_state();
    state
        .store
        .insert_order(order(9, 99, "2024-05-09T10:00:00", 10.0, vec![]));

    let (status, body) = get_json(&state, "/api/statistics/recent-activities").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "E9001");
}
