//! End-to-end tests for the booking endpoints over a real socket.

use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;

use common::ADMIN_AUTH;

#[tokio::test]
async fn test_unknown_id_returns_404() {
    let server = common::start_server().await;
    let client = common::client();

    for id in [4, 42, 1000, -7] {
        let res = client
            .get(server.url(&format!("/bookings/{}", id)))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"error": "Booking not found"}));
    }
}

#[tokio::test]
async fn test_blank_guest_name_leaves_store_unchanged() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/bookings"))
        .header("content-type", "application/json")
        .body(r#"{"id":4,"guestName":"","roomType":"X"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Guest name is required"}));

    let list: Vec<Value> = client
        .get(server.url("/bookings"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn test_malformed_json() {
    let server = common::start_server().await;
    let res = common::client()
        .post(server.url("/bookings"))
        .body("{\"id\": 4, \"guestName\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Malformed JSON request"}));
    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn test_create_then_fetch() {
    let server = common::start_server().await;
    let client = common::client();

    let created = json!({"id": 4, "guestName": "Neo", "roomType": "Matrix Loft"});
    let res = client
        .post(server.url("/bookings"))
        .json(&created)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res.headers()["location"].to_str().unwrap().to_string();
    assert!(location.ends_with("/4"), "unexpected location {}", location);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, created);

    let res = client.get(server.url("/bookings/4")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_delete_without_credentials() {
    let server = common::start_server().await;
    let res = common::client()
        .delete(server.url("/bookings/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.headers()["www-authenticate"],
        "Basic realm=\"BookingAPI\""
    );
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Unauthorized: Authentication required"}));
    assert!(server.store.get_by_id(1).is_some());
}

#[tokio::test]
async fn test_delete_with_wrong_credentials() {
    let server = common::start_server().await;
    let res = common::client()
        .delete(server.url("/bookings/1"))
        .basic_auth("admin", Some("letmein"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(server.store.get_by_id(1).is_some());
}

#[tokio::test]
async fn test_delete_success_then_not_found() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client
        .delete(server.url("/bookings/1"))
        .header("authorization", ADMIN_AUTH)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());
    assert!(server.store.get_by_id(1).is_none());

    let res = client
        .delete(server.url("/bookings/1"))
        .header("authorization", ADMIN_AUTH)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_all_duplicates() {
    let server = common::start_server().await;
    let client = common::client();

    for name in ["Dup One", "Dup Two"] {
        let res = client
            .post(server.url("/bookings"))
            .json(&json!({"id": 9, "guestName": name, "roomType": "Twin"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let first: Value = client
        .get(server.url("/bookings/9"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["guestName"], "Dup One");

    let res = client
        .delete(server.url("/bookings/9"))
        .basic_auth("admin", Some("password"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(server.store.len(), 3);
}

#[tokio::test]
async fn test_invalid_id_regardless_of_auth() {
    let server = common::start_server().await;
    let client = common::client();

    let anonymous = client.get(server.url("/bookings/abc")).send().await.unwrap();
    let authed = client
        .get(server.url("/bookings/abc"))
        .header("authorization", ADMIN_AUTH)
        .send()
        .await
        .unwrap();

    for res in [anonymous, authed] {
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid ID format"}));
    }
}

#[tokio::test]
async fn test_delete_collection() {
    let server = common::start_server().await;
    let res = common::client()
        .delete(server.url("/bookings"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Method Not Allowed on collection"}));
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"status": "UP"}));

    let res = client.head(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_store_config() {
    let mut config = booking_service::ServiceConfig::default();
    config.store.seed_defaults = false;
    let server = common::start_server_with(config).await;

    let list: Vec<Value> = common::client()
        .get(server.url("/bookings"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_swagger_advertises_bound_port() {
    let server = common::start_server().await;
    let doc: Value = common::client()
        .get(server.url("/swagger.json"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        doc["servers"][0]["url"],
        format!("http://localhost:{}", server.addr.port())
    );
}
