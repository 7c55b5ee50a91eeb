mod common;

use axum::http::{Method, StatusCode};
use common::{register, send, test_app};
use serde_json::json;
use shoerack::utils::jwt::JwtUtils;

#[tokio::test]
async fn test_gate_rejects_missing_and_malformed_headers() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/shoes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token provided");

    let (status, body) = send(&app, Method::GET, "/shoes", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_gate_rejects_foreign_signature_before_validation() {
    let app = test_app().await;
    let forged = JwtUtils::new("some-other-secret", 3600)
        .generate_token("user-1", "mallory@example.com")
        .unwrap();

    // Invalid body too: the gate must answer first.
    let (status, body) = send(
        &app,
        Method::POST,
        "/shoes",
        Some(&forged),
        Some(json!({ "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_create_validation() {
    let app = test_app().await;
    let (token, _) = register(&app, "alice@example.com", "secret1").await;

    let cases = [
        json!({ "name": "Air Max" }),
        json!({ "name": "", "brand": "Nike" }),
        json!({ "name": "Air Max", "brand": 7 }),
    ];

    for payload in cases {
        let (status, body) = send(
            &app,
            Method::POST,
            "/shoes",
            Some(&token),
            Some(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["status"], "error");
    }
}

#[tokio::test]
async fn test_owner_cannot_be_spoofed_from_body() {
    let app = test_app().await;
    let (alice_token, alice_id) = register(&app, "alice@example.com", "secret1").await;
    let (_, bob_id) = register(&app, "bob@example.com", "secret2").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/shoes",
        Some(&alice_token),
        Some(json!({ "name": "Air Max", "brand": "Nike", "userId": bob_id })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["userId"], alice_id.as_str());
}

#[tokio::test]
async fn test_delete_missing_and_twice() {
    let app = test_app().await;
    let (token, _) = register(&app, "alice@example.com", "secret1").await;

    let (status, body) = send(&app, Method::DELETE, "/shoes/does-not-exist", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Shoe not found");

    let (_, created) = send(
        &app,
        Method::POST,
        "/shoes",
        Some(&token),
        Some(json!({ "name": "Air Max", "brand": "Nike" })),
    )
    .await;
    let uri = format!("/shoes/{}", created["data"]["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_alice_and_bob_scenario() {
    let app = test_app().await;

    let (t1, alice_id) = register(&app, "alice@example.com", "secret1").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/shoes",
        Some(&t1),
        Some(json!({ "name": "Air Max", "brand": "Nike" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["name"], "Air Max");
    assert_eq!(created["data"]["brand"], "Nike");
    assert_eq!(created["data"]["userId"], alice_id.as_str());
    assert!(created["data"]["createdAt"].is_string());
    let shoe_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&app, Method::GET, "/shoes", Some(&t1), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["status"], "success");
    assert_eq!(listed["data"][0]["id"], shoe_id.as_str());

    let (t2, _) = register(&app, "bob@example.com", "secret2").await;
    let (status, bobs) = send(&app, Method::GET, "/shoes", Some(&t2), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bobs["data"], json!([]));

    let uri = format!("/shoes/{shoe_id}");
    let (status, body) = send(&app, Method::DELETE, &uri, Some(&t2), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Not authorized to delete this shoe");

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&t1), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Shoe deleted successfully");

    let (_, listed) = send(&app, Method::GET, "/shoes", Some(&t1), None).await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = test_app().await;
    let (token, _) = register(&app, "alice@example.com", "secret1").await;

    for (name, brand) in [("Samba", "Adidas"), ("Gel-Lyte", "Asics"), ("Air Max", "Nike")] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/shoes",
            Some(&token),
            Some(json!({ "name": name, "brand": brand })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listed) = send(&app, Method::GET, "/shoes", Some(&token), None).await;
    let names: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|shoe| shoe["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Air Max", "Gel-Lyte", "Samba"]);
}
