use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_claims_for_valid_token() {
    let app = TestApp::new().await;
    let (user, token) = app.signed_in_user().await;

    let response = app.post_verify_token(&json!({ "token": token })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], user["username"]);
    assert!(!body["userID"].as_str().unwrap().is_empty());
    assert!(body["issuedAt"].is_string());
    assert!(body["expiresAt"].is_string());
}

#[tokio::test]
async fn should_return_401_for_invalid_token() {
    let app = TestApp::new().await;

    let response = app
        .post_verify_token(&json!({ "token": "invalid_token" }))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}
