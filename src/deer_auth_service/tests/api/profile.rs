use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn should_return_401_without_token() {
    let app = TestApp::new().await;

    let response = app.get_profile(None).await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn should_return_401_for_malformed_or_invalid_token() {
    let app = TestApp::new().await;
    let (_, token) = app.signed_in_user().await;

    let cases = [
        token.clone(),
        format!("Basic {token}"),
        "Bearer ".to_owned(),
        "Bearer not.a.jwt".to_owned(),
        format!("Bearer {token}x"),
    ];

    for authorization in cases {
        let response = app.get_profile(Some(&authorization)).await;
        assert_eq!(response.status().as_u16(), 401, "{authorization}");
    }
}

#[tokio::test]
async fn should_return_200_with_caller_payload() {
    let app = TestApp::new().await;
    let (user, token) = app.signed_in_user().await;

    let response = app.get_profile(Some(&format!("Bearer {token}"))).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], user["username"]);
    assert_eq!(body["userEmail"], user["email"]);
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn should_reject_token_signed_by_another_service() {
    let app = TestApp::new().await;
    let other = TestApp::with_jwt_secret("another-secret").await;
    let (_, foreign_token) = other.signed_in_user().await;

    let response = app
        .get_profile(Some(&format!("Bearer {foreign_token}")))
        .await;

    assert_eq!(response.status().as_u16(), 401);
}
