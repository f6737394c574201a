use serde_json::{Value, json};

use crate::helpers::{TestApp, random_user};

#[tokio::test]
async fn should_return_200_with_user_and_token() {
    let app = TestApp::new().await;
    let user = random_user();

    let registered: Value = app.post_register(&user).await.json().await.unwrap();

    let response = app
        .post_login(&json!({ "email": user["email"], "password": user["password"] }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"], registered);
    assert_eq!(body["token"].as_str().unwrap().split('.').count(), 3);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_indistinguishable() {
    let app = TestApp::new().await;
    let user = random_user();
    app.post_register(&user).await;

    let wrong_password = app
        .post_login(&json!({ "email": user["email"], "password": "definitely-wrong" }))
        .await;
    let unknown_email = app
        .post_login(&json!({ "email": "nobody@x.com", "password": user["password"] }))
        .await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_email.status().as_u16(), 401);

    let wrong_password = wrong_password.text().await.unwrap();
    let unknown_email = unknown_email.text().await.unwrap();
    assert_eq!(wrong_password, unknown_email);

    let body: Value = serde_json::from_str(&wrong_password).unwrap();
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn should_return_400_for_malformed_credentials() {
    let app = TestApp::new().await;

    for body in [
        json!({ "email": "not-an-email", "password": "pw1" }),
        json!({ "email": "alice@x.com", "password": "" }),
        json!({ "email": "alice@x.com" }),
    ] {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 400, "{body}");
    }
}
