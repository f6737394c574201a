use serde_json::{Value, json};

use crate::helpers::{TestApp, random_user};

#[tokio::test]
async fn should_return_201_with_public_user_payload() {
    let app = TestApp::new().await;
    let user = random_user();

    let response = app.post_register(&user).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert!(!body["userID"].as_str().unwrap().is_empty());
    assert_eq!(body["username"], user["username"]);
    assert_eq!(body["userEmail"], user["email"]);
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn should_return_409_if_email_or_username_is_taken() {
    let app = TestApp::new().await;
    let user = random_user();

    assert_eq!(app.post_register(&user).await.status().as_u16(), 201);

    let same_email = json!({
        "username": "someone-else",
        "email": user["email"],
        "password": "pw1",
    });
    let same_username = json!({
        "username": user["username"],
        "email": "someone-else@x.com",
        "password": "pw1",
    });

    for body in [&user, &same_email, &same_username] {
        let response = app.post_register(body).await;
        assert_eq!(response.status().as_u16(), 409, "{body}");

        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "User already exists");
    }
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let cases = [
        json!({ "username": "alice", "email": "not-an-email", "password": "pw1" }),
        json!({ "username": "alice", "email": "alice@x.com", "password": "" }),
        json!({ "username": "", "email": "alice@x.com", "password": "pw1" }),
        json!({ "username": "al ice", "email": "alice@x.com", "password": "pw1" }),
        json!({ "email": "alice@x.com", "password": "pw1" }),
    ];

    for body in cases {
        let response = app.post_register(&body).await;
        assert_eq!(response.status().as_u16(), 400, "{body}");

        let error: Value = response.json().await.unwrap();
        assert!(error["error"].is_string());
    }
}
