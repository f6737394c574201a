use deer_adapters::{
    auth_validation::{JwtConfig, JwtSessionTokens},
    config::test,
    hashing::{Argon2PasswordHasher, Argon2Settings},
    persistence::HashMapUserStore,
};
use deer_application::{AuthWorkflow, WorkflowConfig};
use deer_auth_service::AuthService;
use fake::{
    Fake,
    faker::internet::en::{Password, SafeEmail, Username},
};
use secrecy::Secret;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_jwt_secret("test-secret").await
    }

    pub async fn with_jwt_secret(secret: &str) -> Self {
        // Cheap parameters keep the suite fast; production costs come from settings.
        let password_hasher = Argon2PasswordHasher::new(Argon2Settings {
            memory_cost_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap();

        let workflow = AuthWorkflow::new(
            HashMapUserStore::default(),
            password_hasher,
            JwtSessionTokens::new(JwtConfig::new(Secret::from(secret.to_owned()))),
            WorkflowConfig::default(),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(AuthService::new(workflow).run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_ping(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/ping", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_register<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_verify_token<Body: serde::Serialize>(
        &self,
        body: &Body,
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}/verify-token", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_profile(&self, authorization: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .get(format!("{}/user/profile", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }

        request.send().await.expect("Failed to execute request.")
    }

    /// Register a fresh random user and log in, returning the request body used and the token.
    pub async fn signed_in_user(&self) -> (Value, String) {
        let user = random_user();
        let response = self.post_register(&user).await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self
            .post_login(&json!({ "email": user["email"], "password": user["password"] }))
            .await;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        let token = body["token"].as_str().unwrap().to_owned();
        (user, token)
    }
}

pub fn random_user() -> Value {
    let username: String = Username().fake();
    let email: String = SafeEmail().fake();
    let password: String = Password(8..20).fake();

    json!({
        "username": username,
        "email": email,
        "password": password,
    })
}
