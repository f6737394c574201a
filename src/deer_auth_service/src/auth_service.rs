use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    middleware,
    routing::{get, post},
};
use deer_adapters::{auth_validation::BearerTokenValidator, config::AllowedOrigins};
use deer_application::AuthWorkflow;
use deer_axum::{
    require_auth,
    routes::{login, ping, profile, register, verify_token},
};
use deer_core::{PasswordHasher, SessionTokenService, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the authentication workflow.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Build the router around a fully wired workflow.
    ///
    /// `/user/profile` is gated by a bearer token validated with the
    /// workflow's own token service; every other route is public.
    pub fn new<U, H, T>(workflow: AuthWorkflow<U, H, T>) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: SessionTokenService + Clone + 'static,
    {
        let validator = BearerTokenValidator::new(workflow.token_service().clone());

        let protected = Router::new()
            .route("/user/profile", get(profile::<U, H, T>))
            .route_layer(middleware::from_fn_with_state(
                validator,
                require_auth::<BearerTokenValidator<T>>,
            ));

        let router = Router::new()
            .route("/ping", get(ping))
            .route("/register", post(register::<U, H, T>))
            .route("/login", post(login::<U, H, T>))
            .route("/verify-token", post(verify_token::<U, H, T>))
            .merge(protected)
            .with_state(workflow);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
