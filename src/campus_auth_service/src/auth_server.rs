use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    routing::{get, post},
};
use campus_adapters::{
    config::{API_PREFIX, AllowedOrigins},
    http::routes::{health, login, register, verify_email, verify_token},
};
use campus_application::AuthService;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front of an [`AuthService`].
pub struct AuthServer {
    router: Router,
}

impl AuthServer {
    pub fn new(service: AuthService) -> Self {
        let router = Router::new()
            .route("/register", post(register))
            .route("/login", post(login))
            .route("/verify", get(verify_email))
            .route("/verify-token", get(verify_token))
            .route("/health", get(health))
            .with_state(service);

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

    /// Routes relative to the mount point, for nesting into a host router.
    ///
    /// When `allowed_origins` is given, cross-origin requests are admitted
    /// from those origins only (`*` admits any).
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve the routes under `/api/auth` until the process is stopped.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = Router::new().nest(API_PREFIX, self.as_nested_router(allowed_origins));

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
