use crate::core::{Config, ServerError, ServerState};
use crate::middleware::logging_middleware;
use crate::utils::AppError;
use axum::http::{HeaderName, HeaderValue};
use axum::{Router, middleware};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock};
use tower::Service;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub type OneshotResult =
    Result<http::Response<axum::body::Body>, Box<dyn std::error::Error + Send + Sync>>;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::root::router())
        .merge(crate::api::health::router())
        .merge(crate::api::apples::router())
        .merge(crate::api::orders::router())
        .merge(crate::api::delivery::router())
        .merge(crate::api::contact::router())
        .merge(crate::api::content::router())
        .merge(crate::api::upload::router())
}

/// CORS for the storefront origins
///
/// Credentials are allowed, so origins are listed explicitly and methods
/// and headers mirror the preflight request.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

#[derive(Clone, Debug)]
pub struct HttpsService {
    config: Config,
    router: Arc<RwLock<Option<Router>>>,
}

impl HttpsService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            router: Arc::new(RwLock::new(None)),
        }
    }

    /// Initialize the router with the given server state.
    /// Called once the ServerState is complete.
    pub fn initialize(&self, state: ServerState) {
        let request_id = HeaderName::from_static(crate::middleware::logging::REQUEST_ID_HEADER);

        let app = build_app()
            .with_state(state)
            .layer(middleware::from_fn(logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(request_id.clone()))
            .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
            .layer(cors_layer(&self.config))
            .layer(CompressionLayer::new());

        let mut router = self.router.write().unwrap_or_else(PoisonError::into_inner);
        *router = Some(app);
    }

    pub fn router(&self) -> Option<Router> {
        self.router
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run one request through the cached router without a socket
    pub async fn oneshot(&self, request: http::Request<axum::body::Body>) -> OneshotResult {
        match self.router() {
            Some(mut router) => match router.call(request).await {
                Ok(response) => Ok(response),
                Err(_) => Err(AppError::internal("Oneshot call failed").into()),
            },
            None => Err(AppError::internal("HttpsService not initialized").into()),
        }
    }

    /// Serve HTTP on `addr` until `shutdown_signal` resolves
    ///
    /// In-flight requests get `SHUTDOWN_TIMEOUT_MS` to finish.
    pub async fn start_server<F>(&self, addr: SocketAddr, shutdown_signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router().ok_or(ServerError::NotInitialized)?;

        tracing::info!("🚀 Starting HTTP server on {}", addr);

        let handle = axum_server::Handle::new();

        let handle_clone = handle.clone();
        let grace = self.config.shutdown_timeout();
        tokio::spawn(async move {
            shutdown_signal.await;
            handle_clone.graceful_shutdown(Some(grace));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Internal(anyhow::anyhow!("Server error: {e}")))?;

        Ok(())
    }
}
