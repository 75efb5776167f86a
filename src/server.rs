use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::any,
};
use std::{
    net::{IpAddr, SocketAddr},
    path::Path,
    sync::Arc,
    time::Duration,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    config::ConnectionConfig,
    queries::mysql,
    response::{CheckReport, ErrorReport, InspectionReport},
};

/// Origins allowed to call the endpoints from a browser; requests from
/// any other origin get no CORS headers at all
const ALLOWED_ORIGINS: [&str; 6] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost",
    "http://127.0.0.1",
];

/// Connection settings shared by the handlers, loaded once at startup
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConnectionConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Start the HTTP diagnostic endpoint
///
/// An unreadable configuration file is logged and replaced with the
/// documented defaults so the endpoints still answer; the failure then
/// shows up in the probe responses instead.
///
/// # Errors
///
/// Returns an error if the service fails to bind to the port
pub async fn start(config_path: &Path, listen: Option<IpAddr>, port: u16) -> Result<()> {
    let config = match ConnectionConfig::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err:#}; continuing with defaults");
            ConnectionConfig::from_env()
        }
    };

    info!(
        host = %config.host,
        database = %config.database,
        "probing as {}", config.username
    );

    let app = router(AppState::new(config));

    // Bind to socket with smart fallback
    let (listener, bind_addr) = match listen {
        Some(addr) => {
            let socket_addr = SocketAddr::new(addr, port);
            (
                TcpListener::bind(socket_addr).await?,
                socket_addr.to_string(),
            )
        }
        None => {
            // Auto mode: try IPv6 first, fallback to IPv4
            if let Ok(l) = TcpListener::bind(format!("[::]:{port}")).await {
                (l, format!("[::]:{port}"))
            } else {
                let socket_addr = format!("0.0.0.0:{port}");
                (TcpListener::bind(&socket_addr).await?, socket_addr)
            }
        }
    };

    info!("listening on {bind_addr}");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Assemble the routes and middleware stack around the shared state
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/check_connection", any(check_connection))
        .route("/test_connection", any(test_connection))
        .layer(middleware::from_fn(options_ok))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(security_headers))
        .with_state(state)
}

async fn check_connection(State(state): State<AppState>) -> Response {
    match mysql::ping(&state.config).await {
        Ok(()) => (StatusCode::OK, Json(CheckReport::new(&state.config))).into_response(),
        Err(err) => {
            warn!("connectivity check failed: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorReport::connection(&err)),
            )
                .into_response()
        }
    }
}

async fn test_connection(State(state): State<AppState>) -> Response {
    match mysql::introspect(&state.config).await {
        Ok(introspection) => {
            (StatusCode::OK, Json(InspectionReport::new(introspection))).into_response()
        }
        Err(err) => {
            warn!("introspection failed: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorReport::introspection(&err)),
            )
                .into_response()
        }
    }
}

/// Answer any `OPTIONS` request with an empty 200 before the handlers
/// can touch the database
async fn options_ok(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}

async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );

    response
}

fn cors() -> CorsLayer {
    let origins = ALLOWED_ORIGINS
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok());

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(Duration::from_secs(3600))
}
