//! HTTP relay between the browser and the remote lookup service.
//!
//! The browser only ever talks to this process, so the lookup service address
//! stays private. Submissions are reshaped into the service's payload and the
//! service's status and body are passed back unchanged.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use sherlock_core::{Catalog, RelayPayload, SearchRequest, SiteEntry};
use sherlock_engine::{Upstream, UpstreamReply, SUBMIT_PATH};
use sherlock_logging::{sherlock_info, sherlock_warn};
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Clone)]
pub struct RelayState {
    pub catalog: Arc<Catalog>,
    pub upstream: Arc<dyn Upstream>,
}

#[derive(Debug, Default, Deserialize)]
struct SitesParams {
    #[serde(default)]
    nsfw: bool,
}

pub fn build_router(state: RelayState) -> Router {
    Router::new()
        .route(SUBMIT_PATH, post(submit))
        .route("/api/sites", get(list_sites))
        .route("/healthz", get(health))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: RelayState) -> std::io::Result<()> {
    let router = build_router(state);
    sherlock_info!("Relay listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    sherlock_info!("Relay exited");
    Ok(())
}

async fn submit(State(state): State<RelayState>, Json(request): Json<SearchRequest>) -> Response {
    sherlock_info!(
        "Relaying lookup user={} sites={} nsfw={}",
        request.username,
        request.sites.len(),
        request.with_nsfw
    );
    let payload = RelayPayload::from(request);
    match state.upstream.forward(&payload).await {
        Ok(reply) => passthrough(reply),
        Err(err) => {
            sherlock_warn!("Upstream lookup failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

fn passthrough(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, reply.body).into_response();
    let headers = response.headers_mut();
    match reply
        .content_type
        .and_then(|value| HeaderValue::from_str(&value).ok())
    {
        Some(content_type) => {
            headers.insert(CONTENT_TYPE, content_type);
        }
        None => {
            headers.remove(CONTENT_TYPE);
        }
    }
    response
}

async fn list_sites(
    State(state): State<RelayState>,
    Query(params): Query<SitesParams>,
) -> Json<Vec<SiteEntry>> {
    Json(state.catalog.list_sites(params.nsfw))
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
