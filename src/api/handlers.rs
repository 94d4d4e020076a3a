//! HTTP API handlers.
//!
//! Each handler walks the same pipeline: validate the input field, run one
//! upstream lookup, format the embed, dispatch it to the webhook, answer
//! the original caller. The webhook is never contacted unless the lookup
//! produced a parsed payload. Upstream detail and exception text stay in
//! the operator log; callers only ever see short fixed strings.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::Config;
use crate::error::{DispatchError, LookupError};
use crate::lookup::{QueryKind, StatusLookup};
use crate::metrics;
use crate::notify::{mc_status_embed, whois_embed, NotifySink, WebhookPayload};

/// Application state shared with handlers.
///
/// Handlers are stateless across requests; everything here is immutable
/// configuration or a shared client.
#[derive(Clone)]
pub struct AppState {
    /// Immutable configuration.
    pub config: Arc<Config>,
    /// Upstream lookup client.
    pub lookup: Arc<dyn StatusLookup>,
    /// Outbound notification sink.
    pub sink: Arc<dyn NotifySink>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        config: Arc<Config>,
        lookup: Arc<dyn StatusLookup>,
        sink: Arc<dyn NotifySink>,
    ) -> Self {
        Self {
            config,
            lookup,
            sink,
        }
    }
}

/// Body of `POST /mcstatus`.
#[derive(Debug, Deserialize)]
pub struct McStatusRequest {
    /// Server address; a missing field is treated as empty.
    #[serde(default)]
    pub address: String,
}

/// Body of `POST /whois`.
#[derive(Debug, Deserialize)]
pub struct WhoisRequest {
    /// Domain or IP; a missing field is treated as empty.
    #[serde(default)]
    pub target: String,
}

/// Success response returned to the original caller.
///
/// Confirms that forwarding happened; the upstream payload itself is
/// never echoed back.
#[derive(Debug, Serialize)]
pub struct SentResponse {
    /// Always true.
    pub success: bool,
    /// Fixed confirmation message.
    pub message: &'static str,
}

/// Error response with a short fixed message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error string.
    pub error: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: &'static str) -> ApiError {
    (status, Json(ErrorResponse { error }))
}

/// Dispatch the payload, recording metrics. The caller maps a failure to
/// its endpoint-specific generic 500 message.
async fn deliver(state: &AppState, payload: &WebhookPayload) -> Result<(), DispatchError> {
    let start = Instant::now();

    match state.sink.dispatch(payload).await {
        Ok(()) => {
            metrics::record_dispatch_latency(start);
            metrics::inc_notifications_delivered();
            Ok(())
        }
        Err(e) => {
            metrics::inc_notifications_failed();
            error!(error = %e, "webhook dispatch failed");
            Err(e)
        }
    }
}

/// Handle `POST /mcstatus`: look up a Minecraft server and forward the
/// result to the webhook.
pub async fn mc_status(
    State(state): State<AppState>,
    Json(request): Json<McStatusRequest>,
) -> Result<Json<SentResponse>, ApiError> {
    let address = request.address.trim();
    if address.is_empty() {
        metrics::inc_requests_rejected();
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "서버 주소를 입력하세요.",
        ));
    }

    metrics::inc_lookups(QueryKind::Minecraft);
    let start = Instant::now();

    let status = match state.lookup.mc_status(address).await {
        Ok(status) => status,
        Err(LookupError::TargetOffline) => {
            metrics::inc_lookup_failures(QueryKind::Minecraft);
            return Err(api_error(
                StatusCode::NOT_FOUND,
                "서버가 꺼져 있거나 찾을 수 없습니다.",
            ));
        }
        Err(e) => {
            metrics::inc_lookup_failures(QueryKind::Minecraft);
            error!(address, error = %e, "minecraft status lookup failed");
            return Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Minecraft 상태 확인 오류",
            ));
        }
    };

    metrics::record_lookup_latency(start, QueryKind::Minecraft);

    let payload = mc_status_embed(address, &status);
    deliver(&state, &payload).await.map_err(|_| {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Minecraft 상태 확인 오류")
    })?;

    info!(address, "minecraft status forwarded");
    Ok(Json(SentResponse {
        success: true,
        message: "Minecraft 서버 상태가 Discord로 전송됨",
    }))
}

/// Handle `POST /whois`: look up a domain or IP and forward the result to
/// the webhook.
pub async fn whois(
    State(state): State<AppState>,
    Json(request): Json<WhoisRequest>,
) -> Result<Json<SentResponse>, ApiError> {
    let target = request.target.trim();
    if target.is_empty() {
        metrics::inc_requests_rejected();
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "도메인 또는 IP를 입력하세요.",
        ));
    }

    metrics::inc_lookups(QueryKind::Whois);
    let start = Instant::now();

    let record = match state.lookup.whois(target).await {
        Ok(record) => record,
        Err(e) => {
            metrics::inc_lookup_failures(QueryKind::Whois);
            error!(target, error = %e, "whois lookup failed");
            return Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "WHOIS 분석 오류",
            ));
        }
    };

    metrics::record_lookup_latency(start, QueryKind::Whois);

    let payload = whois_embed(target, &record);
    deliver(&state, &payload)
        .await
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, "WHOIS 분석 오류"))?;

    info!(target, "whois record forwarded");
    Ok(Json(SentResponse {
        success: true,
        message: "WHOIS 분석 결과가 Discord로 전송됨",
    }))
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
