//! HTTP JSON API over the session store.

use crate::chat::{ChatBot, ChatUpdate, Reply};
use crate::config::ServerConfig;
use anyhow::Result;
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat_tictactoe::{GameError, GameSnapshot, SessionId, SessionStore};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Body of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Cell to mark (0-8, where 0=top-left, 8=bottom-right).
    pub cell_index: usize,
}

/// Body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code, e.g. `cell_occupied`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// A [`GameError`] rendered as an HTTP response.
#[derive(Debug, derive_more::From)]
pub struct ApiError(GameError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            GameError::NotFound { .. } => StatusCode::NOT_FOUND,
            GameError::GameAlreadyOver | GameError::CellOccupied { .. } => StatusCode::CONFLICT,
            GameError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self.0, "Request rejected");
        let body = ErrorBody {
            error: self.0.code().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Shared state of all handlers.
#[derive(Debug, Clone)]
struct AppState {
    store: SessionStore,
    bot: ChatBot,
}

/// Builds the API router around `store`.
pub fn router(store: SessionStore) -> Router {
    let state = AppState {
        bot: ChatBot::new(store.clone()),
        store,
    };

    Router::new()
        .route("/health", get(health))
        .route("/sessions", get(list_sessions))
        .route(
            "/sessions/{session_id}",
            post(start_session).get(get_session).delete(end_session),
        )
        .route("/sessions/{session_id}/moves", post(submit_move))
        .route("/chats/{chat_id}/updates", post(chat_update))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Serves the API until Ctrl+C.
#[instrument(skip_all, fields(addr = %config.bind_addr()))]
pub async fn serve(config: &ServerConfig, store: SessionStore) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server ready at http://{}/", config.bind_addr());

    axum::serve(listener, router(store))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

#[instrument(skip(state))]
async fn list_sessions(State(state): State<AppState>) -> Json<Vec<SessionId>> {
    Json(state.store.session_ids())
}

#[instrument(skip(state))]
async fn start_session(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Json<GameSnapshot> {
    info!("Starting new game");
    Json(state.store.start_session(&session_id))
}

#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<GameSnapshot>, ApiError> {
    Ok(Json(state.store.get_session(&session_id)?))
}

#[instrument(skip(state))]
async fn submit_move(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = state.store.submit_move(&session_id, req.cell_index)?;
    info!(outcome = ?snapshot.outcome(), "Move accepted");
    Ok(Json(snapshot))
}

#[instrument(skip(state))]
async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    state.store.end_session(&session_id)?;
    info!("Session ended");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, update))]
async fn chat_update(
    State(state): State<AppState>,
    Path(chat_id): Path<SessionId>,
    Json(update): Json<ChatUpdate>,
) -> Json<Reply> {
    Json(state.bot.handle(&chat_id, update))
}
