use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::editor::ops::EditOutcome;
use crate::editor::session::{open_session, persist_snapshot, EditorSession, SessionView};
use crate::editor::validation::validate_draft;
use crate::errors::AppError;
use crate::models::document::DocumentKind;
use crate::owner::Owner;
use crate::render::render_draft;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OpenSessionRequest {
    pub kind: DocumentKind,
    /// Omit to start a new document.
    pub document_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: SessionView,
    /// Rendered preview root for the current draft.
    pub preview: String,
}

impl SessionResponse {
    fn of(session: &EditorSession) -> Self {
        Self {
            session: session.view(),
            preview: render_draft(&session.draft).to_html(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditBatch {
    pub edits: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct EditsResponse {
    pub outcomes: Vec<EditOutcome>,
    #[serde(flatten)]
    pub current: SessionResponse,
}

/// POST /api/v1/sessions
pub async fn handle_open_session(
    State(state): State<AppState>,
    owner: Owner,
    Json(req): Json<OpenSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session = open_session(state.store.as_ref(), owner.id(), req.kind, req.document_id).await;
    let shared = state.sessions.insert(session).await;
    let session = shared.lock().await;
    info!(session = %session.id, kind = %req.kind, redirected = session.redirected, "Opened builder session");
    Ok((StatusCode::CREATED, Json(SessionResponse::of(&session))))
}

/// GET /api/v1/sessions/:sid
pub async fn handle_get_session(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let shared = state.sessions.get(sid, owner.id()).await?;
    let session = shared.lock().await;
    Ok(Json(SessionResponse::of(&session)))
}

/// DELETE /api/v1/sessions/:sid
pub async fn handle_close_session(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(sid, owner.id()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:sid/edits
pub async fn handle_apply_edits(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
    Json(batch): Json<EditBatch>,
) -> Result<Json<EditsResponse>, AppError> {
    let shared = state.sessions.get(sid, owner.id()).await?;
    let mut session = shared.lock().await;
    let outcomes = session.apply_edits(batch.edits)?;
    Ok(Json(EditsResponse {
        outcomes,
        current: SessionResponse::of(&session),
    }))
}

/// GET /api/v1/sessions/:sid/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let shared = state.sessions.get(sid, owner.id()).await?;
    let session = shared.lock().await;
    Ok(Html(render_draft(&session.draft).to_html()))
}

/// POST /api/v1/sessions/:sid/save
///
/// The session lock is released while the store is written, so edits and previews
/// stay available; a second save during that window is rejected with 409.
pub async fn handle_save(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let shared = state.sessions.get(sid, owner.id()).await?;

    let snapshot = {
        let mut session = shared.lock().await;
        let errors = validate_draft(&session.draft);
        if !errors.is_empty() {
            return Err(AppError::FieldErrors(errors));
        }
        session.begin_save()?
    };

    let result = persist_snapshot(state.store.as_ref(), owner.id(), &snapshot).await;

    let mut session = shared.lock().await;
    match result {
        Ok(record) => {
            session.finish_save(&snapshot, Some(&record));
            info!(session = %sid, document = %record.id, kind = %record.kind, "Saved document");
            Ok(Json(SessionResponse::of(&session)))
        }
        Err(e) => {
            session.finish_save(&snapshot, None);
            error!(session = %sid, "Save failed: {e}");
            Err(e.into())
        }
    }
}
