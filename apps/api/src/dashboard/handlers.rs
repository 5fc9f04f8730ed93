use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::content::{PortfolioTemplate, ResumeTemplate, TemplateInfo};
use crate::dashboard::Dashboard;
use crate::editor::draft::Draft;
use crate::editor::validation::validate_draft;
use crate::errors::AppError;
use crate::models::document::{DocumentKind, DocumentSummary};
use crate::models::profile::ProfileRow;
use crate::owner::Owner;
use crate::persistence::{DocumentPatch, DocumentRecord, NewDocument, StoreError};
use crate::render::render_draft;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: Draft,
    pub preview: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: Option<String>,
    pub template: Option<String>,
    pub content: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub confirm: bool,
}

/// Builds and validates the draft a write would store. Returns it normalized, so
/// templates are stored by display name and content in canonical form.
fn checked_draft(
    kind: DocumentKind,
    title: String,
    template: &str,
    content: Value,
) -> Result<Draft, AppError> {
    let draft = Draft::from_input(kind, title, template, content)?;
    let errors = validate_draft(&draft);
    if !errors.is_empty() {
        return Err(AppError::FieldErrors(errors));
    }
    Ok(draft)
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    owner: Owner,
) -> Result<Json<Dashboard>, AppError> {
    Ok(Json(Dashboard::load(state.store.as_ref(), owner.id()).await?))
}

/// GET /api/v1/profile
pub async fn handle_profile(
    State(state): State<AppState>,
    owner: Owner,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = state
        .store
        .profile(owner.id())
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    Ok(Json(profile))
}

/// GET /api/v1/templates/:kind
pub async fn handle_templates(Path(kind): Path<DocumentKind>) -> Json<Vec<TemplateInfo>> {
    let catalog: Vec<TemplateInfo> = match kind {
        DocumentKind::Resume => ResumeTemplate::ALL.iter().map(|t| t.info()).collect(),
        DocumentKind::Portfolio => PortfolioTemplate::ALL.iter().map(|t| t.info()).collect(),
    };
    Json(catalog)
}

/// GET /api/v1/drafts/:kind
///
/// The blank document the create flow starts from.
pub async fn handle_blank_draft(Path(kind): Path<DocumentKind>) -> Json<DraftResponse> {
    let draft = Draft::blank(kind);
    let preview = render_draft(&draft).to_html();
    Json(DraftResponse { draft, preview })
}

/// GET /api/v1/documents/:kind
pub async fn handle_list_documents(
    State(state): State<AppState>,
    owner: Owner,
    Path(kind): Path<DocumentKind>,
) -> Result<Json<Vec<DocumentSummary>>, AppError> {
    Ok(Json(state.store.list(kind, owner.id()).await?))
}

/// POST /api/v1/documents/:kind
pub async fn handle_create_document(
    State(state): State<AppState>,
    owner: Owner,
    Path(kind): Path<DocumentKind>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentRecord>), AppError> {
    let blank = Draft::blank(kind);
    let draft = checked_draft(
        kind,
        req.title.unwrap_or_else(|| blank.title().to_string()),
        req.template.as_deref().unwrap_or(blank.template_name()),
        match req.content {
            Some(content) => content,
            None => blank.content_json()?,
        },
    )?;

    let record = state
        .store
        .create(
            owner.id(),
            NewDocument {
                kind,
                title: draft.title().to_string(),
                template: draft.template_name().to_string(),
                content: draft.content_json()?,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/documents/:kind/:id
///
/// A document the caller cannot load answers with a redirect to the create flow.
pub async fn handle_get_document(
    State(state): State<AppState>,
    owner: Owner,
    Path((kind, id)): Path<(DocumentKind, Uuid)>,
) -> Response {
    match state.store.load(kind, id, owner.id()).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => {
            warn!(%kind, document = %id, owner = %owner.id(), "Document not accessible, redirecting to create: {e}");
            (
                StatusCode::SEE_OTHER,
                [(header::LOCATION, format!("/api/v1/drafts/{}", kind.table()))],
            )
                .into_response()
        }
    }
}

/// PUT /api/v1/documents/:kind/:id
pub async fn handle_update_document(
    State(state): State<AppState>,
    owner: Owner,
    Path((kind, id)): Path<(DocumentKind, Uuid)>,
    Json(patch): Json<DocumentPatch>,
) -> Result<Json<DocumentRecord>, AppError> {
    let existing = state.store.load(kind, id, owner.id()).await?;
    let draft = checked_draft(
        kind,
        patch.title.unwrap_or(existing.title),
        patch.template.as_deref().unwrap_or(&existing.template),
        patch.content.unwrap_or(existing.content),
    )?;

    let record = state
        .store
        .update(
            kind,
            id,
            owner.id(),
            DocumentPatch {
                title: Some(draft.title().to_string()),
                template: Some(draft.template_name().to_string()),
                content: Some(draft.content_json()?),
                expected_updated_at: patch.expected_updated_at,
            },
        )
        .await?;
    Ok(Json(record))
}

/// DELETE /api/v1/documents/:kind/:id?confirm=true
///
/// Returns the dashboard without the deleted document.
pub async fn handle_delete_document(
    State(state): State<AppState>,
    owner: Owner,
    Path((kind, id)): Path<(DocumentKind, Uuid)>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Dashboard>, AppError> {
    if !params.confirm {
        return Err(AppError::Validation(
            "Deleting a document must be confirmed with confirm=true".to_string(),
        ));
    }
    if !state.store.delete(kind, id, owner.id()).await? {
        return Err(StoreError::NotFound.into());
    }
    info!(%kind, document = %id, owner = %owner.id(), "Deleted document");

    let mut dashboard = Dashboard::load(state.store.as_ref(), owner.id()).await?;
    dashboard.remove(kind, id);
    Ok(Json(dashboard))
}
