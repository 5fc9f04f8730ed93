use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::editor::session::SaveRejected;
use crate::errors::AppError;
use crate::export::{attachment_disposition, html_filename, pdf_filename, standalone_html};
use crate::models::document::DocumentKind;
use crate::owner::Owner;
use crate::render::render_draft;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub published_url: String,
    pub site_id: String,
}

/// Title and standalone document for the session's current draft.
async fn export_document(state: &AppState, owner: Owner, sid: Uuid) -> Result<(String, String), AppError> {
    let shared = state.sessions.get(sid, owner.id()).await?;
    let session = shared.lock().await;
    let title = session.draft.title().to_string();
    let root = render_draft(&session.draft);
    let html = standalone_html(&title, &root, &state.config.export_stylesheet_url);
    Ok((title, html))
}

/// GET /api/v1/sessions/:sid/export/html
pub async fn handle_export_html(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<Response, AppError> {
    let (title, html) = export_document(&state, owner, sid).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&html_filename(&title)),
            ),
        ],
        html,
    )
        .into_response())
}

/// GET /api/v1/sessions/:sid/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<Response, AppError> {
    let (title, html) = export_document(&state, owner, sid).await?;
    let pdf = state.pdf.render(&html).await?;
    info!(session = %sid, bytes = pdf.len(), "Rendered PDF export");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&pdf_filename(&title)),
            ),
        ],
        pdf,
    )
        .into_response())
}

/// POST /api/v1/sessions/:sid/publish
///
/// Publishes the session's current portfolio draft. The portfolio must have been saved
/// at least once. The session stays locked throughout so no save can race the
/// published-state update.
pub async fn handle_publish(
    State(state): State<AppState>,
    owner: Owner,
    Path(sid): Path<Uuid>,
) -> Result<Json<PublishResponse>, AppError> {
    let shared = state.sessions.get(sid, owner.id()).await?;
    let mut session = shared.lock().await;

    if session.kind() != DocumentKind::Portfolio {
        return Err(AppError::Validation(
            "Only portfolios can be published".to_string(),
        ));
    }
    if session.is_saving() {
        return Err(SaveRejected::SaveInFlight.into());
    }
    let Some(portfolio_id) = session.document_id else {
        return Err(AppError::Validation(
            "Save the portfolio before publishing it".to_string(),
        ));
    };

    let title = session.draft.title().to_string();
    let html = standalone_html(
        &title,
        &render_draft(&session.draft),
        &state.config.export_stylesheet_url,
    );
    let site = state.publisher.publish(portfolio_id, html).await?;
    let record = state
        .store
        .set_published(portfolio_id, owner.id(), &site.url, &site.site_id)
        .await?;
    session.remote_updated_at = Some(record.updated_at);

    info!(portfolio = %portfolio_id, url = %site.url, "Published portfolio");
    Ok(Json(PublishResponse {
        published_url: site.url,
        site_id: site.site_id,
    }))
}
