pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dashboard::handlers as dashboard;
use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard and documents
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .route("/api/v1/profile", get(dashboard::handle_profile))
        .route("/api/v1/templates/:kind", get(dashboard::handle_templates))
        .route("/api/v1/drafts/:kind", get(dashboard::handle_blank_draft))
        .route(
            "/api/v1/documents/:kind",
            get(dashboard::handle_list_documents).post(dashboard::handle_create_document),
        )
        .route(
            "/api/v1/documents/:kind/:id",
            get(dashboard::handle_get_document)
                .put(dashboard::handle_update_document)
                .delete(dashboard::handle_delete_document),
        )
        // Builder sessions
        .route("/api/v1/sessions", post(editor::handle_open_session))
        .route(
            "/api/v1/sessions/:sid",
            get(editor::handle_get_session).delete(editor::handle_close_session),
        )
        .route("/api/v1/sessions/:sid/edits", post(editor::handle_apply_edits))
        .route("/api/v1/sessions/:sid/preview", get(editor::handle_preview))
        .route("/api/v1/sessions/:sid/save", post(editor::handle_save))
        // Export
        .route(
            "/api/v1/sessions/:sid/export/html",
            get(export::handle_export_html),
        )
        .route(
            "/api/v1/sessions/:sid/export/pdf",
            get(export::handle_export_pdf),
        )
        .route("/api/v1/sessions/:sid/publish", post(export::handle_publish))
        .with_state(state)
}
