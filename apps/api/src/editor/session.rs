//! Server-held builder sessions.
//!
//! A session owns one in-memory draft. Edits mutate it and mark it dirty; a save
//! persists a snapshot. At most one save per session is outstanding at a time.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::editor::draft::Draft;
use crate::editor::ops::{EditOutcome, PortfolioEdit, ResumeEdit};
use crate::errors::AppError;
use crate::models::document::DocumentKind;
use crate::persistence::{DocumentPatch, DocumentRecord, DocumentStore, NewDocument, StoreError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveRejected {
    #[error("There are no unsaved changes")]
    NothingToSave,

    #[error("A save is already in progress")]
    SaveInFlight,
}

impl From<SaveRejected> for AppError {
    fn from(err: SaveRejected) -> Self {
        AppError::Conflict(err.to_string())
    }
}

/// What a save writes, captured while the session lock is held.
#[derive(Debug, Clone)]
pub struct SaveSnapshot {
    pub kind: DocumentKind,
    pub document_id: Option<Uuid>,
    pub title: String,
    pub template: &'static str,
    pub content: Value,
    pub expected_updated_at: Option<DateTime<Utc>>,
    revision: u64,
}

#[derive(Debug)]
pub struct EditorSession {
    pub id: Uuid,
    pub owner: Uuid,
    pub draft: Draft,
    pub document_id: Option<Uuid>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    /// Set when an edit-by-id open fell back to a blank draft.
    pub redirected: bool,
    dirty: bool,
    saving: bool,
    /// Bumped on every change; lets a save tell whether edits landed while it ran.
    revision: u64,
    last_touched: Instant,
}

impl EditorSession {
    /// A fresh, clean session on a blank draft.
    pub fn blank(owner: Uuid, kind: DocumentKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            draft: Draft::blank(kind),
            document_id: None,
            remote_updated_at: None,
            redirected: false,
            dirty: false,
            saving: false,
            revision: 0,
            last_touched: Instant::now(),
        }
    }

    fn from_record(owner: Uuid, record: &DocumentRecord) -> Result<Self, AppError> {
        let draft = Draft::from_stored(
            record.kind,
            record.title.clone(),
            &record.template,
            record.content.clone(),
        )?;
        Ok(Self {
            draft,
            document_id: Some(record.id),
            remote_updated_at: Some(record.updated_at),
            ..Self::blank(owner, record.kind)
        })
    }

    pub fn kind(&self) -> DocumentKind {
        self.draft.kind()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn can_save(&self) -> bool {
        self.is_dirty() && !self.is_saving()
    }

    pub fn touch(&mut self) {
        self.last_touched = Instant::now();
    }

    /// Parses every edit for this session's kind, then applies them in order. A batch
    /// with any malformed edit is rejected before the draft is touched.
    pub fn apply_edits(&mut self, edits: Vec<Value>) -> Result<Vec<EditOutcome>, AppError> {
        let outcomes: Vec<EditOutcome> = match &mut self.draft {
            Draft::Resume(draft) => {
                let parsed = parse_edits::<ResumeEdit>(edits)?;
                parsed.into_iter().map(|edit| draft.apply(edit)).collect()
            }
            Draft::Portfolio(draft) => {
                let parsed = parse_edits::<PortfolioEdit>(edits)?;
                parsed.into_iter().map(|edit| draft.apply(edit)).collect()
            }
        };
        if outcomes.iter().any(|o| o.changed) {
            self.dirty = true;
            self.revision += 1;
        }
        self.touch();
        Ok(outcomes)
    }

    pub fn begin_save(&mut self) -> Result<SaveSnapshot, AppError> {
        if self.saving {
            return Err(SaveRejected::SaveInFlight.into());
        }
        if !self.dirty {
            return Err(SaveRejected::NothingToSave.into());
        }
        let snapshot = SaveSnapshot {
            kind: self.kind(),
            document_id: self.document_id,
            title: self.draft.title().to_string(),
            template: self.draft.template_name(),
            content: self.draft.content_json()?,
            expected_updated_at: self.remote_updated_at,
            revision: self.revision,
        };
        self.saving = true;
        Ok(snapshot)
    }

    /// Settles the outstanding save. On success the session adopts the stored id and
    /// timestamp, and is clean unless edits arrived after the snapshot was taken.
    pub fn finish_save(&mut self, snapshot: &SaveSnapshot, saved: Option<&DocumentRecord>) {
        self.saving = false;
        if let Some(record) = saved {
            self.document_id = Some(record.id);
            self.remote_updated_at = Some(record.updated_at);
            self.redirected = false;
            if self.revision == snapshot.revision {
                self.dirty = false;
            }
        }
        self.touch();
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            kind: self.kind(),
            document_id: self.document_id,
            remote_updated_at: self.remote_updated_at,
            dirty: self.is_dirty(),
            saving: self.is_saving(),
            can_save: self.can_save(),
            redirected: self.redirected,
            draft: self.draft.clone(),
        }
    }
}

fn parse_edits<T: serde::de::DeserializeOwned>(edits: Vec<Value>) -> Result<Vec<T>, AppError> {
    edits
        .into_iter()
        .enumerate()
        .map(|(i, edit)| {
            serde_json::from_value(edit)
                .map_err(|e| AppError::Validation(format!("edit {i} is invalid: {e}")))
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub kind: DocumentKind,
    pub document_id: Option<Uuid>,
    pub remote_updated_at: Option<DateTime<Utc>>,
    pub dirty: bool,
    pub saving: bool,
    pub can_save: bool,
    pub redirected: bool,
    pub draft: Draft,
}

/// Opens a builder session. Without an id the draft is blank; with an id the owner's
/// document is loaded. A document that cannot be loaded for any reason yields a blank
/// draft flagged `redirected`.
pub async fn open_session(
    store: &dyn DocumentStore,
    owner: Uuid,
    kind: DocumentKind,
    document_id: Option<Uuid>,
) -> EditorSession {
    let Some(id) = document_id else {
        return EditorSession::blank(owner, kind);
    };

    let loaded = match store.load(kind, id, owner).await {
        Ok(record) => EditorSession::from_record(owner, &record),
        Err(e) => Err(AppError::from(e)),
    };

    match loaded {
        Ok(session) => {
            debug!(%kind, document = %id, owner = %owner, "Opened document for editing");
            session
        }
        Err(e) => {
            warn!(%kind, document = %id, owner = %owner, "Document not accessible, starting a new one: {e}");
            EditorSession {
                redirected: true,
                ..EditorSession::blank(owner, kind)
            }
        }
    }
}

/// Writes a save snapshot: insert when the session has no document yet, otherwise a
/// guarded update against the last known `updated_at`.
pub async fn persist_snapshot(
    store: &dyn DocumentStore,
    owner: Uuid,
    snapshot: &SaveSnapshot,
) -> Result<DocumentRecord, StoreError> {
    match snapshot.document_id {
        None => {
            store
                .create(
                    owner,
                    NewDocument {
                        kind: snapshot.kind,
                        title: snapshot.title.clone(),
                        template: snapshot.template.to_string(),
                        content: snapshot.content.clone(),
                    },
                )
                .await
        }
        Some(id) => {
            store
                .update(
                    snapshot.kind,
                    id,
                    owner,
                    DocumentPatch {
                        title: Some(snapshot.title.clone()),
                        template: Some(snapshot.template.to_string()),
                        content: Some(snapshot.content.clone()),
                        expected_updated_at: snapshot.expected_updated_at,
                    },
                )
                .await
        }
    }
}

pub type SharedSession = Arc<Mutex<EditorSession>>;

/// Live builder sessions keyed by session id.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
    max_idle: Duration,
}

impl SessionRegistry {
    pub fn new(max_idle: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_idle,
        }
    }

    /// Registers a session, sweeping idle ones first.
    pub async fn insert(&self, session: EditorSession) -> SharedSession {
        self.sweep_idle().await;
        let id = session.id;
        let shared = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, shared.clone());
        shared
    }

    /// Sessions belonging to another owner are reported as missing.
    pub async fn get(&self, id: Uuid, owner: Uuid) -> Result<SharedSession, AppError> {
        let shared = self
            .sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        {
            let mut session = shared.lock().await;
            if session.owner != owner {
                return Err(AppError::NotFound(format!("Session {id} not found")));
            }
            session.touch();
        }
        Ok(shared)
    }

    pub async fn remove(&self, id: Uuid, owner: Uuid) -> Result<(), AppError> {
        self.get(id, owner).await?;
        self.sessions.write().await.remove(&id);
        info!(session = %id, "Closed builder session");
        Ok(())
    }

    /// Drops sessions untouched for longer than the idle limit. Sessions that are
    /// locked right now are in use and kept.
    pub async fn sweep_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        let max_idle = self.max_idle;
        sessions.retain(|_, shared| match shared.try_lock() {
            Ok(session) => session.last_touched.elapsed() <= max_idle,
            Err(_) => true,
        });
        let swept = before - sessions.len();
        if swept > 0 {
            info!(swept, "Swept idle builder sessions");
        }
        swept
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
