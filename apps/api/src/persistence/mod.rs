//! Persistence adapter: load/save documents scoped by their owner.
//!
//! Handlers and builder sessions only ever see the `DocumentStore` trait; `AppState`
//! carries an `Arc<dyn DocumentStore>` so the Postgres backend can be swapped out.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::models::document::{DocumentKind, DocumentSummary, PortfolioRow, ResumeRow};
use crate::models::profile::ProfileRow;

pub use postgres::PgDocumentStore;

/// A stored resume or portfolio, as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub kind: DocumentKind,
    pub title: String,
    pub template: String,
    pub content: Value,
    pub published_url: Option<String>,
    pub hosting_site_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
impl DocumentRecord {
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id,
            title: self.title.clone(),
            template: self.template.clone(),
            published_url: self.published_url.clone(),
            updated_at: self.updated_at,
        }
    }
}

impl From<ResumeRow> for DocumentRecord {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.user_id,
            kind: DocumentKind::Resume,
            title: row.title,
            template: row.template,
            content: row.content,
            published_url: None,
            hosting_site_id: None,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<PortfolioRow> for DocumentRecord {
    fn from(row: PortfolioRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.user_id,
            kind: DocumentKind::Portfolio,
            title: row.title,
            template: row.template,
            content: row.content,
            published_url: row.published_url,
            hosting_site_id: row.hosting_site_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub kind: DocumentKind,
    pub title: String,
    pub template: String,
    pub content: Value,
}

/// Partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentPatch {
    pub title: Option<String>,
    pub template: Option<String>,
    pub content: Option<Value>,
    /// When set, the update only applies if the row was last written at this instant.
    pub expected_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    NotFound,

    #[error("document was modified concurrently")]
    Conflict,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<DocumentRecord, StoreError>;

    async fn create(&self, owner_id: Uuid, doc: NewDocument)
        -> Result<DocumentRecord, StoreError>;

    async fn update(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
        patch: DocumentPatch,
    ) -> Result<DocumentRecord, StoreError>;

    /// Returns false when nothing matched `(id, owner_id)`.
    async fn delete(&self, kind: DocumentKind, id: Uuid, owner_id: Uuid)
        -> Result<bool, StoreError>;

    /// Owner's documents of `kind`, most recently updated first.
    async fn list(
        &self,
        kind: DocumentKind,
        owner_id: Uuid,
    ) -> Result<Vec<DocumentSummary>, StoreError>;

    async fn set_published(
        &self,
        id: Uuid,
        owner_id: Uuid,
        published_url: &str,
        hosting_site_id: &str,
    ) -> Result<DocumentRecord, StoreError>;

    async fn profile(&self, owner_id: Uuid) -> Result<Option<ProfileRow>, StoreError>;
}
