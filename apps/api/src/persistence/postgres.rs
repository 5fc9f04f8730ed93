use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::document::{DocumentKind, DocumentSummary, PortfolioRow, ResumeRow};
use crate::models::profile::ProfileRow;
use crate::persistence::{DocumentPatch, DocumentRecord, DocumentStore, NewDocument, StoreError};

/// `DocumentStore` over the hosted Postgres schema (`profiles`, `resumes`, `portfolios`).
/// Every statement is filtered by `user_id`.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinguishes "row is gone" from "row changed underneath us" after a guarded
    /// UPDATE matched nothing.
    async fn missing_or_conflict(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
    ) -> StoreError {
        let sql = format!(
            "SELECT updated_at FROM {} WHERE id = $1 AND user_id = $2",
            kind.table()
        );
        let existing: Result<Option<DateTime<Utc>>, sqlx::Error> = sqlx::query_scalar(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await;
        match existing {
            Ok(Some(_)) => StoreError::Conflict,
            Ok(None) => StoreError::NotFound,
            Err(e) => StoreError::Database(e),
        }
    }
}

const UPDATE_GUARD: &str = r#"
    SET title = COALESCE($3, title),
        template = COALESCE($4, template),
        content = COALESCE($5, content),
        updated_at = NOW()
    WHERE id = $1 AND user_id = $2
      AND ($6::timestamptz IS NULL OR updated_at = $6)
    RETURNING *
"#;

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn load(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<DocumentRecord, StoreError> {
        let record = match kind {
            DocumentKind::Resume => sqlx::query_as::<_, ResumeRow>(
                "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
            )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?
            .map(DocumentRecord::from),
            DocumentKind::Portfolio => sqlx::query_as::<_, PortfolioRow>(
                "SELECT * FROM portfolios WHERE id = $1 AND user_id = $2",
            )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?
            .map(DocumentRecord::from),
        };
        record.ok_or(StoreError::NotFound)
    }

    async fn create(
        &self,
        owner_id: Uuid,
        doc: NewDocument,
    ) -> Result<DocumentRecord, StoreError> {
        let sql = format!(
            "INSERT INTO {} (user_id, title, template, content) VALUES ($1, $2, $3, $4) RETURNING *",
            doc.kind.table()
        );
        let record: DocumentRecord = match doc.kind {
            DocumentKind::Resume => sqlx::query_as::<_, ResumeRow>(&sql)
                .bind(owner_id)
                .bind(&doc.title)
                .bind(&doc.template)
                .bind(&doc.content)
                .fetch_one(&self.pool)
                .await?
                .into(),
            DocumentKind::Portfolio => sqlx::query_as::<_, PortfolioRow>(&sql)
                .bind(owner_id)
                .bind(&doc.title)
                .bind(&doc.template)
                .bind(&doc.content)
                .fetch_one(&self.pool)
                .await?
                .into(),
        };
        info!(kind = %doc.kind, id = %record.id, owner = %owner_id, "Created document");
        Ok(record)
    }

    async fn update(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
        patch: DocumentPatch,
    ) -> Result<DocumentRecord, StoreError> {
        let sql = format!("UPDATE {} {}", kind.table(), UPDATE_GUARD);
        let updated: Option<DocumentRecord> = match kind {
            DocumentKind::Resume => sqlx::query_as::<_, ResumeRow>(&sql)
                .bind(id)
                .bind(owner_id)
                .bind(&patch.title)
                .bind(&patch.template)
                .bind(&patch.content)
                .bind(patch.expected_updated_at)
                .fetch_optional(&self.pool)
                .await?
                .map(DocumentRecord::from),
            DocumentKind::Portfolio => sqlx::query_as::<_, PortfolioRow>(&sql)
                .bind(id)
                .bind(owner_id)
                .bind(&patch.title)
                .bind(&patch.template)
                .bind(&patch.content)
                .bind(patch.expected_updated_at)
                .fetch_optional(&self.pool)
                .await?
                .map(DocumentRecord::from),
        };
        match updated {
            Some(record) => Ok(record),
            None => Err(self.missing_or_conflict(kind, id, owner_id).await),
        }
    }

    async fn delete(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", kind.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        kind: DocumentKind,
        owner_id: Uuid,
    ) -> Result<Vec<DocumentSummary>, StoreError> {
        let sql = match kind {
            DocumentKind::Resume => {
                r#"
                SELECT id, title, template, NULL::text AS published_url, updated_at
                FROM resumes
                WHERE user_id = $1
                ORDER BY updated_at DESC
                "#
            }
            DocumentKind::Portfolio => {
                r#"
                SELECT id, title, template, published_url, updated_at
                FROM portfolios
                WHERE user_id = $1
                ORDER BY updated_at DESC
                "#
            }
        };
        Ok(sqlx::query_as::<_, DocumentSummary>(sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn set_published(
        &self,
        id: Uuid,
        owner_id: Uuid,
        published_url: &str,
        hosting_site_id: &str,
    ) -> Result<DocumentRecord, StoreError> {
        sqlx::query_as::<_, PortfolioRow>(
            r#"
            UPDATE portfolios
            SET published_url = $3, netlify_site_id = $4, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(published_url)
        .bind(hosting_site_id)
        .fetch_optional(&self.pool)
        .await?
        .map(DocumentRecord::from)
        .ok_or(StoreError::NotFound)
    }

    async fn profile(&self, owner_id: Uuid) -> Result<Option<ProfileRow>, StoreError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
                .bind(owner_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}
