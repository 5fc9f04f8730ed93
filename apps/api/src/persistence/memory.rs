use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::document::{DocumentKind, DocumentSummary};
use crate::models::profile::ProfileRow;
use crate::persistence::{DocumentPatch, DocumentRecord, DocumentStore, NewDocument, StoreError};

/// In-process `DocumentStore` used by unit and router tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    docs: Mutex<HashMap<Uuid, DocumentRecord>>,
    profiles: Mutex<HashMap<Uuid, ProfileRow>>,
    clock: Mutex<Option<DateTime<Utc>>>,
    unavailable: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert_profile(&self, profile: ProfileRow) {
        self.profiles.lock().unwrap().insert(profile.id, profile);
    }

    pub fn get(&self, id: Uuid) -> Option<DocumentRecord> {
        self.docs.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.docs.lock().unwrap().len()
    }

    /// Strictly increasing timestamps so `updated_at` ordering is deterministic.
    fn tick(&self) -> DateTime<Utc> {
        let mut clock = self.clock.lock().unwrap();
        let next = match *clock {
            Some(last) => last + Duration::seconds(1),
            None => Utc::now(),
        };
        *clock = Some(next);
        next
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<DocumentRecord, StoreError> {
        self.check_available()?;
        self.docs
            .lock()
            .unwrap()
            .get(&id)
            .filter(|d| d.kind == kind && d.owner_id == owner_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(
        &self,
        owner_id: Uuid,
        doc: NewDocument,
    ) -> Result<DocumentRecord, StoreError> {
        self.check_available()?;
        let now = self.tick();
        let record = DocumentRecord {
            id: Uuid::new_v4(),
            owner_id,
            kind: doc.kind,
            title: doc.title,
            template: doc.template,
            content: doc.content,
            published_url: None,
            hosting_site_id: None,
            created_at: now,
            updated_at: now,
        };
        self.docs.lock().unwrap().insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
        patch: DocumentPatch,
    ) -> Result<DocumentRecord, StoreError> {
        self.check_available()?;
        let now = self.tick();
        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .get_mut(&id)
            .filter(|d| d.kind == kind && d.owner_id == owner_id)
            .ok_or(StoreError::NotFound)?;
        if let Some(expected) = patch.expected_updated_at {
            if doc.updated_at != expected {
                return Err(StoreError::Conflict);
            }
        }
        if let Some(title) = patch.title {
            doc.title = title;
        }
        if let Some(template) = patch.template {
            doc.template = template;
        }
        if let Some(content) = patch.content {
            doc.content = content;
        }
        doc.updated_at = now;
        Ok(doc.clone())
    }

    async fn delete(
        &self,
        kind: DocumentKind,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut docs = self.docs.lock().unwrap();
        let owned = docs
            .get(&id)
            .is_some_and(|d| d.kind == kind && d.owner_id == owner_id);
        if owned {
            docs.remove(&id);
        }
        Ok(owned)
    }

    async fn list(
        &self,
        kind: DocumentKind,
        owner_id: Uuid,
    ) -> Result<Vec<DocumentSummary>, StoreError> {
        self.check_available()?;
        let docs = self.docs.lock().unwrap();
        let mut rows: Vec<&DocumentRecord> = docs
            .values()
            .filter(|d| d.kind == kind && d.owner_id == owner_id)
            .collect();
        rows.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(rows.into_iter().map(DocumentRecord::summary).collect())
    }

    async fn set_published(
        &self,
        id: Uuid,
        owner_id: Uuid,
        published_url: &str,
        hosting_site_id: &str,
    ) -> Result<DocumentRecord, StoreError> {
        self.check_available()?;
        let now = self.tick();
        let mut docs = self.docs.lock().unwrap();
        let doc = docs
            .get_mut(&id)
            .filter(|d| d.kind == DocumentKind::Portfolio && d.owner_id == owner_id)
            .ok_or(StoreError::NotFound)?;
        doc.published_url = Some(published_url.to_string());
        doc.hosting_site_id = Some(hosting_site_id.to_string());
        doc.updated_at = now;
        Ok(doc.clone())
    }

    async fn profile(&self, owner_id: Uuid) -> Result<Option<ProfileRow>, StoreError> {
        self.check_available()?;
        Ok(self.profiles.lock().unwrap().get(&owner_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_doc(kind: DocumentKind, title: &str) -> NewDocument {
        NewDocument {
            kind,
            title: title.into(),
            template: "Modern".into(),
            content: json!({}),
        }
    }

    #[tokio::test]
    async fn test_load_is_scoped_to_owner() {
        let store = MemoryDocumentStore::new();
        let owner = Uuid::new_v4();
        let doc = store.create(owner, new_doc(DocumentKind::Resume, "A")).await.unwrap();

        assert!(store.load(DocumentKind::Resume, doc.id, owner).await.is_ok());
        assert!(matches!(
            store.load(DocumentKind::Resume, doc.id, Uuid::new_v4()).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            store.load(DocumentKind::Portfolio, doc.id, owner).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_list_orders_by_most_recent_update() {
        let store = MemoryDocumentStore::new();
        let owner = Uuid::new_v4();
        let a = store.create(owner, new_doc(DocumentKind::Resume, "A")).await.unwrap();
        let b = store.create(owner, new_doc(DocumentKind::Resume, "B")).await.unwrap();
        store
            .update(DocumentKind::Resume, a.id, owner, DocumentPatch::default())
            .await
            .unwrap();

        let list = store.list(DocumentKind::Resume, owner).await.unwrap();
        let ids: Vec<Uuid> = list.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_stale_update_conflicts() {
        let store = MemoryDocumentStore::new();
        let owner = Uuid::new_v4();
        let doc = store.create(owner, new_doc(DocumentKind::Resume, "A")).await.unwrap();
        let stale = doc.updated_at;
        store
            .update(DocumentKind::Resume, doc.id, owner, DocumentPatch::default())
            .await
            .unwrap();

        let patch = DocumentPatch {
            title: Some("B".into()),
            expected_updated_at: Some(stale),
            ..Default::default()
        };
        assert!(matches!(
            store.update(DocumentKind::Resume, doc.id, owner, patch).await,
            Err(StoreError::Conflict)
        ));
        assert_eq!(store.get(doc.id).unwrap().title, "A");
    }

    #[tokio::test]
    async fn test_delete_other_owner_is_noop() {
        let store = MemoryDocumentStore::new();
        let owner = Uuid::new_v4();
        let doc = store.create(owner, new_doc(DocumentKind::Portfolio, "P")).await.unwrap();
        assert!(!store
            .delete(DocumentKind::Portfolio, doc.id, Uuid::new_v4())
            .await
            .unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.delete(DocumentKind::Portfolio, doc.id, owner).await.unwrap());
        assert_eq!(store.len(), 0);
    }
}
