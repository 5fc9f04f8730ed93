//! The signed-in user's document overview and direct document CRUD.

pub mod handlers;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::document::{DocumentKind, DocumentSummary};
use crate::persistence::{DocumentStore, StoreError};

/// Owner's resumes and portfolios, each newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub resumes: Vec<DocumentSummary>,
    pub portfolios: Vec<DocumentSummary>,
}

impl Dashboard {
    pub async fn load(store: &dyn DocumentStore, owner: Uuid) -> Result<Self, StoreError> {
        Ok(Self {
            resumes: store.list(DocumentKind::Resume, owner).await?,
            portfolios: store.list(DocumentKind::Portfolio, owner).await?,
        })
    }

    /// Drops `id` from the list for `kind`. Returns whether it was present.
    pub fn remove(&mut self, kind: DocumentKind, id: Uuid) -> bool {
        let list = match kind {
            DocumentKind::Resume => &mut self.resumes,
            DocumentKind::Portfolio => &mut self.portfolios,
        };
        let before = list.len();
        list.retain(|doc| doc.id != id);
        list.len() != before
    }
}
