use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::portfolio::BLANK_PORTFOLIO_TITLE;
use crate::content::resume::BLANK_RESUME_TITLE;
use crate::content::{PortfolioContent, PortfolioTemplate, ResumeContent, ResumeTemplate};
use crate::errors::AppError;
use crate::models::document::DocumentKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDraft {
    pub title: String,
    pub template: ResumeTemplate,
    pub content: ResumeContent,
}

impl ResumeDraft {
    pub fn blank() -> Self {
        Self {
            title: BLANK_RESUME_TITLE.to_string(),
            template: ResumeTemplate::default(),
            content: ResumeContent::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    pub title: String,
    pub template: PortfolioTemplate,
    pub content: PortfolioContent,
}

impl PortfolioDraft {
    pub fn blank() -> Self {
        Self {
            title: BLANK_PORTFOLIO_TITLE.to_string(),
            template: PortfolioTemplate::default(),
            content: PortfolioContent::default(),
        }
    }
}

/// The in-memory document being edited in a builder session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Draft {
    Resume(ResumeDraft),
    Portfolio(PortfolioDraft),
}

impl Draft {
    pub fn blank(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Resume => Draft::Resume(ResumeDraft::blank()),
            DocumentKind::Portfolio => Draft::Portfolio(PortfolioDraft::blank()),
        }
    }

    /// Rebuilds a draft from the stored columns. Unknown template names fall back to
    /// the kind's default; a content blob that does not match the model is rejected.
    pub fn from_stored(
        kind: DocumentKind,
        title: String,
        template: &str,
        content: Value,
    ) -> Result<Self, AppError> {
        Self::build(kind, title, template, content).map_err(|e| {
            AppError::Internal(anyhow::anyhow!("stored {kind} content is malformed: {e}"))
        })
    }

    /// Same as `from_stored` for client-supplied documents; bad content is the
    /// caller's fault.
    pub fn from_input(
        kind: DocumentKind,
        title: String,
        template: &str,
        content: Value,
    ) -> Result<Self, AppError> {
        Self::build(kind, title, template, content)
            .map_err(|e| AppError::Validation(format!("content does not match a {kind}: {e}")))
    }

    fn build(
        kind: DocumentKind,
        title: String,
        template: &str,
        content: Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            DocumentKind::Resume => Draft::Resume(ResumeDraft {
                title,
                template: ResumeTemplate::from_name(template),
                content: serde_json::from_value(content)?,
            }),
            DocumentKind::Portfolio => Draft::Portfolio(PortfolioDraft {
                title,
                template: PortfolioTemplate::from_name(template),
                content: serde_json::from_value(content)?,
            }),
        })
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Draft::Resume(_) => DocumentKind::Resume,
            Draft::Portfolio(_) => DocumentKind::Portfolio,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Draft::Resume(d) => &d.title,
            Draft::Portfolio(d) => &d.title,
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            Draft::Resume(d) => d.template.name(),
            Draft::Portfolio(d) => d.template.name(),
        }
    }

    pub fn content_json(&self) -> Result<Value, AppError> {
        let value = match self {
            Draft::Resume(d) => serde_json::to_value(&d.content),
            Draft::Portfolio(d) => serde_json::to_value(&d.content),
        };
        value.map_err(|e| AppError::Internal(anyhow::anyhow!("content serialization failed: {e}")))
    }
}
