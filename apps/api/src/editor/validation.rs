//! Field validation run before a draft is saved.
//!
//! Failures never touch the draft; they are reported per field and block the save.

use serde::{Deserialize, Serialize};

use crate::editor::draft::Draft;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted location of the field, e.g. `content.personalInfo.email`.
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub const MAX_TITLE_LEN: usize = 200;

pub fn validate_draft(draft: &Draft) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let title = draft.title().trim();
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            "Title must be at most 200 characters",
        ));
    }

    let email = match draft {
        Draft::Resume(d) => d.content.personal_info.email.as_str(),
        Draft::Portfolio(d) => d.content.personal_info.email.as_str(),
    };
    if !email.trim().is_empty() && !looks_like_email(email.trim()) {
        errors.push(FieldError::new(
            "content.personalInfo.email",
            "Enter a valid email address",
        ));
    }

    errors
}

/// Accepts `local@domain.tld` with no whitespace and exactly one `@`.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::draft::ResumeDraft;

    #[test]
    fn test_blank_draft_is_valid() {
        assert!(validate_draft(&Draft::Resume(ResumeDraft::blank())).is_empty());
    }

    #[test]
    fn test_title_required() {
        let mut draft = ResumeDraft::blank();
        draft.title = "   ".to_string();
        let errors = validate_draft(&Draft::Resume(draft));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[0].message, "Title is required");
    }

    #[test]
    fn test_bad_email_reported() {
        let mut draft = ResumeDraft::blank();
        draft.content.personal_info.email = "ada at example".to_string();
        let errors = validate_draft(&Draft::Resume(draft));
        assert_eq!(errors[0].field, "content.personalInfo.email");
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("a.b+c@mail.example.org"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@@example.com"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada@example..com"));
    }
}
