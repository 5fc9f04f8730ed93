//! Entry types shared by resumes and portfolios.

use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryId, SkillLevel};

/// Display value written into `end_date` while an entry is marked current.
pub const PRESENT: &str = "Present";

/// Experience and education entries carry a "current" flag that owns their end date.
pub trait Dated: Entry {
    fn is_current(&self) -> bool;
    fn set_current(&mut self, current: bool);

    /// Re-applies the current/end-date coupling after a whole-entry update.
    fn normalize_current(&mut self) {
        if self.is_current() {
            self.set_current(true);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for ExperienceEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

impl Dated for ExperienceEntry {
    fn is_current(&self) -> bool {
        self.current
    }

    fn set_current(&mut self, current: bool) {
        self.current = current;
        self.end_date = if current { PRESENT.to_string() } else { String::new() };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl EducationEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for EducationEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

impl Dated for EducationEntry {
    fn is_current(&self) -> bool {
        self.current
    }

    fn set_current(&mut self, current: bool) {
        self.current = current;
        self.end_date = if current { PRESENT.to_string() } else { String::new() };
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub id: EntryId,
    pub name: String,
    pub level: SkillLevel,
}

impl SkillEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            level: SkillLevel::default(),
        }
    }
}

impl Default for SkillEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for SkillEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_current_writes_present() {
        let mut job = ExperienceEntry::new(EntryId::new());
        job.end_date = "Mar 2023".to_string();
        job.set_current(true);
        assert!(job.current);
        assert_eq!(job.end_date, PRESENT);
    }

    #[test]
    fn test_clear_current_empties_end_date() {
        let mut edu = EducationEntry::new(EntryId::new());
        edu.set_current(true);
        edu.set_current(false);
        assert!(!edu.current);
        assert_eq!(edu.end_date, "");
    }

    #[test]
    fn test_normalize_overrides_stale_end_date() {
        let mut job = ExperienceEntry::new(EntryId::new());
        job.current = true;
        job.end_date = "Dec 2021".to_string();
        job.normalize_current();
        assert_eq!(job.end_date, PRESENT);
    }

    #[test]
    fn test_deserializes_camel_case_blob_with_missing_fields() {
        let job: ExperienceEntry = serde_json::from_str(
            r#"{"id":"7f1c1a5e-2b7a-4a55-9d0a-2f6a7d3c9b11","company":"Acme","startDate":"Jan 2020"}"#,
        )
        .unwrap();
        assert_eq!(job.company, "Acme");
        assert_eq!(job.start_date, "Jan 2020");
        assert_eq!(job.end_date, "");
        assert!(!job.current);
    }
}
