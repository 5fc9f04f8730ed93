use serde::{Deserialize, Serialize};

use super::common::{EducationEntry, ExperienceEntry, SkillEntry};
use super::entry::{Entry, EntryId};

pub const BLANK_RESUME_TITLE: &str = "My Resume";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumePersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProjectEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl ResumeProjectEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            url: String::new(),
        }
    }
}

impl Default for ResumeProjectEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for ResumeProjectEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub id: EntryId,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

impl CertificationEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            issuer: String::new(),
            date: String::new(),
            url: String::new(),
        }
    }
}

impl Default for CertificationEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for CertificationEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

/// The editable payload of a resume, stored as the `content` JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub personal_info: ResumePersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ResumeProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

/// Named ordered collections inside [`ResumeContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

/// A whole resume entry tagged with the section it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "entry", rename_all = "snake_case")]
pub enum ResumeEntry {
    Experience(ExperienceEntry),
    Education(EducationEntry),
    Skills(SkillEntry),
    Projects(ResumeProjectEntry),
    Certifications(CertificationEntry),
}

impl ResumeEntry {
    /// A new entry for `section` carrying the section's default field values.
    pub fn blank(section: ResumeSection, id: EntryId) -> Self {
        match section {
            ResumeSection::Experience => ResumeEntry::Experience(ExperienceEntry::new(id)),
            ResumeSection::Education => ResumeEntry::Education(EducationEntry::new(id)),
            ResumeSection::Skills => ResumeEntry::Skills(SkillEntry::new(id)),
            ResumeSection::Projects => ResumeEntry::Projects(ResumeProjectEntry::new(id)),
            ResumeSection::Certifications => {
                ResumeEntry::Certifications(CertificationEntry::new(id))
            }
        }
    }
}

#[cfg(test)]
impl ResumeContent {
    pub fn section_ids(&self, section: ResumeSection) -> Vec<EntryId> {
        match section {
            ResumeSection::Experience => self.experience.iter().map(Entry::id).collect(),
            ResumeSection::Education => self.education.iter().map(Entry::id).collect(),
            ResumeSection::Skills => self.skills.iter().map(Entry::id).collect(),
            ResumeSection::Projects => self.projects.iter().map(Entry::id).collect(),
            ResumeSection::Certifications => self.certifications.iter().map(Entry::id).collect(),
        }
    }
}
