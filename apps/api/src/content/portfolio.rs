use serde::{Deserialize, Serialize};

use super::common::{EducationEntry, ExperienceEntry, SkillEntry};
use super::entry::{Entry, EntryId};

pub const BLANK_PORTFOLIO_TITLE: &str = "My Portfolio";
pub const DEFAULT_PHOTO_URL: &str = "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const DEFAULT_PROJECT_IMAGE_URL: &str = "https://images.pexels.com/photos/270360/pexels-photo-270360.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const DEFAULT_AVATAR_URL: &str = "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";
pub const DEFAULT_CONTACT_MESSAGE: &str =
    "Feel free to reach out to me for collaboration or job opportunities.";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioPersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactBlock {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Ordered, de-duplicated; maintained through the tag editor.
    pub tags: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

impl PortfolioProjectEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            image: DEFAULT_PROJECT_IMAGE_URL.to_string(),
            tags: Vec::new(),
            live_url: String::new(),
            github_url: String::new(),
        }
    }
}

impl Default for PortfolioProjectEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for PortfolioProjectEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialEntry {
    pub id: EntryId,
    pub name: String,
    pub position: String,
    pub company: String,
    pub text: String,
    pub avatar: String,
}

impl TestimonialEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            position: String::new(),
            company: String::new(),
            text: String::new(),
            avatar: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl Default for TestimonialEntry {
    fn default() -> Self {
        Self::new(EntryId::new())
    }
}

impl Entry for TestimonialEntry {
    fn id(&self) -> EntryId {
        self.id
    }
}

/// The editable payload of a portfolio site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioContent {
    pub personal_info: PortfolioPersonalInfo,
    pub social: SocialLinks,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<PortfolioProjectEntry>,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub testimonials: Vec<TestimonialEntry>,
    pub contact: ContactBlock,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            personal_info: PortfolioPersonalInfo {
                photo: DEFAULT_PHOTO_URL.to_string(),
                ..PortfolioPersonalInfo::default()
            },
            social: SocialLinks::default(),
            skills: Vec::new(),
            projects: Vec::new(),
            experiences: Vec::new(),
            education: Vec::new(),
            testimonials: Vec::new(),
            contact: ContactBlock {
                message: DEFAULT_CONTACT_MESSAGE.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioSection {
    Skills,
    Projects,
    Experiences,
    Education,
    Testimonials,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "entry", rename_all = "snake_case")]
pub enum PortfolioEntry {
    Skills(SkillEntry),
    Projects(PortfolioProjectEntry),
    Experiences(ExperienceEntry),
    Education(EducationEntry),
    Testimonials(TestimonialEntry),
}

impl PortfolioEntry {
    pub fn blank(section: PortfolioSection, id: EntryId) -> Self {
        match section {
            PortfolioSection::Skills => PortfolioEntry::Skills(SkillEntry::new(id)),
            PortfolioSection::Projects => PortfolioEntry::Projects(PortfolioProjectEntry::new(id)),
            PortfolioSection::Experiences => {
                PortfolioEntry::Experiences(ExperienceEntry::new(id))
            }
            PortfolioSection::Education => PortfolioEntry::Education(EducationEntry::new(id)),
            PortfolioSection::Testimonials => {
                PortfolioEntry::Testimonials(TestimonialEntry::new(id))
            }
        }
    }
}

#[cfg(test)]
impl PortfolioContent {
    pub fn section_ids(&self, section: PortfolioSection) -> Vec<EntryId> {
        match section {
            PortfolioSection::Skills => self.skills.iter().map(Entry::id).collect(),
            PortfolioSection::Projects => self.projects.iter().map(Entry::id).collect(),
            PortfolioSection::Experiences => self.experiences.iter().map(Entry::id).collect(),
            PortfolioSection::Education => self.education.iter().map(Entry::id).collect(),
            PortfolioSection::Testimonials => self.testimonials.iter().map(Entry::id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_portfolio_has_photo_and_contact_message() {
        let content = PortfolioContent::default();
        assert_eq!(content.personal_info.photo, DEFAULT_PHOTO_URL);
        assert_eq!(content.contact.message, DEFAULT_CONTACT_MESSAGE);
        assert!(content.projects.is_empty());
    }

    #[test]
    fn test_blank_project_has_placeholder_image_and_no_tags() {
        match PortfolioEntry::blank(PortfolioSection::Projects, EntryId::new()) {
            PortfolioEntry::Projects(project) => {
                assert_eq!(project.image, DEFAULT_PROJECT_IMAGE_URL);
                assert!(project.tags.is_empty());
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn test_project_uses_camel_case_urls() {
        let project: PortfolioProjectEntry = serde_json::from_value(serde_json::json!({
            "title": "Site",
            "liveUrl": "https://example.com",
            "githubUrl": "https://github.com/x/y",
            "tags": ["rust"]
        }))
        .unwrap();
        assert_eq!(project.live_url, "https://example.com");
        assert_eq!(project.github_url, "https://github.com/x/y");
        assert_eq!(project.tags, vec!["rust".to_string()]);
    }
}
