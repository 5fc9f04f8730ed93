// Content model: the nested document payloads edited in builder sessions and
// stored as the `content` JSON blob of resume and portfolio rows.

pub mod common;
pub mod entry;
pub mod portfolio;
pub mod resume;
pub mod template;

pub use common::{Dated, EducationEntry, ExperienceEntry};
pub use entry::{Entry, EntryId, SkillLevel};
pub use portfolio::{PortfolioContent, PortfolioEntry, PortfolioSection};
pub use resume::{ResumeContent, ResumeEntry, ResumeSection};
pub use template::{PortfolioTemplate, ResumeTemplate, TemplateInfo};
