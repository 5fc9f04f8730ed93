//! Typed edit operations applied to builder drafts.
//!
//! Every field is addressed through a typed variant rather than a path string; the
//! wire form is `{"op": "<name>", ...}`. Unknown ops or sections fail to deserialize.

use serde::{Deserialize, Serialize};

use crate::content::portfolio::{ContactBlock, PortfolioPersonalInfo, SocialLinks};
use crate::content::resume::ResumePersonalInfo;
use crate::content::{
    Dated, EntryId, PortfolioContent, PortfolioEntry, PortfolioSection, PortfolioTemplate,
    ResumeContent, ResumeEntry, ResumeSection, ResumeTemplate,
};
use crate::editor::collection::{add_entry, find_entry_mut, remove_entry, reorder, replace_entry};
use crate::editor::draft::{PortfolioDraft, ResumeDraft};
use crate::editor::tags::{add_tag, normalize_tags, remove_tag};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeEdit {
    SetTitle {
        title: String,
    },
    SetTemplate {
        template: ResumeTemplate,
    },
    SetPersonalInfo {
        personal_info: ResumePersonalInfo,
    },
    AddEntry {
        section: ResumeSection,
    },
    RemoveEntry {
        section: ResumeSection,
        id: EntryId,
    },
    Reorder {
        section: ResumeSection,
        from: usize,
        to: usize,
    },
    ReplaceEntry {
        entry: ResumeEntry,
    },
    SetCurrent {
        section: ResumeSection,
        id: EntryId,
        current: bool,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PortfolioEdit {
    SetTitle {
        title: String,
    },
    SetTemplate {
        template: PortfolioTemplate,
    },
    SetPersonalInfo {
        personal_info: PortfolioPersonalInfo,
    },
    SetSocial {
        social: SocialLinks,
    },
    SetContact {
        contact: ContactBlock,
    },
    AddEntry {
        section: PortfolioSection,
    },
    RemoveEntry {
        section: PortfolioSection,
        id: EntryId,
    },
    Reorder {
        section: PortfolioSection,
        from: usize,
        to: usize,
    },
    ReplaceEntry {
        entry: PortfolioEntry,
    },
    SetCurrent {
        section: PortfolioSection,
        id: EntryId,
        current: bool,
    },
    AddTag {
        entry_index: usize,
        tag: String,
    },
    RemoveTag {
        entry_index: usize,
        tag_index: usize,
    },
}

/// Result of applying a single edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EditOutcome {
    pub changed: bool,
    /// Id assigned by an `add_entry` op.
    pub added: Option<EntryId>,
}

impl EditOutcome {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            added: None,
        }
    }
}

macro_rules! resume_collection {
    ($content:expr, $section:expr, $items:ident => $body:expr) => {
        match $section {
            ResumeSection::Experience => {
                let $items = &mut $content.experience;
                $body
            }
            ResumeSection::Education => {
                let $items = &mut $content.education;
                $body
            }
            ResumeSection::Skills => {
                let $items = &mut $content.skills;
                $body
            }
            ResumeSection::Projects => {
                let $items = &mut $content.projects;
                $body
            }
            ResumeSection::Certifications => {
                let $items = &mut $content.certifications;
                $body
            }
        }
    };
}

macro_rules! portfolio_collection {
    ($content:expr, $section:expr, $items:ident => $body:expr) => {
        match $section {
            PortfolioSection::Skills => {
                let $items = &mut $content.skills;
                $body
            }
            PortfolioSection::Projects => {
                let $items = &mut $content.projects;
                $body
            }
            PortfolioSection::Experiences => {
                let $items = &mut $content.experiences;
                $body
            }
            PortfolioSection::Education => {
                let $items = &mut $content.education;
                $body
            }
            PortfolioSection::Testimonials => {
                let $items = &mut $content.testimonials;
                $body
            }
        }
    };
}

fn insert_resume_entry(content: &mut ResumeContent, entry: ResumeEntry) -> EntryId {
    match entry {
        ResumeEntry::Experience(e) => add_entry(&mut content.experience, e),
        ResumeEntry::Education(e) => add_entry(&mut content.education, e),
        ResumeEntry::Skills(e) => add_entry(&mut content.skills, e),
        ResumeEntry::Projects(e) => add_entry(&mut content.projects, e),
        ResumeEntry::Certifications(e) => add_entry(&mut content.certifications, e),
    }
}

fn replace_resume_entry(content: &mut ResumeContent, entry: ResumeEntry) -> bool {
    match entry {
        ResumeEntry::Experience(mut e) => {
            e.normalize_current();
            replace_entry(&mut content.experience, e)
        }
        ResumeEntry::Education(mut e) => {
            e.normalize_current();
            replace_entry(&mut content.education, e)
        }
        ResumeEntry::Skills(e) => replace_entry(&mut content.skills, e),
        ResumeEntry::Projects(e) => replace_entry(&mut content.projects, e),
        ResumeEntry::Certifications(e) => replace_entry(&mut content.certifications, e),
    }
}

fn insert_portfolio_entry(content: &mut PortfolioContent, entry: PortfolioEntry) -> EntryId {
    match entry {
        PortfolioEntry::Skills(e) => add_entry(&mut content.skills, e),
        PortfolioEntry::Projects(e) => add_entry(&mut content.projects, e),
        PortfolioEntry::Experiences(e) => add_entry(&mut content.experiences, e),
        PortfolioEntry::Education(e) => add_entry(&mut content.education, e),
        PortfolioEntry::Testimonials(e) => add_entry(&mut content.testimonials, e),
    }
}

fn replace_portfolio_entry(content: &mut PortfolioContent, entry: PortfolioEntry) -> bool {
    match entry {
        PortfolioEntry::Skills(e) => replace_entry(&mut content.skills, e),
        PortfolioEntry::Projects(mut e) => {
            e.tags = normalize_tags(std::mem::take(&mut e.tags));
            replace_entry(&mut content.projects, e)
        }
        PortfolioEntry::Experiences(mut e) => {
            e.normalize_current();
            replace_entry(&mut content.experiences, e)
        }
        PortfolioEntry::Education(mut e) => {
            e.normalize_current();
            replace_entry(&mut content.education, e)
        }
        PortfolioEntry::Testimonials(e) => replace_entry(&mut content.testimonials, e),
    }
}

fn toggle_current<T: Dated>(items: &mut [T], id: EntryId, current: bool) -> bool {
    match find_entry_mut(items, id) {
        Some(entry) => {
            entry.set_current(current);
            true
        }
        None => false,
    }
}

impl ResumeDraft {
    pub fn apply(&mut self, edit: ResumeEdit) -> EditOutcome {
        let content = &mut self.content;
        match edit {
            ResumeEdit::SetTitle { title } => {
                EditOutcome::changed(std::mem::replace(&mut self.title, title) != self.title)
            }
            ResumeEdit::SetTemplate { template } => {
                EditOutcome::changed(std::mem::replace(&mut self.template, template) != template)
            }
            ResumeEdit::SetPersonalInfo { personal_info } => EditOutcome::changed(
                std::mem::replace(&mut content.personal_info, personal_info)
                    != content.personal_info,
            ),
            ResumeEdit::AddEntry { section } => {
                let id = insert_resume_entry(content, ResumeEntry::blank(section, EntryId::new()));
                EditOutcome {
                    changed: true,
                    added: Some(id),
                }
            }
            ResumeEdit::RemoveEntry { section, id } => EditOutcome::changed(resume_collection!(
                content, section, items => remove_entry(items, id)
            )),
            ResumeEdit::Reorder { section, from, to } => EditOutcome::changed(resume_collection!(
                content, section, items => reorder(items, from, to)
            )),
            ResumeEdit::ReplaceEntry { entry } => {
                EditOutcome::changed(replace_resume_entry(content, entry))
            }
            ResumeEdit::SetCurrent {
                section,
                id,
                current,
            } => EditOutcome::changed(match section {
                ResumeSection::Experience => toggle_current(&mut content.experience, id, current),
                ResumeSection::Education => toggle_current(&mut content.education, id, current),
                _ => false,
            }),
        }
    }
}

impl PortfolioDraft {
    pub fn apply(&mut self, edit: PortfolioEdit) -> EditOutcome {
        let content = &mut self.content;
        match edit {
            PortfolioEdit::SetTitle { title } => {
                EditOutcome::changed(std::mem::replace(&mut self.title, title) != self.title)
            }
            PortfolioEdit::SetTemplate { template } => {
                EditOutcome::changed(std::mem::replace(&mut self.template, template) != template)
            }
            PortfolioEdit::SetPersonalInfo { personal_info } => EditOutcome::changed(
                std::mem::replace(&mut content.personal_info, personal_info)
                    != content.personal_info,
            ),
            PortfolioEdit::SetSocial { social } => EditOutcome::changed(
                std::mem::replace(&mut content.social, social) != content.social,
            ),
            PortfolioEdit::SetContact { contact } => EditOutcome::changed(
                std::mem::replace(&mut content.contact, contact) != content.contact,
            ),
            PortfolioEdit::AddEntry { section } => {
                let id =
                    insert_portfolio_entry(content, PortfolioEntry::blank(section, EntryId::new()));
                EditOutcome {
                    changed: true,
                    added: Some(id),
                }
            }
            PortfolioEdit::RemoveEntry { section, id } => {
                EditOutcome::changed(portfolio_collection!(
                    content, section, items => remove_entry(items, id)
                ))
            }
            PortfolioEdit::Reorder { section, from, to } => {
                EditOutcome::changed(portfolio_collection!(
                    content, section, items => reorder(items, from, to)
                ))
            }
            PortfolioEdit::ReplaceEntry { entry } => {
                EditOutcome::changed(replace_portfolio_entry(content, entry))
            }
            PortfolioEdit::SetCurrent {
                section,
                id,
                current,
            } => EditOutcome::changed(match section {
                PortfolioSection::Experiences => {
                    toggle_current(&mut content.experiences, id, current)
                }
                PortfolioSection::Education => toggle_current(&mut content.education, id, current),
                _ => false,
            }),
            PortfolioEdit::AddTag { entry_index, tag } => {
                EditOutcome::changed(add_tag(&mut content.projects, entry_index, &tag))
            }
            PortfolioEdit::RemoveTag {
                entry_index,
                tag_index,
            } => EditOutcome::changed(remove_tag(&mut content.projects, entry_index, tag_index)),
        }
    }
}
