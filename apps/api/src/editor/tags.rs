//! Tag sub-editor for portfolio projects. Tags are an insertion-ordered set.

use crate::content::portfolio::PortfolioProjectEntry;

/// Adds a trimmed tag to the project at `entry_index`.
/// Blank tags, duplicates and out-of-range indices leave the projects untouched.
pub fn add_tag(projects: &mut [PortfolioProjectEntry], entry_index: usize, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() {
        return false;
    }
    let Some(project) = projects.get_mut(entry_index) else {
        return false;
    };
    if project.tags.iter().any(|existing| existing == tag) {
        return false;
    }
    project.tags.push(tag.to_string());
    true
}

/// Brings a whole tag list into set form: trimmed, no blanks, first occurrence kept.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !normalized.iter().any(|existing| existing == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

pub fn remove_tag(
    projects: &mut [PortfolioProjectEntry],
    entry_index: usize,
    tag_index: usize,
) -> bool {
    match projects.get_mut(entry_index) {
        Some(project) if tag_index < project.tags.len() => {
            project.tags.remove(tag_index);
            true
        }
        _ => false,
    }
}
