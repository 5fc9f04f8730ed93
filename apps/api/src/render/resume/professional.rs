use crate::content::ResumeContent;
use crate::render::resume::{
    certification_row, contact_lines, education_block, experience_block, project_block,
};
use crate::render::{el, entry_block, non_empty, section, Element};

const HEADING: &str = "text-lg font-semibold text-blue-800 mb-3 border-b border-gray-200 pb-1";

/// Header band, then stacked full-width sections.
pub fn render(content: &ResumeContent) -> Element {
    let info = &content.personal_info;

    let header = el("header")
        .class("mb-6 pb-4 border-b-2 border-gray-300")
        .child(
            el("h1")
                .class("text-3xl font-bold text-blue-800 mb-1")
                .text(&info.name),
        )
        .child(
            el("div")
                .class("flex flex-wrap gap-x-4 gap-y-1 text-sm")
                .children(contact_lines(info)),
        );

    let summary = non_empty(&info.summary).map(|summary| {
        section("summary", "mb-6")
            .child(
                el("h2")
                    .class("text-lg font-semibold text-blue-800 mb-2 border-b border-gray-200 pb-1")
                    .text("Professional Summary"),
            )
            .child(el("p").class("text-sm").text(summary))
    });

    let experience = (!content.experience.is_empty()).then(|| {
        section("experience", "mb-6")
            .child(el("h2").class(HEADING).text("Work Experience"))
            .child(
                el("div")
                    .class("space-y-4")
                    .children(content.experience.iter().map(experience_block)),
            )
    });

    let education = (!content.education.is_empty()).then(|| {
        section("education", "mb-6")
            .child(el("h2").class(HEADING).text("Education"))
            .child(
                el("div")
                    .class("space-y-4")
                    .children(content.education.iter().map(education_block)),
            )
    });

    let skills = (!content.skills.is_empty()).then(|| {
        section("skills", "mb-6")
            .child(el("h2").class(HEADING).text("Skills"))
            .child(
                el("div")
                    .class("flex flex-wrap gap-x-1 gap-y-2")
                    .children(content.skills.iter().map(|skill| {
                        entry_block(skill)
                            .class("bg-blue-50 text-blue-800 px-3 py-1 rounded-full text-sm")
                            .text(&skill.name)
                    })),
            )
    });

    let projects = (!content.projects.is_empty()).then(|| {
        section("projects", "mb-6")
            .child(el("h2").class(HEADING).text("Projects"))
            .child(
                el("div").class("space-y-4").children(
                    content
                        .projects
                        .iter()
                        .map(|p| project_block(p, "text-sm text-blue-700")),
                ),
            )
    });

    let certifications = (!content.certifications.is_empty()).then(|| {
        section("certifications", "mb-6")
            .child(el("h2").class(HEADING).text("Certifications"))
            .child(
                el("div")
                    .class("space-y-2")
                    .children(content.certifications.iter().map(certification_row)),
            )
    });

    el("div")
        .class("flex flex-col min-h-full p-8 font-sans")
        .child(header)
        .child_opt(summary)
        .child_opt(experience)
        .child_opt(education)
        .child_opt(skills)
        .child_opt(projects)
        .child_opt(certifications)
}
