use crate::content::ResumeContent;
use crate::render::resume::{contact_lines, experience_block, project_block};
use crate::render::{el, entry_block, non_empty, resume_date_range, section, skill_meter, Element};

const HEADING: &str = "text-lg font-semibold mb-3 text-teal-700 border-b border-gray-300 pb-1";

/// One-third sidebar (photo placeholder, contact, skill meters, education,
/// certifications) beside a main column (summary, experience, projects).
pub fn render(content: &ResumeContent) -> Element {
    let info = &content.personal_info;

    let identity = el("div")
        .class("mb-8 text-center")
        .child(el("div").class("w-32 h-32 rounded-full bg-gray-300 mx-auto mb-4"))
        .child(el("h1").class("text-xl font-bold").text(&info.name));

    let contact = section("contact", "")
        .child(el("h2").class(HEADING).text("Contact"))
        .child(el("div").class("space-y-2 text-sm").children(contact_lines(info)));

    let skills = (!content.skills.is_empty()).then(|| {
        section("skills", "")
            .child(el("h2").class(HEADING).text("Skills"))
            .child(
                el("div")
                    .class("space-y-2")
                    .children(content.skills.iter().map(|skill| {
                        entry_block(skill).class("flex flex-col").child(
                            el("div")
                                .class("flex justify-between text-sm mb-1")
                                .child(el("span").text(&skill.name))
                                .child(skill_meter(
                                    skill.level,
                                    el("span"),
                                    "span",
                                    "inline-block w-2 h-2 rounded-full mx-0.5",
                                    "bg-teal-600",
                                    "bg-gray-300",
                                )),
                        )
                    })),
            )
    });

    let education = (!content.education.is_empty()).then(|| {
        section("education", "")
            .child(el("h2").class(HEADING).text("Education"))
            .child(
                el("div")
                    .class("space-y-3")
                    .children(content.education.iter().map(|edu| {
                        entry_block(edu)
                            .class("text-sm")
                            .child(el("div").class("font-semibold").text(&edu.degree))
                            .child(el("div").text(&edu.field))
                            .child(el("div").text(&edu.institution))
                            .child(
                                el("div")
                                    .class("text-gray-600")
                                    .text(
                                        resume_date_range(&edu.start_date, &edu.end_date)
                                            .unwrap_or_default(),
                                    ),
                            )
                    })),
            )
    });

    let certifications = (!content.certifications.is_empty()).then(|| {
        section("certifications", "")
            .child(el("h2").class(HEADING).text("Certifications"))
            .child(
                el("div")
                    .class("space-y-2 text-sm")
                    .children(content.certifications.iter().map(|cert| {
                        entry_block(cert)
                            .child(el("div").class("font-semibold").text(&cert.name))
                            .child(el("div").text(&cert.issuer))
                            .child(el("div").class("text-gray-600").text(&cert.date))
                    })),
            )
    });

    let sidebar = el("div")
        .class("w-1/3 bg-gray-100 p-6 flex flex-col")
        .child(identity)
        .child(
            el("div")
                .class("space-y-6")
                .child(contact)
                .child_opt(skills)
                .child_opt(education)
                .child_opt(certifications),
        );

    let summary = non_empty(&info.summary).map(|summary| {
        section("summary", "mb-6")
            .child(el("h2").class(HEADING).text("Professional Summary"))
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

    let projects = (!content.projects.is_empty()).then(|| {
        section("projects", "mb-6")
            .child(el("h2").class(HEADING).text("Projects"))
            .child(
                el("div").class("space-y-4").children(
                    content
                        .projects
                        .iter()
                        .map(|p| project_block(p, "text-sm text-teal-700")),
                ),
            )
    });

    let main = el("div")
        .class("w-2/3 p-6")
        .child_opt(summary)
        .child_opt(experience)
        .child_opt(projects);

    el("div").class("flex min-h-full").child(sidebar).child(main)
}
