use crate::content::PortfolioContent;
use crate::render::portfolio::{
    attribution, avatar, project_image, project_links, quote, tag_list,
};
use crate::render::{
    contact_message, el, entry_block, mailto, portfolio_date_range, section, social_links,
    Element,
};

const HEADING: &str = "text-2xl font-bold mb-8";

/// Single narrow column: header, selected work, experience, skills, education,
/// testimonials.
pub fn render(content: &PortfolioContent) -> Element {
    let info = &content.personal_info;

    let header = el("header")
        .class("text-center mb-20")
        .child(el("h1").class("text-4xl font-bold mb-4").text(&info.name))
        .child(el("p").class("text-xl text-gray-600 mb-6").text(&info.title))
        .child(el("p").class("max-w-2xl mx-auto text-gray-600").text(&info.bio))
        .child(
            el("div")
                .class("flex justify-center gap-6 mt-8")
                .children(social_links(&content.social, "text-gray-600 hover:text-black")),
        );

    let projects = (!content.projects.is_empty()).then(|| {
        section("projects", "mb-20")
            .child(el("h2").class(HEADING).text("Selected Work"))
            .child(
                el("div")
                    .class("space-y-12")
                    .children(content.projects.iter().map(|project| {
                        entry_block(project)
                            .class("grid md:grid-cols-2 gap-8")
                            .child_opt(project_image(
                                project,
                                "w-full h-64 object-cover rounded-lg",
                            ))
                            .child(
                                el("div")
                                    .child(
                                        el("h3")
                                            .class("text-xl font-semibold mb-2")
                                            .text(&project.title),
                                    )
                                    .child(
                                        el("p")
                                            .class("text-gray-600 mb-4")
                                            .text(&project.description),
                                    )
                                    .child(tag_list(
                                        project,
                                        "text-sm text-gray-600 border border-gray-300 px-3 py-1 rounded-full",
                                    ))
                                    .child(project_links(
                                        project,
                                        ("View Project", "Source Code"),
                                        ("text-black hover:text-gray-600", "text-gray-600 hover:text-black"),
                                    )),
                            )
                    })),
            )
    });

    let experiences = (!content.experiences.is_empty()).then(|| {
        section("experiences", "mb-20")
            .child(el("h2").class(HEADING).text("Experience"))
            .child(
                el("div")
                    .class("space-y-8")
                    .children(content.experiences.iter().map(|exp| {
                        entry_block(exp)
                            .child(
                                el("div")
                                    .class("flex justify-between items-start mb-2")
                                    .child(
                                        el("div")
                                            .child(
                                                el("h3")
                                                    .class("text-xl font-semibold")
                                                    .text(&exp.position),
                                            )
                                            .child(el("p").class("text-gray-600").text(&exp.company)),
                                    )
                                    .child(
                                        el("div")
                                            .class("text-gray-500")
                                            .text(portfolio_date_range(&exp.start_date, &exp.end_date)),
                                    ),
                            )
                            .child(el("p").class("text-gray-600").text(&exp.description))
                    })),
            )
    });

    let skills = (!content.skills.is_empty()).then(|| {
        section("skills", "mb-20")
            .child(el("h2").class(HEADING).text("Skills"))
            .child(el("div").class("flex flex-wrap gap-4").children(
                content.skills.iter().map(|skill| {
                    entry_block(skill)
                        .class("border border-gray-200 px-4 py-2 rounded-lg")
                        .text(&skill.name)
                }),
            ))
    });

    let education = (!content.education.is_empty()).then(|| {
        section("education", "mb-20")
            .child(el("h2").class(HEADING).text("Education"))
            .child(
                el("div")
                    .class("space-y-6")
                    .children(content.education.iter().map(|edu| {
                        entry_block(edu).child(
                            el("div")
                                .class("flex justify-between items-start")
                                .child(
                                    el("div")
                                        .child(
                                            el("h3")
                                                .class("text-xl font-semibold")
                                                .text(&edu.degree),
                                        )
                                        .child(el("p").class("text-gray-600").text(&edu.institution))
                                        .child(el("p").class("text-gray-500").text(&edu.field)),
                                )
                                .child(
                                    el("div")
                                        .class("text-gray-500")
                                        .text(portfolio_date_range(&edu.start_date, &edu.end_date)),
                                ),
                        )
                    })),
            )
    });

    let testimonials = (!content.testimonials.is_empty()).then(|| {
        section("testimonials", "mb-20")
            .child(el("h2").class(HEADING).text("Kind Words"))
            .child(
                el("div")
                    .class("space-y-10")
                    .children(content.testimonials.iter().map(|t| {
                        entry_block(t)
                            .class("border-l-2 border-black pl-6")
                            .child(quote(t, "text-gray-600 italic mb-4"))
                            .child(
                                el("div")
                                    .class("flex items-center")
                                    .child_opt(avatar(t))
                                    .child(
                                        el("div")
                                            .child(el("p").class("font-semibold").text(&t.name))
                                            .child(attribution(t, "text-gray-500 text-sm")),
                                    ),
                            )
                    })),
            )
    });

    let contact = section("contact", "text-center")
        .child(el("h2").class("text-2xl font-bold mb-4").text("Get in Touch"))
        .child(
            el("p")
                .class("text-gray-600 mb-8")
                .text(contact_message(&content.contact)),
        )
        .child_opt(mailto(
            &info.email,
            "inline-block border-2 border-black text-black px-8 py-3 rounded-lg font-semibold hover:bg-black hover:text-white transition-colors",
            "Send Email",
        ));

    el("div")
        .class("min-h-screen max-w-4xl mx-auto px-6 py-20")
        .child(header)
        .child_opt(projects)
        .child_opt(experiences)
        .child_opt(skills)
        .child_opt(education)
        .child_opt(testimonials)
        .child(contact)
}
