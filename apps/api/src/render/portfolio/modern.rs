use crate::content::PortfolioContent;
use crate::render::portfolio::{
    attribution, avatar, project_image, project_links, quote, tag_list,
};
use crate::render::{
    contact_message, el, entry_block, mailto, portfolio_date_range, section,
    safe_url, skill_meter, social_links, Element,
};

const HEADING: &str = "text-3xl font-bold text-center mb-12";

/// Dark hero, alternating light bands per section, dark contact footer.
pub fn render(content: &PortfolioContent) -> Element {
    let info = &content.personal_info;

    let hero = el("header").class("bg-gray-900 text-white py-20").child(
        el("div")
            .class("container mx-auto px-6 text-center")
            .child(
                el("div")
                    .class("mb-8")
                    .child_opt(safe_url(&info.photo).map(|src| {
                        el("img")
                            .attr("src", src)
                            .attr("alt", &info.name)
                            .class("w-32 h-32 rounded-full mx-auto mb-6 object-cover")
                    }))
                    .child(el("h1").class("text-4xl font-bold mb-2").text(&info.name))
                    .child(el("p").class("text-xl text-gray-400").text(&info.title)),
            )
            .child(el("p").class("max-w-2xl mx-auto text-gray-400").text(&info.bio))
            .child(
                el("div")
                    .class("flex justify-center gap-4 mt-8")
                    .children(social_links(&content.social, "text-gray-400 hover:text-white")),
            ),
    );

    let skills = (!content.skills.is_empty()).then(|| {
        section("skills", "py-20 bg-gray-50").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Skills & Expertise"))
                .child(
                    el("div")
                        .class("grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6")
                        .children(content.skills.iter().map(|skill| {
                            entry_block(skill)
                                .class("bg-white p-6 rounded-lg shadow-sm text-center")
                                .child(el("h3").class("font-semibold mb-2").text(&skill.name))
                                .child(skill_meter(
                                    skill.level,
                                    el("div").class("flex justify-center gap-1"),
                                    "div",
                                    "w-2 h-2 rounded-full",
                                    "bg-blue-500",
                                    "bg-gray-200",
                                ))
                        })),
                ),
        )
    });

    let projects = (!content.projects.is_empty()).then(|| {
        section("projects", "py-20").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Featured Projects"))
                .child(
                    el("div")
                        .class("grid md:grid-cols-2 lg:grid-cols-3 gap-8")
                        .children(content.projects.iter().map(|project| {
                            entry_block(project)
                                .class("bg-white rounded-lg overflow-hidden shadow-lg")
                                .child_opt(project_image(project, "w-full h-48 object-cover"))
                                .child(
                                    el("div")
                                        .class("p-6")
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
                                            "bg-gray-100 text-gray-800 text-sm px-3 py-1 rounded-full",
                                        ))
                                        .child(project_links(
                                            project,
                                            ("Live Demo", "GitHub"),
                                            (
                                                "text-blue-500 hover:text-blue-600",
                                                "text-gray-600 hover:text-gray-800",
                                            ),
                                        )),
                                )
                        })),
                ),
        )
    });

    let experiences = (!content.experiences.is_empty()).then(|| {
        section("experiences", "py-20 bg-gray-50").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Work Experience"))
                .child(
                    el("div")
                        .class("max-w-3xl mx-auto space-y-8")
                        .children(content.experiences.iter().map(|exp| {
                            entry_block(exp)
                                .class("bg-white p-6 rounded-lg shadow-sm")
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
                                                .child(
                                                    el("p").class("text-gray-600").text(&exp.company),
                                                ),
                                        )
                                        .child(
                                            el("div").class("text-gray-500 text-sm").text(
                                                portfolio_date_range(&exp.start_date, &exp.end_date),
                                            ),
                                        ),
                                )
                                .child(el("p").class("text-gray-600").text(&exp.description))
                        })),
                ),
        )
    });

    let education = (!content.education.is_empty()).then(|| {
        section("education", "py-20").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Education"))
                .child(
                    el("div")
                        .class("max-w-3xl mx-auto space-y-8")
                        .children(content.education.iter().map(|edu| {
                            entry_block(edu).class("bg-white p-6 rounded-lg shadow-sm").child(
                                el("div")
                                    .class("flex justify-between items-start mb-2")
                                    .child(
                                        el("div")
                                            .child(
                                                el("h3")
                                                    .class("text-xl font-semibold")
                                                    .text(&edu.degree),
                                            )
                                            .child(
                                                el("p").class("text-gray-600").text(&edu.institution),
                                            )
                                            .child(el("p").class("text-gray-500").text(&edu.field)),
                                    )
                                    .child(
                                        el("div").class("text-gray-500 text-sm").text(
                                            portfolio_date_range(&edu.start_date, &edu.end_date),
                                        ),
                                    ),
                            )
                        })),
                ),
        )
    });

    let testimonials = (!content.testimonials.is_empty()).then(|| {
        section("testimonials", "py-20 bg-gray-50").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Testimonials"))
                .child(
                    el("div")
                        .class("grid md:grid-cols-2 lg:grid-cols-3 gap-8")
                        .children(content.testimonials.iter().map(|t| {
                            entry_block(t)
                                .class("bg-white p-6 rounded-lg shadow-sm")
                                .child(
                                    el("div")
                                        .class("flex items-center mb-4")
                                        .child_opt(avatar(t))
                                        .child(
                                            el("div")
                                                .child(el("h3").class("font-semibold").text(&t.name))
                                                .child(attribution(t, "text-gray-600 text-sm")),
                                        ),
                                )
                                .child(quote(t, "text-gray-600 italic"))
                        })),
                ),
        )
    });

    let contact = section("contact", "py-20 bg-gray-900 text-white").child(
        el("div")
            .class("container mx-auto px-6 text-center")
            .child(el("h2").class("text-3xl font-bold mb-8").text("Get in Touch"))
            .child(
                el("p")
                    .class("max-w-2xl mx-auto mb-8 text-gray-400")
                    .text(contact_message(&content.contact)),
            )
            .child(el("div").class("flex justify-center gap-6").child_opt(mailto(
                &info.email,
                "bg-white text-gray-900 px-6 py-3 rounded-lg font-semibold hover:bg-gray-100 transition-colors",
                "Send Email",
            ))),
    );

    el("div")
        .class("min-h-screen")
        .child(hero)
        .child_opt(skills)
        .child_opt(projects)
        .child_opt(experiences)
        .child_opt(education)
        .child_opt(testimonials)
        .child(contact)
}
