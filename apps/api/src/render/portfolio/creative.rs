use crate::content::PortfolioContent;
use crate::render::portfolio::{
    attribution, avatar, project_image, project_links, quote, tag_list,
};
use crate::render::{
    contact_message, el, entry_block, mailto, portfolio_date_range, section,
    safe_url, skill_meter, social_links, Element,
};

const HEADING: &str = "text-4xl font-bold text-center mb-16 bg-clip-text text-transparent bg-gradient-to-r from-purple-600 to-pink-600";

/// Full-height gradient hero followed by card sections and a gradient contact band.
pub fn render(content: &PortfolioContent) -> Element {
    let info = &content.personal_info;

    let hero = el("header")
        .class("min-h-screen flex items-center justify-center relative overflow-hidden")
        .child(el("div").class("absolute inset-0 bg-gradient-to-br from-purple-500 to-pink-500 opacity-10"))
        .child(
            el("div")
                .class("container mx-auto px-6 py-20 text-center relative z-10")
                .child_opt(safe_url(&info.photo).map(|src| {
                    el("img")
                        .attr("src", src)
                        .attr("alt", &info.name)
                        .class("w-40 h-40 rounded-full mx-auto mb-8 object-cover border-4 border-white shadow-xl")
                }))
                .child(
                    el("h1")
                        .class("text-5xl md:text-6xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-purple-600 to-pink-600")
                        .text(&info.name),
                )
                .child(el("p").class("text-2xl text-gray-600 mb-8").text(&info.title))
                .child(el("p").class("max-w-2xl mx-auto text-gray-600 mb-12").text(&info.bio))
                .child(el("div").class("flex justify-center gap-6").children(social_links(
                    &content.social,
                    "text-gray-600 hover:text-purple-600 transition-colors",
                ))),
        );

    let projects = (!content.projects.is_empty()).then(|| {
        section("projects", "py-20").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Featured Projects"))
                .child(
                    el("div")
                        .class("grid md:grid-cols-2 lg:grid-cols-3 gap-8")
                        .children(content.projects.iter().map(|project| {
                            let image = project_image(
                                project,
                                "w-full h-full object-cover transition-transform group-hover:scale-110",
                            )
                            .map(|img| {
                                el("div")
                                    .class("relative h-48 overflow-hidden")
                                    .child(img)
                                    .child(el("div").class(
                                        "absolute inset-0 bg-gradient-to-t from-black to-transparent opacity-50",
                                    ))
                            });
                            entry_block(project)
                                .class("group relative bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-xl transition-shadow")
                                .child_opt(image)
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
                                            "text-sm bg-purple-50 text-purple-600 px-3 py-1 rounded-full",
                                        ))
                                        .child(project_links(
                                            project,
                                            ("View Project", "Source Code"),
                                            (
                                                "text-purple-600 hover:text-purple-700",
                                                "text-gray-600 hover:text-gray-800",
                                            ),
                                        )),
                                )
                        })),
                ),
        )
    });

    let skills = (!content.skills.is_empty()).then(|| {
        section("skills", "py-20 bg-white").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Skills & Expertise"))
                .child(
                    el("div")
                        .class("grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8")
                        .children(content.skills.iter().map(|skill| {
                            entry_block(skill)
                                .class("bg-gradient-to-br from-purple-50 to-pink-50 p-6 rounded-xl text-center")
                                .child(el("h3").class("font-semibold mb-3").text(&skill.name))
                                .child(skill_meter(
                                    skill.level,
                                    el("div").class("flex justify-center gap-1"),
                                    "div",
                                    "w-2 h-2 rounded-full",
                                    "bg-purple-600",
                                    "bg-purple-200",
                                ))
                        })),
                ),
        )
    });

    let experiences = (!content.experiences.is_empty()).then(|| {
        section("experiences", "py-20").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Work Experience"))
                .child(
                    el("div")
                        .class("max-w-4xl mx-auto space-y-12")
                        .children(content.experiences.iter().map(|exp| {
                            entry_block(exp)
                                .class("bg-white p-8 rounded-xl shadow-lg hover:shadow-xl transition-shadow")
                                .child(
                                    el("div")
                                        .class("flex justify-between items-start mb-4")
                                        .child(
                                            el("div")
                                                .child(
                                                    el("h3")
                                                        .class("text-xl font-semibold")
                                                        .text(&exp.position),
                                                )
                                                .child(
                                                    el("p").class("text-purple-600").text(&exp.company),
                                                ),
                                        )
                                        .child(el("div").class("text-gray-500").text(
                                            portfolio_date_range(&exp.start_date, &exp.end_date),
                                        )),
                                )
                                .child(el("p").class("text-gray-600").text(&exp.description))
                        })),
                ),
        )
    });

    let education = (!content.education.is_empty()).then(|| {
        section("education", "py-20 bg-white").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Education"))
                .child(
                    el("div")
                        .class("max-w-4xl mx-auto grid md:grid-cols-2 gap-8")
                        .children(content.education.iter().map(|edu| {
                            entry_block(edu)
                                .class("bg-gradient-to-br from-purple-50 to-pink-50 p-8 rounded-xl")
                                .child(el("h3").class("text-xl font-semibold mb-2").text(&edu.degree))
                                .child(el("p").class("text-purple-600 mb-1").text(&edu.institution))
                                .child(el("p").class("text-gray-600 mb-2").text(&edu.field))
                                .child(
                                    el("p")
                                        .class("text-gray-500")
                                        .text(portfolio_date_range(&edu.start_date, &edu.end_date)),
                                )
                        })),
                ),
        )
    });

    let testimonials = (!content.testimonials.is_empty()).then(|| {
        section("testimonials", "py-20").child(
            el("div")
                .class("container mx-auto px-6")
                .child(el("h2").class(HEADING).text("Testimonials"))
                .child(
                    el("div")
                        .class("grid md:grid-cols-2 lg:grid-cols-3 gap-8")
                        .children(content.testimonials.iter().map(|t| {
                            entry_block(t)
                                .class("bg-white p-8 rounded-xl shadow-lg")
                                .child(quote(t, "text-gray-600 italic mb-6"))
                                .child(
                                    el("div")
                                        .class("flex items-center")
                                        .child_opt(avatar(t))
                                        .child(
                                            el("div")
                                                .child(el("h3").class("font-semibold").text(&t.name))
                                                .child(attribution(t, "text-purple-600 text-sm")),
                                        ),
                                )
                        })),
                ),
        )
    });

    let contact = section(
        "contact",
        "py-20 bg-gradient-to-br from-purple-600 to-pink-600 text-white",
    )
    .child(
        el("div")
            .class("container mx-auto px-6 text-center")
            .child(el("h2").class("text-4xl font-bold mb-8").text("Let's Connect"))
            .child(
                el("p")
                    .class("max-w-2xl mx-auto mb-12 text-purple-100")
                    .text(contact_message(&content.contact)),
            )
            .child_opt(mailto(
                &info.email,
                "inline-block bg-white text-purple-600 px-8 py-4 rounded-full font-semibold hover:bg-purple-50 transition-colors",
                "Get in Touch",
            )),
    );

    el("div")
        .class("min-h-screen bg-gradient-to-br from-purple-50 to-pink-50")
        .child(hero)
        .child_opt(projects)
        .child_opt(skills)
        .child_opt(experiences)
        .child_opt(education)
        .child_opt(testimonials)
        .child(contact)
}
