//! Portfolio template variants. Each renders a full single-page site.

pub mod creative;
pub mod minimalist;
pub mod modern;

use crate::content::portfolio::{PortfolioProjectEntry, TestimonialEntry};
use crate::render::{el, external_link, safe_url, Element};

fn tag_list(project: &PortfolioProjectEntry, tag_class: &str) -> Element {
    el("div")
        .class("flex flex-wrap gap-2 mb-4")
        .children(project.tags.iter().map(|tag| el("span").class(tag_class).text(tag)))
}

/// Live and source links. `labels` differ between variants.
fn project_links(
    project: &PortfolioProjectEntry,
    labels: (&str, &str),
    classes: (&str, &str),
) -> Element {
    el("div")
        .class("flex gap-4")
        .child_opt(external_link(&project.live_url, classes.0).map(|a| a.text(labels.0)))
        .child_opt(external_link(&project.github_url, classes.1).map(|a| a.text(labels.1)))
}

fn project_image(project: &PortfolioProjectEntry, class: &str) -> Option<Element> {
    safe_url(&project.image).map(|src| {
        el("img")
            .attr("src", src)
            .attr("alt", &project.title)
            .class(class)
    })
}

fn avatar(testimonial: &TestimonialEntry) -> Option<Element> {
    safe_url(&testimonial.avatar).map(|src| {
        el("img")
            .attr("src", src)
            .attr("alt", &testimonial.name)
            .class("w-12 h-12 rounded-full object-cover mr-4")
    })
}

/// "Position at Company" attribution line.
fn attribution(testimonial: &TestimonialEntry, class: &str) -> Element {
    el("p")
        .class(class)
        .text(format!("{} at {}", testimonial.position, testimonial.company))
}

fn quote(testimonial: &TestimonialEntry, class: &str) -> Element {
    el("p").class(class).text(format!("\"{}\"", testimonial.text))
}
