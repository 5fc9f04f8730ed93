//! Resume template variants. All three render into an A4 page root.

pub mod minimal;
pub mod modern;
pub mod professional;

use crate::content::resume::{CertificationEntry, ResumePersonalInfo, ResumeProjectEntry};
use crate::content::{EducationEntry, ExperienceEntry};
use crate::render::{el, entry_block, non_empty, resume_date_range, Element};

/// Email, phone, address and website, each in its own `div`, blanks skipped.
fn contact_lines(info: &ResumePersonalInfo) -> impl Iterator<Item = Element> + '_ {
    [&info.email, &info.phone, &info.address, &info.website]
        .into_iter()
        .filter_map(|value| non_empty(value).map(|v| el("div").text(v)))
}

/// Title/subtitle on the left, date range on the right, optional description below.
fn timeline_block(
    entry: Element,
    title: String,
    subtitle: &str,
    start: &str,
    end: &str,
    description: &str,
) -> Element {
    let dates = resume_date_range(start, end)
        .map(|range| el("div").class("text-sm text-gray-600").text(range));
    entry
        .child(
            el("div")
                .class("flex justify-between items-start mb-1")
                .child(
                    el("div")
                        .child(el("h3").class("font-semibold").text(title))
                        .child(el("div").class("text-sm").text(subtitle)),
                )
                .child_opt(dates),
        )
        .child_opt(non_empty(description).map(|d| el("p").class("text-sm mt-1").text(d)))
}

fn experience_block(job: &ExperienceEntry) -> Element {
    timeline_block(
        entry_block(job),
        job.position.clone(),
        &job.company,
        &job.start_date,
        &job.end_date,
        &job.description,
    )
}

/// "Degree, Field" heading with the institution underneath.
fn education_block(edu: &EducationEntry) -> Element {
    let title = match non_empty(&edu.field) {
        Some(field) => format!("{}, {}", edu.degree, field),
        None => edu.degree.clone(),
    };
    timeline_block(
        entry_block(edu),
        title,
        &edu.institution,
        &edu.start_date,
        &edu.end_date,
        &edu.description,
    )
}

fn project_block(project: &ResumeProjectEntry, url_class: &str) -> Element {
    entry_block(project)
        .child(
            el("div")
                .class("flex justify-between items-start mb-1")
                .child(el("h3").class("font-semibold").text(&project.name))
                .child_opt(
                    non_empty(&project.url).map(|url| el("div").class(url_class).text(url)),
                ),
        )
        .child_opt(non_empty(&project.description).map(|d| el("p").class("text-sm").text(d)))
}

/// Name and issuer on one line, date on the right.
fn certification_row(cert: &CertificationEntry) -> Element {
    entry_block(cert)
        .class("flex justify-between")
        .child(
            el("div")
                .child(el("span").class("font-medium").text(&cert.name))
                .child_opt(non_empty(&cert.issuer).map(|issuer| {
                    el("span")
                        .class("text-sm text-gray-600")
                        .text(format!(", {issuer}"))
                })),
        )
        .child_opt(non_empty(&cert.date).map(|d| el("div").class("text-sm text-gray-600").text(d)))
}
