//! Template renderer: `(content, template)` to a `Node` tree.
//!
//! Rendering is pure. The same tree feeds the live preview, the HTML export and the
//! PDF export. Collection sections with no entries are omitted entirely.

pub mod node;
mod portfolio;
mod resume;

use crate::content::portfolio::{ContactBlock, SocialLinks};
use crate::content::{
    Entry, PortfolioContent, PortfolioTemplate, ResumeContent, ResumeTemplate, SkillLevel,
};
use crate::editor::draft::Draft;

pub use node::{el, escape_html, Element, Node};

pub const RESUME_ROOT_ID: &str = "resume-preview";
pub const PORTFOLIO_ROOT_ID: &str = "portfolio-preview";

/// Fallback used when a portfolio's contact message is blank.
pub const FALLBACK_CONTACT_MESSAGE: &str =
    "I'm always open to new opportunities and interesting projects.";

/// Number of units in a skill indicator.
pub const SKILL_UNITS: u8 = 5;

pub fn render_draft(draft: &Draft) -> Node {
    match draft {
        Draft::Resume(d) => render_resume(&d.content, d.template),
        Draft::Portfolio(d) => render_portfolio(&d.content, d.template),
    }
}

pub fn render_resume(content: &ResumeContent, template: ResumeTemplate) -> Node {
    let body = match template {
        ResumeTemplate::Professional => resume::professional::render(content),
        ResumeTemplate::Modern => resume::modern::render(content),
        ResumeTemplate::Minimal => resume::minimal::render(content),
    };
    el("div")
        .attr("id", RESUME_ROOT_ID)
        .attr("data-template", template.name())
        .class("border border-gray-200 shadow-sm w-full bg-white text-black")
        .attr("style", "height: 297mm; width: 210mm; max-width: 100%; margin: 0 auto")
        .child(body)
        .into()
}

pub fn render_portfolio(content: &PortfolioContent, template: PortfolioTemplate) -> Node {
    let body = match template {
        PortfolioTemplate::Modern => portfolio::modern::render(content),
        PortfolioTemplate::Minimalist => portfolio::minimalist::render(content),
        PortfolioTemplate::Creative => portfolio::creative::render(content),
    };
    el("div")
        .attr("id", PORTFOLIO_ROOT_ID)
        .attr("data-template", template.name())
        .class("w-full bg-white text-black")
        .child(body)
        .into()
}

// Shared building blocks for the template variants.

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(value)
}

/// A `<section>` tagged with the name of the block it renders.
pub(crate) fn section(name: &'static str, class: &str) -> Element {
    let section = el("section").attr("data-section", name);
    if class.is_empty() {
        section
    } else {
        section.class(class)
    }
}

/// Wrapper for one collection entry, tagged with its stable id.
pub(crate) fn entry_block<E: Entry>(entry: &E) -> Element {
    el("div").attr("data-entry", entry.id().to_string())
}

/// Five units; unit `i` is filled when `i < level`.
pub(crate) fn skill_meter(
    level: SkillLevel,
    container: Element,
    unit_tag: &'static str,
    unit_class: &str,
    filled_class: &str,
    empty_class: &str,
) -> Element {
    container.children((0..SKILL_UNITS).map(|i| {
        let filled = i < level.get();
        let state = if filled { filled_class } else { empty_class };
        el(unit_tag)
            .class(&format!("{unit_class} {state}"))
            .attr("data-filled", if filled { "true" } else { "false" })
    }))
}

/// `start – end`, or whichever side is present. `None` when both are blank.
pub(crate) fn resume_date_range(start: &str, end: &str) -> Option<String> {
    match (non_empty(start), non_empty(end)) {
        (Some(s), Some(e)) => Some(format!("{s} – {e}")),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

pub(crate) fn portfolio_date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

pub(crate) fn contact_message(contact: &ContactBlock) -> &str {
    non_empty(&contact.message).unwrap_or(FALLBACK_CONTACT_MESSAGE)
}

/// External profile links in fixed order, skipping blanks.
pub(crate) fn social_links(social: &SocialLinks, class: &str) -> Vec<Element> {
    [
        (&social.github, "GitHub"),
        (&social.linkedin, "LinkedIn"),
        (&social.twitter, "Twitter"),
        (&social.website, "Website"),
    ]
    .into_iter()
    .filter_map(|(url, label)| external_link(url, class).map(|a| a.text(label)))
    .collect()
}

const SAFE_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// `value` when it is a non-blank web or mail URL. Anything else (`javascript:`,
/// `file:`, `data:`, relative paths) never reaches an `href` or `src`.
pub(crate) fn safe_url(value: &str) -> Option<&str> {
    let url = value.trim();
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    SAFE_SCHEMES
        .iter()
        .any(|scheme| lower.starts_with(scheme))
        .then_some(url)
}

/// Opens in a new tab. `None` when `href` is not a safe URL.
pub(crate) fn external_link(href: &str, class: &str) -> Option<Element> {
    safe_url(href).map(|href| {
        el("a")
            .attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .class(class)
    })
}

pub(crate) fn mailto(email: &str, class: &str, label: &str) -> Option<Element> {
    non_empty(email).map(|email| {
        el("a")
            .attr("href", format!("mailto:{email}"))
            .class(class)
            .text(label)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::common::{Dated, PRESENT};
    use crate::content::portfolio::{PortfolioProjectEntry, TestimonialEntry};
    use crate::content::common::SkillEntry;
    use crate::content::{EducationEntry, EntryId, ExperienceEntry};
    use crate::content::resume::{CertificationEntry, ResumeProjectEntry};
    use crate::models::document::DocumentKind;

    fn sections_named(node: &Node, name: &str) -> usize {
        node.find_all(&|e| e.get_attr("data-section") == Some(name)).len()
    }

    fn filled_units(node: &Node) -> (usize, usize) {
        let filled = node.find_all(&|e| e.get_attr("data-filled") == Some("true")).len();
        let empty = node.find_all(&|e| e.get_attr("data-filled") == Some("false")).len();
        (filled, empty)
    }

    fn skill(name: &str, level: i64) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            level: SkillLevel::new(level),
            ..SkillEntry::new(EntryId::new())
        }
    }

    fn full_resume() -> ResumeContent {
        let mut content = ResumeContent::default();
        content.personal_info.name = "Ada Lovelace".into();
        content.personal_info.email = "ada@example.com".into();
        content.personal_info.summary = "Analyst".into();
        content.experience.push(ExperienceEntry {
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "Jan 2020".into(),
            ..ExperienceEntry::new(EntryId::new())
        });
        content.education.push(EducationEntry {
            institution: "Cambridge".into(),
            degree: "BSc".into(),
            ..EducationEntry::new(EntryId::new())
        });
        content.skills.push(skill("Rust", 4));
        content.projects.push(ResumeProjectEntry {
            name: "Engine".into(),
            ..ResumeProjectEntry::new(EntryId::new())
        });
        content.certifications.push(CertificationEntry {
            name: "CKA".into(),
            ..CertificationEntry::new(EntryId::new())
        });
        content
    }

    fn full_portfolio() -> PortfolioContent {
        let mut content = PortfolioContent::default();
        content.personal_info.name = "Grace".into();
        content.personal_info.email = "grace@example.com".into();
        content.skills.push(skill("Go", 2));
        content.projects.push(PortfolioProjectEntry {
            title: "Compiler".into(),
            tags: vec!["rust".into()],
            ..PortfolioProjectEntry::new(EntryId::new())
        });
        content.experiences.push(ExperienceEntry {
            company: "Navy".into(),
            ..ExperienceEntry::new(EntryId::new())
        });
        content.education.push(EducationEntry::new(EntryId::new()));
        content.testimonials.push(TestimonialEntry {
            text: "Brilliant".into(),
            ..TestimonialEntry::new(EntryId::new())
        });
        content
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resume = full_resume();
        for template in ResumeTemplate::ALL {
            assert_eq!(
                render_resume(&resume, template).to_html(),
                render_resume(&resume, template).to_html()
            );
        }
        let portfolio = full_portfolio();
        for template in PortfolioTemplate::ALL {
            assert_eq!(
                render_portfolio(&portfolio, template).to_html(),
                render_portfolio(&portfolio, template).to_html()
            );
        }
    }

    #[test]
    fn test_empty_resume_sections_are_omitted() {
        let content = ResumeContent::default();
        for template in ResumeTemplate::ALL {
            let node = render_resume(&content, template);
            for name in ["experience", "education", "skills", "projects", "certifications"] {
                assert_eq!(sections_named(&node, name), 0, "{name} in {template:?}");
            }
        }
    }

    #[test]
    fn test_empty_portfolio_sections_are_omitted() {
        let content = PortfolioContent::default();
        for template in PortfolioTemplate::ALL {
            let node = render_portfolio(&content, template);
            for name in ["skills", "projects", "experiences", "education", "testimonials"] {
                assert_eq!(sections_named(&node, name), 0, "{name} in {template:?}");
            }
            assert_eq!(sections_named(&node, "contact"), 1);
        }
    }

    #[test]
    fn test_adding_one_entry_adds_one_block() {
        let mut content = ResumeContent::default();
        content.projects.push(ResumeProjectEntry::new(EntryId::new()));
        for template in ResumeTemplate::ALL {
            let node = render_resume(&content, template);
            assert_eq!(sections_named(&node, "projects"), 1);
            let entries = node.find_all(&|e| e.get_attr("data-entry").is_some());
            assert_eq!(entries.len(), 1, "{template:?}");
        }

        let mut content = PortfolioContent::default();
        content.testimonials.push(TestimonialEntry {
            text: "Great".into(),
            ..TestimonialEntry::new(EntryId::new())
        });
        for template in PortfolioTemplate::ALL {
            let node = render_portfolio(&content, template);
            assert_eq!(sections_named(&node, "testimonials"), 1, "{template:?}");
            let entries = node.find_all(&|e| e.get_attr("data-entry").is_some());
            assert_eq!(entries.len(), 1, "{template:?}");
            assert!(node.to_html().contains("&quot;Great&quot;"), "{template:?}");
        }
    }

    #[test]
    fn test_every_portfolio_template_renders_every_section() {
        let content = full_portfolio();
        for template in PortfolioTemplate::ALL {
            let node = render_portfolio(&content, template);
            for name in ["skills", "projects", "experiences", "education", "testimonials", "contact"] {
                assert_eq!(sections_named(&node, name), 1, "{name} in {template:?}");
            }
        }
    }

    #[test]
    fn test_skill_meter_fills_level_units() {
        for level in 1..=5 {
            let mut resume = ResumeContent::default();
            resume.skills.push(skill("Rust", level));
            let node = render_resume(&resume, ResumeTemplate::Modern);
            assert_eq!(filled_units(&node), (level as usize, 5 - level as usize));

            let mut portfolio = PortfolioContent::default();
            portfolio.skills.push(skill("Rust", level));
            for template in [PortfolioTemplate::Modern, PortfolioTemplate::Creative] {
                let node = render_portfolio(&portfolio, template);
                assert_eq!(filled_units(&node), (level as usize, 5 - level as usize));
            }
        }
    }

    #[test]
    fn test_current_job_renders_present() {
        let mut content = ResumeContent::default();
        let mut job = ExperienceEntry {
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "Jan 2020".into(),
            ..ExperienceEntry::new(EntryId::new())
        };
        job.set_current(true);
        content.experience.push(job);

        assert_eq!(content.experience[0].end_date, PRESENT);
        let html = render_resume(&content, ResumeTemplate::Professional).to_html();
        assert!(html.contains("Jan 2020 – Present"));
    }

    #[test]
    fn test_unknown_stored_template_falls_back_to_first_listed() {
        let resume = full_resume();
        let draft = Draft::from_stored(
            DocumentKind::Resume,
            "CV".into(),
            "Baroque",
            serde_json::to_value(&resume).unwrap(),
        )
        .unwrap();
        assert_eq!(
            render_draft(&draft),
            render_resume(&resume, ResumeTemplate::Professional)
        );

        let portfolio = full_portfolio();
        let draft = Draft::from_stored(
            DocumentKind::Portfolio,
            "Site".into(),
            "",
            serde_json::to_value(&portfolio).unwrap(),
        )
        .unwrap();
        assert_eq!(
            render_draft(&draft),
            render_portfolio(&portfolio, PortfolioTemplate::Modern)
        );
    }

    #[test]
    fn test_safe_url_allows_only_web_and_mail_schemes() {
        assert_eq!(safe_url(" https://x.dev/a "), Some("https://x.dev/a"));
        assert_eq!(safe_url("HTTP://x.dev"), Some("HTTP://x.dev"));
        assert_eq!(safe_url("mailto:a@b.c"), Some("mailto:a@b.c"));
        for rejected in ["javascript:alert(1)", "file:///etc/passwd", "data:text/html,x", "/img.png", "  "] {
            assert_eq!(safe_url(rejected), None, "{rejected}");
        }
    }

    #[test]
    fn test_unsafe_urls_are_dropped_from_portfolios() {
        let mut content = PortfolioContent::default();
        content.personal_info.photo = "file:///etc/passwd".into();
        content.social.github = "javascript:alert(1)".into();
        content.social.website = "https://grace.dev".into();
        content.projects.push(PortfolioProjectEntry {
            title: "Compiler".into(),
            image: "file:///var/secret.png".into(),
            live_url: "javascript:steal()".into(),
            github_url: "https://github.com/grace/compiler".into(),
            ..PortfolioProjectEntry::new(EntryId::new())
        });
        content.testimonials.push(TestimonialEntry {
            avatar: "file:///home/user/avatar.png".into(),
            ..TestimonialEntry::new(EntryId::new())
        });

        for template in PortfolioTemplate::ALL {
            let html = render_portfolio(&content, template).to_html();
            assert!(!html.contains("file:"), "{template:?}");
            assert!(!html.contains("javascript:"), "{template:?}");
            assert!(html.contains("href=\"https://grace.dev\""), "{template:?}");
            assert!(
                html.contains("href=\"https://github.com/grace/compiler\""),
                "{template:?}"
            );
        }
    }

    /// Classes the static Tailwind 2 build used for exports does not ship: colour
    /// opacity modifiers such as `from-black/50` and app-local theme tokens.
    fn unsupported_classes(node: &Node) -> Vec<String> {
        node.find_all(&|e| e.get_attr("class").is_some())
            .into_iter()
            .filter_map(|e| e.get_attr("class"))
            .flat_map(str::split_whitespace)
            .filter(|class| {
                let opacity_modifier = class.split_once('/').is_some_and(|(left, _)| {
                    let numerator = left.rsplit('-').next().unwrap_or(left);
                    numerator.len() > 2 || !numerator.chars().all(|c| c.is_ascii_digit())
                });
                opacity_modifier || class.starts_with("border-border") || class.contains("muted")
            })
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_templates_only_use_stock_utility_classes() {
        let resume = full_resume();
        for template in ResumeTemplate::ALL {
            let node = render_resume(&resume, template);
            assert_eq!(unsupported_classes(&node), Vec::<String>::new(), "{template:?}");
        }
        let portfolio = full_portfolio();
        for template in PortfolioTemplate::ALL {
            let node = render_portfolio(&portfolio, template);
            assert_eq!(unsupported_classes(&node), Vec::<String>::new(), "{template:?}");
        }
    }

    #[test]
    fn test_blank_contact_message_uses_fallback() {
        let mut content = PortfolioContent::default();
        content.contact.message = "  ".into();
        let html = render_portfolio(&content, PortfolioTemplate::Minimalist).to_html();
        assert!(html.contains("I&#x27;m always open to new opportunities"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut content = ResumeContent::default();
        content.personal_info.name = "<b>Eve</b>".into();
        let html = render_resume(&content, ResumeTemplate::Minimal).to_html();
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(!html.contains("<b>Eve"));
    }

    #[test]
    fn test_date_range_helpers() {
        assert_eq!(resume_date_range("2019", "2021").as_deref(), Some("2019 – 2021"));
        assert_eq!(resume_date_range("", "2021").as_deref(), Some("2021"));
        assert_eq!(resume_date_range(" ", ""), None);
        assert_eq!(portfolio_date_range("2019", PRESENT), "2019 - Present");
    }
}
