//! Template identifiers per document kind.
//!
//! Stored rows keep the display name ("Professional", "Modern", ...). Any name that
//! does not match a known template resolves to the kind's first-listed template.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResumeTemplate {
    #[default]
    Professional,
    Modern,
    Minimal,
}

impl ResumeTemplate {
    pub const ALL: [ResumeTemplate; 3] = [
        ResumeTemplate::Professional,
        ResumeTemplate::Modern,
        ResumeTemplate::Minimal,
    ];

    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| {
                let info = t.info();
                info.name.eq_ignore_ascii_case(name) || info.id.eq_ignore_ascii_case(name)
            })
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn info(&self) -> TemplateInfo {
        match self {
            ResumeTemplate::Professional => TemplateInfo {
                id: "professional",
                name: "Professional",
                description: "A clean, traditional template perfect for job applications in corporate settings.",
            },
            ResumeTemplate::Modern => TemplateInfo {
                id: "modern",
                name: "Modern",
                description: "A contemporary design with sidebar for skills and education.",
            },
            ResumeTemplate::Minimal => TemplateInfo {
                id: "minimal",
                name: "Minimal",
                description: "A simple, elegant layout focusing on content with minimal styling.",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioTemplate {
    #[default]
    Modern,
    Minimalist,
    Creative,
}

impl PortfolioTemplate {
    pub const ALL: [PortfolioTemplate; 3] = [
        PortfolioTemplate::Modern,
        PortfolioTemplate::Minimalist,
        PortfolioTemplate::Creative,
    ];

    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|t| {
                let info = t.info();
                info.name.eq_ignore_ascii_case(name) || info.id.eq_ignore_ascii_case(name)
            })
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn info(&self) -> TemplateInfo {
        match self {
            PortfolioTemplate::Modern => TemplateInfo {
                id: "modern",
                name: "Modern",
                description: "A clean, professional design with a light background and blue accents.",
            },
            PortfolioTemplate::Minimalist => TemplateInfo {
                id: "minimalist",
                name: "Minimalist",
                description: "A simple, elegant design focusing on content with minimal styling.",
            },
            PortfolioTemplate::Creative => TemplateInfo {
                id: "creative",
                name: "Creative",
                description: "A bold, colorful design with a dark background and vibrant gradient accents.",
            },
        }
    }
}

macro_rules! name_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                Ok(Self::from_name(&name))
            }
        }
    };
}

name_serde!(ResumeTemplate);
name_serde!(PortfolioTemplate);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name_and_id() {
        assert_eq!(ResumeTemplate::from_name("Modern"), ResumeTemplate::Modern);
        assert_eq!(ResumeTemplate::from_name("minimal"), ResumeTemplate::Minimal);
        assert_eq!(
            PortfolioTemplate::from_name("CREATIVE"),
            PortfolioTemplate::Creative
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_first_listed() {
        assert_eq!(ResumeTemplate::from_name("Baroque"), ResumeTemplate::Professional);
        assert_eq!(PortfolioTemplate::from_name(""), PortfolioTemplate::Modern);
    }

    #[test]
    fn test_stored_unknown_template_deserializes_to_default() {
        let t: PortfolioTemplate = serde_json::from_str("\"Retro\"").unwrap();
        assert_eq!(t, PortfolioTemplate::Modern);
        assert_eq!(
            serde_json::to_string(&ResumeTemplate::Minimal).unwrap(),
            "\"Minimal\""
        );
    }
}
