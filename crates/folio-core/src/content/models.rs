use serde::{Deserialize, Serialize};
use url::Url;

use crate::section::SectionId;

/// Hero section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Small caps line above the name
    pub headline: String,
    pub tagline: String,
    /// Alt text shown in place of the portrait
    #[serde(default)]
    pub portrait: Option<String>,
    #[serde(default)]
    pub calls_to_action: Vec<CallToAction>,
}

/// Hero button that scrolls to a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub target: SectionId,
    /// Filled button style instead of outlined
    #[serde(default)]
    pub primary: bool,
}

/// One entry of the career timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub company: String,
    pub highlights: String,
}

/// Technology tag (name + icon glyph)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackItem {
    pub name: String,
    pub icon: String,
}

impl StackItem {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Image shown in a project's carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<StackItem>,
    /// Caption shown when the project has no images
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    /// Parse the href, rejecting anything that is not an absolute URL
    pub fn url(&self) -> crate::Result<Url> {
        Url::parse(&self.href).map_err(|e| crate::Error::Link(format!("{}: {}", self.href, e)))
    }

    /// Web links open in a browser; others (mailto:) go to their handler
    pub fn is_web(&self) -> bool {
        self.url()
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false)
    }
}

/// Footer content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    pub lines: Vec<String>,
    pub owner: String,
    /// Copyright year; the current year when absent
    #[serde(default)]
    pub year: Option<i32>,
}

impl Credits {
    pub fn footer(&self, current_year: i32) -> String {
        format!(
            "Designed and Developed by {} © {}",
            self.owner,
            self.year.unwrap_or(current_year)
        )
    }
}
