//! Portfolio content: built-in defaults, optionally replaced by content.toml

pub mod defaults;
pub mod models;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use models::{
    CallToAction, Credits, Experience, Profile, Project, ProjectImage, SocialLink, StackItem,
};

use crate::pyramid;

/// Everything the page displays. Missing tables fall back to the built-in content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub stack: Vec<StackItem>,
    pub links: Vec<SocialLink>,
    pub credits: Credits,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: defaults::profile(),
            experiences: defaults::experiences(),
            projects: defaults::projects(),
            stack: defaults::stack(),
            links: defaults::links(),
            credits: defaults::credits(),
        }
    }
}

impl Portfolio {
    /// Load content from `path`, or the built-in content when the file is absent
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&text)?;
        info!("Loaded portfolio content from {}", path.display());
        Ok(portfolio)
    }

    /// Parse content from TOML text. Links with unusable hrefs are dropped.
    pub fn from_toml(text: &str) -> crate::Result<Self> {
        let mut portfolio: Self =
            toml::from_str(text).map_err(|e| crate::Error::Content(e.to_string()))?;
        portfolio.links.retain(|link| match link.url() {
            Ok(_) => true,
            Err(e) => {
                warn!("Dropping social link '{}': {}", link.label, e);
                false
            }
        });
        Ok(portfolio)
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Tech stack grouped into reverse-pyramid rows
    pub fn stack_rows(&self) -> Vec<Vec<&StackItem>> {
        pyramid::pack(self.stack.iter())
    }

    /// Pyramid rows as pretty-printed JSON, one array per row
    pub fn stack_rows_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.stack_rows())?)
    }

    /// Find a social link by label, ignoring case
    pub fn find_link(&self, label: &str) -> crate::Result<&SocialLink> {
        self.links
            .iter()
            .find(|link| link.label.eq_ignore_ascii_case(label))
            .ok_or_else(|| crate::Error::LinkNotFound(label.to_string()))
    }
}
