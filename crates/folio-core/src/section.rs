use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Page sections in document order. Their anchors are a stable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Intro,
    Experience,
    Projects,
    TechStack,
    Credits,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Intro,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::TechStack,
        SectionId::Credits,
    ];

    /// Element id without the leading `#`
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::TechStack => "tech-stack",
            SectionId::Credits => "credits",
        }
    }

    /// Anchor href, e.g. `#tech-stack`
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Intro => "#intro",
            SectionId::Experience => "#experience",
            SectionId::Projects => "#projects",
            SectionId::TechStack => "#tech-stack",
            SectionId::Credits => "#credits",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<SectionId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<SectionId> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::Intro
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().trim_start_matches('#');
        SectionId::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| crate::Error::Other(format!("Unknown section: {}", s)))
    }
}

/// Navigation bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section: SectionId::Intro },
    NavItem { label: "Experience", section: SectionId::Experience },
    NavItem { label: "Projects", section: SectionId::Projects },
    NavItem { label: "Skills", section: SectionId::TechStack },
    NavItem { label: "Credits", section: SectionId::Credits },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_are_stable() {
        let anchors: Vec<_> = NAV_ITEMS.iter().map(|item| item.section.anchor()).collect();
        assert_eq!(
            anchors,
            ["#intro", "#experience", "#projects", "#tech-stack", "#credits"]
        );
    }

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("#tech-stack".parse::<SectionId>().unwrap(), SectionId::TechStack);
        assert_eq!("credits".parse::<SectionId>().unwrap(), SectionId::Credits);
        assert!("about".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(SectionId::Intro.prev(), None);
        assert_eq!(SectionId::Intro.next(), Some(SectionId::Experience));
        assert_eq!(SectionId::Credits.next(), None);
        assert_eq!(SectionId::Credits.prev(), Some(SectionId::TechStack));
    }
}
