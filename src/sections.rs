use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Element id used as the scroll target.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{0}`")]
pub struct ParseSectionIdError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| ParseSectionIdError(s.to_string()))
    }
}

/// Which sections are in view and which one the nav highlights.
///
/// Leaving the viewport hides a section again, but the active section only
/// moves when another one comes into view.
#[derive(Debug, Clone)]
pub struct SectionVisibility {
    visible: HashSet<SectionId>,
    active: SectionId,
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self {
            visible: HashSet::new(),
            active: SectionId::Home,
        }
    }
}

impl SectionVisibility {
    /// Records one observer entry. Returns true if anything changed.
    pub fn observe(&mut self, section: SectionId, intersecting: bool) -> bool {
        if !intersecting {
            return self.visible.remove(&section);
        }
        let newly_visible = self.visible.insert(section);
        let moved = self.active != section;
        self.active = section;
        newly_visible || moved
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visible.contains(&section)
    }

    pub fn active(&self) -> SectionId {
        self.active
    }
}
