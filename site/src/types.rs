//! Page layout types.
//!
//! The page is a fixed sequence of [`SectionId`]s. [`PageOptions`] carries the
//! two toggles for content that is authored but excluded by default.

use serde::{Deserialize, Serialize};

/// Identifies one content section of the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Top bar with the site title and the repository link
    Navbar,
    /// Title banner
    Hero,
    /// Background and detailed description of the problem
    ProblemStatement,
    /// Bulleted list of tool features
    Features,
    /// Video embed plus usage examples
    Demo,
    /// Team roster
    Team,
    /// Copyright line
    Footer,
}

impl SectionId {
    /// Every section in page order, including the ones that are toggled off by default.
    pub const ALL: [SectionId; 7] = [
        SectionId::Navbar,
        SectionId::Hero,
        SectionId::ProblemStatement,
        SectionId::Features,
        SectionId::Demo,
        SectionId::Team,
        SectionId::Footer,
    ];

    /// Stable machine name, used for `data-section` attributes and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Navbar => "navbar",
            SectionId::Hero => "hero",
            SectionId::ProblemStatement => "problem_statement",
            SectionId::Features => "features",
            SectionId::Demo => "demo",
            SectionId::Team => "team",
            SectionId::Footer => "footer",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Navbar => "Navbar",
            SectionId::Hero => "Hero",
            SectionId::ProblemStatement => "Problem Statement",
            SectionId::Features => "Features",
            SectionId::Demo => "Demo",
            SectionId::Team => "Team",
            SectionId::Footer => "Footer",
        }
    }

    /// Fragment anchor (`#problem-statement`, ...).
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::ProblemStatement => "problem-statement",
            other => other.as_str(),
        }
    }

    /// Whether the section lives inside `<main>` (everything except the chrome).
    pub fn is_main(self) -> bool {
        !matches!(self, SectionId::Navbar | SectionId::Footer)
    }
}

/// Toggles for authored content that is left out of the default page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
    /// Render the Demo section between Features and Team
    pub show_demo: bool,
    /// Render the Expected Solution block inside the Problem Statement
    pub show_expected_solution: bool,
}

impl PageOptions {
    /// The composed section order for these options.
    ///
    /// ```rust
    /// use nla_site::types::{PageOptions, SectionId};
    ///
    /// let order = PageOptions::default().layout();
    /// assert_eq!(order.first(), Some(&SectionId::Navbar));
    /// assert!(!order.contains(&SectionId::Demo));
    /// ```
    pub fn layout(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|section| *section != SectionId::Demo || self.show_demo)
            .collect()
    }

    /// Sections rendered inside `<main>`, in order.
    pub fn main_sections(&self) -> Vec<SectionId> {
        self.layout().into_iter().filter(|s| s.is_main()).collect()
    }
}
