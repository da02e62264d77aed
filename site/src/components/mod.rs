//! Leptos UI components for the landing page.
//!
//! Each content section is a `#[component]` function with no runtime input
//! beyond the page toggles. [`SiteDocument`] composes them.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Navbar
//! ├── <main>
//! │   ├── Hero
//! │   ├── ProblemStatement (Expected Solution behind a toggle)
//! │   ├── Features
//! │   ├── Demo (behind a toggle)
//! │   └── Team
//! └── Footer
//! ```
//!
//! Sections inside `<main>` share the [`ContentSection`] wrapper, which tags
//! them with `data-section` and an anchor id.

mod demo;
mod document;
mod features;
mod footer;
mod hero;
mod navbar;
mod problem_statement;
mod section;
mod team;

pub use demo::Demo;
pub use document::SiteDocument;
pub use features::Features;
pub use footer::{Footer, copyright_line};
pub use hero::Hero;
pub use navbar::Navbar;
pub use problem_statement::ProblemStatement;
pub use section::ContentSection;
pub use team::Team;
