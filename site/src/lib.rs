//! # nla-site
//!
//! Leptos SSR renderer for the Network Log Analyser landing page.
//!
//! The page is a fixed sequence of static content sections (navbar, hero,
//! problem statement, features, team, footer) rendered to a single HTML
//! document. There is no data fetching and no client-side JavaScript; the
//! only value computed at render time is the footer's calendar year.
//!
//! ## Quick Start
//!
//! ```rust
//! use nla_site::{render_page, types::PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! Content that is authored but excluded by default (the Demo section and the
//! Expected Solution block) is switched back on through [`types::PageOptions`]:
//!
//! ```rust
//! use nla_site::{render_page_for_year, types::PageOptions};
//!
//! let options = PageOptions { show_demo: true, ..Default::default() };
//! let html = render_page_for_year(&options, 2025);
//! assert!(html.contains("Usage Examples"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - section ids, section order and page toggles
//! - [`content`] - the literal text of the page
//! - [`components`] - Leptos components, one per section
//! - [`styles`] - inline CSS and the Content-Security-Policy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;
pub mod types;

use chrono::Datelike;
use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::PageOptions;

/// Render the landing page with the current calendar year in the footer.
pub fn render_page(options: &PageOptions) -> String {
    render_page_for_year(options, current_year())
}

/// Render the landing page with an explicit footer year.
///
/// Output is a complete HTML document including `<!DOCTYPE html>`, and is
/// byte-identical for identical arguments.
///
/// # Example
///
/// ```rust
/// use nla_site::{render_page_for_year, types::PageOptions};
///
/// let html = render_page_for_year(&PageOptions::default(), 2025);
/// assert!(html.contains("© 2025 Network Log Analyser Project"));
/// ```
pub fn render_page_for_year(options: &PageOptions, year: i32) -> String {
    let options = *options;
    let doc = view! { <SiteDocument options=options year=year /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::SectionId;

    /// Positions of each `data-section` tag, in document order.
    fn rendered_sections(html: &str) -> Vec<String> {
        html.match_indices("data-section=\"")
            .map(|(idx, marker)| {
                let rest = &html[idx + marker.len()..];
                rest[..rest.find('"').unwrap()].to_string()
            })
            .collect()
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page_for_year(&PageOptions::default(), 2025);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Network Log Analyser</title>"));
        assert!(html.contains("<main>"));
    }

    #[test]
    fn default_page_section_order() {
        let html = render_page_for_year(&PageOptions::default(), 2025);

        assert_eq!(
            rendered_sections(&html),
            vec!["navbar", "hero", "problem_statement", "features", "team", "footer"]
        );
    }

    #[test]
    fn rendered_order_matches_layout() {
        for show_demo in [false, true] {
            let options = PageOptions {
                show_demo,
                show_expected_solution: false,
            };
            let html = render_page_for_year(&options, 2025);
            let expected: Vec<String> = options
                .layout()
                .into_iter()
                .map(|s| s.as_str().to_string())
                .collect();

            assert_eq!(rendered_sections(&html), expected);
        }
    }

    #[test]
    fn demo_is_absent_by_default() {
        let html = render_page_for_year(&PageOptions::default(), 2025);

        assert!(!html.contains("data-section=\"demo\""));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("frame-src"));
    }

    #[test]
    fn demo_renders_when_enabled() {
        let options = PageOptions {
            show_demo: true,
            ..Default::default()
        };
        let html = render_page_for_year(&options, 2025);

        assert!(html.contains("id=\"demo\""));
        assert!(html.contains("https://www.youtube.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains("$ ./loganalyser -f logfile.log -r rules/ttp_rules.txt"));
        assert!(html.contains("frame-src https://www.youtube.com"));
    }

    #[test]
    fn footer_uses_current_year() {
        let html = render_page(&PageOptions::default());
        let expected = format!("© {} Network Log Analyser Project", current_year());

        assert!(html.contains(&expected));
    }

    #[test]
    fn rerender_is_identical_for_same_year() {
        let options = PageOptions::default();
        assert_eq!(
            render_page_for_year(&options, 2031),
            render_page_for_year(&options, 2031)
        );
    }

    #[test]
    fn only_footer_changes_across_years() {
        let options = PageOptions::default();
        let before = render_page_for_year(&options, 2030);
        let after = render_page_for_year(&options, 2031);

        assert_ne!(before, after);
        assert_eq!(before.replace("© 2030", "© 2031"), after);
    }

    #[test]
    fn every_section_id_is_reachable() {
        let options = PageOptions {
            show_demo: true,
            show_expected_solution: true,
        };
        let html = render_page_for_year(&options, 2025);

        for section in SectionId::ALL {
            assert!(
                html.contains(&format!("data-section=\"{}\"", section.as_str())),
                "missing {:?}",
                section
            );
        }
    }
}
