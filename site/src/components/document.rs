//! Root document component - the complete HTML page.
//!
//! This is the page composer: navbar, the toggled `<main>` sections in
//! [`PageOptions::layout`] order, then the footer.

use super::{Demo, Features, Footer, Hero, Navbar, ProblemStatement, Team};
use crate::content::{HERO_DESCRIPTION, SITE_TITLE};
use crate::styles::{SITE_CSS, content_security_policy};
use crate::types::{PageOptions, SectionId};
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn SiteDocument(
    #[prop(default = PageOptions::default())] options: PageOptions,
    /// Calendar year shown in the footer
    year: i32,
) -> impl IntoView {
    let csp = content_security_policy(options.show_demo);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <meta name="description" content=HERO_DESCRIPTION />
                <title>{SITE_TITLE}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Navbar />
                    <main>
                        {options
                            .main_sections()
                            .into_iter()
                            .filter_map(|section| main_section(section, &options))
                            .collect::<Vec<_>>()}
                    </main>
                    <Footer year=year />
                </div>
            </body>
        </html>
    }
}

/// View for one `<main>` section; `None` for the navbar and footer chrome.
fn main_section(section: SectionId, options: &PageOptions) -> Option<AnyView> {
    let view = match section {
        SectionId::Hero => view! { <Hero /> }.into_any(),
        SectionId::ProblemStatement => view! {
            <ProblemStatement show_expected_solution=options.show_expected_solution />
        }
        .into_any(),
        SectionId::Features => view! { <Features /> }.into_any(),
        SectionId::Demo => view! { <Demo /> }.into_any(),
        SectionId::Team => view! { <Team /> }.into_any(),
        SectionId::Navbar | SectionId::Footer => return None,
    };
    Some(view)
}
