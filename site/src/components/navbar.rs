use crate::content::{REPOSITORY_URL, SITE_TITLE};
use crate::types::SectionId;
use leptos::prelude::*;

/// Top bar: site title and the single outbound repository link.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar" data-section={SectionId::Navbar.as_str()}>
            <div class="container navbar-inner">
                <span class="navbar-title">{SITE_TITLE}</span>
                <a
                    class="navbar-link"
                    href=REPOSITORY_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "GitHub →"
                </a>
            </div>
        </nav>
    }
}
