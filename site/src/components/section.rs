//! Shared wrapper for sections inside `<main>`.

use crate::types::SectionId;
use leptos::prelude::*;

/// Section shell: anchor id, `data-section` tag, centered container and an
/// optional `<h2>` heading.
///
/// The section's anchor doubles as a modifier class (`content-section hero`).
#[component]
pub fn ContentSection(
    section: SectionId,
    /// Rendered as the section's `<h2>`
    #[prop(optional)]
    heading: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = format!("content-section {}", section.anchor());

    view! {
        <section id=section.anchor() class=class data-section=section.as_str()>
            <div class="container">
                {heading.map(|title| view! { <h2 class="section-title">{title}</h2> })}
                {children()}
            </div>
        </section>
    }
}
