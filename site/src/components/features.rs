use super::ContentSection;
use crate::content::FEATURES;
use crate::types::SectionId;
use leptos::prelude::*;

/// Key features, one bulleted line each, in literal order.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <ContentSection section=SectionId::Features heading="Key Features">
            <ul class="bullet-grid">
                {FEATURES
                    .iter()
                    .map(|feature| view! { <li class="feature">{format!("• {}", feature)}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </ContentSection>
    }
}
