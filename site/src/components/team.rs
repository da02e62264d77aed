use super::ContentSection;
use crate::content::TEAM;
use crate::types::SectionId;
use leptos::prelude::*;

/// Team roster, one name per line.
#[component]
pub fn Team() -> impl IntoView {
    view! {
        <ContentSection section=SectionId::Team heading="Team">
            <ul class="bullet-grid">
                {TEAM
                    .iter()
                    .map(|member| view! { <li class="member">{*member}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </ContentSection>
    }
}
