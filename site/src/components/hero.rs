use super::ContentSection;
use crate::content::{HERO_DESCRIPTION, HERO_SUBTITLE, SITE_TITLE};
use crate::types::SectionId;
use leptos::prelude::*;

/// Title banner: product name, subtitle and one-line description.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <ContentSection section=SectionId::Hero>
            <h1 class="hero-title">{SITE_TITLE}</h1>
            <p class="hero-subtitle">{HERO_SUBTITLE}</p>
            <p class="hero-description">{HERO_DESCRIPTION}</p>
        </ContentSection>
    }
}
