use super::ContentSection;
use crate::content::{DEMO_VIDEO_URL, SITE_TITLE, USAGE_EXAMPLE};
use crate::types::SectionId;
use leptos::prelude::*;

/// Video embed and verbatim usage examples.
///
/// Only reachable when the page is composed with `show_demo`.
#[component]
pub fn Demo() -> impl IntoView {
    let video_title = format!("{} Demo", SITE_TITLE);

    view! {
        <ContentSection section=SectionId::Demo heading="Demo">
            <div class="demo-frame">
                <iframe
                    src=DEMO_VIDEO_URL
                    title=video_title
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=""
                ></iframe>
            </div>

            <h3 class="block-title">"Usage Examples"</h3>
            <pre class="usage-example">{USAGE_EXAMPLE}</pre>
        </ContentSection>
    }
}
