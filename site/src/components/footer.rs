use crate::content::COPYRIGHT_HOLDER;
use crate::types::SectionId;
use leptos::prelude::*;

/// Copyright line for the given calendar year.
pub fn copyright_line(year: i32) -> String {
    format!("© {} {}", year, COPYRIGHT_HOLDER)
}

/// Page footer. `year` is read once per render by the caller.
#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer" data-section={SectionId::Footer.as_str()}>
            <div class="container">
                <p class="copyright">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}
