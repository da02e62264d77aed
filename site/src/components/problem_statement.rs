//! Problem statement section.

use super::ContentSection;
use crate::content::{BACKGROUND, DETAILED_DESCRIPTION, EXPECTED_SOLUTION, EXPECTED_SOLUTION_POINTS};
use crate::types::SectionId;
use leptos::prelude::*;

/// Background paragraph and the a)-d) detailed description.
///
/// The Expected Solution block is authored but stays out of the page unless
/// `show_expected_solution` is set.
#[component]
pub fn ProblemStatement(#[prop(default = false)] show_expected_solution: bool) -> impl IntoView {
    view! {
        <ContentSection section=SectionId::ProblemStatement heading="Problem Statement">
            <div class="block" data-block="background">
                <h3 class="block-title">"Background"</h3>
                <p class="prose">{BACKGROUND}</p>
            </div>

            <div class="block" data-block="detailed-description">
                <h3 class="block-title">"Detailed Description"</h3>
                <ul class="labelled-list">
                    {DETAILED_DESCRIPTION
                        .iter()
                        .map(|(label, text)| {
                            view! {
                                <li>
                                    <span class="item-label">{*label}</span>
                                    {format!(" {}", text)}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>

            {show_expected_solution.then(|| view! { <ExpectedSolution /> })}
        </ContentSection>
    }
}

#[component]
fn ExpectedSolution() -> impl IntoView {
    view! {
        <div class="block" data-block="expected-solution">
            <h3 class="block-title">"Expected Solution"</h3>
            <p class="prose">{EXPECTED_SOLUTION}</p>
            <ul class="labelled-list">
                {EXPECTED_SOLUTION_POINTS
                    .iter()
                    .map(|(label, text)| {
                        view! {
                            <li>
                                <span class="item-label">{*label}</span>
                                {format!(" {}", text)}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
