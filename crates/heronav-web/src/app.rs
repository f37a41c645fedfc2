//! Demo page hosting the header

use leptos::prelude::*;

use heronav_core::HeaderContent;

use crate::components::HeroHeader;

/// Header over a tall page with one section per top-level entry
#[component]
pub fn App() -> impl IntoView {
    let content = HeaderContent::default();
    let sections: Vec<(String, String)> = content
        .menu
        .entries()
        .iter()
        .map(|entry| (entry.href.trim_start_matches('#').to_string(), entry.name.clone()))
        .collect();

    view! {
        <div class="app">
            <HeroHeader content />
            <main class="content">
                {sections
                    .into_iter()
                    .map(|(id, title)| {
                        view! {
                            <section id=id class="min-h-screen pt-32">
                                <h2>{title}</h2>
                            </section>
                        }
                    })
                    .collect_view()}
            </main>
        </div>
    }
}
