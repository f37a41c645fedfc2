//! Call-to-action links ("Login", "Sign Up")

use leptos::prelude::*;

use heronav_core::{ActionLink, ActionVariant};

#[component]
pub fn ActionLinks(actions: Vec<ActionLink>) -> impl IntoView {
    view! {
        <div class="flex w-full flex-col items-center space-y-3 sm:flex-row sm:gap-3 sm:space-y-0 md:w-fit">
            {actions
                .into_iter()
                .map(|action| {
                    let class = match action.variant {
                        ActionVariant::Outline => "btn btn-outline btn-sm",
                        ActionVariant::Solid => "btn btn-sm",
                    };
                    view! {
                        <a href=action.href class=class>
                            <span>{action.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
