//! Vertical menu shown below the breakpoint while the panel is open

use leptos::prelude::*;

use heronav_core::style;
use heronav_core::view::PanelLayout;

use crate::components::ActionLinks;

/// Full menu tree with children always expanded
#[component]
pub fn MobilePanel(panel: PanelLayout) -> impl IntoView {
    view! {
        <div class=format!("{} lg:hidden", style::PANEL_CLASS)>
            <ul class="space-y-4 text-base">
                {panel
                    .items
                    .into_iter()
                    .map(|item| {
                        let children = (!item.children.is_empty())
                            .then(|| {
                                view! {
                                    <ul class="mt-2 space-y-1 pl-4 text-sm text-muted-foreground">
                                        {item
                                            .children
                                            .into_iter()
                                            .map(|child| {
                                                view! {
                                                    <li>
                                                        <a href=child.href class="block">
                                                            {child.name}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                            });

                        view! {
                            <li>
                                <a
                                    href=item.href
                                    class="text-muted-foreground hover:text-accent-foreground block duration-150"
                                >
                                    <span>{item.name}</span>
                                </a>
                                {children}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ActionLinks actions=panel.actions />
        </div>
    }
}
