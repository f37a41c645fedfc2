//! Header component

use leptos::prelude::*;
use std::rc::Rc;

use heronav_core::style::{self, ContainerStyle};
use heronav_core::{
    ElevationPolicy, HeaderContent, HeaderInstance, HeaderView, ScrollProgressObserver,
    Subscription,
};

use crate::components::{ActionLinks, MobilePanel, NavItem};
use crate::scroll::WindowScroll;

/// Site header: horizontal menu on wide screens, toggle + panel below `lg`
///
/// The disclosure controller exists from the first render so the toggle is
/// live before hydration finishes. The scroll subscription is attached once
/// the component is live in the browser and released when its owner is
/// cleaned up.
#[component]
pub fn HeroHeader(
    #[prop(optional)] content: Option<HeaderContent>,
    #[prop(optional)] policy: Option<ElevationPolicy>,
) -> impl IntoView {
    let content = content.unwrap_or_default();
    let policy = policy.unwrap_or_default();

    let header = HeaderInstance::new(content.clone());
    let (elevated, set_elevated) = signal(false);
    let (panel, set_panel) = signal(header.panel());
    let panel_watch = StoredValue::new_local(header.watch_panel(move |now| set_panel.set(now)));
    let instance = StoredValue::new_local(header);

    Effect::new(move |_| {
        if instance.with_value(HeaderInstance::is_subscribed) {
            return;
        }
        let Some(source) = WindowScroll::new() else {
            leptos::logging::warn!("No window available, header stays resting");
            return;
        };

        let observer = ScrollProgressObserver::new(Rc::new(source));
        instance.update_value(|header| {
            header.attach_scroll(&observer, policy, move |now| set_elevated.set(now));
            set_elevated.set(header.is_elevated());
        });
    });

    on_cleanup(move || {
        instance.try_update_value(HeaderInstance::release_scroll);
        panel_watch.try_update_value(Subscription::release);
    });

    let on_toggle = move |_| {
        instance.with_value(|header| {
            header.toggle();
        });
    };

    let view_model = HeaderView::new(&content);
    let bar_items = view_model.bar_items();
    let mobile_panel = view_model.panel();
    let actions = content.actions.clone();
    let home = content.home.clone();

    let variant = move || ContainerStyle::from_elevated(elevated.get());

    view! {
        <header>
            <nav class=style::NAV_CLASS data-state=move || panel.get().data_state()>
                <div class=move || variant().container_class()>
                    <div class=move || variant().bar_class()>
                        <div class="flex w-full items-center justify-between gap-12 lg:w-auto">
                            <a href=home.href aria-label=home.label class="flex items-center space-x-2">
                                <span class="logo"></span>
                            </a>

                            <button
                                class=style::TOGGLE_CLASS
                                on:click=on_toggle
                                aria-label=move || panel.get().toggle_label()
                                aria-expanded=move || panel.get().is_open().to_string()
                            >
                                <span class="menu-icon" aria-hidden="true">
                                    {move || if panel.get().is_open() { "✕" } else { "☰" }}
                                </span>
                            </button>

                            <div class="hidden lg:block">
                                <ul class="flex gap-8 text-sm">
                                    {bar_items
                                        .into_iter()
                                        .map(|item| view! { <NavItem item /> })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>

                        <div class="hidden lg:flex lg:w-fit lg:gap-6">
                            <ActionLinks actions />
                        </div>

                        <Show when=move || panel.get().is_open()>
                            <MobilePanel panel=mobile_panel.clone() />
                        </Show>
                    </div>
                </div>
            </nav>
        </header>
    }
}
