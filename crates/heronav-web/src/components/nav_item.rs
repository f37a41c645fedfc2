//! Wide-bar menu item with a hover/focus sub-menu

use leptos::ev::FocusEvent;
use leptos::html::Li;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use heronav_core::style;
use heronav_core::view::BarItem;
use heronav_core::{HoverDisclosure, Region};

/// One top-level item; its sub-menu visibility is local to this item
#[component]
pub fn NavItem(item: BarItem) -> impl IntoView {
    let (hover, set_hover) = signal(HoverDisclosure::default());
    let li_ref = NodeRef::<Li>::new();

    let has_children = item.has_chevron();
    let class = if has_children {
        style::ITEM_WITH_CHILDREN_CLASS
    } else {
        style::ITEM_CLASS
    };

    // Focus moving between links of the same item is not a focus-out
    let on_focusout = move |ev: FocusEvent| {
        let still_inside = ev
            .related_target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .zip(li_ref.get())
            .is_some_and(|(node, li)| li.contains(Some(&node)));
        if !still_inside {
            set_hover.update(|h| *h = h.focus_out());
        }
    };

    let submenu = item.submenu.map(|submenu| {
        let links = submenu.links;
        view! {
            <div
                class=move || style::submenu_class(hover.get().is_visible())
                on:mouseenter=move |_| set_hover.update(|h| *h = h.pointer_enter(Region::ChildList))
                on:mouseleave=move |_| set_hover.update(|h| *h = h.pointer_leave(Region::ChildList))
            >
                <div class="inline-flex min-w-[12rem] max-w-sm overflow-hidden rounded-2xl border border-border/70 bg-background/95 px-4 py-3 text-foreground shadow-2xl backdrop-blur">
                    <ul class="space-y-1.5 text-sm">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href
                                            class="block rounded-md px-2 py-1 hover:bg-accent hover:text-accent-foreground"
                                        >
                                            {link.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        }
    });

    view! {
        <li
            node_ref=li_ref
            class=class
            on:mouseenter=move |_| set_hover.update(|h| *h = h.pointer_enter(Region::Item))
            on:mouseleave=move |_| set_hover.update(|h| *h = h.pointer_leave(Region::Item))
            on:focusin=move |_| set_hover.update(|h| *h = h.focus_in())
            on:focusout=on_focusout
        >
            <a
                href=item.href
                class="flex items-center gap-1 text-muted-foreground hover:text-accent-foreground duration-150"
            >
                <span>{item.name}</span>
                {has_children
                    .then(|| {
                        view! {
                            <span class="chevron h-3 w-3 text-red-600" aria-hidden="true">
                                "▾"
                            </span>
                        }
                    })}
            </a>
            {submenu}
        </li>
    }
}
