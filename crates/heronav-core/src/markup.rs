//! Static HTML for a [`HeaderLayout`]
//!
//! Used for server-side previews and `heronav render --html`. Sub-menus are
//! written hidden; hover and focus-within rules in the page stylesheet reveal
//! them.

use crate::config::{ActionLink, ActionVariant};
use crate::menu::MenuLink;
use crate::style::{self, ContainerStyle};
use crate::view::{BarItem, HeaderLayout, LayoutBody, PanelLayout, ToggleControl};

/// Render the `<header>` element for `layout`
pub fn render_html(layout: &HeaderLayout) -> String {
    let mut out = String::new();

    out.push_str("<header>");
    match layout.panel_state.data_state() {
        Some(state) => out.push_str(&format!(
            r#"<nav data-state="{}" class="{}">"#,
            state,
            style::NAV_CLASS
        )),
        None => out.push_str(&format!(r#"<nav class="{}">"#, style::NAV_CLASS)),
    }
    out.push_str(&format!(r#"<div class="{}">"#, layout.style.container_class()));
    out.push_str(&format!(r#"<div class="{}">"#, layout.style.bar_class()));

    out.push_str(&format!(
        r#"<a href="{}" aria-label="{}" class="{}"><span class="logo"></span></a>"#,
        html_escape(&layout.home.href),
        html_escape(&layout.home.label),
        HOME_LINK_CLASS
    ));

    match &layout.body {
        LayoutBody::Wide { items, actions } => {
            write_bar(&mut out, items);
            write_actions(&mut out, actions);
        }
        LayoutBody::Narrow { toggle, panel } => {
            write_toggle(&mut out, *toggle);
            if let Some(panel) = panel {
                write_panel(&mut out, panel);
            }
        }
    }

    out.push_str("</div></div></nav></header>");
    out
}

/// Render a minimal standalone page hosting the header
pub fn render_page(layout: &HeaderLayout, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(title),
        PREVIEW_CSS,
        render_html(layout)
    )
}

const HOME_LINK_CLASS: &str = "flex items-center space-x-2";

const ACTIONS_CLASS: &str =
    "flex w-full flex-col items-center space-y-3 sm:flex-row sm:gap-3 sm:space-y-0 md:w-fit";

const PREVIEW_CSS: &str = ".group:hover > .submenu, .group:focus-within > .submenu, \
.submenu:hover { visibility: visible; opacity: 1; pointer-events: auto; }";

fn write_bar(out: &mut String, items: &[BarItem]) {
    out.push_str(r#"<ul class="flex gap-8 text-sm">"#);
    for item in items {
        let class = if item.has_chevron() {
            style::ITEM_WITH_CHILDREN_CLASS
        } else {
            style::ITEM_CLASS
        };
        out.push_str(&format!(r#"<li class="{}">"#, class));
        out.push_str(&format!(
            r#"<a href="{}"><span>{}</span>"#,
            html_escape(&item.href),
            html_escape(&item.name)
        ));
        if item.has_chevron() {
            out.push_str(r#"<span class="chevron" aria-hidden="true">&#9662;</span>"#);
        }
        out.push_str("</a>");

        if let Some(submenu) = &item.submenu {
            out.push_str(&format!(r#"<div class="submenu {}">"#, style::submenu_class(false)));
            write_links(out, &submenu.links, "space-y-1.5 text-sm");
            out.push_str("</div>");
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn write_toggle(out: &mut String, toggle: ToggleControl) {
    out.push_str(&format!(
        r#"<button class="{}" aria-label="{}" aria-expanded="{}"></button>"#,
        style::TOGGLE_CLASS,
        toggle.label,
        toggle.expanded
    ));
}

fn write_panel(out: &mut String, panel: &PanelLayout) {
    out.push_str(&format!(r#"<div class="{}">"#, style::PANEL_CLASS));
    out.push_str(r#"<ul class="space-y-4 text-base">"#);
    for item in &panel.items {
        out.push_str(&format!(
            r#"<li><a href="{}" class="block"><span>{}</span></a>"#,
            html_escape(&item.href),
            html_escape(&item.name)
        ));
        if !item.children.is_empty() {
            write_links(out, &item.children, "mt-2 space-y-1 pl-4 text-sm");
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    write_actions(out, &panel.actions);
    out.push_str("</div>");
}

fn write_links(out: &mut String, links: &[MenuLink], class: &str) {
    out.push_str(&format!(r#"<ul class="{}">"#, class));
    for link in links {
        out.push_str(&format!(
            r#"<li><a href="{}" class="block">{}</a></li>"#,
            html_escape(&link.href),
            html_escape(&link.name)
        ));
    }
    out.push_str("</ul>");
}

fn write_actions(out: &mut String, actions: &[ActionLink]) {
    if actions.is_empty() {
        return;
    }
    out.push_str(&format!(r#"<div class="{}">"#, ACTIONS_CLASS));
    for action in actions {
        let variant = match action.variant {
            ActionVariant::Outline => "btn btn-outline btn-sm",
            ActionVariant::Solid => "btn btn-sm",
        };
        out.push_str(&format!(
            r#"<a href="{}" class="{}"><span>{}</span></a>"#,
            html_escape(&action.href),
            variant,
            html_escape(&action.label)
        ));
    }
    out.push_str("</div>");
}

/// HTML escape for safe output
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Style variant summary, handy for logs and CLI output
pub fn describe_style(style: ContainerStyle) -> &'static str {
    match style {
        ContainerStyle::Resting => "resting",
        ContainerStyle::Elevated => "elevated (blurred background)",
    }
}
