//! Header layout: a pure function of content, elevation, and panel state
//!
//! [`HeaderView::render`] produces a framework-neutral [`HeaderLayout`] that
//! the Leptos component, the HTML markup writer, and the CLI all consume.

use crate::config::{ActionLink, HeaderContent, HomeLink};
use crate::disclosure::PanelState;
use crate::menu::{MenuEntry, MenuLink};
use crate::style::ContainerStyle;
use serde::Serialize;

/// Which arrangement the viewport width selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Horizontal item list with hover sub-menus
    Wide,
    /// Toggle control plus a vertical disclosure panel
    Narrow,
}

impl Presentation {
    pub fn for_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px >= breakpoint_px {
            Presentation::Wide
        } else {
            Presentation::Narrow
        }
    }
}

/// Sub-menu attached to a wide-bar item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submenu {
    pub links: Vec<MenuLink>,
}

/// Top-level item in the wide bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarItem {
    pub name: String,
    pub href: String,
    /// Present iff the entry has children; also drives the chevron marker
    pub submenu: Option<Submenu>,
}

impl BarItem {
    pub fn has_chevron(&self) -> bool {
        self.submenu.is_some()
    }
}

/// Mobile menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub label: &'static str,
    pub expanded: bool,
}

/// Item in the vertical panel; children are always shown inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelItem {
    pub name: String,
    pub href: String,
    pub children: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelLayout {
    pub items: Vec<PanelItem>,
    pub actions: Vec<ActionLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "presentation", rename_all = "lowercase")]
pub enum LayoutBody {
    Wide {
        items: Vec<BarItem>,
        actions: Vec<ActionLink>,
    },
    Narrow {
        toggle: ToggleControl,
        /// `None` while the panel is closed
        panel: Option<PanelLayout>,
    },
}

/// Rendered structure of the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderLayout {
    pub style: ContainerStyle,
    pub panel_state: PanelState,
    pub home: HomeLink,
    pub body: LayoutBody,
}

impl HeaderLayout {
    /// Number of top-level items visible in this layout
    pub fn top_level_count(&self) -> usize {
        match &self.body {
            LayoutBody::Wide { items, .. } => items.len(),
            LayoutBody::Narrow { panel, .. } => panel.as_ref().map_or(0, |p| p.items.len()),
        }
    }

    /// Child count per visible top-level item
    pub fn child_counts(&self) -> Vec<usize> {
        match &self.body {
            LayoutBody::Wide { items, .. } => items
                .iter()
                .map(|item| item.submenu.as_ref().map_or(0, |s| s.links.len()))
                .collect(),
            LayoutBody::Narrow { panel, .. } => panel
                .as_ref()
                .map(|p| p.items.iter().map(|item| item.children.len()).collect())
                .unwrap_or_default(),
        }
    }

    pub fn toggle(&self) -> Option<ToggleControl> {
        match &self.body {
            LayoutBody::Narrow { toggle, .. } => Some(*toggle),
            LayoutBody::Wide { .. } => None,
        }
    }
}

/// Stateless header renderer
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    content: &'a HeaderContent,
}

impl<'a> HeaderView<'a> {
    pub fn new(content: &'a HeaderContent) -> Self {
        Self { content }
    }

    pub fn render(
        &self,
        elevated: bool,
        panel: PanelState,
        presentation: Presentation,
    ) -> HeaderLayout {
        let body = match presentation {
            Presentation::Wide => LayoutBody::Wide {
                items: self.bar_items(),
                actions: self.content.actions.clone(),
            },
            Presentation::Narrow => LayoutBody::Narrow {
                toggle: ToggleControl {
                    label: panel.toggle_label(),
                    expanded: panel.is_open(),
                },
                panel: panel.is_open().then(|| self.panel()),
            },
        };

        HeaderLayout {
            style: ContainerStyle::from_elevated(elevated),
            panel_state: panel,
            home: self.content.home.clone(),
            body,
        }
    }

    /// Items of the wide bar
    pub fn bar_items(&self) -> Vec<BarItem> {
        self.content
            .menu
            .entries()
            .iter()
            .map(|entry| BarItem {
                name: entry.name.clone(),
                href: entry.href.clone(),
                submenu: entry.has_children().then(|| Submenu {
                    links: entry.children.clone(),
                }),
            })
            .collect()
    }

    /// Contents of the open mobile panel
    pub fn panel(&self) -> PanelLayout {
        PanelLayout {
            items: self.content.menu.entries().iter().map(panel_item).collect(),
            actions: self.content.actions.clone(),
        }
    }
}

fn panel_item(entry: &MenuEntry) -> PanelItem {
    PanelItem {
        name: entry.name.clone(),
        href: entry.href.clone(),
        children: entry.children.clone(),
    }
}
