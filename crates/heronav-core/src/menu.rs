//! Static hierarchical menu model
//!
//! Nesting depth is capped at one level by construction: children are
//! [`MenuLink`] values, which cannot own children of their own.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A leaf link inside a sub-menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuLink {
    /// Display label
    pub name: String,
    /// Target locator
    pub href: String,
}

impl MenuLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// A top-level navigation entry, optionally owning one level of children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuEntry {
    /// Display label
    pub name: String,
    /// Target locator
    pub href: String,
    /// Child links in display order (empty means no sub-menu)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuLink>,
}

impl MenuEntry {
    /// Entry without a sub-menu
    pub fn link(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }

    /// Entry with a sub-menu
    pub fn with_children(
        name: impl Into<String>,
        href: impl Into<String>,
        children: Vec<MenuLink>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Read-only ordered sequence of top-level entries
///
/// Cloning is cheap; every clone shares the same entries.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuModel {
    entries: Arc<[MenuEntry]>,
}

impl MenuModel {
    /// Build a model, panicking if an entry violates the menu contract.
    ///
    /// Use this for menus written in code, where a bad entry is a programming
    /// error. Menus coming from configuration files go through [`Self::try_new`].
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        match Self::try_new(entries) {
            Ok(model) => model,
            Err(e) => panic!("invalid menu model: {e}"),
        }
    }

    /// Build a model, validating labels and targets.
    pub fn try_new(entries: Vec<MenuEntry>) -> Result<Self, CoreError> {
        for (i, entry) in entries.iter().enumerate() {
            validate_link(&entry.name, &entry.href, || format!("menu[{i}]"))?;
            for (j, child) in entry.children.iter().enumerate() {
                validate_link(&child.name, &child.href, || {
                    format!("menu[{i}].children[{j}]")
                })?;
            }
        }

        Ok(Self {
            entries: entries.into(),
        })
    }

    /// Entries in display order
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Menu of the original site header
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_link(name: &str, href: &str, path: impl Fn() -> String) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::EmptyLabel { path: path() });
    }
    if href.trim().is_empty() {
        return Err(CoreError::EmptyHref { path: path() });
    }
    Ok(())
}

fn links(items: &[(&str, &str)]) -> Vec<MenuLink> {
    items
        .iter()
        .map(|(name, href)| MenuLink::new(*name, *href))
        .collect()
}

/// Entries used when no configuration overrides the menu
pub fn builtin_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::with_children(
            "About Us",
            "#about",
            links(&[
                ("Profile", "#profile"),
                ("Awards", "#awards"),
                ("Memberships", "#memberships"),
                ("Certifications", "#certifications"),
                ("Quality Policy", "#quality-policy"),
            ]),
        ),
        MenuEntry::with_children(
            "Our Services",
            "#services",
            links(&[
                ("Air Freight", "#air-freight"),
                ("Ocean Freight", "#ocean-freight"),
                ("Cargo Consolidation", "#cargo-consolidation"),
                ("Warehousing", "#warehousing"),
                ("Contract Logistics", "#contract-logistics"),
                ("Land Transport", "#land-transport"),
                ("Ship Spares", "#ship-spares"),
            ]),
        ),
        MenuEntry::with_children(
            "Industry Verticals",
            "#verticals",
            links(&[
                ("Building Materials", "#building-materials"),
                ("Commodities", "#commodities"),
                ("Industrial", "#industrial"),
                ("Fashion", "#fashion"),
                ("Consumer", "#consumer"),
                ("Pharmaceuticals", "#pharmaceuticals"),
                ("Chemicals", "#chemicals"),
                ("Oil and Gas", "#oil-and-gas"),
                ("Automotive", "#automotive"),
            ]),
        ),
        MenuEntry::link("Contact", "#contact"),
    ]
}
