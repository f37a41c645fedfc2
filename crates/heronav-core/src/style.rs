//! Class lists for the two-state style variants
//!
//! Variants are resolved once per render from plain booleans; the class
//! strings target the site's Tailwind build.

use serde::Serialize;

/// Background treatment of the header container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStyle {
    /// Transparent, full-height bar
    Resting,
    /// Blurred translucent background, compact bar on wide viewports
    Elevated,
}

impl ContainerStyle {
    pub fn from_elevated(elevated: bool) -> Self {
        if elevated {
            ContainerStyle::Elevated
        } else {
            ContainerStyle::Resting
        }
    }

    pub fn is_elevated(self) -> bool {
        self == ContainerStyle::Elevated
    }

    pub fn container_class(self) -> &'static str {
        match self {
            ContainerStyle::Resting => {
                "mx-auto max-w-7xl rounded-3xl px-6 transition-all duration-300 lg:px-12"
            }
            ContainerStyle::Elevated => {
                "mx-auto max-w-7xl rounded-3xl px-6 transition-all duration-300 lg:px-12 bg-background/50 backdrop-blur-2xl"
            }
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            ContainerStyle::Resting => {
                "relative flex flex-wrap items-center justify-between gap-6 py-3 duration-200 lg:gap-0 lg:py-6"
            }
            ContainerStyle::Elevated => {
                "relative flex flex-wrap items-center justify-between gap-6 py-3 duration-200 lg:gap-0 lg:py-4"
            }
        }
    }
}

pub const NAV_CLASS: &str = "fixed z-20 w-full pt-2";
pub const ITEM_CLASS: &str = "relative group";
pub const ITEM_WITH_CHILDREN_CLASS: &str = "relative group cursor-pointer";
pub const TOGGLE_CLASS: &str = "relative z-20 -m-2.5 -mr-4 block cursor-pointer p-2.5 lg:hidden";
pub const PANEL_CLASS: &str =
    "bg-background mb-6 w-full flex-wrap items-center justify-end space-y-8 rounded-3xl border p-6 shadow-2xl";

/// Class list of a sub-menu popover
pub fn submenu_class(visible: bool) -> &'static str {
    if visible {
        "absolute left-1/2 top-full z-30 -translate-x-1/2 pt-3 transition-opacity duration-150 visible opacity-100 pointer-events-auto"
    } else {
        "absolute left-1/2 top-full z-30 -translate-x-1/2 pt-3 transition-opacity duration-150 invisible opacity-0 pointer-events-none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevated_variant_adds_blur() {
        assert!(ContainerStyle::Elevated
            .container_class()
            .contains("backdrop-blur-2xl"));
        assert!(!ContainerStyle::Resting
            .container_class()
            .contains("backdrop-blur"));
        assert!(ContainerStyle::Elevated.bar_class().ends_with("lg:py-4"));
    }

    #[test]
    fn test_submenu_class_toggles_visibility() {
        assert!(submenu_class(true).contains(" visible"));
        assert!(submenu_class(false).contains("invisible"));
    }
}
