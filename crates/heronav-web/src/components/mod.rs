//! Leptos UI components

mod action_links;
mod header;
mod mobile_panel;
mod nav_item;

pub use action_links::ActionLinks;
pub use header::HeroHeader;
pub use mobile_panel::MobilePanel;
pub use nav_item::NavItem;
