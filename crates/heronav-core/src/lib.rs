//! heronav-core - Core library for heronav
//!
//! Menu model, scroll observer, elevation and disclosure state, and the
//! framework-neutral header layout.

pub mod config;
pub mod disclosure;
pub mod elevation;
pub mod error;
pub mod hover;
pub mod instance;
pub mod listeners;
pub mod markup;
pub mod menu;
pub mod scroll;
pub mod style;
pub mod view;

pub use config::{ActionLink, ActionVariant, HeaderConfig, HeaderContent, HomeLink};
pub use disclosure::{DisclosureController, PanelState};
pub use elevation::{elevated, ElevationPolicy, ElevationState, DEFAULT_ELEVATION_THRESHOLD};
pub use error::CoreError;
pub use hover::{HoverDisclosure, Region};
pub use instance::HeaderInstance;
pub use listeners::{ListenerId, ListenerSet, Subscription};
pub use menu::{MenuEntry, MenuLink, MenuModel};
pub use scroll::{ScrollProgressObserver, ScrollSignal, ScrollSource};
pub use style::ContainerStyle;
pub use view::{HeaderLayout, HeaderView, LayoutBody, Presentation};
