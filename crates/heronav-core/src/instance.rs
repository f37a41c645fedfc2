//! A mounted header: content plus the state it owns
//!
//! The disclosure controller exists from construction. The scroll
//! subscription (held by the [`ElevationState`]) is acquired at most once,
//! either by [`HeaderInstance::mount`] or later through
//! [`HeaderInstance::attach_scroll`] when the host only provides a scroll
//! source after first render. Unmounting or dropping releases it.

use crate::config::HeaderContent;
use crate::disclosure::{DisclosureController, PanelState};
use crate::elevation::{ElevationPolicy, ElevationState};
use crate::listeners::Subscription;
use crate::scroll::ScrollProgressObserver;
use crate::view::{HeaderLayout, HeaderView, Presentation};
use tracing::debug;

pub struct HeaderInstance {
    content: HeaderContent,
    elevation: Option<ElevationState>,
    disclosure: DisclosureController,
}

impl HeaderInstance {
    /// Header with a closed panel and no scroll subscription yet
    pub fn new(content: HeaderContent) -> Self {
        Self {
            content,
            elevation: None,
            disclosure: DisclosureController::new(),
        }
    }

    pub fn mount(
        content: HeaderContent,
        policy: ElevationPolicy,
        observer: &ScrollProgressObserver,
    ) -> Self {
        Self::mount_with(content, policy, observer, |_| {})
    }

    /// Mount, calling `on_elevation` each time the elevated flag flips
    pub fn mount_with(
        content: HeaderContent,
        policy: ElevationPolicy,
        observer: &ScrollProgressObserver,
        on_elevation: impl Fn(bool) + 'static,
    ) -> Self {
        let mut instance = Self::new(content);
        instance.attach_scroll(observer, policy, on_elevation);
        instance
    }

    /// Acquire the scroll subscription; returns false if one was already acquired
    pub fn attach_scroll(
        &mut self,
        observer: &ScrollProgressObserver,
        policy: ElevationPolicy,
        on_elevation: impl Fn(bool) + 'static,
    ) -> bool {
        if self.elevation.is_some() {
            return false;
        }

        let elevation = ElevationState::bind_with(observer, policy, on_elevation);
        debug!(
            entries = self.content.menu.len(),
            elevated = elevation.is_elevated(),
            "Header scroll attached"
        );
        self.elevation = Some(elevation);
        true
    }

    /// Release the scroll subscription; the elevated flag freezes
    pub fn release_scroll(&mut self) {
        if let Some(elevation) = self.elevation.as_mut() {
            elevation.release();
        }
    }

    pub fn is_elevated(&self) -> bool {
        self.elevation
            .as_ref()
            .is_some_and(ElevationState::is_elevated)
    }

    pub fn panel(&self) -> PanelState {
        self.disclosure.state()
    }

    /// Handler for the mobile toggle control
    pub fn toggle(&self) -> PanelState {
        self.disclosure.toggle()
    }

    /// Observe panel changes
    pub fn watch_panel(&self, on_change: impl Fn(PanelState) + 'static) -> Subscription {
        self.disclosure.watch(on_change)
    }

    pub fn is_subscribed(&self) -> bool {
        self.elevation.as_ref().is_some_and(ElevationState::is_bound)
    }

    pub fn render(&self, presentation: Presentation) -> HeaderLayout {
        HeaderView::new(&self.content).render(self.is_elevated(), self.panel(), presentation)
    }

    /// Tear down, releasing the scroll subscription
    pub fn unmount(mut self) {
        self.release_scroll();
        debug!("Header unmounted");
    }
}
