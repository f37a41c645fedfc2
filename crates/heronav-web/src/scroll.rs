//! Browser scroll source backed by the window `scroll` and `resize` events

use heronav_core::listeners::{Listener, ListenerId};
use heronav_core::scroll::{fraction_from_offsets, ScrollSignal, ScrollSource};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Window events that change the scroll fraction
const WINDOW_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Scroll fraction of the document, read from `window`
///
/// One DOM handler is attached for each of [`WINDOW_EVENTS`] while at least
/// one subscriber exists and removed when the last one releases. A resize
/// changes the viewport height, so it re-reads the fraction like a scroll.
pub struct WindowScroll {
    window: Window,
    signal: ScrollSignal,
    handler: RefCell<Option<Closure<dyn Fn()>>>,
}

impl WindowScroll {
    /// Returns `None` outside a browser
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let signal = ScrollSignal::with_value(read_fraction(&window));
        Some(Self {
            window,
            signal,
            handler: RefCell::new(None),
        })
    }

    fn attach(&self) {
        let window = self.window.clone();
        let signal = self.signal.clone();
        let handler = Closure::wrap(Box::new(move || {
            signal.set(read_fraction(&window));
        }) as Box<dyn Fn()>);

        for event in WINDOW_EVENTS {
            if let Err(e) = self
                .window
                .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            {
                leptos::logging::error!("Failed to attach {} listener: {:?}", event, e);
            }
        }
        *self.handler.borrow_mut() = Some(handler);
    }

    fn detach(&self) {
        if let Some(handler) = self.handler.borrow_mut().take() {
            for event in WINDOW_EVENTS {
                self.window
                    .remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
                    .unwrap_or_else(|e| {
                        leptos::logging::warn!("Failed to remove {} listener: {:?}", event, e);
                    });
            }
        }
    }
}

fn read_fraction(window: &Window) -> f64 {
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    fraction_from_offsets(scroll_top, scroll_height, viewport_height)
}

impl ScrollSource for WindowScroll {
    fn current(&self) -> f64 {
        self.signal.current()
    }

    fn add_listener(&self, listener: Listener<f64>) -> ListenerId {
        let id = self.signal.add_listener(listener);
        if self.signal.listener_count() == 1 {
            self.attach();
        }
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let removed = self.signal.remove_listener(id);
        if removed && self.signal.listener_count() == 0 {
            self.detach();
        }
        removed
    }
}

impl Drop for WindowScroll {
    fn drop(&mut self) {
        self.detach();
    }
}
