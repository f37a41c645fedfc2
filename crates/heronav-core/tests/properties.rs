//! Property tests for scroll elevation, panel toggling and layout counts

use heronav_core::scroll::normalize_fraction;
use heronav_core::{
    DisclosureController, ElevationPolicy, HeaderContent, HeaderInstance, HeaderView, MenuEntry,
    MenuLink, MenuModel, PanelState, Presentation, ScrollProgressObserver, ScrollSignal,
    DEFAULT_ELEVATION_THRESHOLD,
};
use proptest::prelude::*;
use std::rc::Rc;

// ===== Strategies =====

/// In-range fractions, out-of-range noise, NaN and the exact threshold
fn arb_sample() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.0..=1.0f64,
        2 => -1.0..2.0f64,
        1 => Just(f64::NAN),
        1 => Just(DEFAULT_ELEVATION_THRESHOLD),
    ]
}

fn arb_samples() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_sample(), 0..40)
}

fn arb_panel() -> impl Strategy<Value = PanelState> {
    prop::sample::select(vec![PanelState::Closed, PanelState::Open])
}

fn arb_link() -> impl Strategy<Value = MenuLink> {
    ("[A-Z][a-z]{0,8}", "[a-z]{1,8}")
        .prop_map(|(name, anchor)| MenuLink::new(name, format!("#{anchor}")))
}

fn arb_entry() -> impl Strategy<Value = MenuEntry> {
    (
        "[A-Z][a-z]{0,8}( [A-Z][a-z]{0,6})?",
        "[a-z]{1,8}",
        prop::collection::vec(arb_link(), 0..5),
    )
        .prop_map(|(name, anchor, children)| {
            MenuEntry::with_children(name, format!("#{anchor}"), children)
        })
}

fn arb_menu() -> impl Strategy<Value = Vec<MenuEntry>> {
    prop::collection::vec(arb_entry(), 0..8)
}

/// Elevation expected after `samples`: last accepted sample past the threshold
fn expected_elevation(samples: &[f64]) -> bool {
    let latest = samples
        .iter()
        .filter_map(|&raw| normalize_fraction(raw))
        .fold(0.0, |_, p| p);
    latest > DEFAULT_ELEVATION_THRESHOLD
}

// ===== Property Tests =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_elevation_follows_last_sample(samples in arb_samples()) {
        let signal = ScrollSignal::new();
        let observer = ScrollProgressObserver::new(Rc::new(signal.clone()));
        let header = HeaderInstance::mount(
            HeaderContent::default(),
            ElevationPolicy::default(),
            &observer,
        );

        signal.play(&samples);

        prop_assert_eq!(header.is_elevated(), expected_elevation(&samples));
        prop_assert!((0.0..=1.0).contains(&observer.latest()));
        header.unmount();
        prop_assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn prop_double_toggle_restores_state(start in arb_panel(), toggles in 0usize..12) {
        let controller = DisclosureController::new();
        if start.is_open() {
            controller.toggle();
        }
        prop_assert_eq!(controller.state(), start);

        controller.toggle();
        controller.toggle();
        prop_assert_eq!(controller.state(), start);

        for _ in 0..toggles {
            controller.toggle();
        }
        let expected = if toggles % 2 == 0 { start } else { start.toggled() };
        prop_assert_eq!(controller.state(), expected);
        prop_assert_eq!(controller.toggle_label(), expected.toggle_label());
    }

    #[test]
    fn prop_layout_preserves_menu_shape(entries in arb_menu(), elevated in any::<bool>()) {
        let content = HeaderContent {
            menu: MenuModel::try_new(entries.clone()).unwrap(),
            ..HeaderContent::default()
        };
        let view = HeaderView::new(&content);
        let child_counts: Vec<usize> = entries.iter().map(|e| e.children.len()).collect();

        let wide = view.render(elevated, PanelState::Closed, Presentation::Wide);
        prop_assert_eq!(wide.top_level_count(), entries.len());
        prop_assert_eq!(wide.child_counts(), child_counts.clone());
        prop_assert_eq!(wide.style.is_elevated(), elevated);

        let narrow = view.render(elevated, PanelState::Open, Presentation::Narrow);
        prop_assert_eq!(narrow.top_level_count(), entries.len());
        prop_assert_eq!(narrow.child_counts(), child_counts);

        let closed = view.render(elevated, PanelState::Closed, Presentation::Narrow);
        prop_assert_eq!(closed.top_level_count(), 0);
    }
}
