//! Integration tests for the header state and layout contract

use heronav_core::{
    ElevationPolicy, HeaderContent, HeaderInstance, HeaderView, LayoutBody, MenuEntry, MenuLink,
    MenuModel, PanelState, Presentation, ScrollProgressObserver, ScrollSignal,
};
use std::rc::Rc;

fn about_and_contact() -> HeaderContent {
    HeaderContent {
        menu: MenuModel::new(vec![
            MenuEntry::with_children(
                "About Us",
                "#about",
                vec![
                    MenuLink::new("Profile", "#profile"),
                    MenuLink::new("Awards", "#awards"),
                ],
            ),
            MenuEntry::link("Contact", "#contact"),
        ]),
        ..HeaderContent::default()
    }
}

fn mount(signal: &ScrollSignal, content: HeaderContent) -> HeaderInstance {
    let observer = ScrollProgressObserver::new(Rc::new(signal.clone()));
    HeaderInstance::mount(content, ElevationPolicy::default(), &observer)
}

#[test]
fn test_two_items_first_with_disclosure() {
    let signal = ScrollSignal::new();
    let header = mount(&signal, about_and_contact());

    let layout = header.render(Presentation::Wide);
    let LayoutBody::Wide { items, .. } = &layout.body else {
        panic!("expected wide layout");
    };

    assert_eq!(items.len(), 2);
    let submenu = items[0].submenu.as_ref().unwrap();
    let names: Vec<&str> = submenu.links.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Profile", "Awards"]);
    assert!(items[1].submenu.is_none());
}

#[test]
fn test_scroll_sequence_drives_elevation() {
    let signal = ScrollSignal::new();
    let header = mount(&signal, about_and_contact());

    let elevated: Vec<bool> = [0.0, 0.03, 0.06, 0.04]
        .into_iter()
        .map(|fraction| {
            signal.set(fraction);
            header.is_elevated()
        })
        .collect();

    assert_eq!(elevated, vec![false, false, true, false]);
}

#[test]
fn test_elevated_matches_last_sample() {
    let sequences: [&[f64]; 5] = [
        &[0.9, 0.01],
        &[0.01, 0.9],
        &[0.05],
        &[0.2, 0.05, 0.051],
        &[0.5, 0.5, 0.5],
    ];

    for samples in sequences {
        let signal = ScrollSignal::new();
        let header = mount(&signal, about_and_contact());
        signal.play(samples);

        let last = *samples.last().unwrap();
        assert_eq!(header.is_elevated(), last > 0.05, "samples: {samples:?}");
    }
}

#[test]
fn test_toggle_updates_label() {
    let signal = ScrollSignal::new();
    let header = mount(&signal, about_and_contact());

    assert_eq!(header.panel(), PanelState::Closed);
    let label = |h: &HeaderInstance| h.render(Presentation::Narrow).toggle().unwrap().label;
    assert_eq!(label(&header), "Open Menu");

    assert_eq!(header.toggle(), PanelState::Open);
    assert_eq!(label(&header), "Close Menu");

    assert_eq!(header.toggle(), PanelState::Closed);
    assert_eq!(label(&header), "Open Menu");
}

#[test]
fn test_structural_fidelity_for_builtin_menu() {
    let content = HeaderContent::default();
    let view = HeaderView::new(&content);
    let expected: Vec<usize> = content.menu.entries().iter().map(|e| e.children.len()).collect();

    let wide = view.render(false, PanelState::Closed, Presentation::Wide);
    assert_eq!(wide.top_level_count(), content.menu.len());
    assert_eq!(wide.child_counts(), expected);

    let narrow = view.render(false, PanelState::Open, Presentation::Narrow);
    assert_eq!(narrow.top_level_count(), content.menu.len());
    assert_eq!(narrow.child_counts(), expected);
}

#[test]
fn test_no_callbacks_after_teardown() {
    let signal = ScrollSignal::new();
    let flips = Rc::new(std::cell::Cell::new(0));
    let counter = Rc::clone(&flips);
    let observer = ScrollProgressObserver::new(Rc::new(signal.clone()));
    let header = HeaderInstance::mount_with(
        about_and_contact(),
        ElevationPolicy::default(),
        &observer,
        move |_| counter.set(counter.get() + 1),
    );

    signal.set(0.5);
    header.unmount();
    signal.play(&[0.0, 0.9, 0.0]);

    assert_eq!(flips.get(), 1);
    assert_eq!(signal.listener_count(), 0);
}
