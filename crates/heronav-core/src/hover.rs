//! Pointer/focus driven visibility of an item's sub-menu
//!
//! A [`HoverDisclosure`] is a plain value describing where the pointer and
//! focus currently are relative to one item. Each item keeps its own copy;
//! nothing is shared between items, and several sub-menus may be visible at
//! once (pointer over one item while keyboard focus sits in another).

/// Part of an item that the pointer can enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The top-level link
    Item,
    /// The attached child list
    ChildList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverDisclosure {
    pointer_over_item: bool,
    pointer_over_list: bool,
    focus_within: bool,
}

impl HoverDisclosure {
    pub const fn new(pointer_over_item: bool, pointer_over_list: bool, focus_within: bool) -> Self {
        Self {
            pointer_over_item,
            pointer_over_list,
            focus_within,
        }
    }

    #[must_use]
    pub fn pointer_enter(self, region: Region) -> Self {
        self.with_pointer(region, true)
    }

    #[must_use]
    pub fn pointer_leave(self, region: Region) -> Self {
        self.with_pointer(region, false)
    }

    /// Focus moved onto the item or one of its children
    #[must_use]
    pub fn focus_in(self) -> Self {
        Self {
            focus_within: true,
            ..self
        }
    }

    /// Focus left the item subtree entirely
    #[must_use]
    pub fn focus_out(self) -> Self {
        Self {
            focus_within: false,
            ..self
        }
    }

    fn with_pointer(self, region: Region, over: bool) -> Self {
        match region {
            Region::Item => Self {
                pointer_over_item: over,
                ..self
            },
            Region::ChildList => Self {
                pointer_over_list: over,
                ..self
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pointer_over_item || self.pointer_over_list || self.focus_within
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        assert!(!HoverDisclosure::default().is_visible());
    }

    #[test]
    fn test_visibility_truth_table() {
        for item in [false, true] {
            for list in [false, true] {
                for focus in [false, true] {
                    let hover = HoverDisclosure::new(item, list, focus);
                    assert_eq!(hover.is_visible(), item || list || focus);
                }
            }
        }
    }

    #[test]
    fn test_moving_from_item_into_list_stays_visible() {
        let hover = HoverDisclosure::default()
            .pointer_enter(Region::Item)
            .pointer_enter(Region::ChildList)
            .pointer_leave(Region::Item);
        assert!(hover.is_visible());

        let hover = hover.pointer_leave(Region::ChildList);
        assert!(!hover.is_visible());
    }

    #[test]
    fn test_focus_keeps_menu_open_after_pointer_leaves() {
        let hover = HoverDisclosure::default()
            .pointer_enter(Region::Item)
            .focus_in()
            .pointer_leave(Region::Item);
        assert!(hover.is_visible());
        assert!(!hover.focus_out().is_visible());
    }

    #[test]
    fn test_items_are_not_mutually_exclusive() {
        let items = [
            HoverDisclosure::default().pointer_enter(Region::Item),
            HoverDisclosure::default(),
            HoverDisclosure::default().focus_in(),
        ];
        let visible: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_visible())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(visible, vec![0, 2]);
    }
}
