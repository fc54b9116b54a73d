//! Shell layout
//!
//! [`SHELL_LAYOUT`] is the tree the application shell renders: a header
//! holding the wallet widget, a main region with the loading indicator and
//! the routed slot, and a footer. [`ShellFrame`] resolves that tree for one
//! location.

use crate::routes::AppRoute;

/// Content placed inside a shell region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Content {
    Wallet,
    Loading,
    /// Filled by the page for the current route, or left empty.
    Slot,
}

/// A stacked region of the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Header { content: Content },
    Main { content: [Content; 2] },
    Footer,
}

/// Regions in document order. The shell component renders exactly this.
pub const SHELL_LAYOUT: [Region; 3] = [
    Region::Header {
        content: Content::Wallet,
    },
    Region::Main {
        content: [Content::Loading, Content::Slot],
    },
    Region::Footer,
];

/// One rendered part of the shell, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    Header,
    Wallet,
    Loading,
    View(AppRoute),
    Footer,
}

/// What the shell shows for one location.
///
/// Only `slot` depends on the location; everything else is fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellFrame {
    pub slot: Option<AppRoute>,
}

/// View change caused by a navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotTransition {
    pub unmounted: Option<AppRoute>,
    pub mounted: Option<AppRoute>,
}

impl SlotTransition {
    pub fn is_noop(&self) -> bool {
        self.unmounted.is_none() && self.mounted.is_none()
    }
}

impl ShellFrame {
    pub fn for_path(path: &str) -> Self {
        Self {
            slot: AppRoute::from_path(path),
        }
    }

    /// [`SHELL_LAYOUT`] flattened for this location.
    pub fn parts(&self) -> Vec<Part> {
        let mut parts = Vec::new();
        for region in SHELL_LAYOUT {
            match region {
                Region::Header { content } => {
                    parts.push(Part::Header);
                    parts.extend(self.resolve(content));
                }
                Region::Main { content } => {
                    parts.extend(content.into_iter().filter_map(|c| self.resolve(c)));
                }
                Region::Footer => parts.push(Part::Footer),
            }
        }
        parts
    }

    fn resolve(&self, content: Content) -> Option<Part> {
        match content {
            Content::Wallet => Some(Part::Wallet),
            Content::Loading => Some(Part::Loading),
            Content::Slot => self.slot.map(Part::View),
        }
    }

    /// Views leaving and entering the slot when moving to `next`.
    pub fn transition_to(&self, next: &ShellFrame) -> SlotTransition {
        if self.slot == next.slot {
            return SlotTransition::default();
        }
        SlotTransition {
            unmounted: self.slot,
            mounted: next.slot,
        }
    }
}

/// One observed location, remembered between navigations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visit {
    pub path: String,
    pub frame: ShellFrame,
}

impl Visit {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            frame: ShellFrame::for_path(path),
        }
    }

    /// No page matched, and the location differs from `previous`.
    pub fn is_new_miss(&self, previous: Option<&Visit>) -> bool {
        self.frame.slot.is_none() && previous.map_or(true, |prev| prev.path != self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views(parts: &[Part]) -> Vec<AppRoute> {
        parts
            .iter()
            .filter_map(|part| match part {
                Part::View(route) => Some(*route),
                _ => None,
            })
            .collect()
    }

    /// Navigation history owned by one shell instance.
    struct History {
        entries: Vec<String>,
    }

    impl History {
        fn new() -> Self {
            Self {
                entries: vec!["/".to_string()],
            }
        }

        fn push(&mut self, path: &str) -> SlotTransition {
            let before = self.frame();
            self.entries.push(path.to_string());
            before.transition_to(&self.frame())
        }

        fn back(&mut self) -> SlotTransition {
            let before = self.frame();
            if self.entries.len() > 1 {
                self.entries.pop();
            }
            before.transition_to(&self.frame())
        }

        fn frame(&self) -> ShellFrame {
            ShellFrame::for_path(self.entries.last().map(String::as_str).unwrap_or("/"))
        }
    }

    #[test]
    fn test_each_path_renders_exactly_its_view() {
        for route in AppRoute::ALL {
            let parts = ShellFrame::for_path(route.path()).parts();
            assert_eq!(views(&parts), vec![route]);
        }
    }

    #[test]
    fn test_persistent_parts_always_present() {
        for path in ["/", "/about", "/mypension", "/contribute", "/register", "/unknown"] {
            let parts = ShellFrame::for_path(path).parts();
            assert_eq!(parts.first(), Some(&Part::Header));
            assert_eq!(parts.last(), Some(&Part::Footer));
            assert!(parts.contains(&Part::Wallet));
            assert!(parts.contains(&Part::Loading));
        }
    }

    #[test]
    fn test_wallet_sits_in_header_and_loading_precedes_view() {
        let parts = ShellFrame::for_path("/about").parts();
        assert_eq!(
            parts,
            vec![
                Part::Header,
                Part::Wallet,
                Part::Loading,
                Part::View(AppRoute::About),
                Part::Footer,
            ]
        );
    }

    #[test]
    fn test_unknown_path_leaves_slot_empty() {
        let frame = ShellFrame::for_path("/unknown");
        assert_eq!(frame.slot, None);
        assert_eq!(
            frame.parts(),
            vec![Part::Header, Part::Wallet, Part::Loading, Part::Footer]
        );
    }

    #[test]
    fn test_navigation_swaps_views() {
        let about = ShellFrame::for_path("/about");
        let register = ShellFrame::for_path("/register");
        assert_eq!(
            about.transition_to(&register),
            SlotTransition {
                unmounted: Some(AppRoute::About),
                mounted: Some(AppRoute::Register),
            }
        );
    }

    #[test]
    fn test_same_route_is_noop() {
        let a = ShellFrame::for_path("/about");
        let b = ShellFrame::for_path("/about/");
        assert!(a.transition_to(&b).is_noop());
    }

    #[test]
    fn test_navigation_to_and_from_unknown() {
        let mut history = History::new();
        assert_eq!(
            history.push("/unknown"),
            SlotTransition {
                unmounted: Some(AppRoute::Home),
                mounted: None,
            }
        );
        assert_eq!(
            history.push("/contribute"),
            SlotTransition {
                unmounted: None,
                mounted: Some(AppRoute::Contribute),
            }
        );
        assert_eq!(
            history.back(),
            SlotTransition {
                unmounted: Some(AppRoute::Contribute),
                mounted: None,
            }
        );
    }

    #[test]
    fn test_layout_has_one_slot_after_loading() {
        let main: Vec<Content> = SHELL_LAYOUT
            .iter()
            .filter_map(|region| match region {
                Region::Main { content } => Some(content.to_vec()),
                _ => None,
            })
            .flatten()
            .collect();
        assert_eq!(main, vec![Content::Loading, Content::Slot]);
        assert_eq!(
            SHELL_LAYOUT.first(),
            Some(&Region::Header {
                content: Content::Wallet
            })
        );
        assert_eq!(SHELL_LAYOUT.last(), Some(&Region::Footer));
    }

    #[test]
    fn test_every_distinct_miss_is_reported() {
        let unknown = Visit::new("/unknown");
        let nope = Visit::new("/nope");
        assert!(unknown.is_new_miss(None));
        assert!(nope.is_new_miss(Some(&unknown)));
        assert!(!nope.is_new_miss(Some(&nope.clone())));
        assert!(!Visit::new("/about").is_new_miss(Some(&nope)));
    }

    #[test]
    fn test_histories_are_independent() {
        let mut first = History::new();
        let mut second = History::new();

        first.push("/mypension");
        second.push("/register");
        second.push("/about");

        assert_eq!(first.frame().slot, Some(AppRoute::MyPension));
        assert_eq!(second.frame().slot, Some(AppRoute::About));

        first.back();
        assert_eq!(first.frame().slot, Some(AppRoute::Home));
        assert_eq!(second.frame().slot, Some(AppRoute::About));
    }
}
