//! Screen controller - the onboarding/greeting-list view-state flow
//!
//! Owns the transient UI state of the application:
//! - a one-way "show onboarding" flag
//! - one expand/collapse flag per greeting item
//!
//! The controller knows nothing about iced. The app shell reads it in `view`
//! and mutates it in `update`.

use super::session::SessionSnapshot;

/// Number of greeting items generated at start-up
pub const DEFAULT_ITEM_COUNT: usize = 1000;

/// Which page is currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome page gating the list
    Onboarding,
    /// Scrollable list of greeting cards
    Greetings,
}

/// Application-level flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub show_onboarding: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            show_onboarding: true,
        }
    }
}

/// One row of the greeting list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingItem {
    pub name: String,
    pub expanded: bool,
}

impl GreetingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: false,
        }
    }
}

/// Errors returned by controller operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The item index does not address a list position
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for ScreenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenError::IndexOutOfRange { index, len } => {
                write!(f, "item index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for ScreenError {}

/// Generate display names `"0"`, `"1"`, ... for `count` items
pub fn generate_names(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}

/// Holds the view state and decides which page renders
#[derive(Debug, Clone)]
pub struct ScreenController {
    state: AppState,
    items: Vec<GreetingItem>,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::with_item_count(DEFAULT_ITEM_COUNT)
    }
}

impl ScreenController {
    /// Create a controller over the given names, all collapsed
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: AppState::default(),
            items: names.into_iter().map(GreetingItem::new).collect(),
        }
    }

    /// Create a controller with `count` generated items
    pub fn with_item_count(count: usize) -> Self {
        Self::new(generate_names(count))
    }

    /// The page to show for the current state
    pub fn render(&self) -> Screen {
        if self.state.show_onboarding {
            Screen::Onboarding
        } else {
            Screen::Greetings
        }
    }

    /// Leave onboarding. Returns `true` if this call changed the state.
    pub fn on_continue(&mut self) -> bool {
        let changed = self.state.show_onboarding;
        self.state.show_onboarding = false;
        changed
    }

    /// Flip the expanded flag of one item and return its new value
    pub fn on_toggle_expand(&mut self, index: usize) -> Result<bool, ScreenError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(ScreenError::IndexOutOfRange { index, len })?;
        item.expanded = !item.expanded;
        Ok(item.expanded)
    }

    pub fn show_onboarding(&self) -> bool {
        self.state.show_onboarding
    }

    pub fn items(&self) -> &[GreetingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Indices of expanded items, ascending
    pub fn expanded_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.expanded)
            .map(|(i, _)| i)
            .collect()
    }

    /// Capture the transient state for the session store
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            show_onboarding: self.state.show_onboarding,
            expanded: self.expanded_indices(),
        }
    }

    /// Apply a previously saved snapshot
    ///
    /// Onboarding only ever moves forward: a snapshot cannot bring it back.
    pub fn restore(&mut self, snapshot: &SessionSnapshot) {
        if !snapshot.show_onboarding {
            self.state.show_onboarding = false;
        }

        for item in &mut self.items {
            item.expanded = false;
        }

        for &index in &snapshot.expanded {
            match self.items.get_mut(index) {
                Some(item) => item.expanded = true,
                None => tracing::warn!(
                    "Ignoring saved expanded index {} (list has {} items)",
                    index,
                    self.items.len()
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(controller: &ScreenController) -> Vec<bool> {
        controller.items().iter().map(|i| i.expanded).collect()
    }

    #[test]
    fn test_initial_state_shows_onboarding() {
        let controller = ScreenController::default();
        assert!(controller.show_onboarding());
        assert_eq!(controller.render(), Screen::Onboarding);
        assert!(controller.items().iter().all(|i| !i.expanded));
    }

    #[test]
    fn test_default_names() {
        let controller = ScreenController::default();
        assert_eq!(controller.len(), DEFAULT_ITEM_COUNT);
        assert_eq!(controller.items().get(42).map(|i| i.name.as_str()), Some("42"));
        assert_eq!(controller.items().get(0).map(|i| i.name.as_str()), Some("0"));
        assert_eq!(controller.items().get(999).map(|i| i.name.as_str()), Some("999"));
        assert!(controller.items().get(1000).is_none());
    }

    #[test]
    fn test_toggle_middle_of_three() {
        let mut controller = ScreenController::with_item_count(3);
        assert_eq!(flags(&controller), vec![false, false, false]);

        assert_eq!(controller.on_toggle_expand(1), Ok(true));
        assert_eq!(flags(&controller), vec![false, true, false]);
    }

    #[test]
    fn test_empty_list() {
        let mut controller = ScreenController::with_item_count(0);
        assert!(controller.items().is_empty());
        assert_eq!(
            controller.on_toggle_expand(0),
            Err(ScreenError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    mod property_onboarding_one_way {
        use super::*;

        #[test]
        fn continue_switches_to_greetings() {
            let mut controller = ScreenController::with_item_count(3);
            assert!(controller.on_continue());
            assert!(!controller.show_onboarding());
            assert_eq!(controller.render(), Screen::Greetings);
        }

        #[test]
        fn continue_is_idempotent() {
            let mut controller = ScreenController::with_item_count(3);
            controller.on_continue();
            for _ in 0..5 {
                assert!(!controller.on_continue(), "Repeat calls must not report a change");
                assert!(!controller.show_onboarding());
                assert_eq!(controller.render(), Screen::Greetings);
            }
        }

        #[test]
        fn toggling_does_not_touch_onboarding() {
            let mut controller = ScreenController::with_item_count(3);
            controller.on_toggle_expand(2).unwrap();
            assert!(controller.show_onboarding());
        }
    }

    mod property_toggle {
        use super::*;

        #[test]
        fn double_toggle_restores_value() {
            let mut controller = ScreenController::with_item_count(10);
            for i in 0..controller.len() {
                let before = controller.items().get(i).unwrap().expanded;
                controller.on_toggle_expand(i).unwrap();
                controller.on_toggle_expand(i).unwrap();
                assert_eq!(controller.items().get(i).unwrap().expanded, before);
            }
        }

        #[test]
        fn toggle_is_isolated() {
            let mut controller = ScreenController::with_item_count(10);
            controller.on_toggle_expand(3).unwrap();
            controller.on_toggle_expand(7).unwrap();

            for i in 0..controller.len() {
                let before = flags(&controller);
                controller.on_toggle_expand(i).unwrap();
                let after = flags(&controller);
                for j in 0..controller.len() {
                    if j != i {
                        assert_eq!(before[j], after[j], "toggling {} changed {}", i, j);
                    }
                }
                assert_ne!(before[i], after[i]);
            }
        }

        #[test]
        fn many_items_may_be_expanded() {
            let mut controller = ScreenController::with_item_count(5);
            for i in 0..5 {
                controller.on_toggle_expand(i).unwrap();
            }
            assert_eq!(controller.expanded_indices(), vec![0, 1, 2, 3, 4]);
        }
    }

    mod property_out_of_range {
        use super::*;

        #[test]
        fn index_at_len_is_rejected() {
            let mut controller = ScreenController::with_item_count(3);
            controller.on_toggle_expand(0).unwrap();
            let before = flags(&controller);

            assert_eq!(
                controller.on_toggle_expand(3),
                Err(ScreenError::IndexOutOfRange { index: 3, len: 3 })
            );
            assert_eq!(flags(&controller), before);
        }

        #[test]
        fn negative_index_is_rejected() {
            let mut controller = ScreenController::with_item_count(3);
            let index = -1_isize as usize;
            let before = flags(&controller);

            assert!(controller.on_toggle_expand(index).is_err());
            assert_eq!(flags(&controller), before);
        }

        #[test]
        fn error_message_names_index_and_len() {
            let err = ScreenError::IndexOutOfRange { index: 5, len: 3 };
            assert_eq!(err.to_string(), "item index 5 out of range (len 3)");
        }
    }

    mod property_snapshot {
        use super::*;

        #[test]
        fn snapshot_restores_expanded_items() {
            let mut controller = ScreenController::with_item_count(10);
            controller.on_continue();
            controller.on_toggle_expand(2).unwrap();
            controller.on_toggle_expand(9).unwrap();

            let snapshot = controller.snapshot();
            assert_eq!(snapshot.expanded, vec![2, 9]);
            assert!(!snapshot.show_onboarding);

            let mut restored = ScreenController::with_item_count(10);
            restored.restore(&snapshot);
            assert_eq!(restored.render(), Screen::Greetings);
            assert_eq!(restored.expanded_indices(), vec![2, 9]);
        }

        #[test]
        fn restore_never_reverts_onboarding() {
            let mut controller = ScreenController::with_item_count(3);
            controller.on_continue();
            controller.restore(&SessionSnapshot {
                show_onboarding: true,
                expanded: Vec::new(),
            });
            assert!(!controller.show_onboarding());
        }

        #[test]
        fn restore_skips_out_of_range_indices() {
            let mut controller = ScreenController::with_item_count(3);
            controller.restore(&SessionSnapshot {
                show_onboarding: true,
                expanded: vec![1, 3, 500],
            });
            assert_eq!(flags(&controller), vec![false, true, false]);
        }
    }
}
