//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::Action;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Screen ============
    /// Continue pressed on the onboarding page
    Continue,
    /// Expand/collapse button pressed on a card (list index)
    ToggleExpand(usize),

    // ============ Settings ============
    /// Flip between light and dark mode and persist the choice
    ToggleDarkMode,

    // ============ Input ============
    /// Raw key press from the keyboard subscription
    KeyPressed(Key, Modifiers),
    /// A bound shortcut fired
    ExecuteAction(Action),

    // ============ Window ============
    /// Frame tick while animations run
    AnimationTick,
    /// Window close button pressed
    RequestClose,
}
