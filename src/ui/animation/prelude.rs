//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//! ```

pub use iced_anim::Animated;
pub use iced_anim::spring::Motion;
pub use iced_anim::transition::Easing;

/// Animation presets used across the UI
pub mod presets {
    use super::*;

    /// Bouncy spring for card expansion
    pub fn bouncy(initial: f32) -> Animated<f32> {
        Animated::spring(initial, Motion::BOUNCY)
    }

    /// Page fade (ease for smooth open)
    pub fn page_fade(initial: f32, duration: std::time::Duration) -> Animated<f32> {
        Animated::transition(initial, Easing::EASE.with_duration(duration))
    }
}
