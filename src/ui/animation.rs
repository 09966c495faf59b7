//! Animation system
//!
//! CSS-like transitions and springs from `iced_anim`, wrapped in small state
//! holders the app ticks from its frame subscription.
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//!
//! // Spring animation
//! let height: Animated<f32> = Animated::spring(0.0, Motion::BOUNCY);
//! ```

mod expand;
mod fade;
pub mod prelude;

pub use expand::ExpandAnimations;
pub use fade::FadeAnimation;
