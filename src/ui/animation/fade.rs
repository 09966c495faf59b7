//! Single fade animation state (pages, overlays)

use std::time::{Duration, Instant};

use super::prelude::{Animated, presets};

/// Page fade duration
const FADE_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::hidden()
    }
}

impl FadeAnimation {
    /// Start fully transparent
    pub fn hidden() -> Self {
        Self {
            animation: presets::page_fade(0.0, FADE_DURATION),
        }
    }

    /// Start fully opaque (no fade on first frame)
    pub fn shown() -> Self {
        Self {
            animation: presets::page_fade(1.0, FADE_DURATION),
        }
    }

    /// Fade in
    pub fn start(&mut self) {
        self.animation.update(1.0_f32.into());
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        (*self.animation.value()).clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Tick the animation forward in time
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}
