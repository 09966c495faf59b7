//! Per-item expand/collapse springs
//!
//! Only items whose spring is still moving are tracked. A settled item has no
//! spring and is drawn from its expanded flag, so 1000 cards cost nothing.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use super::prelude::{Animated, presets};

/// Spring animations keyed by list item
#[derive(Debug)]
pub struct ExpandAnimations<K: Eq + Hash + Clone> {
    active: HashMap<K, Animated<f32>>,
}

impl<K: Eq + Hash + Clone> Default for ExpandAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> ExpandAnimations<K> {
    pub fn new() -> Self {
        Self {
            active: HashMap::new(),
        }
    }

    /// Retarget the spring of `key` towards expanded (1.0) or collapsed (0.0)
    ///
    /// A spring already in flight keeps its current value and velocity.
    pub fn set_expanded(&mut self, key: K, expanded: bool) {
        let (from, to): (f32, f32) = if expanded { (0.0, 1.0) } else { (1.0, 0.0) };
        self.active
            .entry(key)
            .or_insert_with(|| presets::bouncy(from))
            .update(to.into());
    }

    /// Reveal progress of the spring tracking `key`, `None` once settled
    ///
    /// Springs overshoot, so values slightly above 1.0 occur. Never negative.
    pub fn progress(&self, key: &K) -> Option<f32> {
        self.active.get(key).map(|anim| (*anim.value()).max(0.0))
    }

    /// Check if any spring is still moving
    pub fn is_animating(&self) -> bool {
        self.active.values().any(|anim| anim.is_animating())
    }

    /// Tick all springs forward in time
    pub fn tick(&mut self, now: Instant) {
        for anim in self.active.values_mut() {
            anim.tick(now);
        }
    }

    /// Drop settled springs
    pub fn cleanup_completed(&mut self) {
        self.active.retain(|_, anim| anim.is_animating());
    }

    /// Number of springs currently tracked
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_has_no_progress() {
        let anims: ExpandAnimations<usize> = ExpandAnimations::new();
        assert_eq!(anims.progress(&3), None);
        assert!(!anims.is_animating());
    }

    #[test]
    fn test_expand_starts_from_collapsed() {
        let mut anims: ExpandAnimations<usize> = ExpandAnimations::new();
        anims.set_expanded(1, true);

        assert_eq!(anims.len(), 1);
        // Untouched before the first tick
        assert_eq!(anims.progress(&1), Some(0.0));
        // Other items are not affected
        assert_eq!(anims.progress(&2), None);
    }

    #[test]
    fn test_collapse_starts_from_expanded() {
        let mut anims: ExpandAnimations<usize> = ExpandAnimations::new();
        anims.set_expanded(4, false);
        assert_eq!(anims.progress(&4), Some(1.0));
    }

    #[test]
    fn test_retarget_keeps_single_entry() {
        let mut anims: ExpandAnimations<usize> = ExpandAnimations::new();
        anims.set_expanded(1, true);
        anims.set_expanded(1, false);
        assert_eq!(anims.len(), 1);
    }

    #[test]
    fn test_settled_spring_is_dropped() {
        let mut anims: ExpandAnimations<usize> = ExpandAnimations::new();
        anims.set_expanded(1, true);

        let start = Instant::now();
        for frame in 1..=600 {
            anims.tick(start + std::time::Duration::from_millis(frame * 16));
            anims.cleanup_completed();
        }

        assert!(anims.is_empty());
        assert_eq!(anims.progress(&1), None);
    }
}
