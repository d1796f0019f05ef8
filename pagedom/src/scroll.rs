use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::animation::{Easing, ScrollAnimation, SMOOTH_SCROLL_DURATION};

/// How a programmatic scroll reaches its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target offset.
    Instant,
    /// Animate towards the target over several frames.
    #[default]
    Smooth,
}

/// Smooth scrolls, keyed by element id.
///
/// A requested scroll stays pending until the next animation frame, where it
/// becomes a running animation starting at that frame's timestamp. At most one
/// scroll per element exists; a new request replaces the old one.
#[derive(Debug)]
pub struct ScrollState {
    pending: HashMap<String, (f32, f32)>,
    animations: HashMap<String, ScrollAnimation>,
    duration: Duration,
    easing: Easing,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
            animations: HashMap::new(),
            duration: SMOOTH_SCROLL_DURATION,
            easing: Easing::default(),
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a smooth scroll from `from` to `to`.
    pub fn request(&mut self, id: &str, from: f32, to: f32) {
        self.animations.remove(id);
        self.pending.insert(id.to_string(), (from, to));
    }

    /// Cancel a pending or running scroll. Returns true if one existed.
    pub fn cancel(&mut self, id: &str) -> bool {
        let pending = self.pending.remove(id).is_some();
        let running = self.animations.remove(id).is_some();
        pending || running
    }

    /// Target offset of a pending or running scroll.
    pub fn target(&self, id: &str) -> Option<f32> {
        self.pending
            .get(id)
            .map(|(_, to)| *to)
            .or_else(|| self.animations.get(id).map(|a| a.to))
    }

    pub fn is_animating(&self) -> bool {
        !self.pending.is_empty() || !self.animations.is_empty()
    }

    /// Start pending scrolls at `now`, sample every animation, and drop the
    /// ones that have completed. Returns `(id, offset)` pairs sorted by id.
    pub fn advance(&mut self, now: Instant) -> Vec<(String, f32)> {
        for (id, (from, to)) in self.pending.drain() {
            let animation = ScrollAnimation::new(from, to, now)
                .with_duration(self.duration)
                .with_easing(self.easing);
            self.animations.insert(id, animation);
        }

        let mut frames: Vec<(String, f32)> = self
            .animations
            .iter()
            .map(|(id, animation)| (id.clone(), animation.value_at(now)))
            .collect();
        frames.sort_by(|a, b| a.0.cmp(&b.0));

        self.animations
            .retain(|_, animation| !animation.is_complete(now));

        frames
    }

    /// Earliest time at which a running animation completes.
    pub fn next_completion_time(&self) -> Option<Instant> {
        self.animations
            .values()
            .map(ScrollAnimation::completion_time)
            .min()
    }
}
