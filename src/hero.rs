//! Hero entrance replay.
//!
//! The entrance animation is keyed by `generation`: every replay drops the
//! trigger flag and raises it again in the same step, and the bump tells the
//! renderer to start the animation over instead of leaving it at rest.

use tracing::debug;

use crate::constants::{HERO_RESTORE_DELAY, HERO_SCROLL_DELAY, HERO_THRESHOLD};
use crate::timer::Timer;

#[derive(Debug, Clone)]
pub struct HeroReplay {
    section: String,
    threshold: f32,
    previously_visible: bool,
    generation: u64,
    pending: Timer,
}

impl HeroReplay {
    pub fn new(section: impl Into<String>) -> Self {
        Self::with_threshold(section, HERO_THRESHOLD)
    }

    pub fn with_threshold(section: impl Into<String>, threshold: f32) -> Self {
        Self {
            section: section.into(),
            threshold,
            // The hero is on screen at initial load
            previously_visible: true,
            generation: 0,
            pending: Timer::once(HERO_SCROLL_DELAY),
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn replay_pending(&self) -> bool {
        self.pending.is_running()
    }

    /// Feeds the hero's current visible share. Returns true if the animation replayed.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if ratio < self.threshold {
            self.previously_visible = false;
            false
        } else if !self.previously_visible {
            self.previously_visible = true;
            self.replay();
            true
        } else {
            false
        }
    }

    /// A nav link was clicked. Only links to the hero schedule a replay.
    pub fn nav_clicked(&mut self, target: &str) {
        if target == self.section {
            self.schedule(HERO_SCROLL_DELAY);
        }
    }

    pub fn back_to_top(&mut self) {
        self.schedule(HERO_SCROLL_DELAY);
    }

    /// Page shown again; only a back/forward cache restore replays.
    pub fn page_shown(&mut self, persisted: bool) {
        if persisted {
            self.schedule(HERO_RESTORE_DELAY);
        }
    }

    /// Returns true if a delayed replay fired during `dt`.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.pending.update(dt) > 0 {
            self.replay();
            true
        } else {
            false
        }
    }

    fn schedule(&mut self, delay: f32) {
        self.pending.arm(delay);
    }

    fn replay(&mut self) {
        self.generation += 1;
        debug!(generation = self.generation, "hero animation replayed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_replay_while_staying_visible() {
        let mut hero = HeroReplay::new("home");
        assert!(!hero.observe(1.0));
        assert!(!hero.observe(0.8));
        assert_eq!(hero.generation(), 0);
    }

    #[test]
    fn test_replay_on_reentry() {
        let mut hero = HeroReplay::new("home");
        assert!(!hero.observe(0.3));
        assert!(hero.observe(0.7));
        assert_eq!(hero.generation(), 1);
        assert!(!hero.observe(1.0));
    }

    #[test]
    fn test_nav_click_replays_after_delay() {
        let mut hero = HeroReplay::new("home");
        hero.nav_clicked("projects");
        assert!(!hero.replay_pending());
        hero.nav_clicked("home");
        assert!(!hero.update(0.5));
        assert!(hero.update(0.2));
        assert_eq!(hero.generation(), 1);
    }

    #[test]
    fn test_restore_only_when_persisted() {
        let mut hero = HeroReplay::new("home");
        hero.page_shown(false);
        assert!(!hero.replay_pending());
        hero.page_shown(true);
        assert!(hero.update(0.1));
    }

    #[test]
    fn test_rescheduling_cancels_pending_replay() {
        let mut hero = HeroReplay::new("home");
        hero.back_to_top();
        hero.update(0.6);
        hero.back_to_top();
        assert!(!hero.update(0.6));
        assert!(hero.update(0.1));
        assert!(!hero.update(5.0));
        assert_eq!(hero.generation(), 1);
    }
}
