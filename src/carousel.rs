//! Looping slide carousel with indicator dots and hover-paused auto-advance.

use tracing::debug;

use crate::constants::AUTO_ADVANCE_INTERVAL;
use crate::error::{Error, Result};
use crate::state::AutoAdvance;
use crate::timer::Timer;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselKind {
    #[default]
    Projects,
    Certificates,
}

impl CarouselKind {
    pub fn auto_advances(self) -> bool {
        self != CarouselKind::Certificates
    }
}

/// One dot under the track. Clicking it jumps straight to its slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub label: String,
    pub active: bool,
}

pub struct Carousel<T> {
    slides: Vec<T>,
    indicators: Vec<Indicator>,
    current_index: usize,
    kind: CarouselKind,
    hovered: bool,
    timer: Timer,
}

impl<T> Carousel<T> {
    pub fn new(slides: Vec<T>, kind: CarouselKind) -> Result<Self> {
        Self::with_interval(slides, kind, AUTO_ADVANCE_INTERVAL)
    }

    pub fn with_interval(slides: Vec<T>, kind: CarouselKind, interval: f32) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::NoSlides);
        }

        let indicators = (0..slides.len())
            .map(|i| Indicator {
                label: format!("Go to slide {}", i + 1),
                active: i == 0,
            })
            .collect();

        let mut timer = Timer::repeating(interval);
        if kind.auto_advances() {
            timer.start();
        }

        Ok(Self {
            slides,
            indicators,
            current_index: 0,
            kind,
            hovered: false,
            timer,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn kind(&self) -> CarouselKind {
        self.kind
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn current_slide(&self) -> &T {
        &self.slides[self.current_index]
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Horizontal track translation, as a percentage of the track width.
    pub fn track_offset_percent(&self) -> f32 {
        -(self.current_index as f32) * 100.0
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        if !self.kind.auto_advances() {
            AutoAdvance::Disabled
        } else if self.hovered {
            AutoAdvance::Paused
        } else {
            AutoAdvance::Running
        }
    }

    pub fn is_timer_scheduled(&self) -> bool {
        self.timer.is_running()
    }

    /// Seconds until the next automatic advance, if one is scheduled.
    pub fn next_advance_in(&self) -> Option<f32> {
        self.timer.remaining()
    }

    /// Shows slide `index`, wrapping negative and overflowing values.
    /// Manual navigation restarts the auto-advance countdown.
    pub fn go_to(&mut self, index: isize) {
        self.show(index);
        if self.auto_advance() == AutoAdvance::Running {
            self.timer.reset();
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_index as isize - 1);
    }

    /// Indicator click.
    pub fn select(&mut self, indicator: usize) {
        self.go_to(indicator as isize);
    }

    pub fn pointer_enter(&mut self) {
        if !self.kind.auto_advances() {
            return;
        }
        self.hovered = true;
        self.timer.stop();
    }

    pub fn pointer_leave(&mut self) {
        if !self.kind.auto_advances() {
            return;
        }
        self.hovered = false;
        self.timer.start();
    }

    /// Advances the auto-advance timer. Returns true if the slide changed.
    pub fn update(&mut self, dt: f32) -> bool {
        let fires = self.timer.update(dt);
        for _ in 0..fires {
            // The repeating timer already restarted its interval on fire
            self.show(self.current_index as isize + 1);
        }
        fires > 0
    }

    fn show(&mut self, index: isize) {
        let count = self.slides.len() as isize;
        self.current_index = index.rem_euclid(count) as usize;

        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == self.current_index;
        }
        debug!(kind = ?self.kind, index = self.current_index, "carousel slide changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(count: usize, kind: CarouselKind) -> Carousel<usize> {
        Carousel::new((0..count).collect(), kind).unwrap()
    }

    fn active_indicators(c: &Carousel<usize>) -> Vec<usize> {
        c.indicators()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.active)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_empty_carousel_is_rejected() {
        assert!(matches!(
            Carousel::<u8>::new(Vec::new(), CarouselKind::Projects),
            Err(Error::NoSlides)
        ));
    }

    #[test]
    fn test_construction_builds_one_indicator_per_slide() {
        let c = carousel(3, CarouselKind::Projects);
        assert_eq!(c.indicators().len(), 3);
        assert_eq!(c.indicators()[2].label, "Go to slide 3");
        assert_eq!(active_indicators(&c), vec![0]);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_timer_scheduled());
    }

    #[test]
    fn test_go_to_wraps_both_directions() {
        let mut c = carousel(5, CarouselKind::Projects);
        c.go_to(-1);
        assert_eq!(c.current_index(), 4);
        c.go_to(5);
        assert_eq!(c.current_index(), 0);
        c.go_to(-11);
        assert_eq!(c.current_index(), 4);
        c.go_to(12);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_track_offset_follows_index() {
        let mut c = carousel(4, CarouselKind::Projects);
        assert_eq!(c.track_offset_percent(), 0.0);
        c.go_to(3);
        assert_eq!(c.track_offset_percent(), -300.0);
    }

    #[test]
    fn test_exactly_one_indicator_active_after_navigation() {
        let mut c = carousel(4, CarouselKind::Projects);
        c.next();
        c.next();
        c.prev();
        c.select(3);
        c.next();
        assert_eq!(active_indicators(&c), vec![0]);
        c.prev();
        assert_eq!(active_indicators(&c), vec![3]);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut c = carousel(6, CarouselKind::Projects);
        for _ in 0..6 {
            c.next();
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = carousel(1, CarouselKind::Projects);
        c.next();
        c.prev();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_auto_advance_every_interval() {
        let mut c = carousel(3, CarouselKind::Projects);
        assert!(!c.update(4.0));
        assert!(c.update(1.0));
        assert_eq!(c.current_index(), 1);
        c.update(5.0);
        c.update(5.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_manual_navigation_restarts_countdown() {
        let mut c = carousel(3, CarouselKind::Projects);
        c.update(4.0);
        c.next();
        assert_eq!(c.next_advance_in(), Some(AUTO_ADVANCE_INTERVAL));
        c.update(4.0);
        assert_eq!(c.current_index(), 1);
        c.update(1.0);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_hover_pauses_and_leave_restarts_full_interval() {
        let mut c = carousel(3, CarouselKind::Projects);
        c.update(4.5);
        c.pointer_enter();
        assert!(!c.is_timer_scheduled());
        assert_eq!(c.auto_advance(), AutoAdvance::Paused);
        c.update(60.0);
        assert_eq!(c.current_index(), 0);

        c.pointer_leave();
        assert_eq!(c.next_advance_in(), Some(AUTO_ADVANCE_INTERVAL));
        c.update(4.5);
        assert_eq!(c.current_index(), 0);
        c.update(0.5);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_navigation_while_hovered_keeps_timer_paused() {
        let mut c = carousel(3, CarouselKind::Projects);
        c.pointer_enter();
        c.next();
        c.select(2);
        assert!(!c.is_timer_scheduled());
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_certificates_never_schedule_timer() {
        let mut c = carousel(4, CarouselKind::Certificates);
        assert!(!c.is_timer_scheduled());
        assert_eq!(c.auto_advance(), AutoAdvance::Disabled);
        c.pointer_enter();
        c.pointer_leave();
        c.next();
        assert!(!c.is_timer_scheduled());
        assert!(!c.update(30.0));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_custom_interval() {
        let mut c = Carousel::with_interval(vec!['a', 'b'], CarouselKind::Projects, 2.0).unwrap();
        c.update(2.0);
        assert_eq!(*c.current_slide(), 'b');
    }
}
