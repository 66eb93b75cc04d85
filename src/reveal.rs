//! Scroll-triggered reveal flags.

use crate::constants::REVEAL_THRESHOLD;

/// Share of an element's height that lies inside the viewport, in `[0, 1]`.
pub fn visible_ratio(top: f32, height: f32, viewport_top: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let overlap = (top + height).min(viewport_top + viewport_height) - top.max(viewport_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealElement {
    pub id: String,
    pub entered: bool,
}

#[derive(Debug, Clone)]
pub struct RevealSet {
    threshold: f32,
    elements: Vec<RevealElement>,
}

impl RevealSet {
    pub fn new(ids: impl IntoIterator<Item = String>) -> Self {
        Self::with_threshold(ids, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(ids: impl IntoIterator<Item = String>, threshold: f32) -> Self {
        Self {
            threshold,
            elements: ids
                .into_iter()
                .map(|id| RevealElement { id, entered: false })
                .collect(),
        }
    }

    pub fn elements(&self) -> &[RevealElement] {
        &self.elements
    }

    pub fn is_entered(&self, id: &str) -> bool {
        self.elements.iter().any(|e| e.id == id && e.entered)
    }

    /// Maps the current visible share of `id` onto its flag. Returns true if the flag changed.
    pub fn observe(&mut self, id: &str, ratio: f32) -> bool {
        let threshold = self.threshold;
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                let entered = ratio >= threshold;
                let changed = element.entered != entered;
                element.entered = entered;
                changed
            }
            None => false,
        }
    }
}
