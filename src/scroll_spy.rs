use crate::constants::SCROLL_SPY_MARGIN;

/// Vertical extent of one page section, in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Picks the section under the fixed header. Holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    header_height: f32,
    margin: f32,
}

impl ScrollSpy {
    pub fn new(header_height: f32) -> Self {
        Self {
            header_height,
            margin: SCROLL_SPY_MARGIN,
        }
    }

    pub fn probe(&self, scroll_y: f32) -> f32 {
        scroll_y + self.header_height + self.margin
    }

    /// Last section containing the probe wins when sections overlap.
    pub fn active_section<'a>(&self, scroll_y: f32, sections: &'a [Section]) -> Option<&'a Section> {
        let probe = self.probe(scroll_y);
        sections.iter().rev().find(|s| s.contains(probe))
    }
}
