use tracing::debug;

/// Where a document-level click landed, relative to the mobile drawer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ClickTarget {
    Drawer,
    Hamburger,
    Elsewhere,
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        if self.open {
            debug!("menu closed");
        }
        self.open = false;
    }

    pub fn document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.close();
        }
    }
}
