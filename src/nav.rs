//! Header navigation links and the section highlight driven by the scroll spy.

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    pub fn new(links: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            links: links
                .into_iter()
                .map(|(label, target)| NavLink {
                    label,
                    target,
                    active: false,
                })
                .collect(),
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    /// Clears every link, then marks the one pointing at `section` (if any).
    pub fn set_active(&mut self, section: &str) {
        for link in self.links.iter_mut() {
            link.active = link.target == section;
        }
    }
}
