//! The page model: one instance of every behaviour, driven by host events.
//!
//! The host (a window, a browser binding, a test) translates whatever input it
//! receives into [`PageEvent`]s and calls [`Page::update`] once per frame.
//! Nothing here touches a renderer.

use std::collections::HashSet;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::carousel::Carousel;
use crate::config::{PageConfig, SectionConfig, SlideContent};
use crate::error::{Error, Result};
use crate::form::{ContactForm, FieldName};
use crate::hero::HeroReplay;
use crate::menu::{ClickTarget, MenuToggle};
use crate::nav::NavBar;
use crate::reveal::{RevealSet, visible_ratio};
use crate::scroll_spy::{ScrollSpy, Section};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CarouselAction {
    Prev,
    Next,
    Indicator(usize),
    PointerEnter,
    PointerLeave,
}

#[derive(Debug, PartialEq, Clone)]
pub enum PageEvent {
    Scroll(f32),
    Resize { viewport_height: f32 },
    NavClick(String),
    /// In-page button that scrolls to a section without touching the menu.
    ScrollButton(String),
    HamburgerClick,
    DocumentClick(ClickTarget),
    Carousel(usize, CarouselAction),
    Edit { field: FieldName, value: String },
    Submit,
    PageShow { persisted: bool },
    BackToTop,
}

/// A carousel together with the section it sits in.
pub struct PageCarousel {
    pub section: String,
    pub carousel: Carousel<SlideContent>,
}

pub struct Page {
    title: String,
    sections: Vec<Section>,
    content: Vec<SectionConfig>,
    nav: NavBar,
    menu: MenuToggle,
    spy: ScrollSpy,
    reveal: RevealSet,
    hero: Option<HeroReplay>,
    carousels: Vec<PageCarousel>,
    form: Option<ContactForm>,
    contact_section: Option<String>,
    header_height: f32,
    scroll_y: f32,
    viewport_height: f32,
    scroll_request: Option<f32>,
}

impl Page {
    pub fn from_config(config: &PageConfig, viewport_height: f32) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = config.sections.iter().find(|s| !seen.insert(s.id.as_str())) {
            return Err(Error::DuplicateSection(dup.id.clone()));
        }

        let mut sections = Vec::with_capacity(config.sections.len());
        let mut top = 0.0;
        for section in &config.sections {
            sections.push(Section::new(section.id.clone(), top, section.height));
            top += section.height;
        }

        let nav = NavBar::new(
            config
                .sections
                .iter()
                .filter_map(|s| s.label.clone().map(|label| (label, s.id.clone()))),
        );

        let reveal = RevealSet::with_threshold(
            config.sections.iter().filter(|s| s.reveal).map(|s| s.id.clone()),
            config.reveal_threshold,
        );

        let hero = match &config.hero_section {
            Some(id) if config.section(id).is_some() => {
                Some(HeroReplay::with_threshold(id.clone(), config.hero_threshold))
            }
            Some(id) => {
                warn!(section = %id, "hero section missing, replay disabled");
                None
            }
            None => None,
        };

        let mut carousels = Vec::new();
        for carousel in &config.carousels {
            if config.section(&carousel.section).is_none() {
                return Err(Error::UnknownSection(carousel.section.clone()));
            }
            match Carousel::with_interval(carousel.slides.clone(), carousel.kind, config.auto_advance_secs) {
                Ok(c) => carousels.push(PageCarousel {
                    section: carousel.section.clone(),
                    carousel: c,
                }),
                Err(e) => warn!(section = %carousel.section, error = %e, "carousel disabled"),
            }
        }

        let contact_section = config
            .contact_section
            .clone()
            .filter(|id| config.section(id).is_some());
        if contact_section.is_none() && config.contact_section.is_some() {
            warn!("contact section missing, form disabled");
        }
        let form = contact_section
            .as_ref()
            .map(|_| ContactForm::new(config.status_clear_secs));

        let mut page = Self {
            title: config.title.clone(),
            sections,
            content: config.sections.clone(),
            nav,
            menu: MenuToggle::default(),
            spy: ScrollSpy::new(config.header_height),
            reveal,
            hero,
            carousels,
            form,
            contact_section,
            header_height: config.header_height,
            scroll_y: 0.0,
            viewport_height,
            scroll_request: None,
        };
        page.refresh();
        Ok(page)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn content(&self, id: &str) -> Option<&SectionConfig> {
        self.content.iter().find(|s| s.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn height(&self) -> f32 {
        self.sections.last().map(Section::bottom).unwrap_or(0.0)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.height() - self.viewport_height).max(0.0)
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn menu(&self) -> &MenuToggle {
        &self.menu
    }

    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    pub fn hero(&self) -> Option<&HeroReplay> {
        self.hero.as_ref()
    }

    pub fn carousels(&self) -> &[PageCarousel] {
        &self.carousels
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    pub fn contact_section(&self) -> Option<&str> {
        self.contact_section.as_deref()
    }

    /// Pending smooth-scroll target, handed over once.
    pub fn take_scroll_request(&mut self) -> Option<f32> {
        self.scroll_request.take()
    }

    pub fn footer_year(&self) -> i32 {
        chrono::Local::now().year()
    }

    pub fn handle(&mut self, event: PageEvent) {
        match event {
            PageEvent::Scroll(y) => {
                self.scroll_y = y.clamp(0.0, self.max_scroll());
                self.refresh();
            }
            PageEvent::Resize { viewport_height } => {
                self.viewport_height = viewport_height;
                self.scroll_y = self.scroll_y.min(self.max_scroll());
                self.refresh();
            }
            PageEvent::NavClick(target) => {
                if let Some(top) = self.section(&target).map(|s| s.top) {
                    self.request_scroll(top);
                    self.menu.close();
                }
                if let Some(hero) = self.hero.as_mut() {
                    hero.nav_clicked(&target);
                }
            }
            PageEvent::ScrollButton(target) => {
                if let Some(top) = self.section(&target).map(|s| s.top) {
                    self.request_scroll(top);
                }
            }
            PageEvent::HamburgerClick => {
                self.menu.toggle();
            }
            PageEvent::DocumentClick(target) => self.menu.document_click(target),
            PageEvent::Carousel(index, action) => {
                let Some(entry) = self.carousels.get_mut(index) else {
                    return;
                };
                let carousel = &mut entry.carousel;
                match action {
                    CarouselAction::Prev => carousel.prev(),
                    CarouselAction::Next => carousel.next(),
                    CarouselAction::Indicator(i) if i < carousel.len() => carousel.select(i),
                    CarouselAction::Indicator(_) => {}
                    CarouselAction::PointerEnter => carousel.pointer_enter(),
                    CarouselAction::PointerLeave => carousel.pointer_leave(),
                }
            }
            PageEvent::Edit { field, value } => {
                if let Some(form) = self.form.as_mut() {
                    form.set_value(field, value);
                }
            }
            PageEvent::Submit => {
                if let Some(form) = self.form.as_mut() {
                    // Rejections are reported inline on the fields
                    let _ = form.submit();
                }
            }
            PageEvent::PageShow { persisted } => {
                if let Some(hero) = self.hero.as_mut() {
                    hero.page_shown(persisted);
                }
            }
            PageEvent::BackToTop => {
                self.request_scroll(0.0);
                if let Some(hero) = self.hero.as_mut() {
                    hero.back_to_top();
                }
            }
        }
    }

    /// Advances every timer on the page.
    pub fn update(&mut self, dt: f32) {
        for entry in self.carousels.iter_mut() {
            entry.carousel.update(dt);
        }
        if let Some(form) = self.form.as_mut() {
            form.update(dt);
        }
        if let Some(hero) = self.hero.as_mut() {
            hero.update(dt);
        }
    }

    fn request_scroll(&mut self, top: f32) {
        let target = top.clamp(0.0, self.max_scroll());
        debug!(target, "smooth scroll requested");
        self.scroll_request = Some(target);
    }

    /// Recomputes everything derived from the scroll position and viewport.
    fn refresh(&mut self) {
        if let Some(id) = self
            .spy
            .active_section(self.scroll_y, &self.sections)
            .map(|s| s.id.clone())
        {
            self.nav.set_active(&id);
        }

        for section in &self.sections {
            let ratio = visible_ratio(section.top, section.height, self.scroll_y, self.viewport_height);
            self.reveal.observe(&section.id, ratio);
            if let Some(hero) = self.hero.as_mut().filter(|h| h.section() == section.id) {
                hero.observe(ratio);
            }
        }
    }
}
