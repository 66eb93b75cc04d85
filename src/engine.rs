use std::collections::HashMap;
use std::path::PathBuf;

use raylib::ease::{self, Tween};
use raylib::prelude::*;
use tracing::debug;

use showcase::constants::*;
use showcase::state::AutoAdvance;
use showcase::{CarouselAction, ClickTarget, FieldName, Page, PageEvent, SlideContent};

const BACKGROUND: Color = Color::new(246, 247, 251, 255);
const SECTION_ALT: Color = Color::new(235, 238, 245, 255);
const INK: Color = Color::new(28, 32, 44, 255);
const MUTED: Color = Color::new(105, 112, 130, 255);
const ACCENT: Color = Color::new(52, 104, 235, 255);
const ERROR: Color = Color::new(214, 48, 49, 255);
const SUCCESS: Color = Color::new(32, 150, 90, 255);
const SLIDE_PALETTE: [Color; 4] = [
    Color::new(58, 80, 140, 255),
    Color::new(40, 120, 120, 255),
    Color::new(130, 70, 120, 255),
    Color::new(150, 100, 50, 255),
];

const DRAWER_ROW: f32 = 48.0;
const WHEEL_STEP: f32 = 80.0;

/// Clickable things on screen.
#[derive(Debug, Clone, PartialEq)]
enum Hit {
    Nav(String),
    Hamburger,
    ScrollButton(String),
    Carousel(usize, CarouselAction),
    Field(FieldName),
    Submit,
    BackToTop,
}

struct SmoothScroll {
    tween: Tween,
    elapsed: f32,
    target: f32,
}

/// Hosts a [`Page`] in a raylib window: maps input to page events, runs the
/// presentational animations and draws every frame.
pub struct PageEngine {
    page: Page,
    textures: HashMap<PathBuf, Texture2D>,

    width: f32,
    height: f32,
    was_minimized: bool,

    scroll: Option<SmoothScroll>,
    hovered: Vec<bool>,
    track: Vec<f32>,
    focus: Option<FieldName>,

    reveal_clock: HashMap<String, f32>,
    hero_clock: f32,
    hero_generation: u64,
}

impl PageEngine {
    pub fn new(page: Page, textures: HashMap<PathBuf, Texture2D>) -> Self {
        let carousels = page.carousels().len();
        let hero_generation = page.hero().map(|h| h.generation()).unwrap_or(0);
        let height = page.viewport_height();
        Self {
            page,
            textures,
            width: RENDER_WIDTH as f32,
            height,
            was_minimized: false,
            scroll: None,
            hovered: vec![false; carousels],
            track: vec![0.0; carousels],
            focus: None,
            reveal_clock: HashMap::new(),
            hero_clock: 0.0,
            hero_generation,
        }
    }

    // --- Input ---

    pub fn handle_input(&mut self, rl: &mut RaylibHandle) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;
        self.width = width;
        if rl.is_window_resized() || height != self.height {
            self.height = height;
            self.page.handle(PageEvent::Resize { viewport_height: height });
        }

        // Coming back from a minimized window counts as a cached page being shown again
        let minimized = rl.is_window_minimized();
        if self.was_minimized && !minimized {
            self.page.handle(PageEvent::PageShow { persisted: true });
        }
        self.was_minimized = minimized;

        let mouse = rl.get_mouse_position();
        self.update_hover(mouse);

        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            self.scroll = None;
            let y = self.page.scroll_y() - wheel * WHEEL_STEP;
            self.page.handle(PageEvent::Scroll(y));
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.click(mouse);
        }

        self.handle_keys(rl);
    }

    fn update_hover(&mut self, mouse: Vector2) {
        let blocked = self.in_overlay(mouse);
        for index in 0..self.hovered.len() {
            let over = !blocked
                && self
                    .carousel_rect(index)
                    .is_some_and(|r| r.check_collision_point_rec(mouse));
            if over != self.hovered[index] {
                self.hovered[index] = over;
                let action = if over {
                    CarouselAction::PointerEnter
                } else {
                    CarouselAction::PointerLeave
                };
                self.page.handle(PageEvent::Carousel(index, action));
            }
        }
    }

    fn click(&mut self, mouse: Vector2) {
        let hit = self.hit_test(mouse);
        self.focus = match &hit {
            Some(Hit::Field(field)) => Some(*field),
            _ => None,
        };
        if let Some(hit) = hit {
            debug!(?hit, "click");
            let event = match hit {
                Hit::Nav(target) => Some(PageEvent::NavClick(target)),
                Hit::Hamburger => Some(PageEvent::HamburgerClick),
                Hit::ScrollButton(target) => Some(PageEvent::ScrollButton(target)),
                Hit::Carousel(index, action) => Some(PageEvent::Carousel(index, action)),
                Hit::Submit => Some(PageEvent::Submit),
                Hit::BackToTop => Some(PageEvent::BackToTop),
                Hit::Field(_) => None,
            };
            if let Some(event) = event {
                self.page.handle(event);
            }
        }

        // The document sees every click after the element it landed on
        let target = if self.drawer_rect().is_some_and(|r| r.check_collision_point_rec(mouse)) {
            ClickTarget::Drawer
        } else if self.is_mobile() && self.hamburger_rect().check_collision_point_rec(mouse) {
            ClickTarget::Hamburger
        } else {
            ClickTarget::Elsewhere
        };
        self.page.handle(PageEvent::DocumentClick(target));
    }

    fn handle_keys(&mut self, rl: &mut RaylibHandle) {
        let Some(field) = self.focus else {
            if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
                self.page.handle(PageEvent::BackToTop);
            } else if rl.is_key_pressed(KeyboardKey::KEY_PAGE_DOWN) {
                self.scroll_by(self.height * 0.8);
            } else if rl.is_key_pressed(KeyboardKey::KEY_PAGE_UP) {
                self.scroll_by(-self.height * 0.8);
            } else if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                self.page.handle(PageEvent::DocumentClick(ClickTarget::Elsewhere));
            }
            return;
        };
        let Some(form) = self.page.form() else {
            self.focus = None;
            return;
        };

        let mut value = form.field(field).value.clone();
        let mut changed = false;
        let mut submit = false;

        while let Some(c) = rl.get_char_pressed() {
            if !c.is_control() {
                value.push(c);
                changed = true;
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            changed |= value.pop().is_some();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            if field == FieldName::Message {
                value.push('\n');
                changed = true;
            } else {
                submit = true;
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            let next = FieldName::ALL
                .iter()
                .position(|f| *f == field)
                .map(|i| FieldName::ALL[(i + 1) % FieldName::ALL.len()]);
            self.focus = next;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            self.focus = None;
        }

        if changed {
            self.page.handle(PageEvent::Edit { field, value });
        }
        if submit {
            self.page.handle(PageEvent::Submit);
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        self.scroll = None;
        self.page.handle(PageEvent::Scroll(self.page.scroll_y() + delta));
    }

    // --- Animation ---

    pub fn update(&mut self, dt: f32) {
        self.page.update(dt);

        if let Some(target) = self.page.take_scroll_request() {
            let from = self.page.scroll_y();
            self.scroll = Some(SmoothScroll {
                tween: Tween::new(ease::cubic_out, from, target, SCROLL_DURATION),
                elapsed: 0.0,
                target,
            });
        }
        if let Some(anim) = self.scroll.as_mut() {
            anim.elapsed += dt;
            let y = anim.tween.apply(dt);
            let done = anim.elapsed >= SCROLL_DURATION;
            let target = anim.target;
            self.page.handle(PageEvent::Scroll(if done { target } else { y }));
            if done {
                self.scroll = None;
            }
        }

        for element in self.page.reveal().elements() {
            let clock = self.reveal_clock.entry(element.id.clone()).or_insert(0.0);
            if element.entered {
                *clock += dt;
            } else {
                *clock = 0.0;
            }
        }

        let generation = self.page.hero().map(|h| h.generation()).unwrap_or(0);
        if generation != self.hero_generation {
            self.hero_generation = generation;
            self.hero_clock = 0.0;
        } else {
            self.hero_clock += dt;
        }

        // Ease each track toward its slide
        for (track, entry) in self.track.iter_mut().zip(self.page.carousels()) {
            let target = entry.carousel.track_offset_percent() / 100.0;
            *track += (target - *track) * (dt * 12.0).min(1.0);
        }
    }

    // --- Layout ---

    fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT as f32
    }

    fn header(&self) -> f32 {
        self.page.header_height()
    }

    fn section_y(&self, id: &str) -> Option<f32> {
        self.page.section(id).map(|s| s.top - self.page.scroll_y())
    }

    fn hamburger_rect(&self) -> Rectangle {
        Rectangle::new(self.width - 64.0, (self.header() - 44.0) / 2.0, 44.0, 44.0)
    }

    fn drawer_rect(&self) -> Option<Rectangle> {
        (self.is_mobile() && self.page.menu().is_open()).then(|| {
            let rows = self.page.nav().links().len() as f32;
            Rectangle::new(0.0, self.header(), self.width, rows * DRAWER_ROW)
        })
    }

    fn nav_rects(&self) -> Vec<(Rectangle, usize)> {
        let links = self.page.nav().links();
        if self.is_mobile() {
            return match self.drawer_rect() {
                Some(drawer) => (0..links.len())
                    .map(|i| {
                        let y = drawer.y + i as f32 * DRAWER_ROW;
                        (Rectangle::new(0.0, y, self.width, DRAWER_ROW), i)
                    })
                    .collect(),
                None => Vec::new(),
            };
        }

        let mut x = self.width - 24.0;
        let mut rects = Vec::with_capacity(links.len());
        for (i, link) in links.iter().enumerate().rev() {
            let w = text_width(&link.label, 18) + 28.0;
            x -= w;
            rects.push((Rectangle::new(x, (self.header() - 36.0) / 2.0, w, 36.0), i));
        }
        rects
    }

    fn back_to_top_rect(&self) -> Option<Rectangle> {
        (self.page.scroll_y() > self.height / 2.0)
            .then(|| Rectangle::new(self.width - 72.0, self.height - 72.0, 48.0, 48.0))
    }

    fn cta_rect(&self) -> Option<(Rectangle, String)> {
        let hero = self.page.hero()?;
        let y = self.section_y(hero.section())?;
        let target = self.page.carousels().first().map(|c| c.section.clone())?;
        Some((Rectangle::new(60.0, y + 360.0, 220.0, 48.0), target))
    }

    fn carousel_rect(&self, index: usize) -> Option<Rectangle> {
        let entry = self.page.carousels().get(index)?;
        let section = self.page.section(&entry.section)?;
        let y = section.top - self.page.scroll_y();
        Some(Rectangle::new(60.0, y + 150.0, self.width - 120.0, (section.height - 250.0).max(120.0)))
    }

    fn carousel_buttons(rect: Rectangle) -> (Rectangle, Rectangle) {
        let y = rect.y + rect.height / 2.0 - 22.0;
        (
            Rectangle::new(rect.x + 12.0, y, 44.0, 44.0),
            Rectangle::new(rect.x + rect.width - 56.0, y, 44.0, 44.0),
        )
    }

    fn indicator_center(rect: Rectangle, index: usize, count: usize) -> Vector2 {
        let spread = (index as f32 - (count as f32 - 1.0) / 2.0) * 24.0;
        Vector2::new(rect.x + rect.width / 2.0 + spread, rect.y + rect.height + 30.0)
    }

    fn form_origin(&self) -> Option<Vector2> {
        let y = self.section_y(self.page.contact_section()?)?;
        Some(Vector2::new(60.0, y + 150.0))
    }

    fn form_width(&self) -> f32 {
        (self.width - 120.0).min(640.0)
    }

    fn field_rect(&self, field: FieldName) -> Option<Rectangle> {
        let origin = self.form_origin()?;
        let (offset, height) = match field {
            FieldName::Name => (0.0, 40.0),
            FieldName::Email => (100.0, 40.0),
            FieldName::Message => (200.0, 140.0),
        };
        Some(Rectangle::new(origin.x, origin.y + offset, self.form_width(), height))
    }

    fn submit_rect(&self) -> Option<Rectangle> {
        let origin = self.form_origin()?;
        Some(Rectangle::new(origin.x, origin.y + 400.0, 160.0, 48.0))
    }

    fn in_overlay(&self, point: Vector2) -> bool {
        point.y < self.header() || self.drawer_rect().is_some_and(|r| r.check_collision_point_rec(point))
    }

    fn hit_test(&self, point: Vector2) -> Option<Hit> {
        let links = self.page.nav().links();
        for (rect, i) in self.nav_rects() {
            if rect.check_collision_point_rec(point) {
                return Some(Hit::Nav(links[i].target.clone()));
            }
        }
        if self.is_mobile() && self.hamburger_rect().check_collision_point_rec(point) {
            return Some(Hit::Hamburger);
        }
        if self.in_overlay(point) {
            return None;
        }
        if self.back_to_top_rect().is_some_and(|r| r.check_collision_point_rec(point)) {
            return Some(Hit::BackToTop);
        }

        if let Some((rect, target)) = self.cta_rect() {
            if rect.check_collision_point_rec(point) {
                return Some(Hit::ScrollButton(target));
            }
        }

        for (index, entry) in self.page.carousels().iter().enumerate() {
            let Some(rect) = self.carousel_rect(index) else {
                continue;
            };
            let (prev, next) = Self::carousel_buttons(rect);
            if prev.check_collision_point_rec(point) {
                return Some(Hit::Carousel(index, CarouselAction::Prev));
            }
            if next.check_collision_point_rec(point) {
                return Some(Hit::Carousel(index, CarouselAction::Next));
            }
            let count = entry.carousel.len();
            for i in 0..count {
                let c = Self::indicator_center(rect, i, count);
                if Rectangle::new(c.x - 10.0, c.y - 10.0, 20.0, 20.0).check_collision_point_rec(point) {
                    return Some(Hit::Carousel(index, CarouselAction::Indicator(i)));
                }
            }
        }

        if self.page.form().is_some() {
            for field in FieldName::ALL {
                if self.field_rect(field).is_some_and(|r| r.check_collision_point_rec(point)) {
                    return Some(Hit::Field(field));
                }
            }
            if self.submit_rect().is_some_and(|r| r.check_collision_point_rec(point)) {
                return Some(Hit::Submit);
            }
        }
        None
    }

    // --- Drawing ---

    fn entrance(clock: f32) -> f32 {
        ease::cubic_out(clock.min(REVEAL_DURATION), 0.0, 1.0, REVEAL_DURATION)
    }

    /// Entrance progress of a section's content, in `[0, 1]`.
    fn section_progress(&self, id: &str) -> f32 {
        if self.page.hero().is_some_and(|h| h.section() == id) {
            Self::entrance(self.hero_clock)
        } else if self.page.reveal().elements().iter().any(|e| e.id == id) {
            if self.page.reveal().is_entered(id) {
                Self::entrance(self.reveal_clock.get(id).copied().unwrap_or(0.0))
            } else {
                0.0
            }
        } else {
            1.0
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(BACKGROUND);

        for (i, section) in self.page.sections().iter().enumerate() {
            let y = section.top - self.page.scroll_y();
            if y > self.height || y + section.height < 0.0 {
                continue;
            }
            let bg = if i % 2 == 0 { BACKGROUND } else { SECTION_ALT };
            d.draw_rectangle_rec(Rectangle::new(0.0, y, self.width, section.height), bg);
            self.draw_section_content(d, &section.id, y);
        }

        self.draw_carousels(d);
        self.draw_form(d);
        self.draw_footer(d);
        self.draw_header(d);

        if let Some(rect) = self.back_to_top_rect() {
            d.draw_rectangle_rec(rect, ACCENT);
            d.draw_text("^", rect.x as i32 + 18, rect.y as i32 + 12, 28, Color::WHITE);
        }
    }

    fn draw_section_content(&self, d: &mut RaylibDrawHandle, id: &str, y: f32) {
        let Some(content) = self.page.content(id) else {
            return;
        };
        let progress = self.section_progress(id);
        let lift = (1.0 - progress) * 30.0;
        let is_hero = self.page.hero().is_some_and(|h| h.section() == id);

        if is_hero {
            let top = y + 200.0 + lift;
            d.draw_text(&content.heading, 60, top as i32, 56, fade(INK, progress));
            d.draw_text(&content.body, 60, top as i32 + 80, 24, fade(MUTED, progress));
            if let Some((rect, _)) = self.cta_rect() {
                let rect = Rectangle::new(rect.x, rect.y + lift, rect.width, rect.height);
                d.draw_rectangle_rec(rect, fade(ACCENT, progress));
                d.draw_text("See my work", rect.x as i32 + 48, rect.y as i32 + 14, 20, fade(Color::WHITE, progress));
            }
            return;
        }

        let top = y + self.header() + 30.0 + lift;
        d.draw_text(&content.heading, 60, top as i32, 36, fade(INK, progress));
        for (i, line) in content.body.lines().enumerate() {
            d.draw_text(line, 60, top as i32 + 50 + i as i32 * 26, 20, fade(MUTED, progress));
        }
    }

    fn draw_carousels(&self, d: &mut RaylibDrawHandle) {
        for (index, entry) in self.page.carousels().iter().enumerate() {
            let Some(rect) = self.carousel_rect(index) else {
                continue;
            };
            if rect.y > self.height || rect.y + rect.height + 60.0 < 0.0 {
                continue;
            }
            let alpha = self.section_progress(&entry.section);
            let carousel = &entry.carousel;

            {
                let mut s = d.begin_scissor_mode(rect.x as i32, rect.y as i32, rect.width as i32, rect.height as i32);
                for (i, slide) in carousel.slides().iter().enumerate() {
                    let x = rect.x + (i as f32 + self.track[index]) * rect.width;
                    if x + rect.width < rect.x || x > rect.x + rect.width {
                        continue;
                    }
                    let card = Rectangle::new(x, rect.y, rect.width, rect.height);
                    self.draw_slide(&mut s, slide, card, i, alpha);
                }
            }

            let (prev, next) = Self::carousel_buttons(rect);
            for (button, glyph) in [(prev, "<"), (next, ">")] {
                d.draw_rectangle_rec(button, fade(Color::WHITE, 0.85 * alpha));
                d.draw_text(glyph, button.x as i32 + 15, button.y as i32 + 10, 24, fade(INK, alpha));
            }

            let count = carousel.len();
            for (i, indicator) in carousel.indicators().iter().enumerate() {
                let c = Self::indicator_center(rect, i, count);
                let color = if indicator.active { ACCENT } else { Color::LIGHTGRAY };
                d.draw_circle(c.x as i32, c.y as i32, 6.0, fade(color, alpha));
            }

            if carousel.auto_advance() == AutoAdvance::Paused {
                d.draw_text("paused", (rect.x + rect.width) as i32 - 70, rect.y as i32 - 24, 18, fade(MUTED, alpha));
            }
        }
    }

    fn draw_slide<D: RaylibDraw>(&self, d: &mut D, slide: &SlideContent, card: Rectangle, index: usize, alpha: f32) {
        let color = SLIDE_PALETTE[index % SLIDE_PALETTE.len()];
        d.draw_rectangle_rec(card, fade(color, alpha));

        let texture = slide.image.as_ref().and_then(|p| self.textures.get(p));
        if let Some(texture) = texture {
            // Scale to fit inside the card
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;
            let scale = (card.width / tex_width).min(card.height / tex_height) * 0.9;
            let w = tex_width * scale;
            let h = tex_height * scale;
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                Rectangle::new(card.x + (card.width - w) / 2.0, card.y + (card.height - h) / 2.0, w, h),
                Vector2::new(0.0, 0.0),
                0.0,
                fade(Color::WHITE, alpha),
            );
            d.draw_text(&slide.title, card.x as i32 + 80, (card.y + card.height) as i32 - 36, 20, fade(Color::WHITE, alpha));
            return;
        }

        let x = card.x as i32 + 90;
        let y = (card.y + card.height / 2.0) as i32 - 40;
        d.draw_text(&slide.title, x, y, 36, fade(Color::WHITE, alpha));
        d.draw_text(&slide.caption, x, y + 50, 20, fade(Color::RAYWHITE, alpha));
    }

    fn draw_form(&self, d: &mut RaylibDrawHandle) {
        let (Some(form), Some(contact)) = (self.page.form(), self.page.contact_section()) else {
            return;
        };
        let alpha = self.section_progress(contact);

        for field in FieldName::ALL {
            let Some(rect) = self.field_rect(field) else {
                return;
            };
            let state = form.field(field);
            d.draw_text(field.label(), rect.x as i32, rect.y as i32 - 24, 18, fade(INK, alpha));
            d.draw_rectangle_rec(rect, fade(Color::WHITE, alpha));

            let border = if state.is_invalid() {
                ERROR
            } else if self.focus == Some(field) {
                ACCENT
            } else {
                Color::LIGHTGRAY
            };
            d.draw_rectangle_lines_ex(rect, 2.0, fade(border, alpha));

            for (i, line) in state.value.split('\n').enumerate() {
                d.draw_text(line, rect.x as i32 + 10, rect.y as i32 + 10 + i as i32 * 22, 20, fade(INK, alpha));
            }
            let message = state.error_message();
            if !message.is_empty() {
                d.draw_text(&message, rect.x as i32, (rect.y + rect.height) as i32 + 4, 16, fade(ERROR, alpha));
            }
        }

        if let Some(rect) = self.submit_rect() {
            d.draw_rectangle_rec(rect, fade(ACCENT, alpha));
            d.draw_text("Send", rect.x as i32 + 56, rect.y as i32 + 14, 20, fade(Color::WHITE, alpha));
            if !form.status().is_empty() {
                d.draw_text(form.status(), rect.x as i32, (rect.y + rect.height) as i32 + 20, 20, fade(SUCCESS, alpha));
            }
        }
    }

    fn draw_footer(&self, d: &mut RaylibDrawHandle) {
        let bottom = self.page.height() - self.page.scroll_y();
        if bottom > self.height + 40.0 {
            return;
        }
        let text = format!("(c) {} {}", self.page.footer_year(), self.page.title());
        let x = ((self.width - text_width(&text, 16)) / 2.0) as i32;
        d.draw_text(&text, x, bottom as i32 - 36, 16, MUTED);
    }

    fn draw_header(&self, d: &mut RaylibDrawHandle) {
        let header = self.header();
        d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, self.width, header), Color::WHITE);
        d.draw_line(0, header as i32, self.width as i32, header as i32, Color::LIGHTGRAY);
        d.draw_text(self.page.title(), 24, (header / 2.0) as i32 - 12, 24, INK);

        let links = self.page.nav().links();
        if self.is_mobile() {
            let rect = self.hamburger_rect();
            let open = self.page.menu().is_open();
            for bar in 0..3 {
                let y = rect.y + 12.0 + bar as f32 * 9.0;
                let color = if open { ACCENT } else { INK };
                d.draw_rectangle_rec(Rectangle::new(rect.x + 8.0, y, 28.0, 3.0), color);
            }
            if let Some(drawer) = self.drawer_rect() {
                d.draw_rectangle_rec(drawer, Color::WHITE);
            }
        }

        for (rect, i) in self.nav_rects() {
            let link = &links[i];
            let color = if link.active { ACCENT } else { INK };
            d.draw_text(&link.label, rect.x as i32 + 14, rect.y as i32 + 9, 18, color);
            if link.active {
                d.draw_rectangle_rec(Rectangle::new(rect.x + 14.0, rect.y + rect.height - 4.0, rect.width - 28.0, 2.0), ACCENT);
            }
        }
    }
}

/// Rough width of `text` in the default font.
fn text_width(text: &str, size: i32) -> f32 {
    text.chars().count() as f32 * size as f32 * 0.6
}

fn fade(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}
