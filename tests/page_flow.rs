use showcase::constants::{AUTO_ADVANCE_INTERVAL, CONFIRMATION_MESSAGE};
use showcase::{CarouselAction, ClickTarget, FieldName, Page, PageConfig, PageEvent};

fn page() -> Page {
    Page::from_config(&PageConfig::default(), 800.0).unwrap()
}

fn active_link(page: &Page) -> Option<String> {
    page.nav().active().map(|l| l.target.clone())
}

#[test]
fn scroll_spy_follows_scroll_position() {
    let mut page = page();
    // probe = scroll + 64 + 10
    page.handle(PageEvent::Scroll(686.0));
    assert_eq!(active_link(&page).as_deref(), Some("about"));
    page.handle(PageEvent::Scroll(685.0));
    assert_eq!(active_link(&page).as_deref(), Some("home"));
    page.handle(PageEvent::Scroll(1300.0));
    assert_eq!(active_link(&page).as_deref(), Some("projects"));
    assert_eq!(page.nav().links().iter().filter(|l| l.active).count(), 1);
}

#[test]
fn nav_click_requests_scroll_and_closes_menu() {
    let mut page = page();
    page.handle(PageEvent::HamburgerClick);
    assert!(page.menu().is_open());

    page.handle(PageEvent::NavClick("projects".to_string()));
    assert!(!page.menu().is_open());
    assert_eq!(page.take_scroll_request(), Some(1320.0));
    assert_eq!(page.take_scroll_request(), None);
}

#[test]
fn nav_click_to_missing_section_is_ignored() {
    let mut page = page();
    page.handle(PageEvent::HamburgerClick);
    page.handle(PageEvent::NavClick("blog".to_string()));
    assert!(page.menu().is_open());
    assert_eq!(page.take_scroll_request(), None);
}

#[test]
fn scroll_button_keeps_menu_state() {
    let mut page = page();
    page.handle(PageEvent::HamburgerClick);
    page.handle(PageEvent::ScrollButton("contact".to_string()));
    assert!(page.menu().is_open());
    assert_eq!(page.take_scroll_request(), Some(3200.0));
}

#[test]
fn outside_click_closes_menu() {
    let mut page = page();
    page.handle(PageEvent::HamburgerClick);
    page.handle(PageEvent::DocumentClick(ClickTarget::Drawer));
    assert!(page.menu().is_open());
    page.handle(PageEvent::DocumentClick(ClickTarget::Elsewhere));
    assert!(!page.menu().is_open());
}

#[test]
fn reveal_flags_track_viewport() {
    let mut page = page();
    assert!(!page.reveal().is_entered("skills"));
    page.handle(PageEvent::Scroll(2000.0));
    assert!(page.reveal().is_entered("skills"));
    page.handle(PageEvent::Scroll(0.0));
    assert!(!page.reveal().is_entered("skills"));
}

#[test]
fn resize_reclamps_scroll_and_recomputes_visibility() {
    let mut page = page();
    page.handle(PageEvent::Scroll(1.0e6));
    assert_eq!(page.scroll_y(), 3220.0);
    assert_eq!(active_link(&page).as_deref(), Some("contact"));
    assert!(!page.reveal().is_entered("certificates"));

    page.handle(PageEvent::Resize { viewport_height: 1200.0 });
    assert_eq!(page.max_scroll(), 2820.0);
    assert_eq!(page.scroll_y(), page.max_scroll());
    // probe = 2820 + 64 + 10 falls inside certificates (2560..3200)
    assert_eq!(active_link(&page).as_deref(), Some("certificates"));
    assert!(page.reveal().is_entered("certificates"));
    assert!(page.reveal().is_entered("contact"));
    assert!(!page.reveal().is_entered("skills"));
}

#[test]
fn shrinking_viewport_hides_hero_until_it_grows_back() {
    let mut page = page();
    // 400 of the hero's 760px stays on screen, under the 0.65 share
    page.handle(PageEvent::Resize { viewport_height: 400.0 });
    assert_eq!(page.scroll_y(), 0.0);
    assert_eq!(page.hero().unwrap().generation(), 0);
    page.handle(PageEvent::Resize { viewport_height: 800.0 });
    assert_eq!(page.hero().unwrap().generation(), 1);
    // Growing further keeps it visible, so no second replay
    page.handle(PageEvent::Resize { viewport_height: 1200.0 });
    assert_eq!(page.hero().unwrap().generation(), 1);
}

#[test]
fn hero_replays_when_scrolled_back() {
    let mut page = page();
    let start = page.hero().unwrap().generation();
    page.handle(PageEvent::Scroll(1500.0));
    page.handle(PageEvent::Scroll(0.0));
    assert_eq!(page.hero().unwrap().generation(), start + 1);
}

#[test]
fn back_to_top_scrolls_and_replays_later() {
    let mut page = page();
    page.handle(PageEvent::BackToTop);
    assert_eq!(page.take_scroll_request(), Some(0.0));
    page.update(0.5);
    assert_eq!(page.hero().unwrap().generation(), 0);
    page.update(0.25);
    assert_eq!(page.hero().unwrap().generation(), 1);
}

#[test]
fn cache_restore_replays_hero() {
    let mut page = page();
    page.handle(PageEvent::PageShow { persisted: false });
    page.update(1.0);
    assert_eq!(page.hero().unwrap().generation(), 0);
    page.handle(PageEvent::PageShow { persisted: true });
    page.update(0.1);
    assert_eq!(page.hero().unwrap().generation(), 1);
}

#[test]
fn carousels_rotate_independently() {
    let mut page = page();
    page.handle(PageEvent::Carousel(1, CarouselAction::Next));
    page.update(AUTO_ADVANCE_INTERVAL);

    let projects = &page.carousels()[0].carousel;
    let certificates = &page.carousels()[1].carousel;
    assert_eq!(projects.current_index(), 1);
    assert_eq!(certificates.current_index(), 1);
    assert!(!certificates.is_timer_scheduled());
}

#[test]
fn hovered_carousel_holds_its_slide() {
    let mut page = page();
    page.handle(PageEvent::Carousel(0, CarouselAction::PointerEnter));
    page.update(AUTO_ADVANCE_INTERVAL * 3.0);
    assert_eq!(page.carousels()[0].carousel.current_index(), 0);

    page.handle(PageEvent::Carousel(0, CarouselAction::PointerLeave));
    page.update(AUTO_ADVANCE_INTERVAL);
    assert_eq!(page.carousels()[0].carousel.current_index(), 1);
}

#[test]
fn indicator_click_jumps_to_slide() {
    let mut page = page();
    page.handle(PageEvent::Carousel(0, CarouselAction::Indicator(3)));
    let carousel = &page.carousels()[0].carousel;
    assert_eq!(carousel.current_index(), 3);
    assert!(carousel.indicators()[3].active);
}

#[test]
fn contact_form_round_trip() {
    let mut page = page();
    page.handle(PageEvent::Submit);
    let form = page.form().unwrap();
    assert!(FieldName::ALL.iter().all(|f| form.field(*f).is_invalid()));
    assert_eq!(form.status(), "");

    for (field, value) in [
        (FieldName::Name, "Ada"),
        (FieldName::Email, "ada@example.com"),
        (FieldName::Message, "Hello!"),
    ] {
        page.handle(PageEvent::Edit {
            field,
            value: value.to_string(),
        });
    }
    page.handle(PageEvent::Submit);
    assert_eq!(page.form().unwrap().status(), CONFIRMATION_MESSAGE);
    assert!(page.form().unwrap().field(FieldName::Name).value.is_empty());

    page.update(3.5);
    assert_eq!(page.form().unwrap().status(), "");
}
