use super::*;
use crate::config::DeckOptions;
use crate::controls::{
    ACTIVE_CLASS, CONTROLS_CLASS, COUNTER_ID, DATA_TRANSITION, DOT_CLASS, FULLSCREEN_ID,
    GUIDE_CLASS, HIDDEN_CLASS, NEXT_ID, PRESENTATION_MODE_CLASS, PREV_ID, PROGRESS_CLASS,
    PROGRESS_ID,
};
use crate::test_utils::*;
use slidedeck_platform::MemoryFullscreen;

fn key(k: Key) -> InputEvent {
    InputEvent::KeyDown { key: k, target: None }
}

fn press(page: &mut Page<MemoryFullscreen>, c: &mut DeckController, k: Key) -> EventResult {
    c.handle_event(page, &key(k))
}

fn swipe(page: &mut Page<MemoryFullscreen>, c: &mut DeckController, from: i32, to: i32) {
    c.handle_event(page, &InputEvent::TouchStart { x: from });
    c.handle_event(page, &InputEvent::TouchEnd { x: to });
}

fn click(page: &mut Page<MemoryFullscreen>, c: &mut DeckController, target: NodeId) -> EventResult {
    c.handle_event(page, &InputEvent::Click { target })
}

fn with_options(n: usize, options: DeckOptions) -> (Page<MemoryFullscreen>, DeckController) {
    let mut page = deck_page(n);
    let c = DeckController::new(DeckConfig::from_options(options), &mut page);
    (page, c)
}

// -- Initialization --

#[test]
fn init_activates_first_slide() {
    let (page, c) = deck(4);
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(c.total_slides(), 4);
    assert!(!c.is_inert());
    assert_eq!(active_slides(&page, &c), vec![0]);
    assert_eq!(active_dots(&page), vec![0]);
    assert_eq!(counter_text(&page), "1 / 4");
    let prev = by_id(&page, PREV_ID);
    assert!(controls::is_disabled(&page.document, prev));
    let bar = by_id(&page, PROGRESS_ID);
    assert_eq!(page.document.style(bar, "width"), Some("25%"));
}

#[test]
fn init_marks_body() {
    let (page, _c) = deck(2);
    let body = page.document.body().unwrap();
    assert!(page.document.has_class(body, PRESENTATION_MODE_CLASS));
    assert_eq!(page.document.get_attribute(body, DATA_TRANSITION), Some("slide"));
}

#[test]
fn init_clears_preexisting_slide_state() {
    let mut page = deck_page(3);
    let slides = page
        .document
        .query_selector_all(&slidedeck_dom::Selector::parse(".slide-container").unwrap());
    page.document.add_class(slides[2], ACTIVE_CLASS);
    page.document.add_class(slides[1], "prev");
    let c = DeckController::new(quiet_config(), &mut page);
    assert_eq!(active_slides(&page, &c), vec![0]);
    assert!(!page.document.has_class(slides[1], "prev"));
}

#[test]
fn no_slides_means_inert() {
    let (mut page, mut c) = deck(0);
    assert!(c.is_inert());
    assert_eq!(c.current_index(), None);
    assert_eq!(c.display_model(), None);
    assert_eq!(count_class(&page, CONTROLS_CLASS), 0);
    assert_eq!(count_class(&page, PROGRESS_CLASS), 0);
    assert_eq!(press(&mut page, &mut c, Key::ArrowRight), EventResult::Ignored);
    assert_eq!(c.handle_event(&mut page, &InputEvent::FullscreenChange), EventResult::Ignored);
    assert!(c.next(&mut page.document).is_none());
}

#[test]
fn bad_selector_means_inert() {
    let (page, c) = with_options(
        3,
        DeckOptions {
            slide_selector: Some("div + section".into()),
            ..DeckOptions::default()
        },
    );
    assert!(c.is_inert());
    assert_eq!(count_class(&page, CONTROLS_CLASS), 0);
}

#[test]
fn custom_selector_finds_panels() {
    let mut page = deck_page(0);
    let body = page.document.body().unwrap();
    for _ in 0..3 {
        let panel = page.document.create_element("div");
        page.document.add_class(panel, "page");
        page.document.append_child(body, panel);
    }
    let config = DeckConfig::from_options(DeckOptions {
        slide_selector: Some("div.page".into()),
        show_keyboard_guide: Some(false),
        ..DeckOptions::default()
    });
    let c = DeckController::new(config, &mut page);
    assert_eq!(c.total_slides(), 3);
    assert_eq!(count_class(&page, DOT_CLASS), 3);
}

#[test]
fn combinator_selector_finds_panels() {
    for selector in ["body .slide-container", "body > section.slide-container"] {
        let (page, c) = with_options(
            3,
            DeckOptions {
                slide_selector: Some(selector.into()),
                show_keyboard_guide: Some(false),
                ..DeckOptions::default()
            },
        );
        assert!(!c.is_inert(), "{selector}");
        assert_eq!(c.total_slides(), 3, "{selector}");
        assert_eq!(count_class(&page, DOT_CLASS), 3);
    }
}

// -- Cursor and display --

#[test]
fn every_index_renders_consistently() {
    let n = 6;
    let (mut page, mut c) = deck(n);
    for i in (0..n).rev() {
        c.go_to(&mut page.document, i);
        assert_eq!(counter_text(&page), format!("{} / {}", i + 1, n));
        assert_eq!(active_dots(&page), vec![i]);
        assert_eq!(active_slides(&page, &c), vec![i]);
        let prev = by_id(&page, PREV_ID);
        let next = by_id(&page, NEXT_ID);
        assert_eq!(controls::is_disabled(&page.document, prev), i == 0);
        assert_eq!(controls::is_disabled(&page.document, next), i == n - 1);
        let bar = by_id(&page, PROGRESS_ID);
        let expected = display::progress_percent(i, n);
        assert_eq!(page.document.style(bar, "width"), Some(format!("{expected}%").as_str()));
    }
}

#[test]
fn go_to_out_of_range_or_current_changes_nothing() {
    let (mut page, mut c) = deck(3);
    c.go_to(&mut page.document, 1);
    let before = c.display_model();
    assert!(c.go_to(&mut page.document, 3).is_none());
    assert!(c.go_to(&mut page.document, usize::MAX).is_none());
    assert!(c.go_to(&mut page.document, 1).is_none());
    assert_eq!(c.display_model(), before);
    assert_eq!(active_slides(&page, &c), vec![1]);
}

#[test]
fn next_stops_at_last() {
    let n = 5;
    let (mut page, mut c) = deck(n);
    for _ in 0..n - 1 {
        assert!(c.next(&mut page.document).is_some());
    }
    assert_eq!(c.current_index(), Some(n - 1));
    assert!(c.next(&mut page.document).is_none());
    assert_eq!(c.current_index(), Some(n - 1));
}

#[test]
fn previous_at_first_is_noop() {
    let (mut page, mut c) = deck(4);
    assert!(c.previous(&mut page.document).is_none());
    c.last(&mut page.document);
    assert_eq!(
        c.previous(&mut page.document),
        Some(Transition { from: 3, to: 2 })
    );
}

#[test]
fn stray_active_panels_are_swept() {
    let (mut page, mut c) = deck(4);
    let stray = c.slides()[3];
    page.document.add_class(stray, ACTIVE_CLASS);
    c.go_to(&mut page.document, 1);
    assert_eq!(active_slides(&page, &c), vec![1]);
}

#[test]
fn worked_example_five_slides() {
    let (mut page, mut c) = deck(5);
    let mut visited = Vec::new();
    c.next(&mut page.document);
    visited.push(c.current_index());
    c.next(&mut page.document);
    visited.push(c.current_index());
    c.go_to(&mut page.document, 10);
    visited.push(c.current_index());
    c.previous(&mut page.document);
    visited.push(c.current_index());
    press(&mut page, &mut c, Key::End);
    visited.push(c.current_index());
    assert_eq!(visited, vec![Some(1), Some(2), Some(2), Some(1), Some(4)]);
    assert_eq!(counter_text(&page), "5 / 5");
}

#[test]
fn single_slide_disables_both_buttons() {
    let (mut page, mut c) = deck(1);
    let prev = by_id(&page, PREV_ID);
    let next = by_id(&page, NEXT_ID);
    assert!(controls::is_disabled(&page.document, prev));
    assert!(controls::is_disabled(&page.document, next));
    assert!(c.next(&mut page.document).is_none());
    assert_eq!(counter_text(&page), "1 / 1");
}

// -- Keyboard --

#[test]
fn key_bindings_navigate_and_prevent_default() {
    let (mut page, mut c) = deck(5);
    assert_eq!(press(&mut page, &mut c, Key::ArrowRight), EventResult::PreventDefault);
    assert_eq!(c.current_index(), Some(1));
    press(&mut page, &mut c, Key::Space);
    assert_eq!(c.current_index(), Some(2));
    press(&mut page, &mut c, Key::ArrowLeft);
    assert_eq!(c.current_index(), Some(1));
    press(&mut page, &mut c, Key::End);
    assert_eq!(c.current_index(), Some(4));
    press(&mut page, &mut c, Key::Home);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn bound_key_at_boundary_still_prevents_default() {
    let (mut page, mut c) = deck(3);
    assert_eq!(press(&mut page, &mut c, Key::ArrowLeft), EventResult::PreventDefault);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn unbound_keys_are_ignored() {
    let (mut page, mut c) = deck(3);
    for k in [Key::ArrowUp, Key::ArrowDown, Key::Escape, Key::Other("x".into())] {
        assert_eq!(press(&mut page, &mut c, k), EventResult::Ignored);
    }
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn keys_in_text_fields_are_ignored() {
    let (mut page, mut c) = deck(3);
    let body = page.document.body().unwrap();
    for tag in ["input", "textarea"] {
        let field = page.document.create_element(tag);
        page.document.append_child(body, field);
        let event = InputEvent::KeyDown {
            key: Key::ArrowRight,
            target: Some(field),
        };
        assert_eq!(c.handle_event(&mut page, &event), EventResult::Ignored);
    }
    assert_eq!(c.current_index(), Some(0));

    let div = page.document.create_element("div");
    page.document.append_child(body, div);
    let event = InputEvent::KeyDown {
        key: Key::ArrowRight,
        target: Some(div),
    };
    assert_eq!(c.handle_event(&mut page, &event), EventResult::PreventDefault);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn keyboard_can_be_disabled() {
    let (mut page, mut c) = with_options(
        3,
        DeckOptions {
            enable_keyboard: Some(false),
            show_keyboard_guide: Some(false),
            ..DeckOptions::default()
        },
    );
    assert_eq!(press(&mut page, &mut c, Key::ArrowRight), EventResult::Ignored);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn f11_toggles_fullscreen() {
    let (mut page, mut c) = deck(3);
    assert_eq!(press(&mut page, &mut c, Key::F11), EventResult::PreventDefault);
    assert!(page.fullscreen.is_fullscreen());
    press(&mut page, &mut c, Key::F11);
    assert!(!page.fullscreen.is_fullscreen());
}

// -- Touch --

#[test]
fn swipe_left_sixty_advances_once() {
    let (mut page, mut c) = deck(4);
    swipe(&mut page, &mut c, 260, 200);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn swipe_right_goes_back() {
    let (mut page, mut c) = deck(4);
    c.go_to(&mut page.document, 2);
    swipe(&mut page, &mut c, 100, 300);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn short_swipe_does_nothing() {
    let (mut page, mut c) = deck(4);
    swipe(&mut page, &mut c, 230, 200);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn touch_end_without_start_is_ignored() {
    let (mut page, mut c) = deck(4);
    let result = c.handle_event(&mut page, &InputEvent::TouchEnd { x: -500 });
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn touch_is_never_prevent_default() {
    let (mut page, mut c) = deck(4);
    let start = c.handle_event(&mut page, &InputEvent::TouchStart { x: 300 });
    let end = c.handle_event(&mut page, &InputEvent::TouchEnd { x: 0 });
    assert_ne!(start, EventResult::PreventDefault);
    assert_eq!(end, EventResult::Handled);
}

#[test]
fn swipe_can_be_disabled() {
    let (mut page, mut c) = with_options(
        4,
        DeckOptions {
            enable_swipe: Some(false),
            show_keyboard_guide: Some(false),
            ..DeckOptions::default()
        },
    );
    swipe(&mut page, &mut c, 400, 0);
    assert_eq!(c.current_index(), Some(0));
}

// -- Pointer --

#[test]
fn buttons_navigate() {
    let (mut page, mut c) = deck(3);
    let next = by_id(&page, NEXT_ID);
    let prev = by_id(&page, PREV_ID);
    assert_eq!(click(&mut page, &mut c, next), EventResult::Handled);
    click(&mut page, &mut c, next);
    assert_eq!(c.current_index(), Some(2));
    click(&mut page, &mut c, prev);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn click_on_button_icon_reaches_button() {
    let (mut page, mut c) = deck(3);
    let next = by_id(&page, NEXT_ID);
    let icon = page.document.get(next).children[0];
    click(&mut page, &mut c, icon);
    assert_eq!(c.current_index(), Some(1));
}

#[test]
fn fullscreen_button_toggles() {
    let (mut page, mut c) = deck(3);
    let fs = by_id(&page, FULLSCREEN_ID);
    click(&mut page, &mut c, fs);
    assert!(page.fullscreen.is_fullscreen());
    assert_eq!(page.fullscreen.requests, 1);
}

#[test]
fn missing_button_has_no_binding() {
    // No body: panels exist but the chrome has nowhere to go.
    let mut doc = slidedeck_dom::Document::new();
    let root = doc.root;
    for _ in 0..2 {
        let panel = doc.create_element("section");
        doc.add_class(panel, crate::page::SLIDE_CLASS);
        doc.append_child(root, panel);
    }
    let mut page = Page::in_memory(doc);
    let mut c = DeckController::new(quiet_config(), &mut page);
    assert!(!c.is_inert());
    assert_eq!(count_class(&page, CONTROLS_CLASS), 0);

    // Buttons are resolved at bind time; one added later is not bound.
    let late = page.document.create_element("button");
    page.document.set_attribute(late, "id", NEXT_ID);
    page.document.append_child(root, late);
    assert_eq!(click(&mut page, &mut c, late), EventResult::Ignored);
    assert_eq!(c.current_index(), Some(0));

    // Navigation still works without chrome.
    assert!(c.next(&mut page.document).is_some());
}

#[test]
fn dot_click_jumps() {
    let (mut page, mut c) = deck(5);
    let target = dots(&page)[3];
    assert_eq!(click(&mut page, &mut c, target), EventResult::Handled);
    assert_eq!(c.current_index(), Some(3));
    assert_eq!(active_dots(&page), vec![3]);
}

#[test]
fn dot_lookup_is_delegated() {
    let (mut page, mut c) = deck(3);
    // A dot the deck never created still routes through the click handler.
    let body = page.document.body().unwrap();
    let extra = page.document.create_element("div");
    page.document.add_class(extra, DOT_CLASS);
    page.document.set_attribute(extra, "data-slide", "2");
    page.document.append_child(body, extra);
    click(&mut page, &mut c, extra);
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn bad_dot_values_are_noops() {
    let (mut page, mut c) = deck(3);
    let target = dots(&page)[1];
    for value in ["-1", "abc", "", "9"] {
        page.document.set_attribute(target, "data-slide", value);
        click(&mut page, &mut c, target);
        assert_eq!(c.current_index(), Some(0), "value {value:?}");
    }
}

#[test]
fn unrelated_click_is_ignored() {
    let (mut page, mut c) = deck(3);
    let slide = c.slides()[0];
    assert_eq!(click(&mut page, &mut c, slide), EventResult::Ignored);
    assert_eq!(click(&mut page, &mut c, 10_000), EventResult::Ignored);
}

// -- Full-screen --

#[test]
fn fullscreen_change_hides_and_restores_chrome() {
    let (mut page, mut c) = deck(4);
    c.go_to(&mut page.document, 2);
    let panel = page
        .document
        .query_selector(&slidedeck_dom::Selector::parse(".slide-controls").unwrap())
        .unwrap();
    let bar = by_id(&page, PROGRESS_ID);

    c.toggle_fullscreen(&mut page.fullscreen);
    // Chrome only changes once the host reports the change.
    assert_eq!(page.document.style(panel, "display"), None);
    assert_eq!(c.poll_platform(&mut page), 1);
    assert_eq!(page.document.style(panel, "display"), Some("none"));
    assert_eq!(page.document.style(bar, "display"), Some("none"));
    assert_eq!(c.current_index(), Some(2));

    page.fullscreen.user_exit();
    c.poll_platform(&mut page);
    assert_eq!(page.document.style(panel, "display"), Some("flex"));
    assert_eq!(page.document.style(bar, "display"), Some("block"));
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn fullscreen_change_requeries_host() {
    let (mut page, mut c) = deck(2);
    // A stray notification while not full-screen restores the chrome.
    let result = c.handle_event(&mut page, &InputEvent::FullscreenChange);
    assert_eq!(result, EventResult::Handled);
    let bar = by_id(&page, PROGRESS_ID);
    assert_eq!(page.document.style(bar, "display"), Some("block"));
}

#[test]
fn refused_fullscreen_is_swallowed() {
    let mut page = Page::new(crate::page::slide_document(3), MemoryFullscreen::refusing());
    let mut c = DeckController::new(quiet_config(), &mut page);
    assert_eq!(
        c.handle_event(&mut page, &key(Key::F11)),
        EventResult::PreventDefault
    );
    assert!(!page.fullscreen.is_fullscreen());
    assert_eq!(c.poll_platform(&mut page), 0);
    assert_eq!(c.current_index(), Some(0));
}

// -- Keyboard guide --

#[test]
fn guide_hidden_on_next_tick() {
    let mut page = deck_page(3);
    let c_config = DeckConfig::default();
    let mut c = DeckController::new(c_config, &mut page);
    let guide = page
        .document
        .query_selector(&slidedeck_dom::Selector::parse(".keyboard-guide").unwrap())
        .unwrap();
    assert!(!page.document.has_class(guide, HIDDEN_CLASS));
    assert_eq!(page.ticks.len(), 1);
    assert_eq!(c.run_deferred(&mut page), 1);
    assert!(page.document.has_class(guide, HIDDEN_CLASS));
    assert_eq!(c.run_deferred(&mut page), 0);
}

#[test]
fn guide_task_cancelled_on_teardown() {
    let mut page = deck_page(3);
    let mut c = DeckController::new(DeckConfig::default(), &mut page);
    assert_eq!(page.ticks.len(), 1);
    c.teardown(&mut page);
    assert!(page.ticks.is_empty());
    assert_eq!(count_class(&page, GUIDE_CLASS), 0);
}

#[test]
fn guide_task_replaced_on_rebuild() {
    let mut page = deck_page(3);
    let mut c = DeckController::new(DeckConfig::default(), &mut page);
    c.reinitialize(&mut page);
    assert_eq!(page.ticks.len(), 1);
    assert_eq!(count_class(&page, GUIDE_CLASS), 1);
    c.settle(&mut page);
    let guide = page
        .document
        .query_selector(&slidedeck_dom::Selector::parse(".keyboard-guide").unwrap())
        .unwrap();
    assert!(page.document.has_class(guide, HIDDEN_CLASS));
}

#[test]
fn hide_task_skips_detached_guide() {
    let mut page = deck_page(3);
    let mut c = DeckController::new(DeckConfig::default(), &mut page);
    let guide = page
        .document
        .query_selector(&slidedeck_dom::Selector::parse(".keyboard-guide").unwrap())
        .unwrap();
    page.document.remove(guide);
    assert_eq!(c.run_deferred(&mut page), 1);
    assert!(!page.document.has_class(guide, HIDDEN_CLASS));
}

// -- Construction idempotence --

#[test]
fn two_constructions_leave_one_set_of_chrome() {
    let mut page = deck_page(4);
    let _first = DeckController::new(DeckConfig::default(), &mut page);
    let second = DeckController::new(DeckConfig::default(), &mut page);
    assert_eq!(count_class(&page, PROGRESS_CLASS), 1);
    assert_eq!(count_class(&page, CONTROLS_CLASS), 1);
    assert_eq!(count_class(&page, GUIDE_CLASS), 1);
    assert_eq!(count_class(&page, DOT_CLASS), 4);
    assert_eq!(second.current_index(), Some(0));
}

#[test]
fn reinitialize_resets_and_rediscovers() {
    let (mut page, mut c) = deck(3);
    c.go_to(&mut page.document, 2);
    let body = page.document.body().unwrap();
    let extra = page.document.create_element("section");
    page.document.add_class(extra, crate::page::SLIDE_CLASS);
    page.document.append_child(body, extra);

    c.reinitialize(&mut page);
    assert_eq!(c.total_slides(), 4);
    assert_eq!(c.current_index(), Some(0));
    assert_eq!(count_class(&page, DOT_CLASS), 4);
    assert_eq!(count_class(&page, CONTROLS_CLASS), 1);
    assert_eq!(counter_text(&page), "1 / 4");
    assert_eq!(active_slides(&page, &c), vec![0]);
}

#[test]
fn teardown_removes_chrome_and_goes_inert() {
    let (mut page, mut c) = deck(3);
    c.teardown(&mut page);
    assert!(c.is_inert());
    assert_eq!(count_class(&page, PROGRESS_CLASS), 0);
    assert_eq!(count_class(&page, CONTROLS_CLASS), 0);
    let body = page.document.body().unwrap();
    assert!(!page.document.has_class(body, PRESENTATION_MODE_CLASS));
    assert_eq!(page.document.get_attribute(body, DATA_TRANSITION), None);
    assert_eq!(press(&mut page, &mut c, Key::ArrowRight), EventResult::Ignored);
    assert!(page.document.get_element_by_id(COUNTER_ID).is_none());
}

// -- Auto-play --

fn autoplay_deck(n: usize, interval: u64) -> (Page<MemoryFullscreen>, DeckController) {
    with_options(
        n,
        DeckOptions {
            auto_play: Some(true),
            auto_play_interval_ms: Some(interval),
            show_keyboard_guide: Some(false),
            ..DeckOptions::default()
        },
    )
}

#[test]
fn autoplay_advances_per_interval() {
    let (mut page, mut c) = autoplay_deck(4, 1000);
    assert_eq!(c.tick(&mut page, 999), 0);
    assert_eq!(c.tick(&mut page, 1), 1);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.tick(&mut page, 2000), 2);
    assert_eq!(c.current_index(), Some(3));
    assert_eq!(counter_text(&page), "4 / 4");
}

#[test]
fn autoplay_stops_at_last() {
    let (mut page, mut c) = autoplay_deck(2, 100);
    assert_eq!(c.tick(&mut page, 10_000), 1);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.tick(&mut page, 10_000), 0);
}

#[test]
fn manual_navigation_resets_autoplay() {
    let (mut page, mut c) = autoplay_deck(5, 1000);
    c.tick(&mut page, 900);
    press(&mut page, &mut c, Key::ArrowRight);
    assert_eq!(c.tick(&mut page, 900), 0);
    assert_eq!(c.current_index(), Some(1));
    assert_eq!(c.tick(&mut page, 100), 1);
    assert_eq!(c.current_index(), Some(2));
}

#[test]
fn interval_without_auto_play_flag_never_advances() {
    let (mut page, mut c) = with_options(
        3,
        DeckOptions {
            auto_play: Some(false),
            auto_play_interval_ms: Some(100),
            show_keyboard_guide: Some(false),
            ..DeckOptions::default()
        },
    );
    assert_eq!(c.tick(&mut page, 10_000), 0);
    assert_eq!(c.current_index(), Some(0));
}

#[test]
fn navigation_does_not_grow_the_document() {
    let (mut page, mut c) = deck(5);
    c.next(&mut page.document);
    let arena = page.document.nodes.len();
    for _ in 0..100 {
        c.next(&mut page.document);
        c.previous(&mut page.document);
        c.last(&mut page.document);
        c.first(&mut page.document);
    }
    assert_eq!(page.document.nodes.len(), arena);
    assert_eq!(counter_text(&page), "1 / 5");
}

#[test]
fn autoplay_off_or_zero_interval_never_advances() {
    let (mut page, mut c) = deck(3);
    assert_eq!(c.tick(&mut page, 1_000_000), 0);
    let (mut page, mut c) = autoplay_deck(3, 0);
    assert_eq!(c.tick(&mut page, 1_000_000), 0);
    assert_eq!(c.current_index(), Some(0));
}

mod prop {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Next,
        Previous,
        First,
        Last,
        GoTo(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Previous),
            Just(Op::First),
            Just(Op::Last),
            (0usize..20).prop_map(Op::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn dom_tracks_cursor(n in 1usize..12, ops in proptest::collection::vec(op(), 0..40)) {
            let (mut page, mut c) = deck(n);
            for op in ops {
                let doc = &mut page.document;
                match op {
                    Op::Next => { c.next(doc); },
                    Op::Previous => { c.previous(doc); },
                    Op::First => { c.first(doc); },
                    Op::Last => { c.last(doc); },
                    Op::GoTo(i) => { c.go_to(doc, i); },
                }
                let i = c.current_index().unwrap();
                prop_assert!(i < n);
                prop_assert_eq!(active_slides(&page, &c), vec![i]);
                prop_assert_eq!(active_dots(&page), vec![i]);
                prop_assert_eq!(counter_text(&page), format!("{} / {}", i + 1, n));
            }
        }
    }
}
