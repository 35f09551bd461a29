//! Shared fixtures for controller tests.

use slidedeck_dom::{NodeId, Selector};
use slidedeck_platform::MemoryFullscreen;

use crate::config::{DeckConfig, DeckOptions};
use crate::controller::DeckController;
use crate::controls;
use crate::page::{self, Page};

/// An in-memory page holding `n` slide panels.
pub fn deck_page(n: usize) -> Page<MemoryFullscreen> {
    Page::in_memory(page::slide_document(n))
}

/// Default configuration without the keyboard legend.
pub fn quiet_config() -> DeckConfig {
    DeckConfig::from_options(DeckOptions {
        show_keyboard_guide: Some(false),
        ..DeckOptions::default()
    })
}

/// A page of `n` slides with a controller already initialized on it.
pub fn deck(n: usize) -> (Page<MemoryFullscreen>, DeckController) {
    let mut page = deck_page(n);
    let controller = DeckController::new(quiet_config(), &mut page);
    (page, controller)
}

/// Connected elements carrying `class`.
pub fn count_class(page: &Page<MemoryFullscreen>, class: &str) -> usize {
    controls::count(&page.document, class)
}

/// Indices of panels carrying the `active` class.
pub fn active_slides(page: &Page<MemoryFullscreen>, controller: &DeckController) -> Vec<usize> {
    controller
        .slides()
        .iter()
        .enumerate()
        .filter(|&(_, &s)| page.document.has_class(s, controls::ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of indicator dots carrying the `active` class.
pub fn active_dots(page: &Page<MemoryFullscreen>) -> Vec<usize> {
    dots(page)
        .into_iter()
        .enumerate()
        .filter(|&(_, d)| page.document.has_class(d, controls::ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect()
}

pub fn dots(page: &Page<MemoryFullscreen>) -> Vec<NodeId> {
    let selector = Selector::parse(".indicator-dot").unwrap();
    page.document.query_selector_all(&selector)
}

/// Text of the slide counter.
pub fn counter_text(page: &Page<MemoryFullscreen>) -> String {
    let counter = page.document.get_element_by_id(controls::COUNTER_ID).unwrap();
    page.document.text_content(counter)
}

pub fn by_id(page: &Page<MemoryFullscreen>, id: &str) -> NodeId {
    page.document.get_element_by_id(id).unwrap()
}
