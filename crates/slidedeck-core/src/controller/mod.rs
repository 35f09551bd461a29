//! Deck controller: cursor, chrome and input handling for one deck.
//!
//! The controller never owns the page. Every operation borrows the
//! [`Page`] (or just its document) for the duration of one handler, which
//! keeps the host loop free to route events, drain notifications and run
//! deferred work between calls.

use slidedeck_dom::{Document, NodeId};
use slidedeck_platform::{FullscreenHost, TaskId};
use slidedeck_types::input::{InputEvent, Key};

use crate::autoplay::AutoPlay;
use crate::config::DeckConfig;
use crate::controls::{self, Bindings};
use crate::cursor::{Cursor, Transition};
use crate::display::{self, DisplayModel};
use crate::fullscreen;
use crate::input::{self, Command, EventResult, SwipeTracker};
use crate::page::{Deferred, Page};

#[cfg(test)]
mod tests;

/// Drives one deck of panels inside a page.
#[derive(Debug)]
pub struct DeckController {
    config: DeckConfig,
    slides: Vec<NodeId>,
    /// `None` while the deck is inert (no panels, bad selector, torn down).
    cursor: Option<Cursor>,
    bindings: Bindings,
    swipe: SwipeTracker,
    autoplay: Option<AutoPlay>,
    guide_task: Option<TaskId>,
}

impl DeckController {
    /// Create a controller and initialize it against `page`.
    pub fn new<F: FullscreenHost>(config: DeckConfig, page: &mut Page<F>) -> Self {
        let mut controller = Self {
            config,
            slides: Vec::new(),
            cursor: None,
            bindings: Bindings::default(),
            swipe: SwipeTracker::default(),
            autoplay: None,
            guide_task: None,
        };
        controller.init(page);
        controller
    }

    /// Discover panels, activate the first, build the chrome and bind it.
    /// With no matching panels the controller stays inert.
    fn init<F: FullscreenHost>(&mut self, page: &mut Page<F>) {
        self.cancel_guide(page);
        self.swipe = SwipeTracker::default();

        let selector = match self.config.selector() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("slide deck disabled: {e}");
                return;
            },
        };
        self.slides = page.document.query_selector_all(&selector);
        let Some(cursor) = Cursor::new(self.slides.len()) else {
            log::warn!(
                "no slides found matching '{}'",
                self.config.slide_selector
            );
            return;
        };
        self.cursor = Some(cursor);

        let doc = &mut page.document;
        for &slide in &self.slides {
            for class in controls::SLIDE_STATE_CLASSES {
                doc.remove_class(slide, class);
            }
        }
        self.activate(doc, cursor.current());

        let guide = match controls::build(
            doc,
            cursor.total(),
            cursor.current(),
            self.config.show_keyboard_guide,
        ) {
            Ok(built) => built.guide,
            Err(e) => {
                log::warn!("navigation chrome not built: {e}");
                None
            },
        };
        if let Some(guide) = guide {
            self.guide_task = Some(page.ticks.schedule(Deferred::HideKeyboardGuide { guide }));
        }

        let doc = &mut page.document;
        if let Some(body) = doc.body() {
            doc.add_class(body, controls::PRESENTATION_MODE_CLASS);
            doc.set_attribute(body, controls::DATA_TRANSITION, &self.config.transition_mode);
        }
        self.bindings = Bindings::resolve(doc);
        controls::apply(doc, &display::render(&cursor));

        self.autoplay = self.config.auto_play_interval().and_then(AutoPlay::new);
        if self.config.auto_play && self.autoplay.is_none() {
            log::warn!("auto-play requested with a zero interval; leaving it off");
        }

        log::info!("slide deck initialized: {} slides", cursor.total());
    }

    /// Drop the current chrome and state, then initialize again from the
    /// document as it is now.
    pub fn reinitialize<F: FullscreenHost>(&mut self, page: &mut Page<F>) {
        self.teardown(page);
        self.init(page);
    }

    /// Remove everything the controller added to the page. The controller
    /// is inert afterwards until [`reinitialize`](Self::reinitialize).
    pub fn teardown<F: FullscreenHost>(&mut self, page: &mut Page<F>) {
        self.cancel_guide(page);
        let doc = &mut page.document;
        controls::remove_existing(doc);
        if let Some(body) = doc.body() {
            doc.remove_attribute(body, controls::DATA_TRANSITION);
        }
        self.slides.clear();
        self.cursor = None;
        self.bindings = Bindings::default();
        self.autoplay = None;
    }

    fn cancel_guide<F: FullscreenHost>(&mut self, page: &mut Page<F>) {
        if let Some(task) = self.guide_task.take() {
            page.ticks.cancel(task);
        }
    }

    // -- Accessors --

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Panels in deck order.
    pub fn slides(&self) -> &[NodeId] {
        &self.slides
    }

    /// Current slide, or `None` while inert.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.map(|c| c.current())
    }

    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    pub fn is_inert(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn display_model(&self) -> Option<DisplayModel> {
        self.cursor.as_ref().map(display::render)
    }

    // -- Navigation --

    pub fn go_to(&mut self, doc: &mut Document, index: usize) -> Option<Transition> {
        self.manual(doc, |c| c.go_to(index))
    }

    pub fn next(&mut self, doc: &mut Document) -> Option<Transition> {
        self.manual(doc, Cursor::next)
    }

    pub fn previous(&mut self, doc: &mut Document) -> Option<Transition> {
        self.manual(doc, Cursor::previous)
    }

    pub fn first(&mut self, doc: &mut Document) -> Option<Transition> {
        self.manual(doc, Cursor::first)
    }

    pub fn last(&mut self, doc: &mut Document) -> Option<Transition> {
        self.manual(doc, Cursor::last)
    }

    /// A user-initiated move restarts the auto-play interval.
    fn manual(
        &mut self,
        doc: &mut Document,
        step: impl FnOnce(&mut Cursor) -> Option<Transition>,
    ) -> Option<Transition> {
        let moved = self.step(doc, step);
        if moved.is_some()
            && let Some(timer) = self.autoplay.as_mut()
        {
            timer.reset();
        }
        moved
    }

    fn step(
        &mut self,
        doc: &mut Document,
        step: impl FnOnce(&mut Cursor) -> Option<Transition>,
    ) -> Option<Transition> {
        let cursor = self.cursor.as_mut()?;
        let transition = step(cursor)?;
        let model = display::render(cursor);
        self.activate(doc, transition.to);
        controls::apply(doc, &model);
        log::debug!("slide {} -> {}", transition.from, transition.to);
        Some(transition)
    }

    /// Mark panel `index` active and clear the flag everywhere else.
    fn activate(&self, doc: &mut Document, index: usize) {
        for (i, &slide) in self.slides.iter().enumerate() {
            doc.toggle_class(slide, controls::ACTIVE_CLASS, i == index);
        }
    }

    pub fn toggle_fullscreen<F: FullscreenHost>(&mut self, host: &mut F) {
        fullscreen::toggle(host);
    }

    fn run(&mut self, command: Command, page: &mut Page<impl FullscreenHost>) {
        let doc = &mut page.document;
        match command {
            Command::Previous => {
                self.previous(doc);
            },
            Command::Next => {
                self.next(doc);
            },
            Command::First => {
                self.first(doc);
            },
            Command::Last => {
                self.last(doc);
            },
            Command::GoTo(index) => {
                self.go_to(doc, index);
            },
            Command::ToggleFullscreen => self.toggle_fullscreen(&mut page.fullscreen),
        }
    }

    // -- Events --

    /// Route one input event. Inert decks ignore everything.
    pub fn handle_event<F: FullscreenHost>(
        &mut self,
        page: &mut Page<F>,
        event: &InputEvent,
    ) -> EventResult {
        if self.is_inert() {
            return EventResult::Ignored;
        }
        match event {
            InputEvent::KeyDown { key, target } => self.handle_key(page, key, *target),
            InputEvent::TouchStart { x } => {
                if !self.config.enable_swipe {
                    return EventResult::Ignored;
                }
                self.swipe.touch_start(*x);
                EventResult::Handled
            },
            InputEvent::TouchEnd { x } => {
                if !self.config.enable_swipe {
                    return EventResult::Ignored;
                }
                match self.swipe.touch_end(*x) {
                    Some(command) => {
                        self.run(command, page);
                        EventResult::Handled
                    },
                    None => EventResult::Ignored,
                }
            },
            InputEvent::Click { target } => self.handle_click(page, *target),
            InputEvent::FullscreenChange => {
                self.handle_fullscreen_change(page);
                EventResult::Handled
            },
        }
    }

    fn handle_key<F: FullscreenHost>(
        &mut self,
        page: &mut Page<F>,
        key: &Key,
        target: Option<NodeId>,
    ) -> EventResult {
        if !self.config.enable_keyboard {
            return EventResult::Ignored;
        }
        let typing = target
            .and_then(|t| page.document.element(t))
            .is_some_and(|e| e.tag.is_text_input());
        if typing {
            return EventResult::Ignored;
        }
        match input::key_command(key) {
            Some(command) => {
                self.run(command, page);
                EventResult::PreventDefault
            },
            None => EventResult::Ignored,
        }
    }

    fn handle_click<F: FullscreenHost>(&mut self, page: &mut Page<F>, target: NodeId) -> EventResult {
        let doc = &page.document;
        let command = if doc.has_class(target, controls::DOT_CLASS) {
            doc.get_attribute(target, controls::DATA_SLIDE)
                .and_then(input::parse_slide_index)
                .map(Command::GoTo)
        } else {
            self.button_command(doc, target)
        };
        match command {
            Some(command) => {
                self.run(command, page);
                EventResult::Handled
            },
            None => EventResult::Ignored,
        }
    }

    /// The bound button at or above `target`, as a command.
    fn button_command(&self, doc: &Document, target: NodeId) -> Option<Command> {
        let mut node = Some(target);
        while let Some(id) = node {
            let bound = [
                (self.bindings.prev, Command::Previous),
                (self.bindings.next, Command::Next),
                (self.bindings.fullscreen, Command::ToggleFullscreen),
            ];
            if let Some((_, command)) = bound.into_iter().find(|(b, _)| *b == Some(id)) {
                return Some(command);
            }
            node = doc.nodes.get(id).and_then(|n| n.parent);
        }
        None
    }

    /// Re-query the host and show or hide the chrome to match.
    pub fn handle_fullscreen_change<F: FullscreenHost>(&mut self, page: &mut Page<F>) {
        if self.is_inert() {
            return;
        }
        let active = page.fullscreen.is_fullscreen();
        fullscreen::sync_chrome(&mut page.document, active);
    }

    // -- Page loop --

    /// Deliver pending full-screen notifications. Returns how many arrived.
    pub fn poll_platform<F: FullscreenHost>(&mut self, page: &mut Page<F>) -> usize {
        let mut delivered = 0;
        while page.fullscreen.take_change().is_some() {
            self.handle_fullscreen_change(page);
            delivered += 1;
        }
        delivered
    }

    /// Run every task queued for the next tick.
    pub fn run_deferred<F: FullscreenHost>(&mut self, page: &mut Page<F>) -> usize {
        let tasks = page.ticks.drain();
        let ran = tasks.len();
        for (id, task) in tasks {
            if self.guide_task == Some(id) {
                self.guide_task = None;
            }
            match task {
                Deferred::HideKeyboardGuide { guide } => {
                    if page.document.is_connected(guide) {
                        page.document.add_class(guide, controls::HIDDEN_CLASS);
                        log::debug!("keyboard guide hidden");
                    }
                },
            }
        }
        ran
    }

    /// One turn of the page loop: deferred work, then notifications.
    pub fn settle<F: FullscreenHost>(&mut self, page: &mut Page<F>) {
        self.run_deferred(page);
        self.poll_platform(page);
    }

    /// Feed elapsed time to auto-play. Returns the number of slides advanced.
    pub fn tick<F: FullscreenHost>(&mut self, page: &mut Page<F>, dt_ms: u64) -> usize {
        let Some(timer) = self.autoplay.as_mut() else {
            return 0;
        };
        let due = timer.tick(dt_ms);
        let mut advanced = 0;
        for _ in 0..due {
            if self.step(&mut page.document, Cursor::next).is_none() {
                break;
            }
            advanced += 1;
        }
        advanced
    }
}
