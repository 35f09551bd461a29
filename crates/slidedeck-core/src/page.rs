//! The page a deck lives in: document tree plus platform services.

use slidedeck_dom::{Document, NodeId};
use slidedeck_platform::{FullscreenHost, MemoryFullscreen, TickQueue};
use slidedeck_types::input::InputEvent;

/// Work deferred to the next turn of the page loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Hide the keyboard-shortcut legend after its one-frame flash.
    HideKeyboardGuide { guide: NodeId },
}

/// Document, full-screen host and next-tick queue, owned by the host loop
/// and lent to the controller for each event.
#[derive(Debug)]
pub struct Page<F: FullscreenHost = MemoryFullscreen> {
    pub document: Document,
    pub fullscreen: F,
    pub ticks: TickQueue<Deferred>,
}

impl<F: FullscreenHost> Page<F> {
    pub fn new(document: Document, fullscreen: F) -> Self {
        Self {
            document,
            fullscreen,
            ticks: TickQueue::new(),
        }
    }

    /// Translate a named DOM notification into an input event. Only the
    /// full-screen change spellings the host fires are recognised here;
    /// keyboard, touch and click events carry payloads and are built by the
    /// host directly.
    pub fn notification(&self, name: &str) -> Option<InputEvent> {
        self.fullscreen
            .is_change_event(name)
            .then_some(InputEvent::FullscreenChange)
    }
}

impl Page<MemoryFullscreen> {
    /// A page over `document` with an in-memory full-screen host.
    pub fn in_memory(document: Document) -> Self {
        Self::new(document, MemoryFullscreen::new())
    }
}

/// Class the default slide selector looks for.
pub const SLIDE_CLASS: &str = "slide-container";

/// Build a document whose body holds `count` slide panels
/// (`section.slide-container`, each with a heading).
pub fn slide_document(count: usize) -> Document {
    let mut doc = Document::with_body();
    let Some(body) = doc.body() else {
        return doc;
    };
    for i in 0..count {
        let section = doc.create_element("section");
        doc.add_class(section, SLIDE_CLASS);
        doc.set_attribute(section, "id", &format!("slide-{}", i + 1));
        doc.append_child(body, section);
        let heading = doc.create_element("h4");
        doc.set_text_content(heading, &format!("Slide {}", i + 1));
        doc.append_child(section, heading);
    }
    doc
}
