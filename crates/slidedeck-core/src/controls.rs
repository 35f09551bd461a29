//! Control DOM: the navigation chrome the deck generates and owns.
//!
//! Construction always starts by removing every previous copy, so repeated
//! construction never leaves duplicates. [`apply`] writes a
//! [`DisplayModel`] into whatever chrome is present, looking elements up by
//! id the way external stylesheets and scripts see them.

use slidedeck_dom::{Document, NodeId, Selector};
use slidedeck_types::error::{DeckError, Result};

use crate::display::{self, DisplayModel};

pub const PROGRESS_CLASS: &str = "slide-progress";
pub const CONTROLS_CLASS: &str = "slide-controls";
pub const GUIDE_CLASS: &str = "keyboard-guide";
pub const BUTTON_CLASS: &str = "control-btn";
pub const INDICATOR_CLASS: &str = "slide-indicator";
pub const COUNTER_CLASS: &str = "slide-number";
pub const DOT_CLASS: &str = "indicator-dot";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
/// Presentation-mode marker on body.
pub const PRESENTATION_MODE_CLASS: &str = "slide-mode";

pub const PROGRESS_ID: &str = "slideProgressBar";
pub const PREV_ID: &str = "slidePrevBtn";
pub const NEXT_ID: &str = "slideNextBtn";
pub const FULLSCREEN_ID: &str = "slideFullscreenBtn";
pub const INDICATOR_ID: &str = "slideIndicator";
pub const COUNTER_ID: &str = "slideNumber";

pub const DATA_SLIDE: &str = "data-slide";
pub const DATA_TRANSITION: &str = "data-transition";

/// Slide classes cleared when a deck is (re)initialized.
pub const SLIDE_STATE_CLASSES: [&str; 3] = [ACTIVE_CLASS, "prev", "next"];

/// Classes of the three top-level control elements.
pub const CONTROL_CLASSES: [&str; 3] = [PROGRESS_CLASS, CONTROLS_CLASS, GUIDE_CLASS];

const GUIDE_ROWS: [(&[&str], &str); 5] = [
    (&["←", "→"], "Move between slides"),
    (&["Space"], "Next slide"),
    (&["Home"], "First slide"),
    (&["End"], "Last slide"),
    (&["F11"], "Full screen"),
];

/// Top-level elements created by [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltControls {
    pub progress: NodeId,
    pub panel: NodeId,
    pub guide: Option<NodeId>,
}

/// Buttons found when binding. A missing button has no binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub fullscreen: Option<NodeId>,
}

impl Bindings {
    pub fn resolve(doc: &Document) -> Self {
        Self {
            prev: doc.get_element_by_id(PREV_ID),
            next: doc.get_element_by_id(NEXT_ID),
            fullscreen: doc.get_element_by_id(FULLSCREEN_ID),
        }
    }
}

fn class_selector(class: &str) -> Option<Selector> {
    Selector::parse(&format!(".{class}")).ok()
}

/// Remove every element carrying one of the control classes, and the
/// presentation-mode marker. Returns the number of elements removed.
pub fn remove_existing(doc: &mut Document) -> usize {
    let mut removed = 0;
    for class in CONTROL_CLASSES {
        let Some(selector) = class_selector(class) else {
            continue;
        };
        for id in doc.query_selector_all(&selector) {
            doc.remove(id);
            removed += 1;
        }
    }
    if let Some(body) = doc.body() {
        doc.remove_class(body, PRESENTATION_MODE_CLASS);
    }
    removed
}

/// Remove only the first element of each control class.
pub fn remove_first(doc: &mut Document) -> usize {
    let mut removed = 0;
    for class in CONTROL_CLASSES {
        if let Some(id) = class_selector(class).and_then(|s| doc.query_selector(&s)) {
            doc.remove(id);
            removed += 1;
        }
    }
    removed
}

/// Create an element with an optional class list and id.
fn element(doc: &mut Document, tag: &str, class: Option<&str>, id: Option<&str>) -> NodeId {
    let node = doc.create_element(tag);
    if let Some(class) = class {
        doc.set_attribute(node, "class", class);
    }
    if let Some(id) = id {
        doc.set_attribute(node, "id", id);
    }
    node
}

fn button(doc: &mut Document, id: &str, title: &str, icon: &str) -> NodeId {
    let btn = element(doc, "button", Some(BUTTON_CLASS), Some(id));
    doc.set_attribute(btn, "title", title);
    let icon_class = format!("fas {icon}");
    let glyph = element(doc, "i", Some(icon_class.as_str()), None);
    doc.append_child(btn, glyph);
    btn
}

fn build_progress(doc: &mut Document, parent: NodeId) -> NodeId {
    let bar = element(doc, "div", Some(PROGRESS_CLASS), Some(PROGRESS_ID));
    doc.append_child(parent, bar);
    bar
}

fn build_panel(doc: &mut Document, parent: NodeId, total: usize, current: usize) -> NodeId {
    let panel = element(doc, "div", Some(CONTROLS_CLASS), None);

    let prev = button(doc, PREV_ID, "Previous slide (←)", "fa-chevron-left");
    doc.append_child(panel, prev);

    let indicator = element(doc, "div", Some(INDICATOR_CLASS), Some(INDICATOR_ID));
    for i in 0..total {
        let dot = element(doc, "div", Some(DOT_CLASS), None);
        if i == 0 {
            doc.add_class(dot, ACTIVE_CLASS);
        }
        doc.set_attribute(dot, DATA_SLIDE, &i.to_string());
        doc.append_child(indicator, dot);
    }
    doc.append_child(panel, indicator);

    let counter = element(doc, "span", Some(COUNTER_CLASS), Some(COUNTER_ID));
    doc.set_text_content(counter, &display::counter_label(current, total));
    doc.append_child(panel, counter);

    let next = button(doc, NEXT_ID, "Next slide (→)", "fa-chevron-right");
    doc.append_child(panel, next);

    let fullscreen = button(doc, FULLSCREEN_ID, "Full screen (F11)", "fa-expand");
    doc.append_child(panel, fullscreen);

    doc.append_child(parent, panel);
    panel
}

fn build_guide(doc: &mut Document, parent: NodeId) -> NodeId {
    let guide = element(doc, "div", Some(GUIDE_CLASS), None);
    let title = element(doc, "h4", None, None);
    doc.set_text_content(title, "Keyboard shortcuts");
    doc.append_child(guide, title);
    for (keys, label) in GUIDE_ROWS {
        let row = element(doc, "div", None, None);
        for key in keys {
            let kbd = element(doc, "kbd", None, None);
            doc.set_text_content(kbd, key);
            doc.append_child(row, kbd);
        }
        let text = element(doc, "span", None, None);
        doc.set_text_content(text, label);
        doc.append_child(row, text);
        doc.append_child(guide, row);
    }
    doc.append_child(parent, guide);
    guide
}

/// Tear down any previous chrome, then create progress bar, control panel
/// and (optionally) the keyboard guide under body.
pub fn build(
    doc: &mut Document,
    total: usize,
    current: usize,
    with_guide: bool,
) -> Result<BuiltControls> {
    remove_existing(doc);
    let body = doc
        .body()
        .ok_or_else(|| DeckError::Dom("document has no <body>".into()))?;
    let progress = build_progress(doc, body);
    let panel = build_panel(doc, body, total, current);
    let guide = with_guide.then(|| build_guide(doc, body));
    Ok(BuiltControls {
        progress,
        panel,
        guide,
    })
}

/// Write `model` into the chrome. Missing elements are skipped.
pub fn apply(doc: &mut Document, model: &DisplayModel) {
    if let Some(prev) = doc.get_element_by_id(PREV_ID) {
        set_disabled(doc, prev, model.prev_disabled);
    }
    if let Some(next) = doc.get_element_by_id(NEXT_ID) {
        set_disabled(doc, next, model.next_disabled);
    }
    if let Some(counter) = doc.get_element_by_id(COUNTER_ID) {
        doc.set_text_content(counter, &model.counter_label);
    }
    if let Some(selector) = class_selector(DOT_CLASS) {
        for (i, dot) in doc.query_selector_all(&selector).into_iter().enumerate() {
            doc.toggle_class(dot, ACTIVE_CLASS, model.is_dot_active(i));
        }
    }
    if let Some(bar) = doc.get_element_by_id(PROGRESS_ID) {
        doc.set_style(bar, "width", &model.progress_width);
    }
}

fn set_disabled(doc: &mut Document, id: NodeId, disabled: bool) {
    if disabled {
        doc.set_attribute(id, "disabled", "");
    } else {
        doc.remove_attribute(id, "disabled");
    }
}

/// Whether a button carries the `disabled` attribute.
pub fn is_disabled(doc: &Document, id: NodeId) -> bool {
    doc.get_attribute(id, "disabled").is_some()
}

/// Count connected elements carrying `class`.
pub fn count(doc: &Document, class: &str) -> usize {
    class_selector(class)
        .map(|s| doc.query_selector_all(&s).len())
        .unwrap_or(0)
}
