//! Input mapping: keys, swipes and indicator clicks to deck commands.

use slidedeck_types::input::Key;

/// Minimum horizontal travel, exclusive, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: i32 = 50;

/// A navigation request derived from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
    ToggleFullscreen,
}

/// What the host should do with an event after the deck saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The deck did not act on the event.
    Ignored,
    /// The deck acted; the host's default action may still run.
    Handled,
    /// The deck acted and the host's default action must be suppressed.
    PreventDefault,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Keyboard bindings.
pub fn key_command(key: &Key) -> Option<Command> {
    match key {
        Key::ArrowLeft => Some(Command::Previous),
        Key::ArrowRight | Key::Space => Some(Command::Next),
        Key::Home => Some(Command::First),
        Key::End => Some(Command::Last),
        Key::F11 => Some(Command::ToggleFullscreen),
        _ => None,
    }
}

/// Classify a completed touch. Finger moving left (start right of end)
/// advances; moving right goes back.
pub fn swipe_command(start_x: i32, end_x: i32) -> Option<Command> {
    let delta = start_x.saturating_sub(end_x);
    if delta.saturating_abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if delta > 0 {
        Some(Command::Next)
    } else {
        Some(Command::Previous)
    }
}

/// Parse an indicator dot's `data-slide` value.
pub fn parse_slide_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Pairs touch-start with touch-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<i32>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: i32) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A touch-end with no recorded start is ignored.
    pub fn touch_end(&mut self, x: i32) -> Option<Command> {
        let start = self.start_x.take()?;
        swipe_command(start, x)
    }
}
