//! Full-screen capability trait and in-memory implementation.

use std::collections::VecDeque;

use slidedeck_types::error::{DeckError, Result};

// ---------------------------------------------------------------------------
// Full-screen service
// ---------------------------------------------------------------------------

/// Every spelling of the full-screen-changed notification a browser may fire.
pub const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Abstraction over the host's full-screen API.
///
/// Requests may complete later (or be refused); the confirmed state change
/// arrives as a notification the page loop pulls with [`take_change`].
///
/// [`take_change`]: FullscreenHost::take_change
pub trait FullscreenHost {
    /// Whether some element currently occupies full-screen.
    fn is_fullscreen(&self) -> bool;

    /// Ask the host to put the document root into full-screen.
    fn request_fullscreen(&mut self) -> Result<()>;

    /// Ask the host to leave full-screen.
    fn exit_fullscreen(&mut self) -> Result<()>;

    /// Pop one pending change notification, if any. The payload is the
    /// state the host reported when it fired.
    fn take_change(&mut self) -> Option<bool>;

    /// Notification names this host fires. Defaults to every vendor spelling.
    fn change_event_names(&self) -> &[&'static str] {
        &FULLSCREEN_CHANGE_EVENTS
    }

    /// Whether `name` is one of this host's change notifications.
    fn is_change_event(&self, name: &str) -> bool {
        self.change_event_names().contains(&name)
    }
}

/// In-memory full-screen host.
///
/// Flips state synchronously on request/exit and queues one change
/// notification per flip. Can be told to refuse requests, the way a browser
/// refuses full-screen outside a user gesture.
#[derive(Debug, Default)]
pub struct MemoryFullscreen {
    active: bool,
    refuse_requests: bool,
    pending: VecDeque<bool>,
    /// Number of `request_fullscreen` calls, refused or not.
    pub requests: u32,
    /// Number of `exit_fullscreen` calls.
    pub exits: u32,
}

impl MemoryFullscreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that refuses every full-screen request.
    pub fn refusing() -> Self {
        Self {
            refuse_requests: true,
            ..Self::default()
        }
    }

    pub fn set_refuse_requests(&mut self, refuse: bool) {
        self.refuse_requests = refuse;
    }

    /// Simulate the user leaving full-screen through the host itself
    /// (e.g. pressing Escape in a browser).
    pub fn user_exit(&mut self) {
        if self.active {
            self.active = false;
            self.pending.push_back(false);
        }
    }

    /// Number of undelivered change notifications.
    pub fn pending_changes(&self) -> usize {
        self.pending.len()
    }
}

impl FullscreenHost for MemoryFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.requests += 1;
        if self.refuse_requests {
            return Err(DeckError::Platform(
                "full-screen request refused by host".into(),
            ));
        }
        if !self.active {
            self.active = true;
            self.pending.push_back(true);
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.exits += 1;
        if self.active {
            self.active = false;
            self.pending.push_back(false);
        }
        Ok(())
    }

    fn take_change(&mut self) -> Option<bool> {
        self.pending.pop_front()
    }
}
