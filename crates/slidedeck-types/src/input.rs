//! Platform-agnostic input event types.
//!
//! Every host maps its native input to these enums. The deck controller
//! never sees raw platform events.

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed. `target` is the focused node, if any.
    KeyDown { key: Key, target: Option<NodeId> },
    /// First finger touched down at horizontal position `x`.
    TouchStart { x: i32 },
    /// Last finger lifted at horizontal position `x`.
    TouchEnd { x: i32 },
    /// Pointer click on a node.
    Click { target: NodeId },
    /// The host's full-screen state changed (any vendor spelling).
    FullscreenChange,
}

/// Keys the deck reacts to, plus a catch-all for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Home,
    End,
    Escape,
    F11,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a [`Key`].
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            " " | "Space" | "Spacebar" => Self::Space,
            "Home" => Self::Home,
            "End" => Self::End,
            "Escape" | "Esc" => Self::Escape,
            "F11" => Self::F11,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical DOM `key` spelling.
    pub fn as_dom_key(&self) -> &str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::Space => " ",
            Self::Home => "Home",
            Self::End => "End",
            Self::Escape => "Escape",
            Self::F11 => "F11",
            Self::Other(s) => s,
        }
    }
}
