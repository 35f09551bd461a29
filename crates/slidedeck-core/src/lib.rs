//! Slide deck controller.
//!
//! Turns the panels of a document into a navigable deck: a cursor over the
//! panels, generated navigation chrome (buttons, indicator dots, counter,
//! progress bar), keyboard / touch / pointer bindings, full-screen handling
//! and guarded page-ready bootstrap.
//!
//! The cursor ([`cursor::Cursor`]) and the display projection
//! ([`display::render`]) are pure and need no document. [`DeckController`]
//! wires them to a [`Page`]: the document tree plus platform services.

pub mod autoplay;
pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod controls;
pub mod cursor;
pub mod display;
pub mod fullscreen;
pub mod input;
pub mod page;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use bootstrap::Bootstrap;
pub use config::{DeckConfig, DeckOptions};
pub use controller::DeckController;
pub use cursor::{Cursor, Transition};
pub use display::{DisplayModel, render};
pub use input::{Command, EventResult};
pub use page::{Deferred, Page};

pub use slidedeck_dom as dom;
pub use slidedeck_platform as platform;
pub use slidedeck_types::error::{DeckError, Result};
pub use slidedeck_types::input::{InputEvent, Key};
