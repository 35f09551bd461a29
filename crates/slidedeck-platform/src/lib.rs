//! Platform service abstractions for slidedeck.
//!
//! The deck controller never calls a browser API directly: full-screen
//! control goes through [`FullscreenHost`] and deferred work through
//! [`TickQueue`]. Each target environment supplies its own host; the
//! in-memory [`MemoryFullscreen`] backs tests and the replay tool.

pub mod services;
pub mod tick;

pub use services::{FULLSCREEN_CHANGE_EVENTS, FullscreenHost, MemoryFullscreen};
pub use tick::{TaskId, TickQueue};
