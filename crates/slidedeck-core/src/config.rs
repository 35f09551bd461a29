//! Deck configuration.
//!
//! Callers supply a partial [`DeckOptions`] (from code or a TOML file); it is
//! overlaid onto the defaults once, producing an immutable [`DeckConfig`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use slidedeck_dom::Selector;
use slidedeck_types::error::Result;

/// Selector the deck uses to find its panels unless told otherwise.
pub const DEFAULT_SLIDE_SELECTOR: &str = ".slide-container";

/// Caller-supplied options. Every field left `None` keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeckOptions {
    #[serde(default)]
    pub slide_selector: Option<String>,
    #[serde(default)]
    pub auto_play: Option<bool>,
    #[serde(default)]
    pub auto_play_interval_ms: Option<u64>,
    #[serde(default)]
    pub show_keyboard_guide: Option<bool>,
    #[serde(default)]
    pub show_timer: Option<bool>,
    #[serde(default)]
    pub enable_swipe: Option<bool>,
    #[serde(default)]
    pub enable_keyboard: Option<bool>,
    #[serde(default)]
    pub transition_mode: Option<String>,
}

/// Resolved deck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckConfig {
    /// Selector for the panels that make up the deck.
    pub slide_selector: String,
    /// Advance automatically every `auto_play_interval_ms`.
    pub auto_play: bool,
    pub auto_play_interval_ms: u64,
    /// Flash the keyboard-shortcut legend on construction.
    pub show_keyboard_guide: bool,
    /// Accepted for compatibility; nothing reads it.
    pub show_timer: bool,
    pub enable_swipe: bool,
    pub enable_keyboard: bool,
    /// Opaque tag for stylesheets, exposed as `data-transition` on body.
    pub transition_mode: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            slide_selector: DEFAULT_SLIDE_SELECTOR.to_string(),
            auto_play: false,
            auto_play_interval_ms: 0,
            show_keyboard_guide: true,
            show_timer: false,
            enable_swipe: true,
            enable_keyboard: true,
            transition_mode: "slide".to_string(),
        }
    }
}

impl DeckConfig {
    /// Overlay `options` onto the defaults.
    pub fn from_options(options: DeckOptions) -> Self {
        let d = Self::default();
        Self {
            slide_selector: options.slide_selector.unwrap_or(d.slide_selector),
            auto_play: options.auto_play.unwrap_or(d.auto_play),
            auto_play_interval_ms: options
                .auto_play_interval_ms
                .unwrap_or(d.auto_play_interval_ms),
            show_keyboard_guide: options
                .show_keyboard_guide
                .unwrap_or(d.show_keyboard_guide),
            show_timer: options.show_timer.unwrap_or(d.show_timer),
            enable_swipe: options.enable_swipe.unwrap_or(d.enable_swipe),
            enable_keyboard: options.enable_keyboard.unwrap_or(d.enable_keyboard),
            transition_mode: options.transition_mode.unwrap_or(d.transition_mode),
        }
    }

    /// Configuration used by page-ready bootstrap: no keyboard legend,
    /// swipe and keyboard enabled.
    pub fn bootstrap() -> Self {
        Self::from_options(DeckOptions {
            slide_selector: Some(DEFAULT_SLIDE_SELECTOR.to_string()),
            show_keyboard_guide: Some(false),
            enable_swipe: Some(true),
            enable_keyboard: Some(true),
            ..DeckOptions::default()
        })
    }

    /// Parse TOML options, overlay onto defaults and validate.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let options: DeckOptions = toml::from_str(toml_str)?;
        let config = Self::from_options(options);
        config.validate()?;
        Ok(config)
    }

    /// Load options from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Check that the slide selector is one the document can evaluate.
    pub fn validate(&self) -> Result<()> {
        self.selector().map(|_| ())
    }

    /// The parsed slide selector.
    pub fn selector(&self) -> Result<Selector> {
        Selector::parse(&self.slide_selector)
    }

    /// Effective auto-play interval, or `None` when auto-play is off.
    pub fn auto_play_interval(&self) -> Option<u64> {
        (self.auto_play && self.auto_play_interval_ms > 0).then_some(self.auto_play_interval_ms)
    }
}
