//! Replay scenarios: a deck size, options and a list of input steps.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use slidedeck_core::dom::Selector;
use slidedeck_core::page::{self, Page};
use slidedeck_core::platform::{FullscreenHost, MemoryFullscreen};
use slidedeck_core::{
    Bootstrap, DeckConfig, DeckController, DeckOptions, DisplayModel, InputEvent, Key, controls,
};

/// A scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Number of slide panels on the page.
    pub slides: usize,
    /// Start through page-ready bootstrap instead of `options`.
    #[serde(default)]
    pub bootstrap: bool,
    #[serde(default)]
    pub options: DeckOptions,
    /// Host refuses full-screen requests.
    #[serde(default)]
    pub refuse_fullscreen: bool,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Control-panel buttons a step can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Prev,
    Next,
    Fullscreen,
}

impl Button {
    fn element_id(self) -> &'static str {
        match self {
            Self::Prev => controls::PREV_ID,
            Self::Next => controls::NEXT_ID,
            Self::Fullscreen => controls::FULLSCREEN_ID,
        }
    }
}

/// One input step.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Key press by DOM key name (`"ArrowRight"`, `" "`, `"End"`, ...).
    Key { key: String },
    Swipe { from: i32, to: i32 },
    ClickDot { index: usize },
    ClickButton { button: Button },
    /// Elapsed time for auto-play.
    Tick { ms: u64 },
    /// The user leaves full-screen through the host.
    UserExitFullscreen,
    PageReady,
    Reinitialize,
    Teardown,
}

/// Deck state after a step.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub step: usize,
    pub action: String,
    pub handled: bool,
    pub fullscreen: bool,
    pub model: Option<DisplayModel>,
}

impl Scenario {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Running state of a replay.
struct Replay {
    page: Page<MemoryFullscreen>,
    boot: Bootstrap,
    direct: Option<DeckController>,
}

impl Replay {
    fn controller(&mut self) -> Option<&mut DeckController> {
        match self.direct.as_mut() {
            Some(c) => Some(c),
            None => self.boot.controller_mut(),
        }
    }

    fn frame(&mut self, step: usize, action: String, handled: bool) -> Frame {
        let fullscreen = self.page.fullscreen.is_fullscreen();
        let model = self.controller().and_then(|c| c.display_model());
        Frame {
            step,
            action,
            handled,
            fullscreen,
            model,
        }
    }
}

fn dot(page: &Page<MemoryFullscreen>, index: usize) -> Option<usize> {
    let selector = Selector::parse(".indicator-dot").ok()?;
    page.document.query_selector_all(&selector).get(index).copied()
}

/// Apply one step. Returns whether the deck acted on it.
fn apply(replay: &mut Replay, step: &Step) -> bool {
    if *step == Step::PageReady {
        return replay.boot.on_page_ready(&mut replay.page);
    }
    let Replay { page, boot, direct } = replay;
    let Some(controller) = direct.as_mut().or(boot.controller_mut()) else {
        log::warn!("no controller yet; {step:?} skipped");
        return false;
    };
    let event = match step {
        Step::Key { key } => Some(InputEvent::KeyDown {
            key: Key::from_dom_key(key),
            target: None,
        }),
        Step::Swipe { from, to } => {
            controller.handle_event(page, &InputEvent::TouchStart { x: *from });
            Some(InputEvent::TouchEnd { x: *to })
        },
        Step::ClickDot { index } => match dot(page, *index) {
            Some(target) => Some(InputEvent::Click { target }),
            None => {
                log::warn!("no indicator dot {index}");
                None
            },
        },
        Step::ClickButton { button } => match page.document.get_element_by_id(button.element_id()) {
            Some(target) => Some(InputEvent::Click { target }),
            None => {
                log::warn!("no {button:?} button");
                None
            },
        },
        Step::Tick { ms } => return controller.tick(page, *ms) > 0,
        Step::UserExitFullscreen => {
            page.fullscreen.user_exit();
            return true;
        },
        Step::Reinitialize => {
            controller.reinitialize(page);
            return true;
        },
        Step::Teardown => {
            controller.teardown(page);
            return true;
        },
        Step::PageReady => None,
    };
    event.is_some_and(|e| controller.handle_event(page, &e).is_handled())
}

/// Run every step, settling the page loop after each, and collect frames.
pub fn run(scenario: &Scenario) -> Result<Vec<Frame>> {
    let document = page::slide_document(scenario.slides);
    let fullscreen = if scenario.refuse_fullscreen {
        MemoryFullscreen::refusing()
    } else {
        MemoryFullscreen::new()
    };
    let mut replay = Replay {
        page: Page::new(document, fullscreen),
        boot: Bootstrap::new(),
        direct: None,
    };

    if scenario.bootstrap {
        replay.boot.on_page_ready(&mut replay.page);
    } else {
        let config = DeckConfig::from_options(scenario.options.clone());
        config.validate().context("invalid deck options")?;
        replay.direct = Some(DeckController::new(config, &mut replay.page));
    }

    let mut frames = vec![replay.frame(0, "init".to_string(), true)];
    for (i, step) in scenario.steps.iter().enumerate() {
        let handled = apply(&mut replay, step);
        let Replay { page, boot, direct } = &mut replay;
        if let Some(c) = direct.as_mut().or(boot.controller_mut()) {
            c.settle(page);
        }
        frames.push(replay.frame(i + 1, format!("{step:?}"), handled));
    }
    Ok(frames)
}
