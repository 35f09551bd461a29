//! Page-ready bootstrap with a one-shot guard.

use slidedeck_platform::FullscreenHost;

use crate::config::DeckConfig;
use crate::controller::DeckController;
use crate::controls;
use crate::page::Page;

/// Owned by the page's entry point. Constructs at most one controller no
/// matter how often the page-ready notification fires.
#[derive(Debug, Default)]
pub struct Bootstrap {
    initialized: bool,
    controller: Option<DeckController>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle page-ready. Returns `true` if this call constructed the
    /// controller.
    pub fn on_page_ready<F: FullscreenHost>(&mut self, page: &mut Page<F>) -> bool {
        if self.initialized {
            log::info!("slide deck already initialized");
            return false;
        }
        self.initialized = true;
        let removed = controls::remove_first(&mut page.document);
        if removed > 0 {
            log::debug!("removed {removed} leftover control elements");
        }
        self.controller = Some(DeckController::new(DeckConfig::bootstrap(), page));
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn controller(&self) -> Option<&DeckController> {
        self.controller.as_ref()
    }

    pub fn controller_mut(&mut self) -> Option<&mut DeckController> {
        self.controller.as_mut()
    }
}
