//! Full-screen toggling and chrome visibility.

use slidedeck_dom::{Document, Selector};
use slidedeck_platform::FullscreenHost;

use crate::controls::{CONTROLS_CLASS, PROGRESS_CLASS};

/// Enter full-screen when not in it, leave it otherwise. The host may
/// refuse; that is logged and otherwise ignored.
pub fn toggle<F: FullscreenHost>(host: &mut F) {
    let result = if host.is_fullscreen() {
        host.exit_fullscreen()
    } else {
        host.request_fullscreen()
    };
    if let Err(e) = result {
        log::warn!("full-screen toggle failed: {e}");
    }
}

/// Hide the chrome in full-screen and restore it afterwards. Only the first
/// control panel and progress bar are touched.
pub fn sync_chrome(doc: &mut Document, is_fullscreen: bool) {
    let (panel_display, bar_display) = if is_fullscreen {
        ("none", "none")
    } else {
        ("flex", "block")
    };
    for (class, display) in [(CONTROLS_CLASS, panel_display), (PROGRESS_CLASS, bar_display)] {
        let found = Selector::parse(&format!(".{class}"))
            .ok()
            .and_then(|s| doc.query_selector(&s));
        if let Some(id) = found {
            doc.set_style(id, "display", display);
        }
    }
    if is_fullscreen {
        log::info!("entered full-screen mode");
    } else {
        log::info!("left full-screen mode");
    }
}
