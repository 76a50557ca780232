use tracing::debug;

use crate::common::config::Settings;
use crate::sys::shell::{Shell, WindowId};
use crate::sys::stage::{PreviewId, Stage};

/// Overview-lifecycle state with explicit init/teardown at show/hide.
/// Holds the window to activate once the overview hides, armed by
/// hovering its preview.
#[derive(Debug, Default)]
pub struct OverviewSession {
    shown: bool,
    activate_on_hide: Option<(PreviewId, WindowId)>,
}

impl OverviewSession {
    pub fn on_shown(&mut self) {
        self.shown = true;
        self.activate_on_hide = None;
    }

    pub fn on_hiding(&mut self, shell: &mut dyn Shell) {
        self.shown = false;
        if let Some((_, window)) = self.activate_on_hide.take() {
            debug!(window = window.get(), "activating hovered window on overview hide");
            shell.activate_window(window);
        }
    }

    /// The pointer entered a preview's overlay.
    pub fn on_overlay_shown(&mut self, settings: &Settings, preview: PreviewId, window: WindowId) {
        if settings.hover_activates_window_on_leave && self.shown {
            self.activate_on_hide = Some((preview, window));
        }
    }

    /// The pointer left a preview's overlay. Only the preview that armed
    /// the target may clear it; the pointer may already sit on another
    /// preview whose overlay showed first.
    pub fn on_overlay_hidden(&mut self, settings: &Settings, preview: PreviewId) {
        if settings.hover_activates_window_on_leave
            && self.activate_on_hide.map(|(armed, _)| armed) == Some(preview)
        {
            self.activate_on_hide = None;
        }
    }

    /// The host finished constructing a window preview.
    pub fn on_preview_created(settings: &Settings, stage: &mut dyn Stage, preview: PreviewId) {
        if settings.move_titles_into_windows {
            stage.lift_title_into_preview(preview);
        }
    }
}
