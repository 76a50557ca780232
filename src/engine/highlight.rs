use std::time::Duration;

use tracing::trace;

use crate::common::collections::HashSet;
use crate::common::config::HoverHighlightMode;
use crate::engine::{OverviewEngine, recency};
use crate::sys::shell::{AppId, IconId, Shell, WindowId};
use crate::sys::stage::{Easing, PreviewId, Rgba, Stage};

pub const DIM_OPACITY: u8 = 50;
pub const OPAQUE: u8 = 255;

/// Matches the host's overlay fade duration so title and body fades stay
/// in lockstep with the host's own overlay transitions.
pub const OVERLAY_FADE_TIME: Duration = Duration::from_millis(100);

/// Tint marking the close affordance of the app's most recent window.
pub const RECENT_WINDOW_TINT: Rgba = Rgba::new(0.0, 0.5, 0.0, 1.0);

pub struct HighlightAnimator;

impl HighlightAnimator {
    /// Walks every rendered workspace view and fades each window preview
    /// to reflect whether its window belongs to `app`. `others_opacity`
    /// is the terminal body opacity for non-matching previews: 50 dims,
    /// 255 restores.
    pub fn highlight(
        engine: &mut OverviewEngine,
        shell: &dyn Shell,
        stage: &mut dyn Stage,
        icon: IconId,
        app: AppId,
        others_opacity: u8,
    ) {
        let mode = engine.settings().hover_highlights_windows;
        if mode.is_disabled() {
            return;
        }

        let restoring = others_opacity == OPAQUE;
        let mut titles_only = false;
        if restoring {
            // The scroll-driven workspace switch emits pointer-leave events
            // while the pointer still sits on the icon; those must not undo
            // the highlight while the guard is open.
            if engine.scroll_guard_open(icon) {
                return;
            }
            engine.icon_mut(icon).scroll_highlight_active = false;
        } else if !engine.icon(icon).is_some_and(|state| state.scroll_highlight_active) {
            // Hover alone only shows titles; a scroll-armed pass also dims.
            titles_only = true;
        }
        if mode == HoverHighlightMode::Titles {
            titles_only = true;
        }

        let windows: HashSet<WindowId> = shell.app_windows(app).into_iter().collect();
        let recent = recency::most_recent_window(shell, app);

        for view in stage.monitor_views() {
            // Secondary monitors nest their workspace content one level down.
            let view = stage.nested_view(view).unwrap_or(view);
            let Some(groups) = stage.view_groups(view) else {
                continue;
            };
            for group in groups {
                for preview in stage.group_previews(group) {
                    if !stage.title_ready(preview) {
                        trace!(preview = preview.get(), "title not constructed yet, skipping");
                        continue;
                    }

                    let window = stage.preview_window(preview);
                    let (body_opacity, title_opacity) = if windows.contains(&window) {
                        if Some(window) == recent {
                            stage.show_close_affordance(preview, RECENT_WINDOW_TINT);
                        }
                        (OPAQUE, if restoring { 0 } else { OPAQUE })
                    } else {
                        (others_opacity, 0)
                    };

                    // A fade already converging on the same terminal value
                    // keeps going; restarting it would just churn.
                    if stage.title_fade_target(preview) != Some(title_opacity) {
                        stage.fade_title(preview, title_opacity, OVERLAY_FADE_TIME);
                    }

                    if titles_only {
                        continue;
                    }
                    stage.fade_body(preview, body_opacity, OVERLAY_FADE_TIME, Easing::EaseOutQuad);
                }
            }
        }
    }

    /// Host callback for a finished title fade: a title faded out is
    /// hidden outright and takes the close affordance with it.
    pub fn finish_title_fade(stage: &mut dyn Stage, preview: PreviewId, target: u8) {
        if target == 0 {
            stage.set_title_visible(preview, false);
            stage.set_close_opacity(preview, 0);
        } else {
            stage.set_title_visible(preview, true);
        }
    }
}
