use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::common::collections::HashMap;
use crate::common::config::Settings;
use crate::sys::clock::{Clock, SystemClock};
use crate::sys::event::Disposition;
use crate::sys::shell::{AppId, IconId, Shell, WindowId};
use crate::sys::stage::{PreviewId, Stage};

pub mod decision;
pub mod highlight;
pub mod icon_menu;
pub mod navigation;
pub mod recency;
pub mod reorder;
pub mod session;

pub use decision::{IconActivateEvent, IconAction, IconScrollEvent};
pub use icon_menu::IconMenuEntry;

/// A single physical scroll tick can emit more than one event; anything
/// inside this window after a scroll-driven switch is dropped.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(200);

/// Transient per-icon interaction state. Lives exactly as long as the
/// dock icon it belongs to.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconState {
    /// When the last scroll-driven workspace switch fired.
    pub scroll_guard: Option<Instant>,
    /// The current highlight pass was armed by a scroll, not a hover.
    pub scroll_highlight_active: bool,
}

/// The engine behind the overview add-on. All entry points run on the
/// host's UI event loop; the per-icon flags here are the only mutable
/// state shared between passes.
pub struct OverviewEngine {
    settings: Settings,
    clock: Rc<dyn Clock>,
    icons: HashMap<IconId, IconState>,
    session: session::OverviewSession,
}

impl OverviewEngine {
    pub fn new(settings: Settings) -> Self {
        Self::with_clock(settings, Rc::new(SystemClock))
    }

    pub fn with_clock(settings: Settings, clock: Rc<dyn Clock>) -> Self {
        for issue in settings.validate() {
            warn!("settings: {issue}");
        }
        Self {
            settings,
            clock,
            icons: HashMap::default(),
            session: session::OverviewSession::default(),
        }
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    /// Called by the host when its settings store reports a change.
    pub fn update_settings(&mut self, settings: Settings) {
        for issue in settings.validate() {
            warn!("settings: {issue}");
        }
        self.settings = settings;
    }

    pub fn on_icon_destroyed(&mut self, icon: IconId) { self.icons.remove(&icon); }

    pub fn on_icon_activate(&mut self, shell: &mut dyn Shell, ev: IconActivateEvent) {
        decision::IconEventHandler::handle_activate(self, shell, ev);
    }

    pub fn on_icon_scroll(
        &mut self,
        shell: &mut dyn Shell,
        stage: &mut dyn Stage,
        ev: IconScrollEvent,
    ) -> Disposition {
        decision::IconEventHandler::handle_scroll(self, shell, stage, ev)
    }

    /// Pointer entered a dock icon.
    pub fn on_icon_enter(
        &mut self,
        shell: &dyn Shell,
        stage: &mut dyn Stage,
        icon: IconId,
        app: AppId,
    ) {
        highlight::HighlightAnimator::highlight(self, shell, stage, icon, app, highlight::DIM_OPACITY);
    }

    /// Pointer left a dock icon.
    pub fn on_icon_leave(
        &mut self,
        shell: &dyn Shell,
        stage: &mut dyn Stage,
        icon: IconId,
        app: AppId,
    ) {
        highlight::HighlightAnimator::highlight(self, shell, stage, icon, app, highlight::OPAQUE);
    }

    /// Host callback for a finished title fade on a window preview.
    pub fn on_title_fade_done(&self, stage: &mut dyn Stage, preview: PreviewId, target: u8) {
        highlight::HighlightAnimator::finish_title_fade(stage, preview, target);
    }

    pub fn on_overview_shown(&mut self) { self.session.on_shown(); }

    pub fn on_overview_hiding(&mut self, shell: &mut dyn Shell) {
        self.session.on_hiding(shell);
    }

    pub fn on_preview_overlay_shown(&mut self, preview: PreviewId, window: WindowId) {
        self.session.on_overlay_shown(&self.settings, preview, window);
    }

    pub fn on_preview_overlay_hidden(&mut self, preview: PreviewId) {
        self.session.on_overlay_hidden(&self.settings, preview);
    }

    pub fn on_preview_created(&mut self, stage: &mut dyn Stage, preview: PreviewId) {
        session::OverviewSession::on_preview_created(&self.settings, stage, preview);
    }

    pub fn icon_menu_entries(&self, shell: &dyn Shell, app: AppId) -> Vec<IconMenuEntry> {
        icon_menu::entries(&self.settings, shell, app)
    }

    pub fn activate_menu_entry(
        &mut self,
        shell: &mut dyn Shell,
        app: AppId,
        entry: IconMenuEntry,
    ) {
        icon_menu::activate(shell, app, entry);
    }

    pub(crate) fn now(&self) -> Instant { self.clock.now() }

    pub(crate) fn icon(&self, icon: IconId) -> Option<&IconState> { self.icons.get(&icon) }

    pub(crate) fn icon_mut(&mut self, icon: IconId) -> &mut IconState {
        self.icons.entry(icon).or_default()
    }

    /// True while the icon's scroll-debounce window is still open.
    pub(crate) fn scroll_guard_open(&self, icon: IconId) -> bool {
        let Some(fired_at) = self.icons.get(&icon).and_then(|state| state.scroll_guard) else {
            return false;
        };
        self.clock.now().duration_since(fired_at) < SCROLL_DEBOUNCE
    }
}
