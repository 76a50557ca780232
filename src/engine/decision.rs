use tracing::{debug, info};

use crate::common::config::Settings;
use crate::engine::{OverviewEngine, highlight, recency};
use crate::sys::event::{Disposition, Modifiers, MouseButton, ScrollDirection};
use crate::sys::shell::{AppId, AppState, IconId, Shell, WorkspaceId};
use crate::sys::stage::Stage;

#[derive(Debug, Clone, Copy)]
pub struct IconActivateEvent {
    pub icon: IconId,
    pub app: AppId,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy)]
pub struct IconScrollEvent {
    pub icon: IconId,
    pub app: AppId,
    pub direction: ScrollDirection,
}

/// What a dock-icon activation resolves to. Exactly one action per
/// event; earlier branches of the decision table pre-empt later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IconAction {
    LaunchNewWindow { feedback: bool },
    RevealWorkspace(WorkspaceId),
    MoveAllWindowsHere,
    Noop,
    ActivateApp,
}

/// Inputs to the activation decision, gathered from the shell before
/// the table runs.
#[derive(Debug, Clone, Copy)]
pub struct ActivationCtx {
    pub state: AppState,
    pub can_open_new_window: bool,
    pub window_count: usize,
    pub any_window_on_current: bool,
    pub recent_on_current: bool,
    pub recent_workspace: Option<WorkspaceId>,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

pub fn decide(settings: &Settings, ctx: &ActivationCtx) -> IconAction {
    let shift = ctx.modifiers.contains(Modifiers::SHIFT);
    let ctrl = ctx.modifiers.contains(Modifiers::CTRL);
    let open_new_window = ctx.can_open_new_window
        && ctx.state == AppState::Running
        && (ctrl || ctx.button == MouseButton::Middle);

    if ctx.state == AppState::Stopped || open_new_window {
        return IconAction::LaunchNewWindow { feedback: !shift };
    }

    let target_on_current = if settings.click_follows_recent_window {
        ctx.recent_on_current
    } else {
        ctx.any_window_on_current
    };
    if settings.show_windows_before_activation
        && !shift
        && ctx.window_count > 1
        && !target_on_current
        && let Some(workspace) = ctx.recent_workspace
    {
        return IconAction::RevealWorkspace(workspace);
    }

    if settings.shift_click_moves_app_to_current_workspace && shift && ctx.window_count > 0 {
        return IconAction::MoveAllWindowsHere;
    }

    // Swallow modifier-chorded clicks that matched nothing above.
    if shift {
        return IconAction::Noop;
    }

    IconAction::ActivateApp
}

pub struct IconEventHandler;

impl IconEventHandler {
    pub fn handle_activate(
        engine: &mut OverviewEngine,
        shell: &mut dyn Shell,
        ev: IconActivateEvent,
    ) {
        let windows = shell.app_windows(ev.app);
        let current = shell.active_workspace();
        let recent_workspace = recency::recent_workspace(shell, ev.app);
        let ctx = ActivationCtx {
            state: shell.app_state(ev.app),
            can_open_new_window: shell.can_open_new_window(ev.app),
            window_count: windows.len(),
            any_window_on_current: windows
                .iter()
                .any(|window| shell.window_workspace(*window) == Some(current)),
            recent_on_current: recent_workspace == Some(current),
            recent_workspace,
            button: ev.button,
            modifiers: ev.modifiers,
        };

        let action = decide(engine.settings(), &ctx);
        info!(%action, app = ev.app.get(), "dock icon activated");

        match action {
            IconAction::LaunchNewWindow { feedback } => {
                if feedback {
                    shell.animate_launch(ev.app);
                }
                shell.open_new_window(ev.app);
                shell.hide_overview();
            }
            IconAction::RevealWorkspace(workspace) => {
                // Arm the icon the same way a scroll does: the workspace
                // switch emits pointer-leave events that must not undo the
                // highlight. The reveal is terminal; the next click falls
                // through to default activation.
                let now = engine.now();
                let state = engine.icon_mut(ev.icon);
                state.scroll_highlight_active = true;
                state.scroll_guard = Some(now);
                shell.move_overview_to(workspace);
                shell.leave_apps_view();
            }
            IconAction::MoveAllWindowsHere => {
                for window in windows {
                    shell.move_window_to_workspace(window, current);
                }
            }
            IconAction::Noop => {}
            IconAction::ActivateApp => {
                shell.activate_app(ev.app);
                shell.hide_overview();
            }
        }
    }

    /// Scroll over a dock icon cycles the overview through the workspaces
    /// holding the app's windows, wrapping in both directions.
    pub fn handle_scroll(
        engine: &mut OverviewEngine,
        shell: &mut dyn Shell,
        stage: &mut dyn Stage,
        ev: IconScrollEvent,
    ) -> Disposition {
        if !engine.settings().scroll_switches_app_workspace {
            return Disposition::Propagate;
        }
        // One physical scroll tick can deliver two events.
        if engine.scroll_guard_open(ev.icon) {
            return Disposition::Stop;
        }
        if !matches!(ev.direction, ScrollDirection::Up | ScrollDirection::Down) {
            return Disposition::Propagate;
        }

        engine.icon_mut(ev.icon).scroll_highlight_active = true;

        let windows = shell.app_windows(ev.app);
        if windows.is_empty() {
            return Disposition::Stop;
        }

        let mut workspaces: Vec<WorkspaceId> = Vec::new();
        for window in &windows {
            if let Some(workspace) = shell.window_workspace(*window)
                && !workspaces.contains(&workspace)
            {
                workspaces.push(workspace);
            }
        }
        if workspaces.is_empty() {
            debug!(app = ev.app.get(), "app windows have no workspace yet");
            return Disposition::Stop;
        }
        workspaces.sort_by_key(|workspace| shell.workspace_index(*workspace).unwrap_or(usize::MAX));

        let current = shell.active_workspace();
        let position = workspaces
            .iter()
            .position(|workspace| *workspace == current)
            .map(|p| p as i64)
            .unwrap_or(-1);
        let len = workspaces.len() as i64;
        let target = match ev.direction {
            ScrollDirection::Up => (position + len - 1).rem_euclid(len),
            _ => (position + 1).rem_euclid(len),
        };

        shell.move_overview_to(workspaces[target as usize]);
        shell.leave_apps_view();
        let now = engine.now();
        engine.icon_mut(ev.icon).scroll_guard = Some(now);

        highlight::HighlightAnimator::highlight(
            engine,
            shell,
            stage,
            ev.icon,
            ev.app,
            highlight::DIM_OPACITY,
        );

        Disposition::Stop
    }
}
