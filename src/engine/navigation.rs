use crate::engine::{OverviewEngine, reorder};
use crate::sys::event::{Direction, Disposition, Key, Modifiers, ScrollDirection};
use crate::sys::shell::Shell;

/// View state of the workspace-switcher strip at event time, filled in
/// by the host from the widget receiving the event.
#[derive(Debug, Clone, Copy)]
pub struct SwitcherContext {
    pub mapped: bool,
    /// Workspaces are rendered on the primary monitor only.
    pub workspaces_only_on_primary: bool,
    pub primary_monitor: usize,
    /// The overview currently shows the window picker.
    pub picker_active: bool,
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SwitcherScrollEvent {
    pub direction: ScrollDirection,
    pub monitor: usize,
    pub modifiers: Modifiers,
    /// The host's swipe tracker claims this event for gesture handling.
    pub claimed_by_gesture: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SwitcherKeyEvent {
    /// `None` for keys the override has no opinion about.
    pub key: Option<Key>,
    pub modifiers: Modifiers,
    /// Right-to-left text direction on the receiving widget.
    pub rtl: bool,
}

/// Capability interface the host's event dispatch calls into for the
/// workspace-switcher strip. Selected at composition time; the engine's
/// implementation augments the built-in navigation, `DefaultNavigation`
/// leaves it untouched.
pub trait NavigationHandler {
    fn on_switcher_scroll(
        &mut self,
        shell: &mut dyn Shell,
        ctx: &SwitcherContext,
        ev: SwitcherScrollEvent,
    ) -> Disposition;

    fn on_switcher_key(
        &mut self,
        shell: &mut dyn Shell,
        ctx: &SwitcherContext,
        ev: SwitcherKeyEvent,
    ) -> Disposition;
}

pub struct DefaultNavigation;

impl NavigationHandler for DefaultNavigation {
    fn on_switcher_scroll(
        &mut self,
        _shell: &mut dyn Shell,
        _ctx: &SwitcherContext,
        _ev: SwitcherScrollEvent,
    ) -> Disposition {
        Disposition::RunDefault
    }

    fn on_switcher_key(
        &mut self,
        _shell: &mut dyn Shell,
        _ctx: &SwitcherContext,
        _ev: SwitcherKeyEvent,
    ) -> Disposition {
        Disposition::RunDefault
    }
}

#[derive(Clone, Copy)]
enum KeyTarget {
    Neighbor(Direction),
    Index(usize),
}

impl NavigationHandler for OverviewEngine {
    fn on_switcher_scroll(
        &mut self,
        shell: &mut dyn Shell,
        ctx: &SwitcherContext,
        ev: SwitcherScrollEvent,
    ) -> Disposition {
        if ev.claimed_by_gesture || !ctx.mapped {
            return Disposition::Propagate;
        }
        if ctx.workspaces_only_on_primary && ev.monitor != ctx.primary_monitor {
            return Disposition::Propagate;
        }

        if self.settings().shift_reorders_workspace && ev.modifiers.contains(Modifiers::SHIFT) {
            let direction = match ev.direction {
                ScrollDirection::Up => -1,
                ScrollDirection::Down => 1,
                _ => 0,
            };
            if direction != 0 {
                reorder::reorder_active_workspace(shell, direction);
                return Disposition::Stop;
            }
        }

        Disposition::RunDefault
    }

    fn on_switcher_key(
        &mut self,
        shell: &mut dyn Shell,
        ctx: &SwitcherContext,
        ev: SwitcherKeyEvent,
    ) -> Disposition {
        if !ctx.picker_active || !ctx.interactive {
            return Disposition::Propagate;
        }
        let Some(key) = ev.key else {
            return Disposition::Propagate;
        };

        let vertical = shell.vertical_layout();
        let target = match key {
            Key::PageUp => KeyTarget::Neighbor(if vertical {
                Direction::Up
            } else if ev.rtl {
                Direction::Right
            } else {
                Direction::Left
            }),
            Key::PageDown => KeyTarget::Neighbor(if vertical {
                Direction::Down
            } else if ev.rtl {
                Direction::Left
            } else {
                Direction::Right
            }),
            Key::Home => KeyTarget::Index(0),
            Key::End => KeyTarget::Index(shell.workspace_count().saturating_sub(1)),
            Key::Tab | Key::Space => {
                if self.settings().space_activates_dock {
                    shell.focus_dock();
                }
                return Disposition::Stop;
            }
        };

        if self.settings().shift_reorders_workspace
            && ev.modifiers.contains(Modifiers::SHIFT)
            && let KeyTarget::Neighbor(direction) = target
        {
            reorder::reorder_active_workspace(shell, direction.reorder_step());
            return Disposition::Stop;
        }

        let workspace = match target {
            KeyTarget::Neighbor(direction) => {
                shell.neighbor_workspace(shell.active_workspace(), direction)
            }
            KeyTarget::Index(index) => shell.workspace_at(index),
        };
        if let Some(workspace) = workspace {
            shell.move_overview_to(workspace);
        }

        Disposition::Stop
    }
}
