use tracing::info;

use crate::common::config::Settings;
use crate::sys::shell::{AppId, Shell};

/// Extra entries appended to a dock icon's popup menu, each behind its
/// own policy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IconMenuEntry {
    #[strum(serialize = "Force Quit")]
    ForceQuit,
    #[strum(serialize = "Move App to Current Workspace")]
    MoveAppToCurrentWorkspace,
    #[strum(serialize = "Close Windows on Current Workspace")]
    CloseWindowsOnCurrentWorkspace,
}

impl IconMenuEntry {
    pub fn label(&self) -> String { self.to_string() }
}

/// The entries to offer for `app` right now. An app without windows
/// offers none; the close entry needs a window on the active workspace.
pub fn entries(settings: &Settings, shell: &dyn Shell, app: AppId) -> Vec<IconMenuEntry> {
    let windows = shell.app_windows(app);
    if windows.is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    if settings.menu_force_quit {
        entries.push(IconMenuEntry::ForceQuit);
    }
    if settings.menu_move_app_to_workspace {
        entries.push(IconMenuEntry::MoveAppToCurrentWorkspace);
    }
    if settings.menu_close_windows_on_workspace {
        let current = shell.active_workspace();
        if windows.iter().any(|window| shell.window_workspace(*window) == Some(current)) {
            entries.push(IconMenuEntry::CloseWindowsOnCurrentWorkspace);
        }
    }
    entries
}

pub fn activate(shell: &mut dyn Shell, app: AppId, entry: IconMenuEntry) {
    info!(%entry, app = app.get(), "icon menu entry activated");
    let windows = shell.app_windows(app);
    match entry {
        IconMenuEntry::ForceQuit => {
            if let Some(first) = windows.first() {
                shell.kill_window(*first);
            }
        }
        IconMenuEntry::MoveAppToCurrentWorkspace => {
            let current = shell.active_workspace();
            for window in windows {
                shell.move_window_to_workspace(window, current);
            }
        }
        IconMenuEntry::CloseWindowsOnCurrentWorkspace => {
            let current = shell.active_workspace();
            for window in windows {
                if shell.window_workspace(window) == Some(current) {
                    shell.close_window(window);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::fixtures::{Command, FakeShell};
    use crate::sys::shell::{AppState, WindowId};

    fn all_enabled() -> Settings {
        let mut settings = Settings::default();
        settings.menu_force_quit = true;
        settings.menu_move_app_to_workspace = true;
        settings.menu_close_windows_on_workspace = true;
        settings
    }

    fn shell_with_windows() -> (FakeShell, AppId) {
        let app = AppId::new(1);
        let mut shell = FakeShell::new(3);
        shell.add_app(app, AppState::Running, true);
        shell.add_window(WindowId::new(1), app, shell.ws(0));
        shell.add_window(WindowId::new(2), app, shell.ws(2));
        (shell, app)
    }

    #[test]
    fn no_windows_means_no_entries() {
        let app = AppId::new(1);
        let mut shell = FakeShell::new(3);
        shell.add_app(app, AppState::Stopped, true);
        assert!(entries(&all_enabled(), &shell, app).is_empty());
    }

    #[test]
    fn entries_follow_their_policy_flags() {
        let (shell, app) = shell_with_windows();
        assert!(entries(&Settings::default(), &shell, app).is_empty());
        assert_eq!(entries(&all_enabled(), &shell, app), vec![
            IconMenuEntry::ForceQuit,
            IconMenuEntry::MoveAppToCurrentWorkspace,
            IconMenuEntry::CloseWindowsOnCurrentWorkspace,
        ]);
    }

    #[test]
    fn close_entry_needs_a_window_on_the_active_workspace() {
        let (mut shell, app) = shell_with_windows();
        shell.active = shell.ws(1);
        let offered = entries(&all_enabled(), &shell, app);
        assert!(!offered.contains(&IconMenuEntry::CloseWindowsOnCurrentWorkspace));
        assert!(offered.contains(&IconMenuEntry::ForceQuit));
    }

    #[test]
    fn force_quit_kills_the_first_window() {
        let (mut shell, app) = shell_with_windows();
        activate(&mut shell, app, IconMenuEntry::ForceQuit);
        assert_eq!(shell.commands, vec![Command::KillWindow(WindowId::new(1))]);
    }

    #[test]
    fn move_entry_moves_every_window() {
        let (mut shell, app) = shell_with_windows();
        let current = shell.active;
        activate(&mut shell, app, IconMenuEntry::MoveAppToCurrentWorkspace);
        assert_eq!(shell.commands, vec![
            Command::MoveWindow(WindowId::new(1), current),
            Command::MoveWindow(WindowId::new(2), current),
        ]);
    }

    #[test]
    fn close_entry_only_touches_the_active_workspace() {
        let (mut shell, app) = shell_with_windows();
        activate(&mut shell, app, IconMenuEntry::CloseWindowsOnCurrentWorkspace);
        assert_eq!(shell.commands, vec![Command::CloseWindow(WindowId::new(1))]);
    }

    #[test]
    fn labels_read_like_menu_items() {
        assert_eq!(IconMenuEntry::ForceQuit.label(), "Force Quit");
        assert_eq!(
            IconMenuEntry::CloseWindowsOnCurrentWorkspace.label(),
            "Close Windows on Current Workspace"
        );
    }
}
