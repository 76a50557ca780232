use crate::sys::shell::{AppId, Shell, WindowId, WorkspaceId};

/// The app's most recently used window, resolved from the shell's global
/// activation history (newest first). The history is a strict order, so
/// the first match is unambiguous.
pub fn most_recent_window(shell: &dyn Shell, app: AppId) -> Option<WindowId> {
    shell
        .activation_order()
        .into_iter()
        .find(|window| shell.window_app(*window) == Some(app))
}

/// The workspace holding the app's most recently used window.
pub fn recent_workspace(shell: &dyn Shell, app: AppId) -> Option<WorkspaceId> {
    most_recent_window(shell, app).and_then(|window| shell.window_workspace(window))
}
