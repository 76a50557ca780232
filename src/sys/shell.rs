use serde::{Deserialize, Serialize};

use crate::sys::event::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct AppId(u64);

impl AppId {
    pub const fn new(id: u64) -> AppId { AppId(id) }

    pub fn get(&self) -> u64 { self.0 }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(id: u64) -> WindowId { WindowId(id) }

    pub fn get(&self) -> u64 { self.0 }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WorkspaceId(u64);

impl WorkspaceId {
    pub const fn new(id: u64) -> WorkspaceId { WorkspaceId(id) }

    pub fn get(&self) -> u64 { self.0 }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct IconId(u64);

impl IconId {
    pub const fn new(id: u64) -> IconId { IconId(id) }

    pub fn get(&self) -> u64 { self.0 }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    Stopped,
    Starting,
    Running,
}

/// Everything the engine needs from the host shell: the global
/// window-activation history, window-manager commands, the workspace
/// sequence, per-application queries, and overview commands. The host
/// owns every object behind these ids; the engine never creates or
/// destroys them.
pub trait Shell {
    /// All windows, most recently activated first.
    fn activation_order(&self) -> Vec<WindowId>;
    fn window_app(&self, window: WindowId) -> Option<AppId>;
    fn window_workspace(&self, window: WindowId) -> Option<WorkspaceId>;
    fn activate_window(&mut self, window: WindowId);
    fn close_window(&mut self, window: WindowId);
    fn kill_window(&mut self, window: WindowId);
    fn move_window_to_workspace(&mut self, window: WindowId, workspace: WorkspaceId);

    fn workspace_count(&self) -> usize;
    fn workspace_at(&self, index: usize) -> Option<WorkspaceId>;
    fn workspace_index(&self, workspace: WorkspaceId) -> Option<usize>;
    fn active_workspace(&self) -> WorkspaceId;
    fn neighbor_workspace(
        &self,
        workspace: WorkspaceId,
        direction: Direction,
    ) -> Option<WorkspaceId>;
    /// Move `workspace` to `new_index`; workspaces in between shift by one.
    fn reorder_workspace(&mut self, workspace: WorkspaceId, new_index: usize);
    /// True when the workspace switcher lays workspaces out vertically.
    fn vertical_layout(&self) -> bool;

    fn app_state(&self, app: AppId) -> AppState;
    /// The app's windows; unordered from the engine's point of view.
    fn app_windows(&self, app: AppId) -> Vec<WindowId>;
    fn can_open_new_window(&self, app: AppId) -> bool;
    fn open_new_window(&mut self, app: AppId);
    fn animate_launch(&mut self, app: AppId);
    fn activate_app(&mut self, app: AppId);

    /// Switch the overview to the given workspace without hiding it.
    fn move_overview_to(&mut self, workspace: WorkspaceId);
    fn hide_overview(&mut self);
    /// Make sure the overview shows the window picker, not the app grid.
    fn leave_apps_view(&mut self);
    /// Move keyboard focus to the dock.
    fn focus_dock(&mut self);
}
