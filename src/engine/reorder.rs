use crate::sys::shell::Shell;

/// Moves the active workspace one position along the sequence,
/// `direction` ∈ {-1, +1}. Out-of-bounds targets are a no-op; unlike
/// dock-icon scrolling there is no wrap-around.
pub fn reorder_active_workspace(shell: &mut dyn Shell, direction: i32) {
    let active = shell.active_workspace();
    let Some(index) = shell.workspace_index(active) else {
        return;
    };
    let target = index as i64 + direction as i64;
    if target >= 0 && (target as usize) < shell.workspace_count() {
        shell.reorder_workspace(active, target as usize);
    }
}
