use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sys::shell::WindowId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ViewId(u32);

impl ViewId {
    pub const fn new(id: u32) -> ViewId { ViewId(id) }

    pub fn get(&self) -> u32 { self.0 }
}

/// One workspace's preview container inside a monitor view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GroupId(u32);

impl GroupId {
    pub const fn new(id: u32) -> GroupId { GroupId(id) }

    pub fn get(&self) -> u32 { self.0 }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PreviewId(u32);

impl PreviewId {
    pub const fn new(id: u32) -> PreviewId { PreviewId(id) }

    pub fn get(&self) -> u32 { self.0 }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Rgba { Rgba { r, g, b, a } }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOutQuad,
}

/// The host's rendering surface for the overview: monitor views, their
/// per-workspace preview groups, and the animatable properties of each
/// window preview. Layout and actor lifecycle stay entirely host-side;
/// the engine only reads structure and requests property fades.
///
/// The host reports each title fade's completion back through
/// `HighlightAnimator::finish_title_fade`.
pub trait Stage {
    fn monitor_views(&self) -> Vec<ViewId>;
    /// Secondary-monitor views wrap their workspace content in a nested
    /// sub-view; `None` means the view itself holds the groups.
    fn nested_view(&self, view: ViewId) -> Option<ViewId>;
    /// `None` when the view has no window-preview state at all (feature
    /// unsupported there); such views are skipped silently.
    fn view_groups(&self, view: ViewId) -> Option<Vec<GroupId>>;
    fn group_previews(&self, group: GroupId) -> Vec<PreviewId>;
    fn preview_window(&self, preview: PreviewId) -> WindowId;

    /// False while the host has not finished constructing the preview's
    /// title element.
    fn title_ready(&self, preview: PreviewId) -> bool;
    /// Terminal opacity of an in-flight title fade, if one is running.
    fn title_fade_target(&self, preview: PreviewId) -> Option<u8>;

    fn fade_title(&mut self, preview: PreviewId, target: u8, duration: Duration);
    fn fade_body(&mut self, preview: PreviewId, target: u8, duration: Duration, easing: Easing);

    fn set_title_visible(&mut self, preview: PreviewId, visible: bool);
    fn set_close_opacity(&mut self, preview: PreviewId, opacity: u8);
    /// Show the close affordance at full opacity, tinted as a highlight.
    fn show_close_affordance(&mut self, preview: PreviewId, tint: Rgba);
    /// Move the title caption up into the preview body.
    fn lift_title_into_preview(&mut self, preview: PreviewId);
}
