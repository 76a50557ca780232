use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Keyboard modifier state attached to pointer and key events.
    /// Bit positions mirror the host toolkit's modifier mask.
    #[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, Eq, PartialEq)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const SUPER = 1 << 6;
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
    Smooth,
}

/// Keys the navigation override reacts to; anything else never reaches
/// the engine as a `Key`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    PageUp,
    PageDown,
    Home,
    End,
    Tab,
    Space,
}

/// Cardinal motion used for workspace-neighbor resolution.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Sign of the motion along the workspace sequence: before = -1,
    /// after = +1.
    pub fn reorder_step(self) -> i32 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }
}

/// What the host's event dispatch should do with an event after the
/// engine has seen it.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    /// Let the event continue to other handlers untouched.
    Propagate,
    /// Swallow the event.
    Stop,
    /// Hand the event to the host's built-in handling for this widget.
    RunDefault,
}
