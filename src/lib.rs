//! Overview navigation engine: dock-icon driven workspace switching,
//! window-preview highlighting and workspace reordering for a desktop
//! shell's overview. The host shell delivers raw input events and is
//! reached back through the capability traits in [`sys`].

pub mod common;
pub mod engine;
pub mod sys;

pub use engine::OverviewEngine;
pub use engine::navigation::{DefaultNavigation, NavigationHandler};
