//! Menu window system
//!
//! Provides the window lifecycle and navigation core.
//!
//! Architecture:
//! - WindowManager: owns every registered window, drives their fades and routes input
//! - Window: one screen instance with identity, lifecycle state and an owned behavior
//! - MenuBehavior: what each concrete screen implements (draw, pad, submenu flag)
//! - screens/: the concrete screens shipped with the crate

pub mod state;
pub mod input;
pub mod behavior;
pub mod window;
pub mod manager;
pub mod screens;

use std::fmt;

pub use state::{opacity, Animation, WindowState, MENU_ANIMATION_DURATION};
pub use input::PadState;
pub use behavior::{DrawFrame, MenuBehavior, Navigator};
pub use window::Window;
pub use manager::{WindowError, WindowManager};

/// Unique identifier for registered windows
///
/// Assigned by the manager from a counter that never repeats while the
/// manager is alive. A window with no opener stores `None` instead of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
