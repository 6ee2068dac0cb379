//! # Menu Engine
//!
//! Window lifecycle and navigation for frame-driven, pad-controlled menus.
//!
//! ## Features
//!
//! - **Window State Machine**: timed Opening/Active/Closing/Inactive transitions
//! - **Navigation**: windows open and dismiss each other through a back-reference chain
//! - **Input Routing**: pad input reaches exactly one focused window per frame
//! - **Overlays**: submenu windows are drawn on top of the window that opened them
//! - **Context Passing**: fonts, textures and locale are threaded in explicitly
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use menu_engine::prelude::*;
//!
//! fn main() -> Result<(), DriverError> {
//!     let config = MenuConfig::default();
//!     let context = RenderContext::new(config.screen_size);
//!     let mut driver = FrameDriver::new(config, context)?;
//!
//!     driver.open_root(|ctx| Box::new(StartMenu::new(ctx, None)))?;
//!
//!     while !driver.is_idle() {
//!         driver.frame(1.0 / 60.0, &[(0, PadState::empty())]);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod render;
pub mod menu;
pub mod driver;

/// Common imports for menu users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, MenuConfig},
        driver::{DriverError, FrameDriver, FrameReport},
        events::{Event, EventArg, EventHandler, EventSystem, EventType},
        foundation::{math::Vec2, time::Timer},
        menu::{
            screens::{AboutMenu, ConfirmDialog, GameListMenu, StartMenu},
            DrawFrame, MenuBehavior, Navigator, PadState, Window, WindowError, WindowId,
            WindowManager, WindowState, MENU_ANIMATION_DURATION,
        },
        render::{
            DrawRegion, Font, Locale, LocaleTable, RenderContext, Rgba, TextAlign, Texture,
            TextureId,
        },
    };
}
