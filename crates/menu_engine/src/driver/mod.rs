//! Frame driver
//!
//! One call to [`FrameDriver::frame`] is one rendered frame: advance the
//! fades, draw the visible chain, hand pad samples to the focused window and
//! flush lifecycle events.

use thiserror::Error;

use crate::config::{ConfigError, MenuConfig};
use crate::menu::{PadState, WindowError, WindowId, WindowManager};
use crate::render::RenderContext;

/// Driver errors
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A navigation call from the host referenced an unknown window
    #[error("Navigation error: {0}")]
    Window(#[from] WindowError),
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Windows drawn, deepest ancestor first
    pub drawn: Vec<WindowId>,
    /// Window that received input, if any
    pub input_to: Option<WindowId>,
    /// Registered windows after the frame
    pub live_windows: usize,
}

/// Owns the window manager and the rendering context for the life of the process
pub struct FrameDriver {
    manager: WindowManager,
    context: RenderContext,
    config: MenuConfig,
    frames: u64,
}

impl FrameDriver {
    /// Create a driver from validated configuration
    pub fn new(config: MenuConfig, context: RenderContext) -> Result<Self, DriverError> {
        config.validate()?;
        log::info!(
            "Frame driver ready: {}x{} screen, {:.3}s fades",
            config.screen_size.0,
            config.screen_size.1,
            config.animation_duration
        );

        Ok(Self {
            manager: WindowManager::from_config(&config),
            context,
            config,
            frames: 0,
        })
    }

    /// Run one frame
    ///
    /// Each `(port, pad)` sample is dispatched in order. Requests made while
    /// handling one sample are applied before the next, so a window opened
    /// by the first sample never receives the second (it is still fading in).
    pub fn frame(&mut self, delta_time: f32, pads: &[(u32, PadState)]) -> FrameReport {
        self.frames += 1;
        self.manager.tick(delta_time);
        let drawn = self.manager.draw_chain(&mut self.context, delta_time);

        let mut input_to = None;
        for &(port, pad) in pads {
            let target = self.manager.focused();
            if self.manager.dispatch_pad(port, pad, &self.context) {
                input_to = input_to.or(target);
            }
        }

        self.manager.dispatch_events();

        let report = FrameReport {
            drawn,
            input_to,
            live_windows: self.manager.len(),
        };
        log::trace!("Frame {}: {:?}", self.frames, report);
        report
    }

    /// Whether no window is left to show
    pub fn is_idle(&self) -> bool {
        self.manager.is_empty()
    }

    /// Frames run so far
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The window manager
    pub const fn manager(&self) -> &WindowManager {
        &self.manager
    }

    /// The window manager, for registering windows and event handlers
    pub fn manager_mut(&mut self) -> &mut WindowManager {
        &mut self.manager
    }

    /// Shared rendering resources, for constructing screens
    pub const fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Shared rendering resources, e.g. to install a late-loaded locale
    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    /// Active configuration
    pub const fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Register a screen built from the context and open it
    pub fn open_root<F>(&mut self, build: F) -> Result<WindowId, DriverError>
    where
        F: FnOnce(&RenderContext) -> Box<dyn crate::menu::MenuBehavior>,
    {
        let behavior = build(&self.context);
        let id = self.manager.add_window(behavior);
        self.manager.open_window(id)?;
        Ok(id)
    }
}
