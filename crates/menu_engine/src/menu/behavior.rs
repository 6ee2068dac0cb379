//! Screen behavior contract
//!
//! A behavior never touches the manager directly. During input it receives a
//! [`Navigator`] that queues open/close requests, and the manager applies them
//! once the behavior returns.

use super::{PadState, WindowId, WindowState};
use crate::render::{RenderContext, Rgba};

/// What every concrete screen implements
///
/// Screens that were constructed without the collaborators they need must
/// turn `draw` and `handle_pad` into no-ops rather than fail.
pub trait MenuBehavior {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Window this screen was opened from, fixed at construction
    fn previous_id(&self) -> Option<WindowId>;

    /// Render the screen at the opacity carried by `frame`
    fn draw(&mut self, frame: &mut DrawFrame<'_>);

    /// React to one frame of pad input
    fn handle_pad(&mut self, port: u32, pad: PadState, nav: &mut Navigator<'_>);

    /// Whether this screen is drawn over its opener instead of replacing it
    fn is_submenu(&self) -> bool {
        false
    }

    /// Whether every collaborator was present at construction
    fn is_ready(&self) -> bool {
        true
    }
}

/// Per-draw view handed to a behavior
pub struct DrawFrame<'a> {
    ctx: &'a mut RenderContext,
    window: WindowId,
    state: WindowState,
    alpha: u8,
    delta: f32,
}

impl<'a> DrawFrame<'a> {
    pub(crate) fn new(
        ctx: &'a mut RenderContext,
        window: WindowId,
        state: WindowState,
        alpha: u8,
        delta: f32,
    ) -> Self {
        Self { ctx, window, state, alpha, delta }
    }

    /// Rendering resources
    pub fn ctx(&mut self) -> &mut RenderContext {
        &mut *self.ctx
    }

    /// Window being drawn
    pub const fn window_id(&self) -> WindowId {
        self.window
    }

    /// Lifecycle state of the window being drawn
    pub const fn state(&self) -> WindowState {
        self.state
    }

    /// Opacity implied by the lifecycle state
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Seconds since the previous frame
    pub const fn delta(&self) -> f32 {
        self.delta
    }

    /// `rgb` at the window's opacity
    pub const fn color(&self, rgb: u32) -> Rgba {
        Rgba::from_rgb_alpha(rgb, self.alpha)
    }
}

/// Navigation request queued by a behavior
pub(crate) enum NavRequest {
    Add(WindowId, Box<dyn MenuBehavior>),
    Open(WindowId),
    Close(WindowId),
}

/// Handle through which a behavior opens and closes windows
pub struct Navigator<'a> {
    window: WindowId,
    state: WindowState,
    ctx: &'a RenderContext,
    next_id: &'a mut u64,
    requests: &'a mut Vec<NavRequest>,
}

impl<'a> Navigator<'a> {
    pub(crate) fn new(
        window: WindowId,
        state: WindowState,
        ctx: &'a RenderContext,
        next_id: &'a mut u64,
        requests: &'a mut Vec<NavRequest>,
    ) -> Self {
        Self { window, state, ctx, next_id, requests }
    }

    /// Window receiving this input
    pub const fn window_id(&self) -> WindowId {
        self.window
    }

    /// Lifecycle state of the window receiving this input
    pub const fn state(&self) -> WindowState {
        self.state
    }

    /// Shared font and locale, for constructing child screens
    pub const fn ctx(&self) -> &RenderContext {
        self.ctx
    }

    /// Register a window and return its id
    ///
    /// The id is valid immediately; the window joins the manager when the
    /// current behavior call returns.
    pub fn add_window(&mut self, behavior: Box<dyn MenuBehavior>) -> WindowId {
        let id = WindowId(*self.next_id);
        *self.next_id += 1;
        self.requests.push(NavRequest::Add(id, behavior));
        id
    }

    /// Request a window to fade in
    pub fn open_window(&mut self, id: WindowId) {
        self.requests.push(NavRequest::Open(id));
    }

    /// Request a window to fade out and be destroyed
    pub fn close_window(&mut self, id: WindowId) {
        self.requests.push(NavRequest::Close(id));
    }

    /// Register and open a window in one step
    pub fn open_new(&mut self, behavior: Box<dyn MenuBehavior>) -> WindowId {
        let id = self.add_window(behavior);
        self.open_window(id);
        id
    }

    /// Request the receiving window to close
    pub fn close_self(&mut self) {
        self.close_window(self.window);
    }
}
