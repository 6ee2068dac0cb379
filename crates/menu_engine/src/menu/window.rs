//! A registered screen instance

use super::behavior::{DrawFrame, MenuBehavior};
use super::state::Animation;
use super::{WindowId, WindowState};
use crate::render::RenderContext;

/// One navigable screen: identity, lifecycle and the behavior it owns
///
/// Only the [`WindowManager`](super::WindowManager) creates windows, so every
/// `Window` carries a registered id.
pub struct Window {
    id: WindowId,
    previous_id: Option<WindowId>,
    animation: Animation,
    behavior: Box<dyn MenuBehavior>,
}

impl Window {
    pub(crate) fn new(id: WindowId, behavior: Box<dyn MenuBehavior>) -> Self {
        Self {
            id,
            previous_id: behavior.previous_id(),
            animation: Animation::new(),
            behavior,
        }
    }

    /// Registered id
    pub const fn id(&self) -> WindowId {
        self.id
    }

    /// Window this one was opened from
    pub const fn previous_id(&self) -> Option<WindowId> {
        self.previous_id
    }

    /// Current lifecycle state
    pub const fn state(&self) -> WindowState {
        self.animation.state()
    }

    /// Seconds spent in the current fade
    pub const fn animation_elapsed(&self) -> f32 {
        self.animation.elapsed()
    }

    /// Opacity for a fade of `duration` seconds
    pub fn opacity(&self, duration: f32) -> u8 {
        self.animation.opacity(duration)
    }

    /// Whether the behavior draws over its opener
    pub fn is_submenu(&self) -> bool {
        self.behavior.is_submenu()
    }

    /// The owned behavior
    pub fn behavior(&self) -> &dyn MenuBehavior {
        self.behavior.as_ref()
    }

    pub(crate) fn behavior_mut(&mut self) -> &mut dyn MenuBehavior {
        self.behavior.as_mut()
    }

    pub(crate) fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub(crate) fn draw(&mut self, ctx: &mut RenderContext, delta: f32, duration: f32) {
        let alpha = self.opacity(duration);
        let mut frame = DrawFrame::new(ctx, self.id, self.state(), alpha, delta);
        self.behavior.draw(&mut frame);
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("previous_id", &self.previous_id)
            .field("behavior", &self.behavior.name())
            .field("animation", &self.animation)
            .finish()
    }
}
