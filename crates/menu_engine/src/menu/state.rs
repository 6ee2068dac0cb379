//! Window lifecycle state and fade timing
//!
//! Every screen fades with the same curve, so the state-to-opacity mapping
//! lives here once instead of in each screen's draw.

/// Default length of an open or close fade in seconds
pub const MENU_ANIMATION_DURATION: f32 = 0.25;

/// Lifecycle of a window
///
/// The only reachable cycle is `Inactive -> Opening -> Active -> Closing -> Inactive`,
/// plus the reversals `Closing -> Opening` and `Opening -> Closing` that
/// resume a fade from where it was interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    /// Not visible
    #[default]
    Inactive,
    /// Fading in
    Opening,
    /// Fully visible, eligible for input
    Active,
    /// Fading out
    Closing,
}

impl WindowState {
    /// Whether the window is mid-fade
    pub const fn is_transitional(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Opacity for a window in `state` after `elapsed` seconds of a `duration` fade
///
/// Opening ramps 0 to 255, Closing ramps 255 to 0, Active is 255 and
/// Inactive is 0. The result is clamped, so elapsed times past the duration
/// never overshoot.
pub fn opacity(state: WindowState, elapsed: f32, duration: f32) -> u8 {
    match state {
        WindowState::Inactive => 0,
        WindowState::Active => u8::MAX,
        WindowState::Opening if duration <= 0.0 => u8::MAX,
        WindowState::Closing if duration <= 0.0 => 0,
        WindowState::Opening => fraction_to_alpha(elapsed / duration),
        WindowState::Closing => fraction_to_alpha(1.0 - elapsed / duration),
    }
}

fn fraction_to_alpha(fraction: f32) -> u8 {
    // NaN maps to 0 through the clamp-then-cast
    (fraction.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Per-window state plus time spent in the current fade
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Animation {
    state: WindowState,
    elapsed: f32,
}

impl Animation {
    /// A fresh, invisible animation
    pub const fn new() -> Self {
        Self { state: WindowState::Inactive, elapsed: 0.0 }
    }

    /// Current state
    pub const fn state(&self) -> WindowState {
        self.state
    }

    /// Seconds spent in the current fade, 0 outside of fades
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current opacity for a fade of `duration` seconds
    pub fn opacity(&self, duration: f32) -> u8 {
        opacity(self.state, self.elapsed, duration)
    }

    /// Start fading in. Returns false if already Opening or Active.
    ///
    /// Interrupting a fade-out resumes the fade-in at the same opacity.
    pub fn begin_open(&mut self, duration: f32) -> bool {
        match self.state {
            WindowState::Inactive => {
                self.state = WindowState::Opening;
                self.elapsed = 0.0;
                true
            }
            WindowState::Closing => {
                self.state = WindowState::Opening;
                self.elapsed = mirrored(self.elapsed, duration);
                true
            }
            WindowState::Opening | WindowState::Active => false,
        }
    }

    /// Start fading out. Returns false if already Closing or Inactive.
    ///
    /// Interrupting a fade-in resumes the fade-out at the same opacity.
    pub fn begin_close(&mut self, duration: f32) -> bool {
        match self.state {
            WindowState::Active => {
                self.state = WindowState::Closing;
                self.elapsed = 0.0;
                true
            }
            WindowState::Opening => {
                self.state = WindowState::Closing;
                self.elapsed = mirrored(self.elapsed, duration);
                true
            }
            WindowState::Closing | WindowState::Inactive => false,
        }
    }

    /// Advance by `delta` seconds, returning the new state if a fade finished
    ///
    /// Negative deltas count as zero.
    pub fn advance(&mut self, delta: f32, duration: f32) -> Option<WindowState> {
        if !self.state.is_transitional() {
            self.elapsed = 0.0;
            return None;
        }

        self.elapsed += delta.max(0.0);
        if self.elapsed < duration {
            return None;
        }

        self.state = match self.state {
            WindowState::Opening => WindowState::Active,
            _ => WindowState::Inactive,
        };
        self.elapsed = 0.0;
        Some(self.state)
    }
}

fn mirrored(elapsed: f32, duration: f32) -> f32 {
    (duration - elapsed).clamp(0.0, duration.max(0.0))
}
