//! Scripted pad input for the headless demo

use menu_engine::prelude::*;

const PORT: u32 = 0;

struct Step {
    wait: f32,
    pad: PadState,
    note: &'static str,
}

/// Timed sequence of pad presses
///
/// Each press is held for exactly one frame, after waiting `wait` seconds
/// since the previous press.
pub struct Script {
    steps: Vec<Step>,
    next: usize,
    waited: f32,
}

impl Script {
    /// Visit every bundled screen and return to the title screen
    pub fn walkthrough(animation_duration: f32) -> Self {
        let settle = animation_duration * 1.5 + 0.1;
        let step = |pad, note| Step { wait: settle, pad, note };

        Self {
            steps: vec![
                step(PadState::RIGHT, "select cheats"),
                step(PadState::CROSS, "open game list"),
                step(PadState::DOWN, "move to second game"),
                step(PadState::CROSS, "ask to load cheats"),
                step(PadState::CROSS, "confirm"),
                step(PadState::CIRCLE, "leave game list"),
                step(PadState::RIGHT, "select options"),
                step(PadState::RIGHT, "select about"),
                step(PadState::CROSS, "open about"),
                step(PadState::CIRCLE, "leave about"),
            ],
            next: 0,
            waited: 0.0,
        }
    }

    /// Pad samples to feed this frame
    pub fn advance(&mut self, delta_time: f32) -> Vec<(u32, PadState)> {
        let Some(step) = self.steps.get(self.next) else {
            return Vec::new();
        };

        self.waited += delta_time.max(0.0);
        if self.waited < step.wait {
            return Vec::new();
        }

        log::info!("Script: {}", step.note);
        self.waited = 0.0;
        self.next += 1;
        vec![(PORT, step.pad)]
    }

    /// All presses have been delivered
    pub fn finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}
