//! Pad input snapshot

use bitflags::bitflags;

bitflags! {
    /// Buttons held on one port for one frame
    ///
    /// Sampled once per dispatch. There is no repeat or chord handling beyond
    /// the opposite-direction rule in [`PadState::left_only`] and friends.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PadState: u32 {
        /// D-pad left
        const LEFT = 1 << 0;
        /// D-pad right
        const RIGHT = 1 << 1;
        /// D-pad up
        const UP = 1 << 2;
        /// D-pad down
        const DOWN = 1 << 3;
        /// Confirm
        const CROSS = 1 << 4;
        /// Back
        const CIRCLE = 1 << 5;
        /// Start
        const START = 1 << 6;
        /// Select
        const SELECT = 1 << 7;
    }
}

impl PadState {
    /// Left held without right
    pub fn left_only(self) -> bool {
        self.contains(Self::LEFT) && !self.contains(Self::RIGHT)
    }

    /// Right held without left
    pub fn right_only(self) -> bool {
        self.contains(Self::RIGHT) && !self.contains(Self::LEFT)
    }

    /// Up held without down
    pub fn up_only(self) -> bool {
        self.contains(Self::UP) && !self.contains(Self::DOWN)
    }

    /// Down held without up
    pub fn down_only(self) -> bool {
        self.contains(Self::DOWN) && !self.contains(Self::UP)
    }

    /// Confirm button held
    pub fn confirm(self) -> bool {
        self.contains(Self::CROSS)
    }

    /// Back button held
    pub fn back(self) -> bool {
        self.contains(Self::CIRCLE)
    }
}
