/// Which side of a card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }

    /// The face on display for an animated flip progress in `[0, 1]`.
    ///
    /// The text swaps once the card turns past its edge, so exactly `0.5`
    /// still shows the front.
    #[must_use]
    pub fn for_progress(progress: f32) -> Self {
        if progress > 0.5 { Self::Back } else { Self::Front }
    }
}

/// Position and flip intent for one viewing session.
///
/// Only `DeckController` produces new values. The animated flip progress is
/// not part of this state; see `FlipAnimation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionState {
    pub(crate) position: usize,
    pub(crate) flipped: bool,
}

impl SessionState {
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn flipped(&self) -> bool {
        self.flipped
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
