use tracing::{debug, trace};

use crate::model::{Card, Deck, DeckError, Face, SessionState};

/// Navigation and flip rules for a deck.
///
/// Every operation takes a `SessionState` by value and returns the next one.
/// Only `initialize` can fail; the rest are total over reachable states.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckController;

impl DeckController {
    /// Validates `cards` and opens a session on the first card, front side up.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if `cards` is empty. No session state is
    /// produced in that case.
    pub fn initialize(cards: Vec<Card>) -> Result<(Deck, SessionState), DeckError> {
        let deck = Deck::new(cards)?;
        let state = Self::start(&deck);
        Ok((deck, state))
    }

    /// Opens a session on an already validated deck.
    #[must_use]
    pub fn start(deck: &Deck) -> SessionState {
        debug!(cards = deck.len(), "session started");
        SessionState {
            position: 0,
            flipped: false,
        }
    }

    #[must_use]
    pub fn flip(state: SessionState) -> SessionState {
        SessionState {
            flipped: !state.flipped,
            ..state
        }
    }

    /// Moves to the following card, looping from the last card to the first.
    ///
    /// The flip is always reset, even when it was already down; this also
    /// sends a running flip animation back toward the front.
    #[must_use]
    pub fn next(state: SessionState, deck: &Deck) -> SessionState {
        let position = if state.position < deck.last_index() {
            state.position + 1
        } else {
            0
        };
        SessionState {
            position,
            flipped: false,
        }
    }

    /// Moves to the preceding card. Does not loop: on the first card the
    /// state comes back untouched, flip included.
    #[must_use]
    pub fn previous(state: SessionState) -> SessionState {
        if state.position == 0 {
            trace!("previous on first card ignored");
            return state;
        }
        SessionState {
            position: state.position - 1,
            flipped: false,
        }
    }

    /// # Panics
    ///
    /// Panics if `state` was produced for a different, shorter deck.
    #[must_use]
    pub fn current_card(state: SessionState, deck: &Deck) -> &Card {
        &deck.cards()[state.position]
    }

    #[must_use]
    pub fn visible_face(progress: f32) -> Face {
        Face::for_progress(progress)
    }

    #[must_use]
    pub fn is_first(state: SessionState) -> bool {
        state.position == 0
    }

    #[must_use]
    pub fn is_last(state: SessionState, deck: &Deck) -> bool {
        state.position == deck.last_index()
    }

    /// One-based position and deck size, for "N of M" counters.
    #[must_use]
    pub fn counter(state: SessionState, deck: &Deck) -> (usize, usize) {
        (state.position + 1, deck.len())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
