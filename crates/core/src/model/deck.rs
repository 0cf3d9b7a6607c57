use thiserror::Error;

use crate::model::card::Card;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck must contain at least one card")]
    Empty,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// An ordered, non-empty list of cards.
///
/// A deck is fixed for the lifetime of a session. Nothing in this crate
/// mutates it after construction, so every index in `0..len()` stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck from the given cards, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if `cards` is empty.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    /// Number of cards. Always at least one.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
