use std::fmt;

use tracing::debug;

use crate::controller::DeckController;
use crate::model::{Card, Deck, DeckError, SessionState};

/// A user action the session understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionIntent {
    Flip,
    Next,
    Previous,
}

/// What a subscriber sees after an intent changed the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionChange {
    pub intent: SessionIntent,
    pub before: SessionState,
    pub after: SessionState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SessionChange)>;

/// Owns one viewing session: the deck, the current state, and the parties
/// that redraw when that state changes.
///
/// All writes go through `dispatch`, which runs the matching
/// `DeckController` operation and then notifies subscribers in the order
/// they subscribed. An intent that leaves the state as it was (previous on
/// the first card) notifies nobody.
pub struct Session {
    deck: Deck,
    state: SessionState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Session {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        let state = DeckController::start(&deck);
        Self {
            deck,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// # Errors
    ///
    /// Returns `DeckError::Empty` if `cards` is empty.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let (deck, state) = DeckController::initialize(cards)?;
        Ok(Self {
            deck,
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current_card(&self) -> &Card {
        DeckController::current_card(self.state, &self.deck)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, intent: SessionIntent) -> SessionState {
        let before = self.state;
        let after = match intent {
            SessionIntent::Flip => DeckController::flip(before),
            SessionIntent::Next => DeckController::next(before, &self.deck),
            SessionIntent::Previous => DeckController::previous(before),
        };
        debug!(
            ?intent,
            position = after.position(),
            flipped = after.flipped(),
            "session intent applied"
        );

        self.state = after;
        if after != before {
            let change = SessionChange {
                intent,
                before,
                after,
            };
            for (_, listener) in &mut self.listeners {
                listener(&change);
            }
        }
        after
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("deck", &self.deck)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
