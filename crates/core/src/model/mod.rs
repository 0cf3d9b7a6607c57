mod card;
mod deck;
mod session;

pub use card::Card;
pub use deck::{Deck, DeckError};
pub use session::{Face, SessionState};
