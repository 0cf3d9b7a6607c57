pub mod animation;
pub mod builtin;
pub mod controller;
pub mod error;
pub mod model;
pub mod store;
pub mod time;

pub use animation::{Easing, FlipAnimation, DEFAULT_FLIP_DURATION_MS};
pub use controller::DeckController;
pub use error::Error;
pub use model::{Card, Deck, DeckError, Face, SessionState};
pub use store::{Session, SessionChange, SessionIntent, SubscriptionId};
pub use time::Clock;
