use thiserror::Error;

use crate::model::DeckError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Deck(#[from] DeckError),
}
