use flashcard_core::animation::rotation_degrees;
use flashcard_core::{Deck, DeckController, Face, SessionState};

use crate::vm::Labels;

/// Card background. Follows the flip intent, not the animation, so the
/// colour changes the moment the card is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSurface {
    Front,
    Back,
}

impl CardSurface {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Front => "flashcard flashcard--front",
            Self::Back => "flashcard flashcard--back",
        }
    }
}

/// Everything the card screen draws for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CardScreenVm {
    pub text: String,
    pub face: Face,
    pub counter_label: String,
    pub previous_disabled: bool,
    pub next_label: &'static str,
    pub rotation_deg: f32,
    /// The text layer turns back around so the back face reads left to right.
    pub text_mirrored: bool,
    pub surface: CardSurface,
}

impl CardScreenVm {
    #[must_use]
    pub fn build(state: SessionState, deck: &Deck, progress: f32, labels: &Labels) -> Self {
        let card = DeckController::current_card(state, deck);
        let face = DeckController::visible_face(progress);
        let text = match face {
            Face::Front => card.front(),
            Face::Back => card.back(),
        };
        let (number, total) = DeckController::counter(state, deck);
        let next_label = if DeckController::is_last(state, deck) {
            labels.restart
        } else {
            labels.next
        };
        let surface = if state.flipped() {
            CardSurface::Back
        } else {
            CardSurface::Front
        };

        Self {
            text: text.to_owned(),
            face,
            counter_label: labels.counter(number, total),
            previous_disabled: DeckController::is_first(state),
            next_label,
            rotation_deg: rotation_degrees(progress),
            text_mirrored: face == Face::Back,
            surface,
        }
    }

    #[must_use]
    pub fn card_style(&self) -> String {
        format!(
            "transform: perspective(1200px) rotateY({:.1}deg);",
            self.rotation_deg
        )
    }

    #[must_use]
    pub fn text_style(&self) -> &'static str {
        if self.text_mirrored {
            "transform: rotateY(180deg);"
        } else {
            ""
        }
    }
}
