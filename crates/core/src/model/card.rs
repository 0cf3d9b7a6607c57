/// A two-sided study card: a term on the front and its translation on the back.
///
/// Cards carry no identity of their own; two cards with the same text are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    front: String,
    back: String,
}

impl Card {
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    #[must_use]
    pub fn front(&self) -> &str {
        &self.front
    }

    #[must_use]
    pub fn back(&self) -> &str {
        &self.back
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
