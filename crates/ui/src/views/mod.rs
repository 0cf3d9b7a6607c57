mod flashcard;

pub use flashcard::FlashcardView;

#[cfg(test)]
pub(crate) use flashcard::FlashcardTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
