use crate::model::{Card, Deck};

const ENGLISH_RUSSIAN: [(&str, &str); 9] = [
    ("Communication", "Общение"),
    ("Developer", "Разработчик"),
    ("Code", "Код"),
    ("Purpose", "Цель"),
    ("Memory", "Память"),
    ("Permission", "Разрешение"),
    ("Internet", "Интернет"),
    ("To ensure", "Обеспечивать"),
    ("Critical", "Критически важный"),
];

#[must_use]
pub fn english_russian_cards() -> Vec<Card> {
    ENGLISH_RUSSIAN
        .iter()
        .map(|(front, back)| Card::new(*front, *back))
        .collect()
}

/// The word list shipped with the app: English terms with Russian translations.
///
/// # Panics
///
/// Never in practice; the built-in list is a non-empty constant.
#[must_use]
pub fn english_russian() -> Deck {
    Deck::new(english_russian_cards()).expect("built-in deck should be non-empty")
}
