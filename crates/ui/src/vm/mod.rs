mod card_screen_vm;
mod labels;

pub use card_screen_vm::{CardScreenVm, CardSurface};
pub use labels::{Labels, Locale, LocaleError};
