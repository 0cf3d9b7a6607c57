use std::sync::Arc;

use flashcard_core::{Clock, Deck};

use crate::vm::{Labels, Locale};

pub trait UiApp: Send + Sync {
    fn deck(&self) -> Deck;
    fn locale(&self) -> Locale;
    fn flip_duration_ms(&self) -> u32;

    fn clock(&self) -> Clock {
        Clock::monotonic()
    }
}

#[derive(Clone)]
pub struct AppContext {
    deck: Arc<Deck>,
    locale: Locale,
    labels: Labels,
    flip_duration_ms: u32,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let locale = app.locale();
        Self {
            deck: Arc::new(app.deck()),
            locale,
            labels: locale.labels(),
            flip_duration_ms: app.flip_duration_ms(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn labels(&self) -> Labels {
        self.labels
    }

    #[must_use]
    pub fn flip_duration_ms(&self) -> u32 {
        self.flip_duration_ms
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
