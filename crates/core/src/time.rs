use std::time::{Duration, Instant};

/// Where flip animations read the current time from.
///
/// Readings are offsets from the clock's own origin, not calendar time, so
/// changes to the system clock never reach a running tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Monotonic time elapsed since `origin`.
    Monotonic { origin: Instant },
    /// Time that only moves when `advance` is called.
    Manual { elapsed: Duration },
}

impl Clock {
    #[must_use]
    pub fn monotonic() -> Self {
        Self::Monotonic {
            origin: Instant::now(),
        }
    }

    /// A stopped clock reading zero.
    #[must_use]
    pub fn manual() -> Self {
        Self::Manual {
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        match self {
            Self::Monotonic { origin } => origin.elapsed(),
            Self::Manual { elapsed } => *elapsed,
        }
    }

    /// Moves a manual clock forward. A monotonic clock keeps its own pace.
    pub fn advance(&mut self, delta: Duration) {
        if let Self::Manual { elapsed } = self {
            *elapsed = elapsed.saturating_add(delta);
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::monotonic()
    }
}
