use std::time::Duration;

/// Flip tween length used by the desktop app unless overridden.
pub const DEFAULT_FLIP_DURATION_MS: u32 = 400;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-5;

//
// ─── EASING ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// Cubic Bézier (0.4, 0.0, 0.2, 1.0): quick start, long gentle landing.
    #[default]
    FastOutSlowIn,
}

impl Easing {
    /// Maps linear time `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }
}

fn bezier_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_axis_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Solves x(s) = x for the curve parameter, then reads y(s).
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < EPSILON {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier_axis(x1, x2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_axis(y1, y2, s)
}

//
// ─── FLIP ANIMATION ────────────────────────────────────────────────────────────
//

/// Time-based tween of a card's flip progress: 0 is the front, 1 the back.
///
/// The tween chases a target derived from `SessionState::flipped`. Changing
/// the target mid-flight restarts the tween from wherever the card currently
/// is, with the full duration.
///
/// Time is fed in through `sample` as clock readings. Only forward steps
/// between readings count towards the tween, so a reading that goes backwards
/// holds the card still for that frame instead of stalling it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipAnimation {
    from: f32,
    target: f32,
    // Time played since the current tween started. `None` once settled.
    elapsed: Option<Duration>,
    last_sample: Option<Duration>,
    duration: Duration,
    easing: Easing,
}

impl FlipAnimation {
    /// A settled animation resting on the front face.
    #[must_use]
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            elapsed: None,
            last_sample: None,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn with_duration_ms(millis: u32) -> Self {
        Self::new(Duration::from_millis(u64::from(millis)), Easing::default())
    }

    /// Advances the tween to the clock reading `now`.
    pub fn sample(&mut self, now: Duration) {
        let step = self
            .last_sample
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_sample = Some(now);

        let Some(elapsed) = self.elapsed else {
            return;
        };
        let elapsed = elapsed.saturating_add(step);
        if elapsed >= self.duration {
            self.finish();
        } else {
            self.elapsed = Some(elapsed);
        }
    }

    /// Points the tween at `target`, starting from the value sampled at `now`.
    pub fn retarget(&mut self, target: f32, now: Duration) {
        self.sample(now);
        let target = target.clamp(0.0, 1.0);
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.from = self.progress();
        self.target = target;
        self.elapsed = Some(Duration::ZERO);
        if self.duration.is_zero() {
            self.finish();
        }
    }

    pub fn sync_to(&mut self, flipped: bool, now: Duration) {
        self.retarget(if flipped { 1.0 } else { 0.0 }, now);
    }

    /// Settles on the current target without playing the rest of the tween.
    pub fn finish(&mut self) {
        self.from = self.target;
        self.elapsed = None;
    }

    /// Progress as of the last sample.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let Some(elapsed) = self.elapsed else {
            return self.target;
        };
        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(fraction);
        (self.from + (self.target - self.from) * eased).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }
}

impl Default for FlipAnimation {
    fn default() -> Self {
        Self::with_duration_ms(DEFAULT_FLIP_DURATION_MS)
    }
}

/// Card rotation around its vertical axis for a flip progress.
#[must_use]
pub fn rotation_degrees(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0) * 180.0
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
