// SM-2 (SuperMemo-2) scheduling implementation.
// Computes the next review state from the previous one and a 0-5 quality score.

/// Easiness factor can never drop below this, no matter the review history.
pub const MIN_EASINESS: f64 = 1.3;

/// Easiness factor assigned to an item nobody has reviewed yet.
pub const INITIAL_EASINESS: f64 = 2.5;

/// Quality at or above this counts as a pass; below it is a lapse.
pub const PASS_THRESHOLD: u8 = 3;

/// Per-item scheduling state. The caller owns persistence; this module only
/// computes transitions.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sm2State {
    /// Consecutive successful reviews since the last lapse.
    pub repetitions: u32,
    /// How easy the item is for this learner, floored at 1.3.
    pub easiness: f64,
    /// Days until the item is next due.
    pub interval: u32,
}

impl Sm2State {
    /// State for a brand-new item: no reviews yet, due immediately.
    pub fn new() -> Sm2State {
        Sm2State {
            repetitions: 0,
            easiness: INITIAL_EASINESS,
            interval: 0,
        }
    }
}

impl Default for Sm2State {
    fn default() -> Sm2State {
        Sm2State::new()
    }
}

/// Round quality to the nearest integer and clamp into 0-5. Callers may pass
/// fractional or out-of-range values; they are normalized, not rejected.
fn normalize_quality(quality: f64) -> u8 {
    quality.round().clamp(0.0, 5.0) as u8
}

fn updated_easiness(easiness: f64, q: f64) -> f64 {
    let delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
    (easiness + delta).max(MIN_EASINESS)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Apply one review to `previous` and return the next state.
///
/// A pass (quality >= 3) advances the repetition count and grows the
/// interval: 1 day after the first pass, 6 after the second, then the
/// previous interval times the new easiness. A lapse resets repetitions
/// and interval but only lowers easiness, it does not reset it.
pub fn next_state(previous: &Sm2State, quality: f64) -> Sm2State {
    let q = normalize_quality(quality);

    // The stored easiness is rounded to two decimals; the interval multiplier
    // uses the rounded value so interval == round(interval * easiness) holds
    // on the returned state.
    let easiness = round2(updated_easiness(previous.easiness, f64::from(q)));

    if q >= PASS_THRESHOLD {
        let interval = match previous.repetitions {
            0 => 1,
            1 => 6,
            _ => (f64::from(previous.interval) * easiness).round() as u32,
        };
        Sm2State {
            repetitions: previous.repetitions + 1,
            easiness,
            interval,
        }
    } else {
        Sm2State {
            repetitions: 0,
            easiness,
            interval: 1,
        }
    }
}
