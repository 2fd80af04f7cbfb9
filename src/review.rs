use chrono::NaiveDate;

use crate::quality;
use crate::sm2::{self, Sm2State};

/// Per-learner, per-word progress record. The caller loads it from storage,
/// applies one review, and persists the result; this crate never stores it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WordProgress {
    pub repetitions: u32,
    pub easiness: f64,
    pub interval: u32,
    pub next_review: Option<NaiveDate>,
    pub last_reviewed: Option<NaiveDate>,
    /// Coarse 0-5 rating of how hard the last review was (5 - quality).
    pub difficulty_rating: Option<u8>,
}

impl WordProgress {
    /// Record for a word the learner has never reviewed. Due immediately.
    pub fn new() -> WordProgress {
        let state = Sm2State::new();
        WordProgress {
            repetitions: state.repetitions,
            easiness: state.easiness,
            interval: state.interval,
            next_review: None,
            last_reviewed: None,
            difficulty_rating: None,
        }
    }

    fn state(&self) -> Sm2State {
        Sm2State {
            repetitions: self.repetitions,
            easiness: self.easiness,
            interval: self.interval,
        }
    }

    /// Apply one graded review: update the scheduling triple, stamp the
    /// review date, and push the next-review date `interval` days out.
    pub fn apply_review(&mut self, quality: u8, today: NaiveDate) {
        let next = sm2::next_state(&self.state(), f64::from(quality));
        self.repetitions = next.repetitions;
        self.easiness = next.easiness;
        self.interval = next.interval;
        self.last_reviewed = Some(today);
        self.next_review = Some(today + chrono::Days::new(u64::from(next.interval)));
        self.difficulty_rating = Some(5 - quality.min(5));
    }

    /// Apply a raw correct/incorrect outcome, deriving the quality from the
    /// correctness flag and optional answer latency.
    pub fn apply_outcome(&mut self, is_correct: bool, elapsed_ms: Option<u64>, today: NaiveDate) {
        let q = quality::from_outcome(is_correct, elapsed_ms);
        self.apply_review(q, today);
    }

    /// A word is due when it has never been reviewed or its next-review date
    /// has arrived.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        match self.next_review {
            None => true,
            Some(due) => due <= today,
        }
    }
}

impl Default for WordProgress {
    fn default() -> WordProgress {
        WordProgress::new()
    }
}
