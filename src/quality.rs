// Maps a coarse review outcome (correct/incorrect, optionally timed) onto
// the 0-5 quality scale the SM-2 scheduler consumes.
//
//   5  perfect recall
//   4  correct after hesitation
//   3  correct with difficulty
//   2  incorrect, answer felt easy to recall
//   1  incorrect, answer recognized when shown
//   0  total blackout

/// Answers faster than this count as perfect recall.
const FAST_ANSWER_MS: u64 = 2000;

/// Answers slower than this count as correct-with-difficulty.
const SLOW_ANSWER_MS: u64 = 5000;

/// Derive a quality score from a correctness flag and optional answer latency.
///
/// An incorrect answer maps to 1, never 0: a learner working through the app
/// is assumed to at least recognize the word. Quality 0 is reachable only by
/// passing it to the scheduler directly. A correct answer without timing data
/// maps to 4; with timing data, faster answers score higher.
pub fn from_outcome(is_correct: bool, elapsed_ms: Option<u64>) -> u8 {
    if !is_correct {
        return 1;
    }
    match elapsed_ms {
        Some(ms) if ms < FAST_ANSWER_MS => 5,
        Some(ms) if ms < SLOW_ANSWER_MS => 4,
        Some(_) => 3,
        None => 4,
    }
}
