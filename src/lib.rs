// Spaced-repetition scheduling core for a vocabulary flashcards app.
// The caller owns storage and sessions; this crate only computes state
// transitions.

pub mod quality;
pub mod review;
pub mod sm2;

pub use review::WordProgress;
pub use sm2::Sm2State;
