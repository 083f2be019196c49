//! Bracket state transitions: placement, scoring, advancement, seeding.
//!
//! Every operation takes the current [`crate::models::Tournament`] by
//! reference and returns a fresh successor, leaving the input intact.

mod advance;
mod dispatch;
mod placement;
mod scoring;
mod seeding;

pub use advance::{advance, downstream};
pub use dispatch::apply;
pub use placement::{clear_slot, place_participant, return_to_pool};
pub use scoring::{clear_scores, record_score};
pub use seeding::{assign_labels, reset, seed_random, seed_sequential};
