//! Review scheduling.
//!
//! The scheduler is deliberately simple: a greedy filter-and-sort over the
//! deck plus a fixed difficulty-to-interval lookup table. There is no ease
//! factor, streak tracking or forgetting curve, and none should be added
//! here without a requirements change.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Difficulty, Flashcard};

/// Fixed interval added to "now" when a card is graded.
pub fn review_interval(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Hard => Duration::days(1),
        Difficulty::Good => Duration::days(3),
        Difficulty::Easy => Duration::days(7),
    }
}

/// Build the study queue for a session.
///
/// Keeps only cards due at `now` and orders them earliest-due first. The
/// sort is stable, so cards sharing a due date keep their deck order. An
/// empty result is a valid outcome, not an error.
pub fn build_queue(cards: &[Flashcard], now: DateTime<Utc>) -> Vec<Flashcard> {
    let mut queue: Vec<Flashcard> = cards.iter().filter(|c| c.is_due(now)).cloned().collect();
    queue.sort_by_key(|c| c.next_review_date);
    queue
}

/// Grade a card, producing its next scheduling state.
///
/// Returns a new card with `difficulty` and `next_review_date` updated
/// together; `id`, `face` and `info` are untouched. Persisting the result
/// is the caller's job.
pub fn grade(card: &Flashcard, difficulty: Difficulty, now: DateTime<Utc>) -> Flashcard {
    Flashcard {
        difficulty,
        next_review_date: now + review_interval(difficulty),
        ..card.clone()
    }
}
