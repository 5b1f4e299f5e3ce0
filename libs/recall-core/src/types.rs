//! Core types for the flashcard scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recall difficulty reported by the user when grading a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Hard,
    Good,
    Easy,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Good
    }
}

impl Difficulty {
    /// Convert to the wire value (0-2).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Hard => 0,
            Self::Good => 1,
            Self::Easy => 2,
        }
    }

    /// Create from the wire value. Anything outside 0-2 is rejected.
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Hard),
            1 => Some(Self::Good),
            2 => Some(Self::Easy),
            _ => None,
        }
    }
}

/// A single flashcard.
///
/// `face` and `info` are immutable after creation; `difficulty` and
/// `next_review_date` are updated together by a grading event and never
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub face: String,
    pub info: String,
    pub difficulty: Difficulty,
    pub next_review_date: DateTime<Utc>,
}

impl Flashcard {
    /// Create a card that is immediately due.
    pub fn new(id: Uuid, face: String, info: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            face,
            info,
            difficulty: Difficulty::default(),
            next_review_date: now,
        }
    }

    /// Whether the card is eligible for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_date <= now
    }
}

/// A named, ordered collection of flashcards. Cards belong to exactly one
/// deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub flashcards: Vec<Flashcard>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn difficulty_round_trips_through_wire_values() {
        for d in [Difficulty::Hard, Difficulty::Good, Difficulty::Easy] {
            assert_eq!(Difficulty::from_value(d.to_value() as i32), Some(d));
        }
    }

    #[test]
    fn difficulty_rejects_out_of_range_values() {
        assert_eq!(Difficulty::from_value(3), None);
        assert_eq!(Difficulty::from_value(-1), None);
        assert_eq!(Difficulty::from_value(42), None);
    }

    #[test]
    fn new_card_is_immediately_due() {
        let now = Utc.timestamp_millis_opt(1_000_000).unwrap();
        let card = Flashcard::new(Uuid::new_v4(), "face".into(), "info".into(), now);
        assert!(card.is_due(now));
        assert_eq!(card.difficulty, Difficulty::Good);
    }

    #[test]
    fn card_due_exactly_at_now_counts_as_due() {
        let now = Utc.timestamp_millis_opt(5_000).unwrap();
        let mut card = Flashcard::new(Uuid::new_v4(), "f".into(), "i".into(), now);
        card.next_review_date = now;
        assert!(card.is_due(now));
        card.next_review_date = now + chrono::Duration::milliseconds(1);
        assert!(!card.is_due(now));
    }
}
