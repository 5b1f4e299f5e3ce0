//! Study session state machine.
//!
//! A session owns the ephemeral study queue built at `start` and walks the
//! user through it one card at a time. Grading is split in two so the queue
//! never advances past a card whose update has not been persisted:
//! [`StudySession::grade`] only computes the new scheduling state, and the
//! caller invokes [`StudySession::advance`] once the store write succeeds.

use chrono::{DateTime, Utc};

use crate::error::{Result, SessionError};
use crate::scheduler;
use crate::types::{Difficulty, Flashcard};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not studying.
    Idle,
    /// A card is currently presented.
    Active,
    /// Every due card has been graded. Terminal.
    Complete,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Complete => "complete",
        }
    }
}

/// One user's pass through a deck's due cards.
#[derive(Debug, Clone)]
pub struct StudySession {
    queue: Vec<Flashcard>,
    state: SessionState,
}

impl StudySession {
    /// Begin a session over `cards` at `now`.
    ///
    /// The due set is computed once here and never re-evaluated as time
    /// passes during the session. A deck with nothing due starts out
    /// already `Complete`.
    pub fn start(cards: &[Flashcard], now: DateTime<Utc>) -> Self {
        let queue = scheduler::build_queue(cards, now);
        let state = if queue.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Active
        };
        Self { queue, state }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The card currently presented, if any.
    pub fn current(&self) -> Option<&Flashcard> {
        match self.state {
            SessionState::Active => self.queue.first(),
            _ => None,
        }
    }

    /// Cards remaining in the queue, current card included.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// The remaining queue, earliest-due first.
    pub fn queue(&self) -> &[Flashcard] {
        &self.queue
    }

    /// Compute the graded state of the current card.
    ///
    /// Does not touch the queue; call [`advance`](Self::advance) after the
    /// result has been persisted.
    pub fn grade(&self, difficulty: Difficulty, now: DateTime<Utc>) -> Result<Flashcard> {
        let current = self.current().ok_or(SessionError::NotActive {
            state: self.state.as_str(),
        })?;
        Ok(scheduler::grade(current, difficulty, now))
    }

    /// Drop the current card from the queue after its update was persisted.
    ///
    /// The next card presented is always the front of the remaining queue,
    /// i.e. the most overdue card left. Returns the new state.
    pub fn advance(&mut self) -> Result<SessionState> {
        if self.state != SessionState::Active {
            return Err(SessionError::NotActive {
                state: self.state.as_str(),
            });
        }
        self.queue.remove(0);
        if self.queue.is_empty() {
            self.state = SessionState::Complete;
        }
        Ok(self.state)
    }

    /// Leave study mode. Valid from any state; clears the queue.
    pub fn exit(&mut self) {
        self.queue.clear();
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn card_due_at(millis: i64) -> Flashcard {
        Flashcard {
            id: Uuid::new_v4(),
            face: "face".into(),
            info: "info".into(),
            difficulty: Difficulty::Good,
            next_review_date: Utc.timestamp_millis_opt(millis).unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_000_000).unwrap()
    }

    #[test]
    fn empty_deck_starts_complete() {
        let session = StudySession::start(&[], now());
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.current(), None);
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn no_due_cards_starts_complete() {
        let cards = vec![card_due_at(2_000_000)];
        let session = StudySession::start(&cards, now());
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn session_presents_most_overdue_card_first() {
        let cards = vec![card_due_at(999_000), card_due_at(1_001_000), card_due_at(999_500)];
        let session = StudySession::start(&cards, now());
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.current().unwrap().id, cards[0].id);
    }

    #[test]
    fn grade_does_not_advance_the_queue() {
        let cards = vec![card_due_at(0), card_due_at(1)];
        let session = StudySession::start(&cards, now());

        let graded = session.grade(Difficulty::Easy, now()).unwrap();
        assert_eq!(graded.id, cards[0].id);
        assert_eq!(graded.next_review_date.timestamp_millis(), 605_800_000);

        // Queue untouched until advance.
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.current().unwrap().id, cards[0].id);
    }

    #[test]
    fn advance_removes_exactly_one_card_and_resets_to_front() {
        let cards = vec![card_due_at(0), card_due_at(1), card_due_at(2)];
        let mut session = StudySession::start(&cards, now());

        assert_eq!(session.advance().unwrap(), SessionState::Active);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.current().unwrap().id, cards[1].id);
    }

    #[test]
    fn grading_last_card_completes_the_session() {
        let cards = vec![card_due_at(0)];
        let mut session = StudySession::start(&cards, now());

        session.grade(Difficulty::Good, now()).unwrap();
        assert_eq!(session.advance().unwrap(), SessionState::Complete);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn grading_all_due_cards_drives_session_to_complete() {
        let cards = vec![card_due_at(0), card_due_at(1), card_due_at(2)];
        let mut session = StudySession::start(&cards, now());

        let mut grades = 0;
        while session.state() == SessionState::Active {
            session.grade(Difficulty::Hard, now()).unwrap();
            session.advance().unwrap();
            grades += 1;
        }
        assert_eq!(grades, 3);
        assert_eq!(session.state(), SessionState::Complete);
    }

    #[test]
    fn grade_outside_active_is_rejected() {
        let session = StudySession::start(&[], now());
        let err = session.grade(Difficulty::Good, now()).unwrap_err();
        assert_eq!(err, SessionError::NotActive { state: "complete" });
    }

    #[test]
    fn advance_outside_active_is_rejected() {
        let mut session = StudySession::start(&[], now());
        assert!(session.advance().is_err());
    }

    #[test]
    fn exit_returns_to_idle_from_any_state() {
        let cards = vec![card_due_at(0)];
        let mut session = StudySession::start(&cards, now());
        session.exit();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.remaining(), 0);

        let mut done = StudySession::start(&[], now());
        done.exit();
        assert_eq!(done.state(), SessionState::Idle);
    }
}
