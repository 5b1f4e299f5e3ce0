//! Core study library shared by the backend service.
//!
//! Provides:
//! - Review scheduling (due-queue construction, interval table)
//! - Study session state machine
//! - Shared types (Flashcard, Deck, Difficulty)
//!
//! The crate is pure: it consumes plain data and a caller-supplied clock,
//! and performs no I/O. Persistence of graded cards belongs to the caller.

pub mod error;
pub mod scheduler;
pub mod session;
pub mod types;

pub use error::{Result, SessionError};
pub use scheduler::{build_queue, grade, review_interval};
pub use session::{SessionState, StudySession};
pub use types::{Deck, Difficulty, Flashcard};
