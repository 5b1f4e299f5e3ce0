//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from recall-core
pub use recall_core::types::{Deck, Difficulty, Flashcard};

// === Database Entity Types ===

/// User account row
#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Login session row. The token is the opaque bearer credential.
#[derive(Debug, Clone, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Deck row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDeck {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Flashcard row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFlashcard {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub face: String,
    pub info: String,
    pub difficulty: i16,
    pub next_review_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbFlashcard {
    /// Convert to the core card type. The difficulty column carries a CHECK
    /// constraint, so out-of-range values can only come from manual edits;
    /// they fall back to the creation default.
    pub fn to_core_card(&self) -> Flashcard {
        Flashcard {
            id: self.id,
            face: self.face.clone(),
            info: self.info.clone(),
            difficulty: Difficulty::from_value(self.difficulty as i32).unwrap_or_default(),
            next_review_date: self.next_review_date,
        }
    }

    /// Convert to the API representation.
    pub fn to_api_card(&self) -> FlashcardResponse {
        FlashcardResponse {
            id: self.id,
            face: self.face.clone(),
            info: self.info.clone(),
            difficulty: self.difficulty,
            next_review_date: self.next_review_date,
        }
    }
}

// === API Request/Response Types ===

/// POST /api/auth/register and /api/auth/login body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Token response for register/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// GET /api/user response (never exposes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// POST /api/decks body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeckRequest {
    pub name: String,
}

/// Flashcard as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardResponse {
    pub id: Uuid,
    pub face: String,
    pub info: String,
    pub difficulty: i16,
    pub next_review_date: DateTime<Utc>,
}

impl From<Flashcard> for FlashcardResponse {
    fn from(card: Flashcard) -> Self {
        Self {
            id: card.id,
            face: card.face,
            info: card.info,
            difficulty: card.difficulty.to_value() as i16,
            next_review_date: card.next_review_date,
        }
    }
}

/// Deck with its cards in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckResponse {
    pub id: Uuid,
    pub name: String,
    pub flashcards: Vec<FlashcardResponse>,
    pub created_at: DateTime<Utc>,
}

/// GET /api/decks response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckListResponse {
    pub decks: Vec<DeckResponse>,
}

/// POST /api/decks/:deck_id/flashcards body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFlashcardRequest {
    pub face: String,
    pub info: String,
}

/// GET /api/decks/:deck_id/study/queue response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyQueueResponse {
    /// "active" when at least one card is due, "complete" otherwise.
    pub state: String,
    pub cards: Vec<FlashcardResponse>,
}

/// POST /api/decks/:deck_id/study/grade body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub card_id: Uuid,
    pub difficulty: i32,
}

/// Grade response: the persisted card with its new scheduling state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    pub card: FlashcardResponse,
}
