//! PostgreSQL database operations

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Create a new user with an already-hashed password
    pub async fn create_user(&self, email: &str, password_hash: &str) -> Result<DbUser> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ApiError::Conflict(format!("email already registered: {}", email))
            }
            _ => ApiError::Database(e),
        })?;

        Ok(user)
    }

    /// Get user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // === Session Repository ===

    /// Create a login session with a generated token
    pub async fn create_session(&self, user_id: Uuid) -> Result<DbSession> {
        let token = Uuid::new_v4().to_string();
        let session = sqlx::query_as::<_, DbSession>(
            r#"
            INSERT INTO sessions (user_id, token)
            VALUES ($1, $2)
            RETURNING id, user_id, token, created_at, last_seen_at
            "#,
        )
        .bind(user_id)
        .bind(&token)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    /// Get session by token
    pub async fn get_session_by_token(&self, token: &str) -> Result<Option<DbSession>> {
        let session = sqlx::query_as::<_, DbSession>(
            r#"
            SELECT id, user_id, token, created_at, last_seen_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// Update session last_seen_at timestamp
    pub async fn update_last_seen(&self, session_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE sessions
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(session_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Deck Repository ===

    /// Create a deck for a user
    pub async fn create_deck(&self, user_id: Uuid, name: &str) -> Result<DbDeck> {
        let deck = sqlx::query_as::<_, DbDeck>(
            r#"
            INSERT INTO decks (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(deck)
    }

    /// Get all decks owned by a user
    pub async fn get_decks(&self, user_id: Uuid) -> Result<Vec<DbDeck>> {
        let decks = sqlx::query_as::<_, DbDeck>(
            r#"
            SELECT id, user_id, name, created_at
            FROM decks
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(decks)
    }

    /// Get one deck, scoped to its owner
    pub async fn get_deck(&self, deck_id: Uuid, user_id: Uuid) -> Result<Option<DbDeck>> {
        let deck = sqlx::query_as::<_, DbDeck>(
            r#"
            SELECT id, user_id, name, created_at
            FROM decks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(deck_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deck)
    }

    /// Delete a deck and, via cascade, its flashcards
    pub async fn delete_deck(&self, deck_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM decks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(deck_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // === Flashcard Repository ===

    /// Insert a flashcard; new cards are immediately due
    pub async fn insert_flashcard(
        &self,
        deck_id: Uuid,
        face: &str,
        info: &str,
        now: DateTime<Utc>,
    ) -> Result<DbFlashcard> {
        let card = sqlx::query_as::<_, DbFlashcard>(
            r#"
            INSERT INTO flashcards (deck_id, face, info, difficulty, next_review_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, deck_id, face, info, difficulty, next_review_date, created_at, updated_at
            "#,
        )
        .bind(deck_id)
        .bind(face)
        .bind(info)
        .bind(Difficulty::default().to_value() as i16)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }

    /// Get a deck's flashcards in insertion order
    pub async fn get_flashcards(&self, deck_id: Uuid) -> Result<Vec<DbFlashcard>> {
        let cards = sqlx::query_as::<_, DbFlashcard>(
            r#"
            SELECT id, deck_id, face, info, difficulty, next_review_date, created_at, updated_at
            FROM flashcards
            WHERE deck_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(deck_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cards)
    }

    /// Get one flashcard, scoped to its deck
    pub async fn get_flashcard(&self, card_id: Uuid, deck_id: Uuid) -> Result<Option<DbFlashcard>> {
        let card = sqlx::query_as::<_, DbFlashcard>(
            r#"
            SELECT id, deck_id, face, info, difficulty, next_review_date, created_at, updated_at
            FROM flashcards
            WHERE id = $1 AND deck_id = $2
            "#,
        )
        .bind(card_id)
        .bind(deck_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(card)
    }

    /// Persist a grading event. Difficulty and next review date change in
    /// one statement so they can never drift apart.
    pub async fn update_review_state(
        &self,
        card_id: Uuid,
        difficulty: Difficulty,
        next_review_date: DateTime<Utc>,
    ) -> Result<DbFlashcard> {
        let card = sqlx::query_as::<_, DbFlashcard>(
            r#"
            UPDATE flashcards
            SET difficulty = $2, next_review_date = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, deck_id, face, info, difficulty, next_review_date, created_at, updated_at
            "#,
        )
        .bind(card_id)
        .bind(difficulty.to_value() as i16)
        .bind(next_review_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(card)
    }
}
