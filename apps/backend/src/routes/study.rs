//! Study endpoints

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;
use recall_core::{Difficulty, Flashcard, SessionError, StudySession};

/// GET /api/decks/:deck_id/study/queue
///
/// Builds the due-queue for the deck at server time. An empty queue is a
/// normal outcome and reports state "complete".
pub async fn queue(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<StudyQueueResponse>> {
    let deck = state
        .db
        .get_deck(deck_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;

    let cards: Vec<Flashcard> = state
        .db
        .get_flashcards(deck.id)
        .await?
        .iter()
        .map(|c| c.to_core_card())
        .collect();

    let session = StudySession::start(&cards, Utc::now());

    Ok(Json(StudyQueueResponse {
        state: session.state().as_str().to_string(),
        cards: session
            .queue()
            .iter()
            .cloned()
            .map(FlashcardResponse::from)
            .collect(),
    }))
}

/// POST /api/decks/:deck_id/study/grade
///
/// Computes the card's next scheduling state server-side and persists
/// difficulty and next review date together. The client only supplies the
/// 0-2 difficulty rating.
pub async fn grade(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(deck_id): Path<Uuid>,
    Json(payload): Json<GradeRequest>,
) -> Result<Json<GradeResponse>> {
    let deck = state
        .db
        .get_deck(deck_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;

    let card = state
        .db
        .get_flashcard(payload.card_id, deck.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Flashcard not found".to_string()))?;

    let difficulty = Difficulty::from_value(payload.difficulty)
        .ok_or(SessionError::InvalidDifficulty(payload.difficulty))?;

    let graded = recall_core::grade(&card.to_core_card(), difficulty, Utc::now());

    let updated = state
        .db
        .update_review_state(graded.id, graded.difficulty, graded.next_review_date)
        .await?;

    tracing::debug!(
        "Graded card {} in deck {}: difficulty={}, next review {}",
        updated.id,
        deck.id,
        updated.difficulty,
        updated.next_review_date
    );

    Ok(Json(GradeResponse {
        card: updated.to_api_card(),
    }))
}
