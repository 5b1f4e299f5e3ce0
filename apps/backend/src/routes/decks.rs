//! Deck and flashcard endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// GET /api/decks
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<DeckListResponse>> {
    let mut decks = Vec::new();
    for deck in state.db.get_decks(auth.user_id).await? {
        let cards = state.db.get_flashcards(deck.id).await?;
        decks.push(to_deck_response(deck, cards));
    }

    Ok(Json(DeckListResponse { decks }))
}

/// POST /api/decks
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<CreateDeckRequest>,
) -> Result<(StatusCode, Json<DeckResponse>)> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("deck name must not be empty".to_string()));
    }

    let deck = state.db.create_deck(auth.user_id, name).await?;

    tracing::info!("Created deck {} for user {}", deck.id, auth.user_id);

    Ok((StatusCode::CREATED, Json(to_deck_response(deck, Vec::new()))))
}

/// GET /api/decks/:deck_id
pub async fn get(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<DeckResponse>> {
    let deck = state
        .db
        .get_deck(deck_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;
    let cards = state.db.get_flashcards(deck.id).await?;

    Ok(Json(to_deck_response(deck, cards)))
}

/// DELETE /api/decks/:deck_id
/// Destroys the deck and all of its flashcards
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(deck_id): Path<Uuid>,
) -> Result<StatusCode> {
    let deleted = state.db.delete_deck(deck_id, auth.user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Deck not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/decks/:deck_id/flashcards
/// New cards are created immediately due, with the default difficulty
pub async fn add_flashcard(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(deck_id): Path<Uuid>,
    Json(payload): Json<CreateFlashcardRequest>,
) -> Result<(StatusCode, Json<FlashcardResponse>)> {
    let deck = state
        .db
        .get_deck(deck_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Deck not found".to_string()))?;

    if payload.face.trim().is_empty() {
        return Err(ApiError::BadRequest("card face must not be empty".to_string()));
    }

    let card = state
        .db
        .insert_flashcard(deck.id, &payload.face, &payload.info, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(card.to_api_card())))
}

fn to_deck_response(deck: DbDeck, cards: Vec<DbFlashcard>) -> DeckResponse {
    DeckResponse {
        id: deck.id,
        name: deck.name,
        flashcards: cards.iter().map(|c| c.to_api_card()).collect(),
        created_at: deck.created_at,
    }
}
