//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Generate a unique email so parallel tests never collide.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::new_v4())
}

/// Credentials body for register/login requests.
pub fn credentials(email: &str, password: &str) -> serde_json::Value {
    json!({ "email": email, "password": password })
}

/// Create-deck request body.
pub fn create_deck_request(name: &str) -> serde_json::Value {
    json!({ "name": name })
}

/// Create-flashcard request body.
pub fn create_flashcard_request(face: &str, info: &str) -> serde_json::Value {
    json!({ "face": face, "info": info })
}

/// Grade request body.
pub fn grade_request(card_id: Uuid, difficulty: i32) -> serde_json::Value {
    json!({ "card_id": card_id, "difficulty": difficulty })
}
