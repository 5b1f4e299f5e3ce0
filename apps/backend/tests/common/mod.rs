//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test accounts and decks
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use uuid::Uuid;

use recall_backend::db::Database;
use recall_backend::{router, AppState};

/// Test context containing database connection and router.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Register a user through the API and return the session token.
    pub async fn register_user(server: &TestServer, email: &str, password: &str) -> String {
        let response = server
            .post("/api/auth/register")
            .json(&fixtures::credentials(email, password))
            .await;
        let body: serde_json::Value = response.json();
        body["token"]
            .as_str()
            .expect("register response has no token")
            .to_string()
    }

    /// Create a deck through the API and return its id.
    pub async fn create_deck(server: &TestServer, token: &str, name: &str) -> Uuid {
        let response = server
            .post("/api/decks")
            .add_header(
                axum::http::header::AUTHORIZATION,
                Self::auth_header_value(token),
            )
            .json(&fixtures::create_deck_request(name))
            .await;
        let body: serde_json::Value = response.json();
        body["id"]
            .as_str()
            .expect("deck response has no id")
            .parse()
            .expect("deck id is not a uuid")
    }

    /// Add a flashcard through the API and return its id.
    pub async fn add_flashcard(
        server: &TestServer,
        token: &str,
        deck_id: Uuid,
        face: &str,
        info: &str,
    ) -> Uuid {
        let response = server
            .post(&format!("/api/decks/{}/flashcards", deck_id))
            .add_header(
                axum::http::header::AUTHORIZATION,
                Self::auth_header_value(token),
            )
            .json(&fixtures::create_flashcard_request(face, info))
            .await;
        let body: serde_json::Value = response.json();
        body["id"]
            .as_str()
            .expect("flashcard response has no id")
            .parse()
            .expect("flashcard id is not a uuid")
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Clean up test data for a user.
    ///
    /// Sessions, decks and flashcards go with the user via cascade.
    pub async fn cleanup_user(&self, email: &str) {
        let _ = sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(self.db.pool())
            .await;
    }
}
