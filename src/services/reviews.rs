//! Review mutation service

use chrono::Utc;
use serde_json::Number;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{review::UNKNOWN_REVIEWER, Review, ReviewInput},
    repository::{books::ReviewWrite, Repository},
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add the user's review of a book, or replace the one they already wrote
    pub async fn upsert(&self, isbn: &str, user_id: i32, input: ReviewInput) -> AppResult<ReviewWrite> {
        // An unknown book wins over an incomplete body
        self.repository.books.ensure_exists(isbn).await?;
        input.validate()?;

        let username = self
            .repository
            .users
            .get_by_id(user_id)
            .await
            .map(|u| u.username)
            .unwrap_or_else(|| UNKNOWN_REVIEWER.to_string());

        let review = Review {
            user_id,
            username,
            rating: input.rating.unwrap_or_else(|| Number::from(0)),
            comment: input.comment.unwrap_or_default(),
            date: Utc::now(),
        };

        let write = self.repository.books.upsert_review(isbn, review).await?;
        tracing::debug!("Review by user id={} on {}: {:?}", user_id, isbn, write);
        Ok(write)
    }

    /// Delete the user's review of a book
    pub async fn delete(&self, isbn: &str, user_id: i32) -> AppResult<()> {
        self.repository.books.delete_review(isbn, user_id).await?;
        tracing::debug!("Deleted review by user id={} on {}", user_id, isbn);
        Ok(())
    }
}
