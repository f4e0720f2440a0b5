//! Books repository: the in-memory catalog and the reviews it owns

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookSummary, Review, SearchField},
};

/// Outcome of a review upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewWrite {
    Created,
    Replaced,
}

#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

fn book_not_found() -> AppError {
    AppError::NotFound("Book not found".to_string())
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books without their reviews, in catalog order
    pub async fn list_summaries(&self) -> Vec<BookSummary> {
        self.books.read().await.iter().map(BookSummary::from).collect()
    }

    /// All books with their reviews, in catalog order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Get book by exact ISBN
    pub async fn get_by_isbn(&self, isbn: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or_else(book_not_found)
    }

    /// NotFound unless a book with this ISBN exists
    pub async fn ensure_exists(&self, isbn: &str) -> AppResult<()> {
        if self.books.read().await.iter().any(|b| b.isbn == isbn) {
            Ok(())
        } else {
            Err(book_not_found())
        }
    }

    /// Case-insensitive substring search on author or title
    pub async fn search(&self, field: SearchField, term: &str) -> Vec<Book> {
        let needle = term.to_lowercase();
        self.books
            .read()
            .await
            .iter()
            .filter(|b| b.matches(field, &needle))
            .cloned()
            .collect()
    }

    /// Reviews of a book in the order they were first written
    pub async fn reviews(&self, isbn: &str) -> AppResult<Vec<Review>> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.isbn == isbn)
            .map(|b| b.reviews.clone())
            .ok_or_else(book_not_found)
    }

    /// Replace the author's existing review in place, or append a new one
    pub async fn upsert_review(&self, isbn: &str, review: Review) -> AppResult<ReviewWrite> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(book_not_found)?;

        match book.reviews.iter_mut().find(|r| r.user_id == review.user_id) {
            Some(existing) => {
                *existing = review;
                Ok(ReviewWrite::Replaced)
            }
            None => {
                book.reviews.push(review);
                Ok(ReviewWrite::Created)
            }
        }
    }

    /// Remove the user's review of a book
    pub async fn delete_review(&self, isbn: &str, user_id: i32) -> AppResult<()> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or_else(book_not_found)?;

        let before = book.reviews.len();
        book.reviews.retain(|r| r.user_id != user_id);

        if book.reviews.len() == before {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed::seed_books;
    use chrono::Utc;

    const MOCKINGBIRD: &str = "9780061120084";

    fn review(user_id: i32, rating: i32, comment: &str) -> Review {
        Review {
            user_id,
            username: format!("user{}", user_id),
            rating: rating.into(),
            comment: comment.to_string(),
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_by_isbn_is_exact() {
        let repo = BooksRepository::new(seed_books());
        assert_eq!(repo.get_by_isbn(MOCKINGBIRD).await.unwrap().title, "To Kill a Mockingbird");
        assert!(matches!(repo.get_by_isbn("978006112008").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn search_returns_empty_not_error() {
        let repo = BooksRepository::new(seed_books());
        assert_eq!(repo.search(SearchField::Author, "AUSTEN").await.len(), 1);
        assert_eq!(repo.search(SearchField::Title, "the").await.len(), 4);
        assert!(repo.search(SearchField::Title, "zzz").await.is_empty());
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let repo = BooksRepository::new(seed_books());
        repo.upsert_review(MOCKINGBIRD, review(1, 3, "ok")).await.unwrap();
        repo.upsert_review(MOCKINGBIRD, review(2, 4, "good")).await.unwrap();

        let write = repo.upsert_review(MOCKINGBIRD, review(1, 5, "great")).await.unwrap();
        assert_eq!(write, ReviewWrite::Replaced);

        let reviews = repo.reviews(MOCKINGBIRD).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].user_id, 1);
        assert_eq!(reviews[0].rating.as_i64(), Some(5));
        assert_eq!(reviews[0].comment, "great");
        assert_eq!(reviews[1].user_id, 2);
    }

    #[tokio::test]
    async fn ensure_exists() {
        let repo = BooksRepository::new(seed_books());
        assert!(repo.ensure_exists(MOCKINGBIRD).await.is_ok());
        assert!(matches!(repo.ensure_exists("0000000000000").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn upsert_unknown_book() {
        let repo = BooksRepository::new(seed_books());
        let err = repo.upsert_review("nope", review(1, 1, "x")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_only_own_review() {
        let repo = BooksRepository::new(seed_books());
        repo.upsert_review(MOCKINGBIRD, review(1, 3, "ok")).await.unwrap();
        repo.upsert_review(MOCKINGBIRD, review(2, 4, "good")).await.unwrap();

        repo.delete_review(MOCKINGBIRD, 1).await.unwrap();

        let reviews = repo.reviews(MOCKINGBIRD).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].user_id, 2);

        let err = repo.delete_review(MOCKINGBIRD, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Review not found"));
    }

    #[tokio::test]
    async fn summaries_drop_reviews() {
        let repo = BooksRepository::new(seed_books());
        repo.upsert_review(MOCKINGBIRD, review(1, 3, "ok")).await.unwrap();
        let summaries = repo.list_summaries().await;
        assert_eq!(summaries.len(), 6);
        assert_eq!(summaries[0].isbn, MOCKINGBIRD);
        assert_eq!(repo.list().await[0].reviews.len(), 1);
    }
}
