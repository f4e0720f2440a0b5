//! Catalog queries, including the deferred variants

use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookSummary, Review, SearchField},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    simulated_delay: Duration,
}

impl CatalogService {
    pub fn new(repository: Repository, simulated_delay: Duration) -> Self {
        Self {
            repository,
            simulated_delay,
        }
    }

    /// All books without reviews
    pub async fn list_books(&self) -> Vec<BookSummary> {
        self.repository.books.list_summaries().await
    }

    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn).await
    }

    /// Local case-insensitive substring search
    pub async fn search(&self, field: SearchField, term: &str) -> Vec<Book> {
        self.repository.books.search(field, term).await
    }

    pub async fn get_reviews(&self, isbn: &str) -> AppResult<Vec<Review>> {
        self.repository.books.reviews(isbn).await
    }

    /// Full catalog, delivered by a background task after the simulated delay
    pub async fn list_books_deferred(&self) -> AppResult<Vec<Book>> {
        let repository = self.repository.clone();
        let delay = self.simulated_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            repository.books.list().await
        })
        .await
        .map_err(|e| AppError::Internal(format!("Deferred catalog task failed: {}", e)))
    }

    /// Book lookup resolved after the simulated delay
    pub async fn get_book_deferred(&self, isbn: &str) -> AppResult<Book> {
        tokio::time::sleep(self.simulated_delay).await;
        self.get_book(isbn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn deferred_lookups_wait_for_the_delay() {
        let catalog = CatalogService::new(Repository::new(), Duration::from_millis(100));
        let start = tokio::time::Instant::now();

        let books = catalog.list_books_deferred().await.unwrap();
        assert_eq!(books.len(), 6);
        assert!(start.elapsed() >= Duration::from_millis(100));

        let book = catalog.get_book_deferred("9780544003415").await.unwrap();
        assert_eq!(book.title, "The Hobbit");
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_lookup_not_found() {
        let catalog = CatalogService::new(Repository::new(), Duration::from_millis(100));
        let err = catalog.get_book_deferred("0000000000000").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
