//! Repository layer: in-memory collections, one lock per collection

pub mod books;
pub mod seed;
pub mod sessions;
pub mod users;

use crate::models::Book;

/// Main repository struct holding every collection
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
    pub sessions: sessions::SessionsRepository,
}

impl Repository {
    /// Create a repository loaded with the seed catalog
    pub fn new() -> Self {
        Self::with_books(seed::seed_books())
    }

    /// Create a repository over an arbitrary catalog
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
            users: users::UsersRepository::new(),
            sessions: sessions::SessionsRepository::new(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
