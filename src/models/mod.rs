//! Data models for the book review server

pub mod book;
pub mod external;
pub mod review;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookSummary, SearchField};
pub use external::{ExternalBook, ExternalSearchResult};
pub use review::{Review, ReviewInput};
pub use session::{Session, SessionClaims};
pub use user::{Role, User, UserInfo};
