//! Catalog loaded at startup

use rust_decimal::Decimal;

use crate::models::Book;

/// The fixed catalog every process starts from
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "9780061120084", "To Kill a Mockingbird", "Harper Lee", 1960, Decimal::new(1299, 2)),
        Book::new(2, "9780743273565", "The Great Gatsby", "F. Scott Fitzgerald", 1925, Decimal::new(1099, 2)),
        Book::new(3, "9780141439600", "Pride and Prejudice", "Jane Austen", 1813, Decimal::new(999, 2)),
        Book::new(
            4,
            "9780439139601",
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            1997,
            Decimal::new(1599, 2),
        ),
        Book::new(5, "9780544003415", "The Hobbit", "J.R.R. Tolkien", 1937, Decimal::new(1499, 2)),
        Book::new(6, "9781982127794", "The Silent Patient", "Alex Michaelides", 2019, Decimal::new(1699, 2)),
    ]
}
