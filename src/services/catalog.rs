//! Read-only book catalog.
//!
//! Title lookups use first-match semantics: when the endpoint returns the
//! same label twice, only the earliest record is ever consulted. All filters
//! are exact, case-sensitive comparisons and keep the fetch order.

use crate::models::book::BookRecord;
use crate::models::error::{CatalogError, PairNotFound};
use crate::utils::date::parse_year;
use chrono::{DateTime, Utc};
use tracing::warn;

pub const LONG_BOOK_PAGES: u32 = 300;
pub const OLD_BOOK_BEFORE_YEAR: i32 = 1960;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
    fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self {
            books,
            fetched_at: None,
        }
    }

    pub fn fetched(books: Vec<BookRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            books,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn find(&self, title: &str) -> Result<&BookRecord, CatalogError> {
        self.books
            .iter()
            .find(|book| book.title == title)
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))
    }

    pub fn is_long_book(&self, title: &str) -> bool {
        self.find(title)
            .map(|book| book.page_count > LONG_BOOK_PAGES)
            .unwrap_or(false)
    }

    pub fn release_year(&self, title: &str) -> Option<&str> {
        self.find(title).ok().map(BookRecord::release_year)
    }

    pub fn is_old_book(&self, title: &str) -> bool {
        let Ok(book) = self.find(title) else {
            return false;
        };

        match parse_year(&book.release_date) {
            Some(year) => year < OLD_BOOK_BEFORE_YEAR,
            None => {
                warn!(
                    "Release date '{}' of '{}' has no numeric year",
                    book.release_date, title
                );
                false
            }
        }
    }

    pub fn books_by_author(&self, author: &str) -> Vec<&BookRecord> {
        self.filter(|book| book.author == author)
    }

    pub fn books_by_country(&self, country: &str) -> Vec<&BookRecord> {
        self.filter(|book| book.country == country)
    }

    pub fn books_by_genre(&self, genre: &str) -> Vec<&BookRecord> {
        self.filter(|book| book.genre == genre)
    }

    pub fn books_by_language(&self, language: &str) -> Vec<&BookRecord> {
        self.filter(|book| book.language == language)
    }

    pub fn books_with_more_pages_than(&self, pages: u32) -> Vec<&BookRecord> {
        self.filter(|book| book.page_count > pages)
    }

    /// Resolves both titles, keeping a `NotFound` for each side that is missing.
    pub fn find_pair(
        &self,
        first: &str,
        second: &str,
    ) -> Result<(&BookRecord, &BookRecord), PairNotFound> {
        match (self.find(first), self.find(second)) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (a, b) => Err(PairNotFound {
                first: a.err(),
                second: b.err(),
            }),
        }
    }

    pub fn same_language(&self, first: &str, second: &str) -> Result<bool, PairNotFound> {
        self.find_pair(first, second)
            .map(|(a, b)| a.language == b.language)
    }

    pub fn same_release_year(&self, first: &str, second: &str) -> Result<bool, PairNotFound> {
        self.find_pair(first, second)
            .map(|(a, b)| a.release_year() == b.release_year())
    }

    fn filter<P>(&self, predicate: P) -> Vec<&BookRecord>
    where
        P: Fn(&BookRecord) -> bool,
    {
        self.books.iter().filter(|book| predicate(book)).collect()
    }
}
