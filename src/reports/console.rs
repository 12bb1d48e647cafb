//! Console lines for each catalog operation. Every line names the check,
//! the title(s) involved and the outcome; missing titles get their own line.

use crate::models::book::BookRecord;
use crate::models::error::{CatalogError, PairNotFound};
use crate::services::catalog::{Catalog, LONG_BOOK_PAGES, OLD_BOOK_BEFORE_YEAR};

pub fn catalog_summary(catalog: &Catalog) -> String {
    match catalog.fetched_at() {
        Some(at) => format!(
            "Catalog: {} books (fetched {})",
            catalog.len(),
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None if catalog.is_empty() => "Catalog: no data loaded".to_string(),
        None => format!("Catalog: {} books", catalog.len()),
    }
}

pub fn long_book(catalog: &Catalog, title: &str) -> String {
    match catalog.find(title) {
        Ok(book) if catalog.is_long_book(title) => format!(
            "Book: {} | Status: is long ({} pages)",
            title, book.page_count
        ),
        Ok(book) => format!(
            "Book: {} | Status: not long ({} pages, limit {})",
            title, book.page_count, LONG_BOOK_PAGES
        ),
        Err(e) => not_found_line("Book", &e),
    }
}

pub fn release_year(catalog: &Catalog, title: &str) -> String {
    match catalog.release_year(title) {
        Some(year) => format!("Book: {} | Released in: {}", title, year),
        None => format!("Book: \"{}\" not found.", title),
    }
}

pub fn old_book(catalog: &Catalog, title: &str) -> String {
    match catalog.find(title) {
        Ok(book) if catalog.is_old_book(title) => format!(
            "Book: {} | Status: is an old book ({})",
            title,
            book.release_year()
        ),
        Ok(book) => format!(
            "Book: {} | Status: not older than {} ({})",
            title,
            OLD_BOOK_BEFORE_YEAR,
            book.release_year()
        ),
        Err(e) => not_found_line("Book", &e),
    }
}

pub fn title_list(label: &str, books: &[&BookRecord]) -> String {
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    format!("{}: {:?}", label, titles)
}

pub fn same_language(catalog: &Catalog, first: &str, second: &str) -> Vec<String> {
    pair_lines(
        first,
        second,
        catalog.same_language(first, second),
        "have the same language",
        "have different languages",
    )
}

pub fn same_release_year(catalog: &Catalog, first: &str, second: &str) -> Vec<String> {
    pair_lines(
        first,
        second,
        catalog.same_release_year(first, second),
        "were released in the same year",
        "were released in different years",
    )
}

fn pair_lines(
    first: &str,
    second: &str,
    outcome: Result<bool, PairNotFound>,
    when_equal: &str,
    when_different: &str,
) -> Vec<String> {
    match outcome {
        Ok(equal) => vec![format!(
            "Book 1: {} | Book 2: {} | Status: {}",
            first,
            second,
            if equal { when_equal } else { when_different }
        )],
        Err(missing) => [("Book 1", &missing.first), ("Book 2", &missing.second)]
            .into_iter()
            .filter_map(|(label, err)| err.as_ref().map(|e| not_found_line(label, e)))
            .collect(),
    }
}

fn not_found_line(label: &str, err: &CatalogError) -> String {
    match err {
        CatalogError::NotFound(title) => format!("{}: \"{}\" not found.", label, title),
        other => format!("{}: {}", label, other),
    }
}
