use crate::models::book::{
    BookRecord, VAR_AUTHOR, VAR_COUNTRY, VAR_GENRE, VAR_LANGUAGE, VAR_PAGES, VAR_RELEASE_DATE,
    VAR_TITLE,
};
use crate::models::error::CatalogError;
use crate::models::sparql::{Binding, SparqlResponse};

/// Flattens every binding into a `BookRecord`, keeping server order.
pub fn extract_books(response: &SparqlResponse) -> Result<Vec<BookRecord>, CatalogError> {
    response
        .results
        .bindings
        .iter()
        .enumerate()
        .map(|(index, binding)| extract_book(index, binding))
        .collect()
}

fn extract_book(index: usize, binding: &Binding) -> Result<BookRecord, CatalogError> {
    // pages is the only variable allowed to be unbound
    let page_count = match binding.get(VAR_PAGES) {
        Some(pages) => parse_page_count(index, &pages.value)?,
        None => 0,
    };

    Ok(BookRecord {
        title: required(index, binding, VAR_TITLE)?,
        author: required(index, binding, VAR_AUTHOR)?,
        country: required(index, binding, VAR_COUNTRY)?,
        page_count,
        genre: required(index, binding, VAR_GENRE)?,
        release_date: required(index, binding, VAR_RELEASE_DATE)?,
        language: required(index, binding, VAR_LANGUAGE)?,
    })
}

fn required(index: usize, binding: &Binding, var: &str) -> Result<String, CatalogError> {
    binding
        .get(var)
        .map(|v| v.value.clone())
        .ok_or_else(|| CatalogError::MalformedRecord {
            index,
            reason: format!("missing variable '{}'", var),
        })
}

fn parse_page_count(index: usize, raw: &str) -> Result<u32, CatalogError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| CatalogError::MalformedRecord {
            index,
            reason: format!("page count '{}' is not a non-negative integer: {}", raw, e),
        })
}
