pub const VAR_TITLE: &str = "titulo";
pub const VAR_AUTHOR: &str = "autor";
pub const VAR_COUNTRY: &str = "pais";
pub const VAR_PAGES: &str = "paginas";
pub const VAR_GENRE: &str = "genero";
pub const VAR_RELEASE_DATE: &str = "dataLancamento";
pub const VAR_LANGUAGE: &str = "linguagem";

/// One flattened row of the book query.
///
/// `author` and `genre` hold resource URIs as returned by the endpoint,
/// `release_date` is `YYYY[-MM[-DD]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub country: String,
    pub page_count: u32,
    pub genre: String,
    pub release_date: String,
    pub language: String,
}

impl BookRecord {
    pub fn release_year(&self) -> &str {
        crate::utils::date::year_prefix(&self.release_date)
    }
}
