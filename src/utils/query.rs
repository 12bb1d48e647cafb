use crate::models::book::{
    VAR_AUTHOR, VAR_COUNTRY, VAR_GENRE, VAR_LANGUAGE, VAR_PAGES, VAR_RELEASE_DATE, VAR_TITLE,
};

pub const DEFAULT_LIMIT: u32 = 1000;

/// SELECT over `dbo:Book` projecting every variable extraction reads.
pub fn books_query(limit: u32) -> String {
    format!(
        r#"PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX dbo: <http://dbpedia.org/ontology/>
PREFIX dbp: <http://dbpedia.org/property/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT DISTINCT ?{title} ?{author} ?{country} ?{pages} ?{genre} ?{release} ?{language}
WHERE {{
    ?s rdf:type dbo:Book ;
       rdfs:label ?{title} ;
       dbo:author ?{author} ;
       dbp:country ?{country} ;
       dbo:numberOfPages ?{pages} ;
       dbo:literaryGenre ?{genre} ;
       dbp:releaseDate ?{release} ;
       dbp:language ?{language} .
}} LIMIT {limit}
"#,
        title = VAR_TITLE,
        author = VAR_AUTHOR,
        country = VAR_COUNTRY,
        pages = VAR_PAGES,
        genre = VAR_GENRE,
        release = VAR_RELEASE_DATE,
        language = VAR_LANGUAGE,
        limit = limit,
    )
}
