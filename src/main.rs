use book_catalog::config::CatalogConfig;
use book_catalog::reports::console;
use book_catalog::utils::query::books_query;
use book_catalog::{load_catalog, Catalog, SparqlClient};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const STEPHEN_KING: &str = "http://dbpedia.org/resource/Stephen_King";
const FANTASY_FICTION: &str = "http://dbpedia.org/resource/Fantasy_fiction";

async fn fetch_catalog(config: &CatalogConfig) -> Catalog {
    let client = match SparqlClient::new(&config.endpoint) {
        Ok(client) => client,
        Err(e) => {
            error!("Cannot use endpoint: {}", e);
            println!("Error: {}", e);
            return Catalog::empty();
        }
    };

    match load_catalog(&client, &books_query(config.limit)).await {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("Error: {}", e);
            Catalog::empty()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("book_catalog=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CatalogConfig::from_env();
    info!("Book catalog starting against {}", config.endpoint);

    let catalog = fetch_catalog(&config).await;

    println!("Example queries:\n");
    println!("{}", console::catalog_summary(&catalog));

    println!("\nChecking whether 'Before Mars (novel)' is long:");
    println!("{}", console::long_book(&catalog, "Before Mars (novel)"));

    println!("\nChecking whether 'Beezus and Ramona' is old:");
    println!("{}", console::old_book(&catalog, "Beezus and Ramona"));

    println!("\nRelease year of 'Beezus and Ramona':");
    println!("{}", console::release_year(&catalog, "Beezus and Ramona"));

    println!("\nListing books by Stephen King:");
    let by_author = catalog.books_by_author(STEPHEN_KING);
    println!("{}", console::title_list("Books by Stephen King", &by_author));

    println!("\nListing books from the United States:");
    let by_country = catalog.books_by_country("United States");
    println!("{}", console::title_list("Books from the United States", &by_country));

    println!("\nListing books in the genre 'Fantasy fiction':");
    let fantasy = catalog.books_by_genre(FANTASY_FICTION);
    println!("{}", console::title_list("Fantasy books", &fantasy));

    println!("\nChecking whether 'Moo (novel)' and 'Monsters (collection)' share a language:");
    for line in console::same_language(&catalog, "Moo (novel)", "Monsters (collection)") {
        println!("{}", line);
    }

    println!("\nChecking whether 'Hlava XXII' and 'Moment 22' were released in the same year:");
    for line in console::same_release_year(&catalog, "Hlava XXII", "Moment 22") {
        println!("{}", line);
    }

    println!("\nListing books with more than 400 pages:");
    let large = catalog.books_with_more_pages_than(400);
    println!("{}", console::title_list("Books over 400 pages", &large));
}
