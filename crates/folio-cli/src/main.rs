//! folio-cli: Command-line interface for browsing a folio catalog.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{paths, CatalogStore, Config, FilterCriteria, Selection};
use render::Format;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a book catalog from the command line", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Configuration file (defaults to $FOLIO_DIR/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file, overriding the configured one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List books matching a filter, page by page
    List {
        /// Case-insensitive title substring
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author id, or "any"
        #[arg(short, long, default_value = "any")]
        author: String,

        /// Genre id, or "any"
        #[arg(short, long, default_value = "any")]
        genre: String,

        /// Number of pages to render
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Output format (table, json, plain)
        #[arg(short, long, default_value = "table")]
        format: Format,
    },

    /// Show the detail view of one book
    Show {
        /// Book id
        id: String,

        /// Output format (table, json, plain)
        #[arg(short, long, default_value = "table")]
        format: Format,
    },

    /// List author filter options
    Authors,

    /// List genre filter options
    Genres,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        folio_core::logging::init_with_level("debug");
    } else {
        folio_core::logging::init();
    }

    if cli.version {
        println!(
            "{}",
            folio_core::build_info::BUILD_INFO.version_line("folio")
        );
        return Ok(());
    }

    let Some(command) = cli.command else {
        println!("folio v{}", env!("CARGO_PKG_VERSION"));
        println!("Use --help for usage information");
        return Ok(());
    };

    let store = open_store(cli.config, cli.data)?;

    match command {
        Commands::List {
            title,
            author,
            genre,
            page,
            format,
        } => {
            let criteria = FilterCriteria {
                title,
                author: Selection::parse(&author),
                genre: Selection::parse(&genre),
            };
            list(store, &criteria, page, format)?;
        }
        Commands::Show { id, format } => show(&store, &id, format)?,
        Commands::Authors => {
            print!("{}", render::options("All Authors", &store.catalog().authors));
        }
        Commands::Genres => {
            print!("{}", render::options("All Genres", &store.catalog().genres));
        }
    }

    Ok(())
}

fn open_store(config: Option<PathBuf>, data: Option<PathBuf>) -> Result<CatalogStore> {
    let config_path = config.clone().unwrap_or_else(paths::config_path);
    let mut config = Config::open(config.as_deref())
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if let Some(data) = data {
        config.data_path = Some(data);
    }

    let catalog = config.load_catalog()?;
    info!(books = catalog.books.len(), "catalog ready");
    Ok(CatalogStore::new(catalog, config.page_size))
}

fn list(
    mut store: CatalogStore,
    criteria: &FilterCriteria,
    pages: usize,
    format: Format,
) -> Result<()> {
    store.apply_filter(criteria);

    let mut shown: Vec<folio_core::Book> = store.first_page().into_iter().cloned().collect();
    for _ in 1..pages.max(1) {
        if store.remaining() == 0 {
            break;
        }
        shown.extend(store.next_page().into_iter().cloned());
        store.advance();
    }
    debug!(shown = shown.len(), remaining = store.remaining(), "rendered pages");

    let page = render::ListPage {
        matches: store.match_count(),
        page: store.page(),
        remaining: store.remaining(),
        books: shown
            .iter()
            .map(|book| render::BookRow::from_book(book, store.catalog()))
            .collect(),
    };
    print!("{}", render::list(&page, format)?);
    Ok(())
}

fn show(store: &CatalogStore, id: &str, format: Format) -> Result<()> {
    let book = store
        .find(id)
        .ok_or_else(|| folio_core::Error::BookNotFound(id.to_string()))?;
    let detail = render::Detail::from_book(book, store.catalog());
    print!("{}", render::detail(&detail, format)?);
    Ok(())
}
