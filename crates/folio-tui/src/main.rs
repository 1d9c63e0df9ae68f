//! folio TUI - terminal catalog browser.

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::theme::ThemePreference;
use folio_core::{paths, CatalogStore, Config, ThemeName};
use folio_tui::{AppState, Wiring};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "folio-tui")]
#[command(about = "Browse a book catalog in the terminal", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Configuration file (defaults to $FOLIO_DIR/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON file, overriding the configured one
    #[arg(long)]
    data: Option<PathBuf>,

    /// Start with this theme instead of the configured preference
    #[arg(long)]
    theme: Option<ThemeName>,

    /// Books per page, overriding the configured value
    #[arg(long)]
    page_size: Option<usize>,

    /// Print version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{}",
            folio_core::build_info::BUILD_INFO.version_line("folio-tui")
        );
        return Ok(());
    }

    // Log to a file; the terminal belongs to the UI.
    folio_core::logging::init_to_file(&paths::log_path())
        .context("failed to open log file")?;

    let config_path = cli.config.clone().unwrap_or_else(paths::config_path);
    let mut config = Config::open(cli.config.as_deref())
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    config.validate()?;

    let catalog = config.load_catalog().context("failed to load catalog")?;
    let theme = match cli.theme {
        Some(theme) => theme,
        None => config.appearance.theme.resolve(),
    };
    info!(
        books = catalog.books.len(),
        page_size = config.page_size,
        theme = %theme,
        system = config.appearance.theme == ThemePreference::System,
        "starting folio-tui"
    );

    let mut app = AppState::bootstrap(CatalogStore::new(catalog, config.page_size), theme);
    let wiring = Wiring::standard();

    folio_tui::run(&mut app, &wiring)
}
