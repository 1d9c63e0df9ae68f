//! Output formatting for the `folio` subcommands.

use anyhow::Result;
use clap::ValueEnum;
use folio_core::catalog::NameIndex;
use folio_core::filter::ANY;
use folio_core::{Book, Catalog};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
    Plain,
}

/// One row of a `folio list` page.
#[derive(Debug, Serialize)]
pub struct BookRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
}

impl BookRow {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: catalog.author_name(&book.author).to_string(),
            year: book.published_year(),
        }
    }
}

/// The rendered pages of a filtered listing.
#[derive(Debug, Serialize)]
pub struct ListPage {
    pub matches: usize,
    pub page: usize,
    pub remaining: usize,
    pub books: Vec<BookRow>,
}

/// Everything the detail view shows for one book.
#[derive(Debug, Serialize)]
pub struct Detail {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub genres: Vec<String>,
    pub description: String,
}

impl Detail {
    pub fn from_book(book: &Book, catalog: &Catalog) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            subtitle: catalog.subtitle(book),
            image: book.image.clone(),
            genres: book
                .genres
                .iter()
                .map(|id| catalog.genre_name(id).to_string())
                .collect(),
            description: book.description.clone(),
        }
    }
}

pub fn list(page: &ListPage, format: Format) -> Result<String> {
    let mut out = String::new();
    match format {
        Format::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(page)?)?;
        }
        Format::Plain => {
            for book in &page.books {
                writeln!(out, "{}\t{}\t{}", book.id, book.title, book.author)?;
            }
        }
        Format::Table => {
            if page.books.is_empty() {
                writeln!(out, "{}", folio_core::NO_RESULTS_MESSAGE.yellow())?;
                return Ok(out);
            }

            writeln!(
                out,
                "{}",
                format!("{:<24} {:<40} {:<24} YEAR", "ID", "TITLE", "AUTHOR").bold()
            )?;
            for book in &page.books {
                let year = book.year.map(|y| y.to_string()).unwrap_or_default();
                writeln!(
                    out,
                    "{:<24} {:<40} {:<24} {}",
                    book.id.dimmed(),
                    book.title,
                    book.author.cyan(),
                    year
                )?;
            }
            writeln!(
                out,
                "\n{} of {} shown, {} remaining",
                page.books.len(),
                page.matches,
                page.remaining.bright_blue()
            )?;
        }
    }
    Ok(out)
}

pub fn detail(detail: &Detail, format: Format) -> Result<String> {
    let mut out = String::new();
    match format {
        Format::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(detail)?)?;
        }
        Format::Plain => {
            writeln!(out, "{}", detail.title)?;
            writeln!(out, "{}", detail.subtitle)?;
            writeln!(out, "{}", detail.image)?;
            writeln!(out)?;
            writeln!(out, "{}", detail.description)?;
        }
        Format::Table => {
            writeln!(out, "{}", detail.title.bold().bright_white())?;
            writeln!(out, "{}", detail.subtitle.cyan())?;
            writeln!(out, "{} {}", "cover:".dimmed(), detail.image)?;
            if !detail.genres.is_empty() {
                writeln!(out, "{} {}", "genres:".dimmed(), detail.genres.join(", "))?;
            }
            writeln!(out)?;
            writeln!(out, "{}", detail.description)?;
        }
    }
    Ok(out)
}

/// Dropdown options for a name index: the wildcard first, then each entry.
pub fn options(default_label: &str, index: &NameIndex) -> String {
    let mut out = format!("{ANY}\t{default_label}\n");
    for (id, name) in index.iter() {
        out.push_str(&format!("{id}\t{name}\n"));
    }
    out
}
