//! folio-core: Catalog model, filtering, paging, configuration, and logging for folio.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pager;
pub mod paths;
pub mod store;
pub mod theme;

pub use catalog::{Book, Catalog, NameIndex};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterCriteria, Selection, NO_RESULTS_MESSAGE};
pub use store::CatalogStore;
pub use theme::{ColorTokens, ThemeName};
