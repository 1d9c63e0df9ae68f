//! folio-tui: Terminal catalog browser for folio.

pub mod app;
pub mod state;
pub mod ui;
pub mod wiring;

pub use app::run;
pub use state::AppState;
pub use wiring::{Control, Payload, Wiring};
