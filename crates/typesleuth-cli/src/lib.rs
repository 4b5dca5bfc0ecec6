/// TypeSleuth CLI: command-line frontend.
///
/// This crate contains argument parsing and terminal output. Business logic
/// lives in `typesleuth-core`.
pub mod app;
pub mod args;

pub use app::run;
pub use args::{Args, OutputFormat};
