//! # CLI Behavior
//!
//! This is **one possible UI client** for pikdex, not the application itself.
//! The CLI is the only place that knows about terminal I/O, prompts, exit codes and
//! output formatting. For the overall architecture, see the crate-level docs of the
//! `pikdex` library.
//!
//! ### Naked Execution (`pikdex`)
//!
//! Running `pikdex` with no arguments is `pikdex list`.
//!
//! ### Labels
//!
//! Colors, decor categories and stages are typed case-insensitively, with `-` or
//! `_` allowed in place of spaces: `pikdex add red sweet-shop`. `pikdex options`
//! prints every accepted label.
//!
//! ### Deleting
//!
//! `pikdex delete` asks once per invocation unless `--yes` is passed or
//! `confirm-delete` is turned off with `pikdex config confirm-delete false`.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, context setup, logging and per-command handlers
//! - `render`: Output formatting (entry table, stats, colored messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
