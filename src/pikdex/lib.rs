//! # Pikdex Architecture
//!
//! Pikdex tracks a personal collection of Pikmin specimens: each entry records a
//! color, the decor category it was found at, and how far it has grown. It is a
//! UI-agnostic library with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (selector strings → EntrySelector)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user intent, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection (collection.rs) + View / Export (pure functions)│
//! │  - Owns the entry list, mirrors every change to storage     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load/save the whole list under one key  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts and never
//! exits. Diagnostics go through the `log` facade; user-facing notices come back as
//! [`commands::CmdMessage`]s.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-command logic
//! - [`collection`]: In-memory list mirrored to storage
//! - [`store`]: Storage abstraction, codec and implementations
//! - [`view`]: Filtering and aggregate statistics
//! - [`export`]: Comma-separated export
//! - [`index`]: Display numbers and entry selectors
//! - [`model`]: Entry and its enumerations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod model;
pub mod store;
pub mod view;
