//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic catalog library** with an interactive CLI client
//! on top. The menu loop is one possible front end; everything it does goes
//! through the same structured API any other client would use.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args/menu/print, binary only)         │
//! │  - Parses flags, runs the menu loop, prompts, prints        │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - LibraryApi: thin facade owning the catalog               │
//! │  - One method per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operation logic over the catalog                    │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model/Storage Layer (model.rs, catalog.rs)                 │
//! │  - Book entity with guarded availability transitions        │
//! │  - Catalog: ordered in-memory collection, unique ids        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular types
//! (`CmdResult` with leveled messages), and never writes to stdout/stderr or
//! exits the process. Failures a user can cause — duplicate id, unknown id,
//! loaning a book that is already out — are not errors at all: they come back
//! as messages the presentation layer decides how to show.
//!
//! The catalog lives in memory for the lifetime of the process. There is no
//! persistence and no shared state; the menu loop owns the one catalog and
//! every operation receives it explicitly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Operation logic (add, circulation, list, find)
//! - [`catalog`]: The ordered in-memory collection
//! - [`model`]: Core data types (`Book`, `Transition`)
//! - [`error`]: Error type for the terminal I/O boundary

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
