//! # Publist Architecture
//!
//! Publist is a **UI-agnostic publication-list engine**. This is not a page
//! generator that happens to have some library code—it's a library that happens
//! to have a CLI client.
//!
//! The list it manages is the "Publications" section of a personal academic
//! site: each entry carries a thumbnail, a linked title, an author line, a
//! venue, a short description, and tag lists for three filter categories
//! (authorship, area, venue). Readers narrow the list with checkboxes; the
//! engine recomputes the visible set and rebuilds the output in full on every
//! change.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - `Session`: one loaded dataset + one checkbox panel       │
//! │  - Routes panel events (toggle/reset) to the panel,         │
//! │    queries to the command layer                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, filter.rs, render/)          │
//! │  - Pure functions over `&[Publication]` + `Selection`       │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (source.rs, model.rs)                           │
//! │  - Loads `publications.json`, tolerant of sparse records    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Filtering Is Pure
//!
//! Visibility is a function of two values: the publication list and the
//! selected labels per category (`filter::Selection`). The checkbox panel
//! (`panel::FilterPanel`) is one way to produce a `Selection`; CLI flags are
//! another. Nothing in the evaluator knows which one it got.
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! This means the same core can back the static HTML snapshot, the terminal
//! list, and the interactive session without branching.
//!
//! ## Testing Strategy
//!
//! 1. **Filter + panel** (`filter.rs`, `panel.rs`): thorough unit tests of
//!    visibility and the at-least-one rule. This is where the lion's share of
//!    testing lives.
//! 2. **Commands** (`commands/*.rs`): unit tests over in-memory datasets.
//! 3. **CLI** (`main.rs` + `tests/`): end-to-end runs against a temp data
//!    file, asserting on emitted HTML and exit codes.
//!
//! ## Module Overview
//!
//! - [`api`]: The `Session` facade—entry point for interactive use
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Selection type and the visibility evaluator
//! - [`panel`]: Checkbox groups with the at-least-one rule
//! - [`render`]: HTML and terminal renderers
//! - [`model`]: Core data types (`Publication`, `Author`, `Tags`)
//! - [`category`]: The closed set of filter categories
//! - [`source`]: Data file loading
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, printing, and the interactive loop for the
//!   binary (not part of the lib API)

pub mod api;
pub mod category;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod panel;
pub mod render;
pub mod source;
