//! # Connect Four
//!
//! Connect Four in the terminal: an immutable board model, a precomputed
//! winning-line table, a depth-limited minimax engine with random
//! tie-breaking that searches on a background thread, and a branchable
//! undo/redo history. The UI is a thin Ratatui shim over the core.
//!
//! ## Modules
//!
//! - [`game`] — Line table, board snapshots, pure move transition, scorer
//! - [`search`] — Minimax engine and the background move task
//! - [`history`] — Undo/redo stack with branch-discard semantics
//! - [`ui`] — Terminal UI: controller loop and board view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod search;
pub mod ui;
