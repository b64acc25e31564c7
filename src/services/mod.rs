//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `tags.rs` — leading `[tag]` recognition and the vocabulary listing.
//! - `render.rs` — box/compact decorations.
//! - `filter.rs` — whole-buffer and line-streaming filters.
//! - `shell.rs` — the embedded integration script and its idempotent install.
//! - `settings.rs` — config file loading and flag/env/config precedence.
//! - `storage.rs` — HOME-scoped paths and atomic file replacement.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`shell.rs`, `storage.rs`).

pub mod filter;
pub mod output;
pub mod render;
pub mod settings;
pub mod shell;
pub mod storage;
pub mod tags;
