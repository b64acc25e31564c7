//! Shared data model layer (types/constants only).
//!
//! ## Files
//! - `emotion.rs` — the closed `Emotion` vocabulary with labels and art.
//! - `models.rs` — listing entries, config file schema, install report, JSON envelope.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or stdio side effects.
//!
//! ## Compatibility note
//! `EmotionEntry` and `InstallReport` are the `--json` output schema.

pub mod emotion;
pub mod models;
