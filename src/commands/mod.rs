//! Command handler layer.
//!
//! ## Files
//! - `runtime.rs` — the default filter mode and `--list-emotions`.
//! - `setup.rs` — `--install-shell` and `--print-shell`.
//!
//! ## Principles
//! - Pick the mode here, delegate the work to `services/*`.
//! - stdout carries data only; diagnostics go through `tracing` to stderr.

pub mod runtime;
pub mod setup;

pub use runtime::handle_runtime_commands;
pub use setup::handle_setup_commands;
