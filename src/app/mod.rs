//! `app` is the interactive core of Lumb.
//!
//! It owns the [`Session`]: the onboarding prompts, the command loop, the file
//! selection sub-loop and the state they share. Each submodule adds one
//! `impl Session` block for its area.

// --- Submodules ---

/// `actions`: the main loop and command dispatch.
mod actions;
/// `files`: the `file` command, its listing and the double-click sub-loop.
mod files;
/// `init`: construction of a `Session` and its line I/O helpers.
mod init;
/// `preferences`: language and username prompts and their persistence.
mod preferences;
/// `state`: the `Session` struct and the selection state machine.
mod state;
#[cfg(test)]
mod testing;

// --- Re-exports ---
pub use files::{FileEntry, list_files};
pub use state::{Selection, SelectionState, Session, SessionPhase};
