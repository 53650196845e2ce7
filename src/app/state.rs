use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU8;
use std::time::Instant;

use crate::definitions::{DOUBLE_CLICK_INTERVAL, LanguageCode};
use crate::launcher::Launcher;
use crate::store::{PreferenceStore, UserPreferences};

/// Where the session is in its onboarding-then-command lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingLanguage,
    AwaitingUsername,
    Ready,
    Finished,
}

/// Outcome of picking a file in the selection sub-loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First pick, or a pick that did not complete a double click.
    Marked,
    /// Same entry picked again inside the double-click window.
    Open,
}

/// Remembers the last pick so a repeat can be recognised as a double click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    last: Option<(usize, Instant)>,
}

impl SelectionState {
    /// Registers a pick of `index` made at `now`.
    ///
    /// Only the same index within [`DOUBLE_CLICK_INTERVAL`] (inclusive) opens;
    /// the state is then cleared so a third pick starts over.
    pub fn register(&mut self, index: usize, now: Instant) -> Selection {
        match self.last {
            Some((previous, at))
                if previous == index
                    && now.saturating_duration_since(at) <= DOUBLE_CLICK_INTERVAL =>
            {
                self.last = None;
                Selection::Open
            }
            _ => {
                self.last = Some((index, now));
                Selection::Marked
            }
        }
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.last.map(|(index, _)| index)
    }
}

/// One interactive run of the shell.
///
/// Generic over its input and output so the same loop drives a terminal or a
/// scripted test.
pub struct Session<R, W> {
    pub(crate) input: R,
    pub(crate) output: W,
    pub(crate) store: PreferenceStore,
    pub(crate) preferences: UserPreferences,
    pub(crate) language: LanguageCode,
    pub(crate) username: String,
    pub(crate) launcher: Box<dyn Launcher>,
    pub(crate) selection: SelectionState,
    pub(crate) working_dir: PathBuf,
    pub(crate) phase: SessionPhase,
    /// Current language, readable from the interrupt handler's thread.
    pub(crate) language_beacon: Arc<AtomicU8>,
}
