use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU8;

use log::{debug, warn};

use super::{SelectionState, Session, SessionPhase};
use crate::definitions::LanguageCode;
use crate::i18n::Language;
use crate::launcher::Launcher;
use crate::store::PreferenceStore;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session, restoring whatever the preference store remembers.
    ///
    /// # Arguments
    ///
    /// * `input` / `output` - The line source and the sink for everything printed.
    /// * `store` - Where language and username are persisted.
    /// * `launcher` - The platform launcher for files and URLs.
    /// * `working_dir` - The directory the `file` command lists.
    pub fn new(
        input: R,
        output: W,
        store: PreferenceStore,
        launcher: Box<dyn Launcher>,
        working_dir: PathBuf,
    ) -> Self {
        let preferences = store.load();
        let language = preferences.lang.unwrap_or(LanguageCode::En);
        let username = preferences
            .username
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_default();
        debug!(
            "Session starting in {} with {} launcher (language stored: {})",
            working_dir.display(),
            launcher.name(),
            preferences.lang.is_some()
        );

        let mut session = Self {
            input,
            output,
            store,
            preferences,
            language,
            username,
            launcher,
            selection: SelectionState::default(),
            working_dir,
            phase: SessionPhase::AwaitingLanguage,
            language_beacon: Arc::new(AtomicU8::new(language.index())),
        };
        session.phase = session.phase_after_language();
        session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn language(&self) -> LanguageCode {
        self.language
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// A handle the interrupt handler reads to say goodbye in the right language.
    pub fn language_beacon(&self) -> Arc<AtomicU8> {
        Arc::clone(&self.language_beacon)
    }

    pub(crate) fn messages(&self) -> &'static dyn Language {
        self.language.messages()
    }

    /// The phase that follows once a language is known (or still missing).
    pub(crate) fn phase_after_language(&self) -> SessionPhase {
        if self.preferences.lang.is_none() {
            SessionPhase::AwaitingLanguage
        } else if self.username.is_empty() {
            SessionPhase::AwaitingUsername
        } else {
            SessionPhase::Ready
        }
    }

    /// Reads one trimmed line. `None` means the input is exhausted.
    pub(crate) fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!("Treating unreadable input as end of input: {}", err);
                None
            }
        }
    }

    pub(crate) fn say(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `text` without a newline and flushes so it shows before input.
    pub(crate) fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }
}
