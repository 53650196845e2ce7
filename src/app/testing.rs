//! Scripted sessions for the `app` tests.

use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use super::{Session, SessionPhase};
use crate::definitions::LanguageCode;
use crate::launcher::{LaunchError, Launcher, Spawner};
use crate::store::{PreferenceStore, UserPreferences};

#[derive(Debug, Default, Clone)]
pub(crate) struct Calls {
    pub browsers: Vec<Option<String>>,
    pub urls: Vec<String>,
    pub paths: Vec<PathBuf>,
}

struct RecordingLauncher {
    calls: Rc<RefCell<Calls>>,
    fail_browser: bool,
    fail_urls: bool,
    fail_paths: bool,
    spawner: Spawner,
}

fn refused(program: &str) -> LaunchError {
    LaunchError::Spawn {
        program: program.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "refused"),
    }
}

impl Launcher for RecordingLauncher {
    fn name(&self) -> &str {
        "recording"
    }

    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        self.calls.borrow_mut().paths.push(path.to_path_buf());
        if self.fail_paths { Err(refused("open")) } else { Ok(()) }
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        self.calls.borrow_mut().urls.push(url.to_string());
        if self.fail_urls { Err(refused("open")) } else { Ok(()) }
    }

    fn browser_candidates(&self) -> &[PathBuf] {
        &[]
    }

    fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    fn open_browser(&self, url: Option<&str>) -> Result<(), LaunchError> {
        self.calls.borrow_mut().browsers.push(url.map(String::from));
        if self.fail_browser { Err(LaunchError::BrowserUnavailable) } else { Ok(()) }
    }
}

pub(crate) struct Harness {
    store_dir: TempDir,
    work_dir: PathBuf,
    pub fail_browser: bool,
    pub fail_urls: bool,
    pub fail_paths: bool,
}

pub(crate) struct Run {
    pub output: String,
    pub calls: Calls,
    pub phase: SessionPhase,
    pub language: LanguageCode,
    pub username: String,
    pub harness: Harness,
}

impl Harness {
    /// No preference file yet.
    pub fn fresh(work_dir: &Path) -> Self {
        Self {
            store_dir: TempDir::new().expect("temp dir"),
            work_dir: work_dir.to_path_buf(),
            fail_browser: false,
            fail_urls: false,
            fail_paths: false,
        }
    }

    /// Language and username already stored, so the session starts `Ready`.
    pub fn ready(lang: LanguageCode, username: &str, work_dir: &Path) -> Self {
        let harness = Self::fresh(work_dir);
        harness.store().save(&UserPreferences {
            lang: Some(lang),
            username: Some(username.to_string()),
            ..UserPreferences::default()
        });
        harness
    }

    pub fn store(&self) -> PreferenceStore {
        PreferenceStore::new(self.store_dir.path().join("prefs.json"))
    }

    /// Feeds `script` as the whole of stdin and runs until the session ends.
    pub fn run(self, script: &str) -> Run {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let launcher = RecordingLauncher {
            calls: Rc::clone(&calls),
            fail_browser: self.fail_browser,
            fail_urls: self.fail_urls,
            fail_paths: self.fail_paths,
            spawner: Spawner::default(),
        };
        let mut session = Session::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            self.store(),
            Box::new(launcher),
            self.work_dir.clone(),
        );
        session.run().expect("session run");

        let output = String::from_utf8(session.output.clone()).expect("utf-8 output");
        let calls = calls.borrow().clone();
        Run {
            output,
            calls,
            phase: session.phase(),
            language: session.language(),
            username: session.username().to_string(),
            harness: self,
        }
    }
}

/// Raw contents of the harness's preference file, empty if it does not exist.
pub(crate) fn read_prefs(harness: &Harness) -> String {
    fs::read_to_string(harness.store().path()).unwrap_or_default()
}
