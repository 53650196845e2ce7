use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::{LaunchError, Launcher, Spawner};

const EDGE_PATHS: [&str; 2] = [
    r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe",
    r"C:\Program Files\Microsoft\Edge\Application\msedge.exe",
];

/// Hands targets to the shell's default handler without going through
/// `cmd.exe`, whose parser would treat `&`, `|`, `^` or `%` in a file name
/// as syntax.
const DEFAULT_OPENER: &str = "explorer.exe";

pub struct WindowsLauncher {
    candidates: Vec<PathBuf>,
    spawner: Spawner,
}

impl WindowsLauncher {
    pub fn new(candidates: Option<Vec<PathBuf>>) -> Self {
        let candidates =
            candidates.unwrap_or_else(|| EDGE_PATHS.iter().map(PathBuf::from).collect());
        Self {
            candidates,
            spawner: Spawner::default(),
        }
    }

    fn start(&self, target: &OsStr) -> Result<(), LaunchError> {
        let (program, args) = default_open_command(target);
        self.spawner.spawn(program, args.as_slice())
    }
}

/// Program and arguments that open `target` with its associated handler.
/// The target is always passed through as one untouched operand.
pub(crate) fn default_open_command(target: &OsStr) -> (&'static str, Vec<OsString>) {
    (DEFAULT_OPENER, vec![target.to_os_string()])
}

impl Launcher for WindowsLauncher {
    fn name(&self) -> &str {
        "windows"
    }

    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        self.start(path.as_os_str())
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        self.start(OsStr::new(url))
    }

    fn browser_candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    fn spawner(&self) -> &Spawner {
        &self.spawner
    }
}
