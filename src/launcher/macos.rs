use std::path::{Path, PathBuf};

use super::{LaunchError, Launcher, Spawner};

const EDGE_PATH: &str = "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge";

pub struct MacLauncher {
    candidates: Vec<PathBuf>,
    spawner: Spawner,
}

impl MacLauncher {
    pub fn new(candidates: Option<Vec<PathBuf>>) -> Self {
        Self {
            candidates: candidates.unwrap_or_else(|| vec![PathBuf::from(EDGE_PATH)]),
            spawner: Spawner::default(),
        }
    }
}

impl Launcher for MacLauncher {
    fn name(&self) -> &str {
        "macos"
    }

    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        self.spawner.spawn("open", &[path])
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        self.spawner.spawn("open", &[url])
    }

    fn browser_candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    fn spawner(&self) -> &Spawner {
        &self.spawner
    }
}
