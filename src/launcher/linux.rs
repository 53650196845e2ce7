use std::path::{Path, PathBuf};

use super::{LaunchError, Launcher, Spawner};

const EDGE_PATHS: [&str; 3] = [
    "/usr/bin/microsoft-edge",
    "/usr/bin/microsoft-edge-stable",
    "/opt/microsoft/msedge/msedge",
];

/// Linux and the other freedesktop-style systems.
pub struct LinuxLauncher {
    candidates: Vec<PathBuf>,
    spawner: Spawner,
}

impl LinuxLauncher {
    pub fn new(candidates: Option<Vec<PathBuf>>) -> Self {
        let candidates =
            candidates.unwrap_or_else(|| EDGE_PATHS.iter().map(PathBuf::from).collect());
        Self {
            candidates,
            spawner: Spawner::default(),
        }
    }
}

impl Launcher for LinuxLauncher {
    fn name(&self) -> &str {
        "linux"
    }

    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        self.spawner.spawn("xdg-open", &[path])
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        self.spawner.spawn("xdg-open", &[url])
    }

    fn browser_candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    fn spawner(&self) -> &Spawner {
        &self.spawner
    }
}
