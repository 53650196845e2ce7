//! `launcher` hands files and URLs over to the host OS.
//!
//! Each submodule implements [`Launcher`] for one target OS. The session only
//! talks to the trait object picked by [`platform_launcher`] at startup.

/// `linux`: `xdg-open` plus the usual Edge install locations.
pub mod linux;
/// `macos`: `open` plus the Edge app bundle.
pub mod macos;
/// `windows`: `cmd /C start` plus the Edge install locations.
pub mod windows;

use std::cell::RefCell;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, warn};

use crate::config::Settings;

pub use linux::LinuxLauncher;
pub use macos::MacLauncher;
pub use windows::WindowsLauncher;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("no usable browser found")]
    BrowserUnavailable,
}

/// Opens things with programs outside this process.
///
/// Every call is fire-and-forget: success means the child was spawned, not
/// that it did anything useful.
pub trait Launcher {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// Opens a file with the platform's default handler.
    fn open_path(&self, path: &Path) -> Result<(), LaunchError>;

    /// Opens a URL with the platform's generic URL handler.
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;

    /// The specific-browser executables this launcher knows about.
    fn browser_candidates(&self) -> &[PathBuf];

    /// Starts and later reaps the processes this launcher creates.
    fn spawner(&self) -> &Spawner;

    /// Tries the known browser executables first and then, when a URL was
    /// given, the generic URL handler.
    fn open_browser(&self, url: Option<&str>) -> Result<(), LaunchError> {
        for candidate in self.browser_candidates() {
            if !candidate.exists() {
                continue;
            }
            let args: Vec<&str> = url.into_iter().collect();
            match self.spawner().spawn(candidate.as_os_str(), args.as_slice()) {
                Ok(()) => return Ok(()),
                Err(err) => warn!("{}: {}", self.name(), err),
            }
        }
        match url {
            Some(url) => self.open_url(url),
            None => Err(LaunchError::BrowserUnavailable),
        }
    }
}

/// Picks the launcher for the OS this binary was built for.
pub fn platform_launcher(settings: &Settings) -> Box<dyn Launcher> {
    let overrides = (!settings.browser_paths.is_empty()).then(|| settings.browser_paths.clone());
    let launcher: Box<dyn Launcher> = if cfg!(target_os = "windows") {
        Box::new(WindowsLauncher::new(overrides))
    } else if cfg!(target_os = "macos") {
        Box::new(MacLauncher::new(overrides))
    } else {
        Box::new(LinuxLauncher::new(overrides))
    };
    debug!("Using {} launcher", launcher.name());
    launcher
}

/// Spawns children without waiting for them.
///
/// Children that have exited are reaped on the next spawn so none linger as
/// zombies while the shell keeps running.
#[derive(Debug, Default)]
pub struct Spawner {
    children: RefCell<Vec<Child>>,
}

impl Spawner {
    /// Starts `program` without sharing our stdio.
    pub fn spawn<S: AsRef<OsStr>>(
        &self,
        program: impl AsRef<OsStr>,
        args: &[S],
    ) -> Result<(), LaunchError> {
        self.reap();
        let program = program.as_ref();
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_string_lossy().into_owned(),
                source,
            })?;
        debug!("Spawned {} (pid {})", program.to_string_lossy(), child.id());
        self.children.borrow_mut().push(child);
        Ok(())
    }

    /// Collects every child that has exited. Returns how many are still running.
    pub fn reap(&self) -> usize {
        let mut children = self.children.borrow_mut();
        children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Child {} exited with {}", child.id(), status);
                false
            }
            Ok(None) => true,
            Err(err) => {
                warn!("Could not poll child {}: {}", child.id(), err);
                false
            }
        });
        children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeLauncher {
        candidates: Vec<PathBuf>,
        urls: RefCell<Vec<String>>,
        spawner: Spawner,
    }

    impl Launcher for FakeLauncher {
        fn name(&self) -> &str {
            "fake"
        }

        fn open_path(&self, _path: &Path) -> Result<(), LaunchError> {
            Ok(())
        }

        fn open_url(&self, url: &str) -> Result<(), LaunchError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn browser_candidates(&self) -> &[PathBuf] {
            &self.candidates
        }

        fn spawner(&self) -> &Spawner {
            &self.spawner
        }
    }

    #[test]
    fn missing_browser_falls_back_to_url_handler() {
        let launcher = FakeLauncher {
            candidates: vec![PathBuf::from("/definitely/not/a/browser")],
            urls: RefCell::new(Vec::new()),
            spawner: Spawner::default(),
        };
        launcher.open_browser(Some("https://pixlr.com")).unwrap();
        assert_eq!(*launcher.urls.borrow(), vec![String::from("https://pixlr.com")]);
    }

    #[test]
    fn missing_browser_without_url_is_unavailable() {
        let launcher = FakeLauncher {
            candidates: vec![PathBuf::from("/definitely/not/a/browser")],
            urls: RefCell::new(Vec::new()),
            spawner: Spawner::default(),
        };
        assert!(matches!(
            launcher.open_browser(None),
            Err(LaunchError::BrowserUnavailable)
        ));
        assert!(launcher.urls.borrow().is_empty());
    }

    #[test]
    fn spawn_failure_is_reported_not_raised() {
        let spawner = Spawner::default();
        let err = spawner.spawn("/definitely/not/a/program", &["x"]).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
        assert_eq!(spawner.reap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn exited_children_are_reaped() {
        use std::time::{Duration, Instant};

        let spawner = Spawner::default();
        spawner.spawn("true", &[] as &[&str]).unwrap();
        spawner.spawn("true", &[] as &[&str]).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while spawner.reap() > 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(spawner.reap(), 0);
    }

    #[test]
    fn settings_override_candidates() {
        let settings = Settings {
            browser_paths: vec![PathBuf::from("/opt/custom/browser")],
            ..Settings::default()
        };
        let launcher = platform_launcher(&settings);
        assert_eq!(launcher.browser_candidates(), [PathBuf::from("/opt/custom/browser")]);
    }
}
