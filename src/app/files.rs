use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use chrono::{DateTime, Local};
use log::{debug, info, warn};

use super::{Selection, Session};
use crate::definitions::SelectionInput;

/// One regular file in a `file` listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl FileEntry {
    /// The listing line, numbered from 1.
    pub fn display_line(&self, number: usize) -> String {
        format!(
            "{}) {}  ({} bytes, {})",
            number,
            self.name,
            self.size,
            self.modified.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Lists the regular files directly inside `dir`, sorted by name.
/// Directories and entries whose metadata cannot be read are skipped.
pub fn list_files(dir: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            let meta = fs::metadata(&path).ok()?;
            if !meta.is_file() {
                return None;
            }
            let modified = meta.modified().map(DateTime::<Local>::from).ok()?;
            Some(FileEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: meta.len(),
                modified,
                path,
            })
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

// Implementation block for the `file` command and its selection sub-loop.
impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn show_files(&mut self) -> Result<()> {
        let files = match list_files(&self.working_dir) {
            Ok(files) => files,
            Err(err) => {
                warn!("Could not list {}: {}", self.working_dir.display(), err);
                Vec::new()
            }
        };
        if files.is_empty() {
            self.say(self.messages().no_files())?;
            return Ok(());
        }

        let header = self.messages().files_header(&self.working_dir.display().to_string());
        self.say(&header)?;
        for (i, file) in files.iter().enumerate() {
            self.say(&file.display_line(i + 1))?;
        }
        debug!("Listed {} files", files.len());

        self.select_files(&files)?;
        self.selection.clear();
        Ok(())
    }

    /// Reads picks until `back` or end of input.
    fn select_files(&mut self, files: &[FileEntry]) -> Result<()> {
        loop {
            self.prompt(self.messages().selection_prompt())?;
            let Some(line) = self.read_line() else {
                return self.end_of_input();
            };
            match SelectionInput::parse(&line, files.len()) {
                SelectionInput::Back => return Ok(()),
                SelectionInput::NotANumber => self.say(self.messages().selection_not_a_number())?,
                SelectionInput::OutOfRange => self.say(self.messages().selection_out_of_range())?,
                SelectionInput::Index(index) => self.pick(&files[index], index)?,
            }
        }
    }

    fn pick(&mut self, file: &FileEntry, index: usize) -> Result<()> {
        match self.selection.register(index, Instant::now()) {
            Selection::Open => {
                self.say(&self.messages().opening(&file.name))?;
                match self.launcher.open_path(&file.path) {
                    Ok(()) => info!("Opened {}", file.path.display()),
                    Err(err) => {
                        warn!("Could not open {}: {}", file.path.display(), err);
                        self.say(self.messages().edge_failed())?;
                    }
                }
            }
            Selection::Marked => self.say(&self.messages().selected(&file.name))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::{Harness, read_prefs};
    use crate::definitions::LanguageCode;
    use tempfile::TempDir;

    fn dir_with(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), name.as_bytes()).unwrap();
        }
        dir
    }

    #[test]
    fn listing_skips_directories_and_sorts() {
        let dir = dir_with(&["b.txt", "a.txt"]);
        fs::create_dir(dir.path().join("sub")).unwrap();
        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
        assert_eq!(files[0].size, 5);
        assert!(files[0].display_line(1).starts_with("1) a.txt  (5 bytes, "));
    }

    #[test]
    fn empty_directory_prints_no_files_and_skips_sub_loop() {
        let work = TempDir::new().unwrap();
        let harness = Harness::ready(LanguageCode::En, "eve", work.path());
        // "1" would be answered by the sub-loop if it were entered.
        let run = harness.run("file\n1\nexit\n");
        assert!(run.output.contains("No files in this folder."));
        assert!(run.output.contains("Type 'file' to list files"));
        assert!(!run.output.contains("(type a number to select"));
    }

    #[test]
    fn double_pick_opens_once_and_clears() {
        let work = dir_with(&["notes.txt"]);
        let harness = Harness::ready(LanguageCode::En, "eve", work.path());
        let run = harness.run("file\n1\n1\n1\nback\nexit\n");
        assert_eq!(run.calls.paths.len(), 1);
        assert!(run.calls.paths[0].ends_with("notes.txt"));
        assert!(run.output.contains("Attempting to open file: notes.txt"));
        assert_eq!(run.output.matches("Selected: notes.txt").count(), 2);
    }

    #[test]
    fn switching_files_never_opens() {
        let work = dir_with(&["a.txt", "b.txt"]);
        let harness = Harness::ready(LanguageCode::En, "eve", work.path());
        let run = harness.run("file\n1\n2\n1\n2\nback\nexit\n");
        assert!(run.calls.paths.is_empty());
        assert_eq!(run.output.matches("Selected: ").count(), 4);
    }

    #[test]
    fn bad_picks_are_rejected_and_loop_continues() {
        let work = dir_with(&["a.txt"]);
        let harness = Harness::ready(LanguageCode::En, "eve", work.path());
        let run = harness.run("file\nzzz\n7\n0\ntilbage\nexit\n");
        assert!(run.output.contains("Type a number or 'back'."));
        assert_eq!(run.output.matches("Invalid number.").count(), 2);
        assert!(run.output.contains("Goodbye!"));
    }

    #[test]
    fn leaving_sub_loop_resets_selection() {
        let work = dir_with(&["a.txt"]);
        let harness = Harness::ready(LanguageCode::En, "eve", work.path());
        let run = harness.run("file\n1\nback\nfile\n1\nback\nexit\n");
        assert!(run.calls.paths.is_empty());
    }

    #[test]
    fn failed_open_is_reported_and_not_fatal() {
        let work = dir_with(&["a.txt"]);
        let mut harness = Harness::ready(LanguageCode::En, "eve", work.path());
        harness.fail_paths = true;
        let run = harness.run("file\n1\n1\nback\nexit\n");
        assert!(run.output.contains("Edge not found"));
        assert!(run.output.contains("Goodbye!"));
    }

    #[test]
    fn end_of_input_inside_sub_loop_ends_session() {
        let work = dir_with(&["a.txt"]);
        let harness = Harness::ready(LanguageCode::Da, "bo", work.path());
        let prefs_before = read_prefs(&harness);
        let run = harness.run("file\n1\n");
        assert!(run.output.trim_end().ends_with("Farvel!"));
        assert_eq!(read_prefs(&run.harness), prefs_before);
    }
}
