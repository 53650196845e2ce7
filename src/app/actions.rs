use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, info, warn};

use super::{Session, SessionPhase};
use crate::definitions::{BLANK_PAGE, Command, LanguageCode, PHOTO_URL, PROMPT_HOST, YOUTUBE_URL};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Runs the session until `exit`/`quit` or the end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.phase == SessionPhase::AwaitingLanguage {
            self.say(LanguageCode::En.messages().welcome())?;
            self.await_language()?;
        }
        if self.phase == SessionPhase::Finished {
            return Ok(());
        }

        self.say("")?;
        self.say(self.messages().welcome())?;

        if self.phase == SessionPhase::AwaitingUsername {
            self.await_username()?;
        }
        while self.phase == SessionPhase::Ready {
            self.step()?;
        }
        info!("Session finished");
        Ok(())
    }

    /// Reads and executes one command at the main prompt.
    pub(crate) fn step(&mut self) -> Result<()> {
        let prompt = format!("{}@{}> ", self.username, PROMPT_HOST);
        self.prompt(&prompt)?;
        let Some(line) = self.read_line() else {
            return self.end_of_input();
        };
        let command = Command::parse(&line);
        debug!("Dispatching {:?} for input {:?}", command, line);
        self.dispatch(command)
    }

    pub(crate) fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Empty => {}
            Command::Help => {
                self.say("")?;
                self.say(self.messages().help())?;
                self.say("")?;
            }
            Command::Exit => {
                self.say(self.messages().goodbye())?;
                self.phase = SessionPhase::Finished;
            }
            Command::World => self.change_language()?,
            Command::File => self.show_files()?,
            Command::Browser => self.launch_browser(None)?,
            Command::Youtube => self.launch_browser(Some(YOUTUBE_URL))?,
            Command::Photo => self.launch_browser(Some(PHOTO_URL))?,
            Command::Numeral => self.say(self.messages().use_file_first())?,
            Command::Unknown => self.say(self.messages().unknown())?,
        }
        Ok(())
    }

    /// Opens the browser, degrading to the generic URL handler and finally to
    /// a message. Nothing here ends the session.
    fn launch_browser(&mut self, url: Option<&str>) -> Result<()> {
        self.say(self.messages().edge_open())?;
        let Err(err) = self.launcher.open_browser(url) else {
            return Ok(());
        };
        info!("Browser launch failed, using default handler: {}", err);
        self.say(self.messages().edge_failed())?;

        let fallback = url.unwrap_or(BLANK_PAGE);
        if let Err(err) = self.launcher.open_url(fallback) {
            warn!("Could not open {}: {}", fallback, err);
            self.say(self.messages().launch_failed())?;
        }
        Ok(())
    }

    /// Input ran out (or the terminal went away): say goodbye and stop.
    pub(crate) fn end_of_input(&mut self) -> Result<()> {
        self.say("")?;
        self.say(self.messages().goodbye())?;
        self.phase = SessionPhase::Finished;
        Ok(())
    }
}
