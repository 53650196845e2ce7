use std::io::{BufRead, Write};
use std::sync::atomic::Ordering;

use anyhow::Result;
use log::info;

use super::{Session, SessionPhase};
use crate::definitions::{DEFAULT_USERNAME, LanguageCode};

// Implementation block for the preference-related parts of the session.
impl<R: BufRead, W: Write> Session<R, W> {
    /// Switches the active language and persists it.
    pub(crate) fn set_language(&mut self, lang: LanguageCode) {
        self.language = lang;
        self.language_beacon.store(lang.index(), Ordering::SeqCst);
        self.preferences.lang = Some(lang);
        self.store.save(&self.preferences);
        info!("Language set to {}", lang.code());
    }

    /// Sets the username, falling back to `user` for a blank answer, and persists it.
    pub(crate) fn set_username(&mut self, raw: &str) {
        let name = match raw.trim() {
            "" => DEFAULT_USERNAME,
            name => name,
        };
        self.username = name.to_string();
        self.preferences.username = Some(self.username.clone());
        self.store.save(&self.preferences);
        info!("Username set to {}", self.username);
    }

    /// First-run language menu. Always shown in English since nothing is
    /// known yet; repeats until a valid number is given.
    pub(crate) fn await_language(&mut self) -> Result<()> {
        let neutral = LanguageCode::En.messages();
        loop {
            self.say("")?;
            self.say(neutral.choose_lang())?;
            self.prompt("> ")?;
            let Some(choice) = self.read_line() else {
                return self.end_of_input();
            };
            match LanguageCode::from_choice(&choice) {
                Some(lang) => {
                    self.set_language(lang);
                    self.phase = self.phase_after_language();
                    return Ok(());
                }
                None => self.say(neutral.invalid_choice())?,
            }
        }
    }

    pub(crate) fn await_username(&mut self) -> Result<()> {
        let question = format!("{} ", self.messages().ask_username());
        self.prompt(&question)?;
        let Some(answer) = self.read_line() else {
            return self.end_of_input();
        };
        self.set_username(&answer);
        self.phase = SessionPhase::Ready;
        Ok(())
    }

    /// The `world` command: re-shows the menu in the current language.
    pub(crate) fn change_language(&mut self) -> Result<()> {
        self.say(self.messages().choose_lang())?;
        self.prompt("> ")?;
        let Some(choice) = self.read_line() else {
            return self.end_of_input();
        };
        match LanguageCode::from_choice(&choice) {
            Some(lang) => {
                self.set_language(lang);
                self.say(self.messages().lang_changed())?;
            }
            None => self.say(self.messages().unknown())?,
        }
        Ok(())
    }
}
