use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::i18n::{Danish, English, French, German, Language, Spanish};

/// Two picks of the same file within this window count as a double click.
pub const DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(1500);
pub const DEFAULT_USERNAME: &str = "user";
pub const PROMPT_HOST: &str = "Lumb-os";
pub const YOUTUBE_URL: &str = "https://www.youtube.com";
pub const PHOTO_URL: &str = "https://pixlr.com";
pub const BLANK_PAGE: &str = "about:blank";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Da,
    En,
    Fr,
    De,
    Es,
}

impl LanguageCode {
    /// Menu order, matching the numbers shown by the language prompt.
    pub const ALL: [LanguageCode; 5] = [
        LanguageCode::Da,
        LanguageCode::En,
        LanguageCode::Fr,
        LanguageCode::De,
        LanguageCode::Es,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Da => "da",
            LanguageCode::En => "en",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::Es => "es",
        }
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == raw)
    }

    /// Maps a menu answer (`"1"` to `"5"`) to a language.
    pub fn from_choice(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(LanguageCode::Da),
            "2" => Some(LanguageCode::En),
            "3" => Some(LanguageCode::Fr),
            "4" => Some(LanguageCode::De),
            "5" => Some(LanguageCode::Es),
            _ => None,
        }
    }

    pub fn messages(&self) -> &'static dyn Language {
        match self {
            LanguageCode::Da => &Danish,
            LanguageCode::En => &English,
            LanguageCode::Fr => &French,
            LanguageCode::De => &German,
            LanguageCode::Es => &Spanish,
        }
    }

    pub(crate) fn index(&self) -> u8 {
        match self {
            LanguageCode::Da => 0,
            LanguageCode::En => 1,
            LanguageCode::Fr => 2,
            LanguageCode::De => 3,
            LanguageCode::Es => 4,
        }
    }

    pub(crate) fn from_index(index: u8) -> Self {
        Self::ALL
            .get(index as usize)
            .copied()
            .unwrap_or(LanguageCode::En)
    }
}

/// A top-level command typed at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Exit,
    World,
    File,
    Browser,
    Youtube,
    Photo,
    Numeral,
    Unknown,
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Command::Empty;
        }
        match input.to_lowercase().as_str() {
            "help" | "hjælp" | "hjælp()" => Command::Help,
            "exit" | "quit" => Command::Exit,
            "world" => Command::World,
            "file" => Command::File,
            "browser" => Command::Browser,
            "youtube" => Command::Youtube,
            "photo" => Command::Photo,
            _ if is_numeral(input) => Command::Numeral,
            _ => Command::Unknown,
        }
    }
}

/// What a line typed inside the file-selection sub-loop means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    Back,
    Index(usize),
    NotANumber,
    OutOfRange,
}

impl SelectionInput {
    /// Resolves a 1-based answer against a listing of `count` entries.
    pub fn parse(input: &str, count: usize) -> Self {
        let input = input.trim();
        let lowered = input.to_lowercase();
        if BACK_ALIASES.contains(&lowered.as_str()) {
            return SelectionInput::Back;
        }
        if !is_numeral(input) {
            return SelectionInput::NotANumber;
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => SelectionInput::Index(n - 1),
            _ => SelectionInput::OutOfRange,
        }
    }
}

const BACK_ALIASES: [&str; 5] = ["back", "tilbage", "retour", "zurück", "atrás"];

fn is_numeral(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_map_to_codes() {
        assert_eq!(LanguageCode::from_choice("1"), Some(LanguageCode::Da));
        assert_eq!(LanguageCode::from_choice(" 2 "), Some(LanguageCode::En));
        assert_eq!(LanguageCode::from_choice("5"), Some(LanguageCode::Es));
        assert_eq!(LanguageCode::from_choice("6"), None);
        assert_eq!(LanguageCode::from_choice("en"), None);
    }

    #[test]
    fn codes_survive_index_and_text() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_code(lang.code()), Some(lang));
            assert_eq!(LanguageCode::from_index(lang.index()), lang);
        }
        assert_eq!(LanguageCode::from_code("xx"), None);
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(Command::parse("FILE"), Command::File);
        assert_eq!(Command::parse("  Quit "), Command::Exit);
        assert_eq!(Command::parse("HJÆLP"), Command::Help);
        assert_eq!(Command::parse("hjælp()"), Command::Help);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("42"), Command::Numeral);
        assert_eq!(Command::parse("-1"), Command::Unknown);
        assert_eq!(Command::parse("ls"), Command::Unknown);
    }

    #[test]
    fn selection_input_bounds() {
        assert_eq!(SelectionInput::parse("back", 3), SelectionInput::Back);
        assert_eq!(SelectionInput::parse("Tilbage", 3), SelectionInput::Back);
        assert_eq!(SelectionInput::parse("1", 3), SelectionInput::Index(0));
        assert_eq!(SelectionInput::parse("3", 3), SelectionInput::Index(2));
        assert_eq!(SelectionInput::parse("0", 3), SelectionInput::OutOfRange);
        assert_eq!(SelectionInput::parse("4", 3), SelectionInput::OutOfRange);
        assert_eq!(
            SelectionInput::parse("99999999999999999999999", 3),
            SelectionInput::OutOfRange
        );
        assert_eq!(SelectionInput::parse("one", 3), SelectionInput::NotANumber);
        assert_eq!(SelectionInput::parse("", 3), SelectionInput::NotANumber);
    }
}
