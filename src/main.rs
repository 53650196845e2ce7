pub mod app;
pub mod config;
pub mod definitions;
pub mod i18n;
pub mod launcher;
pub mod store;

use std::env;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use anyhow::Result;
use app::Session;
use config::Settings;
use definitions::LanguageCode;
use log::{debug, warn};
use store::PreferenceStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = Settings::load().unwrap_or_else(|err| {
        warn!("Using default settings: {:#}", err);
        Settings::default()
    });
    let store = match &settings.preferences_path {
        Some(path) => PreferenceStore::new(path.clone()),
        None => PreferenceStore::in_home(),
    };
    debug!("Preferences at {}", store.path().display());

    let working_dir = env::current_dir()?;
    let launcher = launcher::platform_launcher(&settings);

    let mut session = Session::new(io::stdin().lock(), io::stdout(), store, launcher, working_dir);
    install_interrupt_handler(session.language_beacon());
    session.run()?;
    debug!(
        "Session for {} ended in phase {:?} with language {}",
        session.username(),
        session.phase(),
        session.language().code()
    );
    Ok(())
}

/// Ctrl+C ends the program the same way end of input does: a goodbye in the
/// current language and a normal exit status.
fn install_interrupt_handler(language: Arc<AtomicU8>) {
    let result = ctrlc::set_handler(move || {
        let lang = LanguageCode::from_index(language.load(Ordering::SeqCst));
        println!();
        println!("{}", lang.messages().goodbye());
        std::process::exit(0);
    });
    if let Err(err) = result {
        warn!("Could not install interrupt handler: {}", err);
    }
}
