use hackerden::error::HackerdenError;
use hackerden::input::{self, Command};
use hackerden::logger::initialize as logger_initialize;
use hackerden::render;

use auth_core::app::App;
use auth_core::config::AppConfig;
use auth_core::session::FileSessionStore;

use std::fs::create_dir_all;
use std::sync::Arc;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Per-user directory holding the config, the log, and the session token.
const APP_DIR_NAME: &str = "hackerden";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HackerdenError> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| HackerdenError::startup("No per-user data directory available"))?
        .join(APP_DIR_NAME);

    create_dir_all(&data_dir)?;

    // Logger FIRST so everything after it is captured
    logger_initialize(&data_dir)?;

    info!("Hackerden starting");
    info!("Data directory: {}", data_dir.display());

    let config = match AppConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("Config unusable, falling back to defaults: {e}");
            AppConfig::default()
        }
    };

    let store = Arc::new(FileSessionStore::new(&data_dir));
    let mut app = App::new(config, store)?;
    app.bootstrap();

    println!("{}", render::frame(&app));
    println!("{}", input::HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match input::parse(&line) {
            None => continue,
            Some(Command::Help) => println!("{}", input::HELP_TEXT),
            Some(Command::Quit) => break,
            Some(Command::Unknown(keyword)) => {
                println!("unrecognized command: {keyword}");
                println!("{}", input::HELP_TEXT);
            }
            Some(Command::Event(event)) => {
                app.handle(event).await;
                println!("{}", render::frame(&app));
            }
        }
    }

    info!("Hackerden exiting");
    Ok(())
}
