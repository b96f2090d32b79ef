//! Demo entry point: builds the root menu and runs it over stdio.

mod config;
mod pages;

use anyhow::Result;
use console_menu::{Menu, StdConsole};

use config::DemoConfig;
use pages::MainPage;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DemoConfig::from_env();
    tracing::debug!(?config, "starting menu demo");

    let mut menu = Menu::new("Main menu", MainPage::new(config))?;
    menu.display(&mut StdConsole::new())?;

    Ok(())
}
