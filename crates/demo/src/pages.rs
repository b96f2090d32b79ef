//! Concrete menu pages for the demo.
//!
//! Actions only mutate shared flags; `on_update` is where those flags turn
//! into visibility changes before the next render.

use std::cell::Cell;
use std::rc::Rc;

use console_menu::{ItemList, Menu, MenuError, MenuItem, Page};

use crate::config::DemoConfig;

const EXIT: u64 = 0;
const GREET: u64 = 1;
const SETTINGS: u64 = 2;
const SECRET: u64 = 3;

/// Root page: greet, open settings, and a secret entry that appears after
/// enough greetings.
pub struct MainPage {
    config: DemoConfig,
    greetings: Rc<Cell<u32>>,
    shouting: Rc<Cell<bool>>,
}

impl MainPage {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            config,
            greetings: Rc::new(Cell::new(0)),
            shouting: Rc::new(Cell::new(false)),
        }
    }
}

impl Page for MainPage {
    fn init(&mut self, items: &mut ItemList) -> Result<(), MenuError> {
        items.add_item(MenuItem::action(EXIT, "Quit", || {}).exit_option())?;

        let greetings = Rc::clone(&self.greetings);
        let shouting = Rc::clone(&self.shouting);
        let name = self.config.player_name.clone();
        items.add_item(MenuItem::action(GREET, "Say hello", move || {
            greetings.set(greetings.get() + 1);
            if shouting.get() {
                println!("HELLO, {}!", name.to_uppercase());
            } else {
                println!("Hello, {name}.");
            }
        }))?;

        let settings = Menu::new("Settings", SettingsPage::new(Rc::clone(&self.shouting)))?;
        items.add_item(MenuItem::submenu(SETTINGS, "Settings", settings))?;

        items.add_hidden_item(MenuItem::action(SECRET, "Claim your reward", || {
            println!("You found the secret option!");
        }))?;

        Ok(())
    }

    fn on_update(&mut self, items: &mut ItemList) -> Result<(), MenuError> {
        if self.greetings.get() >= self.config.reveal_after {
            items.show_item(SECRET)?;
        }
        Ok(())
    }
}

/// Settings submenu: toggles how the greeting is printed.
struct SettingsPage {
    shouting: Rc<Cell<bool>>,
}

impl SettingsPage {
    fn new(shouting: Rc<Cell<bool>>) -> Self {
        Self { shouting }
    }
}

impl Page for SettingsPage {
    fn init(&mut self, items: &mut ItemList) -> Result<(), MenuError> {
        items.add_item(MenuItem::action(0, "Back", || {}).exit_option())?;

        let shouting = Rc::clone(&self.shouting);
        items.add_item(MenuItem::action(1, "Toggle shouting", move || {
            shouting.set(!shouting.get());
            println!(
                "Shouting is now {}.",
                if shouting.get() { "on" } else { "off" }
            );
        }))?;

        Ok(())
    }
}
