//! End-to-end display loop scenarios driven through a scripted console.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use console_menu::{Console, ItemList, Menu, MenuError, MenuItem, Page};

/// Console double: serves queued input lines and records all output.
struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| line.to_string()).collect(),
            output: String::new(),
        }
    }

    fn renders_of(&self, title: &str) -> usize {
        self.output.matches(&format!("\n{title}\n")).count()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<String> {
        self.input
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }
}

/// Page that hands over a fixed set of items.
struct StaticPage(Vec<MenuItem>);

impl Page for StaticPage {
    fn init(&mut self, items: &mut ItemList) -> Result<(), MenuError> {
        for item in self.0.drain(..) {
            items.add_item(item)?;
        }
        Ok(())
    }
}

#[test]
fn nested_submenu_exit_unwinds_one_level_at_a_time() {
    let greetings = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&greetings);

    let submenu = Menu::new(
        "Submenu",
        StaticPage(vec![
            MenuItem::action(0, "Exit sub", || {}).exit_option(),
            MenuItem::action(1, "Greet", move || log.borrow_mut().push("hi")),
        ]),
    )
    .unwrap();

    let mut menu = Menu::new(
        "Main",
        StaticPage(vec![
            MenuItem::action(0, "Exit", || {}).exit_option(),
            MenuItem::submenu(1, "Open submenu", submenu),
        ]),
    )
    .unwrap();

    // Enter the submenu, greet, leave the submenu, then leave the parent.
    let mut console = ScriptedConsole::new(&["1", "1", "0", "0"]);
    menu.display(&mut console).unwrap();

    assert_eq!(*greetings.borrow(), ["hi"]);
    assert_eq!(console.renders_of("Main"), 2);
    assert_eq!(console.renders_of("Submenu"), 2);
    assert!(console.input.is_empty(), "all scripted input consumed");
}

/// A page whose action flips a flag that `on_update` turns into visibility.
struct RevealPage {
    revealed: Rc<Cell<bool>>,
    secret_runs: Rc<Cell<u32>>,
}

impl Page for RevealPage {
    fn init(&mut self, items: &mut ItemList) -> Result<(), MenuError> {
        let revealed = Rc::clone(&self.revealed);
        let secret_runs = Rc::clone(&self.secret_runs);
        items.add_item(MenuItem::action(0, "Exit", || {}).exit_option())?;
        items.add_item(MenuItem::action(2, "Reveal the secret", move || {
            revealed.set(true)
        }))?;
        items.add_hidden_item(MenuItem::action(3, "Secret", move || {
            secret_runs.set(secret_runs.get() + 1)
        }))?;
        Ok(())
    }

    fn on_update(&mut self, items: &mut ItemList) -> Result<(), MenuError> {
        if self.revealed.get() {
            items.show_item(3)?;
        }
        Ok(())
    }
}

#[test]
fn action_driven_reveal_makes_hidden_item_selectable() {
    let revealed = Rc::new(Cell::new(false));
    let secret_runs = Rc::new(Cell::new(0));
    let mut menu = Menu::new(
        "Main",
        RevealPage {
            revealed: Rc::clone(&revealed),
            secret_runs: Rc::clone(&secret_runs),
        },
    )
    .unwrap();

    // Reveal (position 1), run the secret (position 2), exit.
    let mut console = ScriptedConsole::new(&["1", "2", "0"]);
    menu.display(&mut console).unwrap();

    let first_render_end = console.output.find("Select Option: ").unwrap();
    assert!(!console.output[..first_render_end].contains("2. Secret"));
    assert!(console.output[first_render_end..].contains("2. Secret"));
    assert_eq!(secret_runs.get(), 1);
}

#[test]
fn selecting_secret_before_reveal_is_rejected() {
    let revealed = Rc::new(Cell::new(false));
    let secret_runs = Rc::new(Cell::new(0));
    let mut menu = Menu::new(
        "Main",
        RevealPage {
            revealed: Rc::clone(&revealed),
            secret_runs: Rc::clone(&secret_runs),
        },
    )
    .unwrap();

    let mut console = ScriptedConsole::new(&["2", "0"]);
    menu.display(&mut console).unwrap();

    assert_eq!(secret_runs.get(), 0);
    assert!(console.output.contains("Invalid option. Option at 2 is hidden."));
}
