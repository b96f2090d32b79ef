//! Blocking console menu engine.
//!
//! This library renders a numbered list of options to a line-oriented
//! console, reads one line of input, resolves it to a selected item, runs
//! that item, and keeps looping until the menu's exit item is chosen.
//!
//! - **Single-threaded**: `display()` blocks on line input; submenus recurse
//!   on the call stack, one pending loop per nesting level
//! - **Stable numbering**: display positions index the full insertion-ordered
//!   collection, so hiding an item never renumbers its neighbours
//! - **Strict wiring**: duplicate ids and unknown ids fail fast with typed
//!   errors instead of being silently absorbed
//!
//! # Architecture
//!
//! - [`Menu`]: ordered, id-addressable item collection plus the display loop
//! - [`MenuItem`]: a selectable entry holding either an action or a submenu
//! - [`Page`]: the capability concrete menus implement (`init` once,
//!   `on_update` before every render)
//! - [`Console`]: the line I/O seam; [`StdConsole`] binds it to stdio

pub mod console;
pub mod error;
pub mod item;
pub mod menu;

pub use console::{Console, StdConsole};
pub use error::{Error, MenuError, Result, SelectionError};
pub use item::{ItemId, ItemKind, MenuItem};
pub use menu::{ItemList, Menu, Page};
