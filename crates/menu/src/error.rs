//! Error types surfaced by the menu engine.
//!
//! Two distinct failure families exist and never mix:
//! - [`MenuError`]: a menu author wired a menu up wrong (duplicate id,
//!   unknown id). Raised at construction time or from an update hook, and
//!   fatal to that operation (strict policy).
//! - [`SelectionError`]: one line of interactive input could not be resolved
//!   to a visible item. Always recovered inside the display loop; never
//!   escapes [`Menu::display`](crate::Menu::display).

use std::io;

use thiserror::Error;

use crate::item::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

/// Unified error returned by the display loop.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error("console i/o failed")]
    Io(#[from] io::Error),
}

/// Menu wiring mistakes, surfaced to the menu author and never to the
/// interactive user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("menu item with id {0} already exists in this menu")]
    DuplicateItem(ItemId),

    #[error("menu item with id {0} hasn't been added to this menu")]
    ItemNotFound(ItemId),
}

/// Rejection of a single line of user input.
///
/// The display text of each variant is what the user sees on the console
/// before the menu renders again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The line did not parse as a non-negative integer.
    #[error("Invalid option, you need to enter a number.")]
    NotANumber(String),

    /// The position has no item in the collection.
    #[error("Invalid option. Option {0} doesn't exist.")]
    OutOfRange(usize),

    /// The position holds an item, but it is currently hidden.
    #[error("Invalid option. Option at {0} is hidden.")]
    Hidden(usize),
}
