//! Menu model and the interactive display loop.

use std::collections::HashMap;

use crate::Result;
use crate::console::Console;
use crate::error::{MenuError, SelectionError};
use crate::item::{ItemId, MenuItem};

/// Prompt printed (without newline) before each read.
const PROMPT: &str = "Select Option: ";

/// The menu-definition capability implemented by concrete menus.
///
/// A page populates its menu once in [`init`](Page::init) and may adjust
/// item visibility before every render in [`on_update`](Page::on_update),
/// typically from state its own actions mutate. `on_update` is the only
/// place state outside the item list may influence the loop.
pub trait Page {
    /// Populates the item collection. Called exactly once by [`Menu::new`],
    /// so items exist before the first display.
    fn init(&mut self, items: &mut ItemList) -> std::result::Result<(), MenuError>;

    /// Adjusts item visibility before each render. Default: no-op.
    fn on_update(&mut self, _items: &mut ItemList) -> std::result::Result<(), MenuError> {
        Ok(())
    }
}

/// Insertion-ordered item collection with O(1) lookup by id.
///
/// The ordered entries define display positions; the id index backs
/// membership checks and [`show_item`](ItemList::show_item) /
/// [`hide_item`](ItemList::hide_item). The two structures are kept in sync
/// on every mutation, and items are never removed once added.
#[derive(Debug, Default)]
pub struct ItemList {
    entries: Vec<MenuItem>,
    by_id: HashMap<ItemId, usize>,
}

impl ItemList {
    fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    ///
    /// Fails with [`MenuError::DuplicateItem`] if an item with the same id
    /// already exists; the collection is left unchanged.
    pub fn add_item(&mut self, item: MenuItem) -> std::result::Result<(), MenuError> {
        if self.by_id.contains_key(&item.id()) {
            return Err(MenuError::DuplicateItem(item.id()));
        }
        self.by_id.insert(item.id(), self.entries.len());
        self.entries.push(item);
        Ok(())
    }

    /// Appends an item forced to start hidden. Same duplicate policy as
    /// [`add_item`](ItemList::add_item).
    pub fn add_hidden_item(&mut self, item: MenuItem) -> std::result::Result<(), MenuError> {
        self.add_item(item.hidden())
    }

    /// Makes the item with the given id visible.
    pub fn show_item(&mut self, id: ItemId) -> std::result::Result<(), MenuError> {
        self.item_mut(id)?.show();
        Ok(())
    }

    /// Hides the item with the given id. Its display position is retained,
    /// so the numbering of other items does not shift.
    pub fn hide_item(&mut self, id: ItemId) -> std::result::Result<(), MenuError> {
        self.item_mut(id)?.hide();
        Ok(())
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.by_id.get(&id).map(|&index| &self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter()
    }

    fn item_mut(&mut self, id: ItemId) -> std::result::Result<&mut MenuItem, MenuError> {
        let index = *self.by_id.get(&id).ok_or(MenuError::ItemNotFound(id))?;
        Ok(&mut self.entries[index])
    }

    /// Resolves one line of input to a display position.
    ///
    /// Positions index the full insertion-ordered collection, never a
    /// compacted visible-only view, so hiding an item does not shift what
    /// the user types for its neighbours.
    fn resolve(&self, line: &str) -> std::result::Result<usize, SelectionError> {
        let position: usize = line
            .trim()
            .parse()
            .map_err(|_| SelectionError::NotANumber(line.to_string()))?;
        let item = self
            .entries
            .get(position)
            .ok_or(SelectionError::OutOfRange(position))?;
        if !item.is_visible() {
            return Err(SelectionError::Hidden(position));
        }
        Ok(position)
    }
}

/// An ordered, id-addressable collection of items with a title, exposing a
/// blocking interactive display loop.
///
/// Submenus are plain `Menu` values owned by their parent's items; entering
/// one is call-stack recursion, with one pending [`display`](Menu::display)
/// per nesting level.
pub struct Menu {
    title: String,
    items: ItemList,
    page: Box<dyn Page>,
}

impl Menu {
    /// Builds a menu and populates it through the page's `init` hook.
    pub fn new(
        title: impl Into<String>,
        page: impl Page + 'static,
    ) -> std::result::Result<Self, MenuError> {
        let mut page = Box::new(page);
        let mut items = ItemList::new();
        page.init(&mut items)?;
        Ok(Self {
            title: title.into(),
            items,
            page,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    /// Item access for callers that add items between display loops.
    pub fn items_mut(&mut self) -> &mut ItemList {
        &mut self.items
    }

    /// Runs the interactive loop until the exit item is selected.
    ///
    /// Each iteration runs the page's `on_update` hook, renders the visible
    /// items, reads one line, and either executes the resolved item or
    /// reports a [`SelectionError`] and loops. Selection errors never escape
    /// this method; console I/O errors and hook wiring errors do.
    ///
    /// The menu can be re-displayed any number of times; every call is a
    /// fresh loop over the same persistent item collection.
    pub fn display(&mut self, console: &mut dyn Console) -> Result<()> {
        let mut keep_looping = true;
        while keep_looping {
            self.page.on_update(&mut self.items)?;
            self.render(console)?;
            console.print(PROMPT)?;
            let line = console.read_line()?;
            match self.items.resolve(&line) {
                Ok(position) => {
                    tracing::debug!(menu = %self.title, position, "running selected item");
                    keep_looping = self.items.entries[position].run(console)?;
                }
                Err(error) => {
                    tracing::warn!(menu = %self.title, input = %line, %error, "selection rejected");
                    console.print_line(&error.to_string())?;
                }
            }
        }
        tracing::debug!(menu = %self.title, "display loop terminated");
        Ok(())
    }

    fn render(&self, console: &mut dyn Console) -> Result<()> {
        console.print_line("")?;
        console.print_line(&self.title)?;
        for (position, item) in self.items.iter().enumerate() {
            if item.is_visible() {
                console.print_line(&format!("{position}. {}", item.description()))?;
            }
        }
        Ok(())
    }
}
