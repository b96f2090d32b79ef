//! Menu item model: identity, visibility, and run dispatch.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::Result;
use crate::console::Console;
use crate::menu::Menu;

/// Identifier of a menu item, unique within its owning menu.
///
/// Ids exist only for identity and lookup; display order is insertion order
/// and never depends on id values.
pub type ItemId = u64;

/// What selecting an item does.
///
/// Exactly one case holds per item, so the action-or-submenu invariant is
/// structural rather than a runtime convention.
pub enum ItemKind {
    /// A zero-argument action executed when the item is selected.
    Action(Box<dyn FnMut()>),
    /// An owned child menu entered when the item is selected.
    Submenu(Menu),
}

/// A single selectable menu entry.
///
/// Equality and hashing are defined solely by [`id`](MenuItem::id);
/// description and kind are irrelevant to identity. The kind is fixed at
/// construction, while `visible` and the exit flag are mutable.
pub struct MenuItem {
    id: ItemId,
    description: String,
    kind: ItemKind,
    visible: bool,
    is_exit: bool,
}

impl MenuItem {
    /// Creates a visible, non-exit item that runs `action` when selected.
    pub fn action(id: ItemId, description: impl Into<String>, action: impl FnMut() + 'static) -> Self {
        Self::new(id, description.into(), ItemKind::Action(Box::new(action)))
    }

    /// Creates a visible, non-exit item that enters `menu` when selected.
    pub fn submenu(id: ItemId, description: impl Into<String>, menu: Menu) -> Self {
        Self::new(id, description.into(), ItemKind::Submenu(menu))
    }

    fn new(id: ItemId, description: String, kind: ItemKind) -> Self {
        assert!(
            !description.is_empty(),
            "menu item description must not be empty"
        );
        Self {
            id,
            description,
            kind,
            visible: true,
            is_exit: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    /// Makes the item eligible for rendering and selection. Idempotent.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Removes the item from rendering and selection without renumbering
    /// the other items. Idempotent.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Construction-time variant of [`hide`](MenuItem::hide) for chained
    /// configuration inside a page's `init`.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Marks this item as the one whose selection ends the owning menu's
    /// display loop.
    pub fn exit_option(mut self) -> Self {
        self.is_exit = true;
        self
    }

    /// Executes the item's payload and reports whether the owning loop
    /// should keep going.
    ///
    /// A submenu item recurses into the child's display loop and does not
    /// return until that child terminates. The return value is `!is_exit`:
    /// running the designated exit item is the only way this yields `false`.
    pub(crate) fn run(&mut self, console: &mut dyn Console) -> Result<bool> {
        match &mut self.kind {
            ItemKind::Action(action) => action(),
            ItemKind::Submenu(menu) => menu.display(console)?,
        }
        Ok(!self.is_exit)
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MenuItem {}

impl Hash for MenuItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ItemKind::Action(_) => "action",
            ItemKind::Submenu(_) => "submenu",
        };
        f.debug_struct("MenuItem")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("kind", &kind)
            .field("visible", &self.visible)
            .field("is_exit", &self.is_exit)
            .finish()
    }
}
