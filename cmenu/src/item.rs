use std::fmt;

use crate::{console::Console, registry::PageId};

/// Code run when an item gets selected, before the menu moves to the next page.
///
/// It gets the selected item and the console the menu is running on, so it can
/// print or prompt for more input on its own.
pub type Callback = Box<dyn Fn(&Item, &mut dyn Console)>;

/// Single selectable entry of a [`Page`](crate::Page).
pub struct Item {
    name: String,
    key: char,
    page: Option<PageId>,
    next: Option<PageId>,
    callback: Option<Callback>,
}

impl Item {
    pub fn new(name: impl Into<String>, key: char) -> Self {
        Self {
            name: name.into(),
            key,
            page: None,
            next: None,
            callback: None,
        }
    }

    pub fn next(mut self, page: PageId) -> Self {
        self.next = Some(page);
        self
    }

    pub fn callback(mut self, fun: impl Fn(&Item, &mut dyn Console) + 'static) -> Self {
        self.callback = Some(Box::new(fun));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn key(&self) -> char {
        self.key
    }

    /// Page this item belongs to, `None` until it's added to one.
    pub fn page(&self) -> Option<PageId> {
        self.page
    }

    pub(crate) fn set_page(&mut self, page: PageId) {
        self.page = Some(page);
    }

    pub fn next_page(&self) -> Option<PageId> {
        self.next
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn invoke_callback(&self, console: &mut dyn Console) {
        if let Some(fun) = &self.callback {
            fun(self, console);
        }
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("page", &self.page)
            .field("next", &self.next)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
