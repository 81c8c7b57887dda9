use std::{
    ops::Index,
    sync::atomic::{AtomicUsize, Ordering},
};

use hashbrown::HashMap;

use crate::{
    error::MenuError,
    item::Item,
    page::{Page, MAX_ITEMS_PER_PAGE},
};

static NEXT_REGISTRY: AtomicUsize = AtomicUsize::new(0);

/// Stable handle of a page inside the [`PageRegistry`] that created it.
/// Handles of other registries are never valid, even when in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId {
    pub(crate) registry: usize,
    pub(crate) index: usize,
}

/// Owns every page of a menu. Pages point at each other only through
/// [`PageId`]s, so they can be created in any order and form cycles.
#[derive(Debug)]
pub struct PageRegistry {
    id: usize,
    pages: Vec<Page>,
    titles: HashMap<String, PageId>,
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self {
            id: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            pages: Vec::new(),
            titles: HashMap::new(),
        }
    }
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&mut self, title: impl Into<String>) -> PageId {
        self.add_page_with_capacity(title, MAX_ITEMS_PER_PAGE)
    }

    pub fn add_page_with_capacity(&mut self, title: impl Into<String>, capacity: usize) -> PageId {
        let title = title.into();
        let id = PageId {
            registry: self.id,
            index: self.pages.len(),
        };

        // first page wins the title, same as item keys
        self.titles.entry(title.clone()).or_insert(id);
        self.pages.push(Page::new(id, title, capacity));

        log::trace!("Registered page {:?}", id);
        id
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        if id.registry != self.id {
            return None;
        }
        self.pages.get(id.index)
    }

    pub fn get_mut(&mut self, id: PageId) -> Option<&mut Page> {
        if id.registry != self.id {
            return None;
        }
        self.pages.get_mut(id.index)
    }

    pub fn find(&self, title: &str) -> Option<PageId> {
        self.titles.get(title).copied()
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    /// Adds the item to `page`, both `page` and the item's next page
    /// have to be registered already.
    pub fn add_item(&mut self, page: PageId, item: Item) -> Result<(), MenuError> {
        if let Some(next) = item.next_page() {
            if !self.contains(next) {
                return Err(MenuError::UnknownPage(next));
            }
        }

        self.get_mut(page)
            .ok_or(MenuError::UnknownPage(page))?
            .add_item(item)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Index<PageId> for PageRegistry {
    type Output = Page;

    /// # Panics
    ///
    /// Panics when `id` does not belong to this registry.
    fn index(&self, id: PageId) -> &Page {
        match self.get(id) {
            Some(page) => page,
            None => panic!("{:?} is not a page of this registry", id),
        }
    }
}
