use std::io::{self, Write};

use crate::{error::MenuError, item::Item, registry::PageId, render::BoxStyle};

pub const MAX_ITEMS_PER_PAGE: usize = 128;

/// Titled screen of the menu, owns its items in display order.
#[derive(Debug)]
pub struct Page {
    id: PageId,
    title: String,
    items: Vec<Item>,
    capacity: usize,
}

impl Page {
    pub(crate) fn new(id: PageId, title: impl Into<String>, capacity: usize) -> Self {
        Self {
            id,
            title: title.into(),
            items: Vec::new(),
            capacity,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Appends the item, the page becomes its owner.
    /// A full page rejects it and stays as it was. Links are checked by
    /// [`PageRegistry::add_item`](crate::PageRegistry::add_item), the only way in.
    pub(crate) fn add_item(&mut self, mut item: Item) -> Result<(), MenuError> {
        if self.is_full() {
            log::warn!(
                "Page '{}' already holds {} items, '{}' was not added",
                self.title,
                self.capacity,
                item.name()
            );
            return Err(MenuError::CapacityExceeded {
                title: self.title.clone(),
                capacity: self.capacity,
            });
        }

        item.set_page(self.id);
        self.items.push(item);
        Ok(())
    }

    /// First item with the given key, in insertion order.
    pub fn lookup(&self, key: char) -> Option<&Item> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn lines(&self, style: &BoxStyle) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.items.len() + 4);

        lines.push(style.whole_line());
        lines.push(style.title_line(&self.title));
        lines.push(style.whole_line());

        lines.extend(
            self.items
                .iter()
                .map(|item| style.item_line(item.key(), item.name())),
        );

        lines.push(style.whole_line());
        lines
    }

    pub fn render(&self, out: &mut dyn Write, style: &BoxStyle) -> io::Result<()> {
        for line in self.lines(style) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
