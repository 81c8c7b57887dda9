use std::io;

use thiserror::Error;

use crate::registry::PageId;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Page '{title}' is full, it can hold at most {capacity} items")]
    CapacityExceeded { title: String, capacity: usize },
    #[error("Unknown page: {0:?}")]
    UnknownPage(PageId),
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
}
