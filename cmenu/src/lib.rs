pub mod console;
pub mod error;
pub mod item;
pub mod navigator;
pub mod page;
pub mod registry;
pub mod render;

pub use console::{Console, Key, ScriptedConsole};
pub use error::MenuError;
pub use item::{Callback, Item};
pub use navigator::{Navigator, Step};
pub use page::{Page, MAX_ITEMS_PER_PAGE};
pub use registry::{PageId, PageRegistry};
pub use render::BoxStyle;
