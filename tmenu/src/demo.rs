//! Demo application, three pages showing navigation, printing and a small
//! calculation.
//!
//! ```text
//! Main Page ── 0 ──> Page1 ── 0 ──> Main Page
//!     │                ├─ 1 ──> prints "hello world!"
//!     │                └─ 2 ──> prints "Good morning!"
//!     └─────── 1 ──> Page2 ── 0 ──> Main Page
//!                      └─ 5 ──> adds two numbers
//! ```

use std::io;

use cmenu::{Console, Item, MenuError, Navigator, PageId, PageRegistry};

use crate::{logging, settings::Settings, AppError};

pub struct Application {
    registry: PageRegistry,
    main_page: PageId,
    page1: PageId,
    page2: PageId,
}

impl Application {
    pub fn new() -> Result<Self, MenuError> {
        let mut registry = PageRegistry::new();
        let main_page = registry.add_page("Main Page");
        let page1 = registry.add_page("Page1");
        let page2 = registry.add_page("Page2");

        registry.add_item(main_page, Item::new("Switch to Page1", '0').next(page1))?;
        registry.add_item(main_page, Item::new("Switch to Page2", '1').next(page2))?;

        registry.add_item(page1, Item::new("Back to Previous Page", '0').next(main_page))?;
        registry.add_item(
            page1,
            Item::new("Print str1", '1')
                .next(page1)
                .callback(|_, console| print_and_wait(console, "hello world!")),
        )?;
        registry.add_item(
            page1,
            Item::new("Print str2", '2')
                .next(page1)
                .callback(|_, console| print_and_wait(console, "Good morning!")),
        )?;

        registry.add_item(page2, Item::new("Back to Previous Page", '0').next(main_page))?;
        registry.add_item(
            page2,
            Item::new("Calculate Addition", '5')
                .next(page2)
                .callback(|_, console| report(addition(console))),
        )?;

        Ok(Self {
            registry,
            main_page,
            page1,
            page2,
        })
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn main_page(&self) -> PageId {
        self.main_page
    }

    pub fn page1(&self) -> PageId {
        self.page1
    }

    pub fn page2(&self) -> PageId {
        self.page2
    }

    pub fn navigator(&self, settings: &Settings) -> Result<Navigator<'_>, MenuError> {
        Ok(Navigator::new(&self.registry, self.main_page)?
            .style(settings.box_style())
            .clear_screen(settings.get_clear_screen()))
    }

    /// Runs the menu until escape is pressed.
    pub fn run(&self, console: &mut dyn Console, settings: &Settings) -> Result<(), AppError> {
        let mut navigator = self.navigator(settings)?;

        if settings.get_show_logs() {
            let width = settings.get_width();
            navigator.run_with(console, |out| {
                logging::get_logger().write_visible(out, width)
            })?;
        } else {
            navigator.run(console)?;
        }

        writeln!(console.output(), "Exiting...")?;
        console.output().flush()?;
        Ok(())
    }
}

fn report(res: io::Result<()>) {
    if let Err(err) = res {
        log::warn!("Console failed in callback: {}", err);
    }
}

fn print_and_wait(console: &mut dyn Console, text: &str) {
    report(writeln!(console.output(), "{text}").and_then(|_| console.wait()));
}

fn addition(console: &mut dyn Console) -> io::Result<()> {
    writeln!(console.output(), "input 'a, b' to calculate a + b")?;
    let line = console.read_line()?;

    match parse_pair(&line) {
        Some((a, b)) => writeln!(console.output(), "a + b = {}", a + b)?,
        None => {
            log::info!("Could not read two numbers from {:?}", line);
            writeln!(console.output(), "expected two numbers like '1.5, 2'")?;
        }
    }

    console.wait()
}

/// Parses `"a, b"` into two numbers.
pub fn parse_pair(input: &str) -> Option<(f32, f32)> {
    let (a, b) = input.split_once(',')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}
