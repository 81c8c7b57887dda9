use std::io::{self, Write};

use crate::{
    console::{Console, Key},
    error::MenuError,
    page::Page,
    registry::{PageId, PageRegistry},
    render::BoxStyle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An item was selected and the menu moved to its next page.
    Moved(PageId),
    Stay,
    Quit,
}

/// Walks the page graph of a [`PageRegistry`]: draws the current page,
/// reads a key, runs the selected item's callback and then moves on.
pub struct Navigator<'r> {
    registry: &'r PageRegistry,
    current: PageId,
    style: BoxStyle,
    clear_screen: bool,
}

impl<'r> Navigator<'r> {
    pub fn new(registry: &'r PageRegistry, start: PageId) -> Result<Self, MenuError> {
        if !registry.contains(start) {
            return Err(MenuError::UnknownPage(start));
        }

        Ok(Self {
            registry,
            current: start,
            style: BoxStyle::default(),
            clear_screen: true,
        })
    }

    pub fn style(mut self, value: BoxStyle) -> Self {
        self.style = value;
        self
    }

    pub fn clear_screen(mut self, value: bool) -> Self {
        self.clear_screen = value;
        self
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn current_page(&self) -> Result<&'r Page, MenuError> {
        self.registry
            .get(self.current)
            .ok_or(MenuError::UnknownPage(self.current))
    }

    /// Handles a single key.
    ///
    /// Escape quits, unknown keys keep the current page. A selected item gets
    /// its callback run first and only then the menu moves to its next page,
    /// items without one keep the menu where it is.
    pub fn step(&mut self, key: Key, console: &mut dyn Console) -> Result<Step, MenuError> {
        let ch = match key {
            Key::Escape => return Ok(Step::Quit),
            Key::Char(ch) => ch,
            Key::Other => return Ok(Step::Stay),
        };

        let page = self.current_page()?;
        let Some(item) = page.lookup(ch) else {
            log::trace!("No item for {:?} on '{}'", ch, page.title());
            return Ok(Step::Stay);
        };

        log::debug!("Selected '{}' on '{}'", item.name(), page.title());
        item.invoke_callback(console);

        match item.next_page() {
            Some(next) if !self.registry.contains(next) => Err(MenuError::UnknownPage(next)),
            Some(next) => {
                self.current = next;
                Ok(Step::Moved(next))
            }
            None => Ok(Step::Stay),
        }
    }

    /// Repaints the whole current page.
    pub fn draw(&self, console: &mut dyn Console) -> Result<(), MenuError> {
        let page = self.current_page()?;
        if self.clear_screen {
            console.clear()?;
        }

        page.render(console.output(), &self.style)?;
        console.output().flush()?;
        Ok(())
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<(), MenuError> {
        self.run_with(console, |_| Ok(()))
    }

    /// Same as [`Navigator::run`], `after_draw` can add its own lines below
    /// every drawn page.
    pub fn run_with<F>(
        &mut self,
        console: &mut dyn Console,
        mut after_draw: F,
    ) -> Result<(), MenuError>
    where
        F: FnMut(&mut dyn Write) -> io::Result<()>,
    {
        loop {
            self.draw(console)?;
            after_draw(console.output())?;
            console.output().flush()?;

            let key = console.read_key()?;
            if self.step(key, console)? == Step::Quit {
                log::debug!("Leaving menu from '{}'", self.current_page()?.title());
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{Navigator, Step};
    use crate::{
        console::{Console, Key, ScriptedConsole},
        error::MenuError,
        item::Item,
        registry::{PageId, PageRegistry},
        render::BoxStyle,
    };

    fn ping_pong() -> (PageRegistry, PageId, PageId) {
        let mut reg = PageRegistry::new();
        let a = reg.add_page("A");
        let b = reg.add_page("B");
        reg.add_item(a, Item::new("Go", '0').next(b)).unwrap();
        reg.add_item(b, Item::new("Back", '0').next(a)).unwrap();
        (reg, a, b)
    }

    #[test]
    fn moves_between_pages() {
        let (reg, a, b) = ping_pong();
        let mut console = ScriptedConsole::new();
        let mut nav = Navigator::new(&reg, a).unwrap();

        assert_eq!(nav.step(Key::Char('0'), &mut console).unwrap(), Step::Moved(b));
        assert_eq!(nav.current(), b);
        assert_eq!(nav.step(Key::Char('0'), &mut console).unwrap(), Step::Moved(a));
        assert_eq!(nav.current(), a);
        assert_eq!(nav.step(Key::Char('z'), &mut console).unwrap(), Step::Stay);
        assert_eq!(nav.current(), a);
        assert_eq!(nav.step(Key::Other, &mut console).unwrap(), Step::Stay);
        assert_eq!(nav.current(), a);
    }

    #[test]
    fn callback_runs_before_staying() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut reg = PageRegistry::new();
        let page = reg.add_page("Log");
        let sink = log.clone();
        reg.add_item(
            page,
            Item::new("Append", 'x')
                .next(page)
                .callback(move |_, _| sink.borrow_mut().push("X")),
        )
        .unwrap();

        let mut console = ScriptedConsole::new();
        let mut nav = Navigator::new(&reg, page).unwrap();

        assert_eq!(nav.step(Key::Char('x'), &mut console).unwrap(), Step::Moved(page));
        assert_eq!(*log.borrow(), vec!["X"]);
        assert_eq!(nav.current(), page);
    }

    #[test]
    fn callback_sees_page_before_move() {
        let (mut reg, a, b) = ping_pong();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        reg.add_item(
            a,
            Item::new("Jump", '1')
                .next(b)
                .callback(move |item, console| {
                    *sink.borrow_mut() = item.page();
                    let _ = write!(console.output(), "jumping");
                }),
        )
        .unwrap();

        let mut console = ScriptedConsole::new();
        let mut nav = Navigator::new(&reg, a).unwrap();
        assert_eq!(nav.step(Key::Char('1'), &mut console).unwrap(), Step::Moved(b));
        assert_eq!(*seen.borrow(), Some(a));
        assert_eq!(console.output_string(), "jumping");
    }

    #[test]
    fn item_without_next_page_stays() {
        let mut reg = PageRegistry::new();
        let page = reg.add_page("Only");
        reg.add_item(page, Item::new("Nowhere", 'n')).unwrap();

        let mut console = ScriptedConsole::new();
        let mut nav = Navigator::new(&reg, page).unwrap();
        assert_eq!(nav.step(Key::Char('n'), &mut console).unwrap(), Step::Stay);
        assert_eq!(nav.current(), page);
    }

    #[test]
    fn escape_always_quits() {
        let mut reg = PageRegistry::new();
        let page = reg.add_page("Esc");
        // even an item bound to the escape code can't catch it
        reg.add_item(page, Item::new("Trap", '\x1b').next(page)).unwrap();

        let mut console = ScriptedConsole::new();
        console.push_key('\x1b');
        let mut nav = Navigator::new(&reg, page).unwrap();
        let key = console.read_key().unwrap();
        assert_eq!(nav.step(key, &mut console).unwrap(), Step::Quit);
    }

    #[test]
    fn unknown_start_page() {
        let (other, _, foreign) = ping_pong();
        let reg = PageRegistry::new();
        assert!(matches!(
            Navigator::new(&reg, foreign),
            Err(MenuError::UnknownPage(id)) if id == foreign
        ));
        assert!(other.contains(foreign));
    }

    #[test]
    fn foreign_pages_never_reach_the_navigator() {
        let (other, _, foreign) = ping_pong();
        let (mut reg, a, _) = ping_pong();

        // same index as `foreign`, but a different registry
        assert!(reg
            .add_item(a, Item::new("Elsewhere", '9').next(foreign))
            .is_err());
        assert!(Navigator::new(&reg, foreign).is_err());

        let mut console = ScriptedConsole::with_keys(['9', '0', '\x1b']);
        let mut nav = Navigator::new(&reg, a).unwrap();
        nav.run(&mut console).unwrap();
        assert_ne!(nav.current(), foreign);
        assert_eq!(other[foreign].title(), "B");
    }

    #[test]
    fn run_until_escape() {
        let (reg, a, b) = ping_pong();
        let mut console = ScriptedConsole::with_keys(['0', 'z', '0', '0', '\x1b', '0']);
        let mut nav = Navigator::new(&reg, a)
            .unwrap()
            .style(BoxStyle::new(12, '#'));

        nav.run(&mut console).unwrap();

        assert_eq!(nav.current(), b);
        assert_eq!(console.remaining_keys(), 1);
        assert_eq!(console.clears(), 5);

        let output = console.output_string();
        assert_eq!(output.matches("#    A     #").count(), 2);
        assert_eq!(output.matches("#    B     #").count(), 3);
        assert!(output.lines().all(|line| line.chars().count() == 12));
    }

    #[test]
    fn run_with_footer() {
        let (reg, a, _) = ping_pong();
        let mut console = ScriptedConsole::new();
        let mut nav = Navigator::new(&reg, a).unwrap().clear_screen(false);

        nav.run_with(&mut console, |out| writeln!(out, "footer"))
            .unwrap();

        assert_eq!(console.clears(), 0);
        assert!(console.output_string().ends_with("footer\n"));
    }
}
