use std::io::{self, Stdout, Write};

use cmenu::{Console, Key};
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};

/// Raw mode for as long as it lives, so single key presses come through
/// without waiting for enter.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Failed to leave raw mode: {}", err);
        }
    }
}

pub fn key_from_event(code: KeyCode, modifiers: KeyModifiers) -> Key {
    match code {
        KeyCode::Esc => Key::Escape,
        // raw mode swallows the signal, treat it as escape
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Escape,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Char('\n'),
        KeyCode::Tab => Key::Char('\t'),
        _ => Key::Other,
    }
}

/// Console on the real terminal, output goes to stdout.
pub struct CrosstermConsole {
    stdout: Stdout,
}

impl CrosstermConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for CrosstermConsole {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let _raw = RawMode::enable()?;

        loop {
            if let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            }) = event::read()?
            {
                return Ok(key_from_event(code, modifiers));
            }
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.stdout.flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

#[cfg(test)]
mod tests {
    use cmenu::Key;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::key_from_event;

    #[test]
    fn maps_keys() {
        assert_eq!(key_from_event(KeyCode::Esc, KeyModifiers::NONE), Key::Escape);
        assert_eq!(
            key_from_event(KeyCode::Char('5'), KeyModifiers::NONE),
            Key::Char('5')
        );
        assert_eq!(
            key_from_event(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Key::Escape
        );
        assert_eq!(
            key_from_event(KeyCode::Char('c'), KeyModifiers::NONE),
            Key::Char('c')
        );
        assert_eq!(key_from_event(KeyCode::Up, KeyModifiers::NONE), Key::Other);
    }
}
