use std::{
    collections::VecDeque,
    io::{self, Write},
};

pub const ESCAPE_CODE: char = '\x1b';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        match ch {
            ESCAPE_CODE => Key::Escape,
            ch => Key::Char(ch),
        }
    }
}

/// Terminal the menu is drawn on and reads its keys from.
pub trait Console {
    fn clear(&mut self) -> io::Result<()>;

    /// Blocks until a single key is pressed.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Reads a whole line, without the line ending.
    fn read_line(&mut self) -> io::Result<String>;

    fn output(&mut self) -> &mut dyn Write;

    fn wait(&mut self) -> io::Result<()> {
        write!(self.output(), "Press Enter to Continue...")?;
        self.output().flush()?;
        self.read_line().map(|_| ())
    }
}

/// Console fed from a prepared script, output is kept in memory.
///
/// Once the keys run out it reports [`Key::Escape`], so a menu run on it
/// always ends. Lines behave like a closed stdin and come back empty.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
    output: Vec<u8>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: impl IntoIterator<Item = impl Into<Key>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn push_key(&mut self, key: impl Into<Key>) {
        self.keys.push_back(key.into());
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn output_string(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Escape))
    }

    fn read_line(&mut self) -> io::Result<String> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
