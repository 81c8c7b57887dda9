use std::{
    io::{self, Write},
    sync::{Mutex, MutexGuard, OnceLock, PoisonError, RwLock},
    time::{Duration, Instant},
};

use crossterm::style::{Color, Stylize};
use log::{Log, Metadata, Record};
use pad::{Alignment, PadStr};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

const DEFAULT_DECAY: Duration = Duration::from_secs(5);
const DEFAULT_MAX_VISIBLE: usize = 5;
const INDICATOR_CHAR: char = '|';

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| {
        AppLogger::new(log::Level::Warn, DEFAULT_DECAY, DEFAULT_MAX_VISIBLE)
    })
}

pub fn init(level: log::Level) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Message {
    pub level: log::Level,
    pub pushed: Instant,
    pub message: String,
    pub source: String,
}

struct Logs {
    logs: [Vec<Message>; 5], // there are 5 levels
}

impl Logs {
    fn push(&mut self, message: Message) {
        self.logs[message.level as usize - 1].insert(0, message);
    }

    fn clear_old(&mut self, decay: Duration) {
        let now = Instant::now();
        for level in self.logs.iter_mut() {
            level.retain(|msg| now.duration_since(msg.pushed) < decay);
        }
    }
}

/// Keeps recent log messages in memory so they can be shown under the menu.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
    pub decay: Duration,
    pub max_visible: usize,
    logs: Mutex<Logs>,
}

impl AppLogger {
    pub fn new(min_level: log::Level, decay: Duration, max_visible: usize) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            decay,
            max_visible,
            logs: Mutex::new(Logs {
                logs: Default::default(),
            }),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    // a panicking writer can only lose us a message, keep going
    fn borrow_mut_logs(&self) -> MutexGuard<'_, Logs> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages younger than the decay time, most severe first and newest
    /// first within a level.
    pub fn get_logs(&self) -> Vec<Message> {
        let mut logs = self.borrow_mut_logs();
        logs.clear_old(self.decay);

        logs.logs
            .iter()
            .flatten()
            .take(self.max_visible)
            .cloned()
            .collect()
    }

    #[cfg(test)]
    fn stored(&self) -> usize {
        self.borrow_mut_logs().logs.iter().map(Vec::len).sum()
    }

    /// Writes the visible messages right aligned to `width`, one per line.
    pub fn write_visible(&self, out: &mut dyn Write, width: usize) -> io::Result<()> {
        for log in self.get_logs() {
            let color = match log.level {
                log::Level::Error => Color::Red,
                log::Level::Warn => Color::Yellow,
                log::Level::Info => Color::White,
                log::Level::Debug => Color::Blue,
                log::Level::Trace => Color::Grey,
            };

            let text = format!("{} -> {}", log.source, log.message);
            let text = text.pad_to_width_with_alignment(width.saturating_sub(2), Alignment::Right);
            writeln!(out, "{text} {}", INDICATOR_CHAR.with(color))?;
        }
        Ok(())
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut logs = self.borrow_mut_logs();
            logs.clear_old(self.decay);
            logs.push(Message {
                level: record.level(),
                pushed: Instant::now(),
                message: record.args().to_string(),
                source: record.module_path().unwrap_or("unknown").to_string(),
            });
        }
    }

    fn flush(&self) {}
}
