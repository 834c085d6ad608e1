use crate::app::desk::OrderDesk;
use crate::domain::ports::NotificationSink;
use crate::utils::error::{DeskError, Result};
use std::io::BufRead;
use std::sync::Arc;

pub const HELP: &str = "\
Commands:
  place <tier> <items>   place an order, e.g. `place express Pizza, Coke`
  cancel                 cancel the most recent order
  undo                   undo the most recent place
  help                   show this message
  quit                   leave the session";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskCommand {
    Place { tier: String, items: String },
    Cancel,
    Undo,
    Help,
    Quit,
}

impl DeskCommand {
    /// Parses a line. Blank lines and `#` comments give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = split_word(line);
        let command = match word {
            "place" => {
                let (tier, items) = split_word(rest);
                DeskCommand::Place {
                    tier: tier.to_string(),
                    items: items.to_string(),
                }
            }
            "cancel" => DeskCommand::Cancel,
            "undo" => DeskCommand::Undo,
            "help" => DeskCommand::Help,
            "quit" | "exit" => DeskCommand::Quit,
            _ => {
                return Err(DeskError::InvalidCommandError {
                    line: line.to_string(),
                    reason: format!("unknown command '{}'", word),
                })
            }
        };
        Ok(Some(command))
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub placed: usize,
    pub canceled: usize,
    pub undone: usize,
    pub skipped: usize,
}

/// Feeds commands from a reader into the desk until EOF or `quit`. The
/// display sink only carries session output such as `help`.
pub struct Session {
    desk: OrderDesk,
    display: Arc<dyn NotificationSink>,
}

impl Session {
    pub fn new(desk: OrderDesk, display: Arc<dyn NotificationSink>) -> Self {
        Self { desk, display }
    }

    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for raw in reader.split(b'\n') {
            let raw = raw?;
            // Undecodable bytes become U+FFFD instead of ending the session
            let line = String::from_utf8_lossy(&raw);
            let command = match DeskCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!("⚠️ {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };

            match command {
                DeskCommand::Place { tier, items } => {
                    self.desk.on_place_order_triggered(&items, &tier);
                    summary.placed += 1;
                }
                DeskCommand::Cancel => {
                    if self.desk.on_cancel_order_triggered().is_some() {
                        summary.canceled += 1;
                    }
                }
                DeskCommand::Undo => {
                    if self.desk.on_undo_triggered().is_some() {
                        summary.undone += 1;
                    }
                }
                DeskCommand::Help => self.display.render_notification(HELP),
                DeskCommand::Quit => break,
            }
        }

        tracing::debug!("Session finished: {:?}", summary);
        Ok(summary)
    }
}
