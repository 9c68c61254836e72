//! Line-oriented presentation state
//!
//! Owns what a graphical console would keep in its widgets: whether the log
//! panel and command list are shown, the pre-filled input line, and how far
//! into the log the panel has already drawn.

use std::io::{self, Write};

use devcon_core::{CommandManager, LogEntry};

/// What the host should do with one line from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Submit this text to the console
    Submit(String),
    /// Only the view changed; redraw
    Redraw,
    /// Print a message to the user and carry on
    Notice(String),
    Quit,
}

#[derive(Debug)]
pub struct ConsoleView {
    show_log: bool,
    show_commands: bool,
    prefill: Option<String>,
    log_cursor: u64,
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self {
            show_log: true,
            show_commands: false,
            prefill: None,
            log_cursor: 0,
        }
    }
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret one committed line
    ///
    /// Lines starting with `:` drive the view (`:trace`, `:cmd`, `:fill N`,
    /// `:quit`). An empty line submits the pre-filled input, if any; any
    /// other line is submitted as typed.
    pub fn handle_line(&mut self, line: &str, manager: &CommandManager) -> ViewAction {
        let mut words = line.split_whitespace();
        match words.next() {
            Some(":trace") => {
                self.show_log = !self.show_log;
                ViewAction::Redraw
            }
            Some(":cmd") => {
                self.show_commands = !self.show_commands;
                ViewAction::Redraw
            }
            Some(":fill") => {
                let index = words.next().and_then(|w| w.parse::<usize>().ok());
                match index.and_then(|i| manager.invocation_template(i)) {
                    Some(template) => {
                        self.prefill = Some(template.clone());
                        ViewAction::Notice(format!("> {}", template))
                    }
                    None => ViewAction::Notice(format!(
                        "usage: :fill N (0..{})",
                        manager.catalog().len()
                    )),
                }
            }
            Some(":quit") | Some(":q") => ViewAction::Quit,
            _ if line.is_empty() => match self.prefill.take() {
                Some(text) => ViewAction::Submit(text),
                None => ViewAction::Redraw,
            },
            _ => {
                self.prefill = None;
                ViewAction::Submit(line.to_string())
            }
        }
    }

    /// Draw new log entries and the command list, as toggled
    pub fn draw<W: Write>(&mut self, out: &mut W, manager: &CommandManager) -> io::Result<()> {
        let sink = manager.log_sink();
        if self.show_log && sink.has_pending_updates() {
            for entry in sink.entries_since(self.log_cursor) {
                writeln!(out, "{}", format_entry(&entry))?;
                self.log_cursor = entry.seq + 1;
            }
            sink.acknowledge_updates();
        }

        if self.show_commands {
            for line in manager.catalog().listing() {
                writeln!(out, "  {}", line)?;
            }
        }
        Ok(())
    }
}

fn format_entry(entry: &LogEntry) -> String {
    format!(
        "[{}:{}] {}",
        entry.severity,
        entry.style().color_name(),
        entry.text
    )
}
