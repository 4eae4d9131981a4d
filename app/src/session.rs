// In app/src/session.rs

use crate::render::{Renderer, risk_label};
use anyhow::Result;
use clap::{Parser, Subcommand};
use events::JournalEvent;
use journal::{EntrySettings, TradeEntry, TradeStore};
use risk::ThresholdClassifier;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

// --- Interactive Command Definition ---

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Records a new trade.
    Add {
        /// The ticker symbol. Left blank, the configured policy applies.
        #[arg(short, long, default_value = "")]
        ticker: String,

        /// The entry price ("trade value here").
        #[arg(allow_negative_numbers = true)]
        tvh: String,

        /// The stop-loss price.
        #[arg(allow_negative_numbers = true)]
        sl: String,
    },

    /// Shows all trades with their risk.
    List,

    /// Deletes the trades at the given positions, as shown by `list`.
    Delete {
        #[arg(required = true)]
        positions: Vec<usize>,
    },

    /// Shows the journal summary.
    Total,

    /// Ends the session.
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading commands.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One run of the journal: a store that lives exactly as long as the session.
pub struct Session {
    store: TradeStore,
    entry: EntrySettings,
    classifier: ThresholdClassifier,
    color: bool,
    /// JSON lines of journal events not yet written out; `None` when disabled.
    pending_events: Option<Rc<RefCell<Vec<String>>>>,
}

impl Session {
    pub fn new(entry: EntrySettings, classifier: ThresholdClassifier, color: bool) -> Self {
        Self {
            store: TradeStore::new(),
            entry,
            classifier,
            color,
            pending_events: None,
        }
    }

    /// Echo every journal event as one JSON line after the command that caused it.
    pub fn with_json_events(mut self) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        self.store.subscribe(move |event: &JournalEvent| match serde_json::to_string(event) {
            Ok(line) => sink.borrow_mut().push(line),
            Err(err) => tracing::error!("Failed to serialize journal event: {}", err),
        });
        self.pending_events = Some(pending);
        self
    }

    pub fn store(&self) -> &TradeStore {
        &self.store
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buffer) else {
                tracing::warn!("Skipped an input line that is not valid UTF-8");
                writeln!(output, "Input is not valid UTF-8; line ignored")?;
                continue;
            };
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let flow = self.execute(&words, &mut output)?;
            self.flush_events(&mut output)?;
            if flow == Flow::Quit {
                break;
            }
        }
        output.flush()?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, words: &[&str], output: &mut W) -> Result<Flow> {
        let command = match CommandLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                // Covers `help` as well as usage mistakes.
                write!(output, "{}", err.render())?;
                return Ok(Flow::Continue);
            }
        };

        let renderer = Renderer::new(&self.classifier, self.color);
        match command {
            Command::Add { ticker, tvh, sl } => {
                match TradeEntry::new(ticker, tvh, sl).into_trade(&self.entry) {
                    Ok(trade) => {
                        let position = self.store.len() + 1;
                        writeln!(output, "{}", renderer.row(position, &trade))?;
                        self.store.add_trade(trade);
                    }
                    Err(err) => writeln!(output, "Trade not saved: {}", err)?,
                }
            }
            Command::List => {
                for line in renderer.table(self.store.trades(), self.store.total_risk()) {
                    writeln!(output, "{}", line)?;
                }
            }
            Command::Delete { positions } => {
                if positions.contains(&0) {
                    writeln!(output, "Positions start at 1")?;
                    return Ok(Flow::Continue);
                }
                match self.store.delete_trades(positions.iter().map(|p| p - 1)) {
                    Ok(removed) => writeln!(
                        output,
                        "Deleted {} trade(s). Total risk: {}",
                        removed.len(),
                        risk_label(self.store.total_risk())
                    )?,
                    Err(journal::Error::IndexOutOfRange { index, len }) => writeln!(
                        output,
                        "No trade at position {} (journal has {} trades). Nothing deleted.",
                        index + 1,
                        len
                    )?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
            Command::Total => {
                writeln!(output, "{}", renderer.summary(&self.store.summary(&self.classifier)))?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn flush_events<W: Write>(&self, output: &mut W) -> Result<()> {
        if let Some(pending) = &self.pending_events {
            for line in pending.borrow_mut().drain(..) {
                writeln!(output, "{}", line)?;
            }
        }
        Ok(())
    }
}
