// Chunk: docs/chunks/demo_host - Line-oriented demo host
//!
//! lite-complete demo host.
//!
//! Drives an [`AutocompleteEngine`] from line commands on stdin, the way a
//! page with one autocomplete input would drive it from DOM events:
//!
//! ```text
//! type <text>    raw input change (full text of the input)
//! wait <ms>      advance the virtual clock and fire the debounce timer
//! key <Name>     key press by DOM name or combo (ArrowDown, Enter, Shift+Tab, ...)
//! hover <n>      pointer over result n (1-based)
//! click <n>      click on result n (1-based)
//! focus | blur   input focus changes
//! erase          the erase button
//! show           print the view without doing anything
//! quit
//! ```
//!
//! Time is virtual: nothing happens between commands, so a script replays
//! identically. After each command the host prints the view and appends the
//! engine's events to its message log.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::Parser;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use lite_complete::{
    AutocompleteConfig, AutocompleteEngine, AutocompleteEvent, EngineOptions, EventReceiver, Handled,
    KeyEvent, ListViewport, PointerEventKind, DEFAULT_DEBOUNCE_MS, DEFAULT_ROW_HEIGHT,
};

/// Demo host command line arguments.
#[derive(Parser, Debug)]
#[command(name = "lite-complete")]
#[command(about = "Filter-as-you-type selector driven from stdin")]
struct Args {
    /// JSON configuration file (defaults to the Pizza/Burger/Kebab catalog)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet period before typed text is committed as the query
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Height of one result row
    #[arg(long, value_name = "UNITS", default_value_t = DEFAULT_ROW_HEIGHT)]
    row_height: f32,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => AutocompleteConfig::load(path)?,
        None => AutocompleteConfig::demo(),
    };
    info!(items = config.items.len(), "configuration loaded");

    let options = EngineOptions {
        debounce: Duration::from_millis(args.debounce_ms),
        row_height: args.row_height,
    };
    let mut host = Host::new(config, options);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    host.render(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                if let Err(err) = host.run(command) {
                    writeln!(out, "! {err}")?;
                }
            }
            Err(err) => writeln!(out, "! {err}")?,
        }
        host.render(&mut out)?;
    }

    host.teardown();
    Ok(())
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("lite_complete=trace,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Error, PartialEq)]
enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a number: {0}")]
    BadNumber(String),
    #[error("unknown key: {0}")]
    UnknownKey(String),
    #[error("no result #{0}")]
    NoSuchResult(usize),
}

#[derive(Debug, PartialEq)]
enum Command {
    Type(String),
    Wait(u64),
    Key(KeyEvent),
    Hover(usize),
    Click(usize),
    Focus,
    Blur,
    Erase,
    Show,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (line.trim(), None),
        };

        let arg = |name: &'static str| rest.map(str::trim).filter(|r| !r.is_empty()).ok_or(CommandError::MissingArgument(name));

        match verb {
            // The text after `type ` is taken verbatim, spaces included
            "type" => Ok(Command::Type(rest.unwrap_or_default().to_string())),
            "wait" => Ok(Command::Wait(parse_number(arg("wait")?)?)),
            "key" => {
                let name = arg("key")?;
                KeyEvent::from_name(name)
                    .map(Command::Key)
                    .ok_or_else(|| CommandError::UnknownKey(name.to_string()))
            }
            "hover" => Ok(Command::Hover(parse_number(arg("hover")?)?)),
            "click" => Ok(Command::Click(parse_number(arg("click")?)?)),
            "focus" => Ok(Command::Focus),
            "blur" => Ok(Command::Blur),
            "erase" => Ok(Command::Erase),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Parses a numeric argument at the width its command needs.
fn parse_number<T: FromStr>(raw: &str) -> Result<T, CommandError> {
    raw.parse().map_err(|_| CommandError::BadNumber(raw.to_string()))
}

// =============================================================================
// Host
// =============================================================================

/// The page around the engine: a virtual clock, a list viewport and a
/// message log.
struct Host {
    engine: AutocompleteEngine<Value>,
    events: EventReceiver<Value>,
    viewport: ListViewport,
    now: Instant,
    messages: Vec<String>,
}

impl Host {
    fn new(config: AutocompleteConfig<Value>, options: EngineOptions) -> Self {
        let max_rows = config.max_height_units.map(|units| units as usize);
        let (engine, events) = AutocompleteEngine::with_options(config, options);
        Self {
            engine,
            events,
            viewport: ListViewport::new(options.row_height, max_rows),
            now: Instant::now(),
            messages: Vec::new(),
        }
    }

    fn run(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Type(text) => self.engine.on_raw_input(&text, self.now),
            Command::Wait(ms) => {
                self.now += Duration::from_millis(ms);
                self.engine.poll(self.now);
            }
            Command::Key(event) => {
                if self.engine.on_key(&event) == Handled::No {
                    self.messages.push(format!("(key {:?} ignored)", event.key));
                }
            }
            Command::Hover(n) => {
                let id = self.result_id(n)?;
                self.engine.on_pointer(PointerEventKind::Hover, id);
            }
            Command::Click(n) => {
                let id = self.result_id(n)?;
                self.engine.on_pointer(PointerEventKind::Click, id);
            }
            Command::Focus => self.engine.on_focus(),
            Command::Blur => self.engine.on_blur(),
            Command::Erase => self.engine.erase(),
            Command::Show | Command::Quit => return Ok(()),
        }

        let row_count = self.engine.filtered_ids().len();
        self.viewport.update_row_count(row_count);
        self.viewport.apply(self.engine.scroll_signal(), row_count);
        self.drain_events();
        Ok(())
    }

    fn result_id(&self, n: usize) -> Result<lite_complete::ItemId, CommandError> {
        n.checked_sub(1)
            .and_then(|index| self.engine.filtered_ids().get(index).copied())
            .ok_or(CommandError::NoSuchResult(n))
    }

    fn drain_events(&mut self) {
        for event in self.events.drain() {
            let message = match event {
                AutocompleteEvent::ItemSelected(payload) => format!("Item selected : {payload}"),
                AutocompleteEvent::InputErased => "Value erased".to_string(),
            };
            self.messages.push(message);
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        let view = self.engine.view();
        let focus = if view.border_active { "*" } else { " " };
        if view.input_text.is_empty() {
            writeln!(out, "{focus}[ {} ]", view.placeholder)?;
        } else {
            writeln!(out, "{focus}[ {} ]", view.input_text)?;
        }

        if view.filtered.is_empty() {
            if view.query_too_short {
                writeln!(out, "    (keep typing)")?;
            } else {
                writeln!(out, "    (no results)")?;
            }
        }
        let range = self.viewport.visible_range(view.filtered.len());
        for (index, item) in view.filtered.iter().enumerate() {
            if !range.contains(&index) {
                continue;
            }
            let marker = if view.active_index == Some(index) { '>' } else { ' ' };
            writeln!(out, "  {marker} {}. {}", index + 1, item.name())?;
        }
        let hidden = view.filtered.len() - range.len();
        if hidden > 0 {
            writeln!(
                out,
                "    ({hidden} more, scrolled {}px)",
                self.viewport.scroll_offset_px()
            )?;
        }

        for message in &self.messages {
            writeln!(out, "  | {message}")?;
        }
        out.flush()
    }

    fn teardown(self) {
        self.engine.teardown();
    }
}
