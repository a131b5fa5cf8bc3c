//! Line-oriented interactive session
//!
//! Reads one command per line and maps it onto a [`FormAction`]. The session
//! owns the current [`FormState`] and replaces it after every action.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::form::{self, FormAction, FormState};
use crate::presets::PresetGallery;
use crate::report;

const HELP: &str = "\
Commands:
  values <list>       set the comma-separated values
  target <n>          set the target
  run                 trace the current input
  clear               clear inputs and results
  example <name|n>    load an example into the inputs
  examples            list examples
  show                show the current inputs
  learn               explain how binary search works
  help                show this help
  quit                leave the session";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Values(String),
    Target(String),
    Run,
    Clear,
    Example(String),
    Examples,
    Show,
    Learn,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "values" | "v" => Command::Values(rest.to_string()),
            "target" | "t" => Command::Target(rest.to_string()),
            "run" | "r" => Command::Run,
            "clear" => Command::Clear,
            "example" | "x" if !rest.is_empty() => Command::Example(rest.to_string()),
            "example" | "x" => return Err("usage: example <name|n>".to_string()),
            "examples" => Command::Examples,
            "show" => Command::Show,
            "learn" | "about" => Command::Learn,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("unknown command: {} (try 'help')", other)),
        };

        Ok(Some(command))
    }
}

/// Interactive session over a form
pub struct Session<'a> {
    state: FormState,
    gallery: &'a PresetGallery,
}

impl<'a> Session<'a> {
    /// Start a session with the default example loaded
    pub fn new(gallery: &'a PresetGallery) -> Self {
        Self {
            state: FormState::initial(),
            gallery,
        }
    }

    /// Current form state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Execute one command, writing any output
    ///
    /// Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        debug!(?command, "session command");

        match command {
            Command::Values(values) => self.dispatch(FormAction::SetValues(values)),
            Command::Target(target) => self.dispatch(FormAction::SetTarget(target)),
            Command::Run => {
                self.dispatch(FormAction::Run);
                let panels = &self.state.panels;
                writeln!(out, "{}", panels.steps)?;
                if !panels.stats.is_empty() {
                    writeln!(out, "{}", panels.stats)?;
                }
            }
            Command::Clear => {
                self.dispatch(FormAction::Clear);
                writeln!(out, "Cleared.")?;
            }
            Command::Example(key) => match self.gallery.find(&key) {
                Some(preset) => {
                    let preset = preset.clone();
                    writeln!(
                        out,
                        "Loaded {}: values [{}], target {}",
                        preset.name, preset.values, preset.target
                    )?;
                    self.dispatch(FormAction::Load(preset));
                }
                None => writeln!(out, "No example named {:?}", key)?,
            },
            Command::Examples => writeln!(out, "{}", self.gallery.listing())?,
            Command::Show => {
                writeln!(out, "values: {}", self.state.values)?;
                writeln!(out, "target: {}", self.state.target)?;
            }
            Command::Learn => write!(out, "{}", report::render_about())?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(out, "bintrace interactive session. Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(out, "> ")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command, out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(message) => writeln!(out, "{}", message)?,
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, action: FormAction) {
        self.state = form::apply(&self.state, action);
    }
}
