// UI layer: the prompt loop. Reads a line, resolves it against the command
// table, runs the command against the session and prints whatever came
// back. Errors are printed as one line and the loop carries on.

use crate::api::ApiClient;
use crate::commands::{parse, Command, Dispatch, Flow, GOODBYE};
use crate::error::PokedexResult;
use crate::session::Session;
use anyhow::Result;
use crossterm::style::Stylize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

pub const PROMPT: &str = "Pokedex > ";
const INPUT_LABEL: &str = "Pokedex";

/// Where input lines come from. `None` means end of input.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Keyboard input through `dialoguer`, used when stdin is a terminal.
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn next_line(&mut self) -> Result<Option<String>> {
        // dialoguer appends its own ": " separator to the prompt.
        let line = Input::<String>::new()
            .with_prompt(INPUT_LABEL)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(line))
    }
}

/// Plain buffered reads, used for piped scripts and in tests.
pub struct PipedInput<R> {
    reader: R,
    echo_prompt: bool,
}

impl<R: BufRead> PipedInput<R> {
    /// Writes `PROMPT` to stdout before every read.
    pub fn new(reader: R) -> Self {
        PipedInput {
            reader,
            echo_prompt: true,
        }
    }

    pub fn without_prompt(reader: R) -> Self {
        PipedInput {
            reader,
            echo_prompt: false,
        }
    }
}

impl<R: BufRead> LineSource for PipedInput<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        if self.echo_prompt {
            let mut stdout = io::stdout();
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// One REPL run: the client, the cursors, and how chatty the terminal
/// side should be.
pub struct Repl {
    api: ApiClient,
    session: Session,
    spinner: bool,
    color: bool,
}

impl Repl {
    /// Quiet loop: no spinner, no colors. What tests and pipes get.
    pub fn new(api: ApiClient, session: Session) -> Self {
        Repl {
            api,
            session,
            spinner: false,
            color: false,
        }
    }

    /// Turn on the spinner and colored errors when stdout is a terminal.
    pub fn interactive(mut self) -> Self {
        let tty = io::stdout().is_terminal();
        self.spinner = tty;
        self.color = tty;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolve and run one raw line. Blank lines do nothing; unknown
    /// commands print a notice and leave the session alone.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> PokedexResult<Flow> {
        match parse(line) {
            Dispatch::Empty => Ok(Flow::Continue),
            Dispatch::Unknown(name) => {
                debug!("unknown command {:?}", name);
                writeln!(out, "Unknown command")?;
                Ok(Flow::Continue)
            }
            Dispatch::Run(command) => self.run_command(command, out),
        }
    }

    fn run_command(&mut self, command: Command, out: &mut dyn Write) -> PokedexResult<Flow> {
        debug!("running {}", command.name());
        if !(self.spinner && command.uses_network()) {
            return command.run(&mut self.session, &self.api, out);
        }

        // Buffer the output so the spinner is gone before anything prints.
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Fetching...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        let mut buffered = Vec::new();
        let result = command.run(&mut self.session, &self.api, &mut buffered);
        spinner.finish_and_clear();
        out.write_all(&buffered)?;
        result
    }

    /// Read lines until `exit` or end of input. Command errors are printed
    /// and swallowed; only failures to read input or write output bubble up.
    pub fn run(&mut self, input: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        loop {
            let Some(line) = input.next_line()? else {
                debug!("end of input");
                writeln!(out, "{}", GOODBYE)?;
                break;
            };
            match self.handle_line(&line, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    if !e.is_navigation() {
                        debug!("{} failed: {:?}", line.trim(), e);
                    }
                    if self.color {
                        writeln!(out, "{}", e.to_string().red())?;
                    } else {
                        writeln!(out, "{}", e)?;
                    }
                }
            }
            out.flush()?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Main interactive loop on the process's own stdin/stdout. Blocks until
/// the user exits or input ends.
pub fn main_menu(api: ApiClient, session: Session) -> Result<()> {
    let mut repl = Repl::new(api, session).interactive();
    let mut stdout = io::stdout();
    if io::stdin().is_terminal() {
        repl.run(&mut TerminalInput, &mut stdout)
    } else {
        let mut input = PipedInput::new(io::stdin().lock());
        repl.run(&mut input, &mut stdout)
    }
}
