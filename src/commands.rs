//! The fixed command table and input normalization.
//!
//! The command set is closed, so it is an enum plus a static registry that
//! `help` walks in order. Handlers write their output to whatever sink the
//! loop hands them, which keeps them testable without a terminal.

use crate::api::ApiClient;
use crate::error::PokedexResult;
use crate::session::Session;
use log::debug;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
}

/// Registry entry: what the user types and what `help` says about it.
#[derive(Debug)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub command: Command,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        description: "Displays a help message",
        command: Command::Help,
    },
    CommandInfo {
        name: "exit",
        description: "Exit the Pokedex",
        command: Command::Exit,
    },
    CommandInfo {
        name: "map",
        description: "Displays the next 20 location areas",
        command: Command::Map,
    },
    CommandInfo {
        name: "mapb",
        description: "Displays the previous 20 location areas",
        command: Command::MapBack,
    },
];

pub const GOODBYE: &str = "Closing the Pokedex... Goodbye!";

/// What the loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Result of resolving one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank or whitespace-only line.
    Empty,
    Unknown(String),
    Run(Command),
}

/// Lower-case the line and split it on runs of whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Resolve a raw line. Only the first word selects a command.
pub fn parse(line: &str) -> Dispatch {
    let words = clean_input(line);
    let Some((name, rest)) = words.split_first() else {
        return Dispatch::Empty;
    };
    if !rest.is_empty() {
        debug!("ignoring arguments {:?} to {}", rest, name);
    }
    match Command::lookup(name) {
        Some(command) => Dispatch::Run(command),
        None => Dispatch::Unknown(name.clone()),
    }
}

impl Command {
    pub fn lookup(name: &str) -> Option<Command> {
        COMMANDS
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
        }
    }

    /// Whether running this command issues a request.
    pub fn uses_network(self) -> bool {
        matches!(self, Command::Map | Command::MapBack)
    }

    pub fn run(self, session: &mut Session, api: &ApiClient, out: &mut dyn Write) -> PokedexResult<Flow> {
        match self {
            Command::Help => {
                write_help(out)?;
                Ok(Flow::Continue)
            }
            Command::Exit => {
                writeln!(out, "{}", GOODBYE)?;
                Ok(Flow::Exit)
            }
            Command::Map => {
                let names = session.fetch_next(api)?;
                write_names(out, &names)?;
                Ok(Flow::Continue)
            }
            Command::MapBack => {
                let names = session.fetch_previous(api)?;
                write_names(out, &names)?;
                Ok(Flow::Continue)
            }
        }
    }
}

fn write_help(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for info in COMMANDS {
        writeln!(out, "{}: {}", info.name, info.description)?;
    }
    writeln!(out)
}

fn write_names(out: &mut dyn Write, names: &[String]) -> std::io::Result<()> {
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_lowercases_and_splits() {
        assert_eq!(clean_input("  Hello  World "), vec!["hello", "world"]);
        assert_eq!(clean_input("MAP\tmapb\n"), vec!["map", "mapb"]);
        assert!(clean_input(" \t \n").is_empty());
    }

    #[test]
    fn padded_uppercase_resolves_like_plain() {
        assert_eq!(parse("  MAP  "), parse("map"));
        assert_eq!(parse("map"), Dispatch::Run(Command::Map));
        assert_eq!(parse("mapb extra words"), Dispatch::Run(Command::MapBack));
    }

    #[test]
    fn blank_lines_do_not_dispatch() {
        assert_eq!(parse(""), Dispatch::Empty);
        assert_eq!(parse("   \t  "), Dispatch::Empty);
    }

    #[test]
    fn unknown_names_are_reported_lowercased() {
        assert_eq!(parse("Fly away"), Dispatch::Unknown("fly".into()));
    }

    #[test]
    fn registry_round_trips_names() {
        for info in COMMANDS {
            assert_eq!(Command::lookup(info.name), Some(info.command));
            assert_eq!(info.command.name(), info.name);
        }
        assert!(!Command::Help.uses_network());
        assert!(Command::MapBack.uses_network());
    }

    #[test]
    fn help_lists_every_command_in_order() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nWelcome to the Pokedex!\nUsage:\n\n"));
        let lines: Vec<&str> = text.lines().filter(|l| l.contains(": ")).collect();
        assert_eq!(
            lines,
            vec![
                "help: Displays a help message",
                "exit: Exit the Pokedex",
                "map: Displays the next 20 location areas",
                "mapb: Displays the previous 20 location areas",
            ]
        );
    }
}
