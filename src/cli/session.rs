//! Interactive form session
//!
//! Reads one command per line, turns it into at most one [`FormEvent`],
//! applies it, and renders the whole form again.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::services::{CalculatorService, FormEvent};
use crate::application::Labels;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::render_form;
use crate::domain::LineItemId;
use crate::infrastructure::InfraError;

pub const PROMPT: &str = "paysplit>";

pub const HELP: &str = "\
commands:
  add | a                  add a line item
  rm <row> | del <row>     delete a line item (row number or id)
  set <row> [amount]       set a line item in man-units (blank or invalid = 0)
  slide <value>            move the slider (0-10, steps of 0.5)
  adj [value]              type the adjustment in man-units (not limited to the slider)
  show                     redraw the form (also: empty line)
  help | ?                 this help
  quit | q | exit          leave";

/// Reference to a row as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    /// 1-based display position
    Position(usize),
    /// Full line item id
    Id(String),
}

impl RowRef {
    fn parse(token: &str) -> Self {
        match token.parse::<usize>() {
            Ok(position) => RowRef::Position(position),
            Err(_) => RowRef::Id(token.to_string()),
        }
    }
}

/// Parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add,
    Remove(RowRef),
    Set { row: RowRef, text: String },
    Slide(f64),
    Adjust(String),
    Show,
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse_command(line: &str) -> CliResult<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "" | "show" => Ok(Command::Show),
        "add" | "a" => Ok(Command::Add),
        "rm" | "del" => {
            if rest.is_empty() {
                return Err(CliError::InvalidArgs(format!("{verb}: missing row")));
            }
            Ok(Command::Remove(RowRef::parse(rest)))
        }
        "set" => {
            if rest.is_empty() {
                return Err(CliError::InvalidArgs("set: missing row".into()));
            }
            let (row, text) = match rest.split_once(char::is_whitespace) {
                Some((row, text)) => (row, text.trim()),
                None => (rest, ""),
            };
            Ok(Command::Set {
                row: RowRef::parse(row),
                text: text.to_string(),
            })
        }
        "slide" => {
            // unlike the fields, slider input is not coerced
            let value = rest
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CliError::InvalidArgs(format!("slide: not a number: {rest:?}")))?;
            Ok(Command::Slide(value))
        }
        "adj" => Ok(Command::Adjust(rest.to_string())),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CliError::Usage(format!(
            "unknown command: {other} (try 'help')"
        ))),
    }
}

/// One interactive session over a calculator service.
pub struct Session<'a> {
    service: CalculatorService,
    labels: &'a Labels,
}

impl<'a> Session<'a> {
    pub fn new(service: CalculatorService, labels: &'a Labels) -> Self {
        Self { service, labels }
    }

    pub fn service(&self) -> &CalculatorService {
        &self.service
    }

    /// End the session, keeping its final state.
    pub fn into_service(self) -> CalculatorService {
        self.service
    }

    /// Run until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        self.render(out)?;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line.map_err(|e| InfraError::io("read input", e))?;
            debug!("session: line={:?}", line);

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Help) => write_line(out, HELP)?,
                Ok(command) => match self.to_event(command) {
                    Ok(Some(event)) => {
                        self.service.apply(event);
                        self.render(out)?;
                    }
                    Ok(None) => self.render(out)?,
                    Err(e) if e.is_recoverable() => self.warn(out, &e)?,
                    Err(e) => return Err(e),
                },
                Err(e) if e.is_recoverable() => self.warn(out, &e)?,
                Err(e) => return Err(e),
            }
            self.prompt(out)?;
        }
        write_line(out, "")
    }

    /// Resolve row references against the current items.
    fn to_event(&self, command: Command) -> CliResult<Option<FormEvent>> {
        let event = match command {
            Command::Add => FormEvent::AddItem,
            Command::Remove(row) => FormEvent::RemoveItem(self.resolve(&row)?),
            Command::Set { row, text } => FormEvent::EditItem {
                id: self.resolve(&row)?,
                text,
            },
            Command::Slide(value) => FormEvent::SlideAdjustment(value),
            Command::Adjust(text) => FormEvent::EditAdjustment(text),
            Command::Show | Command::Help | Command::Quit => return Ok(None),
        };
        Ok(Some(event))
    }

    fn resolve(&self, row: &RowRef) -> CliResult<LineItemId> {
        let items = self.service.items();
        match row {
            RowRef::Position(position) => items
                .at_position(*position)
                .map(|item| item.id.clone())
                .ok_or_else(|| {
                    CliError::InvalidArgs(format!(
                        "no row {position} (rows 1-{})",
                        items.len()
                    ))
                }),
            RowRef::Id(id) => {
                let id = LineItemId::new(id.as_str());
                if items.contains(&id) {
                    Ok(id)
                } else {
                    Err(CliError::InvalidArgs(format!("no row with id {id}")))
                }
            }
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let view = self.service.view(self.labels);
        output::raw(out, &render_form(&view))?;
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W) -> CliResult<()> {
        output::prompt(out, PROMPT)?;
        Ok(())
    }

    fn warn<W: Write>(&self, out: &mut W, err: &CliError) -> CliResult<()> {
        debug!("session: rejected input: {}", err);
        output::warning(out, err)?;
        Ok(())
    }
}

fn write_line<W: Write>(out: &mut W, msg: &str) -> CliResult<()> {
    output::raw(out, &format!("{msg}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Command::Show)]
    #[case("  show ", Command::Show)]
    #[case("add", Command::Add)]
    #[case("A", Command::Add)]
    #[case("rm 2", Command::Remove(RowRef::Position(2)))]
    #[case("del abc", Command::Remove(RowRef::Id("abc".into())))]
    #[case("set 1 100", Command::Set { row: RowRef::Position(1), text: "100".into() })]
    #[case("set 1", Command::Set { row: RowRef::Position(1), text: String::new() })]
    #[case("set 1 twelve", Command::Set { row: RowRef::Position(1), text: "twelve".into() })]
    #[case("slide 3.5", Command::Slide(3.5))]
    #[case("adj 25", Command::Adjust("25".into()))]
    #[case("adj", Command::Adjust(String::new()))]
    #[case("?", Command::Help)]
    #[case("exit", Command::Quit)]
    fn test_parse_command(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(parse_command(line).unwrap(), expected);
    }

    #[rstest]
    #[case("rm")]
    #[case("set")]
    #[case("slide")]
    #[case("slide abc")]
    #[case("slide inf")]
    #[case("frobnicate")]
    fn test_parse_command_rejects(#[case] line: &str) {
        let err = parse_command(line).unwrap_err();
        assert!(err.is_recoverable(), "{err}");
    }
}
