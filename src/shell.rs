//! Line-oriented command shell
//!
//! Reads one command per line and drives a [`Session`]. Output (printed
//! text, status lines, warnings and errors) goes to the writer so the shell
//! can be scripted and tested with in-memory buffers.
//!
//! ```text
//! insert Hello,\nworld
//! select 1:1
//! cut
//! print
//! save-as notes.txt
//! quit
//! ```

use std::fmt;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use encoding_rs::Encoding;

use crate::editable::{EditCommand, MoveTarget, Position};
use crate::session::Session;

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Forwarded to the editing engine
    Edit(EditCommand),
    New { force: bool },
    Open {
        path: PathBuf,
        force: bool,
        /// Decode with this encoding instead of UTF-8 then GBK
        encoding: Option<&'static Encoding>,
    },
    Save,
    SaveAs(PathBuf),
    Print,
    Status,
    Quit { force: bool },
    Help,
}

/// Errors from parsing a shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidPosition(String),
    UnknownTarget(String),
    InvalidEscape(String),
    UnknownEncoding(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command '{}' (try 'help')", cmd),
            Self::MissingArgument(what) => write!(f, "missing argument: {}", what),
            Self::InvalidPosition(pos) => {
                write!(f, "invalid position '{}' (expected LINE:COLUMN, both from 1)", pos)
            }
            Self::UnknownTarget(target) => write!(f, "unknown motion target '{}'", target),
            Self::InvalidEscape(seq) => write!(f, "invalid escape sequence '{}'", seq),
            Self::UnknownEncoding(label) => write!(f, "unknown encoding '{}'", label),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
Editing:
  insert TEXT        insert text (escapes: \\n \\t \\\\)
  backspace          delete selection or previous character
  delete             delete selection or next character
  cut | copy | paste clipboard operations
  undo | redo        walk the edit history
Caret and selection:
  move L:C           put the caret at line L, column C (1-based)
  select L:C         extend the selection to line L, column C
  go TARGET          move: left right up down home end word-left word-right top bottom
  extend TARGET      extend the selection by a motion
  select-all         select the whole document
Files:
  new[!]             start an empty document
  open[!] PATH [--encoding NAME]
                     open a file (default: UTF-8, then GBK)
  save | save-as PATH
Other:
  print | status | help | quit[!]";

/// Parse one shell line
pub fn parse_command(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let arg = rest.trim();

    let command = match word {
        // Insert keeps its argument verbatim, including surrounding spaces
        "insert" => ShellCommand::Edit(EditCommand::Insert(unescape(rest)?)),
        "backspace" => ShellCommand::Edit(EditCommand::Backspace),
        "delete" => ShellCommand::Edit(EditCommand::DeleteForward),
        "cut" => ShellCommand::Edit(EditCommand::Cut),
        "copy" => ShellCommand::Edit(EditCommand::Copy),
        "paste" => ShellCommand::Edit(EditCommand::Paste),
        "select-all" => ShellCommand::Edit(EditCommand::SelectAll),
        "undo" => ShellCommand::Edit(EditCommand::Undo),
        "redo" => ShellCommand::Edit(EditCommand::Redo),
        "move" | "select" => ShellCommand::Edit(EditCommand::MoveCursor {
            position: parse_position(arg)?,
            extend: word == "select",
        }),
        "go" | "extend" => ShellCommand::Edit(EditCommand::Move {
            target: parse_target(arg)?,
            extend: word == "extend",
        }),
        "new" => ShellCommand::New { force: false },
        "new!" => ShellCommand::New { force: true },
        "open" | "open!" => {
            let (path, encoding) = parse_open_args(arg)?;
            ShellCommand::Open {
                path,
                force: word == "open!",
                encoding,
            }
        }
        "save" => ShellCommand::Save,
        "save-as" => ShellCommand::SaveAs(required_path(arg)?),
        "print" => ShellCommand::Print,
        "status" => ShellCommand::Status,
        "quit" => ShellCommand::Quit { force: false },
        "quit!" => ShellCommand::Quit { force: true },
        "help" => ShellCommand::Help,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn required_path(arg: &str) -> Result<PathBuf, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument("PATH"));
    }
    Ok(PathBuf::from(arg))
}

/// `PATH [--encoding NAME]`
fn parse_open_args(arg: &str) -> Result<(PathBuf, Option<&'static Encoding>), ParseError> {
    match arg.rsplit_once("--encoding") {
        Some((path, label)) if path.is_empty() || path.ends_with(char::is_whitespace) => {
            let label = label.trim();
            if label.is_empty() {
                return Err(ParseError::MissingArgument("ENCODING"));
            }
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| ParseError::UnknownEncoding(label.to_string()))?;
            Ok((required_path(path.trim_end())?, Some(encoding)))
        }
        _ => Ok((required_path(arg)?, None)),
    }
}

/// Parse a 1-based `LINE:COLUMN` into a 0-based position
fn parse_position(arg: &str) -> Result<Position, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::MissingArgument("LINE:COLUMN"));
    }
    let invalid = || ParseError::InvalidPosition(arg.to_string());

    let (line, column) = arg.split_once(':').ok_or_else(invalid)?;
    let line: usize = line.trim().parse().map_err(|_| invalid())?;
    let column: usize = column.trim().parse().map_err(|_| invalid())?;
    if line == 0 || column == 0 {
        return Err(invalid());
    }
    Ok(Position::new(line - 1, column - 1))
}

fn parse_target(arg: &str) -> Result<MoveTarget, ParseError> {
    match arg {
        "" => Err(ParseError::MissingArgument("TARGET")),
        "left" => Ok(MoveTarget::Left),
        "right" => Ok(MoveTarget::Right),
        "up" => Ok(MoveTarget::Up),
        "down" => Ok(MoveTarget::Down),
        "home" => Ok(MoveTarget::LineStart),
        "end" => Ok(MoveTarget::LineEnd),
        "word-left" => Ok(MoveTarget::WordLeft),
        "word-right" => Ok(MoveTarget::WordRight),
        "top" => Ok(MoveTarget::DocumentStart),
        "bottom" => Ok(MoveTarget::DocumentEnd),
        other => Err(ParseError::UnknownTarget(other.to_string())),
    }
}

/// Expand `\n`, `\t` and `\\`
fn unescape(text: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(ParseError::InvalidEscape(format!("\\{}", other))),
            None => return Err(ParseError::InvalidEscape("\\".to_string())),
        }
    }
    Ok(out)
}

/// Read commands from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(command) => {
                if execute(session, command, &mut output)?.is_break() {
                    break;
                }
            }
            Err(e) => writeln!(output, "error: {}", e)?,
        }
    }
    output.flush()?;
    Ok(())
}

/// Run one parsed command. Breaks when the shell should exit.
pub fn execute<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    output: &mut W,
) -> Result<ControlFlow<()>> {
    match command {
        ShellCommand::Edit(edit) => {
            if let Err(e) = session.execute(edit) {
                writeln!(output, "error: {}", e)?;
            }
        }
        ShellCommand::New { force } => {
            if confirm_discard(session, force, "new!", output)? {
                session.new_file();
            }
        }
        ShellCommand::Open {
            path,
            force,
            encoding,
        } => {
            if confirm_discard(session, force, "open!", output)? {
                match session.open(&path, encoding) {
                    Ok(()) => writeln!(
                        output,
                        "opened {} ({} lines, encoding: {})",
                        path.display(),
                        session.state().document().line_count(),
                        session.encoding().name()
                    )?,
                    Err(e) => writeln!(output, "error: {}", Session::open_error_message(&path, &e))?,
                }
            }
        }
        ShellCommand::Save => match session.save() {
            Ok(path) => writeln!(output, "saved {}", path.display())?,
            Err(e) => writeln!(output, "error: {:#}", e)?,
        },
        ShellCommand::SaveAs(path) => match session.save_as(&path) {
            Ok(()) => writeln!(output, "saved {}", path.display())?,
            Err(e) => writeln!(output, "error: {:#}", e)?,
        },
        ShellCommand::Print => writeln!(output, "{}", session.state().full_text())?,
        ShellCommand::Status => writeln!(output, "{}", session.status())?,
        ShellCommand::Help => writeln!(output, "{}", HELP)?,
        ShellCommand::Quit { force } => {
            if confirm_discard(session, force, "quit!", output)? {
                return Ok(ControlFlow::Break(()));
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Whether unsaved changes may be dropped; warns when they may not
fn confirm_discard<W: Write>(
    session: &Session,
    force: bool,
    forced_command: &str,
    output: &mut W,
) -> Result<bool> {
    if force || !session.needs_confirmation() {
        return Ok(true);
    }
    writeln!(
        output,
        "warning: unsaved changes in {}; save first or use {}",
        session.display_name(),
        forced_command
    )?;
    Ok(false)
}
