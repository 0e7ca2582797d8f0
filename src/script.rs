//! Gesture scripts
//!
//! A script is a line-oriented list of editor gestures, one per line:
//!
//! ```text
//! # a red triangle, rotated by 90 degrees about the origin
//! color 255 0 0
//! tool triangle
//! click 0 0
//! click 10 10
//! tool select
//! click 2 2
//! tool rotate
//! click 0 0
//! click 0 25
//! ```
//!
//! Parsing is strict and reports the offending line. Replay is lenient: a
//! gesture the editor rejects is logged and the next one runs anyway, the
//! same way an interactive session keeps going after a status-bar error.

use shapekit_core::{Color, Point};
use shapekit_designer::{BooleanOp, DesignerState, DrawingMode};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Script parse errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: unknown tool '{name}'")]
    UnknownTool { line: usize, name: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
}

/// One editor gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Tool(DrawingMode),
    Click { point: Point, multi: bool },
    Close,
    Drag(Point),
    Release,
    Color(Color),
    Boolean(BooleanOp),
    Delete,
    Clear,
    Cancel,
}

impl Command {
    /// Parses a single non-empty, non-comment line.
    fn parse(line: usize, text: &str) -> Result<Self, ScriptError> {
        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ScriptError::UnknownCommand {
                line,
                command: String::new(),
            });
        };
        let args: Vec<&str> = words.collect();
        let wrong = |expected: &'static str| ScriptError::WrongArguments {
            line,
            command: name.to_string(),
            expected,
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "tool" => match args[..] {
                [tool] => DrawingMode::from_name(tool)
                    .map(Command::Tool)
                    .ok_or_else(|| ScriptError::UnknownTool {
                        line,
                        name: tool.to_string(),
                    })?,
                _ => return Err(wrong("a tool name")),
            },
            "click" => match args[..] {
                [x, y] => Command::Click {
                    point: parse_point(line, x, y)?,
                    multi: false,
                },
                [x, y, modifier] if modifier.eq_ignore_ascii_case("shift") => Command::Click {
                    point: parse_point(line, x, y)?,
                    multi: true,
                },
                _ => return Err(wrong("<x> <y> [shift]")),
            },
            "drag" => match args[..] {
                [x, y] => Command::Drag(parse_point(line, x, y)?),
                _ => return Err(wrong("<x> <y>")),
            },
            "color" => match args[..] {
                [r, g, b] => Command::Color(Color::new(
                    parse_number(line, r)?,
                    parse_number(line, g)?,
                    parse_number(line, b)?,
                )),
                _ => return Err(wrong("<r> <g> <b>")),
            },
            other => {
                let command = match other {
                    "close" => Command::Close,
                    "release" => Command::Release,
                    "union" => Command::Boolean(BooleanOp::Union),
                    "xor" => Command::Boolean(BooleanOp::SymmetricDifference),
                    "delete" => Command::Delete,
                    "clear" => Command::Clear,
                    "cancel" => Command::Cancel,
                    _ => {
                        return Err(ScriptError::UnknownCommand {
                            line,
                            command: name.to_string(),
                        })
                    }
                };
                if !args.is_empty() {
                    return Err(wrong("no arguments"));
                }
                command
            }
        };
        Ok(command)
    }

    /// Forwards the gesture to the editor session.
    pub fn apply(&self, state: &mut DesignerState) -> shapekit_core::Result<()> {
        match *self {
            Command::Tool(mode) => state.set_tool(mode),
            Command::Click { point, multi } => state.click(point, multi)?,
            Command::Close => {
                state.finish_polygon()?;
            }
            Command::Drag(point) => state.drag_to(point),
            Command::Release => state.end_drag(),
            Command::Color(color) => state.set_color(color),
            Command::Boolean(op) => {
                state.apply_boolean(op)?;
            }
            Command::Delete => {
                state.delete_selected();
            }
            Command::Clear => state.clear_canvas(),
            Command::Cancel => state.cancel(),
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(line: usize, value: &str) -> Result<T, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_point(line: usize, x: &str, y: &str) -> Result<Point, ScriptError> {
    let x: f64 = parse_number(line, x)?;
    let y: f64 = parse_number(line, y)?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(ScriptError::InvalidNumber {
            line,
            value: format!("{} {}", x, y),
        });
    }
    Ok(Point::new(x, y))
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub failed: usize,
}

/// A parsed script: commands paired with their 1-based line numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<(usize, Command)>,
}

impl Script {
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().map(|(_, command)| command)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays every command against `state`, continuing past failures.
    pub fn run(&self, state: &mut DesignerState) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for (line, command) in &self.commands {
            match command.apply(state) {
                Ok(()) => {
                    debug!("line {}: {:?} -> {}", line, command, state.status());
                    summary.applied += 1;
                }
                Err(e) => {
                    warn!("line {}: {}", line, e);
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            commands.push((index + 1, Command::parse(index + 1, content)?));
        }
        Ok(Self { commands })
    }
}
