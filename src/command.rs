use crate::board::{NUM_COLUMNS, NUM_FOUNDATIONS, NUM_FREE_CELLS};

/// Where a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Tableau column, picking up the top `depth + 1` cards.
    Column { col: usize, depth: usize },
    FreeCell(usize),
    Foundation(usize),
}

/// Where a drag ends.  `AnyFreeCell` / `AnyFoundation` pick the first slot
/// that takes the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Column(usize),
    FreeCell(usize),
    AnyFreeCell,
    Foundation(usize),
    AnyFoundation,
}

/// All commands a player can issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { src: Source, dst: Target },
    /// Double-click: send the exposed card to the best legal spot.
    Auto(Source),
    Undo,
    Redo,
    /// Replay the current deal from the start.
    Restart,
    NewGame,
    Theme(String),
    Help,
    Quit,
}

/// Parse a single line of text input into a `Command`.
///
/// Syntax reference (case-insensitive):
/// ```text
/// m <src> <dst>     -- move; src: tN, tN:D, cN   dst: tN, cN, c, fN, f
/// a <src>           -- auto-move the exposed card of tN, cN or fN
/// undo | u          -- undo last move
/// redo | r          -- redo
/// restart           -- restart this deal
/// new | n           -- new shuffled deal
/// theme <name>      -- green, blue or red
/// quit | q          -- quit
/// help | h | ?      -- help
/// ```
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let cmd = tokens[0].to_lowercase();

    match cmd.as_str() {
        "m" | "mv" | "move" => {
            if tokens.len() < 3 {
                return Err("Usage: m <src> <dst>".to_string());
            }
            Ok(Command::Move {
                src: parse_source(tokens[1])?,
                dst: parse_target(tokens[2])?,
            })
        }
        "a" | "auto" => {
            if tokens.len() < 2 {
                return Err("Usage: a <src>".to_string());
            }
            Ok(Command::Auto(parse_source(tokens[1])?))
        }
        "theme" => {
            if tokens.len() < 2 {
                return Err("Usage: theme green|blue|red".to_string());
            }
            Ok(Command::Theme(tokens[1].to_string()))
        }

        "undo" | "u" => Ok(Command::Undo),
        "redo" | "r" => Ok(Command::Redo),
        "restart" => Ok(Command::Restart),
        "new" | "n" => Ok(Command::NewGame),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "help" | "h" | "?" => Ok(Command::Help),
        _ => Err(format!("Unknown command '{}'. Type 'help' for help.", tokens[0])),
    }
}

fn parse_source(s: &str) -> Result<Source, String> {
    let s = s.to_lowercase();
    let (zone, rest) = split_zone(&s);
    match zone {
        Some('t') => {
            // "t3:2" starts two cards below the top of column 3.
            if let Some((col_part, depth_part)) = rest.split_once(':') {
                let col = parse_index(col_part, NUM_COLUMNS, "column")?;
                let depth = depth_part
                    .parse()
                    .map_err(|_| format!("'{}' is not a valid depth", depth_part))?;
                Ok(Source::Column { col, depth })
            } else {
                Ok(Source::Column {
                    col: parse_index(rest, NUM_COLUMNS, "column")?,
                    depth: 0,
                })
            }
        }
        Some('c') => Ok(Source::FreeCell(parse_index(rest, NUM_FREE_CELLS, "free-cell")?)),
        Some('f') => Ok(Source::Foundation(parse_index(rest, NUM_FOUNDATIONS, "foundation")?)),
        _ => Err(format!("'{}' is not a source; use tN, tN:D, cN or fN", s)),
    }
}

fn parse_target(s: &str) -> Result<Target, String> {
    let s = s.to_lowercase();
    match split_zone(&s) {
        (Some('c'), "") => Ok(Target::AnyFreeCell),
        (Some('f'), "") => Ok(Target::AnyFoundation),
        (Some('t'), rest) => Ok(Target::Column(parse_index(rest, NUM_COLUMNS, "column")?)),
        (Some('c'), rest) => Ok(Target::FreeCell(parse_index(rest, NUM_FREE_CELLS, "free-cell")?)),
        (Some('f'), rest) => Ok(Target::Foundation(parse_index(rest, NUM_FOUNDATIONS, "foundation")?)),
        _ => Err(format!("'{}' is not a destination; use tN, cN, c, fN or f", s)),
    }
}

/// `"t3:2"` -> `('t', "3:2")`.
fn split_zone(s: &str) -> (Option<char>, &str) {
    let mut chars = s.chars();
    let zone = chars.next();
    (zone, chars.as_str())
}

fn parse_index(s: &str, len: usize, what: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid {} index", s, what))?;
    if n >= len {
        return Err(format!("{} index {} out of range (0–{})", what, n, len - 1));
    }
    Ok(n)
}
