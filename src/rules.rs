//! Move validation: run shape, supermove capacity, and per-zone placement.
//!
//! Everything here is read-only; a rejection never touches the board.

use crate::board::Board;
use crate::card::Card;
use crate::container::ContainerId;
use crate::error::{MoveError, Result};

/// A run is movable as a unit when every card sits on the one before it:
/// alternating colours, ranks falling by exactly one.  Empty runs are not.
pub fn is_valid_descending_sequence(cards: &[Card]) -> bool {
    match cards {
        [] => false,
        [_] => true,
        _ => cards.windows(2).all(|pair| pair[1].can_stack_on(pair[0])),
    }
}

/// Largest run that can move in one go using free cells and empty
/// columns as scratch space: `(1 + cells) * 2^columns`.
///
/// `reserve_one_empty_column` is set when the destination is itself an
/// empty column, which cannot also serve as scratch for the run.
pub fn max_movable_count(
    empty_free_cells: usize,
    empty_columns: usize,
    reserve_one_empty_column: bool,
) -> usize {
    let effective = if reserve_one_empty_column && empty_columns > 0 {
        empty_columns - 1
    } else {
        empty_columns
    };
    (1 + empty_free_cells) << effective
}

/// `max_movable_count` against the current board.
pub fn max_movable_on(board: &Board, reserve_one_empty_column: bool) -> usize {
    max_movable_count(
        board.empty_free_cells(),
        board.empty_columns(),
        reserve_one_empty_column,
    )
}

/// Can `cards` be picked up from `source` as one drag?
///
/// The run must be the top of a tableau column or the lone occupant of a
/// free cell, form a valid descending sequence, and fit within the
/// supermove capacity of the current board.  Foundation cards are never
/// dragged.
pub fn validate_sequence_move(board: &Board, cards: &[Card], source: ContainerId) -> Result<()> {
    let held = board.cards(source)?;

    if cards.is_empty() {
        return Err(MoveError::IllegalMove("no cards selected"));
    }

    match source {
        ContainerId::Tableau(_) => {
            if !held.ends_with(cards) {
                return Err(MoveError::IllegalMove("run must reach the top of the column"));
            }
        }
        ContainerId::FreeCell(_) => {
            if held != cards {
                return Err(MoveError::IllegalMove("free cell does not hold that card"));
            }
        }
        ContainerId::Foundation(_) => {
            return Err(MoveError::IllegalMove("foundation cards cannot be dragged"));
        }
    }

    if !is_valid_descending_sequence(cards) {
        return Err(MoveError::IllegalMove("cards do not form a descending alternating run"));
    }
    if cards.len() > max_movable_on(board, false) {
        return Err(MoveError::IllegalMove("not enough free cells or columns for that run"));
    }
    Ok(())
}

/// Can the run `cards` be dropped on `destination`?
///
/// Foundations and free cells only take single cards.  Tableau columns
/// take runs up to the supermove capacity, one empty column fewer when
/// the destination is the empty column.  The decisive placement check
/// uses the run's leading card.
pub fn validate_destination(board: &Board, cards: &[Card], destination: ContainerId) -> Result<()> {
    let Some(&leading) = cards.first() else {
        return Err(MoveError::IllegalMove("no cards selected"));
    };

    match destination {
        ContainerId::Foundation(_) | ContainerId::FreeCell(_) if cards.len() > 1 => {
            return Err(MoveError::IllegalMove("only single cards go there"));
        }
        ContainerId::Tableau(_) => {
            let target_empty = board.cards(destination)?.is_empty();
            if cards.len() > max_movable_on(board, target_empty) {
                return Err(MoveError::IllegalMove("not enough free cells or columns for that run"));
            }
        }
        _ => {}
    }

    if board.can_place_card(destination, leading)? {
        Ok(())
    } else {
        Err(MoveError::IllegalMove("card does not fit there"))
    }
}

/// The run in `source` starting at `start` (0 = bottom card), checked with
/// `validate_sequence_move`.
pub fn draggable_run(board: &Board, source: ContainerId, start: usize) -> Result<Vec<Card>> {
    let held = board.cards(source)?;
    let Some(run) = held.get(start..).filter(|run| !run.is_empty()) else {
        return Err(MoveError::IllegalMove("nothing to pick up there"));
    };
    let run = run.to_vec();
    validate_sequence_move(board, &run, source)?;
    Ok(run)
}
