use crate::board::Board;
use crate::card::Card;
use crate::container::ContainerId;
use crate::error::{MoveError, Result};

/// One committed move.  Stores which cards went between which two
/// containers, never copies of the containers themselves, so replaying
/// it costs the length of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    cards: Vec<Card>,
    from: ContainerId,
    to: ContainerId,
}

impl MoveRecord {
    pub fn new(cards: Vec<Card>, from: ContainerId, to: ContainerId) -> Self {
        MoveRecord { cards, from, to }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn from(&self) -> ContainerId {
        self.from
    }

    pub fn to(&self) -> ContainerId {
        self.to
    }

    /// Replay forward (`from` to `to`) or backward.
    fn apply(&self, board: &mut Board, forward: bool) -> Result<()> {
        let (source, target) = if forward {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        board.transfer(&self.cards, source, target)
    }
}

/// Undo and redo stacks.
#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    undo_stack: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a freshly committed move.  Any pending redo chain is dropped.
    pub fn record(&mut self, record: MoveRecord) {
        self.undo_stack.push(record);
        self.redo_stack.clear();
    }

    /// Reverse the latest move on `board` and make it redoable.
    pub fn undo(&mut self, board: &mut Board) -> Result<&MoveRecord> {
        let record = self.undo_stack.last().ok_or(MoveError::EmptyHistory)?;
        record.apply(board, false)?;
        let record = self.undo_stack.pop().ok_or(MoveError::EmptyHistory)?;
        self.redo_stack.push(record);
        self.redo_stack.last().ok_or(MoveError::EmptyHistory)
    }

    /// Reapply the latest undone move on `board`.
    pub fn redo(&mut self, board: &mut Board) -> Result<&MoveRecord> {
        let record = self.redo_stack.last().ok_or(MoveError::EmptyHistory)?;
        record.apply(board, true)?;
        let record = self.redo_stack.pop().ok_or(MoveError::EmptyHistory)?;
        self.undo_stack.push(record);
        self.undo_stack.last().ok_or(MoveError::EmptyHistory)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The move `undo` would reverse next.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.undo_stack.last()
    }
}
