//! A round of FreeCell: the board, the move log, and the move counter.

use log::{debug, info};

use crate::auto_move;
use crate::board::{Board, DealSnapshot};
use crate::card::Card;
use crate::container::ContainerId;
use crate::error::{MoveError, Result};
use crate::move_log::{MoveLog, MoveRecord};
use crate::rules;

/// Notifications to the presentation layer.  None of them can affect the
/// session.
pub trait SessionObserver {
    fn update_move_count(&mut self, _moves: u32) {}
    fn show_win_screen(&mut self, _moves: u32) {}
    fn hide_win_panel(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

/// Owns every container and the undo/redo history.  The observer is
/// injected so the session stays presentation-agnostic.
pub struct Session<O: SessionObserver = NullObserver> {
    board: Board,
    log: MoveLog,
    move_count: u32,
    initial_deal: DealSnapshot,
    theme: String,
    observer: O,
}

impl<O: SessionObserver> Session<O> {
    /// Start a session on a freshly shuffled deal.
    pub fn new(theme: impl Into<String>, observer: O) -> Self {
        Self::from_board(Board::deal_random(), theme, observer)
    }

    /// Start a session on a reproducible deal.
    pub fn with_seed(seed: u64, theme: impl Into<String>, observer: O) -> Self {
        Self::from_board(Board::deal_seeded(seed), theme, observer)
    }

    /// Start from an arbitrary layout, which becomes the restart point.
    pub fn from_board(board: Board, theme: impl Into<String>, observer: O) -> Self {
        let initial_deal = board.snapshot();
        Session {
            board,
            log: MoveLog::new(),
            move_count: 0,
            initial_deal,
            theme: theme.into(),
            observer,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn initial_deal(&self) -> &DealSnapshot {
        &self.initial_deal
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: impl Into<String>) {
        self.theme = theme.into();
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Board and observer together, for redrawing.
    pub fn parts_mut(&mut self) -> (&Board, &mut O) {
        (&self.board, &mut self.observer)
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    // -------------------------------------------------------------------------
    // Moves
    // -------------------------------------------------------------------------

    /// Apply and record a move the caller has already validated.
    ///
    /// Still refuses structurally impossible moves (unknown container, run
    /// not on top of `from`) without touching the board.
    pub fn commit_move(&mut self, cards: &[Card], from: ContainerId, to: ContainerId) -> Result<()> {
        self.board.transfer(cards, from, to)?;
        debug!("move {} card(s) {from} -> {to}", cards.len());

        self.log.record(MoveRecord::new(cards.to_vec(), from, to));
        self.move_count += 1;
        self.observer.update_move_count(self.move_count);
        self.check_win_condition();
        Ok(())
    }

    /// Drag the run starting at `start` (0 = bottom card) in `from` onto `to`.
    pub fn play(&mut self, from: ContainerId, start: usize, to: ContainerId) -> Result<()> {
        if from == to {
            return Err(MoveError::IllegalMove("source and destination are the same"));
        }
        let run = rules::draggable_run(&self.board, from, start)?;
        rules::validate_destination(&self.board, &run, to)?;
        self.commit_move(&run, from, to)
    }

    /// Send the exposed card of `from` to the first legal destination.
    pub fn auto_move(&mut self, from: ContainerId) -> Result<ContainerId> {
        let card = self
            .board
            .top(from)?
            .ok_or(MoveError::IllegalMove("nothing to move there"))?;
        let to = auto_move::find_destination(&self.board, card, from)?;
        self.commit_move(&[card], from, to)?;
        Ok(to)
    }

    pub fn undo(&mut self) -> Result<()> {
        let record = self.log.undo(&mut self.board)?;
        debug!("undo {} card(s) {} -> {}", record.cards().len(), record.to(), record.from());

        self.move_count = self.move_count.saturating_sub(1);
        self.observer.update_move_count(self.move_count);
        self.observer.hide_win_panel();
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        let record = self.log.redo(&mut self.board)?;
        debug!("redo {} card(s) {} -> {}", record.cards().len(), record.from(), record.to());

        self.move_count += 1;
        self.observer.update_move_count(self.move_count);
        self.check_win_condition();
        Ok(())
    }

    /// Report a win to the observer if every card is home.
    pub fn check_win_condition(&mut self) -> bool {
        let won = self.board.is_won();
        if won {
            info!("game won in {} moves", self.move_count);
            self.observer.show_win_screen(self.move_count);
        }
        won
    }

    // -------------------------------------------------------------------------
    // Round lifecycle
    // -------------------------------------------------------------------------

    /// Throw away the current cards and deal a fresh shuffle.
    pub fn new_game(&mut self) {
        self.start_round(Board::deal_random());
    }

    /// Like `new_game`, but reproducible.
    pub fn new_game_seeded(&mut self, seed: u64) {
        self.start_round(Board::deal_seeded(seed));
    }

    fn start_round(&mut self, board: Board) {
        info!("new deal");
        self.board = board;
        self.initial_deal = self.board.snapshot();
        self.reset_progress();
    }

    /// Put the cards back where this round's deal left them.
    pub fn restart_round(&mut self) {
        debug!("restart round");
        self.board.restore(&self.initial_deal);
        self.reset_progress();
    }

    fn reset_progress(&mut self) {
        self.log.clear();
        self.move_count = 0;
        self.observer.update_move_count(0);
        self.observer.hide_win_panel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[derive(Debug, Default)]
    struct Recorder {
        counts: Vec<u32>,
        wins: Vec<u32>,
        hides: usize,
    }

    impl SessionObserver for Recorder {
        fn update_move_count(&mut self, moves: u32) {
            self.counts.push(moves);
        }
        fn show_win_screen(&mut self, moves: u32) {
            self.wins.push(moves);
        }
        fn hide_win_panel(&mut self) {
            self.hides += 1;
        }
    }

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    /// Everything home except the king of spades, which sits in column 0.
    fn one_move_from_winning() -> Board {
        let mut board = Board::default();
        for (i, suit) in Suit::ALL.iter().enumerate() {
            for rank in 1..=13 {
                board.foundations[i].add_card(card(*suit, rank));
            }
        }
        let king = card(Suit::Spades, 13);
        board.foundations[3].remove_card(king);
        board.columns[0].add_card(king);
        board
    }

    #[test]
    fn commit_counts_and_notifies() {
        let mut session = Session::with_seed(11, "Green", Recorder::default());
        let top = session.board().columns[0].top().unwrap();
        session
            .commit_move(&[top], ContainerId::Tableau(0), ContainerId::FreeCell(0))
            .unwrap();

        assert_eq!(session.move_count(), 1);
        assert_eq!(session.observer().counts, vec![1]);
        assert_eq!(session.log().undo_len(), 1);
        assert_eq!(session.log().redo_len(), 0);
    }

    #[test]
    fn rejected_commit_changes_nothing() {
        let mut session = Session::with_seed(11, "Green", Recorder::default());
        let before = session.board().clone();
        let buried = session.board().columns[0].cards()[0];

        let err = session
            .commit_move(&[buried], ContainerId::Tableau(0), ContainerId::FreeCell(0))
            .unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove(_)));
        assert_eq!(session.board(), &before);
        assert_eq!(session.move_count(), 0);
        assert!(!session.can_undo());

        let err = session
            .commit_move(&[buried], ContainerId::Tableau(0), ContainerId::Tableau(9))
            .unwrap_err();
        assert_eq!(err, MoveError::MalformedContainer(ContainerId::Tableau(9)));
    }

    #[test]
    fn undo_floors_counter_and_hides_win_panel() {
        let mut session = Session::with_seed(5, "Blue", Recorder::default());
        assert_eq!(session.undo(), Err(MoveError::EmptyHistory));
        assert_eq!(session.redo(), Err(MoveError::EmptyHistory));

        let top = session.board().columns[2].top().unwrap();
        session
            .commit_move(&[top], ContainerId::Tableau(2), ContainerId::FreeCell(3))
            .unwrap();
        session.undo().unwrap();
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.observer().hides, 1);
        assert!(session.can_redo());
    }

    #[test]
    fn final_move_wins_and_redo_wins_again() {
        let mut session = Session::from_board(one_move_from_winning(), "Red", Recorder::default());
        assert!(!session.is_won());

        let to = session.auto_move(ContainerId::Tableau(0)).unwrap();
        assert_eq!(to, ContainerId::Foundation(3));
        assert!(session.is_won());
        assert_eq!(session.observer().wins, vec![1]);

        session.undo().unwrap();
        assert!(!session.is_won());
        session.redo().unwrap();
        assert_eq!(session.observer().wins, vec![1, 1]);
    }

    #[test]
    fn play_rejects_same_container() {
        let mut session = Session::with_seed(1, "Green", NullObserver);
        let err = session
            .play(ContainerId::Tableau(0), 6, ContainerId::Tableau(0))
            .unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove(_)));
    }

    #[test]
    fn restart_returns_to_deal_and_keeps_snapshot() {
        let mut session = Session::with_seed(9, "Green", Recorder::default());
        let dealt = session.board().clone();

        let top = session.board().columns[4].top().unwrap();
        session
            .commit_move(&[top], ContainerId::Tableau(4), ContainerId::FreeCell(0))
            .unwrap();
        session.restart_round();

        assert_eq!(session.board(), &dealt);
        assert_eq!(session.move_count(), 0);
        assert!(!session.can_undo() && !session.can_redo());
        assert_eq!(session.initial_deal(), &dealt.snapshot());
    }

    #[test]
    fn new_game_recaptures_snapshot() {
        let mut session = Session::with_seed(9, "Green", NullObserver);
        session.new_game_seeded(10);
        assert_eq!(session.board(), &Board::deal_seeded(10));
        assert_eq!(session.initial_deal(), &Board::deal_seeded(10).snapshot());
    }
}
