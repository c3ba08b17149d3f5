use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::Board;
use crate::command::{Command, Source, Target, parse_command};
use crate::container::ContainerId;
use crate::error::MoveError;
use crate::prefs::{Preferences, Theme};
use crate::renderer::Renderer;
use crate::session::Session;

/// The interactive loop.  The session owns the renderer so it can push
/// move-count and win notifications straight to it.
pub struct Game<R: Renderer> {
    session: Session<R>,
    prefs: Preferences,
    persist: bool,
    win_recorded: bool,
}

impl<R: Renderer> Game<R> {
    pub fn new(session: Session<R>, prefs: Preferences, persist: bool) -> Self {
        let mut game = Game {
            session,
            prefs,
            persist,
            win_recorded: false,
        };
        game.prefs.stats.record_deal();
        game
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Play on stdin until the player quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run_with(stdin.lock())
    }

    /// Play on any line source.
    pub fn run_with(&mut self, mut input: impl BufRead) -> io::Result<()> {
        self.redraw();

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            match parse_command(&line) {
                Err(e) => self.session.observer_mut().error(&e),
                Ok(cmd) => {
                    if self.handle(cmd) {
                        break;
                    }
                    self.redraw();
                }
            }
        }

        self.save();
        Ok(())
    }

    /// Dispatch a command.  Returns `true` if the game should exit.
    pub fn handle(&mut self, cmd: Command) -> bool {
        debug!("command {cmd:?}");
        match cmd {
            Command::Quit => {
                self.session.observer_mut().info("Thanks for playing. Goodbye!");
                return true;
            }
            Command::Help => self.session.observer_mut().help(),
            Command::NewGame => {
                self.session.new_game();
                self.prefs.stats.record_deal();
                self.win_recorded = false;
                self.session.observer_mut().info("A new game has been dealt.");
            }
            Command::Restart => {
                self.session.restart_round();
                self.win_recorded = false;
                self.session.observer_mut().info("Back to the start of this deal.");
            }
            Command::Undo => match self.session.undo() {
                Ok(()) => {}
                Err(MoveError::EmptyHistory) => self.session.observer_mut().info("Nothing to undo."),
                Err(e) => self.report(e),
            },
            Command::Redo => match self.session.redo() {
                Ok(()) => {}
                Err(MoveError::EmptyHistory) => self.session.observer_mut().info("Nothing to redo."),
                Err(e) => self.report(e),
            },
            Command::Theme(name) => {
                let theme = Theme::parse(&name);
                self.session.set_theme(theme.name());
                self.prefs.theme = theme.name().to_string();
                self.session.observer_mut().set_theme(theme);
                self.session
                    .observer_mut()
                    .info(&format!("Theme set to {}.", theme.name()));
            }
            Command::Move { src, dst } => {
                let result = resolve_source(self.session.board(), src).and_then(|(from, start)| {
                    let to = resolve_target(self.session.board(), from, start, dst)?;
                    self.session.play(from, start, to)
                });
                if let Err(e) = result {
                    self.report(e);
                }
            }
            Command::Auto(src) => {
                let result = resolve_source(self.session.board(), src)
                    .and_then(|(from, _)| self.session.auto_move(from));
                if let Err(e) = result {
                    self.report(e);
                }
            }
        }

        self.note_win();
        false
    }

    fn report(&mut self, e: MoveError) {
        self.session.observer_mut().error(&e.to_string());
    }

    fn note_win(&mut self) {
        if self.session.is_won() && !self.win_recorded {
            self.win_recorded = true;
            self.prefs.stats.record_win(self.session.move_count());
            self.save();
        }
    }

    fn redraw(&mut self) {
        let (board, renderer) = self.session.parts_mut();
        renderer.render(board);
    }

    fn save(&self) {
        if self.persist {
            self.prefs.save();
        }
    }
}

/// Container and start index (0 = bottom card) for a drag source.
fn resolve_source(board: &Board, src: Source) -> Result<(ContainerId, usize), MoveError> {
    match src {
        Source::Column { col, depth } => {
            let id = ContainerId::Tableau(col);
            let len = board.cards(id)?.len();
            if depth >= len {
                return Err(MoveError::IllegalMove("column is not that deep"));
            }
            Ok((id, len - 1 - depth))
        }
        Source::FreeCell(i) => Ok((ContainerId::FreeCell(i), 0)),
        Source::Foundation(i) => {
            let id = ContainerId::Foundation(i);
            let len = board.cards(id)?.len();
            Ok((id, len.saturating_sub(1)))
        }
    }
}

/// Turn "first free cell" / "first foundation" into a concrete container.
fn resolve_target(
    board: &Board,
    from: ContainerId,
    start: usize,
    dst: Target,
) -> Result<ContainerId, MoveError> {
    match dst {
        Target::Column(i) => Ok(ContainerId::Tableau(i)),
        Target::FreeCell(i) => Ok(ContainerId::FreeCell(i)),
        Target::Foundation(i) => Ok(ContainerId::Foundation(i)),
        Target::AnyFreeCell => board
            .free_cells
            .iter()
            .position(|cell| cell.is_empty())
            .map(ContainerId::FreeCell)
            .ok_or(MoveError::IllegalMove("no empty free cell")),
        Target::AnyFoundation => {
            let card = board
                .cards(from)?
                .get(start)
                .copied()
                .ok_or(MoveError::IllegalMove("nothing to move there"))?;
            board
                .foundations
                .iter()
                .position(|f| f.can_place_card(card))
                .map(ContainerId::Foundation)
                .ok_or(MoveError::IllegalMove("no foundation takes that card"))
        }
    }
}
