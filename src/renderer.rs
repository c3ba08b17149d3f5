use crossterm::style::{Color as TermColor, Stylize};

use crate::board::{Board, NUM_COLUMNS};
use crate::card::{Card, Color};
use crate::prefs::Theme;
use crate::session::SessionObserver;

/// Trait that abstracts the rendering layer.  A renderer also receives the
/// session's move-count and win notifications.
pub trait Renderer: SessionObserver {
    /// Render the full game board.
    fn render(&mut self, board: &Board);
    /// Display an informational message.
    fn info(&mut self, msg: &str);
    /// Display an error message.
    fn error(&mut self, msg: &str);
    /// Display the help text.
    fn help(&mut self);
    /// Switch colour scheme.
    fn set_theme(&mut self, theme: Theme);
}

// ---------------------------------------------------------------------------
// CLI Renderer
// ---------------------------------------------------------------------------

/// A coloured line-oriented terminal renderer.
pub struct CliRenderer {
    theme: Theme,
    moves: u32,
}

impl CliRenderer {
    pub fn new(theme: Theme) -> Self {
        CliRenderer { theme, moves: 0 }
    }

    fn accent(&self) -> TermColor {
        match self.theme {
            Theme::Green => TermColor::Green,
            Theme::Blue => TermColor::Blue,
            Theme::Red => TermColor::Red,
        }
    }

    fn card_str(&self, card: Card) -> String {
        let label = format!("{:>3}", card.label());
        match card.color() {
            Color::Red => label.red().to_string(),
            Color::Black => label.white().to_string(),
        }
    }

    fn slot_str(&self, card: Option<Card>) -> String {
        match card {
            Some(c) => format!("[{}]", self.card_str(c)),
            None => format!("[{}]", "   ".dark_grey()),
        }
    }
}

impl SessionObserver for CliRenderer {
    fn update_move_count(&mut self, moves: u32) {
        self.moves = moves;
    }

    fn show_win_screen(&mut self, moves: u32) {
        let banner = "\
  ██╗    ██╗ ██████╗ ███╗   ██╗██╗
  ██║    ██║██╔═══██╗████╗  ██║██║
  ██║ █╗ ██║██║   ██║██╔██╗ ██║██║
  ██║███╗██║██║   ██║██║╚██╗██║╚═╝
  ╚███╔███╔╝╚██████╔╝██║ ╚████║██╗
   ╚══╝╚══╝  ╚═════╝ ╚═╝  ╚═══╝╚═╝";
        println!("\n{}\n", banner.with(self.accent()).bold());
        println!(
            "  You win in {} moves!  Type 'new' for another game.\n",
            moves
        );
    }

    fn hide_win_panel(&mut self) {}
}

impl Renderer for CliRenderer {
    fn render(&mut self, board: &Board) {
        println!();

        // ---- Top row: free cells | foundations ----
        print!("  {}  ", "CELLS".with(self.accent()));
        for (i, cell) in board.free_cells.iter().enumerate() {
            print!("c{}{} ", i, self.slot_str(cell.card()));
        }
        print!("   {}  ", "HOME".with(self.accent()));
        for (i, foundation) in board.foundations.iter().enumerate() {
            print!("f{}{} ", i, self.slot_str(foundation.top()));
        }
        println!();

        // ---- Column indices header ----
        println!();
        print!("        ");
        for i in 0..NUM_COLUMNS {
            print!("  {}", format!("{:^5}", format!("t{}", i)).with(self.accent()));
        }
        println!();

        // ---- Tableau ----
        let max_len = board.columns.iter().map(|c| c.len()).max().unwrap_or(0);

        for row in 0..max_len {
            print!("  {:>3}:  ", row);
            for col in &board.columns {
                match col.cards().get(row) {
                    Some(&card) => print!("  {} ", self.card_str(card)),
                    None => print!("   .. "),
                }
            }
            println!();
        }

        if max_len == 0 {
            println!("  (all columns empty)");
        }

        println!("\n  Moves: {}\n", self.moves);
    }

    fn info(&mut self, msg: &str) {
        println!("{} {}", "[INFO]".cyan(), msg);
    }

    fn error(&mut self, msg: &str) {
        println!("{} {}", "[ERR ]".red(), msg);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn help(&mut self) {
        println!(
            r#"
╔══════════════════════════════════════════════════════════════╗
║                    FreeCell – Help                           ║
╠══════════════════════════════════════════════════════════════╣
║  GOAL: Build all four foundations up from Ace to King.       ║
║                                                              ║
║  RULES:                                                      ║
║    · Columns build down in alternating colours (7♥ on 8♠)    ║
║    · Any card may go into an empty column                    ║
║    · Each of the 4 free cells holds one card                 ║
║    · Foundations start with an Ace and follow suit           ║
║    · Runs move together if there is room:                    ║
║        (1 + empty cells) × 2^(empty columns)                 ║
╠══════════════════════════════════════════════════════════════╣
║  COMMANDS (case-insensitive):                                ║
║                                                              ║
║  m <src> <dst>      Move cards                               ║
║      src: tN   top card of column N                          ║
║           tN:D run starting D cards below the top            ║
║           cN   free cell N                                   ║
║      dst: tN, cN, fN, or c / f for the first that fits       ║
║  a <src>            Auto-move a card (foundation, column,    ║
║                     then free cell)                          ║
║  undo | u           Undo last move                           ║
║  redo | r           Redo                                     ║
║  restart            Replay this deal from the start          ║
║  new                Start a new random game                  ║
║  theme <name>       green, blue or red                       ║
║  quit               Exit                                     ║
║  help | h | ?       Show this help                           ║
╠══════════════════════════════════════════════════════════════╣
║  Example: m t4:2 t7  →  move top 3 cards of t4 onto t7       ║
╚══════════════════════════════════════════════════════════════╝
"#
        );
    }
}
