//! FreeCell solitaire: rules engine, undo/redo move log, and a terminal
//! front-end.
//!
//! The core (`card`, `container`, `board`, `rules`, `auto_move`,
//! `move_log`, `session`) is synchronous and knows nothing about input or
//! rendering.  `command`, `renderer` and `game` are the terminal layers
//! that drive it.

pub mod auto_move;
pub mod board;
pub mod card;
pub mod command;
pub mod config;
pub mod container;
pub mod error;
pub mod game;
pub mod move_log;
pub mod prefs;
pub mod renderer;
pub mod rules;
pub mod session;

pub use board::{Board, DealSnapshot};
pub use card::{Card, Color, Rank, Suit};
pub use container::{ContainerId, Foundation, FreeCell, TableauColumn};
pub use error::MoveError;
pub use move_log::{MoveLog, MoveRecord};
pub use session::{NullObserver, Session, SessionObserver};
