//! Gameplay layer on top of the core data model.
//!
//! - [`PieceSupply`] - shuffled, randomly pre-rotated queue of upcoming pieces
//! - [`GameStats`] - score, cleared-line count, and the last clear message
//! - [`GameSession`] - state machine driving board, supply, and the hovering
//!   piece through one game
//!
//! # Game flow
//!
//! 1. The session deals a piece from the supply and hovers it over the board
//! 2. Player input translates the piece; every move is followed by a re-hover
//!    so the board's illegal-cell set is never stale
//! 3. A hard drop, or the countdown reaching zero, attempts a placement
//! 4. On success the board commits the piece, full rows and columns clear,
//!    the score updates, and the next piece is dealt
//! 5. A failed forced placement ends the session (game over)

pub use self::{game_session::*, game_stats::*, piece_supply::*};

mod game_session;
mod game_stats;
mod piece_supply;
