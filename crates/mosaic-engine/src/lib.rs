//! Game engine for Mosaic Tetris.
//!
//! Pieces arrive randomly pre-rotated with a countdown, are positioned
//! anywhere on the grid (there is no gravity and no mid-play rotation), and
//! full rows *and* full columns clear for points.
//!
//! The [`core`] module holds the data model (board, cells, pieces); the
//! [`engine`] module holds the gameplay layer (piece supply, scoring, and the
//! session state machine that ties everything together).

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
