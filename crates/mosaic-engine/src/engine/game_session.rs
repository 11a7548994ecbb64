use crate::core::{Board, CellView, UnplacedTetromino};

use super::{GameStats, PieceSupply};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// One game of Mosaic Tetris.
///
/// The session owns the board, the piece supply, the score, and the piece
/// currently hovering over the board, and serializes every mutation: the
/// surrounding loop feeds it one decision at a time (a key press or a timer
/// tick), and each mutating method leaves the board's illegal-cell set
/// freshly recomputed for the hovering piece.
///
/// The session ends when a placement forced by the countdown fails; from
/// then on all state is frozen and only read for final reporting.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    supply: PieceSupply,
    hovering: UnplacedTetromino,
    stats: GameStats,
    state: SessionState,
}

impl GameSession {
    /// Starts a session on a `width x height` board with a random piece
    /// sequence.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_supply(width, height, PieceSupply::new(width, height))
    }

    /// Like [`Self::new`], but with a seeded piece sequence.
    #[must_use]
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::from_supply(width, height, PieceSupply::with_seed(width, height, seed))
    }

    fn from_supply(width: usize, height: usize, mut supply: PieceSupply) -> Self {
        let hovering = supply.pop();
        let mut board = Board::new(width, height);
        board.hover(&hovering);
        Self {
            board,
            supply,
            hovering,
            stats: GameStats::new(),
            state: SessionState::Playing,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The piece currently being positioned.
    #[must_use]
    pub fn hovering(&self) -> &UnplacedTetromino {
        &self.hovering
    }

    /// The upcoming piece, for a preview panel.
    #[must_use]
    pub fn next_piece(&self) -> &UnplacedTetromino {
        self.supply.peek()
    }

    /// Render classification for one board coordinate.
    #[must_use]
    pub fn cell_view(&self, x: usize, y: usize) -> CellView {
        self.board.cell_view(x, y)
    }

    pub fn move_left(&mut self) {
        self.translate_hovering(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.translate_hovering(1, 0);
    }

    pub fn move_up(&mut self) {
        self.translate_hovering(0, -1);
    }

    pub fn move_down(&mut self) {
        self.translate_hovering(0, 1);
    }

    fn translate_hovering(&mut self, dx: i32, dy: i32) {
        if !self.state.is_playing() {
            return;
        }
        self.hovering
            .translate(dx, dy, self.board.width(), self.board.height());
        self.board.hover(&self.hovering);
    }

    /// Advances the hovering piece's countdown by one tick.
    ///
    /// When the countdown reaches zero a placement is forced; if the piece is
    /// hovering over occupied cells at that moment the session ends.
    pub fn tick(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let time_left = self.hovering.tick();
        self.board.hover(&self.hovering);
        if time_left == 0 {
            self.force_place();
        }
    }

    /// Player-directed placement.
    ///
    /// Ignored (returning false) while the hovering piece overlaps occupied
    /// cells; callers disable the place action in that state rather than
    /// treating refusal as game over.
    pub fn hard_drop(&mut self) -> bool {
        if !self.state.is_playing() || !self.board.illegal_cells().is_empty() {
            return false;
        }
        self.commit_hovering();
        true
    }

    fn force_place(&mut self) {
        if self.board.illegal_cells().is_empty() {
            self.commit_hovering();
        } else {
            self.state = SessionState::GameOver;
        }
    }

    fn commit_hovering(&mut self) {
        let time_left = self.hovering.time_left();
        if let Some(cleared) = self.board.place(&self.hovering) {
            self.stats.complete_placement(time_left, cleared);
            self.deal_next();
        }
    }

    fn deal_next(&mut self) {
        self.hovering = self.supply.pop();
        self.board.hover(&self.hovering);
    }
}
