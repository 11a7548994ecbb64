use crate::core::ClearedLines;

/// Fixed bonus for small simultaneous clears, indexed by total cleared lines.
///
/// Beyond the table the bonus keeps growing by the table's final step
/// (+300 per line), so boards of any size have a defined score for every
/// clear count up to `width + height`.
const CLEAR_BONUS: [usize; 5] = [0, 100, 300, 500, 800];
const CLEAR_BONUS_STEP: usize = 300;

/// Score, cleared-line count, and the message shown after the last placement.
///
/// Scoring has two parts, applied on every successful placement:
///
/// - a placement bonus of `2 x (countdown + 1)`, rewarding fast placement
/// - a clear bonus keyed by the total number of rows plus columns cleared
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    score: usize,
    lines_cleared: usize,
    pieces_placed: usize,
    message: String,
}

impl GameStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total score.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Cumulative rows plus columns cleared.
    #[must_use]
    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    /// Number of pieces committed to the board.
    #[must_use]
    pub fn pieces_placed(&self) -> usize {
        self.pieces_placed
    }

    /// Label for the most recent placement's clear, empty if nothing cleared.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Updates score, line count, and message after a successful placement.
    ///
    /// `time_left` is the piece's countdown at the moment it was committed.
    #[expect(clippy::cast_sign_loss)]
    pub fn complete_placement(&mut self, time_left: i32, cleared: ClearedLines) {
        self.pieces_placed += 1;
        self.score += (2 * (time_left + 1)).max(0) as usize;

        let total = cleared.total();
        self.lines_cleared += total;
        self.score += clear_bonus(total);
        self.message = clear_label(total);
    }
}

/// Score bonus for clearing `lines` rows and columns with one placement.
#[must_use]
pub fn clear_bonus(lines: usize) -> usize {
    match CLEAR_BONUS.get(lines) {
        Some(&bonus) => bonus,
        None => CLEAR_BONUS[CLEAR_BONUS.len() - 1] + CLEAR_BONUS_STEP * (lines - CLEAR_BONUS.len() + 1),
    }
}

fn clear_label(lines: usize) -> String {
    match lines {
        0 => String::new(),
        1 => "Single".to_owned(),
        2 => "Double".to_owned(),
        3 => "Triple".to_owned(),
        4 => "Tetris!".to_owned(),
        n => format!("{n} Lines!"),
    }
}
