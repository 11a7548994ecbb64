use arrayvec::ArrayVec;

use super::piece::{PieceKind, UnplacedTetromino};

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No block.
    #[default]
    Empty,
    /// A committed block carrying the identity of the piece it came from.
    Block(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Render classification of one board coordinate.
///
/// A single query per cell lets every rendering backend map the variants to
/// its own visual representation independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Nothing here.
    Empty,
    /// A committed block.
    Block(PieceKind),
    /// The hovering piece covers this cell; `time_left` is its countdown.
    Hover { kind: PieceKind, time_left: i32 },
    /// The hovering piece overlaps a committed block here.
    Illegal,
}

/// Rows and columns cleared by one placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearedLines {
    pub rows: usize,
    pub cols: usize,
}

impl ClearedLines {
    #[must_use]
    pub fn total(self) -> usize {
        self.rows + self.cols
    }
}

/// The fixed-size playing field.
///
/// Owns the cell matrix plus the transient hover state: a copy of the piece
/// currently hovering over the board and the set of coordinates where that
/// piece overlaps committed blocks. The illegal set is recomputed from
/// scratch on every [`Board::hover`] call and never mutated independently;
/// callers must re-hover after every change to the hovering piece so it is
/// never stale.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    hovering: Option<UnplacedTetromino>,
    illegal: ArrayVec<(usize, usize), 4>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; width * height],
            width,
            height,
            hovering: None,
            illegal: ArrayVec::new(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Coordinates where the hovering piece overlaps committed blocks, as of
    /// the last [`Board::hover`] call.
    #[must_use]
    pub fn illegal_cells(&self) -> &[(usize, usize)] {
        &self.illegal
    }

    /// Records `piece` as the hovering candidate and recomputes the
    /// illegal-cell set from the piece's global cells and the current board
    /// occupancy.
    pub fn hover(&mut self, piece: &UnplacedTetromino) {
        self.illegal.clear();
        for (x, y) in piece.global_cells() {
            if !self.cell(x, y).is_empty() {
                self.illegal.push((x, y));
            }
        }
        self.hovering = Some(*piece);
    }

    /// Commits the piece to the board if its current position is legal.
    ///
    /// Refuses (returning `None`, board unchanged) whenever the illegal-cell
    /// set as of the last [`Board::hover`] call is non-empty. On success
    /// every global cell of the piece becomes a committed block with the
    /// piece's identity, full rows and columns are cleared, and the cleared
    /// counts are returned.
    pub fn place(&mut self, piece: &UnplacedTetromino) -> Option<ClearedLines> {
        if !self.illegal.is_empty() {
            return None;
        }
        for (x, y) in piece.global_cells() {
            self.cells[y * self.width + x] = Cell::Block(piece.kind());
        }
        self.hovering = None;
        Some(self.clear_full_lines())
    }

    /// Clears every full row and every full column.
    ///
    /// Rows and columns are detected in one scan before anything is reset, so
    /// a cell at the intersection of a full row and a full column counts for
    /// both but is cleared once.
    fn clear_full_lines(&mut self) -> ClearedLines {
        let full_rows: Vec<usize> = (0..self.height)
            .filter(|&y| (0..self.width).all(|x| !self.cell(x, y).is_empty()))
            .collect();
        let full_cols: Vec<usize> = (0..self.width)
            .filter(|&x| (0..self.height).all(|y| !self.cell(x, y).is_empty()))
            .collect();

        for &y in &full_rows {
            self.cells[y * self.width..(y + 1) * self.width].fill(Cell::Empty);
        }
        for &x in &full_cols {
            for y in 0..self.height {
                self.cells[y * self.width + x] = Cell::Empty;
            }
        }

        ClearedLines {
            rows: full_rows.len(),
            cols: full_cols.len(),
        }
    }

    /// Classifies one coordinate for rendering.
    ///
    /// Illegal overlap wins over the hover marker, which wins over the
    /// committed-block content underneath.
    #[must_use]
    pub fn cell_view(&self, x: usize, y: usize) -> CellView {
        if self.illegal.contains(&(x, y)) {
            return CellView::Illegal;
        }
        if let Some(piece) = &self.hovering
            && piece.global_cells().any(|cell| cell == (x, y))
        {
            return CellView::Hover {
                kind: piece.kind(),
                time_left: piece.time_left(),
            };
        }
        match self.cell(x, y) {
            Cell::Empty => CellView::Empty,
            Cell::Block(kind) => CellView::Block(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_at(kind: PieceKind, anchor: (usize, usize)) -> UnplacedTetromino {
        UnplacedTetromino::new(kind.blocks(), anchor, 4, kind)
    }

    fn occupied_count(board: &Board) -> usize {
        (0..board.height())
            .flat_map(|y| (0..board.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| !board.cell(x, y).is_empty())
            .count()
    }

    #[test]
    fn test_hover_over_empty_board_is_legal() {
        let mut board = Board::new(10, 20);
        let piece = piece_at(PieceKind::I, (0, 0));
        board.hover(&piece);
        assert!(board.illegal_cells().is_empty());
    }

    #[test]
    fn test_hover_reports_exact_overlap() {
        let mut board = Board::new(10, 20);
        let first = piece_at(PieceKind::I, (0, 0));
        board.hover(&first);
        assert!(board.place(&first).is_some());

        // O at (0, 0) covers (0,0) (1,0) (0,1) (1,1); only the top row
        // overlaps the committed I bar.
        let second = piece_at(PieceKind::O, (0, 0));
        board.hover(&second);
        let mut illegal = board.illegal_cells().to_vec();
        illegal.sort_unstable();
        assert_eq!(illegal, vec![(0, 0), (1, 0)]);
    }

    #[test]
    fn test_hover_recompute_clears_stale_entries() {
        let mut board = Board::new(10, 20);
        let bar = piece_at(PieceKind::I, (0, 0));
        board.hover(&bar);
        assert!(board.place(&bar).is_some());

        let mut piece = piece_at(PieceKind::O, (0, 0));
        board.hover(&piece);
        assert!(!board.illegal_cells().is_empty());

        piece.translate(0, 5, 10, 20);
        board.hover(&piece);
        assert!(board.illegal_cells().is_empty());
    }

    #[test]
    fn test_place_refused_while_illegal() {
        let mut board = Board::new(10, 20);
        let bar = piece_at(PieceKind::I, (0, 0));
        board.hover(&bar);
        assert!(board.place(&bar).is_some());
        let before = occupied_count(&board);

        let overlapping = piece_at(PieceKind::O, (0, 0));
        board.hover(&overlapping);
        assert_eq!(board.place(&overlapping), None);
        assert_eq!(occupied_count(&board), before, "board must be unchanged");
    }

    #[test]
    fn test_place_commits_blocks_with_identity() {
        let mut board = Board::new(10, 20);
        let bar = piece_at(PieceKind::I, (0, 0));
        board.hover(&bar);
        let cleared = board.place(&bar).unwrap();
        assert_eq!(cleared.total(), 0);

        assert_eq!(occupied_count(&board), 4);
        for x in 0..4 {
            assert_eq!(board.cell(x, 0), Cell::Block(PieceKind::I));
        }
    }

    #[test]
    fn test_full_row_clears() {
        let mut board = Board::new(4, 4);
        // Fill row 0 except the last cell.
        let left = UnplacedTetromino::new([(0, 0), (1, 0), (2, 0), (0, 1)], (0, 0), 4, PieceKind::J);
        board.hover(&left);
        assert_eq!(board.place(&left).unwrap().total(), 0);

        // Complete the row with a piece whose top block lands on (3, 0)
        // without filling any column.
        let right = UnplacedTetromino::new([(1, 0), (0, 1), (1, 1), (0, 2)], (2, 0), 4, PieceKind::S);
        board.hover(&right);
        let cleared = board.place(&right).unwrap();
        assert_eq!(cleared, ClearedLines { rows: 1, cols: 0 });

        for x in 0..4 {
            assert!(board.cell(x, 0).is_empty(), "row 0 must be empty");
        }
        // Blocks outside the cleared row survive.
        assert_eq!(board.cell(0, 1), Cell::Block(PieceKind::J));
        assert_eq!(board.cell(3, 1), Cell::Block(PieceKind::S));
    }

    #[test]
    fn test_full_column_clears() {
        let mut board = Board::new(4, 4);
        let bar = UnplacedTetromino::new([(0, 0), (0, 1), (0, 2), (0, 3)], (2, 0), 4, PieceKind::I);
        board.hover(&bar);
        let cleared = board.place(&bar).unwrap();
        assert_eq!(cleared, ClearedLines { rows: 0, cols: 1 });
        for y in 0..4 {
            assert!(board.cell(2, y).is_empty());
        }
    }

    #[test]
    fn test_row_and_column_clear_together() {
        let mut board = Board::new(4, 4);
        // Leave row 1 and column 1 each one cell short, with the shared gap
        // at their intersection (1, 1).
        let setup = [
            UnplacedTetromino::new([(1, 0), (0, 1), (2, 1), (3, 1)], (0, 0), 4, PieceKind::O),
            UnplacedTetromino::new([(1, 2), (1, 3), (3, 0), (3, 3)], (0, 0), 4, PieceKind::S),
        ];
        for piece in &setup {
            board.hover(piece);
            assert_eq!(board.place(piece).unwrap().total(), 0);
        }

        // Filling (1, 1) completes row 1 and column 1 at once; the other
        // blocks land on cells that complete nothing.
        let last = UnplacedTetromino::new([(1, 1), (0, 0), (2, 2), (0, 3)], (0, 0), 4, PieceKind::T);
        board.hover(&last);
        let cleared = board.place(&last).unwrap();
        // The shared cell counts for both lines but is cleared once.
        assert_eq!(cleared, ClearedLines { rows: 1, cols: 1 });
        assert_eq!(cleared.total(), 2);

        for x in 0..4 {
            assert!(board.cell(x, 1).is_empty());
        }
        for y in 0..4 {
            assert!(board.cell(1, y).is_empty());
        }
        // Blocks outside the cleared lines survive.
        assert_eq!(board.cell(0, 0), Cell::Block(PieceKind::T));
        assert_eq!(board.cell(3, 0), Cell::Block(PieceKind::S));
        assert_eq!(board.cell(2, 2), Cell::Block(PieceKind::T));
    }

    #[test]
    fn test_cell_view_classification() {
        let mut board = Board::new(10, 20);
        let bar = piece_at(PieceKind::I, (0, 0));
        board.hover(&bar);
        assert!(board.place(&bar).is_some());

        let hover = piece_at(PieceKind::O, (1, 0));
        board.hover(&hover);

        // (1,0) and (2,0) overlap the committed bar.
        assert_eq!(board.cell_view(1, 0), CellView::Illegal);
        assert_eq!(board.cell_view(2, 0), CellView::Illegal);
        // (1,1) and (2,1) are hover-only.
        assert_eq!(
            board.cell_view(1, 1),
            CellView::Hover {
                kind: PieceKind::O,
                time_left: 4
            }
        );
        // Committed block outside the hover footprint.
        assert_eq!(board.cell_view(0, 0), CellView::Block(PieceKind::I));
        // Plain empty cell.
        assert_eq!(board.cell_view(5, 5), CellView::Empty);
    }
}
