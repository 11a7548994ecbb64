/// Identity of one of the seven canonical tetromino shapes.
///
/// The kind doubles as the color tag of a placed block: every shape keeps a
/// distinct identity on the board after placement so renderers can map it to
/// a visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    I = 0,
    O = 1,
    T = 2,
    J = 3,
    L = 4,
    S = 5,
    Z = 6,
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; PieceKind::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }

    /// Canonical relative block coordinates of this shape, unrotated.
    ///
    /// All coordinates are nonnegative and anchored at the shape's local
    /// origin.
    #[must_use]
    pub const fn blocks(self) -> [(u8, u8); 4] {
        match self {
            PieceKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
            PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            PieceKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
            PieceKind::J => [(1, 0), (1, 1), (1, 2), (0, 2)],
            PieceKind::L => [(0, 0), (0, 1), (1, 2), (0, 2)],
            PieceKind::S => [(0, 1), (1, 1), (1, 0), (2, 0)],
            PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
        }
    }
}

/// A four-block tetromino that has not been committed to the board yet.
///
/// The shape is a set of relative block coordinates (always nonnegative),
/// positioned on the board by a top-left anchor. A countdown forces a
/// placement attempt when it reaches zero. The bounding `width`/`height` are
/// derived from the relative coordinates and recomputed after every rotation,
/// so bounds-checked translation never observes stale dimensions.
///
/// Rotation happens once, at supply-generation time; during play a piece only
/// translates and ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnplacedTetromino {
    blocks: [(u8, u8); 4],
    anchor: (usize, usize),
    time_left: i32,
    kind: PieceKind,
    width: u8,
    height: u8,
}

impl UnplacedTetromino {
    /// Creates a piece from relative block coordinates, a board anchor, a
    /// starting countdown, and a shape identity.
    #[must_use]
    pub fn new(
        blocks: [(u8, u8); 4],
        anchor: (usize, usize),
        time_left: i32,
        kind: PieceKind,
    ) -> Self {
        let mut piece = Self {
            blocks,
            anchor,
            time_left,
            kind,
            width: 0,
            height: 0,
        };
        piece.compute_dimensions();
        piece
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    #[must_use]
    pub fn time_left(&self) -> i32 {
        self.time_left
    }

    /// Bounding width (max relative x + 1).
    #[must_use]
    pub fn width(&self) -> usize {
        usize::from(self.width)
    }

    /// Bounding height (max relative y + 1).
    #[must_use]
    pub fn height(&self) -> usize {
        usize::from(self.height)
    }

    /// Decrements the countdown and returns the new value.
    ///
    /// The caller compares the result against zero to decide whether a
    /// placement must be forced.
    pub fn tick(&mut self) -> i32 {
        self.time_left -= 1;
        self.time_left
    }

    /// Relative block coordinates in the piece's own frame.
    pub fn relative_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.blocks
            .into_iter()
            .map(|(x, y)| (usize::from(x), usize::from(y)))
    }

    /// Absolute board coordinates of the piece's blocks.
    ///
    /// Recomputed from the current anchor on every call; the result is not
    /// stable across a translation or rotation.
    pub fn global_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (ax, ay) = self.anchor;
        self.blocks
            .into_iter()
            .map(move |(x, y)| (ax + usize::from(x), ay + usize::from(y)))
    }

    /// Rotates the shape about its local origin by a multiple of 90 degrees.
    ///
    /// Cosine and sine of such angles are exact integers, so the rotation is
    /// pure integer arithmetic. Afterwards the coordinates are shifted so the
    /// minimum x and y are both zero, and the bounding box is recomputed.
    #[expect(clippy::cast_sign_loss)]
    pub fn rotate(&mut self, degrees: i32) {
        debug_assert!(degrees % 90 == 0, "rotation must be a multiple of 90");
        let (cos, sin): (i16, i16) = match degrees.div_euclid(90).rem_euclid(4) {
            0 => (1, 0),
            1 => (0, 1),
            2 => (-1, 0),
            _ => (0, -1),
        };

        let mut rotated = [(0_i16, 0_i16); 4];
        let mut min_x = 0_i16;
        let mut min_y = 0_i16;
        for (out, (x, y)) in rotated.iter_mut().zip(self.blocks) {
            let (x, y) = (i16::from(x), i16::from(y));
            *out = (cos * x - sin * y, sin * x + cos * y);
            min_x = min_x.min(out.0);
            min_y = min_y.min(out.1);
        }

        // keep all coordinates nonnegative
        for ((x, y), (rx, ry)) in self.blocks.iter_mut().zip(rotated) {
            *x = (rx - min_x) as u8;
            *y = (ry - min_y) as u8;
        }

        self.compute_dimensions();
    }

    /// Moves the anchor by `(dx, dy)`, clamping so the bounding box stays
    /// fully inside `[0, board_width) x [0, board_height)`.
    ///
    /// Never fails; out-of-range deltas silently stop at the edge. This is
    /// the only way a piece is repositioned during play.
    pub fn translate(&mut self, dx: i32, dy: i32, board_width: usize, board_height: usize) {
        self.anchor.0 = clamped_add(
            self.anchor.0,
            dx,
            board_width.saturating_sub(self.width()),
        );
        self.anchor.1 = clamped_add(
            self.anchor.1,
            dy,
            board_height.saturating_sub(self.height()),
        );
    }

    fn compute_dimensions(&mut self) {
        let mut max_x = 0;
        let mut max_y = 0;
        for (x, y) in self.blocks {
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        self.width = max_x + 1;
        self.height = max_y + 1;
    }
}

fn clamped_add(base: usize, delta: i32, limit: usize) -> usize {
    let moved = if delta < 0 {
        base.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        base.saturating_add(delta.unsigned_abs() as usize)
    };
    moved.min(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_cells(piece: &UnplacedTetromino) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = piece.relative_cells().collect();
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_new_computes_dimensions() {
        let piece = UnplacedTetromino::new(PieceKind::I.blocks(), (0, 0), 4, PieceKind::I);
        assert_eq!(piece.width(), 4);
        assert_eq!(piece.height(), 1);

        let piece = UnplacedTetromino::new(PieceKind::J.blocks(), (0, 0), 4, PieceKind::J);
        assert_eq!(piece.width(), 2);
        assert_eq!(piece.height(), 3);
    }

    #[test]
    fn test_rotate_quarter_turn_is_exact() {
        let mut piece = UnplacedTetromino::new(PieceKind::I.blocks(), (0, 0), 4, PieceKind::I);
        piece.rotate(90);

        // Horizontal bar becomes a vertical bar, renormalized to the origin.
        assert_eq!(sorted_cells(&piece), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(piece.width(), 1);
        assert_eq!(piece.height(), 4);
    }

    #[test]
    fn test_rotate_four_times_restores_shape() {
        for kind in PieceKind::ALL {
            let original = UnplacedTetromino::new(kind.blocks(), (0, 0), 4, kind);
            let mut piece = original;
            for _ in 0..4 {
                piece.rotate(90);
                assert!(
                    piece.relative_cells().all(|(x, y)| x < 4 && y < 4),
                    "coordinates must stay nonnegative and small for {kind:?}"
                );
            }
            assert_eq!(
                sorted_cells(&piece),
                sorted_cells(&original),
                "four quarter turns must restore {kind:?}"
            );
        }
    }

    #[test]
    fn test_rotate_negative_and_full_turns() {
        let mut a = UnplacedTetromino::new(PieceKind::T.blocks(), (0, 0), 4, PieceKind::T);
        let mut b = a;
        a.rotate(-90);
        b.rotate(270);
        assert_eq!(sorted_cells(&a), sorted_cells(&b));

        let mut c = UnplacedTetromino::new(PieceKind::T.blocks(), (0, 0), 4, PieceKind::T);
        c.rotate(360);
        assert_eq!(sorted_cells(&c), sorted_cells(&UnplacedTetromino::new(
            PieceKind::T.blocks(),
            (0, 0),
            4,
            PieceKind::T,
        )));
    }

    #[test]
    fn test_translate_moves_anchor() {
        let mut piece = UnplacedTetromino::new(PieceKind::O.blocks(), (4, 4), 4, PieceKind::O);
        piece.translate(1, -2, 10, 20);
        assert_eq!(piece.anchor(), (5, 2));
    }

    #[test]
    fn test_translate_clamps_to_board() {
        let mut piece = UnplacedTetromino::new(PieceKind::I.blocks(), (5, 5), 4, PieceKind::I);

        piece.translate(1000, 1000, 10, 20);
        // I is 4 wide and 1 tall, so the anchor stops at (6, 19).
        assert_eq!(piece.anchor(), (6, 19));

        piece.translate(-1000, -1000, 10, 20);
        assert_eq!(piece.anchor(), (0, 0));
    }

    #[test]
    fn test_translate_respects_rotated_bounds() {
        let mut piece = UnplacedTetromino::new(PieceKind::I.blocks(), (0, 0), 4, PieceKind::I);
        piece.rotate(90);
        piece.translate(1000, 1000, 10, 20);
        // Now 1 wide and 4 tall.
        assert_eq!(piece.anchor(), (9, 16));
    }

    #[test]
    fn test_global_cells_follow_anchor() {
        let piece = UnplacedTetromino::new(PieceKind::O.blocks(), (3, 7), 4, PieceKind::O);
        let mut cells: Vec<_> = piece.global_cells().collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![(3, 7), (3, 8), (4, 7), (4, 8)]);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut piece = UnplacedTetromino::new(PieceKind::Z.blocks(), (0, 0), 2, PieceKind::Z);
        assert_eq!(piece.tick(), 1);
        assert_eq!(piece.tick(), 0);
        assert_eq!(piece.time_left(), 0);
    }
}
