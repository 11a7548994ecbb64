use std::collections::VecDeque;

use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg32;

use crate::core::{PieceKind, UnplacedTetromino};

/// Countdown every freshly dealt piece starts with.
pub const START_COUNTDOWN: i32 = 4;

/// Produces the sequence of upcoming pieces.
///
/// Each refill contains all seven canonical shapes exactly once, uniformly
/// shuffled, and each piece is independently pre-rotated by 0/90/180/270
/// degrees. The queue is refilled eagerly (at construction and after every
/// pop), so callers never observe it empty.
///
/// The supply owns its random source, a seedable [`Pcg32`], so a given seed
/// reproduces the exact same piece sequence.
#[derive(Debug, Clone)]
pub struct PieceSupply {
    rng: Pcg32,
    queue: VecDeque<UnplacedTetromino>,
    board_width: usize,
    board_height: usize,
}

impl PieceSupply {
    /// Creates a supply for a board of the given size, seeded from the
    /// process-wide entropy source.
    #[must_use]
    pub fn new(board_width: usize, board_height: usize) -> Self {
        Self::with_seed(board_width, board_height, rand::rng().random())
    }

    /// Like [`Self::new`], but with an explicit seed for deterministic piece
    /// sequences.
    #[must_use]
    pub fn with_seed(board_width: usize, board_height: usize, seed: u64) -> Self {
        let mut supply = Self {
            rng: Pcg32::seed_from_u64(seed),
            queue: VecDeque::with_capacity(PieceKind::LEN),
            board_width,
            board_height,
        };
        supply.refill();
        supply
    }

    /// Returns the next piece without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty (should never happen).
    #[must_use]
    pub fn peek(&self) -> &UnplacedTetromino {
        self.queue.front().expect("piece queue is never empty")
    }

    /// Removes and returns the next piece, refilling the queue afterwards if
    /// it ran dry.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty (should never happen).
    pub fn pop(&mut self) -> UnplacedTetromino {
        let piece = self
            .queue
            .pop_front()
            .expect("piece queue is never empty");
        if self.queue.is_empty() {
            self.refill();
        }
        piece
    }

    /// Appends one shuffled, pre-rotated set of the seven canonical shapes.
    fn refill(&mut self) {
        let spawn = (self.board_width / 2, self.board_height / 2);

        let mut kinds = PieceKind::ALL;
        kinds.shuffle(&mut self.rng);

        for kind in kinds {
            let mut piece = UnplacedTetromino::new(kind.blocks(), spawn, START_COUNTDOWN, kind);
            piece.rotate(90 * self.rng.random_range(0..4));
            // A zero-delta translate clamps the spawn anchor into bounds for
            // boards too small to center a 4-wide piece.
            piece.translate(0, 0, self.board_width, self.board_height);
            self.queue.push_back(piece);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refill_deals_each_shape_once() {
        let mut supply = PieceSupply::with_seed(10, 20, 1);
        let mut seen = [0_usize; PieceKind::LEN];
        for _ in 0..PieceKind::LEN {
            seen[supply.pop().kind() as usize] += 1;
        }
        assert_eq!(seen, [1; PieceKind::LEN], "one of each of the 7 shapes");
    }

    #[test]
    fn test_queue_never_observed_empty() {
        let mut supply = PieceSupply::with_seed(10, 20, 2);
        for _ in 0..PieceKind::LEN * 3 {
            let peeked = *supply.peek();
            assert_eq!(supply.pop(), peeked, "peek must match the next pop");
        }
        // Still answers after draining several refills.
        let _ = supply.peek();
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceSupply::with_seed(10, 20, 42);
        let mut b = PieceSupply::with_seed(10, 20, 42);
        for _ in 0..PieceKind::LEN * 2 {
            assert_eq!(a.pop(), b.pop());
        }
    }

    #[test]
    fn test_dealt_pieces_start_inside_board() {
        for seed in 0..20 {
            let mut supply = PieceSupply::with_seed(10, 20, seed);
            for _ in 0..PieceKind::LEN {
                let piece = supply.pop();
                assert_eq!(piece.time_left(), START_COUNTDOWN);
                assert!(
                    piece
                        .global_cells()
                        .all(|(x, y)| x < 10 && y < 20),
                    "spawned piece must fit the board"
                );
            }
        }
    }

    #[test]
    fn test_spawn_clamped_on_tiny_board() {
        let mut supply = PieceSupply::with_seed(4, 4, 7);
        for _ in 0..PieceKind::LEN {
            let piece = supply.pop();
            assert!(piece.global_cells().all(|(x, y)| x < 4 && y < 4));
        }
    }

    #[test]
    fn test_rotations_vary_across_refills() {
        // With a full set of refills the pre-rotation should produce at least
        // one piece whose bounding box differs from the canonical shape.
        let mut supply = PieceSupply::with_seed(10, 20, 3);
        let varied = (0..PieceKind::LEN * 4).any(|_| {
            let piece = supply.pop();
            let canonical =
                UnplacedTetromino::new(piece.kind().blocks(), (0, 0), START_COUNTDOWN, piece.kind());
            piece.width() != canonical.width() || piece.height() != canonical.height()
        });
        assert!(varied, "random pre-rotation never changed any piece");
    }
}
