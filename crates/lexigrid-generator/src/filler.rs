//! Random filler letters.

use lexigrid_core::{Board, Letter};
use rand::RngExt;

/// Creates a `width × height` board of independent, uniformly random letters.
///
/// Cells not covered by a placed word keep these letters in the final puzzle.
pub fn generate_board<R>(width: usize, height: usize, rng: &mut R) -> Board
where
    R: RngExt + ?Sized,
{
    Board::from_fn(width, height, |_| {
        Letter::from_index(rng.random_range(0..Letter::COUNT))
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_dimensions() {
        let mut rng = Pcg64::seed_from_u64(1);
        let board = generate_board(7, 4, &mut rng);
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 4);
        assert_eq!(board.rows().count(), 4);
        assert!(board.rows().all(|row| row.len() == 7));
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = generate_board(10, 10, &mut Pcg64::seed_from_u64(42));
        let b = generate_board(10, 10, &mut Pcg64::seed_from_u64(42));
        let c = generate_board(10, 10, &mut Pcg64::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_uses_whole_alphabet() {
        let mut rng = Pcg64::seed_from_u64(3);
        let board = generate_board(40, 40, &mut rng);
        let mut seen = [false; Letter::COUNT];
        for row in board.rows() {
            for letter in row {
                seen[letter.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
