//! Which directions keep a word on the board.

use lexigrid_core::{DirectionSet, Position};

/// Returns the directions along which a word of `word_len` letters starting
/// at `start` stays within a `width × height` board.
///
/// A direction group is removed when the last letter would land outside the
/// board on that side:
///
/// - upward if `row - (word_len - 1) < 0`
/// - downward if `row + (word_len - 1) >= height`
/// - leftward if `col - (word_len - 1) < 0`
/// - rightward if `col + (word_len - 1) >= width`
///
/// A start position off the board admits no direction.
///
/// # Examples
///
/// ```
/// use lexigrid_core::{DirectionSet, Position};
/// use lexigrid_generator::allowed_directions;
///
/// // Top-left corner of a 10x10 board: only right, down and down-right fit.
/// let dirs = allowed_directions(4, Position::new(0, 0), 10, 10);
/// assert_eq!(
///     dirs,
///     DirectionSet::RIGHT | DirectionSet::DOWN | DirectionSet::DOWN_RIGHT
/// );
/// ```
#[must_use]
pub fn allowed_directions(
    word_len: usize,
    start: Position,
    width: usize,
    height: usize,
) -> DirectionSet {
    let (row, col) = (start.row(), start.col());
    if row >= height || col >= width {
        return DirectionSet::empty();
    }

    let reach = word_len.saturating_sub(1);
    let mut dirs = DirectionSet::all();
    if row < reach {
        dirs.remove(DirectionSet::UPWARD);
    }
    if row + reach >= height {
        dirs.remove(DirectionSet::DOWNWARD);
    }
    if col < reach {
        dirs.remove(DirectionSet::LEFTWARD);
    }
    if col + reach >= width {
        dirs.remove(DirectionSet::RIGHTWARD);
    }
    dirs
}

#[cfg(test)]
mod tests {
    use lexigrid_core::{Board, Direction, Letter};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_interior_start_allows_everything() {
        // 3 cells of clearance on every side for a 4-letter word.
        let dirs = allowed_directions(4, Position::new(3, 3), 7, 7);
        assert_eq!(dirs, DirectionSet::all());
    }

    #[test]
    fn test_top_edge_removes_upward() {
        let dirs = allowed_directions(4, Position::new(2, 4), 9, 9);
        assert_eq!(dirs, DirectionSet::all() - DirectionSet::UPWARD);
    }

    #[test]
    fn test_bottom_edge_removes_downward() {
        let dirs = allowed_directions(4, Position::new(6, 4), 9, 9);
        assert_eq!(dirs, DirectionSet::all() - DirectionSet::DOWNWARD);
        // Row 5 leaves exactly enough room: 5 + 3 = 8 < 9.
        let dirs = allowed_directions(4, Position::new(5, 4), 9, 9);
        assert_eq!(dirs, DirectionSet::all());
    }

    #[test]
    fn test_left_edge_removes_leftward() {
        let dirs = allowed_directions(4, Position::new(4, 2), 9, 9);
        assert_eq!(dirs, DirectionSet::all() - DirectionSet::LEFTWARD);
        let dirs = allowed_directions(4, Position::new(4, 3), 9, 9);
        assert_eq!(dirs, DirectionSet::all());
    }

    #[test]
    fn test_right_edge_removes_rightward() {
        let dirs = allowed_directions(4, Position::new(4, 6), 9, 9);
        assert_eq!(dirs, DirectionSet::all() - DirectionSet::RIGHTWARD);
    }

    #[test]
    fn test_corner_combines_rules() {
        let dirs = allowed_directions(3, Position::new(9, 9), 10, 10);
        assert_eq!(
            dirs,
            DirectionSet::UP | DirectionSet::LEFT | DirectionSet::UP_LEFT
        );
    }

    #[test]
    fn test_word_too_long_for_board() {
        for row in 0..3 {
            for col in 0..3 {
                let dirs = allowed_directions(9, Position::new(row, col), 3, 3);
                assert!(dirs.is_empty(), "<{row},{col}>");
            }
        }
    }

    #[test]
    fn test_single_letter_fits_anywhere() {
        assert_eq!(
            allowed_directions(1, Position::new(0, 0), 1, 1),
            DirectionSet::all()
        );
    }

    #[test]
    fn test_off_board_start() {
        assert!(allowed_directions(1, Position::new(5, 0), 5, 5).is_empty());
        assert!(allowed_directions(1, Position::new(0, 5), 5, 5).is_empty());
    }

    proptest! {
        #[test]
        fn allowed_directions_stay_on_board(
            width in 1usize..12,
            height in 1usize..12,
            word_len in 1usize..12,
            row in 0usize..12,
            col in 0usize..12,
        ) {
            let start = Position::new(row, col);
            let board = Board::filled(width, height, Letter::ALL[0]);
            let dirs = allowed_directions(word_len, start, width, height);
            for dir in Direction::ALL {
                let fits = board.read_run(start, dir, word_len).is_some();
                prop_assert_eq!(dirs.contains_direction(dir), fits, "{}", dir);
            }
        }
    }
}
