//! Placement directions and sets of directions.
//!
//! A word is always laid out along one of the 8 straight lines through its
//! start cell: the 4 orthogonal and the 4 diagonal ones. [`DirectionSet`]
//! is a bitmask over those 8 members, used to track which directions are
//! still worth trying for a word.

use std::fmt::{self, Display};

use rand::RngExt;

/// One of the 8 unit steps a word can follow across the board.
///
/// Rows grow downwards and columns grow to the right, so [`Direction::Up`]
/// decreases the row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
    /// Diagonally up and to the left.
    UpLeft,
    /// Diagonally up and to the right.
    UpRight,
    /// Diagonally down and to the left.
    DownLeft,
    /// Diagonally down and to the right.
    DownRight,
}

impl Direction {
    /// All directions, in the bit order used by [`DirectionSet`].
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// Returns the `(row, col)` delta of a single step.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (-1, 1),
            Self::DownLeft => (1, -1),
            Self::DownRight => (1, 1),
        }
    }

    /// Returns a short human-readable name, such as `"down-left"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        }
    }

    /// Returns the single-member set containing this direction.
    #[must_use]
    pub const fn to_set(self) -> DirectionSet {
        match self {
            Self::Up => DirectionSet::UP,
            Self::Down => DirectionSet::DOWN,
            Self::Left => DirectionSet::LEFT,
            Self::Right => DirectionSet::RIGHT,
            Self::UpLeft => DirectionSet::UP_LEFT,
            Self::UpRight => DirectionSet::UP_RIGHT,
            Self::DownLeft => DirectionSet::DOWN_LEFT,
            Self::DownRight => DirectionSet::DOWN_RIGHT,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Direction> for DirectionSet {
    fn from(dir: Direction) -> Self {
        dir.to_set()
    }
}

bitflags::bitflags! {
    /// A set of [`Direction`]s, stored as an 8-bit mask.
    ///
    /// Besides one flag per direction, the set defines the four "edge"
    /// groups used when trimming directions that would leave the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexigrid_core::{Direction, DirectionSet};
    ///
    /// let mut set = DirectionSet::all();
    /// set.remove(DirectionSet::UPWARD);
    /// set.remove_direction(Direction::Left);
    ///
    /// assert_eq!(set.len(), 4);
    /// assert!(!set.contains_direction(Direction::UpRight));
    /// assert!(set.contains_direction(Direction::DownLeft));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DirectionSet: u8 {
        /// [`Direction::Up`].
        const UP = 1 << 0;
        /// [`Direction::Down`].
        const DOWN = 1 << 1;
        /// [`Direction::Left`].
        const LEFT = 1 << 2;
        /// [`Direction::Right`].
        const RIGHT = 1 << 3;
        /// [`Direction::UpLeft`].
        const UP_LEFT = 1 << 4;
        /// [`Direction::UpRight`].
        const UP_RIGHT = 1 << 5;
        /// [`Direction::DownLeft`].
        const DOWN_LEFT = 1 << 6;
        /// [`Direction::DownRight`].
        const DOWN_RIGHT = 1 << 7;

        /// Directions that decrease the row.
        const UPWARD = Self::UP.bits() | Self::UP_LEFT.bits() | Self::UP_RIGHT.bits();
        /// Directions that increase the row.
        const DOWNWARD = Self::DOWN.bits() | Self::DOWN_LEFT.bits() | Self::DOWN_RIGHT.bits();
        /// Directions that decrease the column.
        const LEFTWARD = Self::LEFT.bits() | Self::UP_LEFT.bits() | Self::DOWN_LEFT.bits();
        /// Directions that increase the column.
        const RIGHTWARD = Self::RIGHT.bits() | Self::UP_RIGHT.bits() | Self::DOWN_RIGHT.bits();
    }
}

impl DirectionSet {
    /// Returns `true` if `dir` is a member of the set.
    #[must_use]
    pub const fn contains_direction(self, dir: Direction) -> bool {
        self.contains(dir.to_set())
    }

    /// Removes `dir` from the set.
    pub fn remove_direction(&mut self, dir: Direction) {
        self.remove(dir.to_set());
    }

    /// Returns the number of directions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.intersection(Self::all()).bits().count_ones() as usize
    }

    /// Returns an iterator over the member directions in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.contains_direction(dir))
    }

    /// Picks a member direction uniformly at random.
    ///
    /// Draws directions from all 8 until one lands in the set, so every
    /// member is equally likely. Returns `None` if the set is empty.
    pub fn pick_random<R>(self, rng: &mut R) -> Option<Direction>
    where
        R: RngExt + ?Sized,
    {
        let set = self.intersection(Self::all());
        if set.is_empty() {
            return None;
        }
        loop {
            let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            if set.contains_direction(dir) {
                return Some(dir);
            }
        }
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, dir| set.union(dir.to_set()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_each_direction_has_its_own_bit() {
        let mut seen = DirectionSet::empty();
        for dir in Direction::ALL {
            let bit = dir.to_set();
            assert_eq!(bit.len(), 1, "{dir}");
            assert!(!seen.intersects(bit), "{dir} shares a bit");
            seen |= bit;
        }
        assert_eq!(seen, DirectionSet::all());
    }

    #[test]
    fn test_edge_groups_match_offsets() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert_eq!(DirectionSet::UPWARD.contains_direction(dir), dr < 0);
            assert_eq!(DirectionSet::DOWNWARD.contains_direction(dir), dr > 0);
            assert_eq!(DirectionSet::LEFTWARD.contains_direction(dir), dc < 0);
            assert_eq!(DirectionSet::RIGHTWARD.contains_direction(dir), dc > 0);
        }
    }

    #[test]
    fn test_set_operations() {
        let mut set = DirectionSet::all();
        assert_eq!(set.len(), 8);

        set.remove_direction(Direction::Up);
        set.remove_direction(Direction::Up);
        assert_eq!(set.len(), 7);
        assert!(!set.contains_direction(Direction::Up));

        let collected: DirectionSet = set.directions().collect();
        assert_eq!(collected, set);

        assert!(DirectionSet::empty().is_empty());
        assert_eq!(DirectionSet::empty().directions().count(), 0);
    }

    #[test]
    fn test_pick_random_empty() {
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(DirectionSet::empty().pick_random(&mut rng), None);
        assert_eq!(DirectionSet::from_bits_retain(0).pick_random(&mut rng), None);
    }

    #[test]
    fn test_pick_random_reaches_every_member() {
        let mut rng = Pcg64::seed_from_u64(7);
        let set = DirectionSet::DOWN | DirectionSet::UP_LEFT | DirectionSet::RIGHT;
        let mut hit = DirectionSet::empty();
        for _ in 0..200 {
            let dir = set.pick_random(&mut rng).unwrap();
            hit |= dir.to_set();
        }
        assert_eq!(hit, set);
    }

    proptest! {
        #[test]
        fn pick_random_stays_in_set(bits in 1u8..=255, seed in any::<u64>()) {
            let set = DirectionSet::from_bits_truncate(bits);
            let mut rng = Pcg64::seed_from_u64(seed);
            let dir = set.pick_random(&mut rng).unwrap();
            prop_assert!(set.contains_direction(dir));
        }
    }
}
