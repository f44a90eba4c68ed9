use std::fmt;
use std::ops::BitOr;

/// A set of seat indexes. Used for which seats are still active in the
/// hand and which seats have acted on the current street.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerBitSet {
    set: u32,
}

/// The most seats a bitset can track.
pub const MAX_SEATS: usize = 32;

impl PlayerBitSet {
    /// A set with every seat from `0..players` enabled.
    pub fn new(players: usize) -> Self {
        let set = if players >= MAX_SEATS {
            u32::MAX
        } else {
            (1 << players) - 1
        };
        Self { set }
    }
    pub fn count(&self) -> usize {
        self.set.count_ones() as usize
    }
    pub fn empty(&self) -> bool {
        self.set == 0
    }
    pub fn enable(&mut self, idx: usize) {
        self.set |= 1 << idx;
    }
    pub fn disable(&mut self, idx: usize) {
        self.set &= !(1 << idx);
    }
    pub fn get(&self, idx: usize) -> bool {
        idx < MAX_SEATS && (self.set & (1 << idx)) != 0
    }
    pub fn clear(&mut self) {
        self.set = 0;
    }
    pub fn ones(self) -> ActivePlayerBitSetIter {
        ActivePlayerBitSetIter { set: self.set }
    }
}

impl BitOr for PlayerBitSet {
    type Output = PlayerBitSet;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            set: self.set | rhs.set,
        }
    }
}

impl fmt::Debug for PlayerBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

pub struct ActivePlayerBitSetIter {
    set: u32,
}

impl Iterator for ActivePlayerBitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.set == 0 {
            None
        } else {
            // Find the index of the first non-zero
            let idx = self.set.trailing_zeros() as usize;
            // Then set the first non-zero to zero
            self.set &= !(1 << idx);
            Some(idx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_count() {
        assert_eq!(7, PlayerBitSet::new(7).count());
        assert_eq!(MAX_SEATS, PlayerBitSet::new(MAX_SEATS).count());
    }

    #[test]
    fn test_default_zero_count() {
        assert_eq!(0, PlayerBitSet::default().count());
        assert!(PlayerBitSet::default().empty());
    }

    #[test]
    fn test_disable_count() {
        let mut s = PlayerBitSet::new(7);

        assert_eq!(7, s.count());
        s.disable(6);
        assert_eq!(6, s.count());
        s.disable(0);
        assert_eq!(5, s.count());
    }

    #[test]
    fn test_enable_count() {
        let mut s = PlayerBitSet::default();

        s.enable(0);
        assert_eq!(1, s.count());
        s.enable(0);
        assert_eq!(1, s.count());

        s.enable(2);
        assert_eq!(2, s.count());

        s.disable(0);
        assert_eq!(1, s.count());
        assert!(s.get(2));
        assert!(!s.get(0));
        assert!(!s.get(40));
    }

    #[test]
    fn test_iter_with_disabled() {
        let mut s = PlayerBitSet::new(3);
        assert_eq!(vec![0, 1, 2], s.ones().collect::<Vec<_>>());

        s.disable(0);
        assert_eq!(vec![1, 2], s.ones().collect::<Vec<_>>());

        s.clear();
        assert_eq!(None, s.ones().next());
    }

    #[test]
    fn test_bitor() {
        let mut a = PlayerBitSet::default();
        let mut b = PlayerBitSet::default();
        a.enable(1);
        b.enable(4);
        assert_eq!(vec![1, 4], (a | b).ones().collect::<Vec<_>>());
    }
}
