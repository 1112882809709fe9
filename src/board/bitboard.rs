//! Occupancy masks for one disc color

/// One bit per cell, indexed column-major (`col * rows + row`).
/// Boards are capped at 64 cells so a single word is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < 64);
        self.bits |= 1u64 << idx;
    }

    /// Clear a bit at cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < 64);
        self.bits &= !(1u64 << idx);
    }

    /// Check if bit is set at cell index
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < 64);
        (self.bits >> idx) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        assert_eq!(bb.count(), 0);
        bb.set(0);
        bb.set(41);
        assert!(bb.get(0));
        assert!(bb.get(41));
        assert!(!bb.get(1));
        assert_eq!(bb.count(), 2);
        bb.clear(0);
        assert!(!bb.get(0));
        assert_eq!(bb.count(), 1);
    }
}
