//! Fixed-size subset enumeration.

/// Iterates every bitmask over `universe` bits with exactly `size` bits set,
/// in increasing numeric order (Gosper's hack).
///
/// `size` must be at least 1.
pub(crate) struct SubsetsOfSize {
    next: usize,
    limit: usize,
}

impl SubsetsOfSize {
    pub(crate) fn new(universe: usize, size: usize) -> Self {
        debug_assert!(size >= 1 && size <= universe && universe < usize::BITS as usize);
        Self {
            next: (1usize << size) - 1,
            limit: 1usize << universe,
        }
    }
}

impl Iterator for SubsetsOfSize {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next;
        if current >= self.limit {
            return None;
        }
        let lowest = current & current.wrapping_neg();
        let ripple = current + lowest;
        self.next = (((ripple ^ current) >> 2) / lowest) | ripple;
        Some(current)
    }
}
