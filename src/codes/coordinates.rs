use crate::fields::ElementDomain;

/// Random access to the coordinates of one or more co-indexed codeword buffers.
///
/// The expander and accumulator only ever add one coordinate into another, so
/// they are written against this trait once. A single slice and a pair of slices
/// in different domains both qualify; the pair walks the schedule once and
/// updates both buffers in lock-step.
pub trait Coordinates {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `x[dst] += x[src]` in every underlying buffer.
    fn add_assign(&mut self, dst: usize, src: usize);
}

impl<F: ElementDomain> Coordinates for [F] {
    fn len(&self) -> usize {
        <[F]>::len(self)
    }

    #[inline(always)]
    fn add_assign(&mut self, dst: usize, src: usize) {
        let v = self[src];
        self[dst].combine(&v);
    }
}

/// Two equally long buffers sharing one schedule.
pub struct Paired<'a, X, Y> {
    left: &'a mut [X],
    right: &'a mut [Y],
}

impl<'a, X: ElementDomain, Y: ElementDomain> Paired<'a, X, Y> {
    /// Returns `None` when the buffers differ in length.
    pub fn new(left: &'a mut [X], right: &'a mut [Y]) -> Option<Self> {
        if left.len() != right.len() {
            return None;
        }
        Some(Self { left, right })
    }
}

impl<X: ElementDomain, Y: ElementDomain> Coordinates for Paired<'_, X, Y> {
    fn len(&self) -> usize {
        self.left.len()
    }

    #[inline(always)]
    fn add_assign(&mut self, dst: usize, src: usize) {
        self.left.add_assign(dst, src);
        self.right.add_assign(dst, src);
    }
}

#[cfg(test)]
mod tests {
    use super::{Coordinates, Paired};
    use crate::fields::{Block, GF2};

    #[test]
    fn slice_adds_in_place() {
        let mut v = vec![1u8, 2, 4];
        v.as_mut_slice().add_assign(0, 2);
        assert_eq!(v, vec![5, 2, 4]);
    }

    #[test]
    fn pair_updates_both() {
        let mut blocks = vec![Block::new(1), Block::new(2)];
        let mut bits = vec![GF2::zero(), GF2::one()];
        let mut pair = Paired::new(&mut blocks, &mut bits).unwrap();
        assert_eq!(pair.len(), 2);
        pair.add_assign(0, 1);
        assert_eq!(blocks[0], Block::new(3));
        assert_eq!(bits[0], GF2::one());
    }

    #[test]
    fn pair_rejects_unequal_lengths() {
        let mut blocks = vec![Block::ZERO; 3];
        let mut bits = vec![GF2::zero(); 2];
        assert!(Paired::new(&mut blocks, &mut bits).is_none());
    }
}
