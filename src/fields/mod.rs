mod block;
mod gf2;
pub use block::Block;
pub use gf2::GF2;

/// An element type the encoder can operate on.
///
/// Every domain is a vector space over GF(2): `combine` is addition (XOR) and
/// `zero` is its identity. Encoders are written once against this trait and are
/// instantiated per domain.
pub trait ElementDomain: Copy + Send + Sync + 'static {
    fn zero() -> Self;

    /// `self += other`.
    fn combine(&mut self, other: &Self);

    /// The raw in-memory representation of the element.
    fn as_bytes(&self) -> &[u8];

    fn is_zero(&self) -> bool {
        self.as_bytes().iter().all(|b| *b == 0)
    }
}

/// Eight independent GF(2) lanes packed in one byte.
impl ElementDomain for u8 {
    fn zero() -> Self {
        0
    }

    #[inline(always)]
    fn combine(&mut self, other: &Self) {
        *self ^= *other;
    }

    fn as_bytes(&self) -> &[u8] {
        std::slice::from_ref(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, ElementDomain, GF2};

    fn combine_all<F: ElementDomain>(items: &[F]) -> F {
        items.iter().fold(F::zero(), |mut acc, v| {
            acc.combine(v);
            acc
        })
    }

    #[test]
    fn zero_is_identity() {
        let mut b = Block::new(0xdead_beef);
        b.combine(&Block::zero());
        assert_eq!(b, Block::new(0xdead_beef));

        let mut byte = 0x5au8;
        byte.combine(&u8::zero());
        assert_eq!(byte, 0x5a);

        let mut bit = GF2::one();
        bit.combine(&GF2::zero());
        assert_eq!(bit, GF2::one());
    }

    #[test]
    fn combine_is_self_inverse() {
        assert!(combine_all(&[0x3cu8, 0x3c]).is_zero());
        assert!(combine_all(&[GF2::one(), GF2::one()]).is_zero());
        let b = Block::from_words(7, 9);
        assert!(combine_all(&[b, b]).is_zero());
        assert!(!combine_all(&[b, b, b]).is_zero());
    }

    #[test]
    fn byte_views() {
        assert_eq!(0xa5u8.as_bytes(), &[0xa5]);
        assert_eq!(GF2::one().as_bytes(), &[1]);
        assert_eq!(Block::new(1).as_bytes().len(), 16);
        assert_eq!(Block::new(1).as_bytes()[0], 1);
    }
}
