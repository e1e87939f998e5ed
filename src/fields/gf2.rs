use super::ElementDomain;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, BitXor, BitXorAssign};

/// A single bit. Stored as one byte holding either 0 or 1.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GF2 {
    v: u8,
}

impl GF2 {
    pub const fn zero() -> Self {
        Self { v: 0 }
    }

    pub const fn one() -> Self {
        Self { v: 1 }
    }

    pub fn is_one(&self) -> bool {
        self.v == 1
    }

    pub fn flip(&mut self) {
        self.v ^= 1;
    }

    pub fn random<T: CryptoRng + RngCore>(rng: &mut T) -> Self {
        GF2::from(rng.next_u32() & 1 == 0)
    }
}

impl ElementDomain for GF2 {
    fn zero() -> Self {
        GF2::zero()
    }

    #[inline(always)]
    fn combine(&mut self, other: &Self) {
        self.v ^= other.v;
    }

    fn as_bytes(&self) -> &[u8] {
        std::slice::from_ref(&self.v)
    }

    fn is_zero(&self) -> bool {
        self.v == 0
    }
}

impl Add for GF2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { v: self.v ^ rhs.v }
    }
}

impl AddAssign for GF2 {
    fn add_assign(&mut self, rhs: Self) {
        self.v ^= rhs.v;
    }
}

impl BitXor for GF2 {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        self + rhs
    }
}

impl BitXorAssign for GF2 {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self += rhs;
    }
}

impl From<bool> for GF2 {
    fn from(v: bool) -> Self {
        Self { v: u8::from(v) }
    }
}

impl From<GF2> for bool {
    fn from(v: GF2) -> Self {
        v.is_one()
    }
}

impl TryFrom<u8> for GF2 {
    type Error = ();
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 1 {
            Err(())
        } else {
            Ok(Self { v: value })
        }
    }
}

impl From<GF2> for u8 {
    fn from(v: GF2) -> Self {
        v.v
    }
}

#[cfg(test)]
mod tests {
    use super::GF2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn arithmetic() {
        assert_eq!(GF2::one() + GF2::one(), GF2::zero());
        assert_eq!(GF2::one() ^ GF2::zero(), GF2::one());
        let mut v = GF2::zero();
        v.flip();
        assert!(v.is_one());
        v ^= GF2::one();
        assert_eq!(v, GF2::zero());
        v += GF2::one();
        assert!(v.is_one());
    }

    #[test]
    fn byte_conversions() {
        assert_eq!(GF2::try_from(1u8), Ok(GF2::one()));
        assert_eq!(GF2::try_from(0u8), Ok(GF2::zero()));
        assert!(GF2::try_from(2u8).is_err());
        assert_eq!(u8::from(GF2::from(true)), 1);
        assert!(!bool::from(GF2::from(false)));
    }

    #[test]
    fn random_hits_both_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let ones = (0..256)
            .map(|_| GF2::random(&mut rng))
            .filter(GF2::is_one)
            .count();
        assert!(ones > 0 && ones < 256);
    }
}
