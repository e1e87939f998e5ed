use super::{ElementDomain, GF2};
use crate::error::ParseBlockError;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{BitXor, BitXorAssign};
use std::str::FromStr;

/// A 128-bit word added with XOR. Laid out like the 16-byte blocks OT extension
/// protocols pass around, so block buffers can be reinterpreted with `bytemuck`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C, align(16))]
pub struct Block {
    data: u128,
}

impl Block {
    pub const ZERO: Block = Block::new(0);

    pub const fn new(data: u128) -> Self {
        Self { data }
    }

    pub const fn from_words(high: u64, low: u64) -> Self {
        Self::new(((high as u128) << 64) | low as u128)
    }

    pub const fn high(&self) -> u64 {
        (self.data >> 64) as u64
    }

    pub const fn low(&self) -> u64 {
        self.data as u64
    }

    pub fn get_bit(&self, idx: usize) -> bool {
        (self.data >> idx) & 1 == 1
    }

    pub fn to_le_bytes(self) -> [u8; 16] {
        self.data.to_le_bytes()
    }

    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self::from(bytes)
    }
}

impl ElementDomain for Block {
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    fn combine(&mut self, other: &Self) {
        self.data ^= other.data;
    }

    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    fn is_zero(&self) -> bool {
        self.data == 0
    }
}

impl BitXor for Block {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.data ^ rhs.data)
    }
}

impl BitXorAssign for Block {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.data ^= rhs.data;
    }
}

impl From<u128> for Block {
    fn from(data: u128) -> Self {
        Self::new(data)
    }
}

impl From<Block> for u128 {
    fn from(value: Block) -> Self {
        value.data
    }
}

impl From<[u8; 16]> for Block {
    fn from(bytes: [u8; 16]) -> Self {
        Self::new(u128::from_le_bytes(bytes))
    }
}

impl From<Block> for [u8; 16] {
    fn from(value: Block) -> Self {
        value.to_le_bytes()
    }
}

/// Embeds a bit into the lowest bit of a block.
impl From<GF2> for Block {
    fn from(v: GF2) -> Self {
        Self::new(u128::from(u8::from(v)))
    }
}

impl From<Block> for aes::Block {
    fn from(value: Block) -> Self {
        aes::Block::from(value.to_le_bytes())
    }
}

impl From<aes::Block> for Block {
    fn from(value: aes::Block) -> Self {
        let bytes: [u8; 16] = value.into();
        Self::from(bytes)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:032x}", self.data)
    }
}

/// Parses up to 32 hex digits, with an optional `0x` prefix.
impl FromStr for Block {
    type Err = ParseBlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty()
            || digits.len() > 32
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ParseBlockError(s.to_string()));
        }
        u128::from_str_radix(digits, 16)
            .map(Self::new)
            .map_err(|_| ParseBlockError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::error::ParseBlockError;
    use crate::fields::GF2;

    #[test]
    fn words_and_bytes() {
        let b = Block::from_words(0x0102_0304_0506_0708, 0x1112_1314_1516_1718);
        assert_eq!(b.high(), 0x0102_0304_0506_0708);
        assert_eq!(b.low(), 0x1112_1314_1516_1718);
        let bytes = b.to_le_bytes();
        assert_eq!(bytes[0], 0x18);
        assert_eq!(bytes[15], 0x01);
        assert_eq!(Block::from(bytes), b);
        assert_eq!(Block::from(aes::Block::from(b)), b);
    }

    #[test]
    fn bit_embedding() {
        assert_eq!(Block::from(GF2::one()), Block::new(1));
        assert_eq!(Block::from(GF2::zero()), Block::ZERO);
        assert!(Block::new(0b100).get_bit(2));
        assert!(!Block::new(0b100).get_bit(1));
    }

    #[test]
    fn slice_cast() {
        let blocks = vec![Block::new(1), Block::new(u128::MAX)];
        let bytes: &[u8] = bytemuck::cast_slice(&blocks);
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[0], 1);
        assert!(bytes[16..].iter().all(|b| *b == 0xff));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(
            Block::new(0xab).to_string(),
            "000000000000000000000000000000ab"
        );
    }

    #[test]
    fn parses_hex() {
        assert_eq!("ab".parse::<Block>(), Ok(Block::new(0xab)));
        assert_eq!("0xab".parse::<Block>(), Ok(Block::new(0xab)));
        let text = Block::from_words(9996754675674599, 56756745976768754).to_string();
        assert_eq!(
            text.parse::<Block>(),
            Ok(Block::from_words(9996754675674599, 56756745976768754))
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        let too_long = "f".repeat(33);
        for bad in ["", "0x", "zz", "+ab", "12 34", too_long.as_str()] {
            assert_eq!(bad.parse::<Block>(), Err(ParseBlockError(bad.to_string())));
        }
    }
}
