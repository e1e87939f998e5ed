use std::fmt::{Debug, Formatter};

use rand_core::RngCore;
use rayon::prelude::*;

use super::config::CodeConfig;
use super::coordinates::Coordinates;
use crate::pseudorandom::{schedule_cipher, PositionPrg};

const MASK_BITS: usize = u64::BITS as usize;

/// Backward convolutional accumulation, the transpose of a forward accumulator.
///
/// Walking from the last position down to the first, position `i` is added into
/// `i - d` for every offset `d` in its window. Offset 1 is always present; offsets
/// `2..=width` are kept by a per-position bit mask, bit `d - 2` LSB first.
pub struct Accumulator {
    code_size: usize,
    width: usize,
    stride: usize,
    masks: Vec<u64>,
}

impl Accumulator {
    pub fn derive(config: &CodeConfig) -> Self {
        let code_size = config.code_size();
        let width = config.accumulator_size();
        let random_offsets = width - 1;
        let stride = random_offsets.div_ceil(MASK_BITS);
        let mut masks = vec![0u64; code_size * stride];
        if stride > 0 {
            let aes = schedule_cipher(config.accumulator_seed());
            let tail_bits = random_offsets % MASK_BITS;
            masks
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(i, row)| {
                    let mut prg = PositionPrg::new(&aes, i as u64);
                    row.iter_mut().for_each(|word| *word = prg.next_u64());
                    if tail_bits != 0 {
                        row[stride - 1] &= (1u64 << tail_bits) - 1;
                    }
                });
        }
        Self {
            code_size,
            width,
            stride,
            masks,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Offsets position `i` is added into, in increasing order. Offsets larger
    /// than `i` are listed but have no target.
    pub fn window(&self, i: usize) -> Vec<usize> {
        let mut offsets = vec![1];
        for (word_idx, &word) in self.row_masks(i).iter().enumerate() {
            let mut bits = word;
            while bits != 0 {
                offsets.push(2 + word_idx * MASK_BITS + bits.trailing_zeros() as usize);
                bits &= bits - 1;
            }
        }
        offsets
    }

    fn row_masks(&self, i: usize) -> &[u64] {
        &self.masks[i * self.stride..(i + 1) * self.stride]
    }

    pub fn apply<C: Coordinates + ?Sized>(&self, x: &mut C) {
        debug_assert_eq!(x.len(), self.code_size);
        for i in (1..self.code_size).rev() {
            x.add_assign(i - 1, i);
            'window: for (word_idx, &word) in self.row_masks(i).iter().enumerate() {
                let mut bits = word;
                while bits != 0 {
                    let offset = 2 + word_idx * MASK_BITS + bits.trailing_zeros() as usize;
                    if offset > i {
                        break 'window;
                    }
                    x.add_assign(i - offset, i);
                    bits &= bits - 1;
                }
            }
        }
    }
}

impl Debug for Accumulator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulator")
            .field("code_size", &self.code_size)
            .field("width", &self.width)
            .finish()
    }
}
