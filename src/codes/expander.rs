use std::fmt::{Debug, Formatter};

use aes::Aes128;
use rand_core::RngCore;
use rayon::prelude::*;

use super::config::CodeConfig;
use super::coordinates::Coordinates;
use crate::pseudorandom::{schedule_cipher, PositionPrg};

/// Sparse pseudorandom expansion.
///
/// Coordinate `i` is replaced by itself plus `weight` distinct coordinates drawn
/// from `(i, code_size)`. Coordinates near the tail have fewer than `weight`
/// successors and take all of them; those rows are implicit and cost no memory.
/// Since every row only looks forward, an increasing pass reads untouched inputs
/// and the whole map runs in place.
pub struct Expander {
    code_size: usize,
    weight: usize,
    full_rows: usize,
    indices: Vec<u32>,
}

impl Expander {
    pub fn derive(config: &CodeConfig) -> Self {
        let code_size = config.code_size();
        let weight = config.expander_weight();
        // Row i is sampled iff it has more than `weight` successors.
        let full_rows = code_size.saturating_sub(weight).saturating_sub(1);
        let aes = schedule_cipher(config.expander_seed());
        let mut indices = vec![0u32; full_rows * weight];
        indices
            .par_chunks_mut(weight)
            .enumerate()
            .for_each(|(i, row)| sample_row(&aes, i, code_size, row));
        Self {
            code_size,
            weight,
            full_rows,
            indices,
        }
    }

    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Number of rows holding exactly `weight` sampled indices.
    pub fn full_rows(&self) -> usize {
        self.full_rows
    }

    /// The coordinates added into coordinate `i`, in draw order.
    pub fn row(&self, i: usize) -> Vec<usize> {
        if i < self.full_rows {
            self.indices[i * self.weight..(i + 1) * self.weight]
                .iter()
                .map(|&j| j as usize)
                .collect()
        } else {
            (i + 1..self.code_size).collect()
        }
    }

    pub fn apply<C: Coordinates + ?Sized>(&self, x: &mut C) {
        debug_assert_eq!(x.len(), self.code_size);
        for (i, row) in self.indices.chunks_exact(self.weight).enumerate() {
            for &j in row {
                x.add_assign(i, j as usize);
            }
        }
        for i in self.full_rows..self.code_size {
            for j in i + 1..self.code_size {
                x.add_assign(i, j);
            }
        }
    }
}

/// Rejection-samples `row.len()` distinct indices from `(i, code_size)`.
fn sample_row(aes: &Aes128, i: usize, code_size: usize, row: &mut [u32]) {
    let span = (code_size - 1 - i) as u64;
    let mut prg = PositionPrg::new(aes, i as u64);
    let mut filled = 0;
    while filled < row.len() {
        let candidate = (i as u64 + 1 + u64::from(prg.next_u32()) % span) as u32;
        if !row[..filled].contains(&candidate) {
            row[filled] = candidate;
            filled += 1;
        }
    }
}

impl Debug for Expander {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expander")
            .field("code_size", &self.code_size)
            .field("weight", &self.weight)
            .field("full_rows", &self.full_rows)
            .finish()
    }
}
