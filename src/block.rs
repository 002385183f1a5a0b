//! Packed trit block: `LANES` balanced-ternary digits in two bit-planes.
//!
//! # Representation
//!
//! ```text
//! TritLanes:
//!   low:  Word  ──→  [l₀l₁l₂...]   one bit per lane
//!   high: Word  ──→  [h₀h₁h₂...]   one bit per lane
//! ```
//!
//! Bit i of `low` and bit i of `high`, taken together, encode the trit in
//! lane i under the build's codebook:
//!
//! ```text
//! value   and-not codebook   or-not codebook
//!  -1        (1,0)              (0,0)
//!   0        (1,1)              (1,0)
//!  +1        (0,1)              (1,1)
//!  NaT       (0,0)              (0,1)
//! ```
//!
//! All four bit pairs decode, so `get` is total: the one pair outside the
//! digit codes reads back as NaT. A block is a plain value type the caller
//! copies freely; `LANES` independent ternary computations ride in one block
//! through the backend's bitwise kernel.

use crate::backend::{self, Codebook, Word, CODEBOOK, LANES};
use crate::trit::Trit;

/// `LANES` trits, one per vector lane, two bit-planes deep.
#[derive(Clone, Copy, Debug)]
pub struct TritLanes {
    /// Low bit-plane: bit i is the low code bit of lane i.
    pub low: Word,
    /// High bit-plane: bit i is the high code bit of lane i.
    pub high: Word,
}

/// (low, high) lane code for `t` under the active codebook.
#[inline(always)]
const fn encode(t: Trit) -> (bool, bool) {
    match CODEBOOK {
        Codebook::AndNot => match t {
            Trit::N => (true, false),
            Trit::Z => (true, true),
            Trit::P => (false, true),
            Trit::NaT => (false, false),
        },
        Codebook::OrNot => match t {
            Trit::N => (false, false),
            Trit::Z => (true, false),
            Trit::P => (true, true),
            Trit::NaT => (false, true),
        },
    }
}

/// Decode one (low, high) lane code. Total over all four pairs.
#[inline(always)]
const fn decode(low: bool, high: bool) -> Trit {
    match CODEBOOK {
        Codebook::AndNot => match (low, high) {
            (true, false) => Trit::N,
            (true, true) => Trit::Z,
            (false, true) => Trit::P,
            (false, false) => Trit::NaT,
        },
        Codebook::OrNot => match (low, high) {
            (false, false) => Trit::N,
            (true, false) => Trit::Z,
            (true, true) => Trit::P,
            (false, true) => Trit::NaT,
        },
    }
}

impl TritLanes {
    /// Block with every lane set to `t`.
    ///
    /// `t` already absorbed any out-of-domain input into NaT at
    /// [`Trit::from_i8`], so broadcast never manufactures a valid digit from
    /// an invalid one.
    #[inline]
    pub fn splat(t: Trit) -> Self {
        let (low, high) = encode(t);
        Self {
            low: backend::splat(low),
            high: backend::splat(high),
        }
    }

    /// Set every lane to `t` in place.
    #[inline]
    pub fn fill(&mut self, t: Trit) {
        *self = Self::splat(t);
    }

    /// Write lane `lane` only; all other lanes are untouched.
    ///
    /// Precondition: `lane < LANES`.
    pub fn set(&mut self, lane: usize, t: Trit) {
        debug_assert!(lane < LANES, "lane {lane} out of range");
        let (lo, hi) = encode(t);
        let mut low = backend::to_bits(self.low);
        let mut high = backend::to_bits(self.high);
        let limb = lane / 64;
        let mask = 1u64 << (lane % 64);
        if lo {
            low[limb] |= mask;
        } else {
            low[limb] &= !mask;
        }
        if hi {
            high[limb] |= mask;
        } else {
            high[limb] &= !mask;
        }
        self.low = backend::from_bits(low);
        self.high = backend::from_bits(high);
    }

    /// Decode lane `lane`.
    ///
    /// Precondition: `lane < LANES`.
    pub fn get(&self, lane: usize) -> Trit {
        debug_assert!(lane < LANES, "lane {lane} out of range");
        let limb = lane / 64;
        let bit = lane % 64;
        let lo = (backend::to_bits(self.low)[limb] >> bit) & 1 == 1;
        let hi = (backend::to_bits(self.high)[limb] >> bit) & 1 == 1;
        decode(lo, hi)
    }

    /// Word with bit i set iff lane i decodes to zero. Both codebooks admit
    /// a one-op mask, which is what keeps the cross-lane zero search a
    /// bitmask reduction instead of a per-lane loop.
    #[inline]
    pub(crate) fn zero_mask(&self) -> Word {
        match CODEBOOK {
            Codebook::AndNot => backend::and(self.low, self.high),
            Codebook::OrNot => backend::andn(self.low, self.high),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_reads_back_on_every_lane() {
        for &t in &Trit::ALL {
            let block = TritLanes::splat(t);
            for lane in 0..LANES {
                assert_eq!(block.get(lane), t, "lane {} after fill {:?}", lane, t);
            }
        }
    }

    #[test]
    fn set_roundtrips_and_preserves_other_lanes() {
        let mut block = TritLanes::splat(Trit::Z);
        let lanes = [0, 1, 63, LANES / 2, LANES - 1];

        for (&lane, &t) in lanes.iter().zip(Trit::ALL.iter()) {
            block.set(lane, t);
            assert_eq!(block.get(lane), t);
        }

        for lane in 0..LANES {
            if !lanes.contains(&lane) {
                assert_eq!(block.get(lane), Trit::Z, "lane {} disturbed", lane);
            }
        }
    }

    #[test]
    fn every_bit_pair_decodes() {
        // All four (low, high) pairs, constructed directly on the planes.
        for lo in [false, true] {
            for hi in [false, true] {
                let block = TritLanes {
                    low: backend::splat(lo),
                    high: backend::splat(hi),
                };
                let t = block.get(0);
                // The pair must either be one of the three digits or NaT,
                // and re-encoding must reproduce the pair exactly.
                assert_eq!(encode(t), (lo, hi));
            }
        }
    }

    #[test]
    fn out_of_domain_broadcast_is_nat() {
        let block = TritLanes::splat(Trit::from_i8(7));
        for lane in 0..LANES {
            assert_eq!(block.get(lane), Trit::NaT);
        }
    }

    #[test]
    fn zero_mask_marks_exactly_zero_lanes() {
        let mut block = TritLanes::splat(Trit::Z);
        block.set(3, Trit::P);
        block.set(5, Trit::N);
        block.set(7, Trit::NaT);

        let mask = backend::to_bits(block.zero_mask());
        for lane in 0..LANES {
            let set = (mask[lane / 64] >> (lane % 64)) & 1 == 1;
            assert_eq!(set, block.get(lane) == Trit::Z, "lane {}", lane);
        }
    }
}
