//! Column operations across an array of packed trit blocks.
//!
//! An `n`-element slice of [`TritLanes`] is an `n × LANES` grid of trits:
//! the array index is the computation step (e.g. one word of a hash state)
//! and the lane index is the parallel-task id. A *column* is the `n` trits
//! at one lane across every row, i.e. one task's view of the whole state. The
//! scatter/gather pair transposes between that grid and flat scalar slices;
//! the search and summation primitives reduce a column without ever leaving
//! the packed representation.
//!
//! Storage is caller-owned throughout: nothing here allocates, and lengths
//! come from the slices themselves. Parallel-slice length agreement and
//! `lane < LANES` are programmer obligations, checked in debug builds.

use crate::backend::{self, Word, LANES};
use crate::block::TritLanes;
use crate::trit::Trit;

/// Broadcast each scalar trit across its row: `dst[i]` becomes a block with
/// all `LANES` lanes equal to `src[i]`.
pub fn fill(dst: &mut [TritLanes], src: &[Trit]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &t) in dst.iter_mut().zip(src) {
        *d = TritLanes::splat(t);
    }
}

/// Write column `lane` from `n` scalar trits: row i gets `src[i]` at lane
/// `lane`, every other lane of every row is unchanged.
///
/// Precondition: `lane < LANES`.
pub fn set_column(dst: &mut [TritLanes], lane: usize, src: &[Trit]) {
    debug_assert_eq!(dst.len(), src.len());
    debug_assert!(lane < LANES, "lane {lane} out of range");
    for (d, &t) in dst.iter_mut().zip(src) {
        d.set(lane, t);
    }
}

/// Read column `lane` into `n` scalar trits: `dst[i]` becomes lane `lane`
/// of row i.
///
/// Precondition: `lane < LANES`.
pub fn get_column(dst: &mut [Trit], src: &[TritLanes], lane: usize) {
    debug_assert_eq!(dst.len(), src.len());
    debug_assert!(lane < LANES, "lane {lane} out of range");
    for (d, s) in dst.iter_mut().zip(src) {
        *d = s.get(lane);
    }
}

/// Smallest lane index whose column is zero in every row, or `LANES` if no
/// such column exists. `LANES` is out of the valid lane range by
/// construction, so callers must branch on it; it is an expected outcome,
/// not an error.
///
/// One is-zero mask per row, ANDed across rows, then a first-set-bit scan:
/// a row with a nonzero lane only disqualifies that lane, so the whole
/// register stays live until every row has voted. Once the accumulated mask
/// is empty no later row can revive a lane, and the row walk stops with the
/// "none" answer already decided.
pub fn find_zero_column(p: &[TritLanes]) -> usize {
    let mut mask = backend::ones();
    for block in p {
        mask = backend::and(mask, block.zero_mask());
        if is_clear(mask) {
            return LANES;
        }
    }
    first_set_lane(mask)
}

/// Sum of the numeric values in column `lane` over all rows. Result is in
/// `[-n, n]`; NaT lanes contribute 0 (see [`Trit::value`]).
///
/// Precondition: `lane < LANES`.
pub fn sum_column(p: &[TritLanes], lane: usize) -> i64 {
    debug_assert!(lane < LANES, "lane {lane} out of range");
    p.iter().map(|b| b.get(lane).value() as i64).sum()
}

#[inline]
fn is_clear(w: Word) -> bool {
    backend::to_bits(w).iter().all(|&limb| limb == 0)
}

#[inline]
fn first_set_lane(w: Word) -> usize {
    for (i, &limb) in backend::to_bits(w).iter().enumerate() {
        if limb != 0 {
            return i * 64 + limb.trailing_zeros() as usize;
        }
    }
    LANES
}
