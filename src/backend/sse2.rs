//! SSE2 backend: 128 lanes per packed block.
//!
//! Integer SSE has no vector NOT, so `not` is synthesized from the native
//! and-not instruction against all-ones; `pandn` computes `!a & b`, hence
//! the swapped operands in `andn`.

use core::arch::x86_64::*;

pub type Word = __m128i;

/// Trits per packed block.
pub const LANES: usize = 128;

#[inline(always)]
pub fn zero() -> Word {
    // Safety: the sse2 backend requires the sse2 target feature at build time.
    unsafe { _mm_setzero_si128() }
}

#[inline(always)]
pub fn ones() -> Word {
    unsafe { _mm_set1_epi64x(-1) }
}

#[inline(always)]
pub fn splat(bit: bool) -> Word {
    if bit {
        ones()
    } else {
        zero()
    }
}

#[inline(always)]
pub fn not(x: Word) -> Word {
    unsafe { _mm_andnot_si128(x, ones()) }
}

#[inline(always)]
pub fn and(x: Word, y: Word) -> Word {
    unsafe { _mm_and_si128(x, y) }
}

#[inline(always)]
pub fn or(x: Word, y: Word) -> Word {
    unsafe { _mm_or_si128(x, y) }
}

#[inline(always)]
pub fn xor(x: Word, y: Word) -> Word {
    unsafe { _mm_xor_si128(x, y) }
}

/// `x & !y`. `pandn` negates its first operand, hence the swap.
#[inline(always)]
pub fn andn(x: Word, y: Word) -> Word {
    unsafe { _mm_andnot_si128(y, x) }
}

/// `x | !y`
#[inline(always)]
pub fn orn(x: Word, y: Word) -> Word {
    or(x, not(y))
}

/// `x ^ (y & !z)`
#[inline(always)]
pub fn xor_andn(x: Word, y: Word, z: Word) -> Word {
    xor(x, andn(y, z))
}

/// `x ^ (y & z)`
#[inline(always)]
pub fn xor_and(x: Word, y: Word, z: Word) -> Word {
    xor(x, and(y, z))
}

/// `x & y & z`
#[inline(always)]
pub fn and3(x: Word, y: Word, z: Word) -> Word {
    and(x, and(y, z))
}

/// `x | y | !z`
#[inline(always)]
pub fn or_orn(x: Word, y: Word, z: Word) -> Word {
    or(x, orn(y, z))
}

/// `x ^ (y | !z)`
#[inline(always)]
pub fn xor_orn(x: Word, y: Word, z: Word) -> Word {
    xor(x, orn(y, z))
}

#[inline(always)]
pub fn to_bits(x: Word) -> [u64; 2] {
    // Safety: __m128i and [u64; 2] are both plain 128-bit data.
    unsafe { core::mem::transmute(x) }
}

#[inline(always)]
pub fn from_bits(limbs: [u64; 2]) -> Word {
    unsafe { core::mem::transmute(limbs) }
}
