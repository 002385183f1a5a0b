//! AVX-512 backend: 512 lanes per packed block.
//!
//! The fused three-input family compiles to single `vpternlogq`
//! instructions. The immediate is the output column of the truth table read
//! with `x` as the most significant input bit:
//!
//! ```text
//! x y z   x^(y&!z)  x^(y&z)  x&y&z  x|y|!z  x^(y|!z)
//! 0 0 0      0         0       0       1        1
//! 0 0 1      0         0       0       0        0
//! 0 1 0      1         0       0       1        1
//! 0 1 1      0         1       0       1        1
//! 1 0 0      1         1       0       1        0
//! 1 0 1      1         1       0       1        1
//! 1 1 0      0         1       0       1        0
//! 1 1 1      1         0       1       1        0
//!          0xB4      0x78    0x80    0xFD     0x2D
//! ```
//!
//! The truth-table tests in `backend::tests` enumerate all eight input
//! combinations per constant; a transcription error here corrupts every
//! trit computation downstream with no local symptom.

use core::arch::x86_64::*;

pub type Word = __m512i;

/// Trits per packed block.
pub const LANES: usize = 512;

#[inline(always)]
pub fn zero() -> Word {
    // Safety: the avx512 backend requires the avx512f target feature at
    // build time.
    unsafe { _mm512_setzero_si512() }
}

#[inline(always)]
pub fn ones() -> Word {
    unsafe { _mm512_set1_epi64(-1) }
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
    unsafe { _mm512_andnot_si512(x, ones()) }
}

#[inline(always)]
pub fn and(x: Word, y: Word) -> Word {
    unsafe { _mm512_and_si512(x, y) }
}

#[inline(always)]
pub fn or(x: Word, y: Word) -> Word {
    unsafe { _mm512_or_si512(x, y) }
}

#[inline(always)]
pub fn xor(x: Word, y: Word) -> Word {
    unsafe { _mm512_xor_si512(x, y) }
}

/// `x & !y`. `vpandn` negates its first operand, hence the swap.
#[inline(always)]
pub fn andn(x: Word, y: Word) -> Word {
    unsafe { _mm512_andnot_si512(y, x) }
}

/// `x | !y`
#[inline(always)]
pub fn orn(x: Word, y: Word) -> Word {
    or(x, not(y))
}

/// `x ^ (y & !z)`, one `vpternlogq`.
#[inline(always)]
pub fn xor_andn(x: Word, y: Word, z: Word) -> Word {
    unsafe { _mm512_ternarylogic_epi64::<0xB4>(x, y, z) }
}

/// `x ^ (y & z)`, one `vpternlogq`.
#[inline(always)]
pub fn xor_and(x: Word, y: Word, z: Word) -> Word {
    unsafe { _mm512_ternarylogic_epi64::<0x78>(x, y, z) }
}

/// `x & y & z`, one `vpternlogq`.
#[inline(always)]
pub fn and3(x: Word, y: Word, z: Word) -> Word {
    unsafe { _mm512_ternarylogic_epi64::<0x80>(x, y, z) }
}

/// `x | y | !z`, one `vpternlogq`.
#[inline(always)]
pub fn or_orn(x: Word, y: Word, z: Word) -> Word {
    unsafe { _mm512_ternarylogic_epi64::<0xFD>(x, y, z) }
}

/// `x ^ (y | !z)`, one `vpternlogq`.
#[inline(always)]
pub fn xor_orn(x: Word, y: Word, z: Word) -> Word {
    unsafe { _mm512_ternarylogic_epi64::<0x2D>(x, y, z) }
}

#[inline(always)]
pub fn to_bits(x: Word) -> [u64; 8] {
    // Safety: __m512i and [u64; 8] are both plain 512-bit data.
    unsafe { core::mem::transmute(x) }
}

#[inline(always)]
pub fn from_bits(limbs: [u64; 8]) -> Word {
    unsafe { core::mem::transmute(limbs) }
}
