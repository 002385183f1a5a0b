//! Compile-time backend selection.
//!
//! Exactly one vector backend is active per build, chosen by cargo feature;
//! with no backend feature the portable 64-bit backend is used. Each backend
//! module exposes the same free-function interface over its `Word` register
//! type, so everything above this layer is backend-agnostic. There is no
//! runtime dispatch anywhere: a build targets one backend, and the whole
//! point of the engine is that no per-lane branching survives to run time.
//!
//! # Kernel interface
//!
//! Every backend provides:
//!
//! - `Word` and `LANES` (register width in bits = trits per block)
//! - constants and broadcasts: `zero`, `ones`, `splat`
//! - two-input logic: `not`, `and`, `or`, `xor`, `andn` (`x & !y`),
//!   `orn` (`x | !y`)
//! - fused three-input logic: `xor_andn` (`x ^ (y & !z)`), `xor_and`
//!   (`x ^ (y & z)`), `and3` (`x & y & z`), `or_orn` (`x | y | !z`),
//!   `xor_orn` (`x ^ (y | !z)`)
//! - the lane-access bridge `to_bits` / `from_bits`
//!
//! # Codebooks
//!
//! The 2-bit trit codebook is a property of the backend: Intel integer
//! backends use the and-not codebook (their fused instructions are and-not
//! shaped), NEON uses the or-not codebook (its native fused op is `vorn`),
//! and the portable backend accepts either. Mixing codebooks within a build
//! would silently corrupt every packed block, so a mismatched request is a
//! compile error rather than a fallback.

#[cfg(any(
    all(feature = "sse2", any(feature = "avx2", feature = "avx512", feature = "neon")),
    all(feature = "avx2", any(feature = "avx512", feature = "neon")),
    all(feature = "avx512", feature = "neon"),
))]
compile_error!("at most one vector backend feature may be selected");

#[cfg(all(feature = "andn-codebook", feature = "orn-codebook"))]
compile_error!("the and-not and or-not codebooks are mutually exclusive");

#[cfg(all(
    any(feature = "sse2", feature = "avx2", feature = "avx512"),
    feature = "orn-codebook"
))]
compile_error!("Intel backends encode with the and-not codebook");

#[cfg(all(feature = "neon", feature = "andn-codebook"))]
compile_error!("the NEON backend encodes with the or-not codebook");

#[cfg(all(
    any(feature = "sse2", feature = "avx2", feature = "avx512"),
    not(target_arch = "x86_64")
))]
compile_error!("the sse2/avx2/avx512 backends require an x86_64 target");

#[cfg(all(feature = "neon", not(target_arch = "aarch64")))]
compile_error!("the neon backend requires an aarch64 target");

#[cfg(all(feature = "sse2", target_arch = "x86_64", not(target_feature = "sse2")))]
compile_error!("build with `-C target-feature=+sse2` for the sse2 backend");

#[cfg(all(feature = "avx2", target_arch = "x86_64", not(target_feature = "avx2")))]
compile_error!("build with `-C target-feature=+avx2` for the avx2 backend");

#[cfg(all(feature = "avx512", target_arch = "x86_64", not(target_feature = "avx512f")))]
compile_error!("build with `-C target-feature=+avx512f` for the avx512 backend");

#[cfg(all(feature = "neon", target_arch = "aarch64", not(target_feature = "neon")))]
compile_error!("the neon backend requires the neon target feature");

#[cfg(feature = "sse2")]
mod sse2;
#[cfg(feature = "sse2")]
pub use sse2::*;

#[cfg(feature = "avx2")]
mod avx2;
#[cfg(feature = "avx2")]
pub use avx2::*;

#[cfg(feature = "avx512")]
mod avx512;
#[cfg(feature = "avx512")]
pub use avx512::*;

#[cfg(feature = "neon")]
mod neon;
#[cfg(feature = "neon")]
pub use neon::*;

#[cfg(not(any(feature = "sse2", feature = "avx2", feature = "avx512", feature = "neon")))]
mod scalar;
#[cfg(not(any(feature = "sse2", feature = "avx2", feature = "avx512", feature = "neon")))]
pub use scalar::*;

/// Number of 64-bit limbs in a `Word`.
pub const WORDS: usize = LANES / 64;

/// The fixed mapping from trit value to 2-bit (low, high) lane code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codebook {
    /// `-1 -> (1,0)`, `0 -> (1,1)`, `+1 -> (0,1)`, `NaT -> (0,0)`
    AndNot,
    /// `-1 -> (0,0)`, `0 -> (1,0)`, `+1 -> (1,1)`, `NaT -> (0,1)`
    OrNot,
}

/// The codebook active for this build. One per process: every packed block
/// in the engine encodes with it.
pub const CODEBOOK: Codebook = if cfg!(any(feature = "neon", feature = "orn-codebook")) {
    Codebook::OrNot
} else {
    Codebook::AndNot
};

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(b: bool) -> Word {
        splat(b)
    }

    fn limbs(w: Word) -> [u64; WORDS] {
        to_bits(w)
    }

    #[test]
    fn splat_covers_every_lane() {
        assert!(limbs(zero()).iter().all(|&w| w == 0));
        assert!(limbs(ones()).iter().all(|&w| w == !0u64));
        assert_eq!(limbs(splat(false)), limbs(zero()));
        assert_eq!(limbs(splat(true)), limbs(ones()));
    }

    #[test]
    fn bits_roundtrip() {
        let mut pattern = [0u64; WORDS];
        for (i, limb) in pattern.iter_mut().enumerate() {
            *limb = 0x5555_5555_5555_5555u64.rotate_left(i as u32);
        }
        assert_eq!(limbs(from_bits(pattern)), pattern);
    }

    #[test]
    fn two_input_ops_match_definitions() {
        for x in [false, true] {
            for y in [false, true] {
                assert_eq!(limbs(and(bit(x), bit(y))), limbs(bit(x & y)), "and {x} {y}");
                assert_eq!(limbs(or(bit(x), bit(y))), limbs(bit(x | y)), "or {x} {y}");
                assert_eq!(limbs(xor(bit(x), bit(y))), limbs(bit(x ^ y)), "xor {x} {y}");
                assert_eq!(limbs(andn(bit(x), bit(y))), limbs(bit(x & !y)), "andn {x} {y}");
                assert_eq!(limbs(orn(bit(x), bit(y))), limbs(bit(x | !y)), "orn {x} {y}");
            }
            assert_eq!(limbs(not(bit(x))), limbs(bit(!x)), "not {x}");
        }
    }

    // Exhaustive 8-case truth tables for the fused family. A wrong selection
    // constant here corrupts every higher-level trit computation without any
    // other test noticing, so each case is checked across the full register.
    #[test]
    fn fused_ops_match_truth_tables() {
        for x in [false, true] {
            for y in [false, true] {
                for z in [false, true] {
                    assert_eq!(
                        limbs(xor_andn(bit(x), bit(y), bit(z))),
                        limbs(bit(x ^ (y & !z))),
                        "xor_andn {x} {y} {z}"
                    );
                    assert_eq!(
                        limbs(xor_and(bit(x), bit(y), bit(z))),
                        limbs(bit(x ^ (y & z))),
                        "xor_and {x} {y} {z}"
                    );
                    assert_eq!(
                        limbs(and3(bit(x), bit(y), bit(z))),
                        limbs(bit(x & y & z)),
                        "and3 {x} {y} {z}"
                    );
                    assert_eq!(
                        limbs(or_orn(bit(x), bit(y), bit(z))),
                        limbs(bit(x | y | !z)),
                        "or_orn {x} {y} {z}"
                    );
                    assert_eq!(
                        limbs(xor_orn(bit(x), bit(y), bit(z))),
                        limbs(bit(x ^ (y | !z))),
                        "xor_orn {x} {y} {z}"
                    );
                }
            }
        }
    }
}
