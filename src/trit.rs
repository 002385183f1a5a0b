//! Scalar balanced-ternary digit.
//!
//! The atomic value domain for the lane engine: {N, Z, P} = {-1, 0, +1} plus
//! the `NaT` sentinel ("not a trit") for invalid or uninitialized ternary
//! state. The engine itself treats a trit purely as a 2-bit code; the only
//! place numeric meaning is imposed is [`Trit::value`], which feeds the
//! column summation primitive.
//!
//! Conversion from integers is total: anything outside {-1, 0, +1} maps to
//! `NaT` rather than failing. Broadcast and scatter operations inherit that
//! rule, so an out-of-domain input can never be mistaken for a valid digit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Single balanced ternary digit, or the `NaT` sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum Trit {
    /// Negative: -1
    N = -1,
    /// Zero: 0
    #[default]
    Z = 0,
    /// Positive: +1
    P = 1,
    /// Not a trit: invalid or uninitialized ternary state
    NaT = 2,
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::Z => write!(f, "Z"),
            Trit::P => write!(f, "P"),
            Trit::NaT => write!(f, "NaT"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "-"),
            Trit::Z => write!(f, "0"),
            Trit::P => write!(f, "+"),
            Trit::NaT => write!(f, "?"),
        }
    }
}

impl Trit {
    /// The three digit values in ascending order. Excludes `NaT`.
    pub const DIGITS: [Trit; 3] = [Trit::N, Trit::Z, Trit::P];

    /// All four states, `NaT` last.
    pub const ALL: [Trit; 4] = [Trit::N, Trit::Z, Trit::P, Trit::NaT];

    /// Convert from i8. Total: any value outside {-1, 0, 1} becomes `NaT`.
    #[inline]
    pub const fn from_i8(v: i8) -> Self {
        match v {
            -1 => Trit::N,
            0 => Trit::Z,
            1 => Trit::P,
            _ => Trit::NaT,
        }
    }

    /// Numeric value of the digit. `NaT` contributes 0, which is the
    /// convention the column summation primitive relies on.
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Trit::N => -1,
            Trit::Z | Trit::NaT => 0,
            Trit::P => 1,
        }
    }

    /// Negate: -N = P, -Z = Z, -P = N. `NaT` stays `NaT`.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn neg(self) -> Trit {
        match self {
            Trit::N => Trit::P,
            Trit::Z => Trit::Z,
            Trit::P => Trit::N,
            Trit::NaT => Trit::NaT,
        }
    }

    /// Is this the `NaT` sentinel?
    #[inline]
    pub const fn is_nat(self) -> bool {
        matches!(self, Trit::NaT)
    }

    /// Is zero?
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::Z)
    }
}

impl std::ops::Neg for Trit {
    type Output = Trit;
    #[inline]
    fn neg(self) -> Trit {
        Trit::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_i8_maps_digits() {
        assert_eq!(Trit::from_i8(-1), Trit::N);
        assert_eq!(Trit::from_i8(0), Trit::Z);
        assert_eq!(Trit::from_i8(1), Trit::P);
    }

    #[test]
    fn from_i8_absorbs_out_of_domain() {
        assert_eq!(Trit::from_i8(2), Trit::NaT);
        assert_eq!(Trit::from_i8(-2), Trit::NaT);
        assert_eq!(Trit::from_i8(i8::MAX), Trit::NaT);
        assert_eq!(Trit::from_i8(i8::MIN), Trit::NaT);
    }

    #[test]
    fn value_roundtrips_digits() {
        for &t in &Trit::DIGITS {
            assert_eq!(Trit::from_i8(t.value()), t);
        }
    }

    #[test]
    fn nat_value_is_zero() {
        assert_eq!(Trit::NaT.value(), 0);
    }

    #[test]
    fn negation() {
        assert_eq!(-Trit::N, Trit::P);
        assert_eq!(-Trit::Z, Trit::Z);
        assert_eq!(-Trit::P, Trit::N);
        assert_eq!(-Trit::NaT, Trit::NaT);

        for &t in &Trit::ALL {
            assert_eq!(-(-t), t, "double negation of {:?}", t);
        }
    }
}
