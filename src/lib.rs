//! Tritlane - Bit-sliced SIMD Lanes for Balanced Ternary
//!
//! Copyright (c) 2025 Tritlane Contributors
//! Licensed under MIT License
//!
//! Packs `LANES` independent balanced-ternary digits into a pair of vector
//! registers, two bits per trit, so that thousands of ternary-hash
//! computations run in lock-step across hardware lanes. One backend per
//! build (portable 64-bit, SSE2, AVX2, AVX-512, or NEON) supplies the
//! bitwise kernel; the codec and column operations above it are
//! backend-agnostic.
//!
//! The canonical consumer is a parallel proof-of-work search: evaluate
//! `LANES` candidate nonces through a ternary hash at once, then ask which
//! lane produced an all-zero tail with [`grid::find_zero_column`], or score
//! a lane's digit balance with [`grid::sum_column`].
//!
//! ```
//! use tritlane::{grid, Trit, TritLanes};
//!
//! // Three hash-state rows, each lane a separate candidate.
//! let mut state = vec![TritLanes::splat(Trit::Z); 3];
//!
//! // Candidate 4 gets a nonzero digit in row 1, disqualifying it.
//! state[1].set(4, Trit::P);
//!
//! assert_eq!(grid::find_zero_column(&state), 0);
//! assert_eq!(grid::sum_column(&state, 4), 1);
//! ```

pub mod backend;
pub mod block;
pub mod grid;
pub mod trit;

// Re-export main types for convenience
pub use backend::{Codebook, Word, CODEBOOK, LANES, WORDS};
pub use block::TritLanes;
pub use trit::Trit;
