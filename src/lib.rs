//! Conway's Game of Life on a fixed 40x40 torus, drawn straight to the
//! terminal with ANSI escapes.

pub mod driver;    // Fixed-rate render/advance loop
pub mod error;     // Crate error type
pub mod grid;      // Grid types and the B3/S23 rule
pub mod patterns;  // Named seed patterns
pub mod render;    // Escape-sequence output
pub mod terminal;  // Cursor guard and console setup
