//! Constants for board geometry, scoring, and display.
//!
//! The board is a flat array of 9 cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---|---|---
//!  3 | 4 | 5
//! ---|---|---
//!  6 | 7 | 8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length.
pub const N: usize = 3;

/// Total number of cells.
pub const CELLS: usize = N * N;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; N]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Search Values
// =============================================================================

/// Win for the maximizing side.
pub const SCORE_WIN: i32 = 1;

/// Draw.
pub const SCORE_DRAW: i32 = 0;

/// Win for the minimizing side.
pub const SCORE_LOSS: i32 = -1;

// =============================================================================
// Cell Glyphs
// =============================================================================

/// Glyph for player X.
pub const GLYPH_X: char = 'X';

/// Glyph for player O.
pub const GLYPH_O: char = 'O';

/// Glyph used for an empty cell in the compact board notation.
pub const GLYPH_EMPTY: char = '.';

// =============================================================================
// Demo Parameters
// =============================================================================

/// Default number of engine-vs-random games played by the demo.
pub const DEFAULT_DEMO_GAMES: usize = 100;

/// Default RNG seed for the demo.
pub const DEFAULT_SEED: u64 = 42;
