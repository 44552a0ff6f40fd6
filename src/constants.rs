//! Constants for board dimensions, search parameters, and the default layout.
//!
//! The board is a fixed 17×17 grid; the playable star shape inside it is
//! defined entirely by the layout text (see [`DEFAULT_LAYOUT`] and
//! [`crate::board::Board::from_layout`]), so the dimensions here never change
//! at runtime.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of grid rows.
pub const NUM_ROWS: usize = 17;

/// Number of grid columns.
pub const NUM_COLUMNS: usize = 17;

// =============================================================================
// Search Parameters
// =============================================================================

/// Maximum number of hops in one jump chain.
///
/// Together with the no-revisit rule on move sequences this bounds the
/// per-piece search; chains on the 121-cell star rarely get near it.
pub const MAX_CHAIN_DEPTH: usize = 8;

// =============================================================================
// Default Layout
// =============================================================================

/// The canonical six-player starting position.
///
/// One line per row: `x` marks a cell outside the playable star, `0` an empty
/// playable cell, and `1`–`6` a cell occupied by that player. Each corner
/// triangle starts filled with its owner's ten pieces.
pub const DEFAULT_LAYOUT: &str = "\
xxxx1xxxxxxxxxxxx
xxxx11xxxxxxxxxxx
xxxx111xxxxxxxxxx
xxxx1111xxxxxxxxx
2222000003333xxxx
x222000000333xxxx
xx22000000033xxxx
xxx2000000003xxxx
xxxx000000000xxxx
xxxx6000000005xxx
xxxx66000000055xx
xxxx666000000555x
xxxx6666000005555
xxxxxxxxx4444xxxx
xxxxxxxxxx444xxxx
xxxxxxxxxxx44xxxx
xxxxxxxxxxxx4xxxx
";
