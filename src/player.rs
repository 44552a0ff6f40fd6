//! Players, their home corners, and their directions of travel.
//!
//! Each of the six players owns one corner triangle of the star and races
//! toward the opposite corner. Midgame search only explores a player's
//! forward-facing directions; the per-player tables here replace the six
//! near-identical directional probes of older engines with one lookup.

use crate::board::{Direction, Position};

/// One of the six player colors. The discriminant order matches the layout
/// digits `1`–`6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Player {
    /// All players, in layout-digit order.
    pub const ALL: [Player; 6] = [
        Player::Red,
        Player::Orange,
        Player::Yellow,
        Player::Green,
        Player::Blue,
        Player::Purple,
    ];

    /// The layout digit and wire id of this player (`1`–`6`).
    pub fn id(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Orange => 2,
            Player::Yellow => 3,
            Player::Green => 4,
            Player::Blue => 5,
            Player::Purple => 6,
        }
    }

    /// Look up a player by its layout digit / wire id.
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::Red),
            2 => Some(Player::Orange),
            3 => Some(Player::Yellow),
            4 => Some(Player::Green),
            5 => Some(Player::Blue),
            6 => Some(Player::Purple),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Orange => "Orange",
            Player::Yellow => "Yellow",
            Player::Green => "Green",
            Player::Blue => "Blue",
            Player::Purple => "Purple",
        }
    }

    /// The corner this player's pieces start in.
    pub fn home_corner(self) -> Corner {
        match self {
            Player::Red => Corner::North,
            Player::Orange => Corner::West,
            Player::Yellow => Corner::Northeast,
            Player::Green => Corner::South,
            Player::Blue => Corner::East,
            Player::Purple => Corner::Southwest,
        }
    }

    /// The corner this player must fill to finish: the one opposite its home.
    pub fn target_corner(self) -> Corner {
        match self {
            Player::Red => Corner::South,
            Player::Orange => Corner::East,
            Player::Yellow => Corner::Southwest,
            Player::Green => Corner::North,
            Player::Blue => Corner::West,
            Player::Purple => Corner::Northeast,
        }
    }

    /// The forward-facing directions explored in midgame, ordered.
    ///
    /// Yellow and Purple advance along the `(+1,-1)`/`(-1,+1)` diagonal, which
    /// is not a lattice axis, so they zig-zag over two directions.
    pub fn forward_directions(self) -> &'static [Direction] {
        match self {
            Player::Red => &[Direction::South, Direction::Southeast, Direction::East],
            Player::Orange => &[Direction::East, Direction::Southeast, Direction::South],
            Player::Yellow => &[Direction::South, Direction::West],
            Player::Green => &[Direction::North, Direction::Northwest, Direction::West],
            Player::Blue => &[Direction::West, Direction::Northwest, Direction::North],
            Player::Purple => &[Direction::North, Direction::East],
        }
    }
}

/// One of the six corner triangles of the star.
///
/// The axis corners (North, South, East, West) are simple row or column
/// sweeps; the Northeast and Southwest wedges need a row range intersected
/// with a column-offset-from-row bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    North,
    South,
    East,
    West,
    Northeast,
    Southwest,
}

impl Corner {
    /// All corners.
    pub const ALL: [Corner; 6] = [
        Corner::North,
        Corner::South,
        Corner::East,
        Corner::West,
        Corner::Northeast,
        Corner::Southwest,
    ];

    /// Whether a grid position lies inside this corner triangle.
    pub fn contains(self, pos: Position) -> bool {
        let (row, col) = pos;
        match self {
            Corner::North => row <= 3 && (4..=row + 4).contains(&col),
            Corner::South => row >= 13 && (row - 4..=12).contains(&col),
            Corner::East => col >= 13 && (col - 4..=12).contains(&row),
            Corner::West => col <= 3 && (4..=col + 4).contains(&row),
            Corner::Northeast => (4..=7).contains(&row) && (row + 5..=12).contains(&col),
            Corner::Southwest => (9..=12).contains(&row) && (4..=row - 5).contains(&col),
        }
    }

    /// The corner's cells grouped into bands, deepest band first.
    ///
    /// The first band is the single tip cell, the last is the four-cell base
    /// adjoining the board interior. The target locator scans in this order.
    pub fn bands(self) -> Vec<Vec<Position>> {
        match self {
            Corner::North => (0..=3).map(|r| (4..=r + 4).map(|c| (r, c)).collect()).collect(),
            Corner::South => (13..=16)
                .rev()
                .map(|r| (r - 4..=12).map(|c| (r, c)).collect())
                .collect(),
            Corner::East => (13..=16)
                .rev()
                .map(|c| (c - 4..=12).map(|r| (r, c)).collect())
                .collect(),
            Corner::West => (0..=3).map(|c| (4..=c + 4).map(|r| (r, c)).collect()).collect(),
            // Bands of constant col - row, from the (4,12) tip inward.
            Corner::Northeast => (5..=8)
                .rev()
                .map(|k| (4..=(12 - k).min(7)).map(|r| (r, r + k)).collect())
                .collect(),
            // Bands of constant row - col, from the (12,4) tip inward.
            Corner::Southwest => (5..=8)
                .rev()
                .map(|k| ((k + 4).max(9)..=12).map(|r| (r, r - k)).collect())
                .collect(),
        }
    }

    /// All ten cells of the corner, in band order.
    pub fn cells(self) -> Vec<Position> {
        self.bands().into_iter().flatten().collect()
    }
}

/// Whether resting at `pos` would squat in another player's corner.
///
/// A player may rest inside its own home and inside its target corner; every
/// other corner triangle is off limits as a destination (passing through
/// during a jump chain is fine).
pub fn is_foreign_home(pos: Position, player: Player) -> bool {
    Corner::ALL
        .iter()
        .any(|&c| c.contains(pos) && c != player.home_corner() && c != player.target_corner())
}
