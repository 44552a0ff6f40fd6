//! Locating the cells a player still has to fill.
//!
//! Recomputed from the live board on every search call; nothing here is
//! cached between turns, so the frontier always reflects the current
//! occupancy.

use crate::board::{Board, Cell, Position};
use crate::player::Player;

/// The destination frontier and the already-finished pieces of one player,
/// as of one board snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    /// Empty target-corner cells still worth moving toward, deepest first.
    pub frontier: Vec<Position>,
    /// The player's pieces resting in cells that count as finished.
    pub settled: Vec<Position>,
}

/// Scan the player's target corner and report its frontier and settled sets.
///
/// Bands are visited deepest-first (the tip cell of the corner, then the
/// bands behind it). Empty cells join the frontier and the player's own
/// pieces join the settled set; the first band with no empty cell at all
/// ends the scan, so cells behind a filled band are not offered as targets.
///
/// An empty frontier is a legitimate result: either the corner is complete
/// or its deepest open band is walled off, and scoring against it must
/// treat every move as maximally unattractive rather than fail.
pub fn locate_targets(board: &Board, player: Player) -> Targets {
    let mut frontier = Vec::new();
    let mut settled = Vec::new();
    for band in player.target_corner().bands() {
        let mut band_full = true;
        for pos in band {
            match board.cell(pos) {
                Cell::Empty => {
                    band_full = false;
                    frontier.push(pos);
                }
                Cell::Occupied(p) if p == player => settled.push(pos),
                _ => {}
            }
        }
        if band_full {
            break;
        }
    }
    Targets { frontier, settled }
}

/// Whether the player has filled its entire target corner.
pub fn target_complete(board: &Board, player: Player) -> bool {
    player
        .target_corner()
        .cells()
        .into_iter()
        .all(|pos| board.cell(pos) == Cell::Occupied(player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_LAYOUT;

    fn empty_star() -> Board {
        let cleared: String = DEFAULT_LAYOUT
            .chars()
            .map(|c| if c.is_ascii_digit() { '0' } else { c })
            .collect();
        Board::from_layout(&cleared).unwrap()
    }

    #[test]
    fn empty_corner_is_all_frontier() {
        let board = empty_star();
        let targets = locate_targets(&board, Player::Red);
        assert_eq!(targets.frontier.len(), 10);
        assert!(targets.settled.is_empty());
        // Deepest cell first.
        assert_eq!(targets.frontier[0], (16, 12));
    }

    #[test]
    fn own_piece_in_scanned_band_is_settled() {
        let mut board = empty_star();
        board.place_piece((16, 12), Player::Red);
        let targets = locate_targets(&board, Player::Red);
        assert_eq!(targets.settled, vec![(16, 12)]);
        // The tip band is full, so the scan stops there.
        assert!(targets.frontier.is_empty());
    }

    #[test]
    fn foreign_piece_is_neither_target_nor_settled() {
        let mut board = empty_star();
        board.place_piece((16, 12), Player::Blue);
        let targets = locate_targets(&board, Player::Red);
        assert!(targets.settled.is_empty());
        assert!(targets.frontier.is_empty(), "squatted tip band stops the scan");
    }

    #[test]
    fn scan_stops_at_the_first_full_band() {
        let mut board = empty_star();
        // Fill the two-cell band behind the South tip.
        board.place_piece((15, 11), Player::Red);
        board.place_piece((15, 12), Player::Blue);
        let targets = locate_targets(&board, Player::Red);
        // The open tip is offered; nothing behind the full band is.
        assert_eq!(targets.frontier, vec![(16, 12)]);
        assert_eq!(targets.settled, vec![(15, 11)]);
    }

    #[test]
    fn frontier_is_monotonic_in_band_order() {
        let mut board = empty_star();
        board.place_piece((15, 11), Player::Red);
        board.place_piece((15, 12), Player::Red);
        let targets = locate_targets(&board, Player::Red);
        let bands = Player::Red.target_corner().bands();
        let cutoff = 1; // band index of the filled band
        for (idx, band) in bands.iter().enumerate() {
            for pos in band {
                if idx > cutoff {
                    assert!(!targets.frontier.contains(pos), "{pos:?} is past the cutoff");
                }
            }
        }
    }

    #[test]
    fn wedge_corner_scans_diagonal_bands() {
        let board = empty_star();
        let targets = locate_targets(&board, Player::Yellow);
        // Yellow fills the Southwest wedge, tip first.
        assert_eq!(targets.frontier[0], (12, 4));
        assert_eq!(targets.frontier.len(), 10);
    }

    #[test]
    fn completion_requires_every_cell() {
        let mut board = empty_star();
        for pos in Player::Red.target_corner().cells() {
            assert!(!target_complete(&board, Player::Red));
            board.place_piece(pos, Player::Red);
        }
        assert!(target_complete(&board, Player::Red));

        // A foreign piece in the corner breaks completion.
        board.place_piece((16, 12), Player::Blue);
        assert!(!target_complete(&board, Player::Red));
    }
}
