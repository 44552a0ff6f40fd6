//! Integration tests for halma-rust.
//!
//! These drive the engine through the public API only: boards come from
//! layout strings, moves are replayed through `is_legal_move`/`move_piece`
//! the way an external mover would apply them.

use halma_rust::board::{Board, Cell};
use halma_rust::constants::DEFAULT_LAYOUT;
use halma_rust::error::LayoutError;
use halma_rust::player::Player;
use halma_rust::search::{best_move, random_move, Move};
use halma_rust::targets::locate_targets;

// =============================================================================
// Helpers for setting up test positions
// =============================================================================

/// A layout string: the empty star with the given pieces placed on it.
fn layout_with(pieces: &[(usize, usize, u8)]) -> String {
    let mut rows: Vec<Vec<char>> = DEFAULT_LAYOUT
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| if c.is_ascii_digit() { '0' } else { c })
                .collect()
        })
        .collect();
    for &(row, col, id) in pieces {
        assert_eq!(rows[row][col], '0', "({row},{col}) must be playable and free");
        rows[row][col] = (b'0' + id) as char;
    }
    let mut text: String = rows
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text
}

/// Replay a move hop by hop on a clone of `board`, asserting every step is
/// independently legal, and return the board with the move applied.
fn replay(board: &Board, mv: &Move) -> Board {
    let mut board = board.clone();
    for pair in mv.steps().windows(2) {
        let (from, to) = (pair[0], pair[1]);
        assert!(
            board.is_legal_move(from, to),
            "step {from:?} -> {to:?} of {:?} is not legal",
            mv.steps()
        );
        assert!(board.move_piece(from, to));
    }
    board
}

/// Count each player's pieces.
fn piece_counts(board: &Board) -> Vec<(Player, usize)> {
    Player::ALL
        .into_iter()
        .map(|player| {
            let count = (0..17)
                .flat_map(|row| (0..17).map(move |col| (row, col)))
                .filter(|&pos| board.cell(pos) == Cell::Occupied(player))
                .count();
            (player, count)
        })
        .collect()
}

// =============================================================================
// Layout loading
// =============================================================================

#[test]
fn loads_a_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board");
    std::fs::write(&path, DEFAULT_LAYOUT).unwrap();

    let board = Board::from_file(&path).unwrap();
    assert_eq!(board.to_string(), DEFAULT_LAYOUT);
}

#[test]
fn rejects_a_damaged_layout_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board");
    let mut lines: Vec<String> = DEFAULT_LAYOUT.lines().map(str::to_owned).collect();
    lines[8].push('0');
    std::fs::write(&path, lines.join("\n")).unwrap();

    assert!(matches!(
        Board::from_file(&path),
        Err(LayoutError::RowLength { row: 8, .. })
    ));
}

#[test]
fn missing_layout_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nonexistent");
    assert!(matches!(Board::from_file(&path), Err(LayoutError::Io(_))));
}

// =============================================================================
// Engine play from the canonical start
// =============================================================================

#[test]
fn every_seat_opens_with_a_replayable_move() {
    let board = Board::from_layout(DEFAULT_LAYOUT).unwrap();
    for player in Player::ALL {
        let mv = best_move(&board, player)
            .unwrap_or_else(|| panic!("{} has no opening move", player.name()));
        let after = replay(&board, &mv);
        assert_eq!(after.cell(mv.destination()), Cell::Occupied(player));
        assert_eq!(after.cell(mv.origin()), Cell::Empty);
    }
}

#[test]
fn six_player_game_stays_consistent() {
    let mut board = Board::from_layout(DEFAULT_LAYOUT).unwrap();
    for _round in 0..40 {
        for player in Player::ALL {
            let Some(mv) = best_move(&board, player) else {
                continue;
            };
            replay(&board, &mv);
            assert!(
                board.move_piece(mv.origin(), mv.destination()),
                "{} move {:?} rejected",
                player.name(),
                mv.steps()
            );
        }
        for (player, count) in piece_counts(&board) {
            assert_eq!(count, 10, "{} lost pieces", player.name());
        }
    }
}

#[test]
fn lone_seat_advances_every_turn() {
    // Only Red moves. Every midgame move faces south, so Red's total squared
    // distance to the South tip must drop on every single turn.
    let mut board = Board::from_layout(DEFAULT_LAYOUT).unwrap();
    let tip = (16usize, 12usize);
    let total = |board: &Board| -> i64 {
        let mut sum = 0;
        for row in 0..17usize {
            for col in 0..17usize {
                if board.cell((row, col)) == Cell::Occupied(Player::Red) {
                    let dr = row as i64 - tip.0 as i64;
                    let dc = col as i64 - tip.1 as i64;
                    sum += dr * dr + dc * dc;
                }
            }
        }
        sum
    };

    let mut before = total(&board);
    for turn in 0..12 {
        let mv = best_move(&board, Player::Red).expect("Red can move");
        assert!(board.move_piece(mv.origin(), mv.destination()));
        let after = total(&board);
        assert!(after < before, "no progress on turn {turn}");
        before = after;
    }
}

// =============================================================================
// Endgame scenarios
// =============================================================================

#[test]
fn finishes_the_corner_with_the_best_jump() {
    // Nine pieces home, the tip still open. The piece at (14,10) can jump
    // straight onto it, outscoring every other candidate.
    let layout = layout_with(&[
        (13, 9, 1),
        (13, 10, 1),
        (13, 11, 1),
        (13, 12, 1),
        (14, 10, 1),
        (14, 11, 1),
        (14, 12, 1),
        (15, 11, 1),
        (15, 12, 1),
        (12, 12, 1),
    ]);
    let board = Board::from_layout(&layout).unwrap();

    let targets = locate_targets(&board, Player::Red);
    assert_eq!(targets.frontier, vec![(16, 12)]);
    assert_eq!(targets.settled, vec![(15, 11), (15, 12)]);

    let mv = best_move(&board, Player::Red).unwrap();
    assert_eq!(mv.steps(), &[(14, 10), (16, 12)]);
    replay(&board, &mv);
}

#[test]
fn long_chain_is_replayable_hop_by_hop() {
    // A ladder of Blue pieces lets Orange triple-jump across the middle.
    let layout = layout_with(&[
        (8, 4, 2),
        (8, 5, 5),
        (8, 7, 5),
        (8, 9, 5),
    ]);
    let board = Board::from_layout(&layout).unwrap();

    let mv = best_move(&board, Player::Orange).unwrap();
    assert_eq!(mv.steps(), &[(8, 4), (8, 6), (8, 8), (8, 10)]);
    let after = replay(&board, &mv);
    assert_eq!(after.cell((8, 10)), Cell::Occupied(Player::Orange));
    // The jumped pieces stay where they were.
    for pos in [(8, 5), (8, 7), (8, 9)] {
        assert_eq!(after.cell(pos), Cell::Occupied(Player::Blue));
    }
}

// =============================================================================
// Random baseline mover
// =============================================================================

#[test]
fn random_mover_plays_legally() {
    let mut board = Board::from_layout(DEFAULT_LAYOUT).unwrap();
    let mut rng = fastrand::Rng::with_seed(42);
    for _round in 0..10 {
        for player in Player::ALL {
            let Some(mv) = random_move(&board, player, &mut rng) else {
                continue;
            };
            assert!(board.is_legal_move(mv.origin(), mv.destination()));
            assert!(board.move_piece(mv.origin(), mv.destination()));
        }
    }
    for (player, count) in piece_counts(&board) {
        assert_eq!(count, 10, "{} lost pieces", player.name());
    }
}
