//! The move search engine.
//!
//! One invocation scores, for every unsettled piece of the active player,
//! every single-step walk and every jump chain the piece could make, and
//! returns the single move with the best net advance toward the player's
//! target frontier. The caller's board is never touched: chain exploration
//! happens on private clones, one per branch.
//!
//! A move is either one walk step or one-or-more chained jumps; walks never
//! chain and a chain never ends with a walk. Midgame search explores only
//! the player's forward directions. Once any piece has settled (or when the
//! forward-only pass finds nothing) the search switches to endgame mode and
//! explores all six directions, which lets pieces near the goal shuffle
//! sideways and backwards into place.

use crate::board::{adjacency_direction, adjacent, Board, Cell, Direction, Position};
use crate::constants::{MAX_CHAIN_DEPTH, NUM_COLUMNS, NUM_ROWS};
use crate::player::{is_foreign_home, Player};
use crate::targets::{locate_targets, Targets};

/// A move as an ordered sequence of positions: origin first, destination
/// last, with the landing cell of every intermediate hop in between.
///
/// Consecutive positions are unit-adjacent (a walk, only ever alone) or two
/// cells apart (one jump); no position repeats within a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    steps: Vec<Position>,
}

impl Move {
    /// The cell the piece starts from.
    pub fn origin(&self) -> Position {
        self.steps[0]
    }

    /// The cell the piece comes to rest on.
    pub fn destination(&self) -> Position {
        self.steps[self.steps.len() - 1]
    }

    /// Every position the piece touches, origin and destination included.
    pub fn steps(&self) -> &[Position] {
        &self.steps
    }

    /// Whether this is a jump chain rather than a single walk step.
    pub fn is_jump(&self) -> bool {
        self.steps.len() > 2 || adjacency_direction(self.steps[0], self.steps[1]).is_none()
    }

    /// The four-integer wire form: origin row, origin column, destination
    /// row, destination column.
    pub fn wire(&self) -> [usize; 4] {
        let (or, oc) = self.origin();
        let (dr, dc) = self.destination();
        [or, oc, dr, dc]
    }
}

/// Squared Euclidean distance between two grid positions.
fn distance(a: Position, b: Position) -> i64 {
    let dr = a.0 as i64 - b.0 as i64;
    let dc = a.1 as i64 - b.1 as i64;
    dr * dr + dc * dc
}

/// Distance from `pos` to the nearest frontier cell, or `None` when there is
/// no frontier to measure against.
fn nearest_target(pos: Position, frontier: &[Position]) -> Option<i64> {
    frontier.iter().map(|&t| distance(pos, t)).min()
}

/// Compute the best move for `player` on this board.
///
/// Returns `None` only when no piece can move at all, after retrying with
/// all six directions; callers must treat that explicitly (typically by
/// forfeiting the turn), it is not an error.
pub fn best_move(board: &Board, player: Player) -> Option<Move> {
    let targets = locate_targets(board, player);
    best_move_with_targets(board, player, &targets)
}

/// [`best_move`] against a frontier the caller already computed.
///
/// Endgame mode starts enabled when any piece is already settled; otherwise
/// a fruitless forward-only pass is retried once with all six directions
/// before concluding no move exists.
pub fn best_move_with_targets(board: &Board, player: Player, targets: &Targets) -> Option<Move> {
    let endgame = !targets.settled.is_empty();
    match search_all(board, player, targets, endgame) {
        Some((_, mv)) => Some(mv),
        None if !endgame => search_all(board, player, targets, true).map(|(_, mv)| mv),
        None => None,
    }
}

fn directions(player: Player, endgame: bool) -> &'static [Direction] {
    if endgame {
        &Direction::ALL
    } else {
        player.forward_directions()
    }
}

/// Run the per-piece search for every unsettled piece, keeping the best
/// scored candidate. Ties keep the earlier find, so results are stable for
/// a given board.
fn search_all(
    board: &Board,
    player: Player,
    targets: &Targets,
    endgame: bool,
) -> Option<(i64, Move)> {
    let mut best = None;
    for row in 0..NUM_ROWS {
        for col in 0..NUM_COLUMNS {
            let pos = (row, col);
            if board.cell(pos) != Cell::Occupied(player) {
                continue;
            }
            if targets.settled.contains(&pos) {
                continue;
            }
            search_piece(board, player, pos, targets, endgame, &mut best);
        }
    }
    best
}

/// Depth-1 walks plus the jump-chain DFS for one piece.
fn search_piece(
    board: &Board,
    player: Player,
    origin: Position,
    targets: &Targets,
    endgame: bool,
    best: &mut Option<(i64, Move)>,
) {
    let dirs = directions(player, endgame);
    let origin_gap = nearest_target(origin, &targets.frontier);

    for &dir in dirs {
        if let Some(next) = adjacent(origin, dir) {
            if board.cell(next) == Cell::Empty {
                offer(player, &[origin, next], origin_gap, targets, best);
            }
        }
    }

    let mut path = vec![origin];
    extend_jumps(board, player, &mut path, origin_gap, targets, dirs, best);
}

/// Extend the jump chain ending at the last element of `path` by one hop in
/// every eligible direction, offering each landing cell as a candidate
/// resting place before recursing.
///
/// Each extension explores on a clone with the piece relocated, so a vacated
/// cell is genuinely empty for deeper hops. Termination comes from the
/// no-revisit check on `path` plus the chain depth cap.
fn extend_jumps(
    board: &Board,
    player: Player,
    path: &mut Vec<Position>,
    origin_gap: Option<i64>,
    targets: &Targets,
    dirs: &[Direction],
    best: &mut Option<(i64, Move)>,
) {
    if path.len() - 1 >= MAX_CHAIN_DEPTH {
        return;
    }
    let from = path[path.len() - 1];
    for &dir in dirs {
        let Some(over) = adjacent(from, dir) else {
            continue;
        };
        if !board.cell(over).is_piece() {
            continue;
        }
        let Some(landing) = adjacent(over, dir) else {
            continue;
        };
        if board.cell(landing) != Cell::Empty {
            continue;
        }
        if path.contains(&landing) {
            continue;
        }

        path.push(landing);
        offer(player, path, origin_gap, targets, best);

        let mut branch = board.clone();
        branch.relocate(from, landing);
        extend_jumps(&branch, player, path, origin_gap, targets, dirs, best);
        path.pop();
    }
}

/// Score a candidate and keep it when it strictly beats the current best.
///
/// Candidates resting in a foreign home are discarded outright. With no
/// frontier to measure against the candidate scores `i64::MIN`, which still
/// beats having no move at all.
fn offer(
    player: Player,
    path: &[Position],
    origin_gap: Option<i64>,
    targets: &Targets,
    best: &mut Option<(i64, Move)>,
) {
    let dest = path[path.len() - 1];
    if is_foreign_home(dest, player) {
        return;
    }
    let score = match (origin_gap, nearest_target(dest, &targets.frontier)) {
        (Some(from), Some(to)) => from - to,
        _ => i64::MIN,
    };
    let replace = match best {
        Some((current, _)) => score > *current,
        None => true,
    };
    if replace {
        *best = Some((
            score,
            Move {
                steps: path.to_vec(),
            },
        ));
    }
}

/// A uniformly random legal move for `player`, or `None` when none exists.
///
/// Baseline mover for demos and tests: it considers walks and single jumps
/// in all six directions (no chains), honors the foreign-home rule, and
/// skips settled pieces, but does no scoring at all.
pub fn random_move(board: &Board, player: Player, rng: &mut fastrand::Rng) -> Option<Move> {
    let targets = locate_targets(board, player);
    let mut candidates = Vec::new();
    for row in 0..NUM_ROWS {
        for col in 0..NUM_COLUMNS {
            let pos = (row, col);
            if board.cell(pos) != Cell::Occupied(player) || targets.settled.contains(&pos) {
                continue;
            }
            for dir in Direction::ALL {
                let Some(next) = adjacent(pos, dir) else {
                    continue;
                };
                match board.cell(next) {
                    Cell::Empty => {
                        if !is_foreign_home(next, player) {
                            candidates.push(Move {
                                steps: vec![pos, next],
                            });
                        }
                    }
                    Cell::Occupied(_) => {
                        if let Some(landing) = adjacent(next, dir) {
                            if board.cell(landing) == Cell::Empty
                                && !is_foreign_home(landing, player)
                            {
                                candidates.push(Move {
                                    steps: vec![pos, landing],
                                });
                            }
                        }
                    }
                    Cell::Blocked => {}
                }
            }
        }
    }
    if candidates.is_empty() {
        return None;
    }
    let pick = rng.usize(0..candidates.len());
    Some(candidates.swap_remove(pick))
}
