//! The line-oriented peer protocol.
//!
//! Messages are single lines of space-separated decimal integers; the first
//! integer names the message kind.
//!
//! ## Server → client
//!
//! - `1 <or> <oc> <nr> <nc>` - a move was played (any player's, ours echoed back)
//! - `2 <player>` - new game; we play `<player>`
//! - `3 <player> <row> <col>` - authoritative piece placement
//! - `4` - our turn: answer with a move
//! - `5` - our last move was rejected
//! - `6` - we took too long; the turn is forfeit
//! - `7 <player>` - the game is over
//!
//! ## Client → server
//!
//! - `1 <or> <oc> <nr> <nc>` - our move, origin and destination only (any
//!   jump chain between them is implied)
//!
//! The [`Session`] keeps a board in sync from these messages and answers
//! `TURN` with the search engine's move. It never applies its own move
//! locally; the server echoes every accepted move back as kind `1`.

use std::io::{self, BufRead, Write};

use crate::board::{Board, Position};
use crate::error::{LayoutError, ProtocolError};
use crate::player::Player;
use crate::search::best_move;

/// A decoded message from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerMessage {
    Move { from: Position, to: Position },
    NewGame { player: Player },
    PlacePiece { player: Player, pos: Position },
    Turn,
    InvalidMove,
    MoveTimeout,
    Win { player: Player },
}

fn next_int<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    kind: &'static str,
) -> Result<usize, ProtocolError> {
    fields
        .next()
        .ok_or(ProtocolError::MissingField { kind })?
        .parse()
        .map_err(ProtocolError::from)
}

fn next_player<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    kind: &'static str,
) -> Result<Player, ProtocolError> {
    let id = fields
        .next()
        .ok_or(ProtocolError::MissingField { kind })?
        .parse::<u8>()?;
    Player::from_id(id).ok_or(ProtocolError::UnknownPlayer(id))
}

impl ServerMessage {
    /// Decode one line.
    pub fn parse(line: &str) -> Result<ServerMessage, ProtocolError> {
        let mut fields = line.split_whitespace();
        let kind: u32 = fields.next().ok_or(ProtocolError::EmptyMessage)?.parse()?;

        match kind {
            1 => Ok(ServerMessage::Move {
                from: (next_int(&mut fields, "MOVE")?, next_int(&mut fields, "MOVE")?),
                to: (next_int(&mut fields, "MOVE")?, next_int(&mut fields, "MOVE")?),
            }),
            2 => Ok(ServerMessage::NewGame {
                player: next_player(&mut fields, "NEW_GAME")?,
            }),
            3 => Ok(ServerMessage::PlacePiece {
                player: next_player(&mut fields, "PLACE_PIECE")?,
                pos: (
                    next_int(&mut fields, "PLACE_PIECE")?,
                    next_int(&mut fields, "PLACE_PIECE")?,
                ),
            }),
            4 => Ok(ServerMessage::Turn),
            5 => Ok(ServerMessage::InvalidMove),
            6 => Ok(ServerMessage::MoveTimeout),
            7 => Ok(ServerMessage::Win {
                player: next_player(&mut fields, "WIN")?,
            }),
            other => Err(ProtocolError::UnknownKind(other)),
        }
    }
}

/// A message we send to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Move { from: Position, to: Position },
}

impl ClientMessage {
    /// Encode as one protocol line (without the newline).
    pub fn encode(&self) -> String {
        match self {
            ClientMessage::Move { from, to } => {
                format!("1 {} {} {} {}", from.0, from.1, to.0, to.1)
            }
        }
    }
}

/// A client session: a board kept in sync from server messages, answering
/// `TURN` with the engine's move.
pub struct Session {
    initial: Board,
    board: Board,
    player: Option<Player>,
}

impl Session {
    /// Create a session playing on the given layout.
    pub fn new(layout: &str) -> Result<Session, LayoutError> {
        let initial = Board::from_layout(layout)?;
        let board = initial.clone();
        Ok(Session {
            initial,
            board,
            player: None,
        })
    }

    /// The current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The seat assigned by the last NEW_GAME, if any.
    pub fn player(&self) -> Option<Player> {
        self.player
    }

    /// Process one incoming line; returns the reply line to send, if any.
    ///
    /// A `TURN` before any NEW_GAME, or one where the engine has no legal
    /// move, produces no reply; the server's timeout is the forfeit path.
    /// A server move our board considers illegal is dropped rather than
    /// applied; the server is authoritative about turn order, not geometry.
    pub fn handle(&mut self, line: &str) -> Result<Option<String>, ProtocolError> {
        match ServerMessage::parse(line)? {
            ServerMessage::Move { from, to } => {
                self.board.move_piece(from, to);
                Ok(None)
            }
            ServerMessage::NewGame { player } => {
                self.board = self.initial.clone();
                self.player = Some(player);
                Ok(None)
            }
            ServerMessage::PlacePiece { player, pos } => {
                self.board.place_piece(pos, player);
                Ok(None)
            }
            ServerMessage::Turn => {
                let Some(player) = self.player else {
                    return Ok(None);
                };
                Ok(best_move(&self.board, player).map(|mv| {
                    ClientMessage::Move {
                        from: mv.origin(),
                        to: mv.destination(),
                    }
                    .encode()
                }))
            }
            ServerMessage::InvalidMove
            | ServerMessage::MoveTimeout
            | ServerMessage::Win { .. } => Ok(None),
        }
    }

    /// Run the session loop over stdin/stdout until EOF.
    ///
    /// Malformed messages are reported on stderr and skipped.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match self.handle(line) {
                Ok(Some(reply)) => {
                    writeln!(stdout, "{reply}")?;
                    stdout.flush()?;
                }
                Ok(None) => {}
                Err(err) => eprintln!("ignoring message ({err}): {line}"),
            }
        }
        Ok(())
    }
}
