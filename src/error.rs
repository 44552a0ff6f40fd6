use std::num::ParseIntError;

/// Errors raised while parsing a board layout.
///
/// Any of these is fatal to initialization: no [`crate::board::Board`] value
/// exists when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} columns, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: unexpected character {ch:?}")]
    UnexpectedChar { row: usize, column: usize, ch: char },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding a peer message.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("empty message")]
    EmptyMessage,

    #[error("unknown message kind {0}")]
    UnknownKind(u32),

    #[error("{kind} message is missing a field")]
    MissingField { kind: &'static str },

    #[error("unknown player id {0}")]
    UnknownPlayer(u8),

    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_error_display() {
        let err = LayoutError::RowLength {
            row: 3,
            expected: 17,
            found: 16,
        };
        assert_eq!(err.to_string(), "row 3: expected 17 columns, found 16");

        let err = LayoutError::UnexpectedChar {
            row: 0,
            column: 5,
            ch: '7',
        };
        assert_eq!(err.to_string(), "row 0, column 5: unexpected character '7'");
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::UnknownKind(9);
        assert_eq!(err.to_string(), "unknown message kind 9");

        let err = ProtocolError::MissingField { kind: "MOVE" };
        assert_eq!(err.to_string(), "MOVE message is missing a field");
    }
}
