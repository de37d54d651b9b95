use thiserror::Error;

/// Errors.
///    Error 1: Invalid facelet string (wrong length or characters)
///    Error 2: Not all 12 edges exist exactly once
///    Error 3: Flip error: one edge has to be flipped
///    Error 4: Not all corners exist exactly once
///    Error 5: Twist error: one corner has to be twisted
///    Error 6: Parity error: two corners or two edges have to be exchanged
///    Error 7: Invalid scramble string
///    Error 8: No solution exists within the given max_length
///    Error 9: Search timed out before a solution was found
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid color value")]
    InvalidColor,
    #[error("invalid corner value")]
    InvalidCorner,
    #[error("invalid edge value")]
    InvalidEdge,
    #[error("facelet string must be 54 characters over U,R,F,D,L,B with nine of each")]
    InvalidFaceletString,
    #[error("invalid scramble string")]
    InvalidScramble,
    #[error("not all 12 edges exist exactly once")]
    EdgeCountError,
    #[error("one edge has to be flipped")]
    FlipError,
    #[error("not all 8 corners exist exactly once")]
    CornerCountError,
    #[error("one corner has to be twisted")]
    TwistError,
    #[error("two corners or two edges have to be exchanged")]
    ParityError,
    #[error("no solution exists for the given max_length")]
    NoSolutionForMaxDepth,
    #[error("search timed out before a solution was found")]
    Timeout,
    #[error("table encode/decode error: {0}")]
    Codec(String),
    #[error("table I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<bincode::error::EncodeError> for Error {
    fn from(e: bincode::error::EncodeError) -> Self {
        Error::Codec(e.to_string())
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(e: bincode::error::DecodeError) -> Self {
        Error::Codec(e.to_string())
    }
}

impl Error {
    /// Map a `CubieCube::verify()` result code to the corresponding `Error`, if any.
    pub fn from_verify_code(code: i8) -> Option<Error> {
        match code {
            0 => None,
            -2 => Some(Error::EdgeCountError),
            -3 => Some(Error::FlipError),
            -4 => Some(Error::CornerCountError),
            -5 => Some(Error::TwistError),
            -6 => Some(Error::ParityError),
            _ => Some(Error::InvalidFaceletString),
        }
    }
}
