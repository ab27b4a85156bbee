use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    /// Less than two distinct symbols with a non-zero frequency were found.
    InsufficientSymbols(usize),
}

impl Display for CodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientSymbols(found) => write!(
                f,
                "At least 2 distinct symbols are required to build a code, but {} found",
                found
            ),
        }
    }
}

impl std::error::Error for CodingError {}
