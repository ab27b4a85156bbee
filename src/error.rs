use std::fmt::Display;

use crate::huffman::CodingError;

#[derive(Debug)]
pub enum Error {
    NoInputProvided,
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToReadInputFile(String, std::io::Error),
    InputIsNotValidUtf8(String),
    HuffmanCodingFailed(String, CodingError),
    WorkerTerminatedUnexpectedly(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoInputProvided => {
                write!(f, "No input provided. Pass an input file or --text.")
            }
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::InputIsNotValidUtf8(label) => {
                write!(
                    f,
                    "Input '{}' is not valid UTF-8. Use the Bytes symbol kind instead.",
                    label
                )
            }
            Self::HuffmanCodingFailed(label, error) => {
                write!(f, "Unable to build a code for '{}': {}", label, error)
            }
            Self::WorkerTerminatedUnexpectedly(label) => {
                write!(f, "Worker encoding '{}' terminated unexpectedly", label)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadInputFile(_, error) => Some(error),
            Self::HuffmanCodingFailed(_, error) => Some(error),
            _ => None,
        }
    }
}
