use std::{fs, io::ErrorKind, path::Path};

use clap::{builder::PossibleValue, ValueEnum};

use crate::{error::Error, Result};

/// How the content of an input is split into symbols.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolKind {
    Characters,
    Bytes,
    Words,
}

impl ValueEnum for SymbolKind {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Characters, Self::Bytes, Self::Words]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Characters => Some(PossibleValue::new("Characters")),
            Self::Bytes => Some(PossibleValue::new("Bytes")),
            Self::Words => Some(PossibleValue::new("Words")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Input {
    pub label: String,
    pub content: Vec<u8>,
}

impl Input {
    pub fn from_text(index: usize, text: &str) -> Self {
        Input {
            label: format!("text #{}", index + 1),
            content: text.as_bytes().to_vec(),
        }
    }

    pub fn from_file(file_path: &Path) -> Result<Self> {
        let label = file_path.display().to_string();
        let content = fs::read(file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::InputFileNotFound(label.clone()),
            ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(label.clone()),
            _ => Error::UnableToReadInputFile(label.clone(), e),
        })?;
        Ok(Input { label, content })
    }

    pub fn as_text(&self) -> Result<&str> {
        std::str::from_utf8(&self.content)
            .map_err(|_| Error::InputIsNotValidUtf8(self.label.clone()))
    }

    pub fn characters(&self) -> Result<Vec<char>> {
        Ok(self.as_text()?.chars().collect())
    }

    pub fn words(&self) -> Result<Vec<String>> {
        Ok(self
            .as_text()?
            .split_whitespace()
            .map(str::to_owned)
            .collect())
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.content.clone()
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::Input;
    use crate::error::Error;

    #[test]
    fn test_text_label_counts_from_one() {
        let input = Input::from_text(0, "abc");
        assert_eq!(input.label, "text #1");
    }

    #[test]
    fn test_split_words() {
        let input = Input::from_text(0, "to be\n or  not\tto be");
        let words = input.words().expect("input is valid UTF-8");
        assert_eq!(words, vec!["to", "be", "or", "not", "to", "be"]);
    }

    #[test]
    fn test_split_characters() {
        let input = Input::from_text(0, "äb");
        let characters = input.characters().expect("input is valid UTF-8");
        assert_eq!(characters, vec!['ä', 'b']);
        assert_eq!(input.bytes().len(), 3);
    }

    #[test]
    fn test_invalid_utf8() {
        let input = Input {
            label: String::from("binary"),
            content: vec![0xFF, 0xFE, 0x00],
        };
        assert!(matches!(input.characters(), Err(Error::InputIsNotValidUtf8(_))));
        assert_eq!(input.bytes(), vec![0xFF, 0xFE, 0x00]);
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/this/path/does/not/exist.txt");
        let result = Input::from_file(&path);
        assert!(matches!(result, Err(Error::InputFileNotFound(_))));
    }
}
