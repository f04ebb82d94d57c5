// error module - every failure a viewer operation can report
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

/// Which user input an `InvalidArgument` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    SearchText,
    ShadeText,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::SearchText => f.write_str("search text"),
            Argument::ShadeText => f.write_str("shade text"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("could not read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no content to clear")]
    NoContent,

    #[error("{0} must not be empty")]
    InvalidArgument(Argument),

    /// `index` is `None` when nothing was selected at all
    #[error("{}", out_of_range(.index, .len))]
    IndexOutOfRange { index: Option<usize>, len: usize },
}

fn out_of_range(index: &Option<usize>, len: &usize) -> String {
    match index {
        Some(index) => format!("shade index {index} is out of range ({len} shades configured)"),
        None => "no shade selected".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_names_the_input() {
        assert_eq!(
            ViewerError::InvalidArgument(Argument::SearchText).to_string(),
            "search text must not be empty"
        );
        assert_eq!(
            ViewerError::InvalidArgument(Argument::ShadeText).to_string(),
            "shade text must not be empty"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let missing = ViewerError::IndexOutOfRange { index: None, len: 2 };
        assert_eq!(missing.to_string(), "no shade selected");
        let stale = ViewerError::IndexOutOfRange { index: Some(4), len: 2 };
        assert_eq!(stale.to_string(), "shade index 4 is out of range (2 shades configured)");
    }
}
