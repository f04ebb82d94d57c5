// notification module - turns operation results into messages the user sees
use super::error::{Argument, ViewerError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: &'static str,
    pub message: String,
}

impl Notification {
    pub fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self { level: Level::Info, title, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: Level::Warning, title: "Warning", message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: Level::Error, title: "Error", message: message.into() }
    }

    pub fn lines_deleted(count: usize) -> Self {
        Self::info("Result", format!("{count} line(s) were deleted"))
    }
}

impl From<&ViewerError> for Notification {
    fn from(error: &ViewerError) -> Self {
        match error {
            ViewerError::FileAccess { source, .. } => {
                Self::error(format!("Could not open the file:\n{source}"))
            }
            ViewerError::NoContent => Self::warning("No content to clear"),
            ViewerError::InvalidArgument(Argument::SearchText) => {
                Self::warning("You must enter a text to search for")
            }
            ViewerError::InvalidArgument(Argument::ShadeText) => {
                Self::warning("You must enter a text")
            }
            ViewerError::IndexOutOfRange { .. } => Self::warning("Select a shade to remove"),
        }
    }
}
