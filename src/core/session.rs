// session module - owns the buffer and the shades, and recomputes highlights after every change
use super::{
    buffer::Buffer,
    error::{Result, ViewerError},
    shades::{Highlights, ShadeColor, ShadeEngine, ShadeRule},
};
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_TITLE: &str = "Log Viewer";

#[derive(Default)]
pub struct Session {
    buffer: Buffer,
    shades: ShadeEngine,
    current_file: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn shades(&self) -> &[ShadeRule] {
        self.shades.rules()
    }

    pub fn highlights(&self) -> &Highlights {
        self.shades.highlights()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn title(&self) -> String {
        match &self.current_file {
            Some(path) => format!("{APP_TITLE} - {}", path.display()),
            None => APP_TITLE.to_string(),
        }
    }

    /// Reads `path` as UTF-8 and loads it; on failure nothing changes
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            error!("Failed to open {}: {}", path.display(), source);
            ViewerError::FileAccess {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.load(&content);
        self.current_file = Some(path.to_path_buf());
        info!("Opened {} ({} lines)", path.display(), self.buffer.line_count());
        Ok(())
    }

    pub fn load(&mut self, content: &str) {
        self.buffer.load(content);
        self.recompute();
    }

    // edits typed into the view
    pub fn replace_content(&mut self, content: &str) {
        self.buffer.load(content);
        debug!("Buffer edited ({} lines)", self.buffer.line_count());
        self.recompute();
    }

    pub fn remove_blank_lines(&mut self) -> Result<usize> {
        let removed = self.buffer.remove_blank_lines().inspect_err(log_rejected)?;
        info!("Removed {removed} blank line(s)");
        self.recompute();
        Ok(removed)
    }

    pub fn remove_lines_containing(&mut self, needle: &str) -> Result<usize> {
        let removed = self
            .buffer
            .remove_lines_containing(needle)
            .inspect_err(log_rejected)?;
        info!("Removed {removed} line(s) containing '{needle}'");
        self.recompute();
        Ok(removed)
    }

    pub fn add_shade(&mut self, text: &str, color: ShadeColor) -> Result<usize> {
        let index = self.shades.add_rule(text, color).inspect_err(log_rejected)?;
        info!("Added shade '{text}' with {color}");
        self.recompute();
        Ok(index)
    }

    /// `selected` is the row picked in the shade list, if any
    pub fn remove_shade(&mut self, selected: Option<usize>) -> Result<ShadeRule> {
        let index = selected.ok_or(ViewerError::IndexOutOfRange {
            index: None,
            len: self.shades.rules().len(),
        });
        let rule = index
            .and_then(|index| self.shades.remove_rule(index))
            .inspect_err(log_rejected)?;
        info!("Removed shade '{}'", rule.text());
        self.recompute();
        Ok(rule)
    }

    fn recompute(&mut self) {
        let highlights = self.shades.recompute(&self.buffer.lines);
        debug!(
            "Recomputed shades: {} of {} line(s) highlighted",
            highlights.len(),
            self.buffer.line_count()
        );
    }
}

fn log_rejected(error: &ViewerError) {
    warn!("Operation rejected: {error}");
}
