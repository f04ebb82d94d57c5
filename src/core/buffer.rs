// buffer module - the loaded log as a vector of lines plus the cleaning filters
use super::error::{Argument, Result, ViewerError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Buffer {
    pub lines: Vec<String>,
}

impl Buffer {
    // handle loading a file
    // "\n" and "\r\n" both end a line, a trailing terminator adds no empty line
    pub fn from_string(content: &str) -> Self {
        Self {
            lines: content.lines().map(|line| line.to_string()).collect(),
        }
    }

    /// Replaces every line with `content`, used both for loading and for edits in the view
    pub fn load(&mut self, content: &str) {
        *self = Self::from_string(content);
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the whole buffer is whitespace
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    /// Drops every whitespace-only line and returns how many went away
    pub fn remove_blank_lines(&mut self) -> Result<usize> {
        if self.is_blank() {
            return Err(ViewerError::NoContent);
        }

        let before = self.lines.len();
        self.lines.retain(|line| !line.trim().is_empty());
        Ok(before - self.lines.len())
    }

    /// Drops every line containing `needle` (case-sensitive) and returns how many went away
    pub fn remove_lines_containing(&mut self, needle: &str) -> Result<usize> {
        if self.is_blank() {
            return Err(ViewerError::NoContent);
        }
        if needle.is_empty() {
            return Err(ViewerError::InvalidArgument(Argument::SearchText));
        }

        let before = self.lines.len();
        self.lines.retain(|line| !line.contains(needle));
        Ok(before - self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // small alphabet so blank lines and needle hits both show up often
    fn arb_lines() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec![
                "", " ", "\t", "  \t ", "ERROR: disk full", "INFO: ok", "x1", "y2", "disk x",
            ])
            .prop_map(str::to_string),
            0..24,
        )
    }

    fn arb_needle() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["x", "ERROR", "disk", " ", "ok", "absent"])
    }

    proptest! {
        #[test]
        fn prop_remove_lines_containing_keeps_the_rest(lines in arb_lines(), needle in arb_needle()) {
            let mut buf = Buffer { lines: lines.clone() };
            let result = buf.remove_lines_containing(needle);

            if lines.iter().all(|line| line.trim().is_empty()) {
                prop_assert!(matches!(result, Err(ViewerError::NoContent)));
                prop_assert_eq!(&buf.lines, &lines);
            } else {
                let expected: Vec<String> = lines
                    .iter()
                    .filter(|line| !line.contains(needle))
                    .cloned()
                    .collect();
                let removed = result.unwrap();
                prop_assert_eq!(&buf.lines, &expected);
                prop_assert_eq!(removed, lines.len() - buf.line_count());
            }
        }

        #[test]
        fn prop_remove_blank_lines_is_idempotent(lines in arb_lines()) {
            let mut buf = Buffer { lines: lines.clone() };
            let result = buf.remove_blank_lines();

            if lines.iter().all(|line| line.trim().is_empty()) {
                prop_assert!(matches!(result, Err(ViewerError::NoContent)));
                prop_assert_eq!(&buf.lines, &lines);
            } else {
                let expected: Vec<String> = lines
                    .iter()
                    .filter(|line| !line.trim().is_empty())
                    .cloned()
                    .collect();
                prop_assert_eq!(result.unwrap(), lines.len() - expected.len());
                prop_assert_eq!(&buf.lines, &expected);

                prop_assert_eq!(buf.remove_blank_lines().unwrap(), 0);
                prop_assert_eq!(&buf.lines, &expected);
            }
        }
    }

    fn buffer(lines: &[&str]) -> Buffer {
        Buffer {
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_string_normalizes_line_endings() {
        let buf = Buffer::from_string("one\r\ntwo\nthree\n");
        assert_eq!(buf.lines, vec!["one", "two", "three"]);
        assert_eq!(buf.text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_empty_content_loads_empty_buffer() {
        let buf = Buffer::from_string("");
        assert_eq!(buf.line_count(), 0);
        assert!(buf.is_blank());
    }

    #[test]
    fn test_load_discards_previous_lines() {
        let mut buf = buffer(&["old", "lines"]);
        buf.load("new");
        assert_eq!(buf.lines, vec!["new"]);
    }

    #[test]
    fn test_remove_blank_lines() {
        let mut buf = buffer(&["a", "", "  ", "b"]);
        assert_eq!(buf.remove_blank_lines().unwrap(), 2);
        assert_eq!(buf.lines, vec!["a", "b"]);
    }

    #[test]
    fn test_remove_blank_lines_is_idempotent() {
        let mut buf = buffer(&["\t", "x", "", " y ", "   "]);
        buf.remove_blank_lines().unwrap();
        let once = buf.clone();
        assert_eq!(buf.remove_blank_lines().unwrap(), 0);
        assert_eq!(buf, once);
        assert_eq!(buf.lines, vec!["x", " y "]);
    }

    #[test]
    fn test_remove_blank_lines_on_blank_buffer_fails_without_mutation() {
        let mut buf = buffer(&["", "   ", "\t"]);
        assert!(matches!(buf.remove_blank_lines(), Err(ViewerError::NoContent)));
        assert_eq!(buf.line_count(), 3);
    }

    #[test]
    fn test_remove_lines_containing() {
        let mut buf = buffer(&["x1", "y2", "x3"]);
        assert_eq!(buf.remove_lines_containing("x").unwrap(), 2);
        assert_eq!(buf.lines, vec!["y2"]);
    }

    #[test]
    fn test_remove_lines_containing_is_case_sensitive() {
        let mut buf = buffer(&["ERROR a", "error b", "Error c"]);
        assert_eq!(buf.remove_lines_containing("ERROR").unwrap(), 1);
        assert_eq!(buf.lines, vec!["error b", "Error c"]);
    }

    #[test]
    fn test_remove_lines_containing_keeps_order_and_counts() {
        let original = ["INFO start", "DEBUG tick", "INFO tick", "WARN low", "DEBUG tock"];
        let mut buf = buffer(&original);
        let removed = buf.remove_lines_containing("DEBUG").unwrap();

        let expected: Vec<&str> = original
            .iter()
            .copied()
            .filter(|line| !line.contains("DEBUG"))
            .collect();
        assert_eq!(buf.lines, expected);
        assert_eq!(removed, original.len() - buf.line_count());
    }

    #[test]
    fn test_remove_lines_containing_treats_needle_literally() {
        let mut buf = buffer(&["a.b", "axb", "[x]"]);
        assert_eq!(buf.remove_lines_containing(".").unwrap(), 1);
        assert_eq!(buf.remove_lines_containing("[x]").unwrap(), 1);
        assert_eq!(buf.lines, vec!["axb"]);
    }

    #[test]
    fn test_remove_lines_containing_rejects_empty_needle() {
        let mut buf = buffer(&["a", "b"]);
        assert!(matches!(
            buf.remove_lines_containing(""),
            Err(ViewerError::InvalidArgument(Argument::SearchText))
        ));
        assert_eq!(buf.line_count(), 2);
    }

    #[test]
    fn test_remove_lines_containing_on_blank_buffer() {
        let mut buf = Buffer::default();
        assert!(matches!(
            buf.remove_lines_containing("x"),
            Err(ViewerError::NoContent)
        ));
    }
}
