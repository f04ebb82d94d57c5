// shades module - ordered highlight rules and the line -> rule matches derived from them
use super::error::{Argument, Result, ViewerError};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Background color of a shade, written as `#RRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShadeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ShadeColor {
    pub const YELLOW: Self = Self::from_rgb(0xFF, 0xFF, 0x00);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for ShadeColor {
    fn default() -> Self {
        Self::YELLOW
    }
}

impl fmt::Display for ShadeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color '{0}', expected #RRGGBB")]
pub struct ParseColorError(String);

impl FromStr for ShadeColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadeRule {
    text: String,
    pub color: ShadeColor,
}

impl ShadeRule {
    pub fn new(text: impl Into<String>, color: ShadeColor) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(ViewerError::InvalidArgument(Argument::ShadeText));
        }
        Ok(Self { text, color })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.text.as_str())
    }

    // list entry as shown in the shade manager, positions start at 1
    pub fn label(&self, index: usize) -> String {
        format!("{}. '{}' - Color: {}", index + 1, self.text, self.color)
    }
}

/// Every line that matched at least one rule, with the matching rule indices in list order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    by_line: BTreeMap<usize, Vec<usize>>,
}

impl Highlights {
    /// Number of highlighted lines
    pub fn len(&self) -> usize {
        self.by_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    pub fn rules_for(&self, line: usize) -> &[usize] {
        self.by_line.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The rule painted on `line`: later rules paint over earlier ones
    pub fn visible_rule(&self, line: usize) -> Option<usize> {
        self.rules_for(line).last().copied()
    }

    pub fn lines_matching(&self, rule: usize) -> impl Iterator<Item = usize> + '_ {
        self.by_line
            .iter()
            .filter(move |(_, rules)| rules.contains(&rule))
            .map(|(line, _)| *line)
    }
}

/// Rule painted on a single line of text, matching `Highlights::visible_rule`
pub fn visible_rule<'r>(rules: &'r [ShadeRule], line: &str) -> Option<&'r ShadeRule> {
    rules.iter().rev().find(|rule| rule.matches(line))
}

#[derive(Clone, Debug, Default)]
pub struct ShadeEngine {
    rules: Vec<ShadeRule>,
    highlights: Highlights,
}

impl ShadeEngine {
    pub fn rules(&self) -> &[ShadeRule] {
        &self.rules
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    pub fn add_rule(&mut self, text: impl Into<String>, color: ShadeColor) -> Result<usize> {
        self.rules.push(ShadeRule::new(text, color)?);
        Ok(self.rules.len() - 1)
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<ShadeRule> {
        if index >= self.rules.len() {
            return Err(ViewerError::IndexOutOfRange {
                index: Some(index),
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    /// Throws away the previous matches and rebuilds them from `lines`
    pub fn recompute<S: AsRef<str>>(&mut self, lines: &[S]) -> &Highlights {
        self.highlights = Highlights::default();

        for (rule_idx, rule) in self.rules.iter().enumerate() {
            for (line_idx, line) in lines.iter().enumerate() {
                if rule.matches(line.as_ref()) {
                    self.highlights
                        .by_line
                        .entry(line_idx)
                        .or_default()
                        .push(rule_idx);
                }
            }
        }

        &self.highlights
    }
}
