//! Output format templates and style flags.
//!
//! A format template is a string with positional placeholders: `$1`..`$6` for
//! the six hex digits (channel order R,R,G,G,B,B), `$f` for the styling codes,
//! and `$c` for the literal character. Each placeholder is honored exactly
//! once, left to right; a repeated placeholder stays literal, matching the
//! single-substitution behavior of the chat clients this output targets.

use serde::{Deserialize, Serialize};

/// One segment of a parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text to include as-is.
    Literal(String),
    /// Hex digit slot, 0-based index into the 6-digit color string.
    HexDigit(usize),
    /// Styling codes slot (`$f`).
    Style,
    /// Character slot (`$c`).
    Char,
}

/// Errors that can occur during template parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Format template cannot be empty")]
    Empty,
}

/// The four in-band style toggles plus the client's format character.
///
/// Codes concatenate in a fixed order: bold `l`, italic `o`, underline `n`,
/// strikethrough `m`, each prefixed with the format character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleFlags {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
}

impl StyleFlags {
    /// Build the in-band styling codes for these flags.
    pub fn codes(&self, format_char: &str) -> String {
        let mut out = String::new();
        for (on, letter) in [
            (self.bold, 'l'),
            (self.italic, 'o'),
            (self.underline, 'n'),
            (self.strikethrough, 'm'),
        ] {
            if on {
                out.push_str(format_char);
                out.push(letter);
            }
        }
        out
    }

    /// Whether any flag is set.
    pub fn any(&self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough
    }
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a format string into segments.
    ///
    /// Unknown `$x` sequences and repeated placeholders are kept as literal
    /// text; only emptiness is an error.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut seen = [false; 8]; // $1..$6, $f, $c
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                literal.push(c);
                continue;
            }

            let slot = match chars.peek().copied() {
                Some(d @ '1'..='6') => {
                    let index = d as usize - '1' as usize;
                    Some((index, Segment::HexDigit(index)))
                }
                Some('f') => Some((6, Segment::Style)),
                Some('c') => Some((7, Segment::Char)),
                _ => None,
            };

            match slot {
                Some((index, segment)) if !seen[index] => {
                    seen[index] = true;
                    chars.next();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                // Repeated placeholder or bare `$`: leave it literal.
                _ => literal.push('$'),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Whether this template carries a styling slot.
    pub fn has_style_slot(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Style))
    }

    /// Render one output fragment for a single visible character.
    ///
    /// `hex` is the 6-digit color string for this character. Styling codes
    /// are only emitted where the template has a `$f` slot.
    pub fn render(&self, hex: &str, flags: &StyleFlags, format_char: &str, ch: char) -> String {
        let digits: Vec<char> = hex.chars().collect();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::HexDigit(i) => {
                    if let Some(&d) = digits.get(*i) {
                        out.push(d);
                    }
                }
                Segment::Style => out.push_str(&flags.codes(format_char)),
                Segment::Char => out.push(ch),
            }
        }
        out
    }
}
