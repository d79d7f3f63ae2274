//! Terminal-safe text.
//!
//! Record fields and server messages are untrusted. Written raw, an escape
//! sequence in a business name could move the cursor, recolor the screen or
//! retitle the terminal. [`SafeText`] is the only way view models carry text,
//! and constructing one strips everything the terminal would interpret.

use std::fmt;

/// Text with all escape sequences and control characters removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SafeText(String);

impl SafeText {
    /// Sanitize untrusted text.
    pub fn new(raw: &str) -> Self {
        Self(sanitize(raw))
    }

    /// Wrap text that is known to be safe (compile-time literals).
    pub fn literal(text: &'static str) -> Self {
        Self(sanitize(text))
    }

    /// Sanitized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the sanitized text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether nothing printable remained.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeText> for String {
    fn from(text: SafeText) -> Self {
        text.0
    }
}

const ESC: char = '\u{1b}';
const BEL: char = '\u{07}';
const CSI: char = '\u{9b}';
const OSC: char = '\u{9d}';
const ST: char = '\u{9c}';

/// Strip ANSI/VT escape sequences; every other control character becomes a
/// space, and runs of such spaces collapse to one.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut pending_space = false;

    while let Some(ch) = chars.next() {
        match ch {
            ESC => match chars.next() {
                Some('[') => skip_csi(&mut chars),
                Some(']') | Some('P') | Some('X') | Some('^') | Some('_') => {
                    skip_string(&mut chars)
                }
                // Two-byte sequence (or a dangling ESC at the end).
                Some(_) | None => {}
            },
            CSI => skip_csi(&mut chars),
            OSC => skip_string(&mut chars),
            c if c.is_control() => pending_space = true,
            c => {
                if pending_space {
                    if !out.is_empty() && !out.ends_with(' ') && c != ' ' {
                        out.push(' ');
                    }
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }

    out
}

/// Skip parameter and intermediate bytes up to and including the final byte.
fn skip_csi(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    for c in chars.by_ref() {
        if ('\u{40}'..='\u{7e}').contains(&c) {
            break;
        }
    }
}

/// Skip an OSC/DCS-style string up to BEL, ST, or ESC \.
fn skip_string(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while let Some(c) = chars.next() {
        match c {
            BEL | ST => break,
            ESC => {
                if chars.peek() == Some(&'\\') {
                    chars.next();
                }
                break;
            }
            _ => {}
        }
    }
}
