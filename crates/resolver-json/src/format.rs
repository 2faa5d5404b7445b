//! Single-pass JSON fragment indentation.
//!
//! The formatter walks the input once, character by character, and keeps only
//! a small amount of scan state:
//!
//! - whether it is inside a double- or single-quoted string,
//! - whether the last structural token was a `:` (value position),
//! - the previous character, for one-character escape detection,
//! - a stack of open objects and arrays.
//!
//! Objects are broken over lines and indented with one tab per nesting level.
//! Array contents stay compact on one line. No document tree is built and the
//! input is not validated beyond bracket underflow.
//!
//! Escape detection only looks one character back, so a string ending in an
//! escaped backslash (`"\\"`) is treated as still open. Output for such input
//! is best effort.

use tracing::debug;

use crate::error::FormatError;

/// Indentation unit, repeated once per nesting level.
const INDENT: char = '\t';

/// Line separator.
const NEWLINE: char = '\n';

/// Separator emitted in place of a structural `:`.
const KEY_VALUE_SEPARATOR: &str = " : ";

/// Kind of an open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsonContext {
    Object,
    Array,
}

/// Scan state for one formatting call.
#[derive(Debug)]
struct Scanner {
    output: String,
    context: Vec<JsonContext>,
    in_double_string: bool,
    in_single_string: bool,
    in_value_position: bool,
    prev_char: char,
}

impl Scanner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            context: Vec::new(),
            in_double_string: false,
            in_single_string: false,
            in_value_position: false,
            prev_char: '\0',
        }
    }

    fn in_string(&self) -> bool {
        self.in_double_string || self.in_single_string
    }

    fn in_array(&self) -> bool {
        self.context.last() == Some(&JsonContext::Array)
    }

    fn push_indent(&mut self) {
        for _ in 0..self.context.len() {
            self.output.push(INDENT);
        }
    }

    fn pop_context(&mut self, position: usize) -> Result<(), FormatError> {
        if self.context.pop().is_none() {
            debug!(position, "closing bracket with no open container");
            return Err(FormatError::StructuralUnderflow { position });
        }
        Ok(())
    }

    fn feed(&mut self, position: usize, c: char) -> Result<(), FormatError> {
        match c {
            '{' if !self.in_string() => {
                let in_object = self.context.last() == Some(&JsonContext::Object);
                if self.in_value_position || in_object {
                    self.output.push(NEWLINE);
                    self.push_indent();
                }
                self.output.push(c);
                self.context.push(JsonContext::Object);
                self.output.push(NEWLINE);
                self.push_indent();
            }
            '}' if !self.in_string() => {
                self.output.push(NEWLINE);
                self.pop_context(position)?;
                self.push_indent();
                self.output.push(c);
            }
            '[' if !self.in_string() => {
                self.output.push(c);
                self.context.push(JsonContext::Array);
            }
            ']' if !self.in_string() => {
                self.output.push(c);
                self.pop_context(position)?;
            }
            ',' => {
                self.output.push(c);
                if !self.in_string() && !self.in_array() {
                    self.push_indent();
                    self.output.push(NEWLINE);
                    self.push_indent();
                    self.in_value_position = false;
                }
            }
            ':' if !self.in_string() => {
                self.in_value_position = true;
                self.output.push_str(KEY_VALUE_SEPARATOR);
            }
            '\'' => {
                if !self.in_double_string && self.prev_char != '\\' {
                    self.in_single_string = !self.in_single_string;
                }
                self.output.push(c);
            }
            '"' => {
                if !self.in_single_string && self.prev_char != '\\' {
                    self.in_double_string = !self.in_double_string;
                }
                self.output.push(c);
            }
            _ => self.output.push(c),
        }

        self.prev_char = c;
        Ok(())
    }
}

/// Format a JSON fragment with newlines and tab indentation.
///
/// Every call starts from a fresh scan state, so the function is reentrant and
/// safe to call from several threads at once.
///
/// # Errors
///
/// Returns [`FormatError::StructuralUnderflow`] when a `}` or `]` outside a
/// string has no matching open bracket.
///
/// # Examples
///
/// ```
/// use resolver_json::format_fragment;
///
/// let formatted = format_fragment(r#"{"a":1,"b":[1,2,3]}"#).unwrap();
/// assert_eq!(formatted, "{\n\t\"a\" : 1,\t\n\t\"b\" : [1,2,3]\n}");
/// ```
pub fn format_fragment(input: &str) -> Result<String, FormatError> {
    let mut scanner = Scanner::with_capacity(input.len() + input.len() / 2);

    for (position, c) in input.char_indices() {
        scanner.feed(position, c)?;
    }

    Ok(scanner.output)
}

/// Format a JSON fragment that may be absent.
///
/// # Errors
///
/// Returns [`FormatError::NullInput`] for `None`, otherwise the errors of
/// [`format_fragment`].
pub fn format_optional_fragment(input: Option<&str>) -> Result<String, FormatError> {
    format_fragment(input.ok_or(FormatError::NullInput)?)
}
