//! In-memory text builder used to assemble failure messages.

use std::fmt::{self, Display, Write};

use crate::stringify::Stringify;

/// Append-only text buffer.
///
/// A stream lives only for the duration of one message: checks build the
/// text, take it with [`MessageStream::into_text`] and hand it to a sink.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageStream {
    buffer: String,
}

impl MessageStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the `Display` rendering of `value`.
    pub fn append(&mut self, value: impl Display) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{value}");
        self
    }

    /// Appends the [`Stringify`] rendering of `value`.
    pub fn append_rendered<T: Stringify + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.buffer.push_str(&value.stringify());
        self
    }

    /// Appends a line break.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Returns the text accumulated so far.
    pub fn get_text(&self) -> &str {
        &self.buffer
    }

    /// Consumes the stream and returns the final text.
    pub fn into_text(self) -> String {
        self.buffer
    }

    /// Returns true when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Write for MessageStream {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Display for MessageStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
