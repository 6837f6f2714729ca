//! Human readable rendering of token parts for verbose output.
//!
//! JSON values are pretty printed with a two space indent, and nested
//! sections are indented as a block.

use std::fmt;

pub use fmt::Result;
pub use fmt::Write;
use serde::Serialize;

/// A [`fmt::Write`] writer which prefixes every non-empty line with the
/// indent for its nesting level.
pub struct IndentWriter<'i, W> {
    writer: W,
    indent: &'i str,
    level: usize,
    at_line_start: bool,
}

impl<W> fmt::Debug for IndentWriter<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result {
        f.debug_struct("IndentWriter")
            .field("indent", &self.indent)
            .field("level", &self.level)
            .field("at_line_start", &self.at_line_start)
            .finish_non_exhaustive()
    }
}

impl<'i, W> IndentWriter<'i, W> {
    /// Wrap a writer. Output starts at level zero (no indent).
    pub fn new(indent: &'i str, writer: W) -> Self {
        IndentWriter {
            writer,
            indent,
            level: 0,
            at_line_start: true,
        }
    }
}

impl<'i, W: fmt::Write> IndentWriter<'i, W> {
    /// A writer one level deeper. Dropping it returns to this level.
    pub fn indent(&mut self) -> IndentWriter<'i, &mut IndentWriter<'i, W>> {
        let indent = self.indent;
        let level = self.level + 1;
        IndentWriter {
            writer: self,
            indent,
            level,
            at_line_start: true,
        }
    }

    /// Write a value as pretty printed JSON, using this writer's indent string.
    pub fn write_json<T: Serialize>(&mut self, data: &T) -> fmt::Result {
        let mut buf = Vec::with_capacity(128);
        let pretty = serde_json::ser::PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut ser = serde_json::ser::Serializer::with_formatter(&mut buf, pretty);
        data.serialize(&mut ser).map_err(|_| fmt::Error)?;

        let text = String::from_utf8(buf).map_err(|_| fmt::Error)?;
        self.write_str(&text)
    }

    fn write_indent(&mut self) -> fmt::Result {
        if self.level > 0 {
            self.writer.write_str(self.indent)?;
        }
        Ok(())
    }
}

impl<W: fmt::Write> fmt::Write for IndentWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.at_line_start && line != "\n" {
                self.write_indent()?;
            }
            self.writer.write_str(line)?;
            self.at_line_start = line.ends_with('\n');
        }
        Ok(())
    }
}

/// Verbose, human readable formatting.
pub trait JWTFormat {
    /// Write this value at the current indentation.
    fn fmt<W: fmt::Write>(&self, f: &mut IndentWriter<'_, W>) -> fmt::Result;

    /// A proxy which renders this value through [`std::fmt::Display`].
    fn formatted(&self) -> JWTFormatted<'_, Self> {
        JWTFormatted(self)
    }
}

/// Formatting proxy to cause [`fmt::Display`] to print in the [`JWTFormat`] style.
pub struct JWTFormatted<'a, T: JWTFormat + ?Sized>(&'a T);

impl<T> fmt::Display for JWTFormatted<'_, T>
where
    T: JWTFormat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = IndentWriter::new("  ", f);
        <T as JWTFormat>::fmt(self.0, &mut formatter)
    }
}
