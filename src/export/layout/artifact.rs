//! Line-oriented text sinks for the export artifacts.

use std::fmt;
use std::io::{self, Write};

use encoding_rs::Encoding;
use log::trace;

use super::Artifact;

/// Separates the key from the value on every artifact line.
pub const ENTRY_SEPARATOR: &str = "  ";

/// Terminates every artifact line, regardless of platform.
pub const LINE_TERMINATOR: &str = "\r\n";

/// A buffered, append-only text artifact.
///
/// Lines are encoded with the session's text encoding before they reach the
/// sink. A failed write leaves whatever was already buffered in place; the
/// artifact is not rolled back.
pub struct TextArtifact {
    kind: Artifact,
    sink: Box<dyn Write>,
    encoding: &'static Encoding,
}

impl TextArtifact {
    pub(crate) fn new(kind: Artifact, sink: Box<dyn Write>, encoding: &'static Encoding) -> Self {
        Self {
            kind,
            sink,
            encoding,
        }
    }

    /// Appends `key  value\r\n`.
    pub fn write_entry(&mut self, key: &str, value: &str) -> io::Result<()> {
        let line = format!("{key}{ENTRY_SEPARATOR}{value}{LINE_TERMINATOR}");
        let (bytes, _, unmappable) = self.encoding.encode(&line);
        if unmappable {
            trace!(
                "{} entry '{}' has characters outside {}; written as numeric references",
                self.kind,
                key,
                self.encoding.name()
            );
        }
        self.sink.write_all(&bytes)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Flushes outstanding bytes and releases the underlying handle.
    pub fn close(mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn kind(&self) -> Artifact {
        self.kind
    }
}

impl fmt::Debug for TextArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextArtifact")
            .field("kind", &self.kind)
            .field("encoding", &self.encoding.name())
            .finish_non_exhaustive()
    }
}
