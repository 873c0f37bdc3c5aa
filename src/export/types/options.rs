//! Tunables for a single export session.

use encoding_rs::{Encoding, UTF_8};
use log::info;

use super::error::{ExportError, Result};

/// Default size of the intermediate buffer used for media copies.
pub const DEFAULT_MEDIA_BUFFER_SIZE: usize = 16 * 1024;

/// Smallest media buffer the writer will allocate.
pub const MIN_MEDIA_BUFFER_SIZE: usize = 4 * 1024;

/// Options accepted by [`SourceWriter::with_options`](crate::SourceWriter::with_options).
#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    pub media_buffer_size: usize,
    /// Encoding of the articles, abbreviations and debug artifacts.
    pub text_encoding: &'static Encoding,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            media_buffer_size: DEFAULT_MEDIA_BUFFER_SIZE,
            text_encoding: UTF_8,
        }
    }
}

impl WriterOptions {
    pub fn with_media_buffer_size(mut self, size: usize) -> Self {
        self.media_buffer_size = size;
        self
    }

    /// Selects the artifact encoding from a WHATWG label such as `"windows-1251"`.
    ///
    /// Encodings that cannot be produced by an encoder (UTF-16 variants) are
    /// replaced by their output encoding, which is UTF-8.
    ///
    /// # Errors
    /// Returns [`ExportError::UnknownEncoding`] if the label is not recognised.
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self> {
        let requested = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ExportError::UnknownEncoding(label.to_string()))?;
        let effective = requested.output_encoding();
        if effective != requested {
            info!(
                "Text encoding substituted: requested='{}', final='{}'",
                requested.name(),
                effective.name()
            );
        }
        self.text_encoding = effective;
        Ok(self)
    }

    /// The buffer size actually allocated, never below [`MIN_MEDIA_BUFFER_SIZE`].
    pub(crate) fn effective_media_buffer_size(&self) -> usize {
        self.media_buffer_size.max(MIN_MEDIA_BUFFER_SIZE)
    }
}
