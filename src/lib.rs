//! # dict-export
//!
//! Writers that export a dictionary's articles, abbreviations, media
//! resources and metadata into on-disk formats.
//!
//! The basic source format produced by [`SourceWriter`] is a directory of
//! flat `KEY  VALUE\r\n` text files plus a `media/` folder, intended for
//! inspection and downstream tooling rather than re-import.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use dict_export::{ArticleRecord, DictionaryWriter, FormatMetadata, SourceWriter};
//! # fn main() -> dict_export::Result<()> {
//! let mut writer = SourceWriter::new("out/basic-source")?;
//! writer.initialize()?;
//! writer.save_format_metadata(Arc::new(FormatMetadata {
//!     articles_number: 1,
//!     ..FormatMetadata::default()
//! }))?;
//! writer.save_article(ArticleRecord::new("cat", "a small feline"))?;
//! writer.flush()?;
//! writer.close()?;
//! # Ok(())
//! # }
//! ```
pub mod export;

// Re-export the main types for convenience
pub use export::{
    AbbreviationRecord, ArticleRecord, BASIC_SOURCE_FORMAT, DebugResourceRecord, DictionaryWriter,
    ExportError, FormatDescriptor, FormatMetadata, LanguageDirection, LanguageDirections,
    MediaRecord, ObserverId, ProgressObserver, ProgressState, Result, SaveCounters, SourceWriter,
    WriterOptions,
    report::{Locale, build_info_table},
};
