//! The contract shared by every dictionary export format.

use std::sync::Arc;

use super::error::Result;
use super::models::{
    AbbreviationRecord, ArticleRecord, DebugResourceRecord, FormatDescriptor, FormatMetadata,
    LanguageDirections, MediaRecord,
};
use crate::export::progress::{ObserverId, ProgressObserver};

/// A writer that persists a stream of dictionary records into one output format.
///
/// # Usage contract
/// A session runs `initialize` → metadata and record saves in any order →
/// `flush` → `close`. Metadata is expected before the first record so the
/// progress total is meaningful, but late metadata never corrupts output.
/// Observers must not call back into the writer.
pub trait DictionaryWriter {
    /// Prepares the output location and opens every artifact of the format.
    fn initialize(&mut self) -> Result<()>;

    /// Stores the base metadata and seeds the progress total from its declared counts.
    ///
    /// Replaces any previously stored value and returns the stored handle.
    fn save_format_metadata(&mut self, metadata: Arc<FormatMetadata>)
    -> Result<Arc<FormatMetadata>>;

    fn format_metadata(&self) -> Option<Arc<FormatMetadata>>;

    fn save_language_directions(
        &mut self,
        directions: Arc<LanguageDirections>,
    ) -> Result<Arc<LanguageDirections>>;

    fn language_directions(&self) -> Option<Arc<LanguageDirections>>;

    fn save_article(&mut self, article: ArticleRecord) -> Result<()>;

    fn save_abbreviation(&mut self, abbreviation: AbbreviationRecord) -> Result<()>;

    /// Persists a diagnostic resource. Failures are logged, never returned.
    fn save_debug_resource(&mut self, resource: DebugResourceRecord);

    fn save_media_resource(&mut self, media: MediaRecord<'_>) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;

    fn add_observer(&mut self, observer: Box<dyn ProgressObserver>) -> ObserverId;

    fn format_descriptor(&self) -> &'static FormatDescriptor;
}
