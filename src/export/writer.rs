use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::sync::Arc;

use encoding_rs::UTF_8;
use log::{debug, error, info, trace, warn};

use super::layout::{Artifact, OutputLayout, TextArtifact};
use super::progress::{ObserverId, ProgressObserver, ProgressState, ProgressTracker};
use super::types::error::{ExportError, Result};
use super::types::formats::DictionaryWriter;
use super::types::models::*;
use super::types::options::WriterOptions;

/// Identity of the basic source format: a directory, so no file extensions.
pub const BASIC_SOURCE_FORMAT: FormatDescriptor = FormatDescriptor {
    name: "BASIC_SOURCE",
    primary_extension: "",
    extensions: &[],
};

/// The three text artifacts of an open session.
#[derive(Debug)]
struct Artifacts {
    articles: TextArtifact,
    abbreviations: TextArtifact,
    debug: TextArtifact,
}

impl Artifacts {
    fn get_mut(&mut self, artifact: Artifact) -> &mut TextArtifact {
        match artifact {
            Artifact::Articles => &mut self.articles,
            Artifact::Abbreviations => &mut self.abbreviations,
            Artifact::Debug => &mut self.debug,
        }
    }

    /// Flushes every artifact even if an earlier one fails; the first error wins.
    fn flush_all(&mut self) -> io::Result<()> {
        let results = [
            self.articles.flush(),
            self.abbreviations.flush(),
            self.debug.flush(),
        ];
        first_error(results)
    }

    /// Closes every artifact even if an earlier one fails; the first error wins.
    fn close_all(self) -> io::Result<()> {
        let results = [
            self.articles.close(),
            self.abbreviations.close(),
            self.debug.close(),
        ];
        first_error(results)
    }
}

fn first_error(results: [io::Result<()>; 3]) -> io::Result<()> {
    results.into_iter().collect::<io::Result<Vec<()>>>().map(|_| ())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Uninitialized,
    Open,
    Closed,
}

/// Writer for the basic source format.
///
/// Articles, abbreviations and debug resources become lines in flat text
/// artifacts; media resources are copied byte-for-byte into the media
/// directory. See [`layout`](super::layout) for the on-disk shape.
///
/// The writer is not transactional: a failed session leaves partial output
/// behind and is expected to be rerun against a clean target.
#[derive(Debug)]
pub struct SourceWriter {
    layout: OutputLayout,
    options: WriterOptions,
    state: SessionState,
    artifacts: Option<Artifacts>,

    metadata: Option<Arc<FormatMetadata>>,
    directions: Option<Arc<LanguageDirections>>,

    progress: ProgressTracker,
    counters: SaveCounters,
    overrun_reported: bool,

    media_buffer: Vec<u8>,
}

impl SourceWriter {
    /// Creates a writer for `target_dir` with default options.
    ///
    /// Nothing is written until [`DictionaryWriter::initialize`] is called.
    ///
    /// # Errors
    /// Returns [`ExportError::InvalidTarget`] if `target_dir` exists and is not a directory.
    pub fn new(target_dir: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(target_dir, WriterOptions::default())
    }

    /// Creates a writer for `target_dir` with explicit options.
    ///
    /// # Errors
    /// Returns [`ExportError::InvalidTarget`] if `target_dir` exists and is not a directory.
    pub fn with_options(target_dir: impl AsRef<Path>, options: WriterOptions) -> Result<Self> {
        let layout = OutputLayout::new(target_dir)?;
        Ok(Self {
            layout,
            options,
            state: SessionState::Uninitialized,
            artifacts: None,
            metadata: None,
            directions: None,
            progress: ProgressTracker::new(),
            counters: SaveCounters::default(),
            overrun_reported: false,
            media_buffer: Vec::new(),
        })
    }

    pub fn progress(&self) -> ProgressState {
        self.progress.state()
    }

    pub fn counters(&self) -> SaveCounters {
        self.counters
    }

    pub fn target_directory(&self) -> &Path {
        self.layout.target_dir()
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.progress.remove_observer(id)
    }

    fn reset_session(&mut self) {
        self.metadata = None;
        self.directions = None;
        self.progress.reset();
        self.counters = SaveCounters::default();
        self.overrun_reported = false;
    }

    fn artifact_mut(&mut self, artifact: Artifact) -> Result<&mut TextArtifact> {
        match self.state {
            SessionState::Uninitialized => {
                Err(ExportError::InvalidState("writer has not been initialized"))
            }
            SessionState::Closed => Err(ExportError::InvalidState("writer is closed")),
            SessionState::Open => self
                .artifacts
                .as_mut()
                .map(|artifacts| artifacts.get_mut(artifact))
                .ok_or(ExportError::InvalidState("writer has no open artifacts")),
        }
    }

    fn write_entry(&mut self, artifact: Artifact, key: &str, value: &str) -> Result<()> {
        self.artifact_mut(artifact)?.write_entry(key, value)?;
        Ok(())
    }

    /// Counts one persisted unit and notifies observers.
    fn update_progress(&mut self) {
        self.progress.record_unit();
        let state = self.progress.state();
        if state.total > 0 && state.current > state.total && !self.overrun_reported {
            warn!(
                "More records saved ({}) than declared in the metadata ({})",
                state.current, state.total
            );
            self.overrun_reported = true;
        }
    }

    fn write_debug_entry(&mut self, resource: &DebugResourceRecord) -> Result<()> {
        let (text, _) = UTF_8.decode_without_bom_handling(&resource.bytes);
        self.write_entry(Artifact::Debug, &resource.key, &text)
    }

    /// Streams `source` into `destination` through the session's media buffer.
    fn copy_media(&mut self, source: &mut dyn Read, destination: &mut File) -> io::Result<u64> {
        if self.media_buffer.is_empty() {
            self.media_buffer = vec![0u8; self.options.effective_media_buffer_size()];
        }
        let mut copied = 0u64;
        loop {
            let len = match source.read(&mut self.media_buffer) {
                Ok(0) => break,
                Ok(len) => len,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            destination.write_all(&self.media_buffer[..len])?;
            copied += len as u64;
        }
        destination.flush()?;
        Ok(copied)
    }
}

impl DictionaryWriter for SourceWriter {
    /// Creates the layout and opens all three artifacts, even ones the session may never use.
    ///
    /// Re-initializing an open or closed writer closes any current artifacts
    /// and starts a fresh session: empty artifacts, zeroed counters and
    /// progress, no stored metadata or language directions. Observers stay
    /// registered.
    fn initialize(&mut self) -> Result<()> {
        if let Some(previous) = self.artifacts.take() {
            debug!("Re-initializing an open writer; closing current artifacts");
            previous.close_all()?;
        }
        if self.state != SessionState::Uninitialized {
            self.reset_session();
        }
        self.layout.initialize()?;

        let encoding = self.options.text_encoding;
        let artifacts = Artifacts {
            articles: self.layout.open_artifact(Artifact::Articles, encoding)?,
            abbreviations: self.layout.open_artifact(Artifact::Abbreviations, encoding)?,
            debug: self.layout.open_artifact(Artifact::Debug, encoding)?,
        };
        self.artifacts = Some(artifacts);
        self.state = SessionState::Open;
        info!(
            "Basic source export started in {} ({})",
            self.layout.target_dir().display(),
            encoding.name()
        );
        Ok(())
    }

    fn save_format_metadata(
        &mut self,
        metadata: Arc<FormatMetadata>,
    ) -> Result<Arc<FormatMetadata>> {
        let total = metadata.expected_units();
        self.progress.set_total(total);
        info!(
            "Format metadata stored: {} articles, {} abbreviations, {} media resources",
            metadata.articles_number, metadata.abbreviations_number, metadata.media_resources_number
        );
        self.metadata = Some(Arc::clone(&metadata));
        Ok(metadata)
    }

    fn format_metadata(&self) -> Option<Arc<FormatMetadata>> {
        self.metadata.clone()
    }

    fn save_language_directions(
        &mut self,
        directions: Arc<LanguageDirections>,
    ) -> Result<Arc<LanguageDirections>> {
        debug!("Language directions stored: {}", directions.directions.len());
        self.directions = Some(Arc::clone(&directions));
        Ok(directions)
    }

    fn language_directions(&self) -> Option<Arc<LanguageDirections>> {
        self.directions.clone()
    }

    fn save_article(&mut self, article: ArticleRecord) -> Result<()> {
        self.write_entry(Artifact::Articles, &article.word, &article.article)?;
        trace!("Article saved: {}", article.word);
        self.counters.articles += 1;
        self.update_progress();
        Ok(())
    }

    fn save_abbreviation(&mut self, abbreviation: AbbreviationRecord) -> Result<()> {
        self.write_entry(
            Artifact::Abbreviations,
            &abbreviation.abbreviation,
            &abbreviation.definition,
        )?;
        trace!("Abbreviation saved: {}", abbreviation.abbreviation);
        self.counters.abbreviations += 1;
        self.update_progress();
        Ok(())
    }

    fn save_debug_resource(&mut self, resource: DebugResourceRecord) {
        if let Err(e) = self.write_debug_entry(&resource) {
            error!("Failed to save debug resource '{}': {}", resource.key, e);
        }
    }

    /// Copies the media stream into `media/<key>`.
    ///
    /// Both the input stream and the destination file are dropped before this
    /// returns, on success and on failure. A failed copy may leave a partial
    /// file behind.
    fn save_media_resource(&mut self, media: MediaRecord<'_>) -> Result<()> {
        if self.state != SessionState::Open {
            return Err(ExportError::InvalidState("writer is not open"));
        }
        let MediaRecord { key, mut stream } = media;
        let path = self.layout.media_file_path(&key);
        let mut destination = File::create(&path)?;
        let copied = self.copy_media(stream.as_mut(), &mut destination)?;
        debug!("Media resource '{}' saved: {} bytes", key, copied);
        self.counters.media_resources += 1;
        self.update_progress();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let artifacts = self
            .artifacts
            .as_mut()
            .ok_or(ExportError::InvalidState("writer has no open artifacts"))?;
        artifacts.flush_all()?;
        Ok(())
    }

    /// Closes every artifact, reporting the first failure.
    ///
    /// The writer counts as closed afterwards even when an error is returned.
    fn close(&mut self) -> Result<()> {
        let artifacts = self
            .artifacts
            .take()
            .ok_or(ExportError::InvalidState("writer has no open artifacts"))?;
        self.state = SessionState::Closed;
        let result = artifacts.close_all();
        let progress = self.progress.state();
        info!(
            "Basic source export closed: {} articles, {} abbreviations, {} media resources ({}/{} units)",
            self.counters.articles,
            self.counters.abbreviations,
            self.counters.media_resources,
            progress.current,
            progress.total
        );
        result?;
        Ok(())
    }

    fn add_observer(&mut self, observer: Box<dyn ProgressObserver>) -> ObserverId {
        self.progress.add_observer(observer)
    }

    fn format_descriptor(&self) -> &'static FormatDescriptor {
        &BASIC_SOURCE_FORMAT
    }
}
