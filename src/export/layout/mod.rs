//! On-disk layout of a basic source export.
//!
//! ```text
//! <target>/
//! ├── articles.txt        ← one `WORD  ARTICLE\r\n` line per article
//! ├── abbreviations.txt   ← one `ABBREV  DEFINITION\r\n` line per abbreviation
//! ├── debug.txt           ← one `KEY  TEXT\r\n` line per debug resource
//! └── media/              ← one file per media resource, named by its key
//! ```
//!
//! Nothing else is written: no header, index or trailer.

mod artifact;

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::{debug, info};

use crate::export::types::error::{ExportError, Result};
pub use artifact::TextArtifact;

/// Name of the subdirectory holding media resources.
pub const MEDIA_DIRECTORY: &str = "media";

/// The fixed set of text artifacts in a basic source export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Articles,
    Abbreviations,
    Debug,
}

impl Artifact {
    pub const ALL: [Artifact; 3] = [Artifact::Articles, Artifact::Abbreviations, Artifact::Debug];

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Articles => "articles.txt",
            Artifact::Abbreviations => "abbreviations.txt",
            Artifact::Debug => "debug.txt",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Articles => write!(f, "articles"),
            Artifact::Abbreviations => write!(f, "abbreviations"),
            Artifact::Debug => write!(f, "debug"),
        }
    }
}

/// Owns the target directory of one export session.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    target_dir: PathBuf,
    media_dir: PathBuf,
}

impl OutputLayout {
    /// Binds a layout to `target_dir` without touching the filesystem.
    ///
    /// # Errors
    /// Returns [`ExportError::InvalidTarget`] if the path exists and is not a directory.
    pub fn new(target_dir: impl AsRef<Path>) -> Result<Self> {
        let target_dir = target_dir.as_ref().to_path_buf();
        ensure_directory_target(&target_dir)?;
        let media_dir = target_dir.join(MEDIA_DIRECTORY);
        Ok(Self {
            target_dir,
            media_dir,
        })
    }

    /// Creates the target directory and its media subdirectory if absent.
    ///
    /// Safe to call on a layout that already exists.
    ///
    /// # Errors
    /// - [`ExportError::InvalidTarget`] if the target became a non-directory since construction
    /// - [`ExportError::Io`] if a directory cannot be created
    pub fn initialize(&self) -> Result<()> {
        ensure_directory_target(&self.target_dir)?;
        fs::create_dir_all(&self.target_dir)?;
        fs::create_dir_all(&self.media_dir)?;
        info!("Export layout ready at {}", self.target_dir.display());
        Ok(())
    }

    /// Opens `artifact` for writing, replacing any file left by a previous run.
    ///
    /// # Errors
    /// Returns [`ExportError::Io`] if the old file cannot be removed or the new one created.
    pub fn open_artifact(
        &self,
        artifact: Artifact,
        encoding: &'static Encoding,
    ) -> Result<TextArtifact> {
        let path = self.artifact_path(artifact);
        if path.exists() {
            debug!("Replacing {} artifact from a previous run", artifact);
            fs::remove_file(&path)?;
        }
        let file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        debug!(
            "Opened {} artifact at {} ({})",
            artifact,
            path.display(),
            encoding.name()
        );
        Ok(TextArtifact::new(artifact, Box::new(BufWriter::new(file)), encoding))
    }

    pub fn artifact_path(&self, artifact: Artifact) -> PathBuf {
        self.target_dir.join(artifact.file_name())
    }

    /// Maps a resource key to its file inside the media directory.
    ///
    /// The key is used verbatim. Callers must supply keys that are valid,
    /// non-traversing file names; no escaping is applied here.
    pub fn media_file_path(&self, resource_key: &str) -> PathBuf {
        self.media_dir.join(resource_key)
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }
}

/// Fails if `path` exists as anything other than a directory.
fn ensure_directory_target(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_dir() => Err(ExportError::InvalidTarget(path.to_path_buf())),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
