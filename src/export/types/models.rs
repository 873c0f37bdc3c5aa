//! Core data structures exchanged with dictionary writers.
//!
//! This module defines the entities a caller hands to a writer:
//! - Descriptive metadata ([`FormatMetadata`], [`LanguageDirections`])
//! - Per-record payloads (articles, abbreviations, media, debug resources)
//! - Identity and bookkeeping records ([`FormatDescriptor`], [`SaveCounters`])

use std::fmt;
use std::io::Read;

/// Descriptive properties of a dictionary base.
///
/// Captured once per export session. The writer keeps a shared reference
/// (`Arc`) to the caller's value and uses the declared counts to seed the
/// progress total; the report builder reads the same value for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatMetadata {
    /// Declared number of articles to be saved.
    pub articles_number: u32,
    /// Number of distinct article bodies (may be lower than the word count).
    pub articles_actual_number: u32,
    pub words_number: u32,
    /// Number of word-to-word redirects.
    pub words_relations_number: u32,
    pub abbreviations_number: u32,
    pub media_resources_number: u32,

    pub base_file_size: u64,
    pub base_parts_total_number: u32,
    pub media_file_size: u64,

    pub format_name: String,
    pub format_version: String,
    pub base_version: Option<String>,
    /// ISO-8601 timestamp, e.g. `2012-07-02T10:00:00`.
    pub base_date: Option<String>,
    pub media_format_name: String,
    pub media_format_version: String,

    pub words_codepage_name: Option<String>,
    pub article_codepage_name: Option<String>,

    pub compilation_creator_name: Option<String>,
    /// ISO-8601 timestamp.
    pub compilation_date: Option<String>,

    pub articles_formatting_mode: Option<String>,
    pub articles_formatting_inject_word_mode: Option<String>,
    pub abbreviations_formatting_mode: Option<String>,

    /// Media resources live in a separate base rather than next to the articles.
    pub media_base_separate: bool,
}

impl FormatMetadata {
    /// Number of progress units a full export of this base produces.
    pub fn expected_units(&self) -> u64 {
        u64::from(self.abbreviations_number)
            + u64::from(self.articles_number)
            + u64::from(self.media_resources_number)
    }
}

/// A single source → target language pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDirection {
    pub from: String,
    pub to: String,
}

impl LanguageDirection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for LanguageDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.from.to_uppercase(),
            self.to.to_uppercase()
        )
    }
}

/// Ordered set of language pairs a dictionary covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDirections {
    pub directions: Vec<LanguageDirection>,
}

impl LanguageDirections {
    pub fn new(directions: Vec<LanguageDirection>) -> Self {
        Self { directions }
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Renders the pairs as `EN - RU, RU - EN`, or an empty string when none are declared.
    pub fn to_language_pairs_string(&self) -> String {
        self.directions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A headword paired with its formatted article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub word: String,
    pub article: String,
}

impl ArticleRecord {
    pub fn new(word: impl Into<String>, article: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            article: article.into(),
        }
    }
}

/// An abbreviation key paired with its expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationRecord {
    pub abbreviation: String,
    pub definition: String,
}

impl AbbreviationRecord {
    pub fn new(abbreviation: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            definition: definition.into(),
        }
    }
}

/// A binary media resource and the stream its bytes are read from.
///
/// The record is consumed by the save call, so the stream is dropped when
/// the call returns, whether the copy succeeded or not.
pub struct MediaRecord<'a> {
    /// Used verbatim as the file name inside the media directory.
    pub key: String,
    pub stream: Box<dyn Read + 'a>,
}

impl<'a> MediaRecord<'a> {
    pub fn new(key: impl Into<String>, stream: impl Read + 'a) -> Self {
        Self {
            key: key.into(),
            stream: Box::new(stream),
        }
    }
}

impl fmt::Debug for MediaRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaRecord")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// A diagnostic resource, logged as UTF-8 text into the debug artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugResourceRecord {
    pub key: String,
    pub bytes: Vec<u8>,
}

impl DebugResourceRecord {
    pub fn new(key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            bytes: bytes.into(),
        }
    }
}

/// Static identity of a writer implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub name: &'static str,
    /// Empty for directory-based formats.
    pub primary_extension: &'static str,
    pub extensions: &'static [&'static str],
}

/// Successful saves per record type within one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveCounters {
    pub articles: u64,
    pub abbreviations: u64,
    pub media_resources: u64,
}

impl SaveCounters {
    pub fn total(&self) -> u64 {
        self.articles + self.abbreviations + self.media_resources
    }
}
