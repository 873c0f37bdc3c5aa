//! Dictionary export writers.
//!
//! # Module Organization
//!
//! - [`types`]: Records, metadata, options, errors and the [`DictionaryWriter`] contract
//! - [`layout`]: Directory layout and text artifacts of the basic source format
//! - [`progress`]: Progress accounting and observer fan-out
//! - [`writer`]: The basic source [`SourceWriter`]
//! - [`report`]: Localized HTML summary built from [`FormatMetadata`]
//!
//! # Session Flow
//!
//! ```text
//! initialize ──► save_format_metadata ──► save_* (any order) ──► flush ──► close
//!                      │                        │
//!                      ▼                        ▼
//!              progress total            progress unit + observers
//! ```

pub mod layout;
pub mod progress;
pub mod report;
pub mod types;
pub mod utils;
pub mod writer;

pub use progress::{ObserverId, ProgressObserver, ProgressState, ProgressTracker};
pub use types::error::{ExportError, Result};
pub use types::formats::DictionaryWriter;
pub use types::models::*;
pub use types::options::WriterOptions;
pub use writer::{BASIC_SOURCE_FORMAT, SourceWriter};
