//! Flattened file records produced by extraction.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Content stand-in for files whose bytes are not valid text.
pub const NON_TEXT_PLACEHOLDER: &str = "[Non-text file]";

/// One extracted file: path, decoded content, size. Produced for every
/// included file node within the size cap, in tree traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated.
    pub path: CompactString,
    /// Decoded text content, or [`NON_TEXT_PLACEHOLDER`].
    pub content: String,
    /// Size in bytes on disk.
    pub size: u64,
}

impl FileRecord {
    /// Create a record with decoded content.
    pub fn new(path: impl Into<CompactString>, content: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            size,
        }
    }

    /// Create a placeholder record for undecodable content.
    pub fn non_text(path: impl Into<CompactString>, size: u64) -> Self {
        Self {
            path: path.into(),
            content: NON_TEXT_PLACEHOLDER.to_string(),
            size,
        }
    }

    /// True if the content is the non-text placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.content == NON_TEXT_PLACEHOLDER
    }
}
