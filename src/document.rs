//! Pages and the chunks cut from them.

use std::collections::BTreeMap;

use serde::Serialize;

/// Where a page came from.
///
/// The string entries of the PDF Info dictionary (`title`, `author`,
/// `producer`, `creationdate`, ...) come first in the JSON under their
/// lowercased names, followed by the page's own fields:
///
/// ```rust
/// use pdfslabs::PageMetadata;
///
/// let mut page = PageMetadata::new("report.pdf", 0, 3);
/// page.info.insert("title".to_string(), "Q3 Report".to_string());
///
/// assert_eq!(page.page_label, "1");
/// assert_eq!(page.info["title"], "Q3 Report");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Info dictionary strings keyed by lowercased entry name.
    #[serde(flatten)]
    pub info: BTreeMap<String, String>,
    /// Path of the PDF as it was given.
    pub source: String,
    /// Number of pages in the file.
    pub total_pages: usize,
    /// Zero-based page index.
    pub page: usize,
    /// Label printed for the page, from the catalog's `PageLabels`. The
    /// one-based page number when the file defines none.
    pub page_label: String,
}

impl PageMetadata {
    /// Metadata for page `page` of `total_pages`, with no Info entries and
    /// the default label.
    #[must_use]
    pub fn new(source: impl Into<String>, page: usize, total_pages: usize) -> Self {
        Self {
            info: BTreeMap::new(),
            source: source.into(),
            total_pages,
            page,
            page_label: (page + 1).to_string(),
        }
    }
}

/// One page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Extracted page text.
    pub text: String,
    /// Where the text came from.
    pub metadata: PageMetadata,
}

impl Document {
    /// Pair page text with its metadata.
    #[must_use]
    pub fn new(text: impl Into<String>, metadata: PageMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }
}

/// Page metadata plus the chunk's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkMetadata {
    /// Metadata of the page the chunk was cut from.
    #[serde(flatten)]
    pub page: PageMetadata,
    /// Character offset of the chunk in its page text.
    pub start_index: usize,
    /// Position of the chunk in the whole output.
    pub chunk_index: usize,
}

/// A bounded piece of one page, serialized as `{"text": .., "metadata": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Trimmed chunk text.
    pub text: String,
    /// Page metadata and offsets.
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Length of the chunk text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
