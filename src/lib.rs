//! # pdfslabs
//!
//! Turn a PDF into page-scoped text chunks for retrieval-augmented generation
//! (RAG) indexing.
//!
//! ## The Pipeline
//!
//! ```text
//! sample.pdf
//!   │  PdfLoader        one Document per page, in page order
//!   ▼
//! [Document{page 0}, Document{page 1}, ...]
//!   │  RecursiveChunker  <= 750 characters per chunk, no overlap
//!   ▼
//! [Chunk{page 0, start_index 0}, Chunk{page 1, start_index 0},
//!  Chunk{page 1, start_index 742}, ...]
//!   │  output
//!   ▼
//! {"chunks": [{"text": "...", "metadata": {...}}, ...]}
//! ```
//!
//! ## Recursive Splitting
//!
//! Try splitting on paragraph breaks first. If chunks are still too large,
//! split on line breaks, then sentences, then words. Last resort: split
//! between grapheme clusters.
//!
//! ```text
//! Separators: ["\n\n", "\n", ". ", " ", ""]
//! ```
//!
//! Small pieces are packed back together up to the size limit, so a chunk
//! holds as many whole paragraphs (or sentences, or words) as fit.
//!
//! Every chunk records `start_index`, the character offset of its first
//! character in the page text, so a hit can be mapped back to its exact
//! position on the page.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfslabs::{split_documents, Document, PageMetadata, RecursiveChunker};
//!
//! let page = Document::new(
//!     "First paragraph.\n\nSecond paragraph.",
//!     PageMetadata::new("notes.pdf", 0, 1),
//! );
//!
//! let chunker = RecursiveChunker::prose(750);
//! let chunks = split_documents(&chunker, &[page], 0);
//!
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].metadata.start_index, 0);
//! ```
//!
//! Reading a file goes through [`parse_pdf`], which also applies a
//! [`ChunkingConfig`].

mod config;
mod document;
mod error;
mod labels;
mod loader;
pub mod output;
mod pipeline;
mod recursive;
pub mod sanitize;
mod slab;

pub use config::ChunkingConfig;
pub use document::{Chunk, ChunkMetadata, Document, PageMetadata};
pub use error::{Error, Result};
pub use loader::PdfLoader;
pub use pipeline::{parse_pdf, split_documents};
pub use recursive::{RecursiveChunker, PROSE_SEPARATORS};
pub use slab::Slab;

/// A text chunking strategy.
///
/// The pipeline only needs something that turns a page of text into
/// ordered [`Slab`]s:
///
/// ```rust
/// use pdfslabs::{Chunker, RecursiveChunker};
///
/// fn chunk_page(chunker: &dyn Chunker, text: &str) -> Vec<pdfslabs::Slab> {
///     chunker.chunk(text)
/// }
///
/// let chunker = RecursiveChunker::prose(100);
/// let slabs = chunk_page(&chunker, "Hello world. This is a test.");
/// assert_eq!(slabs.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Slab`] containing the text and its character
    /// offsets in the original text.
    fn chunk(&self, text: &str) -> Vec<Slab>;

    /// Estimate the number of chunks for a text of `text_len` characters.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize;
}
