//! Load -> split.

use std::path::Path;

use tracing::debug;

use crate::{Chunk, ChunkMetadata, Chunker, ChunkingConfig, Document, PdfLoader, Result};

/// Split each document with `chunker`, keeping document order and then
/// position order inside each document.
///
/// Chunks shorter than `min_chunk_chars` characters are dropped;
/// `chunk_index` numbers the chunks that remain.
#[must_use]
pub fn split_documents(
    chunker: &dyn Chunker,
    documents: &[Document],
    min_chunk_chars: usize,
) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for document in documents {
        let slabs = chunker.chunk(&document.text);
        debug!(
            page = document.metadata.page,
            slabs = slabs.len(),
            "split page"
        );

        for slab in slabs {
            if slab.char_len() < min_chunk_chars {
                continue;
            }
            let chunk_index = chunks.len();
            chunks.push(Chunk {
                text: slab.text,
                metadata: ChunkMetadata {
                    page: document.metadata.clone(),
                    start_index: slab.start,
                    chunk_index,
                },
            });
        }
    }

    chunks
}

/// Load the PDF at `path` and split it according to `config`.
///
/// # Errors
///
/// Returns [`crate::Error::Pdf`] if the file can't be read as a PDF, and the
/// configuration errors of [`ChunkingConfig::chunker`].
pub fn parse_pdf(path: impl AsRef<Path>, config: &ChunkingConfig) -> Result<Vec<Chunk>> {
    let chunker = config.chunker()?;
    let documents = PdfLoader::new(path.as_ref())
        .sanitize(config.sanitize)
        .load()?;

    let chunks = split_documents(&chunker, &documents, config.min_chunk_chars);
    debug!(
        pages = documents.len(),
        chunks = chunks.len(),
        "parsed pdf"
    );
    Ok(chunks)
}
