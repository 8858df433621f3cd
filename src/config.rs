//! Chunking configuration.

use crate::{RecursiveChunker, Result};

/// How pages are turned into chunks.
///
/// The defaults produce chunks of at most 750 characters with no overlap,
/// no minimum length and no text cleanup.
///
/// ```rust
/// use pdfslabs::ChunkingConfig;
///
/// let config = ChunkingConfig::default();
/// assert_eq!(config.chunk_size, 750);
/// assert_eq!(config.chunk_overlap, 0);
///
/// let chunker = config.chunker().unwrap();
/// assert_eq!(chunker.max_size(), 750);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters.
    pub chunk_size: usize,
    /// Characters shared by adjacent chunks of the same page.
    pub chunk_overlap: usize,
    /// Chunks shorter than this many characters are dropped.
    pub min_chunk_chars: usize,
    /// Clean page text with [`crate::sanitize::sanitize_text`] before splitting.
    pub sanitize: bool,
}

impl ChunkingConfig {
    /// Chunk size used when none is configured.
    pub const DEFAULT_CHUNK_SIZE: usize = 750;

    /// Build the splitter for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidChunkSize`] for a zero chunk size and
    /// [`crate::Error::OverlapExceedsSize`] when the overlap is larger than
    /// the chunk size.
    pub fn chunker(&self) -> Result<RecursiveChunker> {
        RecursiveChunker::try_prose(self.chunk_size)?.with_overlap(self.chunk_overlap)
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            chunk_overlap: 0,
            min_chunk_chars: 0,
            sanitize: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = ChunkingConfig {
            chunk_size: 0,
            ..ChunkingConfig::default()
        };
        assert!(matches!(config.chunker(), Err(Error::InvalidChunkSize(0))));
    }

    #[test]
    fn test_overlap_larger_than_size_rejected() {
        let config = ChunkingConfig {
            chunk_size: 100,
            chunk_overlap: 101,
            ..ChunkingConfig::default()
        };
        assert!(matches!(
            config.chunker(),
            Err(Error::OverlapExceedsSize { size: 100, overlap: 101 })
        ));
    }

    #[test]
    fn test_overlap_applied() {
        let config = ChunkingConfig {
            chunk_overlap: 50,
            ..ChunkingConfig::default()
        };
        assert_eq!(config.chunker().unwrap().overlap(), 50);
    }
}
