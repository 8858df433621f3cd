//! Recursive character splitting (LangChain-style).
//!
//! Tries progressively finer separators until chunks fit within the size limit.
//!
//! ## The Algorithm
//!
//! Given separators `["\n\n", "\n", ". ", " ", ""]` and max_size `100`:
//!
//! ```text
//! 1. Split on the first separator present in the text ("\n\n", paragraphs)
//! 2. Pieces under 100 chars are packed together into chunks of <= 100 chars
//! 3. Any piece of 100+ chars is split again on the next separator ("\n", lines)
//! 4. ... then ". " (sentences), then " " (words)
//! 5. Last resort: "" splits into grapheme clusters
//! ```
//!
//! Sizes are counted in characters, not bytes. The separator stays attached
//! to the end of the piece it terminates, so every chunk is a contiguous
//! slice of the input and its span is known exactly without searching.
//!
//! ## Overlap
//!
//! After a chunk is emitted, the packer keeps the trailing pieces whose
//! combined length is at most `overlap` and starts the next chunk with them.
//! With `overlap == 0` adjacent chunks never share text.

use std::collections::VecDeque;

use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Chunker, Error, Result, Slab};

/// Separators for prose: paragraphs, lines, sentences, words, graphemes.
pub const PROSE_SEPARATORS: &[&str] = &["\n\n", "\n", ". ", " ", ""];

/// A byte range of the source text with its length in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    chars: usize,
}

impl Span {
    fn of(segment: &str, base: usize, start: usize, end: usize) -> Self {
        Self {
            start: base + start,
            end: base + end,
            chars: segment[start..end].chars().count(),
        }
    }
}

/// Recursive character splitter.
///
/// Splits text using a hierarchy of separators, trying the coarsest first.
///
/// ## Example
///
/// ```rust
/// use pdfslabs::{Chunker, RecursiveChunker};
///
/// let chunker = RecursiveChunker::new(50, &["\n\n", "\n", ". ", " "]);
/// let text = "Paragraph one.\n\nParagraph two is longer and might need splitting.";
/// let slabs = chunker.chunk(text);
///
/// assert_eq!(slabs[0].text, "Paragraph one.");
/// assert!(slabs.iter().all(|s| s.char_len() <= 50));
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    max_size: usize,
    overlap: usize,
    separators: Vec<String>,
    strip_whitespace: bool,
}

impl RecursiveChunker {
    /// Create a new recursive chunker.
    ///
    /// # Arguments
    ///
    /// * `max_size` - Maximum chunk size in characters
    /// * `separators` - Hierarchy of separators, coarsest first. An empty
    ///   string means "split between grapheme clusters".
    ///
    /// # Panics
    ///
    /// Panics if `max_size == 0` or `separators` is empty.
    #[must_use]
    pub fn new(max_size: usize, separators: &[&str]) -> Self {
        assert!(max_size > 0, "max_size must be > 0");
        assert!(!separators.is_empty(), "separators must not be empty");

        Self {
            max_size,
            overlap: 0,
            separators: separators.iter().map(|&s| s.to_string()).collect(),
            strip_whitespace: true,
        }
    }

    /// Create a chunker with [`PROSE_SEPARATORS`].
    #[must_use]
    pub fn prose(max_size: usize) -> Self {
        Self::new(max_size, PROSE_SEPARATORS)
    }

    /// Like [`RecursiveChunker::prose`], for sizes that come from user input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `max_size == 0`.
    pub fn try_prose(max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(Error::InvalidChunkSize(max_size));
        }
        Ok(Self::prose(max_size))
    }

    /// Let adjacent chunks share up to `overlap` characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlapExceedsSize`] if `overlap > max_size`.
    pub fn with_overlap(self, overlap: usize) -> Result<Self> {
        if overlap > self.max_size {
            return Err(Error::OverlapExceedsSize {
                size: self.max_size,
                overlap,
            });
        }
        Ok(Self { overlap, ..self })
    }

    /// Keep leading and trailing whitespace on chunks instead of trimming it.
    ///
    /// Trimmed chunks skip the whitespace between them; untrimmed chunks
    /// (with no overlap) tile the input exactly.
    #[must_use]
    pub fn keep_whitespace(self) -> Self {
        Self {
            strip_whitespace: false,
            ..self
        }
    }

    /// Maximum chunk size in characters.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Characters shared by adjacent chunks.
    #[must_use]
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Recursively split `span` of `text` using separators from `sep_index` on.
    fn split_recursive(&self, text: &str, span: Span, sep_index: usize, chunks: &mut Vec<Span>) {
        let segment = &text[span.start..span.end];
        let found = self.separators[sep_index..]
            .iter()
            .position(|sep| sep.is_empty() || segment.contains(sep.as_str()));

        let (pieces, next) = match found {
            Some(pos) => {
                let sep = &self.separators[sep_index + pos];
                let pieces = if sep.is_empty() {
                    self.grapheme_pieces(segment, span.start)
                } else {
                    split_keep_separator(segment, span.start, sep)
                };
                (pieces, sep_index + pos + 1)
            }
            // No separator left applies
            None => (self.grapheme_pieces(segment, span.start), self.separators.len()),
        };

        let mut pending: Vec<Span> = Vec::new();
        for piece in pieces {
            if piece.chars < self.max_size {
                pending.push(piece);
                continue;
            }

            if !pending.is_empty() {
                chunks.extend(self.merge_pieces(&pending));
                pending.clear();
            }

            if next < self.separators.len() {
                self.split_recursive(text, piece, next, chunks);
            } else if piece.chars <= self.max_size {
                chunks.push(piece);
            } else {
                self.force_split(text, piece, chunks);
            }
        }

        if !pending.is_empty() {
            chunks.extend(self.merge_pieces(&pending));
        }
    }

    /// Split at grapheme boundaries when no separator works.
    fn force_split(&self, text: &str, span: Span, chunks: &mut Vec<Span>) {
        let pieces = self.grapheme_pieces(&text[span.start..span.end], span.start);
        chunks.extend(self.merge_pieces(&pieces));
    }

    /// One piece per grapheme cluster. A cluster longer than `max_size`
    /// characters is broken into single characters.
    fn grapheme_pieces(&self, segment: &str, base: usize) -> Vec<Span> {
        let mut pieces = Vec::with_capacity(segment.len());
        for (offset, grapheme) in segment.grapheme_indices(true) {
            let piece = Span::of(segment, base, offset, offset + grapheme.len());
            if piece.chars <= self.max_size {
                pieces.push(piece);
            } else {
                warn!(
                    chars = piece.chars,
                    max_size = self.max_size,
                    "grapheme cluster longer than chunk size, splitting it"
                );
                pieces.extend(
                    grapheme
                        .char_indices()
                        .map(|(i, c)| Span::of(segment, base, offset + i, offset + i + c.len_utf8())),
                );
            }
        }
        pieces
    }

    /// Pack consecutive pieces into chunks of at most `max_size` characters,
    /// carrying up to `overlap` characters into the next chunk.
    fn merge_pieces(&self, pieces: &[Span]) -> Vec<Span> {
        let mut merged = Vec::new();
        let mut window: VecDeque<Span> = VecDeque::new();
        let mut total = 0;

        for &piece in pieces {
            if total + piece.chars > self.max_size && !window.is_empty() {
                merged.extend(join(&window));

                while total > self.overlap || (total + piece.chars > self.max_size && total > 0) {
                    match window.pop_front() {
                        Some(first) => total -= first.chars,
                        None => break,
                    }
                }
            }

            window.push_back(piece);
            total += piece.chars;
        }

        merged.extend(join(&window));
        merged
    }

    /// Trim a chunk span. Returns `None` for chunks with nothing left.
    fn finish(&self, text: &str, span: Span) -> Option<(usize, usize)> {
        let raw = &text[span.start..span.end];
        if !self.strip_whitespace {
            return (!raw.is_empty()).then_some((span.start, span.end));
        }

        let lead = raw.len() - raw.trim_start().len();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some((span.start + lead, span.start + lead + trimmed.len()))
    }
}

/// Split on `sep`, keeping each separator at the end of the piece before it.
fn split_keep_separator(segment: &str, base: usize, sep: &str) -> Vec<Span> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, matched) in segment.match_indices(sep) {
        let end = idx + matched.len();
        pieces.push(Span::of(segment, base, start, end));
        start = end;
    }

    if start < segment.len() {
        pieces.push(Span::of(segment, base, start, segment.len()));
    }

    pieces
}

/// The span covering a window of contiguous pieces.
fn join(window: &VecDeque<Span>) -> Option<Span> {
    let first = window.front()?;
    let last = window.back()?;
    Some(Span {
        start: first.start,
        end: last.end,
        chars: window.iter().map(|p| p.chars).sum(),
    })
}

/// Converts increasing byte offsets to character offsets in one pass.
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn seek(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            self.byte = 0;
            self.chars = 0;
        }
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        if text.is_empty() {
            return vec![];
        }

        let whole = Span::of(text, 0, 0, text.len());
        let mut spans = Vec::with_capacity(self.estimate_chunks(whole.chars));
        self.split_recursive(text, whole, 0, &mut spans);

        let mut cursor = CharCursor::new(text);
        spans
            .into_iter()
            .filter_map(|span| self.finish(text, span))
            .enumerate()
            .map(|(index, (start, end))| {
                let chunk = &text[start..end];
                let start = cursor.seek(start);
                Slab::new(chunk, start, start + chunk.chars().count(), index)
            })
            .collect()
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / self.max_size).max(1)
    }
}
