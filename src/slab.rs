//! The Slab type: a chunk of text with position metadata.

/// A chunk of text with its position in the original text.
///
/// ## Character Offsets
///
/// `start` and `end` count characters (Unicode scalar values), not bytes.
/// Chunk limits are expressed in characters too, so a 750-character limit
/// means the same thing for ASCII and for accented or CJK text:
///
/// ```rust
/// use pdfslabs::Slab;
///
/// let text = "Grüße, Welt!";
/// let slab = Slab::new("Welt", 7, 11, 0);
///
/// let recovered: String = text.chars().skip(slab.start).take(slab.char_len()).collect();
/// assert_eq!(recovered, "Welt");
/// ```
///
/// ## Overlap Handling
///
/// When chunks overlap, adjacent slabs share some text. The `index` field
/// identifies each slab's position in the sequence:
///
/// ```text
/// Original: "The quick brown fox"
/// Slab 0:   "The quick"       [0..9]
/// Slab 1:   "quick brown"     [4..15]  <- overlaps with slab 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slab {
    /// The chunk text.
    pub text: String,
    /// Character offset where this chunk starts in the original text.
    pub start: usize,
    /// Character offset where this chunk ends (exclusive) in the original text.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.char_len()
        )
    }
}
