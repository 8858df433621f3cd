//! Per-page text extraction with `lopdf`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use lopdf::{decode_text_string, Dictionary, Object};
use tracing::{debug, warn};

use crate::labels::page_labels;
use crate::sanitize::sanitize_text;
use crate::{Document, Error, PageMetadata, Result};

/// Loads a PDF as one [`Document`] per page.
///
/// ```rust,no_run
/// use pdfslabs::PdfLoader;
///
/// let pages = PdfLoader::new("sample.pdf").load()?;
/// for page in &pages {
///     println!("page {}: {} chars", page.metadata.page, page.text.chars().count());
/// }
/// # Ok::<(), pdfslabs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct PdfLoader {
    path: PathBuf,
    sanitize: bool,
}

impl PdfLoader {
    /// Loader for the file at `path`. The path is also recorded as each
    /// page's `source`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sanitize: false,
        }
    }

    /// Run [`sanitize_text`] over each page before returning it.
    #[must_use]
    pub fn sanitize(self, sanitize: bool) -> Self {
        Self { sanitize, ..self }
    }

    /// Read and parse the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pdf`] if the file is missing, unreadable, or not a
    /// valid PDF.
    pub fn load(&self) -> Result<Vec<Document>> {
        let pdf = lopdf::Document::load(&self.path).map_err(|source| Error::Pdf {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.documents(&pdf))
    }

    /// Parse PDF bytes that were already read, labelling pages with this
    /// loader's path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pdf`] if the bytes are not a valid PDF.
    pub fn load_mem(&self, bytes: &[u8]) -> Result<Vec<Document>> {
        let pdf = lopdf::Document::load_mem(bytes).map_err(|source| Error::Pdf {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.documents(&pdf))
    }

    fn documents(&self, pdf: &lopdf::Document) -> Vec<Document> {
        let source = self.path.to_string_lossy().into_owned();
        let info = info_entries(pdf);

        let pages = pdf.get_pages();
        let total_pages = pages.len();
        let labels = page_labels(pdf, total_pages);

        let documents: Vec<Document> = pages
            .keys()
            .zip(labels)
            .enumerate()
            .map(|(index, (&number, page_label))| {
                let text = pdf.extract_text(&[number]).unwrap_or_else(|err| {
                    // Keep the page so page numbering stays intact.
                    warn!(page = number, error = %err, "could not extract page text");
                    String::new()
                });
                let text = if self.sanitize { sanitize_text(&text) } else { text };

                let metadata = PageMetadata {
                    info: info.clone(),
                    page_label,
                    ..PageMetadata::new(source.clone(), index, total_pages)
                };
                Document::new(text, metadata)
            })
            .collect();

        debug!(source = %source, pages = total_pages, info = info.len(), "loaded pdf");
        documents
    }
}

/// Page fields an Info entry must not shadow in the flattened metadata.
const RESERVED_KEYS: &[&str] = &[
    "source",
    "total_pages",
    "page",
    "page_label",
    "start_index",
    "chunk_index",
];

/// Non-empty text strings of the trailer's Info dictionary, keyed by
/// lowercased entry name. Non-string entries are skipped.
fn info_entries(pdf: &lopdf::Document) -> BTreeMap<String, String> {
    let Some(info) = pdf
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|info| resolve_dict(pdf, info))
    else {
        return BTreeMap::new();
    };

    info.iter()
        .filter_map(|(key, value)| {
            let key = String::from_utf8_lossy(key).to_lowercase();
            if RESERVED_KEYS.contains(&key.as_str()) {
                return None;
            }
            let text = decode_text_string(resolve(pdf, value)).ok()?;
            (!text.is_empty()).then_some((key, text))
        })
        .collect()
}

/// Follow an indirect reference. Dangling references resolve to themselves.
pub(crate) fn resolve<'a>(pdf: &'a lopdf::Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => pdf.get_object(*id).unwrap_or(object),
        other => other,
    }
}

pub(crate) fn resolve_dict<'a>(
    pdf: &'a lopdf::Document,
    object: &'a Object,
) -> Option<&'a Dictionary> {
    resolve(pdf, object).as_dict().ok()
}
