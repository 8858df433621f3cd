//! Loader and pipeline tests against PDFs built in memory.

mod common;

use std::io::Write;

use common::{pdf_bytes, pdf_with, words};
use lopdf::{dictionary, Object, StringFormat};
use pdfslabs::{parse_pdf, split_documents, ChunkingConfig, Error, PdfLoader};

#[test]
fn one_document_per_page_in_order() {
    let bytes = pdf_bytes(&["Page one text", "Page two text", "Page three text"], None);
    let docs = PdfLoader::new("sample.pdf").load_mem(&bytes).unwrap();

    assert_eq!(docs.len(), 3);
    let texts: Vec<&str> = docs.iter().map(|d| d.text.trim()).collect();
    assert_eq!(texts, ["Page one text", "Page two text", "Page three text"]);

    for (i, doc) in docs.iter().enumerate() {
        assert_eq!(doc.metadata.page, i);
        assert_eq!(doc.metadata.total_pages, 3);
        assert_eq!(doc.metadata.source, "sample.pdf");
        assert_eq!(doc.metadata.page_label, (i + 1).to_string());
        assert!(doc.metadata.info.is_empty());
    }
}

#[test]
fn info_dictionary_fills_producer() {
    let bytes = pdf_bytes(&["Hello"], Some("pdfslabs test suite"));
    let docs = PdfLoader::new("info.pdf").load_mem(&bytes).unwrap();

    assert_eq!(docs[0].metadata.info["producer"], "pdfslabs test suite");
    assert!(!docs[0].metadata.info.contains_key("creator"));
}

#[test]
fn every_info_string_is_carried() {
    let info = dictionary! {
        "Title" => Object::string_literal("My Title"),
        "Author" => Object::string_literal("Ann"),
        "Producer" => Object::String(vec![b'a', 0x84, b'b'], StringFormat::Literal),
    };
    let bytes = pdf_with(&["Hello"], Some(info), None);
    let docs = PdfLoader::new("x.pdf").load_mem(&bytes).unwrap();

    let info = &docs[0].metadata.info;
    assert_eq!(info.len(), 3);
    assert_eq!(info["title"], "My Title");
    assert_eq!(info["author"], "Ann");
    assert_eq!(info["producer"], "a\u{2014}b");
}

#[test]
fn page_labels_from_catalog() {
    let labels = dictionary! {
        "Nums" => vec![
            0.into(),
            Object::Dictionary(dictionary! { "S" => "r" }),
            2.into(),
            Object::Dictionary(dictionary! { "S" => "D" }),
        ],
    };
    let bytes = pdf_with(&["front", "matter", "body", "more"], None, Some(labels));
    let docs = PdfLoader::new("labels.pdf").load_mem(&bytes).unwrap();

    let labels: Vec<&str> = docs.iter().map(|d| d.metadata.page_label.as_str()).collect();
    assert_eq!(labels, ["i", "ii", "1", "2"]);
}

#[test]
fn two_page_sample_scenario() {
    let page1 = words(500);
    let page2 = words(1600);
    let bytes = pdf_bytes(&[page1.as_str(), page2.as_str()], None);

    let docs = PdfLoader::new("sample.pdf").load_mem(&bytes).unwrap();
    assert_eq!(docs.len(), 2);

    let chunker = ChunkingConfig::default().chunker().unwrap();
    let chunks = split_documents(&chunker, &docs, 0);

    let first: Vec<_> = chunks.iter().filter(|c| c.metadata.page.page == 0).collect();
    let second: Vec<_> = chunks.iter().filter(|c| c.metadata.page.page == 1).collect();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].metadata.start_index, 0);
    assert_eq!(first[0].text, page1);

    assert!(second.len() >= 2);
    assert_eq!(second[0].metadata.start_index, 0);
    for pair in second.windows(2) {
        assert!(pair[1].metadata.start_index > pair[0].metadata.start_index);
    }

    for chunk in &chunks {
        assert!(chunk.char_len() <= 750);
    }
}

#[test]
fn chunk_text_sits_at_start_index() {
    let page = words(3000);
    let bytes = pdf_bytes(&[page.as_str()], None);
    let docs = PdfLoader::new("long.pdf").load_mem(&bytes).unwrap();

    let chunker = ChunkingConfig::default().chunker().unwrap();
    let chunks = split_documents(&chunker, &docs, 0);
    assert!(chunks.len() >= 4);

    let source = &docs[0].text;
    for chunk in &chunks {
        let at_offset: String = source
            .chars()
            .skip(chunk.metadata.start_index)
            .take(chunk.char_len())
            .collect();
        assert_eq!(at_offset, chunk.text);
    }
}

#[test]
fn sanitize_collapses_padding() {
    let bytes = pdf_bytes(&["spaced    out    text"], None);

    let raw = PdfLoader::new("s.pdf").load_mem(&bytes).unwrap();
    assert!(raw[0].text.contains("    "));

    let clean = PdfLoader::new("s.pdf").sanitize(true).load_mem(&bytes).unwrap();
    assert_eq!(clean[0].text, "spaced out text");
}

#[test]
fn parse_pdf_reads_file() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(&pdf_bytes(&["Alpha page.", "Beta page."], None))
        .unwrap();

    let chunks = parse_pdf(file.path(), &ChunkingConfig::default()).unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "Alpha page.");
    assert_eq!(chunks[1].text, "Beta page.");
    assert_eq!(chunks[1].metadata.page.page, 1);
    assert_eq!(chunks[1].metadata.chunk_index, 1);
    assert_eq!(
        chunks[0].metadata.page.source,
        file.path().to_string_lossy()
    );
}

#[test]
fn parse_pdf_min_chunk_chars() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(&pdf_bytes(&["short", words(200).as_str()], None))
        .unwrap();

    let config = ChunkingConfig {
        min_chunk_chars: 30,
        ..ChunkingConfig::default()
    };
    let chunks = parse_pdf(file.path(), &config).unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].metadata.page.page, 1);
}

#[test]
fn corrupt_file_is_pdf_error() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF-1.5\nthis is not really a pdf").unwrap();

    let err = parse_pdf(file.path(), &ChunkingConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Pdf { .. }));
}
