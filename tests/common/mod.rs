#![allow(dead_code)]
//! Builds small PDFs in memory for loader and CLI tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// A PDF with one page per entry, each page showing its text in a single
/// text object. `producer` goes into the Info dictionary when given.
pub fn pdf_bytes(pages: &[&str], producer: Option<&str>) -> Vec<u8> {
    let info = producer.map(|producer| {
        dictionary! {
            "Producer" => Object::string_literal(producer),
        }
    });
    pdf_with(pages, info, None)
}

/// Like [`pdf_bytes`], with a full Info dictionary and an optional
/// `PageLabels` entry for the catalog.
pub fn pdf_with(
    pages: &[&str],
    info: Option<Dictionary>,
    page_labels: Option<Dictionary>,
) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 10.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    if let Some(page_labels) = page_labels {
        catalog.set("PageLabels", page_labels);
    }
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    if let Some(info) = info {
        let info_id = doc.add_object(info);
        doc.trailer.set("Info", info_id);
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// ASCII words, cut to exactly `len` characters, not ending in a space.
pub fn words(len: usize) -> String {
    let vocab = ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit"];
    let mut text = String::with_capacity(len + 16);
    let mut i = 0;
    while text.len() < len {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(vocab[i % vocab.len()]);
        i += 1;
    }
    text.truncate(len);
    if text.ends_with(' ') {
        text.pop();
        text.push('x');
    }
    text
}
