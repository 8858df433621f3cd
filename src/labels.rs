//! Page labels from the catalog's `PageLabels` number tree.
//!
//! A label range starts at a zero-based page index and numbers the pages
//! that follow it in one style, with an optional prefix:
//!
//! ```text
//! /PageLabels << /Nums [ 0 << /S /r >>  4 << /S /D >> ] >>
//!
//! pages:  0  1   2    3   4  5  6
//! labels: i  ii  iii  iv  1  2  3
//! ```

use lopdf::{decode_text_string, Dictionary, Object};

use crate::loader::{resolve, resolve_dict};

/// Deepest `Kids` nesting followed in the number tree.
const MAX_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numbering {
    Decimal,
    UpperRoman,
    LowerRoman,
    UpperLetters,
    LowerLetters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LabelRange {
    numbering: Option<Numbering>,
    prefix: String,
    first: usize,
}

impl LabelRange {
    fn from_dict(pdf: &lopdf::Document, dict: &Dictionary) -> Self {
        let numbering = match dict.get(b"S").map(|s| resolve(pdf, s)) {
            Ok(Object::Name(name)) => match name.as_slice() {
                b"D" => Some(Numbering::Decimal),
                b"R" => Some(Numbering::UpperRoman),
                b"r" => Some(Numbering::LowerRoman),
                b"A" => Some(Numbering::UpperLetters),
                b"a" => Some(Numbering::LowerLetters),
                _ => None,
            },
            _ => None,
        };
        let prefix = dict
            .get(b"P")
            .ok()
            .and_then(|p| decode_text_string(resolve(pdf, p)).ok())
            .unwrap_or_default();
        let first = match dict.get(b"St").map(|st| resolve(pdf, st)) {
            Ok(Object::Integer(n)) => usize::try_from(*n).ok().filter(|&n| n >= 1).unwrap_or(1),
            _ => 1,
        };

        Self {
            numbering,
            prefix,
            first,
        }
    }

    /// Label of the page `offset` pages into the range.
    fn label(&self, offset: usize) -> String {
        let n = self.first + offset;
        let number = match self.numbering {
            None => String::new(),
            Some(Numbering::Decimal) => n.to_string(),
            Some(Numbering::UpperRoman) => roman(n),
            Some(Numbering::LowerRoman) => roman(n).to_lowercase(),
            Some(Numbering::UpperLetters) => letters(n),
            Some(Numbering::LowerLetters) => letters(n).to_lowercase(),
        };
        format!("{}{number}", self.prefix)
    }
}

/// One label per page. Without `PageLabels`, or before the first range,
/// a page is labelled with its one-based number.
pub(crate) fn page_labels(pdf: &lopdf::Document, total_pages: usize) -> Vec<String> {
    let mut ranges = Vec::new();
    let tree = pdf
        .trailer
        .get(b"Root")
        .ok()
        .and_then(|root| resolve_dict(pdf, root))
        .and_then(|catalog| catalog.get(b"PageLabels").ok())
        .and_then(|labels| resolve_dict(pdf, labels));
    if let Some(tree) = tree {
        collect_ranges(pdf, tree, 0, &mut ranges);
    }
    ranges.sort_by_key(|(start, _)| *start);

    (0..total_pages)
        .map(|page| match ranges.iter().rev().find(|(start, _)| *start <= page) {
            Some((start, range)) => range.label(page - start),
            None => (page + 1).to_string(),
        })
        .collect()
}

fn collect_ranges(
    pdf: &lopdf::Document,
    node: &Dictionary,
    depth: usize,
    ranges: &mut Vec<(usize, LabelRange)>,
) {
    if depth > MAX_DEPTH {
        return;
    }

    if let Ok(Object::Array(nums)) = node.get(b"Nums").map(|n| resolve(pdf, n)) {
        for pair in nums.chunks_exact(2) {
            let (Object::Integer(start), Some(dict)) =
                (resolve(pdf, &pair[0]), resolve_dict(pdf, &pair[1]))
            else {
                continue;
            };
            if let Ok(start) = usize::try_from(*start) {
                ranges.push((start, LabelRange::from_dict(pdf, dict)));
            }
        }
    }

    if let Ok(Object::Array(kids)) = node.get(b"Kids").map(|k| resolve(pdf, k)) {
        for kid in kids {
            if let Some(kid) = resolve_dict(pdf, kid) {
                collect_ranges(pdf, kid, depth + 1, ranges);
            }
        }
    }
}

fn roman(mut n: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

/// A..Z, then AA..ZZ, then AAA..ZZZ and so on.
fn letters(n: usize) -> String {
    let index = n.saturating_sub(1);
    let letter = char::from(b'A' + (index % 26) as u8);
    String::from(letter).repeat(index / 26 + 1)
}
