//! Shared fixtures for integration tests.
//!
//! PDFs are built programmatically with lopdf so the tests carry no binary
//! fixtures.

#![allow(dead_code)]

use lopdf::{Object, Stream, dictionary};

/// Escape a string for a PDF literal string.
fn pdf_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Build a PDF with one page per entry; each line is its own text object.
pub fn text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for lines in pages {
        let mut ops = String::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 720 - 14 * i as i64;
            ops.push_str(&format!(
                "BT\n/F1 11 Tf\n72 {y} Td\n({}) Tj\nET\n",
                pdf_escape(line)
            ));
        }
        let content_id = doc.add_object(Stream::new(dictionary! {}, ops.into_bytes()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        }));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(pages.len() as i64),
    });

    for &pid in &page_ids {
        if let Ok(obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// A two-page report used across the integration tests.
pub fn report_pdf() -> Vec<u8> {
    text_pdf(&[
        &[
            "Quarterly results",
            "improved across regions.",
            "Revenue grew in the north,",
            "and costs fell in the south.",
        ],
        &["Outlook", "Revenue is expected to grow again."],
    ])
}
