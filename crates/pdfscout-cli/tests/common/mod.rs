//! Fixture PDFs for CLI tests, built with lopdf.

#![allow(dead_code)]

use std::io::Write;

use lopdf::{Object, Stream, dictionary};

/// Build a PDF with one page per entry; each line is its own text object.
pub fn text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids = Vec::new();
    for lines in pages {
        let mut ops = String::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 720 - 14 * i as i64;
            ops.push_str(&format!("BT\n/F1 11 Tf\n72 {y} Td\n({line}) Tj\nET\n"));
        }
        let content_id = doc.add_object(Stream::new(dictionary! {}, ops.into_bytes()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
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

/// Two pages; "budget" appears three times.
pub fn budget_pdf() -> Vec<u8> {
    text_pdf(&[
        &[
            "Annual budget",
            "review for the board.",
            "The budget grew this year,",
            "mostly in research.",
        ],
        &["Summary", "The Budget is approved."],
    ])
}

/// Write `bytes` to a temp file named `name` inside a fresh temp dir.
pub fn write_temp(name: &str, bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    (dir, path)
}
