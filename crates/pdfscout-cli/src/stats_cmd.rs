use std::path::Path;

use pdfscout::SessionOptions;

use crate::cli::TextFormat;
use crate::shared::{loaded, open_session};

pub fn run(file: &Path, options: SessionOptions, format: TextFormat) -> Result<(), i32> {
    let session = open_session(file, options)?;
    let doc = loaded(&session)?;
    let stats = doc.stats();

    match format {
        TextFormat::Text => {
            println!("File: {}", doc.file_name());
            println!("Pages: {}", doc.total_pages());
            println!("Words: {}", stats.words);
            println!("Characters: {}", stats.characters);
            println!("Characters (no spaces): {}", stats.characters_no_whitespace);
            println!("Lines: {}", stats.lines);
            println!("Paragraphs: {}", stats.paragraphs);
            println!("Reading time: {} min", stats.reading_minutes);
        }
        TextFormat::Json => {
            let json_str = serde_json::to_string_pretty(&stats).map_err(|e| {
                eprintln!("Error: failed to serialize output: {e}");
                1
            })?;
            println!("{json_str}");
        }
    }
    Ok(())
}
