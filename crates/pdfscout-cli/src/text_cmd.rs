use std::path::Path;

use pdfscout::SessionOptions;

use crate::cli::TextFormat;
use crate::shared::{loaded, open_session};

pub fn run(
    file: &Path,
    options: SessionOptions,
    raw: bool,
    format: TextFormat,
) -> Result<(), i32> {
    let session = open_session(file, options)?;
    let doc = loaded(&session)?;
    let text = if raw { doc.formatted_text() } else { doc.text() };

    match format {
        TextFormat::Text => {
            println!("{text}");
        }
        TextFormat::Json => {
            let value = serde_json::json!({
                "file_name": doc.file_name(),
                "total_pages": doc.total_pages(),
                "pages_with_text": doc.pages_with_text(),
                "reflowed": !raw,
                "text": text,
            });
            let json_str = serde_json::to_string_pretty(&value).map_err(|e| {
                eprintln!("Error: failed to serialize output: {e}");
                1
            })?;
            println!("{json_str}");
        }
    }
    Ok(())
}
