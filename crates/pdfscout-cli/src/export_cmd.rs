use std::path::Path;

use pdfscout::{ExportAction, Notice, SessionOptions, write_download};

use crate::shared::{loaded, open_session};

pub fn run(file: &Path, options: SessionOptions, out_dir: Option<&Path>) -> Result<(), i32> {
    let session = open_session(file, options)?;
    let doc = loaded(&session)?;

    let result = write_download(doc, out_dir.unwrap_or(Path::new(".")));
    let notice = Notice::for_export(ExportAction::Download, &result);
    match result {
        Ok(path) => {
            tracing::info!("{}", notice.description);
            println!("{}", path.display());
            Ok(())
        }
        Err(err) => {
            tracing::debug!(error = %err, "download failed");
            eprintln!("Error: {}", notice.description);
            Err(1)
        }
    }
}
