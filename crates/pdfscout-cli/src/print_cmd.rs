use std::path::Path;

use pdfscout::{ExportAction, Notice, SessionOptions, print_view, write_print_view};

use crate::shared::{loaded, open_session, select_match};

pub fn run(
    file: &Path,
    options: SessionOptions,
    query: Option<&str>,
    index: Option<usize>,
    output: Option<&Path>,
) -> Result<(), i32> {
    let mut session = open_session(file, options)?;
    if let Some(query) = query {
        select_match(&mut session, query, index)?;
    }
    let doc = loaded(&session)?;
    let search = Some(session.search());

    match output {
        None => {
            print!("{}", print_view(doc, search));
            Ok(())
        }
        Some(path) => {
            let result = write_print_view(doc, search, path);
            let notice = Notice::for_export(ExportAction::Print, &result);
            if let Err(err) = result {
                tracing::debug!(error = %err, "print view failed");
                eprintln!("Error: {}", notice.description);
                return Err(1);
            }
            tracing::info!(path = %path.display(), "{}", notice.description);
            Ok(())
        }
    }
}
