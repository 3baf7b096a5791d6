use std::path::Path;

use pdfscout::{
    Direction, Document, ExtractionWorker, LopdfBackend, ScoutError, Session, SessionOptions,
    UploadOutcome, UploadRequest,
};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks warn, info, or debug.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Session options from the global flags.
pub fn session_options(max_upload_mb: Option<u64>) -> SessionOptions {
    let mut options = SessionOptions::default();
    if let Some(mb) = max_upload_mb {
        options.max_upload_bytes =
            usize::try_from(mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX);
    }
    options
}

/// Print a user-facing error to stderr and return the exit code.
pub fn report(err: ScoutError) -> i32 {
    tracing::debug!(error = %err, "command failed");
    eprintln!("Error: {}", err.user_message());
    1
}

/// Load a PDF into a fresh session with user-friendly error messages.
///
/// Extraction runs on the background worker; returns `Err(1)` with a message
/// printed to stderr if the file is missing, rejected, or unreadable.
pub fn open_session(file: &Path, options: SessionOptions) -> Result<Session, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let request = UploadRequest::from_path(file).map_err(report)?;
    let mut session = Session::new(options);
    let mut worker = ExtractionWorker::new(LopdfBackend::new());
    session.start_upload(request, &mut worker).map_err(report)?;

    match session.wait_for_upload(&mut worker) {
        Some(UploadOutcome::Applied) => Ok(session),
        Some(UploadOutcome::Failed(err)) => Err(report(err)),
        Some(UploadOutcome::Discarded) | None => {
            eprintln!("Error: extraction did not complete");
            Err(1)
        }
    }
}

/// The loaded document of a session returned by [`open_session`].
pub fn loaded(session: &Session) -> Result<&Document, i32> {
    session.document().ok_or_else(|| {
        eprintln!("Error: no document loaded");
        1
    })
}

/// Apply `query` and step to the 1-based match `index`.
pub fn select_match(session: &mut Session, query: &str, index: Option<usize>) -> Result<(), i32> {
    session.set_query(query);
    let Some(index) = index else {
        return Ok(());
    };

    let count = session.search().match_count();
    if count == 0 {
        return Ok(());
    }
    if index == 0 || index > count {
        eprintln!("Error: match index {index} out of range (1-{count})");
        return Err(1);
    }
    for _ in 1..index {
        session.navigate(Direction::Next);
    }
    Ok(())
}

/// Up to `context` characters either side of `start..end`, on one line.
pub fn snippet(text: &str, start: usize, end: usize, context: usize) -> String {
    let before: String = {
        let mut chars: Vec<char> = text[..start].chars().rev().take(context).collect();
        chars.reverse();
        chars.into_iter().collect()
    };
    let after: String = text[end..].chars().take(context).collect();
    format!("{before}[{}]{after}", &text[start..end]).replace('\n', " ")
}

/// 1-based line number of byte `offset`.
pub fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
