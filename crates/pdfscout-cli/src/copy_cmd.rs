use std::path::Path;

use pdfscout::{ExportAction, Notice, ScoutError, SessionOptions, copy_to_clipboard};

use crate::shared::{loaded, open_session};

/// The OS clipboard, via arboard.
#[cfg(feature = "clipboard")]
struct SystemClipboard(arboard::Clipboard);

#[cfg(all(feature = "clipboard", not(target_os = "linux")))]
impl pdfscout::Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.0.set_text(text).map_err(|e| e.to_string())
    }
}

/// X11 and Wayland drop the contents once their owner exits, so the copy
/// blocks until another application (or a clipboard manager) takes over.
#[cfg(all(feature = "clipboard", target_os = "linux"))]
impl pdfscout::Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        use arboard::SetExtLinux;

        self.0.set().wait().text(text).map_err(|e| e.to_string())
    }
}

/// Printed before a copy that keeps the process alive.
fn hold_hint() -> Option<&'static str> {
    cfg!(all(feature = "clipboard", target_os = "linux")).then_some(
        "Keeping the text on the clipboard until another application takes it over \
         (Ctrl-C discards it)",
    )
}

#[cfg(feature = "clipboard")]
fn system_clipboard() -> Result<SystemClipboard, String> {
    arboard::Clipboard::new()
        .map(SystemClipboard)
        .map_err(|e| e.to_string())
}

/// Stand-in used when the binary is built without clipboard support.
#[cfg(not(feature = "clipboard"))]
struct Unsupported;

#[cfg(not(feature = "clipboard"))]
impl pdfscout::Clipboard for Unsupported {
    fn set_text(&mut self, _text: &str) -> Result<(), String> {
        Err("clipboard support not compiled in; rebuild with --features clipboard".to_string())
    }
}

#[cfg(not(feature = "clipboard"))]
fn system_clipboard() -> Result<Unsupported, String> {
    Ok(Unsupported)
}

pub fn run(file: &Path, options: SessionOptions) -> Result<(), i32> {
    let session = open_session(file, options)?;
    let doc = loaded(&session)?;

    let result = system_clipboard()
        .map_err(|reason| ScoutError::ExportFailed {
            action: ExportAction::Clipboard,
            reason,
        })
        .and_then(|mut clipboard| {
            if let Some(hint) = hold_hint() {
                eprintln!("{hint}");
            }
            copy_to_clipboard(doc, &mut clipboard)
        });
    let notice = Notice::for_export(ExportAction::Clipboard, &result);

    match result {
        Ok(()) => {
            eprintln!("{}", notice.title);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "clipboard copy failed");
            eprintln!("Error: {}: {}", notice.title, notice.description);
            Err(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(feature = "clipboard", target_os = "linux"))]
    #[test]
    fn linux_copy_announces_it_holds_the_clipboard() {
        let hint = hold_hint().unwrap();
        assert!(hint.contains("until another application takes it over"));
    }

    #[cfg(not(all(feature = "clipboard", target_os = "linux")))]
    #[test]
    fn copy_returns_without_holding() {
        assert_eq!(hold_hint(), None);
    }
}
