use std::path::Path;

use pdfscout::{Segment, SessionOptions, render_marked};

use crate::cli::SearchFormat;
use crate::shared::{line_of, loaded, open_session, select_match, snippet};

pub fn run(
    file: &Path,
    options: SessionOptions,
    query: &str,
    index: Option<usize>,
    format: SearchFormat,
    context: usize,
) -> Result<(), i32> {
    let mut session = open_session(file, options)?;
    select_match(&mut session, query, index)?;
    let doc = loaded(&session)?;
    let search = session.search();
    let view = search.annotate(doc.text());
    let text = doc.text();

    match format {
        SearchFormat::Text => {
            println!("{}", search.position_label());
            for segment in view.matches() {
                if let Segment::Match {
                    start,
                    end,
                    ordinal,
                    active,
                } = *segment
                {
                    println!(
                        "{}{}\tline {}\t{}",
                        if active { "> " } else { "  " },
                        ordinal + 1,
                        line_of(text, start),
                        snippet(text, start, end, context),
                    );
                }
            }
        }
        SearchFormat::Json => {
            let matches: Vec<_> = view
                .matches()
                .filter_map(|segment| match *segment {
                    Segment::Match {
                        start,
                        end,
                        ordinal,
                        active,
                    } => Some(serde_json::json!({
                        "index": ordinal,
                        "start": start,
                        "end": end,
                        "line": line_of(text, start),
                        "text": &text[start..end],
                        "active": active,
                    })),
                    Segment::Plain { .. } => None,
                })
                .collect();
            let value = serde_json::json!({
                "query": search.query(),
                "match_count": search.match_count(),
                "current": search.current(),
                "label": search.position_label(),
                "matches": matches,
            });
            let json_str = serde_json::to_string_pretty(&value).map_err(|e| {
                eprintln!("Error: failed to serialize output: {e}");
                1
            })?;
            println!("{json_str}");
        }
        SearchFormat::Html => {
            println!("{}", render_marked(text, &view));
        }
    }
    Ok(())
}
