//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): hits as `name: score` followed by their lines
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use docfinder_core::Error;
use serde_json::json;

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "error": err.to_string(),
            "code": err.code(),
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Hits(hits) if hits.is_empty() => "(no matches)".to_string(),
        Output::Hits(hits) => hits
            .iter()
            .map(|hit| hit.to_string())
            .collect::<String>()
            .trim_end_matches('\n')
            .to_string(),
        Output::Words(words) if words.is_empty() => "(empty list)".to_string(),
        Output::Words(words) => words.join("\n"),
        Output::Content { content, .. } => content.trim_end_matches('\n').to_string(),
        Output::Indexed(names) => format!("(indexed) {}", names.join(", ")),
        Output::Done => "OK".to_string(),
    }
}

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Hits(hits) => json!(hits),
        Output::Words(words) => json!(words),
        Output::Content { name, content } => json!({ "name": name, "content": content }),
        Output::Indexed(names) => json!({ "indexed": names }),
        Output::Done => json!({ "ok": true }),
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
