use std::path::Path;

/// One entry of the persisted diagnostic trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    pub section: String,
    pub content: String,
}

impl TraceRecord {
    pub fn new(section: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            content: content.into(),
        }
    }
}

/// Renders the records as a JSON array of `{"section", "content"}`
/// objects. Written by hand since nothing else in the crate needs a
/// serialization framework.
pub fn to_json(records: &[TraceRecord]) -> String {
    let mut out = String::from("[");

    for (idx, record) in records.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }

        out.push_str("\n  {\"section\": ");
        push_json_string(&mut out, &record.section);
        out.push_str(", \"content\": ");
        push_json_string(&mut out, &record.content);
        out.push('}');
    }

    if !records.is_empty() {
        out.push('\n');
    }
    out.push(']');
    out.push('\n');

    out
}

pub fn write_trace(path: &Path, records: &[TraceRecord]) -> std::io::Result<()> {
    std::fs::write(path, to_json(records))
}

fn push_json_string(out: &mut String, value: &str) {
    out.push('"');

    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }

    out.push('"');
}
