//! Export of annotations to JSON (lossless), Markdown and CSV (human-facing).
//!
//! JSON writes the full [`Annotation`] record shape and is the counterpart of
//! [`crate::commands::import`]. Markdown and CSV render [`FlatAnnotation`]s and apply the
//! same type/color selection as [`crate::commands::filter`] before rendering.
//!
//! File exports come back as [`ExportFile`]; writing them anywhere is the caller's job.

use crate::config::ExportConfig;
use crate::error::Result;
use crate::flat::{flatten, FlatAnnotation};
use crate::model::{Annotation, AnnotationType, HighlightColor};
use crate::store::AnnotationStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Markdown,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub content: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Only these types; empty keeps all.
    pub types: Vec<AnnotationType>,
    /// Only these colors; empty keeps all.
    pub colors: Vec<HighlightColor>,
    pub include_notes: bool,
    pub include_color: bool,
    pub include_timestamps: bool,
    pub pretty_json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            types: Vec::new(),
            colors: Vec::new(),
            include_notes: config.include_notes,
            include_color: config.include_color,
            include_timestamps: config.include_timestamps,
            pretty_json: config.pretty_json,
        }
    }
}

impl ExportOptions {
    fn selects(&self, record: &FlatAnnotation) -> bool {
        if !self.types.is_empty() && !self.types.contains(&record.annotation_type) {
            return false;
        }
        if !self.colors.is_empty() {
            match &record.color {
                Some(color) if self.colors.contains(color) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Serializes the annotations of `document_id` (or all of them), oldest first.
pub fn export_to_json(store: &AnnotationStore, document_id: Option<&str>, pretty: bool) -> Result<String> {
    let annotations: Vec<&Annotation> = match document_id {
        Some(id) => store.by_document(id),
        None => store.all(),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&annotations)?
    } else {
        serde_json::to_string(&annotations)?
    };
    Ok(json)
}

/// One `##` section per type, each annotation as a quote with optional note, color and
/// timestamp, separated by horizontal rules.
pub fn export_as_markdown(records: &[FlatAnnotation], title: &str, options: &ExportOptions) -> String {
    let mut out = format!("# Annotations: {}\n\n", title);

    let mut sections: BTreeMap<&AnnotationType, Vec<&FlatAnnotation>> = BTreeMap::new();
    for record in records.iter().filter(|r| options.selects(r)) {
        sections.entry(&record.annotation_type).or_default().push(record);
    }

    if sections.is_empty() {
        out.push_str("_No annotations._\n");
        return out;
    }

    for (kind, entries) in sections {
        out.push_str(&format!("## {}\n\n", kind.label()));
        for record in entries {
            for line in record.text.lines() {
                out.push_str(&format!("> {}\n", line));
            }
            if record.text.is_empty() {
                out.push_str(">\n");
            }
            out.push('\n');

            if options.include_notes {
                if let Some(note) = record.note.as_deref().filter(|n| !n.trim().is_empty()) {
                    out.push_str(&format!("**Note:** {}\n\n", note));
                }
            }
            if options.include_color {
                if let Some(color) = &record.color {
                    out.push_str(&format!("*Color: {}*\n\n", color));
                }
            }
            if options.include_timestamps {
                if let Some(created) = record.created_at {
                    out.push_str(&format!("*Created: {}*\n\n", created.format("%Y-%m-%d %H:%M UTC")));
                }
            }
            out.push_str("---\n\n");
        }
    }

    out
}

/// Quoted CSV with `""` escaping. `Color` and `Created` columns follow the options;
/// missing values render as empty cells.
pub fn export_as_csv(records: &[FlatAnnotation], options: &ExportOptions) -> String {
    let mut header = vec!["Type", "Content", "Note"];
    if options.include_color {
        header.push("Color");
    }
    if options.include_timestamps {
        header.push("Created");
    }

    let mut lines = vec![header.join(",")];
    for record in records.iter().filter(|r| options.selects(r)) {
        let mut cells = vec![
            quote(record.annotation_type.as_str()),
            quote(&record.text),
            quote(record.note.as_deref().unwrap_or_default()),
        ];
        if options.include_color {
            cells.push(quote(record.color.as_ref().map(HighlightColor::as_str).unwrap_or_default()));
        }
        if options.include_timestamps {
            let created = record.created_at.map(|c| c.to_rfc3339()).unwrap_or_default();
            cells.push(quote(&created));
        }
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders one document's annotations in `format`, named by [`export_filename`].
pub fn export_file(
    store: &AnnotationStore,
    document_id: &str,
    document_title: &str,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<ExportFile> {
    let content = match format {
        ExportFormat::Json => export_to_json(store, Some(document_id), options.pretty_json)?,
        ExportFormat::Markdown => {
            let records = flatten(&store.by_document(document_id));
            export_as_markdown(&records, document_title, options)
        }
        ExportFormat::Csv => export_as_csv(&flatten(&store.by_document(document_id)), options),
    };
    Ok(ExportFile {
        content,
        filename: export_filename(document_title, format),
    })
}

/// `<title>-annotations.<ext>`, where the title is sanitized first: characters other
/// than letters, digits, spaces, `-` and `_` become `_`, and surrounding whitespace is
/// trimmed. A title that sanitizes to nothing becomes `document`.
pub fn export_filename(document_title: &str, format: ExportFormat) -> String {
    let safe_title = sanitize_filename(document_title);
    let stem = if safe_title.is_empty() {
        "document"
    } else {
        safe_title.as_str()
    };
    format!("{}-annotations.{}", stem, format.extension())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}
