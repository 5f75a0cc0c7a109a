use marginalia::commands::export::ExportFormat;
use marginalia::config::EngineConfig;
use marginalia::flat::parse_flat_records;
use marginalia::model::{AnnotationTarget, AnnotationType, HighlightColor, NewAnnotation};
use marginalia::{AnnotationEngine, MarginaliaError};

fn engine_with_quotes() -> AnnotationEngine {
    let mut engine = AnnotationEngine::new();
    engine.create(
        NewAnnotation::new(
            "doc-1",
            "reader-1",
            AnnotationTarget::range("p-1", 0, 11, "Call me, \"Ishmael\""),
            AnnotationType::Citation,
            HighlightColor::Yellow,
        )
        .with_content("opening line"),
    );
    engine.create(
        NewAnnotation::new(
            "doc-1",
            "reader-1",
            AnnotationTarget::paragraph("p-2"),
            AnnotationType::Summary,
            HighlightColor::Green,
        )
        .with_content("the voyage begins"),
    );
    engine
}

#[test]
fn test_csv_file_for_document() {
    let engine = engine_with_quotes();
    let file = engine
        .export_file("doc-1", "Moby Dick", ExportFormat::Csv, &engine.export_options())
        .unwrap();

    assert_eq!(file.filename, "Moby Dick-annotations.csv");
    let mut lines = file.content.lines();
    assert_eq!(lines.next(), Some("Type,Content,Note,Color,Created"));
    let citation_row = lines.find(|l| l.starts_with("\"citation\"")).unwrap();
    assert!(citation_row.starts_with("\"citation\",\"Call me, \"\"Ishmael\"\"\",\"opening line\",\"yellow\","));
}

#[test]
fn test_markdown_respects_type_filter() {
    let engine = engine_with_quotes();
    let mut options = engine.export_options();
    options.types = vec![AnnotationType::Summary];

    let file = engine
        .export_file("doc-1", "Moby Dick", ExportFormat::Markdown, &options)
        .unwrap();

    assert!(file.content.starts_with("# Annotations: Moby Dick"));
    assert!(file.content.contains("the voyage begins"));
    assert!(!file.content.contains("Ishmael"));
}

#[test]
fn test_flat_records_from_another_producer() {
    let engine = AnnotationEngine::with_config(EngineConfig::default());
    let records = parse_flat_records(
        r#"[{"type": "note", "content": "margin text", "note_text": "aside", "color": "pink"}]"#,
    )
    .unwrap();

    let csv = engine.export_as_csv(&records, &engine.export_options());
    assert!(csv.contains("\"note\",\"margin text\",\"aside\",\"pink\""));
}

#[test]
fn test_import_rejects_malformed_json() {
    let mut engine = engine_with_quotes();
    let err = engine.import_from_json("{not json").unwrap_err();
    assert!(matches!(err, MarginaliaError::Parse(_)));
    assert_eq!(engine.store().len(), 2);
}
