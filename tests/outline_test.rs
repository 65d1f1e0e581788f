use page_outline::{DocumentSource, Error, OutlineConfig, OutputFormat, StructureExtractor};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ARCHIVED: &str = r#"<!DOCTYPE html>
<html>
<head><title>Archive</title></head>
<body>
<div class="page cover">
  <h1>Blue Mountain</h1>
  <img src="images/cover.jpg" alt="cover">
</div>
<div class="page">
  <h2>TABLE OF CONTENTS</h2>
</div>
<div class="page">
  <h2>Welcome</h2>
  <h3>From the <em>Board</em></h3>
</div>
</body>
</html>
"#;

const CURRENT: &str = r#"<html><body>
<div class="page-break"></div>
<div class="paper-page">
  <h1>Blue Mountain</h1>
  <img src="images/cover.jpg"><img src="images/logo.png"/>
</div>
<div class="paper-page">
  <p>Intentionally blank</p>
</div>
<div class="paper-page">
  <h2>Fire Safety</h2>
</div>
</body></html>
"#;

fn write_docs(dir: &TempDir) -> OutlineConfig {
    let archived = dir.path().join("archives").join("5th-Attempt-With-Pictures.html");
    fs::create_dir_all(archived.parent().unwrap()).unwrap();
    fs::write(&archived, ARCHIVED).unwrap();

    let current = dir.path().join("bmpoa-print-optimized.html");
    fs::write(&current, CURRENT).unwrap();

    OutlineConfig {
        documents: vec![
            DocumentSource::new("ARCHIVED FILE", archived),
            DocumentSource::new("CURRENT FILE", current),
        ],
        ..OutlineConfig::default()
    }
}

#[test]
fn test_text_report_for_both_documents() {
    let dir = TempDir::new().unwrap();
    let config = write_docs(&dir);

    let mut out = Vec::new();
    page_outline::run(&config, OutputFormat::Text, &mut out).unwrap();

    let expected = "\
=== ARCHIVED FILE (5th-Attempt-With-Pictures.html) ===

Page 1:
- Blue Mountain
  Images: 1 image(s)

Page 3:
  - Welcome
    - From the Board


=== CURRENT FILE (bmpoa-print-optimized.html) ===

Page 1:
- Blue Mountain
  Images: 2 image(s)

Page 3:
  - Fire Safety
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_json_report() {
    let dir = TempDir::new().unwrap();
    let config = write_docs(&dir);

    let mut out = Vec::new();
    page_outline::run(&config, OutputFormat::Json, &mut out).unwrap();

    let reports: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&out)
        .into_iter::<serde_json::Value>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["label"], "ARCHIVED FILE");
    assert_eq!(reports[1]["pages"][0]["images"][1], "images/logo.png");
    assert_eq!(reports[1]["pages"][1]["label"], "Page 3");
}

#[test]
fn test_missing_document_stops_run() {
    let dir = TempDir::new().unwrap();
    let mut config = write_docs(&dir);
    config.documents[0].path = dir.path().join("gone.html");

    let mut out = Vec::new();
    let err = page_outline::run(&config, OutputFormat::Text, &mut out).unwrap_err();

    match err {
        Error::Io { path, .. } => assert!(path.ends_with("gone.html")),
        other => panic!("unexpected error: {other}"),
    }
    // The banner is printed before the read fails, and the second document is never reached
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "=== ARCHIVED FILE (gone.html) ===\n"
    );
}

#[test]
fn test_document_without_markers_prints_banner_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.html");
    fs::write(&path, "<html><h1>No pages</h1><img src=\"x.png\"></html>").unwrap();

    let config = OutlineConfig {
        documents: vec![DocumentSource::new("PLAIN FILE", &path)],
        ..OutlineConfig::default()
    };

    let mut out = Vec::new();
    page_outline::run(&config, OutputFormat::Text, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "=== PLAIN FILE (plain.html) ===\n");
}

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("outline.json");
    fs::write(
        &config_path,
        r#"{ "documents": [{ "label": "ONLY", "path": "only.html" }], "page_markers": ["<section>"] }"#,
    )
    .unwrap();

    let config = OutlineConfig::from_file(&config_path).unwrap();
    assert_eq!(config.documents[0].path, Path::new("only.html"));

    let extractor = StructureExtractor::new(&config).unwrap();
    let structure = extractor.extract("<section><h1>A</h1><section><h2>B</h2>");
    assert_eq!(structure.labels(), vec!["Page 1", "Page 2"]);
}

#[test]
fn test_crlf_document_matches_lf_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("windows.html");
    fs::write(
        &path,
        "<div class=\"paper-page\">\r\n<h1>Blue Mountain<br>\r\nOwners</h1>\r\n<h2>Old\rMac</h2>\r\n",
    )
    .unwrap();

    let structure = StructureExtractor::default().extract_file(&path).unwrap();
    let headings = &structure.get("Page 1").unwrap().headings;
    assert_eq!(headings[0].text, "Blue Mountain\nOwners");
    assert_eq!(headings[1].text, "Old\nMac");

    let config = OutlineConfig {
        documents: vec![DocumentSource::new("CURRENT FILE", &path)],
        ..OutlineConfig::default()
    };
    let mut out = Vec::new();
    page_outline::run(&config, OutputFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains('\r'));
    assert!(text.contains("- Blue Mountain\nOwners\n"));
}
