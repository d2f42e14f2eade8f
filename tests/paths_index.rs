//! Navigation Index Integration Tests
//!
//! Tests for per-locale and combined path generation, locale discovery,
//! and the missing content root failure.

use std::path::Path;

use content_indexer::{Generator, IndexError, LocaleSource, OutputMode, ResolvedConfig};
use tempfile::TempDir;

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "---\ntitle: t\n---\nbody\n").unwrap();
}

fn seed(base: &Path) {
    let content = base.join("content");
    write(&content, "seerah/en/early-life.mdx");
    write(&content, "seerah/en/birth.mdx");
    write(&content, "quiz/en/quiz-1.mdx");
    write(&content, "glossary/ar/hijra.mdx");
    write(&content, "timeline/en/610-event-2.mdx");
    write(&content, "timeline/en/610-event-10.mdx");
    write(&content, "timeline/en/610-event-1.mdx");
    write(&content, "timeline/en/570-event-1.mdx");
    write(&content, "timeline/en/notes.mdx");
    write(&content, "timeline/en/abc-event-1.mdx");
    write(&content, "timeline/fr/1-event-1.mdx");
}

#[tokio::test]
async fn test_per_locale_files() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    let config = ResolvedConfig::with_base(temp.path());

    let report = Generator::new(config).generate_paths().await.unwrap();
    assert_eq!(report.files.len(), 4);

    let en = std::fs::read_to_string(temp.path().join("paths/en.json")).unwrap();
    let expected = r#"{
  "seerah": [
    "birth",
    "early-life"
  ],
  "quiz": [
    "quiz-1"
  ],
  "glossary": [],
  "references": [],
  "timeline": {
    "570": [
      "570-event-1"
    ],
    "610": [
      "610-event-1",
      "610-event-2",
      "610-event-10"
    ]
  }
}"#;
    assert_eq!(en, expected);

    // Locales without content still get a file with every key present
    let bn: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp.path().join("paths/bn.json")).unwrap())
            .unwrap();
    assert_eq!(
        bn,
        serde_json::json!({
            "seerah": [], "quiz": [], "glossary": [], "references": [], "timeline": {}
        })
    );

    // fr is not in the allow-list
    assert!(!temp.path().join("paths/fr.json").exists());
}

#[tokio::test]
async fn test_combined_with_discovery() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    let mut config = ResolvedConfig::with_base(temp.path());
    config.output_mode = OutputMode::Combined;
    config.locale_source = LocaleSource::Discover;

    let report = Generator::new(config).generate_paths().await.unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].path, temp.path().join("paths/index.json"));

    let combined: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp.path().join("paths/index.json")).unwrap(),
    )
    .unwrap();
    let locales: Vec<_> = combined.as_object().unwrap().keys().cloned().collect();
    assert_eq!(locales, ["ar", "en"]);
    assert_eq!(combined["ar"]["glossary"], serde_json::json!(["hijra"]));
    assert_eq!(
        combined["en"]["timeline"]["610"],
        serde_json::json!(["610-event-1", "610-event-2", "610-event-10"])
    );
}

#[tokio::test]
async fn test_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    let generator = Generator::new(ResolvedConfig::with_base(temp.path()));

    generator.generate_paths().await.unwrap();
    let first = std::fs::read(temp.path().join("paths/en.json")).unwrap();
    generator.generate_paths().await.unwrap();
    let second = std::fs::read(temp.path().join("paths/en.json")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_stale_output_is_overwritten() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());
    std::fs::create_dir_all(temp.path().join("paths")).unwrap();
    std::fs::write(
        temp.path().join("paths/en.json"),
        r#"{"seerah":["removed-page"],"extra":true}"#,
    )
    .unwrap();

    Generator::new(ResolvedConfig::with_base(temp.path()))
        .generate_paths()
        .await
        .unwrap();

    let en = std::fs::read_to_string(temp.path().join("paths/en.json")).unwrap();
    assert!(!en.contains("removed-page"));
    assert!(!en.contains("extra"));
}

#[tokio::test]
async fn test_missing_content_root() {
    let temp = TempDir::new().unwrap();
    let config = ResolvedConfig::with_base(temp.path());

    let err = Generator::new(config).generate_paths().await.unwrap_err();
    assert!(matches!(err, IndexError::MissingContentRoot(_)));
    assert!(!temp.path().join("paths").exists());
}
