//! Source files split along language keywords

use cleave_core::{segment, CodeLanguage, Route, SegmentOptions, Splitter, SplitterOptions};

fn code_splitter(language: CodeLanguage, size: usize) -> Splitter {
    Splitter::for_language(
        SplitterOptions::builder().chunk_size(size).build().unwrap(),
        language,
    )
}

#[test]
fn test_python_classes_stay_whole() {
    let text = "class A:\n    def f(self):\n        pass\n\nclass B:\n    pass\n";
    assert_eq!(
        code_splitter(CodeLanguage::Python, 40).split(text),
        vec![
            "class A:\n    def f(self):\n        pass",
            "class B:\n    pass",
        ]
    );
}

#[test]
fn test_markdown_looking_code_is_not_parsed_as_markup() {
    // Python comments look like headings, list markers like bullets
    let text = "# config\n- not a list\nx = 1\n";
    let splitter = code_splitter(CodeLanguage::Python, 100);
    assert_eq!(splitter.route(text), Route::Lexical);
}

#[test]
fn test_segment_uses_file_extension() {
    let text = "package main\n\nfunc a() {\n}\n\nfunc b() {\n}\n";
    let options = SegmentOptions::with_length(20).file_name("cmd/main.go");
    let segments: Vec<String> = segment(text, &options)
        .unwrap()
        .into_iter()
        .map(|s| s.text)
        .collect();

    assert!(segments.iter().any(|s| s.starts_with("func a()")));
    assert!(segments.iter().any(|s| s.starts_with("func b()")));
}

#[test]
fn test_every_language_splits_within_limit() {
    let text = "import x\n\nclass Widget {\n  fn run() { let value = compute(1, 2); }\n}\n\nfunction helper() {\n  return value;\n}\n";
    for language in CodeLanguage::ALL {
        let chunks = code_splitter(language, 24).split(text);
        assert!(!chunks.is_empty(), "{} produced nothing", language.name());
        for chunk in &chunks {
            assert!(
                chunk.chars().count() <= 24,
                "{}: {chunk:?} exceeds limit",
                language.name()
            );
        }
    }
}

#[test]
fn test_unknown_extension_falls_back_to_classification() {
    let options = SegmentOptions::with_length(100).file_name("notes.txt");
    assert_eq!(options.language(), None);
    let segments = segment("Plain words only.", &options).unwrap();
    assert_eq!(segments.len(), 1);
}
