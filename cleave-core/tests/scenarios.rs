//! End-to-end scenarios through the public API

use cleave_core::{
    classify, is_markup, segment, Indicator, Route, SegmentOptions, Splitter, SplitterOptions,
};

fn splitter(size: usize, trim: bool) -> Splitter {
    Splitter::new(
        SplitterOptions::builder()
            .chunk_size(size)
            .trim(trim)
            .build()
            .unwrap(),
    )
}

#[test]
fn test_short_document_is_one_chunk() {
    let text = "# Title\n\nThis is a paragraph.";
    assert_eq!(
        splitter(50, true).split(text),
        vec!["# Title\n\nThis is a paragraph."]
    );
}

#[test]
fn test_prose_breaks_at_strongest_boundary() {
    let text = "Mr. Fox jumped.\n[...]\r\n\r\nThe dog was too lazy. It just sat there.";
    assert_eq!(
        splitter(18, false).split(text),
        vec![
            "Mr. Fox jumped.\n",
            "[...]\r\n\r\n",
            "The dog was too ",
            "lazy. ",
            "It just sat there.",
        ]
    );
}

#[test]
fn test_empty_document() {
    assert!(splitter(10, true).split("").is_empty());
    assert!(segment("", &SegmentOptions::default()).unwrap().is_empty());
}

#[test]
fn test_whitespace_document() {
    assert!(splitter(10, true).split("   \n\n   ").is_empty());
    assert!(splitter(10, false).split("   \n\n   ").is_empty());
}

#[test]
fn test_indented_list_items() {
    let text = "* Really long list item that is too big to fit\n\n  * Some Indented Text\n\n  * More Indented Text\n\n";
    assert_eq!(
        splitter(48, true).split(text),
        vec![
            "* Really long list item that is too big to fit",
            "* Some Indented Text\n\n  * More Indented Text",
        ]
    );
}

#[test]
fn test_markup_classification() {
    assert!(is_markup("# Heading\n\n- List"));
    assert!(!is_markup("# Just one heading"));

    let classification = classify("# Heading\n\n- List");
    assert_eq!(
        classification.indicators(),
        &[Indicator::AtxHeading, Indicator::List]
    );
}

#[test]
fn test_routes_follow_classification() {
    let splitter = splitter(100, true);
    assert_eq!(splitter.route("# Heading\n\n- List"), Route::Structural);
    assert_eq!(splitter.route("# Just one heading"), Route::Lexical);
}

#[test]
fn test_segment_trims_by_default() {
    let text = "Mr. Fox jumped.\n[...]\r\n\r\nThe dog was too lazy. It just sat there.";
    let segments: Vec<String> = segment(text, &SegmentOptions::with_length(18))
        .unwrap()
        .into_iter()
        .map(|s| s.text)
        .collect();
    assert_eq!(
        segments,
        vec![
            "Mr. Fox jumped.",
            "[...]",
            "The dog was too",
            "lazy.",
            "It just sat there.",
        ]
    );
}

#[test]
fn test_invalid_configuration_is_rejected_before_work() {
    assert!(SplitterOptions::builder().chunk_size(0).build().is_err());
    assert!(SplitterOptions::builder()
        .chunk_size(5)
        .chunk_overlap(7)
        .build()
        .is_err());
    assert!(segment("some text", &SegmentOptions::with_length(4).overlap(4)).is_err());
}

#[test]
fn test_overlap_repeats_tail_of_previous_chunk() {
    let splitter = Splitter::new(
        SplitterOptions::builder()
            .chunk_size(20)
            .chunk_overlap(8)
            .build()
            .unwrap(),
    );
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let chunks = splitter.split(text);

    assert!(chunks.len() > 2);
    for pair in chunks.windows(2) {
        let last_word = pair[0].split_whitespace().last().unwrap();
        assert!(
            pair[1].starts_with(last_word),
            "{:?} should start with {:?}",
            pair[1],
            last_word
        );
    }
}
