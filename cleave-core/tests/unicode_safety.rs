//! Chunk boundaries never split a scalar value

use cleave_core::{LengthFn, Splitter, SplitterOptions};

fn splitter(size: usize, overlap: usize, len_fn: LengthFn) -> Splitter {
    Splitter::new(
        SplitterOptions::builder()
            .chunk_size(size)
            .chunk_overlap(overlap)
            .trim(false)
            .len_fn(len_fn)
            .build()
            .unwrap(),
    )
}

#[test]
fn test_cjk_without_spaces() {
    let text = "これは日本語の文章です。句読点があります。空白はありません。";
    let chunks = splitter(8, 0, LengthFn::chars()).split(text);

    assert_eq!(chunks.concat(), text);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 8);
    }
}

#[test]
fn test_emoji_measured_in_bytes() {
    // Each crab is four bytes
    let text = "🦀🦀🦀 crab 🦀🦀";
    let chunks = splitter(8, 0, LengthFn::bytes()).split(text);

    assert_eq!(chunks.concat(), text);
    for chunk in &chunks {
        assert!(chunk.len() <= 8);
    }
}

#[test]
fn test_characters_wider_than_chunk_are_emitted_alone() {
    let text = "a日b";
    let chunks = splitter(2, 0, LengthFn::bytes()).split(text);
    assert_eq!(chunks, vec!["a", "日", "b"]);
}

#[test]
fn test_combining_marks_and_zero_width_joiners() {
    let text = "e\u{301}te\u{301} 👨\u{200d}👩\u{200d}👧 family";
    let chunks = splitter(3, 0, LengthFn::chars()).split(text);
    assert_eq!(chunks.concat(), text);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 3);
    }
}

#[test]
fn test_overlap_over_multibyte_text() {
    let text = "äöü ßéè ñçå øæœ ÿþð";
    let chunks = splitter(9, 4, LengthFn::chars()).chunks(text);

    assert!(chunks.len() > 1);
    for pair in chunks.windows(2) {
        assert!(text.is_char_boundary(pair[1].start));
        if pair[1].start < pair[0].end() {
            assert!(text[pair[1].start..pair[0].end()].chars().count() <= 4);
        }
    }
    assert_eq!(chunks.last().unwrap().end(), text.len());
}

#[test]
fn test_mixed_scripts_with_markdown() {
    let text = "# 見出し\n\n- 項目一\n- 項目二\n\nΕλληνικά κείμενο. Русский текст.\n";
    let chunks = splitter(10, 3, LengthFn::chars()).split(text);
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(chunk.chars().count() <= 10);
    }
}
