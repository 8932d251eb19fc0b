use surround_core::{MemoryBuffer, MemorySelection, Position, SurroundEngine, Toggle};

#[test]
fn test_italic_around_cafe() {
    // "café" is 4 characters, 5 bytes; the end mark sits on the leading
    // byte of "é".
    let mut buffer = MemoryBuffer::new("café");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 4));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.italic().unwrap();
    assert_eq!(buffer.text(), "_café_");

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    assert_eq!(engine.italic().unwrap(), Toggle::Removed);
    assert_eq!(buffer.text(), "café");
}

#[test]
fn test_end_mark_on_continuation_byte() {
    // Column 5 addresses the second byte of "é"; the edit still lands on
    // the character boundary.
    let mut buffer = MemoryBuffer::new("café");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 5));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.italic().unwrap();
    assert_eq!(buffer.text(), "_café_");
}

#[test]
fn test_start_mark_mid_character_snaps_back() {
    // Column 4 addresses the second byte of "ï" (bytes 3..=4).
    let mut buffer = MemoryBuffer::new("naïve");
    let mut selection = MemorySelection::inline(Position::new(1, 4), Position::new(1, 6));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.bold().unwrap();
    assert_eq!(buffer.text(), "na**ïve**");
}

#[test]
fn test_cjk_three_byte_characters() {
    let mut buffer = MemoryBuffer::new("说 你好 吧");
    // "你好" occupies bytes 5..=10.
    let mut selection = MemorySelection::inline(Position::new(1, 5), Position::new(1, 8));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.bold().unwrap();
    assert_eq!(buffer.text(), "说 **你好** 吧");
}

#[test]
fn test_emoji_four_byte_character() {
    let mut buffer = MemoryBuffer::new("😀ok");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 1));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.bold().unwrap();
    assert_eq!(buffer.text(), "**😀**ok");
}

#[test]
fn test_multi_line_multibyte_edges() {
    let mut buffer = MemoryBuffer::new("naïve\nrésumé");
    // Start mid-"ï", end on the leading byte of the final "é".
    let mut selection = MemorySelection::inline(Position::new(1, 4), Position::new(2, 7));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.bold().unwrap();
    assert_eq!(buffer.text(), "na**ïve\nrésumé**");

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    assert_eq!(engine.bold().unwrap(), Toggle::Removed);
    assert_eq!(buffer.text(), "naïve\nrésumé");
}
