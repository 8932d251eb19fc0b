use surround_core::{
    LinkPrompt, MemoryBuffer, MemorySelection, Position, SurroundEngine, SurroundError, Toggle,
};

/// Prompt that records how often it was asked.
struct CountingPrompt {
    url: Option<String>,
    asked: usize,
}

impl CountingPrompt {
    fn new(url: Option<&str>) -> Self {
        Self {
            url: url.map(|u| u.to_string()),
            asked: 0,
        }
    }
}

impl LinkPrompt for CountingPrompt {
    fn request_url(&mut self) -> Option<String> {
        self.asked += 1;
        self.url.clone()
    }
}

#[test]
fn test_link_wraps_selection() {
    let mut buffer = MemoryBuffer::new("text");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 4));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = CountingPrompt::new(Some("http://x"));
    assert_eq!(engine.link(&mut prompt).unwrap(), Toggle::Added);
    assert_eq!(buffer.text(), "[text](http://x)");
    assert_eq!(prompt.asked, 1);
    assert_eq!(
        selection.marks(),
        Some((Position::new(1, 1), Position::new(1, 16)))
    );
}

#[test]
fn test_cancelled_prompt_is_a_no_op() {
    let mut buffer = MemoryBuffer::new("text");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 4));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = CountingPrompt::new(None);
    assert_eq!(engine.link(&mut prompt), Err(SurroundError::PromptCancelled));
    assert_eq!(buffer.text(), "text");
    assert_eq!(prompt.asked, 1);
    // Marks are untouched too.
    assert_eq!(
        selection.marks(),
        Some((Position::new(1, 1), Position::new(1, 4)))
    );
}

#[test]
fn test_link_is_never_auto_removed() {
    let mut buffer = MemoryBuffer::new("text");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 4));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = CountingPrompt::new(Some("http://x"));
    engine.link(&mut prompt).unwrap();

    // Re-invoking on the reselected span wraps again instead of stripping
    // the (now stale) wrapper.
    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = CountingPrompt::new(Some("http://y"));
    assert_eq!(engine.link(&mut prompt).unwrap(), Toggle::Added);
    assert_eq!(buffer.text(), "[[text](http://x)](http://y)");
}

#[test]
fn test_link_without_selection_never_prompts() {
    let mut buffer = MemoryBuffer::new("text");
    let mut selection = MemorySelection::empty();

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = CountingPrompt::new(Some("http://x"));
    assert_eq!(engine.link(&mut prompt), Err(SurroundError::NoSelection));
    assert_eq!(prompt.asked, 0);
    assert_eq!(buffer.text(), "text");
}

#[test]
fn test_closure_prompt() {
    let mut buffer = MemoryBuffer::new("docs");
    let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 4));

    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = || Some("https://docs.rs".to_string());
    engine.link(&mut prompt).unwrap();
    assert_eq!(buffer.text(), "[docs](https://docs.rs)");
}
