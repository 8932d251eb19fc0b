use surround_core::{MemoryBuffer, MemorySelection, Position, SurroundEngine};

fn main() {
    let mut buffer = MemoryBuffer::new("# Notes\nrust is fun");

    // Toggle bold around "rust" on the second line.
    let mut selection = MemorySelection::inline(Position::new(2, 1), Position::new(2, 4));
    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.bold().unwrap();
    assert_eq!(buffer.text(), "# Notes\n**rust** is fun");

    // The marks now cover "**rust**"; toggling again strips the markers.
    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.bold().unwrap();
    assert_eq!(buffer.text(), "# Notes\nrust is fun");

    // A linewise selection turns `code()` into a fenced block.
    let mut selection = MemorySelection::linewise(2, 2);
    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    engine.code().unwrap();
    assert_eq!(buffer.text(), "# Notes\n```\nrust is fun\n```");

    // Links ask a prompt collaborator for the target.
    let mut selection = MemorySelection::inline(Position::new(1, 3), Position::new(1, 7));
    let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
    let mut prompt = || Some("https://example.com".to_string());
    engine.link(&mut prompt).unwrap();
    assert_eq!(
        buffer.text(),
        "# [Notes](https://example.com)\n```\nrust is fun\n```"
    );

    println!("{}", buffer.text());
}
