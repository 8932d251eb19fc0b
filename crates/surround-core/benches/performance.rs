use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use surround_core::{
    BlockSpan, MemoryBuffer, MemorySelection, Position, SurroundEngine, TextBuffer,
};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (surround-core benchmark line)\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_block_toggle_tall_rectangle(c: &mut Criterion) {
    let text = large_text(2_000);
    c.bench_function("block_toggle/2k_lines", |b| {
        b.iter_batched(
            || {
                let buffer = MemoryBuffer::new(&text);
                let selection = MemorySelection::block(BlockSpan {
                    start_line: 1,
                    end_line: 2_000,
                    left_col: 8,
                    right_col: 24,
                });
                (buffer, selection)
            },
            |(mut buffer, mut selection)| {
                let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
                engine.bold().unwrap();
                black_box(buffer.line_count());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_inline_toggle_deep_in_large_buffer(c: &mut Criterion) {
    let text = large_text(10_000);
    let mut buffer = MemoryBuffer::new(&text);
    let mut selection =
        MemorySelection::inline(Position::new(5_000, 8), Position::new(5_000, 24));

    c.bench_function("inline_toggle/10k_line_buffer", |b| {
        b.iter(|| {
            // Each iteration flips the toggle; both directions are measured.
            let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
            black_box(engine.bold().unwrap());
        })
    });
}

fn bench_fence_toggle(c: &mut Criterion) {
    let text = large_text(1_000);
    c.bench_function("fence_toggle/200_line_selection", |b| {
        b.iter_batched(
            || {
                let buffer = MemoryBuffer::new(&text);
                let selection = MemorySelection::linewise(400, 599);
                (buffer, selection)
            },
            |(mut buffer, mut selection)| {
                let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
                engine.code().unwrap();
                black_box(buffer.line_count());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_block_toggle_tall_rectangle,
    bench_inline_toggle_deep_in_large_buffer,
    bench_fence_toggle
);
criterion_main!(benches);
