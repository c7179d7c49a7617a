use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use smart_caret::insert::{InsertDirection, plan_insertion};
use smart_caret::{Command, CommandExecutor, Document, Position, Selection};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        let pad = " ".repeat(i % 7);
        out.push_str(&format!(
            "call_{i:06}({pad}alpha, beta, gamma, delta) = value[{i}]; // smart-caret\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn untriggered_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 48);
    for i in 0..line_count {
        let indent = "\t".repeat(i % 4);
        out.push_str(&format!("{indent}the quick brown fox jumps over the lazy dog\n"));
    }
    out.pop();
    out
}

fn executor_at(text: &str, caret: Position) -> CommandExecutor<Document> {
    let mut document = Document::new(text);
    document.set_carets([caret]).unwrap();
    CommandExecutor::new(document)
}

fn bench_trigger_aligned_inserts(c: &mut Criterion) {
    let text = large_text(10_000);
    // Right after the second comma of line 0.
    let caret = Position::new(0, 25);

    c.bench_function("insert_below/trigger_100_carets", |b| {
        b.iter_batched(
            || executor_at(&text, caret),
            |mut executor| {
                for _ in 0..100 {
                    executor.execute(Command::InsertCaretBelow).unwrap();
                }
                black_box(executor.host().carets().len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_fallback_inserts(c: &mut Criterion) {
    let text = untriggered_text(10_000);
    let caret = Position::new(5_000, 20);

    c.bench_function("insert_above/fallback_100_carets", |b| {
        b.iter_batched(
            || executor_at(&text, caret),
            |mut executor| {
                for _ in 0..100 {
                    executor.execute(Command::InsertCaretAbove).unwrap();
                }
                black_box(executor.host().carets().len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_plan_with_many_carets(c: &mut Criterion) {
    let text = large_text(2_000);
    let lines: Vec<&str> = text.lines().collect();
    let carets: Vec<Selection> = lines[..1_000]
        .iter()
        .enumerate()
        .map(|(line, text)| {
            let column = text.find(", ").map_or(0, |byte| text[..byte].chars().count() + 2);
            Selection::caret(Position::new(line, column))
        })
        .collect();

    c.bench_function("plan_insertion/1000_carets", |b| {
        b.iter(|| {
            let position = plan_insertion(
                lines.as_slice(),
                black_box(&carets),
                InsertDirection::Below,
                4,
            );
            black_box(position);
        })
    });
}

criterion_group!(
    benches,
    bench_trigger_aligned_inserts,
    bench_fallback_inserts,
    bench_plan_with_many_carets
);
criterion_main!(benches);
