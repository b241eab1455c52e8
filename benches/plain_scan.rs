use criterion::{black_box, criterion_group, criterion_main, Criterion};
use yaml_plain::{Node, ParseContext, PlainValue};

fn folded_paragraph(lines: usize) -> String {
    let mut src = String::from("summary: ");
    for idx in 0..lines {
        if idx > 0 {
            src.push_str("\n  ");
        }
        if idx % 7 == 6 {
            src.push('\n');
            src.push_str("  ");
        }
        src.push_str("lorem ipsum dolor sit amet consectetur adipiscing elit");
    }
    src.push_str(" # trailing\nnext: value\n");
    src
}

fn flow_sequence(items: usize) -> String {
    let mut src = String::from("[");
    for idx in 0..items {
        if idx > 0 {
            src.push_str(", ");
        }
        src.push_str("item:");
        src.push_str(&idx.to_string());
    }
    src.push(']');
    src
}

fn bench_block_scalar(c: &mut Criterion) {
    let src = folded_paragraph(200);
    let context = ParseContext::new(&src).with_indent(2);

    let mut group = c.benchmark_group("block_scalar");
    group.bench_function("parse", |b| {
        b.iter(|| {
            let mut node = PlainValue::new();
            let end = node.parse(black_box(&context), 9);
            black_box((node.value_range(), end));
        });
    });
    let mut parsed = PlainValue::new();
    parsed.parse(&context, 9);
    group.bench_function("str_value", |b| {
        b.iter(|| {
            let value = black_box(&parsed).str_value().expect("parsed");
            black_box(value);
        });
    });
    group.finish();
}

fn bench_flow_items(c: &mut Criterion) {
    let src = flow_sequence(1_000);
    let context = ParseContext::new(&src).with_in_flow(true);

    c.bench_function("flow_items", |b| {
        b.iter(|| {
            let mut offset = 1;
            let mut count = 0;
            while offset < src.len() {
                let mut node = PlainValue::new();
                let end = node.parse(&context, offset);
                count += 1;
                offset = end + 2;
            }
            black_box(count);
        });
    });
}

criterion_group!(benches, bench_block_scalar, bench_flow_items);
criterion_main!(benches);
