use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tokenize(c: &mut Criterion) {
    let line = r#"grep "needle in a haystack" 'notes/today.txt' plain\ word "esc\"aped" tail"#;
    c.bench_function("tokenize_quoted_line", |b| {
        b.iter(|| rterm_parser::lexer::tokenize(line))
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
