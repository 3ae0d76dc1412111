use canonical::normalize;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let inputs = [
        ("ascii", "Ravi Kumar CSE2025-001"),
        ("latin_accents", "José María Núñez Crème Brûlée"),
        ("stacked_marks", "Nguyễn Văn Đức Trần Thị Hồng"),
    ];

    for (label, text) in inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(label, |b| b.iter(|| normalize(black_box(text))));
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
