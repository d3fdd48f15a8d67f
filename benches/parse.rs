use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn flat_query(pairs: usize) -> String {
    (0..pairs)
        .map(|idx| format!("key{idx}=value%20{idx}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn nested_query(rows: usize) -> String {
    (0..rows)
        .map(|idx| {
            format!(
                "people[{idx}][name]=Person%20{idx}&people[{idx}][age]={age}&people[{idx}][tags][0]=a&people[{idx}][tags][1]=null",
                age = 20 + idx % 50
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [10usize, 100, 1000] {
        let flat = flat_query(size);
        group.throughput(Throughput::Bytes(flat.len() as u64));
        group.bench_with_input(BenchmarkId::new("flat", size), &flat, |b, input| {
            b.iter(|| qsparser::parse(black_box(input)).expect("parse flat"))
        });

        let nested = nested_query(size);
        group.throughput(Throughput::Bytes(nested.len() as u64));
        group.bench_with_input(BenchmarkId::new("nested", size), &nested, |b, input| {
            b.iter(|| qsparser::parse(black_box(input)).expect("parse nested"))
        });
    }
    group.finish();
}

fn bench_to_json(c: &mut Criterion) {
    let nested = nested_query(100);
    c.bench_function("decode_to_value/nested_100", |b| {
        b.iter(|| qsparser::decode_to_value(black_box(&nested)).expect("decode"))
    });
}

criterion_group!(benches, bench_parse, bench_to_json);
criterion_main!(benches);
