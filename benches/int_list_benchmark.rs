use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use int_list::IntList;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const LIST_ELEMS: usize = 1 << 16;

fn setup_list(n: usize) -> IntList {
    let mut rng = SmallRng::seed_from_u64(0x1157);
    let mut list = IntList::with_capacity(n).unwrap();
    for _ in 0..n {
        list.add(rng.gen_range(-1000..1000)).unwrap();
    }
    list
}

fn bench_list_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_growth");

    for n in [16, 256, 4096] {
        group.bench_function(BenchmarkId::new("add", n), |b| {
            b.iter(|| {
                let mut list = IntList::new();
                for i in 0..n {
                    list.add(black_box(i)).unwrap();
                }
                list
            })
        });

        let values: Vec<i32> = (0..n).collect();
        group.bench_function(BenchmarkId::new("add_all", n), |b| {
            b.iter(|| {
                let mut list = IntList::new();
                list.add_all(black_box(&values)).unwrap();
                list
            })
        });
    }
}

fn bench_list_ops(c: &mut Criterion) {
    let list = setup_list(LIST_ELEMS);
    let mut rng = SmallRng::seed_from_u64(0xdead);

    let mut group = c.benchmark_group("list_ops");
    group.sample_size(250);

    group.bench_function("index_of", |b| {
        b.iter_batched(
            || rng.gen_range(-1000..1000),
            |x| list.index_of(black_box(x)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("filter", |b| {
        b.iter(|| list.filter(|x, _| black_box(x) < 0).unwrap())
    });

    group.bench_function("map", |b| {
        b.iter(|| list.map(|x, i| x.wrapping_mul(i as i32)).unwrap())
    });

    group.bench_function("reduce", |b| {
        b.iter(|| list.reduce(|acc: i64, x, _| acc + x as i64, 0))
    });

    group.bench_function("remove_front", |b| {
        b.iter_batched(
            || setup_list(1024),
            |mut list| {
                while !list.is_empty() {
                    list.remove(0).unwrap();
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("to_string", |b| b.iter(|| list.to_string()));
}

criterion_group!(list_benches, bench_list_growth, bench_list_ops);
criterion_main!(list_benches);
