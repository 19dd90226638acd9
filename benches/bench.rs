use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use invoice_store::{Invoice, InvoiceStore, STATUS_PENDING};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::hint::black_box;

fn invoices(count: usize, shuffled: bool) -> Vec<Invoice> {
    let mut numbers: Vec<i32> = (0..count as i32).collect();
    if shuffled {
        numbers.shuffle(&mut StdRng::from_seed([0; 32]));
    }
    numbers
        .into_iter()
        .map(|n| Invoice::new(n, "2024-01-10", 100.0, STATUS_PENDING))
        .collect()
}

// insert helper fn
fn store_insert(count: usize, shuffled: bool, bench: &mut Bencher) {
    let invoices = invoices(count, shuffled);
    bench.iter(|| {
        let mut store = InvoiceStore::new();
        for i in invoices.clone() {
            black_box(store.insert_invoice(i));
        }
    });
}

// insert and remove helper fn
fn store_insert_remove(count: usize, bench: &mut Bencher) {
    let invoices = invoices(count, true);
    bench.iter(|| {
        let mut store = InvoiceStore::new();
        for i in invoices.clone() {
            black_box(store.insert_invoice(i));
        }
        for i in &invoices {
            let _ = black_box(store.remove(i.number()));
        }
    });
}

// find helper fn
fn store_find(count: usize, bench: &mut Bencher) {
    let invoices = invoices(count, true);
    let store: InvoiceStore = invoices.iter().cloned().collect();
    bench.iter(|| {
        for i in &invoices {
            let _ = black_box(store.find(i.number()));
        }
    });
}

// in-order iteration helper fn
fn store_iter(count: usize, bench: &mut Bencher) {
    let store: InvoiceStore = invoices(count, true).into_iter().collect();
    bench.iter(|| black_box(store.iter().map(|i| i.amount).sum::<f64>()));
}

fn bench_store_insert(c: &mut Criterion) {
    c.bench_function("bench_store_insert_random_1000", |b| {
        store_insert(1000, true, b)
    });
    c.bench_function("bench_store_insert_random_10,000", |b| {
        store_insert(10_000, true, b)
    });
    c.bench_function("bench_store_insert_sorted_1000", |b| {
        store_insert(1000, false, b)
    });
}

fn bench_store_insert_remove(c: &mut Criterion) {
    c.bench_function("bench_store_insert_remove_1000", |b| {
        store_insert_remove(1000, b)
    });
    c.bench_function("bench_store_insert_remove_10,000", |b| {
        store_insert_remove(10_000, b)
    });
}

fn bench_store_read(c: &mut Criterion) {
    c.bench_function("bench_store_find_10,000", |b| store_find(10_000, b));
    c.bench_function("bench_store_iter_10,000", |b| store_iter(10_000, b));
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_store_insert, bench_store_insert_remove,
}

criterion_group! {
    name = benches_read;
    config = criterion_config();
    targets = bench_store_read
}

criterion_main!(benches_basic_op, benches_read);
