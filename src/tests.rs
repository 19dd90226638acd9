use std::collections::{BTreeMap, HashSet};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::*;

struct InvoiceGenerator {
    rng: StdRng,
    unique: HashSet<i32>,
    limit: i32,
}

impl InvoiceGenerator {
    fn new(seed: [u8; 32]) -> Self {
        const LIMIT: i32 = 100_000;
        Self {
            rng: SeedableRng::from_seed(seed),
            unique: HashSet::new(),
            limit: LIMIT,
        }
    }

    fn next_number(&mut self) -> i32 {
        self.rng.gen_range(0..self.limit)
    }

    fn next_unique(&mut self) -> Invoice {
        let mut number = self.next_number();
        while self.unique.contains(&number) {
            number = self.next_number();
        }
        self.unique.insert(number);
        self.invoice(number)
    }

    fn invoice(&mut self, number: i32) -> Invoice {
        let day = self.rng.gen_range(1..=28);
        let month = self.rng.gen_range(1..=12);
        let cents = self.rng.gen_range(0..1_000_000i32);
        let status = if self.rng.gen_bool(0.5) {
            STATUS_PAID
        } else {
            STATUS_PENDING
        };
        Invoice::new(
            number,
            format!("2024-{month:02}-{day:02}"),
            f64::from(cents) / 100.0,
            status,
        )
    }
}

impl InvoiceStore {
    fn numbers(&self) -> Vec<i32> {
        self.iter().map(Invoice::number).collect()
    }
}

fn with_store_and_generator(test_fn: impl Fn(InvoiceStore, InvoiceGenerator)) {
    let seeds = vec![[0; 32], [1; 32], [2; 32]];
    for seed in seeds {
        test_fn(InvoiceStore::new(), InvoiceGenerator::new(seed));
    }
}

fn assert_strictly_ascending(numbers: &[i32]) {
    assert!(
        numbers.windows(2).all(|w| w[0] < w[1]),
        "not strictly ascending: {:?}",
        numbers
    );
}

#[test]
fn find_returns_every_inserted_invoice() {
    with_store_and_generator(|mut store, mut gen| {
        let invoices: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for i in invoices.clone() {
            assert_eq!(store.insert_invoice(i), None);
        }
        assert_eq!(store.len(), 1000);
        for i in &invoices {
            assert_eq!(store.find(i.number()), Ok(i));
        }
        for _ in 0..1000 {
            let number = gen.next_number();
            if !gen.unique.contains(&number) {
                assert_eq!(store.find(number), Err(StoreError::NotFound(number)));
            }
        }
    });
}

#[test]
fn iterate_through_store_is_sorted() {
    with_store_and_generator(|mut store, mut gen| {
        let mut invoices: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        store.extend(invoices.clone());
        invoices.sort_unstable_by_key(Invoice::number);

        let stored: Vec<_> = store.iter().cloned().collect();
        assert_eq!(stored, invoices);
        assert_strictly_ascending(&store.numbers());
    });
}

#[test]
fn removed_invoices_are_gone() {
    with_store_and_generator(|mut store, mut gen| {
        let mut invoices: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(500)
            .collect();
        store.extend(invoices.clone());
        invoices.shuffle(&mut gen.rng);
        let (gone, kept) = invoices.split_at(250);
        for i in gone {
            assert_eq!(store.remove(i.number()).as_ref(), Ok(i));
            assert_eq!(store.find(i.number()), Err(StoreError::NotFound(i.number())));
            assert_strictly_ascending(&store.numbers());
        }
        for i in kept {
            assert_eq!(store.find(i.number()), Ok(i));
        }
        assert_eq!(store.len(), 250);
    });
}

#[test]
fn remove_non_exist_invoice_will_do_nothing() {
    with_store_and_generator(|mut store, mut gen| {
        store.extend(std::iter::repeat_with(|| gen.next_unique()).take(1000));
        let before: Vec<_> = store.iter().cloned().collect();
        let absent: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for i in absent {
            assert_eq!(
                store.remove(i.number()),
                Err(StoreError::NotFound(i.number()))
            );
        }
        let after: Vec<_> = store.iter().cloned().collect();
        assert_eq!(before, after);
    });
}

#[test]
fn update_status_only_touches_status() {
    with_store_and_generator(|mut store, mut gen| {
        let invoices: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(300)
            .collect();
        store.extend(invoices.clone());
        for i in invoices.iter().step_by(3) {
            store.update_status(i.number(), "vencida").unwrap();
        }
        for (n, i) in invoices.iter().enumerate() {
            let found = store.find(i.number()).unwrap();
            let expected_status = if n % 3 == 0 { "vencida" } else { i.status.as_str() };
            assert_eq!(found.status, expected_status);
            assert_eq!(found.due_date, i.due_date);
            assert_eq!(found.amount, i.amount);
        }
    });
}

#[test]
fn random_mutations_match_model() {
    with_store_and_generator(|mut store, mut gen| {
        let mut model = BTreeMap::new();
        for _ in 0..5000 {
            let number = gen.rng.gen_range(0..500);
            match gen.rng.gen_range(0..3) {
                0 => {
                    let invoice = gen.invoice(number);
                    assert_eq!(
                        store.insert_invoice(invoice.clone()),
                        model.insert(number, invoice)
                    );
                }
                1 => {
                    assert_eq!(store.remove(number).ok(), model.remove(&number));
                }
                _ => {
                    let res = store.update_status(number, STATUS_PAID);
                    match model.get_mut(&number) {
                        Some(i) => {
                            assert_eq!(res, Ok(()));
                            i.status = STATUS_PAID.to_string();
                        }
                        None => assert_eq!(res, Err(StoreError::NotFound(number))),
                    }
                }
            }
        }
        let stored: Vec<_> = store.iter().collect();
        let expected: Vec<_> = model.values().collect();
        assert_eq!(stored, expected);
        assert_eq!(store.len(), model.len());
    });
}

#[test]
fn deep_tree_does_not_overflow_the_stack() {
    let mut store = InvoiceStore::new();
    for n in (0..10_000).rev() {
        store.insert(n, "", 0.0, STATUS_PENDING);
    }
    assert_eq!(store.height(), 10_000);
    assert_eq!(store.find(0).unwrap().number(), 0);
    assert_eq!(store.iter().count(), 10_000);
    assert!(store.remove(9_999).is_ok());
    assert!(store.remove(5_000).is_ok());
    assert_eq!(store.len(), 9_998);
    assert_strictly_ascending(&store.numbers());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_invoice_store() {
    use serde_json::{json, Value};

    let mut store = InvoiceStore::new();
    store.insert(100, "2024-01-10", 250.0, STATUS_PENDING);
    store.insert(50, "2024-02-01", 75.5, STATUS_PENDING);
    store.insert(150, "2024-03-15", 300.0, STATUS_PAID);

    let serialized = serde_json::to_string(&store).unwrap();
    let expected = json!([
        {"number": 50, "due_date": "2024-02-01", "amount": 75.5, "status": "pendente"},
        {"number": 100, "due_date": "2024-01-10", "amount": 250.0, "status": "pendente"},
        {"number": 150, "due_date": "2024-03-15", "amount": 300.0, "status": "paga"}
    ]);
    let actual: Value = serde_json::from_str(&serialized).unwrap();
    assert_eq!(expected, actual);

    let deserialized: InvoiceStore = serde_json::from_str(&serialized).unwrap();
    let dv: Vec<_> = deserialized.iter().collect();
    let ev: Vec<_> = store.iter().collect();
    assert_eq!(ev, dv);
}
