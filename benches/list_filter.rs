use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusty_contacts::prelude::{Contact, ContactFields, ContactId, ContactManager, Gender};

// Helper to create a store prepopulated with `n` contacts.
fn make_store_with_n(n: u64) -> ContactManager {
    let contacts = (1..=n)
        .map(|i| Contact {
            id: ContactId(i),
            name: format!("User{i}"),
            phone: format!("(202) 555-{:04}", i % 10_000),
            email: format!("user{i}@yahoo.com"),
            gender: if i % 2 == 0 { Gender::Female } else { Gender::Male },
        })
        .collect();
    ContactManager::with_contacts(contacts).expect("unique ids")
}

fn bench_list(c: &mut Criterion) {
    let storage = make_store_with_n(20_000);

    c.bench_function("Listing 20k contacts (no filter)", |b| {
        b.iter(|| black_box(storage.list(black_box(""))))
    });

    c.bench_function("Filtering 20k contacts by name", |b| {
        b.iter(|| black_box(storage.list(black_box("user19"))))
    });

    c.bench_function("Filtering 20k contacts by phone", |b| {
        b.iter(|| black_box(storage.list(black_box("555-01"))))
    });
}

fn bench_create_delete(c: &mut Criterion) {
    c.bench_function("Adding to 20k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(20_000),
            |mut storage| {
                let id = storage.create(ContactFields::new(
                    "Zoe",
                    "1234567890",
                    "zoe@gmail.com",
                    Gender::Female,
                ));
                black_box(id)
            },
            BatchSize::LargeInput,
        );
    });

    c.bench_function("Deleting from 20k contacts", |b| {
        b.iter_batched(
            || make_store_with_n(20_000),
            |mut storage| black_box(storage.delete(ContactId(10_000))),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_list, bench_create_delete);
criterion_main!(benches);
