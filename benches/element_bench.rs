#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use im_protocol::message::{Element, ElementEncoder};

fn bench_pack(c: &mut Criterion) {
    let encoder = ElementEncoder::default();
    let card = "<?xml version='1.0' encoding='UTF-8'?>".repeat(32);
    let elements = vec![
        Element::text("hello "),
        Element::at(123456, "@someone"),
        Element::face(14, "wx"),
        Element::face(300, "doge"),
        Element::service(1, card.clone(), "res"),
    ];

    c.bench_function("pack_all_mixed", |b| {
        b.iter(|| encoder.pack_all(&elements).unwrap())
    });
    c.bench_function("pack_service_card", |b| {
        let element = Element::service(60, card.clone(), "");
        b.iter(|| encoder.pack(&element).unwrap())
    });
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
