use curve25519::ed25519::{Blinding, VerifyContext, keypair, sign, verify};
use curve25519::x25519;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_x25519(c: &mut Criterion) {
    let secret = [0x44u8; 32];
    let peer = x25519::public_key(&[0x55u8; 32]);

    c.bench_function("x25519 public key (ladder)", |b| {
        b.iter(|| x25519::public_key(black_box(&secret)))
    });

    c.bench_function("x25519 public key (folded)", |b| {
        b.iter(|| x25519::public_key_folded(black_box(&secret)))
    });

    c.bench_function("x25519 shared secret", |b| {
        b.iter(|| x25519::shared_secret(black_box(&secret), black_box(&peer)))
    });
}

pub fn bench_ed25519(c: &mut Criterion) {
    let seed = [0x77u8; 32];
    let (public, private) = keypair(&seed, None);
    let blinding = Blinding::new(&[0x33u8; 64]);
    let message = [0xA5u8; 256];
    let signature = sign(&private, None, &message);

    c.bench_function("ed25519 keypair", |b| {
        b.iter(|| keypair(black_box(&seed), None))
    });

    c.bench_function("ed25519 sign", |b| {
        b.iter(|| sign(black_box(&private), None, black_box(&message)))
    });

    c.bench_function("ed25519 sign (blinded)", |b| {
        b.iter(|| sign(black_box(&private), Some(&blinding), black_box(&message)))
    });

    c.bench_function("ed25519 verify", |b| {
        b.iter(|| verify(black_box(&signature), black_box(&public), black_box(&message)))
    });

    let ctx = VerifyContext::new(&public).unwrap();
    c.bench_function("ed25519 verify (context)", |b| {
        b.iter(|| ctx.check(black_box(&signature), black_box(&message)))
    });
}

criterion_group!(benches, bench_x25519, bench_ed25519);
criterion_main!(benches);
