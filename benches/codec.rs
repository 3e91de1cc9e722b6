use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use timebox::{Command, Message, decode_frame, encode_frame, escape, unescape};

const SIZES: [usize; 3] = [16, 1024, 16 * 1024];

/// Worst case for the escaper: every byte is reserved.
fn reserved_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 3) as u8 + 1).collect()
}

fn plain_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 200) as u8 + 0x10).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in SIZES {
        let plain = plain_payload(size);
        let reserved = reserved_payload(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode_plain", size), &plain, |b, p| {
            b.iter(|| black_box(encode_frame(p)));
        });
        group.bench_with_input(
            BenchmarkId::new("encode_reserved", size),
            &reserved,
            |b, p| {
                b.iter(|| black_box(encode_frame(p)));
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in SIZES {
        let plain = encode_frame(&plain_payload(size));
        let reserved = encode_frame(&reserved_payload(size));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("decode_plain", size), &plain, |b, f| {
            b.iter(|| black_box(decode_frame(f).unwrap()));
        });
        group.bench_with_input(
            BenchmarkId::new("decode_reserved", size),
            &reserved,
            |b, f| {
                b.iter(|| black_box(decode_frame(f).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    let payload = reserved_payload(1024);
    let escaped = escape(&payload);
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("escape_1kb", |b| {
        b.iter(|| black_box(escape(&payload)));
    });
    group.bench_function("unescape_1kb", |b| {
        b.iter(|| black_box(unescape(&escaped).unwrap()));
    });

    group.finish();
}

fn bench_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("command");

    group.bench_function("set_view_roundtrip", |b| {
        b.iter(|| {
            let frame = Message::command(Command::SetView, &[0x00, 0x01, 0x00, 0xFF, 0x42]).encode();
            black_box(Message::decode(&frame).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_escape, bench_command);
criterion_main!(benches);
