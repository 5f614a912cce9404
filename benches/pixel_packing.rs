use criterion::{Criterion, black_box, criterion_group, criterion_main};
use window_runtime::pixel_format::{copy_packed_rgba_to_rgb, pack_rgba};

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

fn bench_pack(c: &mut Criterion) {
    let rgba = vec![127u8; WIDTH * HEIGHT * 4];

    c.bench_function("pack_rgba_1080p", |b| {
        b.iter(|| black_box(pack_rgba(black_box(&rgba))));
    });
}

fn bench_to_rgb(c: &mut Criterion) {
    let packed = vec![0x8040_20FFu32; WIDTH * HEIGHT];
    let mut rgb = vec![0u8; WIDTH * HEIGHT * 3];

    c.bench_function("packed_rgba_to_rgb_1080p", |b| {
        b.iter(|| copy_packed_rgba_to_rgb(black_box(&packed), &mut rgb));
    });
}

criterion_group!(benches, bench_pack, bench_to_rgb);
criterion_main!(benches);
