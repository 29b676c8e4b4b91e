use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scenarist_core::{
    codec::{odd_parity, Hex, LineBuffer},
    encode_caption,
    tracker::compose_screen,
    write_footer, CaptionScreen, Channel, Color, FontStyle, Mode, Session,
};

fn full_screen(rows: usize, start_ms: i64) -> CaptionScreen {
    let mut screen = CaptionScreen::new(Channel::CC1, start_ms, start_ms + 2000);
    let styles = [
        (FontStyle::Regular, Color::White),
        (FontStyle::Underlined, Color::Yellow),
        (FontStyle::Italics, Color::White),
        (FontStyle::Regular, Color::Cyan),
    ];
    for row in 0..rows {
        let (font, color) = styles[row % styles.len()];
        screen
            .put_text(row, 2, b"The quick brown fox jumps", font, color)
            .unwrap();
    }
    screen
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for rows in [1, 4, 15] {
        let screen = full_screen(rows, 1000);

        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &screen, |b, screen| {
            let mut line = LineBuffer::new();
            b.iter(|| {
                line.clear();
                compose_screen(black_box(screen), &Hex, &mut line);
                black_box(line.len());
            });
        });
    }

    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");

    for mode in [Mode::Binary, Mode::Mnemonic] {
        let captions: Vec<_> = (0..100).map(|i| full_screen(2, i * 3000)).collect();

        group.throughput(Throughput::Elements(captions.len() as u64));
        group.bench_function(format!("{:?}_100_captions", mode), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(64 * 1024);
                let mut session = Session::new(mode);
                for screen in &captions {
                    encode_caption(&mut out, &mut session, screen).unwrap();
                }
                write_footer(&mut out, &mut session).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_parity(c: &mut Criterion) {
    c.bench_function("odd_parity_all_bytes", |b| {
        b.iter(|| {
            let mut acc = 0u8;
            for byte in 0..=u8::MAX {
                acc ^= odd_parity(black_box(byte));
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_compose, bench_stream, bench_parity);
criterion_main!(benches);
