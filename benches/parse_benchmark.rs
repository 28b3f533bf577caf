use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vnaddress::{AddressParser, Lexicons};

fn benchmark_parse(c: &mut Criterion) {
    let parser = AddressParser::new();

    c.bench_function("parse_segmented", |b| {
        b.iter(|| parser.parse(black_box("45 Lê Lợi, Phường Bến Nghé, Quận 1, TP.HCM, Việt Nam")))
    });

    c.bench_function("parse_unsegmented", |b| {
        b.iter(|| parser.parse(black_box("45 Đinh Tiên Hoàng phường Bến Nghé quận 1 tp.hcm")))
    });

    c.bench_function("parse_street_only", |b| {
        b.iter(|| parser.parse(black_box("123 Lê Lợi")))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let parser = AddressParser::new();
    let addresses: Vec<&str> = vec![
        "45 Lê Lợi, Phường Bến Nghé, Quận 1, TP.HCM, Việt Nam",
        "45 Đinh Tiên Hoàng phường Bến Nghé quận 1",
        "12 Nguyễn Trãi, P.7, Q.5, hcm",
        "268 Lý Thường Kiệt quận 10",
        "7 Pasteur, Phường 6, Quận 3",
        "5 Lê Lợi phường 7 hcm",
        "1 Tràng Tiền, Hoàn Kiếm, Hà Nội",
        "9 Lê Duẩn quận 1 tp. hồ chí minh",
        "123 Lê Lợi",
        "",
    ];

    c.bench_function("parse_batch_10", |b| {
        b.iter(|| parser.parse_batch(black_box(&addresses)))
    });
}

fn benchmark_init(c: &mut Criterion) {
    c.bench_function("lexicon_init", |b| b.iter(Lexicons::vietnam));
}

criterion_group!(benches, benchmark_parse, benchmark_batch, benchmark_init);
criterion_main!(benches);
