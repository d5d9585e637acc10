use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numform::{
    parse, parse_with_options, to_string, to_string_with_options, NumberFormat,
    ParseFloatOptions, ParseIntegerOptions, WriteFloatOptions,
};

fn benchmark_parse_integer(c: &mut Criterion) {
    c.bench_function("parse_i64_decimal", |b| {
        b.iter(|| parse::<i64>(black_box(b"-9223372036854775808")))
    });

    let hex = ParseIntegerOptions::hexadecimal();
    c.bench_function("parse_u64_hexadecimal", |b| {
        b.iter(|| parse_with_options::<u64>(black_box(b"deadbeefcafe"), &hex))
    });
}

fn benchmark_parse_float(c: &mut Criterion) {
    c.bench_function("parse_f64_fast_path", |b| {
        b.iter(|| parse::<f64>(black_box(b"123456.789")))
    });

    c.bench_function("parse_f64_slow_path", |b| {
        b.iter(|| parse::<f64>(black_box(b"2.2250738585072014e-308")))
    });

    let lossy = ParseFloatOptions::builder().lossy(true).build().unwrap();
    c.bench_function("parse_f64_lossy", |b| {
        b.iter(|| parse_with_options::<f64>(black_box(b"2.2250738585072014e-308"), &lossy))
    });

    let json = ParseFloatOptions::builder()
        .format(NumberFormat::JSON)
        .build()
        .unwrap();
    c.bench_function("parse_f64_json_format", |b| {
        b.iter(|| parse_with_options::<f64>(black_box(b"123456.789"), &json))
    });

    let separated = ParseFloatOptions::builder()
        .format(NumberFormat::ignore(b'_').unwrap())
        .build()
        .unwrap();
    c.bench_function("parse_f64_digit_separators", |b| {
        b.iter(|| parse_with_options::<f64>(black_box(b"1_234_567.890_1"), &separated))
    });
}

fn benchmark_write(c: &mut Criterion) {
    c.bench_function("write_i64_decimal", |b| {
        b.iter(|| to_string(black_box(i64::MIN)))
    });

    c.bench_function("write_f64_decimal", |b| {
        b.iter(|| to_string(black_box(123456.789f64)))
    });

    let hex = WriteFloatOptions::hexadecimal();
    c.bench_function("write_f64_hexadecimal", |b| {
        b.iter(|| to_string_with_options(black_box(123456.789f64), &hex))
    });
}

criterion_group!(
    benches,
    benchmark_parse_integer,
    benchmark_parse_float,
    benchmark_write
);
criterion_main!(benches);
