use criterion::{black_box, criterion_group, criterion_main, Criterion};

use re164::{
    format_pretty, format_raw, install_area_code_format, parse, parse_area_code_format,
    E164Number,
};

fn setup_numbers() -> Vec<E164Number> {
    [
        "+12345678901",
        "+442087654321",
        "+61118765432",
        "+61412345678",
        "+380441234567",
        "+80012345678",
        "+998999999999999",
    ]
    .iter()
    .map(|input| parse(input).unwrap())
    .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let numbers = setup_numbers();

    let mut group = c.benchmark_group("Formatting");

    group.bench_function("format_raw", |b| {
        b.iter(|| {
            for number in &numbers {
                format_raw(black_box(number));
            }
        })
    });

    install_area_code_format(None);
    group.bench_function("format_pretty (no table)", |b| {
        b.iter(|| {
            for number in &numbers {
                format_pretty(black_box(number));
            }
        })
    });

    install_area_code_format(
        parse_area_code_format("+1:xxx;+61:x,11,12,13;+380:xx")
            .expect("valid area code format"),
    );
    group.bench_function("format_pretty (with table)", |b| {
        b.iter(|| {
            for number in &numbers {
                format_pretty(black_box(number));
            }
        })
    });
    install_area_code_format(None);

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
