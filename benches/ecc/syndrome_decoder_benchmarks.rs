use bchviz::ecc::{compute_syndrome, decode, encode_systematic, survey_error_patterns};
use bchviz::BitVector;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn codeword_of_len(generator: &BitVector, len: usize) -> BitVector {
    let message_len = len - (generator.len() - 1);
    let message: BitVector = (0..message_len).map(|i| i % 3 == 0).collect();
    encode_systematic(&message, generator).unwrap()
}

fn bench_syndrome(c: &mut Criterion) {
    let generator: BitVector = "10011".parse().unwrap();
    let mut group = c.benchmark_group("compute_syndrome");

    for len in [7, 15, 31, 63] {
        let codeword = codeword_of_len(&generator, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &codeword, |b, cw| {
            b.iter(|| compute_syndrome(black_box(cw), black_box(&generator)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let generator: BitVector = "10011".parse().unwrap();
    let mut group = c.benchmark_group("decode_single_error");

    for len in [7, 15, 31, 63] {
        // Worst case for the linear scan: the error is in the last position
        let noisy = codeword_of_len(&generator, len).flipped(len - 1).unwrap();
        let syndrome = compute_syndrome(&noisy, &generator).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &noisy, |b, rx| {
            b.iter(|| decode(black_box(rx), black_box(&syndrome), black_box(&generator)).unwrap())
        });
    }
    group.finish();
}

fn bench_survey(c: &mut Criterion) {
    let generator: BitVector = "1011".parse().unwrap();
    let codeword: BitVector = "1101001".parse().unwrap();

    c.bench_function("survey_7_4_weight_3", |b| {
        b.iter(|| survey_error_patterns(black_box(&codeword), black_box(&generator), 3).unwrap())
    });
}

criterion_group!(benches, bench_syndrome, bench_decode, bench_survey);
criterion_main!(benches);
