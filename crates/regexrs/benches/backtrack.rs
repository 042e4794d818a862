//! cargo bench --bench backtrack
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use regexrs::{CompFlags, Regex};

pub fn criterion_benchmark(c: &mut Criterion) {
    {
        let re = Regex::new("abc").unwrap();
        let haystack = "x".repeat(200) + "abc";
        assert!(re.is_match(&haystack));
        c.bench_function("find_literal_200", |b| {
            b.iter(|| re.find(black_box(&haystack)))
        });
    }

    {
        let re = Regex::with_flags("[a-e]+x", CompFlags::EXTENDED).unwrap();
        let haystack = "abcde".repeat(40) + "x";
        c.bench_function("find_class_repeat", |b| {
            b.iter(|| re.find(black_box(&haystack)))
        });
    }

    {
        let re = Regex::with_flags("(cat|cow|dog)+", CompFlags::EXTENDED).unwrap();
        let haystack = "catcowdog".repeat(20);
        c.bench_function("find_alternation_repeat", |b| {
            b.iter(|| re.find(black_box(&haystack)))
        });
    }

    {
        // Forces heavy backtracking without finishing the heat death of
        // the universe.
        let re = Regex::with_flags("(a*)*c", CompFlags::EXTENDED).unwrap();
        let haystack = "a".repeat(14) + "b";
        assert!(!re.is_match(&haystack));
        c.bench_function("fail_pathological", |b| {
            b.iter(|| re.is_match(black_box(&haystack)))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
