// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use keel_core::algorithm::{distance, lexicographical_compare};
use keel_core::iter::range::CursorRange;
use keel_core::iter::slice::SliceCursor;
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

fn bench_reverse_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_iteration");
    for size in SIZES {
        let data: Vec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("cursor_range", size), &data, |b, data| {
            b.iter(|| {
                CursorRange::from_slice(black_box(data))
                    .reversed()
                    .fold(0u64, |acc, v| acc.wrapping_add(*v))
            })
        });

        group.bench_with_input(BenchmarkId::new("std_rev", size), &data, |b, data| {
            b.iter(|| {
                black_box(data)
                    .iter()
                    .rev()
                    .fold(0u64, |acc, v| acc.wrapping_add(*v))
            })
        });
    }
    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    for size in SIZES {
        let left: Vec<u32> = (0..size as u32).collect();
        let mut right = left.clone();
        if let Some(last) = right.last_mut() {
            *last += 1;
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("distance", size), &left, |b, data| {
            b.iter(|| distance(SliceCursor::begin(black_box(data)), SliceCursor::end(data)))
        });

        group.bench_with_input(
            BenchmarkId::new("lexicographical_compare", size),
            &(left.as_slice(), right.as_slice()),
            |b, (left, right)| {
                b.iter(|| {
                    lexicographical_compare(
                        SliceCursor::begin(black_box(*left)),
                        SliceCursor::end(*left),
                        SliceCursor::begin(black_box(*right)),
                        SliceCursor::end(*right),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_reverse_iteration, bench_algorithms);
criterion_main!(benches);
