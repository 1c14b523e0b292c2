// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for the form ledger.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Writing lines
//! - Length and snapshot iteration over sparse forms
//! - Rendering a populated form

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use form_ledger_rs::Form;
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

/// Builds a sparse form: every third line up to `last` is populated, plus a
/// handful of suffixed and textual identifiers.
fn sparse_form(last: u32) -> Form {
    let mut form = Form::new("bench").unwrap();
    for number in (3..=last).step_by(3) {
        form.set(number, Decimal::new(number as i64 * 100, 2));
    }
    for suffix in ["2a", "2b", "25d"] {
        form.set(suffix, Decimal::ONE);
    }
    form.set("foobar", false);
    form
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    for count in [10u32, 100, 500] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut form = Form::new("bench").unwrap();
                for number in 1..=count {
                    form.set(number, Decimal::new(number as i64, 2));
                }
                black_box(form)
            });
        });
    }
    group.finish();
}

fn bench_last_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("last_line");
    for last in [30u32, 300, 900] {
        let form = sparse_form(last);
        group.bench_with_input(BenchmarkId::from_parameter(last), &form, |b, form| {
            b.iter(|| black_box(form.last_line()));
        });
    }
    group.finish();
}

fn bench_lines_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    for last in [30u32, 300, 900] {
        let form = sparse_form(last);
        group.throughput(Throughput::Elements(last as u64));
        group.bench_with_input(BenchmarkId::from_parameter(last), &form, |b, form| {
            b.iter(|| black_box(form.lines()));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for last in [30u32, 300] {
        let form = sparse_form(last);
        group.bench_with_input(BenchmarkId::from_parameter(last), &form, |b, form| {
            b.iter(|| {
                let mut out = Vec::with_capacity(16 * 1024);
                form.render(&mut out).unwrap();
                black_box(out)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_set,
    bench_last_line,
    bench_lines_snapshot,
    bench_render
);
criterion_main!(benches);
