//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use azurite_common::inventory::{Inventory, InventoryType};
use azurite_common::value::Row;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn item_rows(count: i64) -> Vec<Row> {
    (0..count)
        .map(|index| {
            let kind = InventoryType::ALL[(index % 6) as usize];
            Row::new()
                .with("characterid", 1)
                .with("inventorytype", kind.code())
                .with("position", index / 6 + 1)
                .with("itemid", 1_000_000 + index)
                .with("quantity", 1)
                .with("isCash", 0)
        })
        .collect()
}

/// Benchmark partitioning item rows into tabs
fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_materialize");

    for count in [24, 96, 384] {
        let rows = item_rows(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| {
                let mut inventory = Inventory::new(1);
                for row in rows {
                    let _ = inventory.insert_row(black_box(row));
                }
                inventory
            });
        });
    }

    group.finish();
}

/// Benchmark the linear item lookup
fn bench_has_item(c: &mut Criterion) {
    let mut inventory = Inventory::new(1);
    for row in &item_rows(384) {
        let _ = inventory.insert_row(row);
    }

    c.bench_function("inventory_is_equipping_miss", |b| {
        b.iter(|| inventory.is_equipping(black_box(1_999_999)));
    });
}

criterion_group!(benches, bench_materialize, bench_has_item);
criterion_main!(benches);
