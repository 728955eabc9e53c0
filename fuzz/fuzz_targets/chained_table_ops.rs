// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target for chained table operations.
//!
//! Replays insert/find/remove sequences against a `Vec` model and checks size
//! accounting, first-match semantics and the load-factor bound.

use arbitrary::Arbitrary;
use chained_dict::ChainedTable;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum TableOp {
    Insert { key: i32, value: u16 },
    Find { key: i32 },
    Remove { key: i32 },
    Resize,
    MakeEmpty,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    size_estimate: u8,
    ops: Vec<TableOp>,
}

fuzz_target!(|input: FuzzInput| {
    let mut table = ChainedTable::with_size_estimate(usize::from(input.size_estimate));
    let mut model: Vec<(i32, u16)> = Vec::new();

    for op in input.ops.into_iter().take(500) {
        match op {
            TableOp::Insert { key, value } => {
                let entry = table.insert(key, value);
                assert_eq!((*entry.key(), *entry.value()), (key, value));
                model.push((key, value));
                assert!(table.load_factor() <= 1.0, "load factor above 1.0");
            },
            TableOp::Find { key } => {
                let expected = model.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
                assert_eq!(table.get(&key).copied(), expected);
            },
            TableOp::Remove { key } => {
                let expected = model
                    .iter()
                    .position(|(k, _)| *k == key)
                    .map(|i| model.remove(i).1);
                assert_eq!(table.remove(&key).map(|e| *e.value()), expected);
            },
            TableOp::Resize => {
                let before = table.bucket_count();
                table.resize();
                assert!(table.bucket_count() > before);
            },
            TableOp::MakeEmpty => {
                table.make_empty();
                model.clear();
            },
        }

        assert_eq!(table.len(), model.len());
        assert_eq!(table.histogram().iter().sum::<usize>(), model.len());
    }
});
