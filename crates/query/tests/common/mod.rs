#![allow(dead_code)]

use query::{Row, RowId, Table};
use std::collections::BTreeSet;

pub const GROUP_KEYS: [i64; 5] = [1000, 2000, 3000, 4000, 5000];

pub fn small_table() -> Table {
    vec![
        Row::new(1000, 10),
        Row::new(2000, 40),
        Row::new(3000, 90),
        Row::new(4000, 20),
    ]
    .into()
}

/// Five `a` groups of 100 rows each, `b` running 0..=99 within a group.
pub fn ascending_table() -> Table {
    GROUP_KEYS
        .iter()
        .flat_map(|&a| (0..100).map(move |b| Row::new(a, b)))
        .collect()
}

/// Five `a` groups of 100 rows each, `b` running 100 down to 1 within a group.
pub fn descending_table() -> Table {
    GROUP_KEYS
        .iter()
        .flat_map(|&a| (1..=100).rev().map(move |b| Row::new(a, b)))
        .collect()
}

pub fn row_set(rows: &[Row]) -> BTreeSet<Row> {
    rows.iter().copied().collect()
}

/// Reference answer by linear scan, in row id order.
pub fn scan(table: &Table, predicate: impl Fn(&Row) -> bool) -> Vec<RowId> {
    table
        .iter()
        .filter(|(_, row)| predicate(row))
        .map(|(id, _)| id)
        .collect()
}
