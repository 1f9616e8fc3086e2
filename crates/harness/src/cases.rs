use clap::ValueEnum;
use common::{Row, Table};
use serde::Serialize;
use std::fmt;

const GROUP_KEYS: [i64; 5] = [1000, 2000, 3000, 4000, 5000];
const ROWS_PER_GROUP: i64 = 100;

/// Generated input tables. Every case is sorted ascending on `a`, so each one
/// can be queried with the implicit index strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Four hand-picked rows.
    Small,
    /// Five `a` groups, `b` from 0 up to 99 in each.
    Ascending,
    /// Five `a` groups, `b` from 100 down to 1 in each.
    Descending,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Ascending, Case::Descending];

    pub fn number(self) -> usize {
        match self {
            Case::Small => 1,
            Case::Ascending => 2,
            Case::Descending => 3,
        }
    }

    pub fn table(self) -> Table {
        match self {
            Case::Small => vec![
                Row::new(1000, 10),
                Row::new(2000, 40),
                Row::new(3000, 90),
                Row::new(4000, 20),
            ]
            .into(),
            Case::Ascending => GROUP_KEYS
                .iter()
                .flat_map(|&a| (0..ROWS_PER_GROUP).map(move |b| Row::new(a, b)))
                .collect(),
            Case::Descending => GROUP_KEYS
                .iter()
                .flat_map(|&a| (1..=ROWS_PER_GROUP).rev().map(move |b| Row::new(a, b)))
                .collect(),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Small => write!(f, "small"),
            Case::Ascending => write!(f, "ascending"),
            Case::Descending => write!(f, "descending"),
        }
    }
}
