//! The four ways of answering a [`ConjunctiveQuery`].
//!
//! - `tree`: ordered index on `a` and on `b`, combined with set algebra.
//! - `implicit`: binary search on `a` (table must be sorted on `a`), ordered
//!   index on `b`.
//! - `composite-tree`: one composite index, outer `b`, ordered inner `a`.
//! - `composite-hash`: same, with a hash inner index.
//!
//! The first two produce row id order; the composite strategies produce
//! output ordered by `b`.

use crate::error::{QueryError, QueryResult};
use crate::index::{HashCompositeIndex, ImplicitIndex, OrderedCompositeIndex, OrderedIndex};
use crate::predicate::ConjunctiveQuery;
use crate::result_set::ResultSet;
use common::{Column, Row, Table};
use log::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    #[serde(rename = "tree")]
    TreeIndex,
    #[serde(rename = "implicit")]
    ImplicitIndex,
    #[serde(rename = "composite-tree")]
    CompositeTree,
    #[serde(rename = "composite-hash")]
    CompositeHash,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::TreeIndex,
        Strategy::ImplicitIndex,
        Strategy::CompositeTree,
        Strategy::CompositeHash,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::TreeIndex => "tree",
            Strategy::ImplicitIndex => "implicit",
            Strategy::CompositeTree => "composite-tree",
            Strategy::CompositeHash => "composite-hash",
        }
    }

    /// Whether results come back in row id order, ready for further combining.
    pub fn is_row_ordered(self) -> bool {
        matches!(self, Strategy::TreeIndex | Strategy::ImplicitIndex)
    }

    /// Checks what the strategy assumes about `table` without running it.
    /// Only the implicit index has a requirement: rows sorted on `a`.
    pub fn check(self, table: &Table) -> QueryResult<()> {
        if self == Strategy::ImplicitIndex {
            if let Some(row) = table.first_unsorted(Column::A) {
                return Err(QueryError::UnsortedColumn {
                    column: Column::A,
                    row,
                });
            }
        }
        Ok(())
    }

    pub fn execute(self, table: &Table, query: &ConjunctiveQuery) -> ResultSet {
        let result = match self {
            Strategy::TreeIndex => tree_index(table, query),
            Strategy::ImplicitIndex => implicit_index(table, query),
            Strategy::CompositeTree => composite_tree(table, query),
            Strategy::CompositeHash => composite_hash(table, query),
        };
        debug!(
            "strategy {} over {} rows: {} matched {} rows",
            self,
            table.len(),
            query,
            result.len()
        );
        result
    }

    pub fn run(self, table: &Table, query: &ConjunctiveQuery) -> Vec<Row> {
        self.execute(table, query).resolve(table)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = QueryError;

    fn from_str(s: &str) -> QueryResult<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or(QueryError::UnknownStrategy(normalized))
    }
}

/// `a` via a tree index, one equality lookup per value unioned together,
/// intersected with a tree index range lookup on `b`.
pub fn tree_index(table: &Table, query: &ConjunctiveQuery) -> ResultSet {
    let index_a = OrderedIndex::new(table, Column::A);
    let index_b = OrderedIndex::new(table, Column::B);
    let matches_a = query
        .equal_a
        .iter()
        .fold(ResultSet::empty(), |acc, &value| {
            acc.union(&index_a.equal(value, true))
        });
    matches_a.intersection(&index_b.range(query.range_b, true))
}

/// Like [`tree_index`] but `a` is looked up by binary search over the table,
/// which must be sorted on `a`.
pub fn implicit_index(table: &Table, query: &ConjunctiveQuery) -> ResultSet {
    let index_a = ImplicitIndex::new(table, Column::A);
    let index_b = OrderedIndex::new(table, Column::B);
    let matches_a = query
        .equal_a
        .iter()
        .fold(ResultSet::empty(), |acc, &value| {
            acc.union(&index_a.equal(value, true))
        });
    matches_a.intersection(&index_b.range(query.range_b, true))
}

pub fn composite_tree(table: &Table, query: &ConjunctiveQuery) -> ResultSet {
    OrderedCompositeIndex::new(table, Column::B).query(query.range_b, &query.equal_a)
}

pub fn composite_hash(table: &Table, query: &ConjunctiveQuery) -> ResultSet {
    HashCompositeIndex::new(table, Column::B).query(query.range_b, &query.equal_a)
}
