use super::inner::{HashInner, InnerIndex, OrderedInner};
use crate::predicate::KeyRange;
use crate::result_set::ResultSet;
use common::{Column, Table};
use log::{debug, trace};
use std::collections::BTreeMap;

pub type OrderedCompositeIndex<'t> = CompositeIndex<'t, OrderedInner>;
pub type HashCompositeIndex<'t> = CompositeIndex<'t, HashInner>;

/// Two-level index: rows grouped by the outer column in a sorted map, each
/// group holding an `I` over the other column.
///
/// `query` walks groups in ascending outer key order, so its output is
/// ordered by the outer column rather than by row id. Normalize it before
/// combining it with another set.
#[derive(Debug, Clone)]
pub struct CompositeIndex<'t, I: InnerIndex> {
    table: &'t Table,
    outer: Column,
    groups: BTreeMap<i64, I>,
    len: usize,
}

impl<'t, I: InnerIndex> CompositeIndex<'t, I> {
    pub fn new(table: &'t Table, outer: Column) -> Self {
        let inner = outer.other();
        let mut groups: BTreeMap<i64, I> = BTreeMap::new();
        for (id, row) in table.iter() {
            groups
                .entry(row.get(outer))
                .or_default()
                .insert(row.get(inner), id);
        }
        debug!(
            "built composite index outer={} inner={}: {} rows, {} groups",
            outer,
            inner,
            table.len(),
            groups.len()
        );
        Self {
            table,
            outer,
            groups,
            len: table.len(),
        }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn outer_column(&self) -> Column {
        self.outer
    }

    pub fn inner_column(&self) -> Column {
        self.outer.other()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rows with outer value in `outer_range` and inner value in
    /// `inner_values`, grouped by outer value ascending, then by position of
    /// the matching value in `inner_values`.
    pub fn query(&self, outer_range: impl Into<KeyRange>, inner_values: &[i64]) -> ResultSet {
        let outer_range = outer_range.into();
        let Some(bounds) = outer_range.bounds() else {
            return ResultSet::empty();
        };
        let mut row_ids = Vec::new();
        for group in self.groups.range(bounds).map(|(_, group)| group) {
            for &value in inner_values {
                row_ids.extend_from_slice(group.equal_range(value));
            }
        }
        trace!(
            "composite index {} in {} and {} in {:?} matched {} rows",
            self.outer,
            outer_range,
            self.inner_column(),
            inner_values,
            row_ids.len()
        );
        ResultSet::new(row_ids)
    }
}
