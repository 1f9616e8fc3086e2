use super::inner::{InnerIndex, OrderedInner};
use crate::predicate::KeyRange;
use crate::result_set::ResultSet;
use common::{Column, RowId, Table};
use log::{debug, trace};

/// Tree index over one column of a table.
///
/// Lookups return ids in index order (value, then row id). Pass
/// `sort_by_index = true` to get them back in row id order, which is what
/// [`ResultSet::union`] and [`ResultSet::intersection`] require.
#[derive(Debug, Clone)]
pub struct OrderedIndex<'t> {
    table: &'t Table,
    column: Column,
    entries: OrderedInner,
}

impl<'t> OrderedIndex<'t> {
    pub fn new(table: &'t Table, column: Column) -> Self {
        let mut entries = OrderedInner::new();
        for (id, row) in table.iter() {
            entries.insert(row.get(column), id);
        }
        debug!(
            "built ordered index on column {}: {} rows, {} distinct values",
            column,
            entries.len(),
            entries.distinct_values()
        );
        Self {
            table,
            column,
            entries,
        }
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distinct_values(&self) -> usize {
        self.entries.distinct_values()
    }

    pub fn equal(&self, value: i64, sort_by_index: bool) -> ResultSet {
        let row_ids = self.entries.equal_range(value).to_vec();
        trace!(
            "ordered index {} = {} matched {} rows",
            self.column,
            value,
            row_ids.len()
        );
        finish(row_ids, sort_by_index)
    }

    pub fn range(&self, range: impl Into<KeyRange>, sort_by_index: bool) -> ResultSet {
        let range = range.into();
        let row_ids: Vec<RowId> = self.entries.range(range).collect();
        trace!(
            "ordered index {} in {} matched {} rows",
            self.column,
            range,
            row_ids.len()
        );
        finish(row_ids, sort_by_index)
    }
}

fn finish(mut row_ids: Vec<RowId>, sort_by_index: bool) -> ResultSet {
    if sort_by_index {
        row_ids.sort_unstable();
    }
    ResultSet::new(row_ids)
}
