use crate::error::{QueryError, QueryResult};
use crate::predicate::KeyRange;
use crate::result_set::ResultSet;
use common::{Column, Table};
use log::trace;

/// Index that stores nothing: it binary-searches the table itself, which must
/// already be sorted ascending on `column`.
///
/// [`ImplicitIndex::new`] only checks that in debug builds. On an unsorted
/// table in release builds lookups silently return incomplete or wrong ids.
/// [`ImplicitIndex::try_new`] pays for the full check up front.
#[derive(Debug, Clone, Copy)]
pub struct ImplicitIndex<'t> {
    table: &'t Table,
    column: Column,
}

impl<'t> ImplicitIndex<'t> {
    pub fn new(table: &'t Table, column: Column) -> Self {
        debug_assert!(
            table.is_sorted_by(column),
            "implicit index requires a table sorted on column {}",
            column
        );
        Self { table, column }
    }

    pub fn try_new(table: &'t Table, column: Column) -> QueryResult<Self> {
        if let Some(row) = table.first_unsorted(column) {
            return Err(QueryError::UnsortedColumn { column, row });
        }
        Ok(Self { table, column })
    }

    pub fn table(&self) -> &'t Table {
        self.table
    }

    pub fn column(&self) -> Column {
        self.column
    }

    /// The matching run is contiguous, so its ids are increasing whether or
    /// not `_sort_by_index` is set.
    pub fn equal(&self, value: i64, _sort_by_index: bool) -> ResultSet {
        let lower = self.lower_bound(value);
        let upper = self.upper_bound(value);
        trace!(
            "implicit index {} = {} matched rows {}..{}",
            self.column,
            value,
            lower,
            upper
        );
        (lower..upper).collect()
    }

    pub fn range(&self, range: impl Into<KeyRange>, _sort_by_index: bool) -> ResultSet {
        let range = range.into();
        if range.is_empty() {
            return ResultSet::empty();
        }
        let lower = self.lower_bound(range.lo);
        let upper = self.lower_bound(range.hi);
        trace!(
            "implicit index {} in {} matched rows {}..{}",
            self.column,
            range,
            lower,
            upper
        );
        (lower..upper).collect()
    }

    /// First row whose value is `>= value`.
    fn lower_bound(&self, value: i64) -> usize {
        let column = self.column;
        self.table
            .rows()
            .partition_point(|row| row.get(column) < value)
    }

    /// First row whose value is `> value`.
    fn upper_bound(&self, value: i64) -> usize {
        let column = self.column;
        self.table
            .rows()
            .partition_point(|row| row.get(column) <= value)
    }
}
