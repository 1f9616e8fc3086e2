use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Zero-based position of a row inside the table it came from.
pub type RowId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Row {
    pub a: i64,
    pub b: i64,
}

impl Row {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    pub fn get(&self, column: Column) -> i64 {
        match column {
            Column::A => self.a,
            Column::B => self.b,
        }
    }
}

impl From<(i64, i64)> for Row {
    fn from((a, b): (i64, i64)) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.a, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    A,
    B,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Column::A => Column::B,
            Column::B => Column::A,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Column::A => "a",
            Column::B => "b",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Column::A),
            "b" => Ok(Column::B),
            other => Err(UnknownColumn(other.to_string())),
        }
    }
}

/// Write-once sequence of rows. Indexes borrow it, so row ids stay valid for
/// as long as any index over it is alive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id)
    }

    pub fn value(&self, id: RowId, column: Column) -> Option<i64> {
        self.rows.get(id).map(|row| row.get(column))
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowId, &Row)> + '_ {
        self.rows.iter().enumerate()
    }

    /// Returns the first row whose value in `column` is smaller than its
    /// predecessor's, or `None` when the column is non-decreasing.
    pub fn first_unsorted(&self, column: Column) -> Option<RowId> {
        self.rows
            .windows(2)
            .position(|pair| pair[0].get(column) > pair[1].get(column))
            .map(|position| position + 1)
    }

    pub fn is_sorted_by(&self, column: Column) -> bool {
        self.first_unsorted(column).is_none()
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(i64, i64)]) -> Table {
        pairs.iter().copied().map(Row::from).collect()
    }

    #[test]
    fn field_access_by_position() {
        let table = table(&[(1000, 10), (2000, 40)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.value(1, Column::A), Some(2000));
        assert_eq!(table.value(0, Column::B), Some(10));
        assert_eq!(table.value(2, Column::A), None);
    }

    #[test]
    fn detects_first_unsorted_row() {
        let table = table(&[(1, 5), (2, 4), (2, 3), (1, 9)]);
        assert_eq!(table.first_unsorted(Column::A), Some(3));
        assert_eq!(table.first_unsorted(Column::B), Some(1));
        assert!(Table::default().is_sorted_by(Column::A));
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("A".parse::<Column>(), Ok(Column::A));
        assert_eq!(" b ".parse::<Column>(), Ok(Column::B));
        assert_eq!("c".parse::<Column>(), Err(UnknownColumn("c".to_string())));
        assert_eq!(Column::A.other(), Column::B);
    }

    #[test]
    fn row_display_matches_plain_output() {
        assert_eq!(Row::new(1000, 10).to_string(), "1000, 10");
    }
}
