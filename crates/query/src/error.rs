use common::{Column, RowId, UnknownColumn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error(transparent)]
    UnknownColumn(#[from] UnknownColumn),
    #[error("column {column} is not sorted: row {row} is smaller than its predecessor")]
    UnsortedColumn { column: Column, row: RowId },
}

pub type QueryResult<T> = Result<T, QueryError>;
