mod table;

pub use table::{Column, Row, RowId, Table, UnknownColumn};
