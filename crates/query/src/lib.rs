//! In-memory index and query execution core over a two-column integer table.

pub mod error;
pub mod index;
pub mod pipeline;
pub mod predicate;
pub mod result_set;

pub use common::{Column, Row, RowId, Table};
pub use error::{QueryError, QueryResult};
pub use index::{
    CompositeIndex, HashCompositeIndex, HashInner, ImplicitIndex, InnerIndex,
    OrderedCompositeIndex, OrderedIndex, OrderedInner,
};
pub use pipeline::Strategy;
pub use predicate::{parse_values, ConjunctiveQuery, KeyRange};
pub use result_set::{CombineType, ResultSet};
