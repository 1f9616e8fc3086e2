use crate::predicate::KeyRange;
use ahash::AHashMap;
use common::RowId;
use std::collections::BTreeMap;

/// Value -> row id multi-map that a composite index keeps per outer group.
pub trait InnerIndex: Default {
    fn insert(&mut self, value: i64, id: RowId);

    /// Ids stored under `value`, in insertion order.
    fn equal_range(&self, value: i64) -> &[RowId];

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderedInner {
    entries: BTreeMap<i64, Vec<RowId>>,
    len: usize,
}

impl OrderedInner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct_values(&self) -> usize {
        self.entries.len()
    }

    /// Ids whose value lies in `range`, in value order then insertion order.
    pub fn range(&self, range: KeyRange) -> impl Iterator<Item = RowId> + '_ {
        range
            .bounds()
            .into_iter()
            .flat_map(move |bounds| self.entries.range(bounds))
            .flat_map(|(_, ids)| ids.iter().copied())
    }
}

impl InnerIndex for OrderedInner {
    fn insert(&mut self, value: i64, id: RowId) {
        self.entries.entry(value).or_default().push(id);
        self.len += 1;
    }

    fn equal_range(&self, value: i64) -> &[RowId] {
        self.entries.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[derive(Debug, Clone, Default)]
pub struct HashInner {
    entries: AHashMap<i64, Vec<RowId>>,
    len: usize,
}

impl HashInner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn distinct_values(&self) -> usize {
        self.entries.len()
    }
}

impl InnerIndex for HashInner {
    fn insert(&mut self, value: i64, id: RowId) {
        self.entries.entry(value).or_default().push(id);
        self.len += 1;
    }

    fn equal_range(&self, value: i64) -> &[RowId] {
        self.entries.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.len
    }
}
