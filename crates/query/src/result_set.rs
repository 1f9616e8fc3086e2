use common::{Row, RowId, Table};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineType {
    Union,
    Intersection,
}

/// Row ids matched by a query.
///
/// Combination operators are linear merges and expect both operands to be
/// strictly increasing. That is not checked: feeding an index-ordered set
/// (`sort_by_index = false`, or a composite index query) into `union` or
/// `intersection` gives a wrong answer rather than a panic. Use
/// [`ResultSet::normalized`] first when in doubt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    row_ids: Vec<RowId>,
}

impl ResultSet {
    pub fn new(row_ids: Vec<RowId>) -> Self {
        Self { row_ids }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.row_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }

    pub fn row_ids(&self) -> &[RowId] {
        &self.row_ids
    }

    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.row_ids.iter().copied()
    }

    pub fn contains(&self, id: RowId) -> bool {
        if self.is_normalized() {
            self.row_ids.binary_search(&id).is_ok()
        } else {
            self.row_ids.contains(&id)
        }
    }

    /// True when the ids are strictly increasing, i.e. safe to combine.
    pub fn is_normalized(&self) -> bool {
        self.row_ids.windows(2).all(|pair| pair[0] < pair[1])
    }

    pub fn normalized(mut self) -> Self {
        self.row_ids.sort_unstable();
        self.row_ids.dedup();
        self
    }

    pub fn combine(self, other: &ResultSet, combine_type: CombineType) -> Self {
        let row_ids = match combine_type {
            CombineType::Union => merge_union(&self.row_ids, &other.row_ids),
            CombineType::Intersection => merge_intersection(&self.row_ids, &other.row_ids),
        };
        Self { row_ids }
    }

    pub fn union(self, other: &ResultSet) -> Self {
        self.combine(other, CombineType::Union)
    }

    pub fn intersection(self, other: &ResultSet) -> Self {
        self.combine(other, CombineType::Intersection)
    }

    /// Looks every id up in `table`, keeping this set's order. Ids that do not
    /// belong to `table` are skipped.
    pub fn resolve(&self, table: &Table) -> Vec<Row> {
        self.row_ids
            .iter()
            .filter_map(|&id| table.row(id).copied())
            .collect()
    }
}

impl From<Vec<RowId>> for ResultSet {
    fn from(row_ids: Vec<RowId>) -> Self {
        Self::new(row_ids)
    }
}

impl FromIterator<RowId> for ResultSet {
    fn from_iter<T: IntoIterator<Item = RowId>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ResultSet {
    type Item = RowId;
    type IntoIter = std::vec::IntoIter<RowId>;

    fn into_iter(self) -> Self::IntoIter {
        self.row_ids.into_iter()
    }
}

fn merge_union(left: &[RowId], right: &[RowId]) -> Vec<RowId> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => {
                merged.push(left[i]);
                i += 1;
            }
            Ordering::Greater => {
                merged.push(right[j]);
                j += 1;
            }
            Ordering::Equal => {
                merged.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

fn merge_intersection(left: &[RowId], right: &[RowId]) -> Vec<RowId> {
    let mut merged = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                merged.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged
}
