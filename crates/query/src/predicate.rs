use crate::error::{QueryError, QueryResult};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Half-open interval `[lo, hi)` over column values. An inverted range
/// (`lo >= hi`) is valid and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeyRange {
    pub lo: i64,
    pub hi: i64,
}

impl KeyRange {
    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn is_empty(&self) -> bool {
        self.lo >= self.hi
    }

    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value < self.hi
    }

    /// `None` for an empty range, so callers never hand `BTreeMap::range` an
    /// inverted interval.
    pub fn bounds(&self) -> Option<Range<i64>> {
        if self.is_empty() {
            None
        } else {
            Some(self.lo..self.hi)
        }
    }
}

impl From<Range<i64>> for KeyRange {
    fn from(range: Range<i64>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<(i64, i64)> for KeyRange {
    fn from((lo, hi): (i64, i64)) -> Self {
        Self::new(lo, hi)
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lo, self.hi)
    }
}

impl FromStr for KeyRange {
    type Err = QueryError;

    /// Parses `lo..hi`.
    fn from_str(s: &str) -> QueryResult<Self> {
        let (lo, hi) = s
            .split_once("..")
            .ok_or_else(|| QueryError::InvalidRange(format!("expected lo..hi, got {:?}", s)))?;
        let lo = parse_value(lo).map_err(|_| QueryError::InvalidRange(s.to_string()))?;
        let hi = parse_value(hi).map_err(|_| QueryError::InvalidRange(s.to_string()))?;
        Ok(Self::new(lo, hi))
    }
}

pub fn parse_value(text: &str) -> QueryResult<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|err| QueryError::InvalidValue(format!("{:?}: {}", trimmed, err)))
}

/// Parses a comma separated list of column values, e.g. `1000,2000,3000`.
pub fn parse_values(text: &str) -> QueryResult<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(parse_value).collect()
}

/// `a IN (equal_a...) AND b IN [range_b)`: the query shape every pipeline
/// strategy answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjunctiveQuery {
    pub equal_a: Vec<i64>,
    pub range_b: KeyRange,
}

impl ConjunctiveQuery {
    pub fn new(equal_a: Vec<i64>, range_b: impl Into<KeyRange>) -> Self {
        Self {
            equal_a,
            range_b: range_b.into(),
        }
    }
}

impl Default for ConjunctiveQuery {
    fn default() -> Self {
        Self::new(vec![1000, 2000, 3000], 10..50)
    }
}

impl fmt::Display for ConjunctiveQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .equal_a
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "a IN ({}) AND b IN {}", values, self.range_b)
    }
}
