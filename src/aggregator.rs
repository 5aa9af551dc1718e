//! Grouping and ranking
//!
//! [`group_by`] counts records per distinct value of a [`RecordField`]; [`Grouping::top_n`]
//! picks the highest counts. Ranking is a total order (count descending, then key
//! ascending) so equal counts always come out the same way.
//!
//! With the `parallel` feature, counting is split across rayon workers and the partial
//! maps are merged before ranking. The merged counts are identical to a sequential pass.

use crate::error::{AnalysisError, AnalysisOutcome};
use crate::models::{Group, Record, RecordField};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Distinct values of one field and their counts.
///
/// Keys are unique. Groups are held in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    field: RecordField,
    groups: Vec<Group>,
}

impl Grouping {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all counts; equals the number of records grouped.
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// The `n` highest-ranked groups.
    ///
    /// `n == 0` gives an empty list. Asking for more groups than exist is an error
    /// rather than a shorter list.
    pub fn top_n(&self, n: usize) -> AnalysisOutcome<Vec<Group>> {
        if n > self.groups.len() {
            return Err(AnalysisError::InsufficientGroups {
                field: self.field,
                requested: n,
                available: self.groups.len(),
            });
        }

        let mut ranked = self.groups.clone();
        ranked.sort_unstable_by(rank_order);
        ranked.truncate(n);
        Ok(ranked)
    }
}

/// Count descending, then key ascending.
pub fn rank_order(a: &Group, b: &Group) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key))
}

pub fn group_by(records: &[Record], field: RecordField) -> Grouping {
    let counts = count_keys(records, field);

    let mut groups: Vec<Group> = counts
        .into_iter()
        .map(|(key, count)| Group::new(key, count))
        .collect();
    groups.sort_unstable_by(|a, b| a.key.cmp(&b.key));

    Grouping { field, groups }
}

#[cfg(not(feature = "parallel"))]
fn count_keys(records: &[Record], field: RecordField) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(field.value(record)).or_insert(0) += 1;
    }
    counts
}

#[cfg(feature = "parallel")]
fn count_keys(records: &[Record], field: RecordField) -> HashMap<&str, usize> {
    use rayon::prelude::*;

    records
        .par_iter()
        .fold(HashMap::new, |mut counts, record| {
            *counts.entry(field.value(record)).or_insert(0) += 1;
            counts
        })
        .reduce(HashMap::new, |mut merged, partial| {
            for (key, count) in partial {
                *merged.entry(key).or_insert(0) += count;
            }
            merged
        })
}
