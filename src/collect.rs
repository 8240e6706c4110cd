//! Generic collection helpers: grouping and non-mutating stable sort.

use std::collections::HashMap;
use std::hash::Hash;

/// Partition `items` into groups keyed by `key`.
///
/// Items keep their input order within each group.
pub fn group_by<I, T, K, F>(items: I, mut key: F) -> HashMap<K, Vec<T>>
where
  I: IntoIterator<Item = T>,
  K: Eq + Hash,
  F: FnMut(&T) -> K,
{
  let mut groups: HashMap<K, Vec<T>> = HashMap::new();
  for item in items {
    groups.entry(key(&item)).or_default().push(item);
  }
  groups
}

/// Sorted copy of `items` ordered by `key`.
///
/// The sort is stable and the input slice is left untouched.
pub fn sorted_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
  T: Clone,
  K: Ord,
  F: FnMut(&T) -> K,
{
  let mut out = items.to_vec();
  out.sort_by_key(key);
  out
}
