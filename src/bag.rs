//! An ordered-insertion multiset counter.
//!
//! [`Bag`] pairs a counting map with a separate first-seen order so that
//! distinct members can be enumerated deterministically. It is append-only:
//! counts only grow, and nothing is ever removed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// A multiset over hashable values.
///
/// Tracks how many times each value has been appended, the running total of
/// all appends, and the order in which distinct values were first seen.
///
/// # Examples
///
/// ```
/// use eventspace::Bag;
///
/// let mut bag = Bag::new();
/// bag.append("a");
/// bag.append("b");
/// bag.append("a");
///
/// assert_eq!(bag.count(&"a"), 2);
/// assert_eq!(bag.total(), 3);
/// assert_eq!(bag.members(), ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Bag<T> {
    counts: HashMap<T, u64>,
    order: Vec<T>,
    total: u64,
}

impl<T> PartialEq for Bag<T>
where
    T: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.order == other.order && self.counts == other.counts
    }
}

impl<T> Eq for Bag<T> where T: Eq + Hash {}

impl<T> Bag<T> {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }

    /// Total number of appends recorded, duplicates included.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// The distinct values observed so far, in first-insertion order.
    #[must_use]
    pub fn members(&self) -> &[T] {
        &self.order
    }

    /// Number of distinct values observed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<T> Bag<T>
where
    T: Eq + Hash + Clone,
{
    /// Records one occurrence of `value`.
    ///
    /// A value seen for the first time is also recorded in the enumeration
    /// order. Never fails.
    pub fn append(&mut self, value: T) {
        match self.counts.entry(value) {
            Entry::Occupied(mut slot) => *slot.get_mut() += 1,
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(1);
            }
        }
        self.total += 1;
    }

    /// Occurrences of `value` recorded so far, or 0 if never seen.
    #[must_use]
    pub fn count(&self, value: &T) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Relative frequency of `value`: `count / total`.
    ///
    /// This is an unchecked floating-point division: on an empty bag the
    /// result is `0.0 / 0.0 == NaN`, matching IEEE-754 semantics. Callers
    /// that need a guard should check [`Bag::total`] first.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn p(&self, value: &T) -> f64 {
        self.count(value) as f64 / self.total as f64
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Bag<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for Bag<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

// The wire form is an ordered list of {value, count} entries. Serializing the
// count map directly would lose the insertion order, which is observable state.

#[derive(Serialize)]
struct BagEntryRef<'a, T> {
    value: &'a T,
    count: u64,
}

#[derive(Deserialize)]
struct BagEntry<T> {
    value: T,
    count: u64,
}

impl<T> Serialize for Bag<T>
where
    T: Eq + Hash + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.order.len()))?;
        for value in &self.order {
            let count = self.counts[value];
            seq.serialize_element(&BagEntryRef { value, count })?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Bag<T>
where
    T: Eq + Hash + Clone + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<BagEntry<T>>::deserialize(deserializer)?;
        let mut bag = Self::new();
        for entry in entries {
            if entry.count == 0 {
                return Err(de::Error::custom("bag entry with zero count"));
            }
            if bag.counts.insert(entry.value.clone(), entry.count).is_some() {
                return Err(de::Error::custom("duplicate value in bag entries"));
            }
            bag.order.push(entry.value);
            bag.total += entry.count;
        }
        Ok(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bag() {
        let bag: Bag<&str> = Bag::new();
        assert_eq!(bag.total(), 0);
        assert_eq!(bag.count(&"anything"), 0);
        assert!(bag.is_empty());
        assert!(bag.members().is_empty());
    }

    #[test]
    fn test_append_counts_duplicates() {
        let mut bag = Bag::new();
        bag.append("a");
        bag.append("b");
        bag.append("a");
        bag.append("a");

        assert_eq!(bag.count(&"a"), 3);
        assert_eq!(bag.count(&"b"), 1);
        assert_eq!(bag.count(&"c"), 0);
        assert_eq!(bag.total(), 4);
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_members_preserve_insertion_order() {
        let mut bag = Bag::new();
        for value in ["z", "m", "a", "m", "z", "q"] {
            bag.append(value);
        }
        assert_eq!(bag.members(), ["z", "m", "a", "q"]);
    }

    #[test]
    fn test_extend_appends_per_element() {
        let mut bag = Bag::new();
        bag.extend(["x", "x", "y"]);
        assert_eq!(bag.count(&"x"), 2);
        assert_eq!(bag.count(&"y"), 1);
        assert_eq!(bag.total(), 3);
    }

    #[test]
    fn test_from_iterator() {
        let bag: Bag<u32> = [1, 2, 2, 3].into_iter().collect();
        assert_eq!(bag.total(), 4);
        assert_eq!(bag.members(), [1, 2, 3]);
    }

    #[test]
    fn test_p_is_relative_frequency() {
        let mut bag = Bag::new();
        bag.extend(["a", "a", "b", "c"]);
        assert!((bag.p(&"a") - 0.5).abs() < f64::EPSILON);
        assert!((bag.p(&"b") - 0.25).abs() < f64::EPSILON);
        assert!((bag.p(&"missing") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_p_on_empty_bag_is_nan() {
        let bag: Bag<&str> = Bag::new();
        assert!(bag.p(&"a").is_nan());
    }

    #[test]
    fn test_total_matches_sum_of_counts() {
        let mut bag = Bag::new();
        bag.extend([5u32, 5, 7, 9, 9, 9]);
        let sum: u64 = bag.members().iter().map(|m| bag.count(m)).sum();
        assert_eq!(bag.total(), sum);
    }

    #[test]
    fn test_serde_round_trip_preserves_order_and_counts() {
        let mut bag = Bag::new();
        bag.extend(["gamma", "alpha", "alpha", "beta"]);

        let json = serde_json::to_string(&bag).unwrap();
        let restored: Bag<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.members(), ["gamma", "alpha", "beta"]);
        assert_eq!(restored.count(&"alpha".to_string()), 2);
        assert_eq!(restored.total(), 4);
    }

    #[test]
    fn test_serde_wire_form_is_ordered_entries() {
        let mut bag = Bag::new();
        bag.extend(["b", "a"]);
        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "value": "b", "count": 1 },
                { "value": "a", "count": 1 }
            ])
        );
    }

    #[test]
    fn test_deserialize_rejects_duplicate_values() {
        let json = r#"[{"value":"a","count":1},{"value":"a","count":2}]"#;
        let result: Result<Bag<String>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_count() {
        let json = r#"[{"value":"a","count":0}]"#;
        let result: Result<Bag<String>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
