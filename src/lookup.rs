//! Read-only id-keyed lookup tables.

use log::warn;
use std::collections::HashMap;

/// A record that carries its own numeric key.
pub trait Keyed {
    /// Unique identifier of the record.
    fn id(&self) -> u32;
}

/// An id-keyed table built once at load time and only read afterwards.
///
/// When two records share an id the later one replaces the earlier one.
#[derive(Debug, Clone)]
pub struct LookupTable<T> {
    entries: HashMap<u32, T>,
}

impl<T: Keyed> LookupTable<T> {
    /// Builds a table from records, keyed by [`Keyed::id`].
    pub fn from_records<I: IntoIterator<Item = T>>(records: I) -> Self {
        let mut entries = HashMap::new();
        for record in records {
            let id = record.id();
            if entries.insert(id, record).is_some() {
                warn!("Duplicate id {}, keeping the later record", id);
            }
        }
        LookupTable { entries }
    }

    /// Returns the record with the given id.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Returns `true` if a record with this id exists.
    pub fn contains(&self, id: u32) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut records: Vec<&T> = self.entries.values().collect();
        records.sort_by_key(|r| r.id());
        records.into_iter()
    }
}

impl<T: Keyed> FromIterator<T> for LookupTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(u32, &'static str);

    impl Keyed for Row {
        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_get_by_id() {
        let table: LookupTable<Row> = vec![Row(2, "b"), Row(1, "a")].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1), Some(&Row(1, "a")));
        assert!(table.get(3).is_none());
        assert!(table.contains(2));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let table = LookupTable::from_records(vec![Row(1, "old"), Row(1, "new")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1), Some(&Row(1, "new")));
    }

    #[test]
    fn test_iter_is_sorted_by_id() {
        let table = LookupTable::from_records(vec![Row(9, "c"), Row(3, "a"), Row(5, "b")]);
        let ids: Vec<u32> = table.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![3, 5, 9]);
    }

    #[test]
    fn test_empty_table() {
        let table: LookupTable<Row> = LookupTable::from_records(Vec::new());
        assert!(table.is_empty());
    }
}
