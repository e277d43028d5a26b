use super::{Value, ValueRecord};

use std::collections::HashMap;

/// A non-unique hash index over a borrowed slice of [`ValueRecord`]s.
///
/// Records are grouped by the value of a single attribute. Only equality lookup
/// is supported. Records whose attribute is missing or null are not indexed, so
/// a null key never matches anything.
///
/// # Ordering
///
/// Each group keeps its records in the order they appear in the source slice.
///
/// # Cloning
///
/// Nothing is cloned: both keys and grouped records borrow from the source slice.
#[derive(Debug)]
pub struct GroupIndex<'a> {
    map: HashMap<&'a Value, Vec<&'a ValueRecord>>,
}

impl<'a> GroupIndex<'a> {
    /// Build an index over `records`, keyed by the attribute `key`.
    pub fn new(records: &'a [ValueRecord], key: &str) -> Self {
        let mut map: HashMap<&'a Value, Vec<&'a ValueRecord>> = HashMap::new();

        for record in records {
            let Some(value) = record.get(key) else {
                continue;
            };

            if value.is_null() {
                continue;
            }

            map.entry(value).or_default().push(record);
        }

        Self { map }
    }

    /// Returns the records whose key equals `key`, in source order.
    pub fn find(&self, key: &Value) -> &[&'a ValueRecord] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
