//! Append-only record collection
//!
//! Ids are the decimal string of the collection size at insertion time, so
//! they are dense, never reused and never change (collections only grow).

use crate::core::types::Record;

/// Append-only sequence of records with sequential string ids
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Assign the next id to `record`, append it and return the stored record
    pub fn insert(&mut self, mut record: T) -> &T {
        let id = self.records.len().to_string();
        record.set_id(id);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Look up a record by id
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.position(id).map(|index| &self.records[index])
    }

    /// Look up a record by id for an in-place edge append
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.position(id).map(move |index| &mut self.records[index])
    }

    /// All records in insertion order
    pub fn all(&self) -> impl Iterator<Item = &T> + '_ {
        self.records.iter()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Ids are positions; only the canonical decimal form matches ("01" != "1").
    fn position(&self, id: &str) -> Option<usize> {
        let index: usize = id.parse().ok()?;
        let record = self.records.get(index)?;
        (record.id() == id).then_some(index)
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
