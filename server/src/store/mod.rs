//! In-memory stores for todo lists and todo items.
//!
//! # Design
//! Each store owns a [`Collection`] of records kept in insertion order. The
//! collection hands out ids and performs the by-id lookups; the stores layer
//! the per-resource semantics on top. Lookups return `Option` and the stores
//! decide whether a miss is a [`StoreError::NotFound`] or a silent miss.

pub mod error;
pub mod todo_item;
pub mod todo_list;

pub use error::{Entity, StoreError};
pub use todo_item::TodoItemStore;
pub use todo_list::TodoListStore;

/// A record addressable by a store-assigned integer id.
pub trait Record {
    fn id(&self) -> i64;
}

/// Insertion-ordered records plus the id high-water mark.
#[derive(Debug)]
pub struct Collection<T> {
    records: Vec<T>,
    last_issued: i64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            last_issued: 0,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records,
            last_issued: 0,
        }
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Next id is one past the largest id ever seen. Starts at 1.
    /// `None` once a seeded record holds `i64::MAX`.
    pub fn next_id(&mut self) -> Option<i64> {
        let max_existing = self.records.iter().map(Record::id).max().unwrap_or(0);
        let next = max_existing.max(self.last_issued).checked_add(1)?;
        self.last_issued = next;
        Some(next)
    }

    pub fn find(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }
}
