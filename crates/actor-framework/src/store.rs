//! # Ordered Record Store
//!
//! The in-memory collection owned by a single `ResourceActor`. Records keep their
//! insertion order, which is the order `list` reports them in. Lookups are a linear
//! scan by id.

use crate::entity::ActorEntity;

/// An ordered, mutable collection of records for one resource type.
#[derive(Debug, Clone)]
pub struct Store<T: ActorEntity> {
    records: Vec<T>,
}

impl<T: ActorEntity> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Store<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a store that already holds `records`, in the given order.
    pub fn from_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: T) {
        self.records.push(record);
    }

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    /// Removes the record with `id`, preserving the order of the remaining records.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = String;
        type Create = String;
        type Update = String;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create_params(id: String, text: String) -> Result<Self, NoteError> {
            Ok(Self { id, text })
        }

        async fn on_update(&mut self, text: String, _ctx: &()) -> Result<(), NoteError> {
            self.text = text;
            Ok(())
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut store = Store::new();
        store.append(note("b", "second"));
        store.append(note("a", "first"));
        store.append(note("c", "third"));

        let ids: Vec<&str> = store.all().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_find_and_find_mut() {
        let mut store = Store::from_records(vec![note("1", "one"), note("2", "two")]);

        assert_eq!(store.find(&"2".to_string()).unwrap().text, "two");
        assert!(store.find(&"3".to_string()).is_none());

        store.find_mut(&"1".to_string()).unwrap().text = "uno".to_string();
        assert_eq!(store.find(&"1".to_string()).unwrap().text, "uno");
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut store = Store::from_records(vec![note("1", "a"), note("2", "b"), note("3", "c")]);

        let removed = store.remove(&"2".to_string());
        assert_eq!(removed, Some(note("2", "b")));
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].id, "3");

        assert!(store.remove(&"2".to_string()).is_none());
        assert!(!store.is_empty());
    }
}
