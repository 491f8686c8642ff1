use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A submitted rental line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailEntry {
    /// A line item that claims to be already persisted
    Existing { id: i32, movie_copy_id: i32 },
    /// A line item that has never been saved
    New { movie_copy_id: i32 },
}

impl DetailEntry {
    pub fn new(id: Option<i32>, movie_copy_id: i32) -> Self {
        match id {
            Some(id) => Self::Existing { id, movie_copy_id },
            None => Self::New { movie_copy_id },
        }
    }

    pub fn movie_copy_id(&self) -> i32 {
        match self {
            Self::Existing { movie_copy_id, .. } | Self::New { movie_copy_id } => *movie_copy_id,
        }
    }
}

/// A line item as it is currently stored for a rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoredDetail {
    pub id: i32,
    pub movie_copy_id: i32,
}

/// A stored line item whose copy reference changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailUpdate {
    pub id: i32,
    pub movie_copy_id: i32,
}

/// The writes needed to turn the stored line items into the submitted ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailDiff {
    pub update: Vec<DetailUpdate>,
    /// Copy ids of the line items to insert, in submission order
    pub insert: Vec<i32>,
    pub delete: Vec<i32>,
}

impl DetailDiff {
    pub fn is_noop(&self) -> bool {
        self.update.is_empty() && self.insert.is_empty() && self.delete.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("line item {0} was submitted more than once")]
    DuplicateId(i32),
}

/// Three-way diff between the stored and the submitted line items of a rent.
///
/// An `Existing` entry whose id is not among `current` is treated as new, so
/// the store assigns it a fresh id. Stored rows that were not resubmitted are
/// deleted. Updates are only emitted when the copy reference actually changes.
pub fn diff(current: &[StoredDetail], submitted: &[DetailEntry]) -> Result<DetailDiff, DetailError> {
    let stored: HashMap<i32, i32> = current
        .iter()
        .map(|detail| (detail.id, detail.movie_copy_id))
        .collect();

    let mut kept = HashSet::new();
    let mut result = DetailDiff::default();

    for entry in submitted {
        match *entry {
            DetailEntry::Existing { id, movie_copy_id } if stored.contains_key(&id) => {
                if !kept.insert(id) {
                    return Err(DetailError::DuplicateId(id));
                }
                if stored[&id] != movie_copy_id {
                    result.update.push(DetailUpdate { id, movie_copy_id });
                }
            }
            entry => result.insert.push(entry.movie_copy_id()),
        }
    }

    result.delete = current
        .iter()
        .map(|detail| detail.id)
        .filter(|id| !kept.contains(id))
        .collect();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(pairs: &[(i32, i32)]) -> Vec<StoredDetail> {
        pairs
            .iter()
            .map(|&(id, movie_copy_id)| StoredDetail { id, movie_copy_id })
            .collect()
    }

    #[test]
    fn test_empty_state_inserts_everything() {
        let submitted = [DetailEntry::new(None, 2), DetailEntry::new(None, 11)];
        let diff = diff(&[], &submitted).unwrap();

        assert_eq!(diff.insert, vec![2, 11]);
        assert!(diff.update.is_empty());
        assert!(diff.delete.is_empty());
    }

    #[test]
    fn test_resubmitting_stored_items_is_noop() {
        let current = stored(&[(1, 2), (2, 11)]);
        let submitted = [DetailEntry::new(Some(1), 2), DetailEntry::new(Some(2), 11)];

        assert!(diff(&current, &submitted).unwrap().is_noop());
    }

    #[test]
    fn test_mixed_update_insert_delete() {
        let current = stored(&[(1, 2), (2, 11), (3, 14)]);
        let submitted = [
            DetailEntry::new(Some(1), 2),
            DetailEntry::new(Some(2), 12),
            DetailEntry::new(None, 30),
        ];
        let diff = diff(&current, &submitted).unwrap();

        assert_eq!(
            diff.update,
            vec![DetailUpdate {
                id: 2,
                movie_copy_id: 12
            }]
        );
        assert_eq!(diff.insert, vec![30]);
        assert_eq!(diff.delete, vec![3]);
    }

    #[test]
    fn test_unknown_id_is_inserted_as_new() {
        let current = stored(&[(1, 2)]);
        let submitted = [DetailEntry::new(Some(1), 2), DetailEntry::new(Some(99), 5)];
        let diff = diff(&current, &submitted).unwrap();

        assert_eq!(diff.insert, vec![5]);
        assert!(diff.delete.is_empty());
    }

    #[test]
    fn test_empty_submission_deletes_everything() {
        let current = stored(&[(4, 2), (5, 3)]);
        let diff = diff(&current, &[]).unwrap();

        assert_eq!(diff.delete, vec![4, 5]);
        assert!(diff.insert.is_empty());
    }

    #[test]
    fn test_duplicate_existing_id_is_rejected() {
        let current = stored(&[(1, 2)]);
        let submitted = [DetailEntry::new(Some(1), 2), DetailEntry::new(Some(1), 3)];

        assert_eq!(diff(&current, &submitted), Err(DetailError::DuplicateId(1)));
    }

    #[test]
    fn test_new_entries_without_id_keep_duplicates() {
        // the same copy may appear on several new lines
        let submitted = [DetailEntry::new(None, 7), DetailEntry::new(None, 7)];
        assert_eq!(diff(&[], &submitted).unwrap().insert, vec![7, 7]);
    }
}
