use serde::Serialize;
use thiserror::Error;

/// A physical copy of a movie as seen by the stock planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopySlot {
    pub id: i32,
    /// Whether any rental line item points at this copy
    pub referenced: bool,
}

/// What has to happen to a movie's copies to reach the desired stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StockAdjustment {
    Unchanged,
    /// Create this many new copies
    Add(u32),
    /// Delete the copies with these ids
    Remove(Vec<i32>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    #[error(
        "cannot remove {requested} copies: only {removable} are free of rental line items"
    )]
    NotEnoughFreeCopies { requested: usize, removable: usize },
}

/// Plans the adjustment that brings `copies` to exactly `desired` entries.
///
/// Removal picks the lowest ids first and never touches a referenced copy.
/// If there are not enough unreferenced copies the whole plan is rejected.
pub fn plan(copies: &[CopySlot], desired: u32) -> Result<StockAdjustment, StockError> {
    let current = copies.len();
    let desired = desired as usize;

    if desired == current {
        return Ok(StockAdjustment::Unchanged);
    }

    if desired > current {
        return Ok(StockAdjustment::Add((desired - current) as u32));
    }

    let requested = current - desired;
    let mut free: Vec<i32> = copies
        .iter()
        .filter(|copy| !copy.referenced)
        .map(|copy| copy.id)
        .collect();

    if free.len() < requested {
        return Err(StockError::NotEnoughFreeCopies {
            requested,
            removable: free.len(),
        });
    }

    free.sort_unstable();
    free.truncate(requested);

    Ok(StockAdjustment::Remove(free))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(ids: &[i32]) -> Vec<CopySlot> {
        ids.iter()
            .map(|&id| CopySlot {
                id,
                referenced: false,
            })
            .collect()
    }

    #[test]
    fn test_equal_count_is_unchanged() {
        assert_eq!(plan(&free(&[1, 2, 3]), 3), Ok(StockAdjustment::Unchanged));
        assert_eq!(plan(&[], 0), Ok(StockAdjustment::Unchanged));
    }

    #[test]
    fn test_growth_adds_missing_copies() {
        assert_eq!(plan(&[], 5), Ok(StockAdjustment::Add(5)));
        assert_eq!(plan(&free(&[4, 9]), 10), Ok(StockAdjustment::Add(8)));
    }

    #[test]
    fn test_shrink_removes_lowest_ids_first() {
        let copies = free(&[12, 3, 7, 5, 20]);
        assert_eq!(
            plan(&copies, 2),
            Ok(StockAdjustment::Remove(vec![3, 5, 7]))
        );
    }

    #[test]
    fn test_shrink_to_zero_removes_everything() {
        let copies = free(&[2, 1]);
        assert_eq!(plan(&copies, 0), Ok(StockAdjustment::Remove(vec![1, 2])));
    }

    #[test]
    fn test_shrink_skips_referenced_copies() {
        let copies = vec![
            CopySlot {
                id: 1,
                referenced: true,
            },
            CopySlot {
                id: 2,
                referenced: false,
            },
            CopySlot {
                id: 3,
                referenced: true,
            },
            CopySlot {
                id: 4,
                referenced: false,
            },
        ];
        assert_eq!(plan(&copies, 2), Ok(StockAdjustment::Remove(vec![2, 4])));
    }

    #[test]
    fn test_shrink_rejected_when_referenced_copies_block_it() {
        let copies = vec![
            CopySlot {
                id: 1,
                referenced: true,
            },
            CopySlot {
                id: 2,
                referenced: true,
            },
            CopySlot {
                id: 3,
                referenced: false,
            },
        ];
        assert_eq!(
            plan(&copies, 0),
            Err(StockError::NotEnoughFreeCopies {
                requested: 3,
                removable: 1,
            })
        );
    }
}
