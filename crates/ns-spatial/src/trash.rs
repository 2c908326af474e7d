//! Per-cell trash counts.

use rustc_hash::FxHashMap;

use ns_core::GridPos;

/// Sparse map of trash counts.
///
/// Entries are created on the first deposit and are never removed, even when
/// the count drops back to 0.  Absent cells read as 0.
#[derive(Clone, Debug, Default)]
pub struct TrashField {
    counts: FxHashMap<GridPos, u32>,
}

impl TrashField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trash units at `pos`.
    #[inline]
    pub fn count(&self, pos: GridPos) -> u32 {
        self.counts.get(&pos).copied().unwrap_or(0)
    }

    /// Deposit one unit at `pos`.
    pub fn add(&mut self, pos: GridPos) {
        *self.counts.entry(pos).or_insert(0) += 1;
    }

    /// Set the count at `pos` directly.  Used for scenario setup.
    pub fn set(&mut self, pos: GridPos, count: u32) {
        self.counts.insert(pos, count);
    }

    /// Remove one unit at `pos` if there is any.  Returns `true` if a unit
    /// was removed.
    pub fn remove_one(&mut self, pos: GridPos) -> bool {
        match self.counts.get_mut(&pos) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Cells currently holding at least one unit, in unspecified order.
    pub fn dirty_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.counts
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(&p, _)| p)
    }

    /// `true` if no cell holds any trash.
    pub fn is_clean(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    /// Number of cells ever touched, including ones since cleaned.
    pub fn tracked_cells(&self) -> usize {
        self.counts.len()
    }

    /// Total units on the map.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&n| n as u64).sum()
    }

    /// Zero-trash cells on a grid of `cell_count` cells.
    pub fn clean_cells(&self, cell_count: usize) -> usize {
        cell_count - self.dirty_cells().count()
    }
}
