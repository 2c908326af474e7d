//! Static map configuration and the random layout generator.
//!
//! A [`MapLayout`] is plain data: grid dimensions plus the ordered lists of
//! house, office, park, and bin cells.  Order is significant:
//!
//! - agent *i* starts at `houses[i % houses.len()]`;
//! - nearest-bin ties resolve to the bin listed first.
//!
//! Validation happens once, when the layout is turned into a
//! [`GridMap`][crate::GridMap].

use rustc_hash::FxHashSet;

use ns_core::{GridPos, SimRng};

use crate::{SpatialError, SpatialResult};

/// Grid dimensions and role positions for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapLayout {
    pub width:   u32,
    pub height:  u32,
    pub houses:  Vec<GridPos>,
    pub offices: Vec<GridPos>,
    pub parks:   Vec<GridPos>,
    pub bins:    Vec<GridPos>,
}

impl MapLayout {
    /// An empty `width × height` grid with no roles assigned.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_houses(mut self, houses: impl IntoIterator<Item = GridPos>) -> Self {
        self.houses.extend(houses);
        self
    }

    pub fn with_offices(mut self, offices: impl IntoIterator<Item = GridPos>) -> Self {
        self.offices.extend(offices);
        self
    }

    pub fn with_parks(mut self, parks: impl IntoIterator<Item = GridPos>) -> Self {
        self.parks.extend(parks);
        self
    }

    pub fn with_bins(mut self, bins: impl IntoIterator<Item = GridPos>) -> Self {
        self.bins.extend(bins);
        self
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every configured position must lie inside the grid and no cell may
    /// carry two roles.
    pub fn validate(&self) -> SpatialResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SpatialError::EmptyGrid);
        }

        let mut seen = FxHashSet::default();
        for &pos in self.all_positions() {
            if pos.x >= self.width || pos.y >= self.height {
                return Err(SpatialError::OutOfBounds {
                    pos,
                    width:  self.width,
                    height: self.height,
                });
            }
            if !seen.insert(pos) {
                return Err(SpatialError::DuplicatePosition(pos));
            }
        }
        Ok(())
    }

    fn all_positions(&self) -> impl Iterator<Item = &GridPos> {
        self.houses
            .iter()
            .chain(&self.offices)
            .chain(&self.parks)
            .chain(&self.bins)
    }

    // ── Generator ─────────────────────────────────────────────────────────

    /// Randomly place houses, offices, parks, and bins for `num_agents`.
    ///
    /// Role counts scale with the population:
    ///
    /// | Role    | Count               |
    /// |---------|---------------------|
    /// | houses  | `max(5, n / 10)`    |
    /// | offices | `max(1, n / 50)`    |
    /// | parks   | `max(2, n / 20)`    |
    ///
    /// Each house, park, and office (in that order) then gets at most one
    /// bin on a random free orthogonal neighbour.  Places with no free
    /// neighbour get no bin.
    pub fn generate(
        num_agents: usize,
        width:      u32,
        height:     u32,
        rng:        &mut SimRng,
    ) -> SpatialResult<MapLayout> {
        if width == 0 || height == 0 {
            return Err(SpatialError::EmptyGrid);
        }

        let num_houses  = (num_agents / 10).max(5);
        let num_offices = (num_agents / 50).max(1);
        let num_parks   = (num_agents / 20).max(2);
        let needed      = num_houses + num_offices + num_parks;

        let mut cells: Vec<GridPos> = (0..width)
            .flat_map(|x| (0..height).map(move |y| GridPos::new(x, y)))
            .collect();
        if cells.len() < needed {
            return Err(SpatialError::GridTooSmall { needed, available: cells.len() });
        }
        rng.shuffle(&mut cells);

        let mut take = |n: usize| -> Vec<GridPos> {
            (0..n).filter_map(|_| cells.pop()).collect()
        };
        let houses  = take(num_houses);
        let offices = take(num_offices);
        let parks   = take(num_parks);

        let mut occupied: FxHashSet<GridPos> = houses
            .iter()
            .chain(&offices)
            .chain(&parks)
            .copied()
            .collect();

        let mut bins = Vec::new();
        for &place in houses.iter().chain(&parks).chain(&offices) {
            let free: Vec<GridPos> = orthogonal(place, width, height)
                .filter(|p| !occupied.contains(p))
                .collect();
            if let Some(&bin) = rng.choose(&free) {
                bins.push(bin);
                occupied.insert(bin);
            }
        }

        Ok(MapLayout { width, height, houses, offices, parks, bins })
    }
}

/// In-bounds orthogonal neighbours in the fixed order W, E, N, S.
pub(crate) fn orthogonal(pos: GridPos, width: u32, height: u32) -> impl Iterator<Item = GridPos> {
    const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = pos.x as i64 + dx;
        let y = pos.y as i64 + dy;
        (x >= 0 && y >= 0 && x < width as i64 && y < height as i64)
            .then(|| GridPos::new(x as u32, y as u32))
    })
}
