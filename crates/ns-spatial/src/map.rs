//! The static grid map.
//!
//! # Data layout
//!
//! Roles are stored densely, one [`CellRole`] per cell in row-major order
//! (`y * width + x`), so role lookups on the pathfinding hot path are a
//! single indexed load.  The ordered role lists from the [`MapLayout`] are
//! kept alongside for iteration and tie-breaking.
//!
//! The map never changes during a run.  Passability also depends on the
//! dynamic [`TrashField`], which is why [`GridMap::is_passable`] takes it as
//! an argument instead of owning it.

use ns_core::GridPos;

use crate::layout::{orthogonal, MapLayout};
use crate::{SpatialResult, TrashField};

/// Cells holding more than this many trash units block movement.
pub const OBSTACLE_THRESHOLD: u32 = 3;

/// What a cell is used for.  Every cell has exactly one role.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellRole {
    #[default]
    Street,
    House,
    Office,
    Park,
    Bin,
}

impl CellRole {
    /// Houses and offices are private property: nobody litters there.
    #[inline]
    pub fn forbids_littering(self) -> bool {
        matches!(self, CellRole::House | CellRole::Office)
    }

    /// Houses, offices, and parks are valid trip endpoints.
    #[inline]
    pub fn is_destination(self) -> bool {
        matches!(self, CellRole::House | CellRole::Office | CellRole::Park)
    }
}

/// Validated, immutable map: dimensions plus role assignments.
///
/// Construct with [`GridMap::new`], which rejects out-of-bounds and
/// overlapping role positions.
#[derive(Clone, Debug)]
pub struct GridMap {
    layout: MapLayout,
    roles:  Vec<CellRole>,
}

impl GridMap {
    /// Validate `layout` and build the dense role index.
    pub fn new(layout: MapLayout) -> SpatialResult<Self> {
        layout.validate()?;

        let mut roles = vec![CellRole::Street; layout.cell_count()];
        let width = layout.width as usize;
        let mut assign = |cells: &[GridPos], role: CellRole| {
            for p in cells {
                roles[p.y as usize * width + p.x as usize] = role;
            }
        };
        assign(&layout.houses,  CellRole::House);
        assign(&layout.offices, CellRole::Office);
        assign(&layout.parks,   CellRole::Park);
        assign(&layout.bins,    CellRole::Bin);

        Ok(Self { layout, roles })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.layout.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.roles.len()
    }

    #[inline]
    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x < self.layout.width && pos.y < self.layout.height
    }

    /// Row-major cell index.  `pos` must be in bounds.
    #[inline]
    pub fn cell_index(&self, pos: GridPos) -> usize {
        pos.y as usize * self.layout.width as usize + pos.x as usize
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    #[inline]
    pub fn cell_pos(&self, index: usize) -> GridPos {
        let w = self.layout.width as usize;
        GridPos::new((index % w) as u32, (index / w) as u32)
    }

    /// Role of `pos`; out-of-bounds positions read as `Street`.
    #[inline]
    pub fn role(&self, pos: GridPos) -> CellRole {
        if self.in_bounds(pos) {
            self.roles[self.cell_index(pos)]
        } else {
            CellRole::Street
        }
    }

    #[inline]
    pub fn is_bin(&self, pos: GridPos) -> bool {
        self.role(pos) == CellRole::Bin
    }

    /// The four orthogonal in-bounds neighbours of `pos`.  No diagonals, no
    /// wraparound.
    pub fn neighbors(&self, pos: GridPos) -> impl Iterator<Item = GridPos> {
        orthogonal(pos, self.layout.width, self.layout.height)
    }

    /// A bin cell is always passable; any other cell is passable while it
    /// holds at most [`OBSTACLE_THRESHOLD`] trash units.
    #[inline]
    pub fn is_passable(&self, pos: GridPos, trash: &TrashField) -> bool {
        self.is_bin(pos) || trash.count(pos) <= OBSTACLE_THRESHOLD
    }

    pub fn houses(&self) -> &[GridPos] {
        &self.layout.houses
    }

    pub fn offices(&self) -> &[GridPos] {
        &self.layout.offices
    }

    pub fn parks(&self) -> &[GridPos] {
        &self.layout.parks
    }

    pub fn bins(&self) -> &[GridPos] {
        &self.layout.bins
    }

    /// All trip endpoints in house, office, park order.
    pub fn destinations(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.layout
            .houses
            .iter()
            .chain(&self.layout.offices)
            .chain(&self.layout.parks)
            .copied()
    }
}
