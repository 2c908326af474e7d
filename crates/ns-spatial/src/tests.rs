//! Unit tests for ns-spatial.
//!
//! All tests use hand-built layouts so results do not depend on the
//! generator.

#[cfg(test)]
mod helpers {
    use ns_core::{AgentId, AgentRng, GridPos};

    use crate::{GridMap, MapLayout};

    pub fn p(x: u32, y: u32) -> GridPos {
        GridPos::new(x, y)
    }

    pub fn rng() -> AgentRng {
        AgentRng::new(7, AgentId(0))
    }

    /// An open `w × h` grid with no roles at all.
    pub fn open_map(w: u32, h: u32) -> GridMap {
        GridMap::new(MapLayout::new(w, h)).unwrap()
    }

    /// 5×5 grid with a single bin in the centre.
    pub fn centre_bin_map() -> GridMap {
        GridMap::new(MapLayout::new(5, 5).with_bins([p(2, 2)])).unwrap()
    }

    /// Every cell of `route` is a single orthogonal step from the previous.
    pub fn assert_contiguous(from: GridPos, cells: &[GridPos]) {
        let mut prev = from;
        for &c in cells {
            assert_eq!(prev.manhattan(c), 1, "jump from {prev} to {c}");
            prev = c;
        }
    }
}

// ── Layout & map ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use ns_core::SimRng;
    use rustc_hash::FxHashSet;

    use super::helpers::p;
    use crate::{CellRole, GridMap, MapLayout, SpatialError};

    #[test]
    fn roles_are_indexed() {
        let layout = MapLayout::new(4, 3)
            .with_houses([p(0, 0)])
            .with_offices([p(3, 2)])
            .with_parks([p(1, 1)])
            .with_bins([p(2, 1)]);
        let map = GridMap::new(layout).unwrap();
        assert_eq!(map.role(p(0, 0)), CellRole::House);
        assert_eq!(map.role(p(3, 2)), CellRole::Office);
        assert_eq!(map.role(p(1, 1)), CellRole::Park);
        assert_eq!(map.role(p(2, 1)), CellRole::Bin);
        assert_eq!(map.role(p(2, 2)), CellRole::Street);
        assert!(map.is_bin(p(2, 1)));
        assert_eq!(map.cell_count(), 12);
    }

    #[test]
    fn littering_rules_by_role() {
        assert!(CellRole::House.forbids_littering());
        assert!(CellRole::Office.forbids_littering());
        assert!(!CellRole::Park.forbids_littering());
        assert!(!CellRole::Street.forbids_littering());
        assert!(CellRole::Park.is_destination());
        assert!(!CellRole::Bin.is_destination());
    }

    #[test]
    fn cell_index_roundtrip() {
        let map = super::helpers::open_map(7, 4);
        for i in 0..map.cell_count() {
            assert_eq!(map.cell_index(map.cell_pos(i)), i);
        }
    }

    #[test]
    fn out_of_bounds_rejected() {
        let layout = MapLayout::new(3, 3).with_houses([p(3, 0)]);
        assert!(matches!(GridMap::new(layout), Err(SpatialError::OutOfBounds { .. })));
    }

    #[test]
    fn overlapping_roles_rejected() {
        let layout = MapLayout::new(3, 3).with_houses([p(1, 1)]).with_bins([p(1, 1)]);
        assert!(matches!(
            GridMap::new(layout),
            Err(SpatialError::DuplicatePosition(pos)) if pos == p(1, 1)
        ));
    }

    #[test]
    fn empty_grid_rejected() {
        assert!(matches!(GridMap::new(MapLayout::new(0, 4)), Err(SpatialError::EmptyGrid)));
    }

    #[test]
    fn destinations_in_house_office_park_order() {
        let layout = MapLayout::new(5, 1)
            .with_parks([p(4, 0)])
            .with_offices([p(2, 0)])
            .with_houses([p(0, 0)]);
        let map = GridMap::new(layout).unwrap();
        let d: Vec<_> = map.destinations().collect();
        assert_eq!(d, vec![p(0, 0), p(2, 0), p(4, 0)]);
    }

    #[test]
    fn generate_counts_scale_with_agents() {
        let mut rng = SimRng::new(44);
        let layout = MapLayout::generate(120, 40, 40, &mut rng).unwrap();
        assert_eq!(layout.houses.len(), 12);
        assert_eq!(layout.offices.len(), 2);
        assert_eq!(layout.parks.len(), 6);
        assert!(!layout.bins.is_empty());
        assert!(layout.bins.len() <= 20);
    }

    #[test]
    fn generate_minimums_for_small_population() {
        let mut rng = SimRng::new(1);
        let layout = MapLayout::generate(3, 20, 20, &mut rng).unwrap();
        assert_eq!(layout.houses.len(), 5);
        assert_eq!(layout.offices.len(), 1);
        assert_eq!(layout.parks.len(), 2);
    }

    #[test]
    fn generated_layout_is_valid_and_bins_are_adjacent() {
        let mut rng = SimRng::new(9);
        let layout = MapLayout::generate(30, 20, 20, &mut rng).unwrap();
        layout.validate().unwrap();

        let places: FxHashSet<_> = layout
            .houses
            .iter()
            .chain(&layout.offices)
            .chain(&layout.parks)
            .copied()
            .collect();
        for bin in &layout.bins {
            assert!(
                places.iter().any(|pl| pl.manhattan(*bin) == 1),
                "bin {bin} has no adjacent place"
            );
        }
    }

    #[test]
    fn generate_is_deterministic() {
        let a = MapLayout::generate(10, 20, 20, &mut SimRng::new(44)).unwrap();
        let b = MapLayout::generate(10, 20, 20, &mut SimRng::new(44)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_rejects_tiny_grid() {
        let mut rng = SimRng::new(0);
        assert!(matches!(
            MapLayout::generate(10, 2, 2, &mut rng),
            Err(SpatialError::GridTooSmall { needed: 8, available: 4 })
        ));
    }
}

// ── Neighbourhood & passability ───────────────────────────────────────────────

#[cfg(test)]
mod passability {
    use proptest::prelude::*;

    use super::helpers::{centre_bin_map, open_map, p};
    use crate::{TrashField, OBSTACLE_THRESHOLD};

    #[test]
    fn corner_has_two_neighbours() {
        let map = open_map(4, 4);
        let n: Vec<_> = map.neighbors(p(0, 0)).collect();
        assert_eq!(n, vec![p(1, 0), p(0, 1)]);
    }

    #[test]
    fn interior_has_four_neighbours() {
        let map = open_map(4, 4);
        let n: Vec<_> = map.neighbors(p(1, 1)).collect();
        assert_eq!(n, vec![p(0, 1), p(2, 1), p(1, 0), p(1, 2)]);
    }

    #[test]
    fn no_wraparound_on_far_edge() {
        let map = open_map(3, 3);
        let n: Vec<_> = map.neighbors(p(2, 2)).collect();
        assert_eq!(n, vec![p(1, 2), p(2, 1)]);
    }

    #[test]
    fn threshold_blocks_at_four() {
        let map = open_map(3, 3);
        let mut trash = TrashField::new();
        for _ in 0..OBSTACLE_THRESHOLD {
            trash.add(p(1, 1));
            assert!(map.is_passable(p(1, 1), &trash));
        }
        trash.add(p(1, 1));
        assert!(!map.is_passable(p(1, 1), &trash));
        trash.remove_one(p(1, 1));
        assert!(map.is_passable(p(1, 1), &trash));
    }

    #[test]
    fn bin_is_always_passable() {
        let map = centre_bin_map();
        let mut trash = TrashField::new();
        trash.set(p(2, 2), 50);
        assert!(map.is_passable(p(2, 2), &trash));
    }

    #[test]
    fn surrounded_bin_blocks_its_neighbours_only() {
        let map = centre_bin_map();
        let mut trash = TrashField::new();
        for n in map.neighbors(p(2, 2)) {
            trash.set(n, 5);
        }
        trash.set(p(2, 2), 5);
        for n in map.neighbors(p(2, 2)) {
            assert!(!map.is_passable(n, &trash));
        }
        assert!(map.is_passable(p(2, 2), &trash));
        assert!(map.is_passable(p(0, 0), &trash));
    }

    proptest! {
        #[test]
        fn passable_iff_at_most_three(count in 0u32..20) {
            let map = open_map(2, 2);
            let mut trash = TrashField::new();
            trash.set(p(1, 0), count);
            prop_assert_eq!(map.is_passable(p(1, 0), &trash), count <= 3);
        }

        #[test]
        fn add_then_remove_restores_passability(start in 0u32..4) {
            let map = open_map(2, 2);
            let mut trash = TrashField::new();
            trash.set(p(0, 1), start);
            let before = map.is_passable(p(0, 1), &trash);
            for _ in 0..(4 - start) {
                trash.add(p(0, 1));
            }
            prop_assert!(!map.is_passable(p(0, 1), &trash));
            for _ in 0..(4 - start) {
                trash.remove_one(p(0, 1));
            }
            prop_assert_eq!(map.is_passable(p(0, 1), &trash), before);
        }
    }
}

// ── TrashField ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trash {
    use super::helpers::p;
    use crate::TrashField;

    #[test]
    fn absent_cells_read_zero() {
        let t = TrashField::new();
        assert_eq!(t.count(p(3, 3)), 0);
        assert!(t.is_clean());
    }

    #[test]
    fn keys_survive_cleanup() {
        let mut t = TrashField::new();
        t.add(p(1, 1));
        assert!(t.remove_one(p(1, 1)));
        assert_eq!(t.count(p(1, 1)), 0);
        assert_eq!(t.tracked_cells(), 1);
        assert!(t.is_clean());
    }

    #[test]
    fn remove_from_clean_cell_is_noop() {
        let mut t = TrashField::new();
        assert!(!t.remove_one(p(0, 0)));
        assert_eq!(t.count(p(0, 0)), 0);
    }

    #[test]
    fn clean_cell_count() {
        let mut t = TrashField::new();
        t.add(p(0, 0));
        t.add(p(0, 0));
        t.add(p(2, 1));
        t.add(p(1, 1));
        t.remove_one(p(1, 1));
        assert_eq!(t.clean_cells(9), 7);
        assert_eq!(t.total(), 3);
        let mut dirty: Vec<_> = t.dirty_cells().collect();
        dirty.sort();
        assert_eq!(dirty, vec![p(0, 0), p(2, 1)]);
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use proptest::prelude::*;

    use super::helpers::{assert_contiguous, centre_bin_map, open_map, p, rng};
    use crate::{AStarRouter, Router, SpatialError, TrashField};

    #[test]
    fn trivial_route() {
        let map = open_map(3, 3);
        let r = AStarRouter::default()
            .route(&map, &TrashField::new(), p(1, 1), p(1, 1), &mut rng())
            .unwrap();
        assert!(r.is_trivial());
        assert_eq!(r.destination(), None);
    }

    #[test]
    fn route_excludes_start_and_includes_goal() {
        let map = open_map(3, 1);
        let r = AStarRouter::default()
            .route(&map, &TrashField::new(), p(0, 0), p(2, 0), &mut rng())
            .unwrap();
        assert_eq!(r.cells, vec![p(1, 0), p(2, 0)]);
    }

    #[test]
    fn detours_around_a_wall() {
        // Column x=2 is blocked except at y=4.
        let map = open_map(5, 5);
        let mut trash = TrashField::new();
        for y in 0..4 {
            trash.set(p(2, y), 4);
        }
        let r = AStarRouter::default()
            .route(&map, &trash, p(0, 0), p(4, 0), &mut rng())
            .unwrap();
        assert_eq!(r.len(), 12);
        assert!(r.cells.contains(&p(2, 4)));
        assert_contiguous(p(0, 0), &r.cells);
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let map = open_map(5, 5);
        let mut trash = TrashField::new();
        for n in map.neighbors(p(2, 2)) {
            trash.set(n, 4);
        }
        let err = AStarRouter::default()
            .route(&map, &trash, p(0, 0), p(2, 2), &mut rng())
            .unwrap_err();
        assert!(matches!(err, SpatialError::NoRoute { .. }));
    }

    #[test]
    fn impassable_goal_is_unreachable() {
        let map = open_map(3, 3);
        let mut trash = TrashField::new();
        trash.set(p(2, 2), 4);
        assert!(AStarRouter::default()
            .route(&map, &trash, p(0, 0), p(2, 2), &mut rng())
            .is_err());
    }

    #[test]
    fn agent_must_route_around_surrounded_bin() {
        let map = centre_bin_map();
        let mut trash = TrashField::new();
        for n in map.neighbors(p(2, 2)) {
            trash.set(n, 5);
        }
        let router = AStarRouter::default();
        let r = router.route(&map, &trash, p(0, 2), p(4, 2), &mut rng()).unwrap();
        assert!(r.len() > p(0, 2).manhattan(p(4, 2)) as usize);
        for c in &r.cells {
            assert!(map.is_passable(*c, &trash), "{c} is blocked");
        }
        assert!(!r.cells.contains(&p(2, 2)));
        // The bin itself is sealed off.
        assert!(router.route(&map, &trash, p(0, 0), p(2, 2), &mut rng()).is_err());
    }

    #[test]
    fn same_seed_same_route() {
        let map = open_map(8, 8);
        let trash = TrashField::new();
        let router = AStarRouter::default();
        let a = router.route(&map, &trash, p(0, 0), p(7, 7), &mut rng()).unwrap();
        let b = router.route(&map, &trash, p(0, 0), p(7, 7), &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn deterministic_router_has_no_jitter() {
        assert_eq!(AStarRouter::deterministic().jitter, 0.0);
        assert_eq!(AStarRouter::default().jitter, AStarRouter::DEFAULT_JITTER);
    }

    proptest! {
        #[test]
        fn open_grid_route_is_manhattan(
            w in 1u32..12, h in 1u32..12,
            ax in 0u32..12, ay in 0u32..12,
            bx in 0u32..12, by in 0u32..12,
            seed in any::<u64>(),
        ) {
            let (a, b) = (p(ax % w, ay % h), p(bx % w, by % h));
            let map = open_map(w, h);
            let mut r = ns_core::AgentRng::new(seed, ns_core::AgentId(0));
            let route = AStarRouter::default()
                .route(&map, &TrashField::new(), a, b, &mut r)
                .unwrap();
            prop_assert_eq!(route.len(), a.manhattan(b) as usize);
            if a != b {
                prop_assert_eq!(route.destination(), Some(b));
            }
            assert_contiguous(a, &route.cells);
        }
    }
}

// ── Planning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use super::helpers::{assert_contiguous, open_map, p, rng};
    use crate::{
        nearest, nearest_bin, plan_direct, plan_via_bin, AStarRouter, GridMap, MapLayout,
        PlannedRoute, TrashField,
    };

    fn two_bin_map() -> GridMap {
        GridMap::new(MapLayout::new(7, 3).with_bins([p(1, 2), p(5, 2)])).unwrap()
    }

    #[test]
    fn nearest_bin_by_manhattan() {
        let map = two_bin_map();
        assert_eq!(nearest_bin(&map, p(6, 0)), Some(p(5, 2)));
        assert_eq!(nearest_bin(&map, p(0, 0)), Some(p(1, 2)));
    }

    #[test]
    fn nearest_tie_goes_to_first() {
        let map = two_bin_map();
        // (3, 2) is 2 away from both bins.
        assert_eq!(nearest_bin(&map, p(3, 2)), Some(p(1, 2)));
        assert_eq!(nearest([p(2, 0), p(0, 2)], p(0, 0)), Some(p(2, 0)));
        assert_eq!(nearest(std::iter::empty::<ns_core::GridPos>(), p(0, 0)), None);
    }

    #[test]
    fn no_bins_means_no_nearest() {
        assert_eq!(nearest_bin(&open_map(3, 3), p(0, 0)), None);
    }

    #[test]
    fn direct_plan() {
        let map = open_map(4, 1);
        let plan = plan_direct(&AStarRouter::default(), &map, &TrashField::new(), p(0, 0), p(3, 0), &mut rng());
        assert_eq!(plan.kind(), "direct");
        assert_eq!(plan.into_route().unwrap().len(), 3);
    }

    #[test]
    fn via_bin_passes_through_bin_once() {
        let map = two_bin_map();
        let plan = plan_via_bin(&AStarRouter::default(), &map, &TrashField::new(), p(6, 0), p(6, 1), &mut rng());
        let (bin, route) = match plan {
            PlannedRoute::ViaBin { bin, route } => (bin, route),
            other => panic!("expected via-bin plan, got {other:?}"),
        };
        assert_eq!(bin, p(5, 2));
        // 3 steps to the bin, 2 steps back up to (6, 1).
        assert_eq!(route.len(), 5);
        assert_eq!(route.cells.iter().filter(|&&c| c == bin).count(), 1);
        assert_eq!(route.destination(), Some(p(6, 1)));
        assert_contiguous(p(6, 0), &route.cells);
    }

    #[test]
    fn via_bin_starting_on_bin() {
        let map = two_bin_map();
        let plan = plan_via_bin(&AStarRouter::default(), &map, &TrashField::new(), p(1, 2), p(1, 0), &mut rng());
        let route = plan.into_route().unwrap();
        assert_eq!(route.cells, vec![p(1, 1), p(1, 0)]);
    }

    #[test]
    fn via_bin_without_bins_falls_back_to_direct() {
        let map = open_map(3, 3);
        let plan = plan_via_bin(&AStarRouter::default(), &map, &TrashField::new(), p(0, 0), p(2, 2), &mut rng());
        assert!(matches!(plan, PlannedRoute::Direct(_)));
    }

    #[test]
    fn unreachable_bin_falls_back_to_direct() {
        let map = GridMap::new(MapLayout::new(5, 5).with_bins([p(4, 4)])).unwrap();
        let mut trash = TrashField::new();
        trash.set(p(3, 4), 4);
        trash.set(p(4, 3), 4);
        let plan = plan_via_bin(&AStarRouter::default(), &map, &trash, p(0, 0), p(2, 0), &mut rng());
        assert!(matches!(plan, PlannedRoute::Direct(ref r) if r.len() == 2));
    }

    #[test]
    fn unreachable_destination_is_blocked() {
        let map = two_bin_map();
        let mut trash = TrashField::new();
        // Seal off (3, 0).
        trash.set(p(2, 0), 4);
        trash.set(p(4, 0), 4);
        trash.set(p(3, 1), 4);
        let router = AStarRouter::default();
        let via = plan_via_bin(&router, &map, &trash, p(6, 2), p(3, 0), &mut rng());
        assert!(via.is_blocked());
        assert!(via.into_route().is_none());
        let direct = plan_direct(&router, &map, &trash, p(6, 2), p(3, 0), &mut rng());
        assert!(direct.is_blocked());
    }
}
