//! Unit tests for ns-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TripId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TripId(3) > TripId(2));
    }

    #[test]
    fn trip_id_starts_at_zero_and_increments() {
        assert_eq!(TripId::default(), TripId(0));
        assert_eq!(TripId(0).next(), TripId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid {
    use crate::GridPos;

    #[test]
    fn manhattan_is_symmetric() {
        let a = GridPos::new(1, 5);
        let b = GridPos::new(4, 1);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn within_radius_is_inclusive() {
        let a = GridPos::new(2, 2);
        assert!(a.within(GridPos::new(3, 2), 1));
        assert!(!a.within(GridPos::new(3, 3), 1));
        assert!(a.within(a, 0));
    }

    #[test]
    fn from_tuple_and_display() {
        let p: GridPos = (3, 9).into();
        assert_eq!(p, GridPos::new(3, 9));
        assert_eq!(p.to_string(), "(3, 9)");
    }
}

#[cfg(test)]
mod method {
    use crate::SanctionMethod;

    #[test]
    fn names_round_trip_through_from_str() {
        for m in SanctionMethod::ALL {
            assert_eq!(m.as_str().parse::<SanctionMethod>().unwrap(), m);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("hybrid".parse::<SanctionMethod>().unwrap(), SanctionMethod::Hybrid);
        assert_eq!(
            " centralised-TS ".parse::<SanctionMethod>().unwrap(),
            SanctionMethod::CentralisedTs
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("Anarchy".parse::<SanctionMethod>().is_err());
    }

    #[test]
    fn peer_sanctions() {
        assert!(SanctionMethod::Decentralised.allows_peer_sanctions());
        assert!(SanctionMethod::Hybrid.allows_peer_sanctions());
        assert!(!SanctionMethod::CentralisedEnd.allows_peer_sanctions());
        assert!(!SanctionMethod::CentralisedTs.allows_peer_sanctions());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick::ZERO + 1, Tick(1));
    }

    #[test]
    fn previous_tick() {
        assert_eq!(Tick(0).previous(), None);
        assert_eq!(Tick(4).previous(), Some(Tick(3)));
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.end_tick(), Tick(400));
    }

    #[test]
    fn b_out_of_range_rejected() {
        let cfg = SimConfig { hybrid_b: 1.5, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { hybrid_b: -0.1, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SimConfig { ts_interval: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn agent_rng_deterministic() {
        let mut a = AgentRng::new(99, AgentId(5));
        let mut b = AgentRng::new(99, AgentId(5));
        for _ in 0..100 {
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut a = AgentRng::new(99, AgentId(0));
        let mut b = AgentRng::new(99, AgentId(1));
        let va: Vec<f64> = (0..10).map(|_| a.unit()).collect();
        let vb: Vec<f64> = (0..10).map(|_| b.unit()).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn unit_in_half_open_interval() {
        let mut r = AgentRng::new(1, AgentId(0));
        for _ in 0..1_000 {
            let u = r.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut r = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(r.choose(&empty).is_none());
        assert_eq!(r.choose(&[7]), Some(&7));
    }

    #[test]
    fn sim_rng_child_is_deterministic() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let mut ca = a.child(3);
        let mut cb = b.child(3);
        assert_eq!(ca.unit().to_bits(), cb.unit().to_bits());
    }

    #[test]
    fn sim_rng_shuffle_keeps_elements() {
        let mut r = SimRng::new(7);
        let mut v: Vec<u32> = (0..20).collect();
        r.shuffle(&mut v);
        v.sort_unstable();
        assert_eq!(v, (0..20).collect::<Vec<_>>());
    }
}
