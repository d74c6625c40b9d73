//! Unit tests for vn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, LocationId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimConfig, Tick, TickClock};

    #[test]
    fn tick_since_saturates() {
        assert_eq!(Tick(10).since(Tick(4)), 6);
        assert_eq!(Tick(4).since(Tick(10)), 0);
        assert_eq!(Tick(3) + 2, Tick(5));
    }

    #[test]
    fn clock_starts_at_zero_and_advances_by_one() {
        let mut clock = TickClock::new();
        assert_eq!(clock.current(), Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert_eq!(clock.current(), Tick(2));
    }

    #[test]
    fn display() {
        let mut clock = TickClock::new();
        clock.advance();
        assert_eq!(clock.to_string(), "T1");
    }

    #[test]
    fn end_tick_matches_budget() {
        let config = SimConfig { seed: 1, total_ticks: 12 };
        assert_eq!(config.end_tick(), Tick(12));
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, SimRng};

    /// Always returns the same unit sample.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[test]
    fn unit_in_range() {
        let mut rng = SimRng::new(3);
        for _ in 0..1_000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(5);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.chance(7.5));
        assert!(!rng.chance(-1.0));
    }

    #[test]
    fn default_chance_uses_unit() {
        assert!(Fixed(0.2).chance(0.5));
        assert!(!Fixed(0.7).chance(0.5));
    }

    #[test]
    fn default_pick_weighted_walks_cumulative_weights() {
        // total = 10; 0.05 * 10 = 0.5 → first tier.
        assert_eq!(Fixed(0.05).pick_weighted(&[1, 3, 6]), Some(0));
        // 0.3 * 10 = 3.0 → second tier (cumulative 1, 4).
        assert_eq!(Fixed(0.3).pick_weighted(&[1, 3, 6]), Some(1));
        // 0.95 * 10 = 9.5 → third tier.
        assert_eq!(Fixed(0.95).pick_weighted(&[1, 3, 6]), Some(2));
    }

    #[test]
    fn pick_weighted_skips_zero_weights() {
        assert_eq!(Fixed(0.0).pick_weighted(&[0, 5]), Some(1));
        assert_eq!(Fixed(0.5).pick_weighted(&[0, 0]), None);
        assert_eq!(Fixed(0.5).pick_weighted(&[]), None);
    }

    #[test]
    fn sim_rng_pick_weighted_never_picks_zero_weight() {
        let mut rng = SimRng::new(11);
        for _ in 0..500 {
            let i = rng.pick_weighted(&[2, 0, 5]).unwrap();
            assert_ne!(i, 1);
        }
        assert_eq!(rng.pick_weighted(&[0, 0, 0]), None);
    }

    #[test]
    fn child_streams_are_deterministic() {
        let mut a = SimRng::new(8).child(1);
        let mut b = SimRng::new(8).child(1);
        assert_eq!(a.unit(), b.unit());
    }
}
