//! Unit tests for vn-schedule.

use vn_core::{AgentId, LocationId, RandomSource, SimRng, Tick};

use crate::{DiversionPolicy, ScheduleError, SelectionTier, SelectorConfig, TickScheduler};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Replays a fixed list of unit samples, cycling when exhausted, and counts
/// how many were drawn.
struct Script {
    values: Vec<f64>,
    drawn:  usize,
}

impl Script {
    fn new(values: &[f64]) -> Self {
        Self { values: values.to_vec(), drawn: 0 }
    }
}

impl RandomSource for Script {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.drawn % self.values.len()];
        self.drawn += 1;
        v
    }
}

fn agents(n: u32) -> Vec<AgentId> {
    (0..n).map(AgentId).collect()
}

fn scheduler() -> TickScheduler {
    TickScheduler::new(SelectorConfig::default()).unwrap()
}

// ── SelectionTier / SelectorConfig ────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn window_rounds_up_and_clamps() {
        assert_eq!(SelectionTier::new(1, 0.5).window(5), 3);
        assert_eq!(SelectionTier::new(1, 0.01).window(3), 1);
        assert_eq!(SelectionTier::new(1, 1.0).window(7), 7);
        assert_eq!(SelectionTier::new(1, 0.25).window(1), 1);
    }

    #[test]
    fn default_is_valid() {
        let config = SelectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tiers.len(), 3);
        assert_eq!(config.inclusion_probability, 0.7);
    }

    #[test]
    fn rejects_bad_configs() {
        let zero = SelectorConfig { tiers: vec![SelectionTier::new(0, 1.0)], ..Default::default() };
        assert!(matches!(zero.validate(), Err(ScheduleError::NoTiers)));

        let empty = SelectorConfig { tiers: vec![], ..Default::default() };
        assert!(matches!(TickScheduler::new(empty), Err(ScheduleError::NoTiers)));

        let share = SelectorConfig { tiers: vec![SelectionTier::new(1, 0.0)], ..Default::default() };
        assert!(matches!(share.validate(), Err(ScheduleError::BadShare(_))));

        let prob = SelectorConfig { inclusion_probability: 1.5, ..Default::default() };
        assert!(matches!(prob.validate(), Err(ScheduleError::BadProbability(_))));
    }
}

// ── TickScheduler ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod selector {
    use super::*;

    #[test]
    fn empty_roster_still_advances_clock() {
        let mut s = scheduler();
        let mut rng = Script::new(&[0.0]);
        assert!(s.advance_tick(&[], &mut rng).is_empty());
        assert!(s.advance_tick(&[], &mut rng).is_empty());
        assert_eq!(s.current_tick(), Tick(2));
        assert_eq!(rng.drawn, 0);
    }

    #[test]
    fn full_window_all_included_is_rotation() {
        let mut s = scheduler();
        // 0.0 picks the first tier (whole roster) and passes every inclusion.
        let mut rng = Script::new(&[0.0]);
        let roster = agents(4);

        let first = s.advance_tick(&roster, &mut rng);
        assert_eq!(first, vec![AgentId(1), AgentId(2), AgentId(3), AgentId(0)]);
    }

    #[test]
    fn every_agent_heads_rotation_once_per_cycle() {
        let mut s = scheduler();
        let mut rng = Script::new(&[0.0]);
        let roster = agents(5);

        let mut heads: Vec<AgentId> =
            (0..5).map(|_| s.advance_tick(&roster, &mut rng)[0]).collect();
        heads.sort();
        assert_eq!(heads, roster);
    }

    #[test]
    fn all_rejected_falls_back_to_head() {
        let mut s = scheduler();
        // Tier draw 0.05 → whole roster; then four inclusion draws all fail.
        let mut rng = Script::new(&[0.05, 0.99, 0.99, 0.99, 0.99]);
        let roster = agents(4);

        let picked = s.advance_tick(&roster, &mut rng);
        assert_eq!(picked, vec![AgentId(1)]);
        assert_eq!(rng.drawn, 5);
    }

    #[test]
    fn quarter_tier_limits_window() {
        let mut s = scheduler();
        // 0.9 lands in the (6, 0.25) tier: window of 2 out of 8.
        let mut rng = Script::new(&[0.9, 0.0, 0.0]);
        let roster = agents(8);

        let picked = s.advance_tick(&roster, &mut rng);
        assert_eq!(picked, vec![AgentId(1), AgentId(2)]);
        assert_eq!(rng.drawn, 3);
    }

    #[test]
    fn inclusion_filter_keeps_rotated_order() {
        let mut s = scheduler();
        // Whole roster; candidates 2 and 4 of the rotation are rejected.
        let mut rng = Script::new(&[0.0, 0.1, 0.9, 0.1, 0.9]);
        let roster = agents(4);

        let picked = s.advance_tick(&roster, &mut rng);
        assert_eq!(picked, vec![AgentId(1), AgentId(3)]);
    }

    #[test]
    fn seeded_runs_are_reproducible_and_duplicate_free() {
        let roster = agents(7);
        let run = |seed| {
            let mut s = scheduler();
            let mut rng = SimRng::new(seed);
            (0..50).map(|_| s.advance_tick(&roster, &mut rng)).collect::<Vec<_>>()
        };

        let a = run(11);
        assert_eq!(a, run(11));
        for picked in &a {
            assert!(!picked.is_empty() && picked.len() <= roster.len());
            let mut dedup = picked.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), picked.len());
        }
    }
}

// ── DiversionPolicy ───────────────────────────────────────────────────────────

#[cfg(test)]
mod diversion {
    use super::*;

    fn policy() -> DiversionPolicy {
        DiversionPolicy::new(6, 0.5, LocationId(3)).unwrap()
    }

    #[test]
    fn cooldown_boundary() {
        let p = policy();
        let mut rng = Script::new(&[0.0]);
        assert!(!p.should_divert(Tick(4), Tick(9), &mut rng));
        assert!(p.should_divert(Tick(4), Tick(10), &mut rng));
    }

    #[test]
    fn cooling_agents_draw_nothing() {
        let p = policy();
        let mut rng = Script::new(&[0.0]);
        p.should_divert(Tick(4), Tick(5), &mut rng);
        assert_eq!(rng.drawn, 0);
    }

    #[test]
    fn probability_gate_applies_after_cooldown() {
        let p = policy();
        let mut rng = Script::new(&[0.75]);
        assert!(!p.should_divert(Tick(0), Tick(100), &mut rng));
        assert_eq!(rng.drawn, 1);
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(matches!(
            DiversionPolicy::new(6, -0.1, LocationId(0)),
            Err(ScheduleError::BadProbability(_))
        ));
    }
}
